// src/channel/mod.rs

//! Photon transport models: the single-photon measurement and the
//! intercept-resend eavesdropper built from two of them.

mod eavesdropper;
mod measurement;

pub use eavesdropper::{Interception, intercept_resend};
pub use measurement::{measure, transmit};
