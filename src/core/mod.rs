// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod error;
pub mod noise;
pub mod photon;

// Re-export public types for convenient access via `bb84_qber::core::TypeName`
pub use error::QkdError;
pub use noise::NoiseProbability;
pub use photon::{Basis, Bit, Polarization};

pub mod constants;
pub use constants::qkd_constants::{
    DEFAULT_NOISE_PROBABILITY, DEFAULT_TRANSMISSION_LENGTHS, DEFAULT_TRIALS, INTERCEPT_RESEND_QBER,
}; // Re-export
