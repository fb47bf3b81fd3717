// src/entropy/mod.rs

//! Randomness providers and the bit/basis generators built on them.
//!
//! Every random decision in a trial goes through an [`EntropySource`] passed
//! in by the caller. Production runs use [`SeededEntropy`]; tests inject
//! [`ScriptedEntropy`] to force exact outcomes.

mod scripted;
mod seeded;

pub use scripted::ScriptedEntropy;
pub use seeded::{SeededEntropy, derive_run_seed, derive_stream_seed};

use crate::core::{Basis, Bit};

/// Source of the three uniform draws the protocol consumes.
pub trait EntropySource {
    /// A uniformly random bit.
    fn next_bit(&mut self) -> Bit;

    /// A uniformly random basis.
    fn next_basis(&mut self) -> Basis;

    /// A uniform draw in `[0, 1)`, used for noise decisions.
    fn next_unit(&mut self) -> f64;
}

impl<E: EntropySource + ?Sized> EntropySource for &mut E {
    fn next_bit(&mut self) -> Bit {
        (**self).next_bit()
    }

    fn next_basis(&mut self) -> Basis {
        (**self).next_basis()
    }

    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Draws `n` independent uniform bits. `n == 0` yields an empty sequence.
pub fn random_bits<E: EntropySource + ?Sized>(n: usize, entropy: &mut E) -> Vec<Bit> {
    (0..n).map(|_| entropy.next_bit()).collect()
}

/// Draws `n` independent uniform bases. `n == 0` yields an empty sequence.
pub fn random_bases<E: EntropySource + ?Sized>(n: usize, entropy: &mut E) -> Vec<Basis> {
    (0..n).map(|_| entropy.next_basis()).collect()
}
