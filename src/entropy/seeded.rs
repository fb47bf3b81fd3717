// src/entropy/seeded.rs

use super::EntropySource;
use crate::core::{Basis, Bit};
use rand::SeedableRng;
use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;

/// Production randomness: a `StdRng` seeded from a recorded `u64`.
///
/// The seed is kept so any run, including one seeded from OS entropy, can be
/// replayed exactly.
#[derive(Debug)]
pub struct SeededEntropy {
    rng: StdRng,
    seed: u64,
}

impl SeededEntropy {
    /// Deterministic source for the given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Source with a freshly drawn seed.
    ///
    /// The seed keeps the top bit clear so it fits a TOML integer.
    pub fn from_entropy() -> Self {
        let seed = rand::random::<u64>() >> 1;
        log::debug!("drew fresh entropy seed {}", seed);
        Self::from_seed(seed)
    }

    /// The seed this source started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl EntropySource for SeededEntropy {
    fn next_bit(&mut self) -> Bit {
        let value: bool = StandardUniform.sample(&mut self.rng);
        Bit::from(value)
    }

    fn next_basis(&mut self) -> Basis {
        let diagonal: bool = StandardUniform.sample(&mut self.rng);
        if diagonal {
            Basis::Diagonal
        } else {
            Basis::Rectilinear
        }
    }

    fn next_unit(&mut self) -> f64 {
        StandardUniform.sample(&mut self.rng)
    }
}

/// Seed for an independent per-trial stream.
///
/// Mixes the experiment seed with the transmission length and trial index
/// through SplitMix64 so that parallel workers never share a stream.
pub fn derive_stream_seed(base: u64, transmission_length: usize, trial: usize) -> u64 {
    splitmix64(
        base ^ splitmix64(transmission_length as u64).rotate_left(17)
            ^ splitmix64((trial as u64).wrapping_add(0xA076_1D64_78BD_642F)),
    )
}

/// Base seed for the run at `position` in an experiment's length list.
///
/// Two runs of the same transmission length at different positions get
/// unrelated stream families.
pub fn derive_run_seed(base: u64, position: usize) -> u64 {
    splitmix64(base ^ splitmix64((position as u64).wrapping_add(0xE703_7ED1_A0B4_28DB)))
}

fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
