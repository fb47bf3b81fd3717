// src/core/noise.rs

use super::constants::qkd_constants::DEFAULT_NOISE_PROBABILITY;
use super::error::QkdError;
use std::fmt;

/// Probability that a basis-matched measurement records the flipped bit.
///
/// Always within [0,1]: out-of-range and NaN inputs are rejected at
/// construction instead of being clamped, so a mistyped configuration can
/// never silently change an experiment.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct NoiseProbability(f64);

impl NoiseProbability {
    /// A noiseless channel.
    pub const ZERO: Self = Self(0.0);

    /// Validates and wraps a probability.
    pub fn new(probability: f64) -> Result<Self, QkdError> {
        if probability.is_nan() || !(0.0..=1.0).contains(&probability) {
            return Err(QkdError::invalid(format!(
                "noise probability must lie in [0, 1], got {}",
                probability
            )));
        }
        Ok(Self(probability))
    }

    /// The wrapped probability.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for NoiseProbability {
    fn default() -> Self {
        Self(DEFAULT_NOISE_PROBABILITY)
    }
}

impl TryFrom<f64> for NoiseProbability {
    type Error = QkdError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for NoiseProbability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
