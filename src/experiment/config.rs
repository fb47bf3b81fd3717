// src/experiment/config.rs

use crate::core::constants::qkd_constants::{
    DEFAULT_NOISE_PROBABILITY, DEFAULT_TRANSMISSION_LENGTHS, DEFAULT_TRIALS,
};
use crate::core::{NoiseProbability, QkdError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Design of a comparative experiment: which transmission lengths to run,
/// how many trials per length, and the channel noise floor.
///
/// Every field has a default, so a TOML file only needs the values it
/// changes:
///
/// ```toml
/// transmission_lengths = [10, 100, 1000]
/// trials = 1000
/// noise_probability = 0.02
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExperimentConfig {
    /// Photons per trial, one aggregate per entry.
    pub transmission_lengths: Vec<usize>,
    /// Repetitions per transmission length and condition.
    pub trials: usize,
    /// Probability that a basis-matched measurement flips the bit.
    pub noise_probability: f64,
    /// Seed for reproducible runs; a fresh one is drawn when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Run trials on the rayon pool (needs the `parallel` feature).
    pub parallel: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            transmission_lengths: DEFAULT_TRANSMISSION_LENGTHS.to_vec(),
            trials: DEFAULT_TRIALS,
            noise_probability: DEFAULT_NOISE_PROBABILITY,
            seed: None,
            parallel: false,
        }
    }
}

impl ExperimentConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, QkdError> {
        toml::from_str(source).map_err(|e| QkdError::Config { message: e.to_string() })
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, QkdError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| QkdError::Config {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        let config = Self::from_toml_str(&source)?;
        log::debug!("loaded experiment configuration from {}", path.display());
        Ok(config)
    }

    /// Renders the configuration as a TOML document that [`Self::from_toml_str`] reads back.
    pub fn to_toml_string(&self) -> Result<String, QkdError> {
        toml::to_string(self).map_err(|e| QkdError::Config { message: e.to_string() })
    }

    /// Checks every parameter and returns the validated noise level.
    pub fn validate(&self) -> Result<NoiseProbability, QkdError> {
        if self.transmission_lengths.is_empty() {
            return Err(QkdError::invalid("at least one transmission length is required"));
        }
        if let Some(position) = self.transmission_lengths.iter().position(|&n| n == 0) {
            return Err(QkdError::invalid(format!(
                "transmission length #{} is zero; lengths must be positive",
                position + 1
            )));
        }
        if self.trials == 0 {
            return Err(QkdError::invalid("trial count must be positive"));
        }
        if self.parallel && !cfg!(feature = "parallel") {
            return Err(QkdError::invalid(
                "parallel trials requested but the crate was built without the `parallel` feature",
            ));
        }
        NoiseProbability::new(self.noise_probability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_experiment() -> Result<(), QkdError> {
        let config = ExperimentConfig::default();
        assert_eq!(config.transmission_lengths, vec![10, 100, 1000]);
        assert_eq!(config.trials, 1000);
        assert_eq!(config.validate()?.value(), 0.02);
        Ok(())
    }

    #[test]
    fn test_partial_toml_keeps_defaults() -> Result<(), QkdError> {
        let config = ExperimentConfig::from_toml_str("trials = 50\nseed = 9\n")?;
        assert_eq!(config.trials, 50);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.transmission_lengths, vec![10, 100, 1000]);
        Ok(())
    }

    #[test]
    fn test_rendered_toml_reads_back_unchanged() -> Result<(), QkdError> {
        let config = ExperimentConfig {
            transmission_lengths: vec![16, 64],
            trials: 25,
            noise_probability: 0.05,
            seed: Some(1234),
            parallel: false,
        };
        let rendered = config.to_toml_string()?;
        assert!(rendered.contains("seed = 1234"));
        assert_eq!(ExperimentConfig::from_toml_str(&rendered)?, config);

        let unseeded = ExperimentConfig::default().to_toml_string()?;
        assert!(!unseeded.contains("seed"));
        Ok(())
    }

    #[test]
    fn test_unknown_keys_are_config_errors() {
        assert!(matches!(
            ExperimentConfig::from_toml_str("trails = 5"),
            Err(QkdError::Config { .. })
        ));
    }

    #[test]
    fn test_validation_fails_fast() {
        let bad_noise = ExperimentConfig { noise_probability: 1.5, ..Default::default() };
        let no_trials = ExperimentConfig { trials: 0, ..Default::default() };
        let zero_length = ExperimentConfig { transmission_lengths: vec![10, 0], ..Default::default() };
        let no_lengths = ExperimentConfig { transmission_lengths: vec![], ..Default::default() };
        for config in [bad_noise, no_trials, zero_length, no_lengths] {
            assert!(matches!(config.validate(), Err(QkdError::InvalidParameter { .. })), "{:?}", config);
        }
    }
}
