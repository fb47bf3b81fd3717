// src/experiment/mod.rs

//! Runs the aggregator for every transmission length of an experiment
//! design. This is the entry point the reporting layer drives.

mod config;

pub use config::ExperimentConfig;

use crate::core::{NoiseProbability, QkdError};
use crate::entropy::{SeededEntropy, derive_run_seed};
use crate::simulation::{AggregateStatistics, run_simulation_for_n};

/// Aggregates of a whole experiment, in configured length order.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentReport {
    /// Seed the run started from; feed it back through the config to replay.
    pub seed: u64,
    /// One aggregate per configured transmission length.
    pub results: Vec<AggregateStatistics>,
}

/// A validated experiment ready to run.
#[derive(Debug, Clone)]
pub struct Experiment {
    config: ExperimentConfig,
    noise: NoiseProbability,
}

impl Experiment {
    /// Validates `config`. Nothing runs with parameters that failed validation.
    pub fn new(config: ExperimentConfig) -> Result<Self, QkdError> {
        let noise = config.validate()?;
        Ok(Self { config, noise })
    }

    /// The configuration this experiment was built from.
    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Runs every configured transmission length.
    ///
    /// Sequential runs share one entropy stream across all lengths. Parallel
    /// runs derive an independent stream per trial from the seed, the length's
    /// position in the list and the trial index, so a repeated length is
    /// still an independent sample.
    pub fn run(&self) -> Result<ExperimentReport, QkdError> {
        let mut entropy = match self.config.seed {
            Some(seed) => SeededEntropy::from_seed(seed),
            None => SeededEntropy::from_entropy(),
        };
        let seed = entropy.seed();
        log::info!(
            "starting experiment: lengths {:?}, {} trials each, noise {}, seed {}",
            self.config.transmission_lengths,
            self.config.trials,
            self.noise,
            seed
        );

        let mut results = Vec::with_capacity(self.config.transmission_lengths.len());
        for (position, &n) in self.config.transmission_lengths.iter().enumerate() {
            let stats = if self.config.parallel {
                self.run_parallel(n, derive_run_seed(seed, position))?
            } else {
                run_simulation_for_n(n, self.config.trials, self.noise, &mut entropy)?
            };
            log::info!(
                "n = {}: with eavesdropping {:.2}%, without {:.2}%",
                n,
                stats.mean_with(),
                stats.mean_without()
            );
            results.push(stats);
        }

        Ok(ExperimentReport { seed, results })
    }

    #[cfg(feature = "parallel")]
    fn run_parallel(&self, n: usize, seed: u64) -> Result<AggregateStatistics, QkdError> {
        crate::simulation::run_simulation_for_n_parallel(n, self.config.trials, self.noise, seed)
    }

    #[cfg(not(feature = "parallel"))]
    fn run_parallel(&self, _n: usize, _seed: u64) -> Result<AggregateStatistics, QkdError> {
        // validate() rejects `parallel` in this build.
        Err(QkdError::invalid("built without the `parallel` feature"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_never_builds() {
        let config = ExperimentConfig { noise_probability: -0.1, ..Default::default() };
        assert!(Experiment::new(config).is_err());
    }

    #[test]
    fn test_report_follows_length_order() -> Result<(), QkdError> {
        let config = ExperimentConfig {
            transmission_lengths: vec![30, 5, 12],
            trials: 10,
            seed: Some(4),
            ..Default::default()
        };
        let report = Experiment::new(config)?.run()?;
        assert_eq!(report.seed, 4);
        let lengths: Vec<usize> = report.results.iter().map(|r| r.transmission_length()).collect();
        assert_eq!(lengths, vec![30, 5, 12]);
        Ok(())
    }

    #[test]
    fn test_repeated_length_is_an_independent_sample() -> Result<(), QkdError> {
        let config = ExperimentConfig {
            transmission_lengths: vec![100, 100],
            trials: 50,
            seed: Some(9),
            parallel: cfg!(feature = "parallel"),
            ..Default::default()
        };
        let report = Experiment::new(config)?.run()?;
        assert_ne!(report.results[0], report.results[1]);
        Ok(())
    }

    #[test]
    fn test_unseeded_run_records_its_seed() -> Result<(), QkdError> {
        let config = ExperimentConfig {
            transmission_lengths: vec![16],
            trials: 5,
            ..Default::default()
        };
        let first = Experiment::new(config.clone())?.run()?;
        let replay = Experiment::new(ExperimentConfig { seed: Some(first.seed), ..config })?.run()?;
        assert_eq!(first.results, replay.results);
        Ok(())
    }
}
