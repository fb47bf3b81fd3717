// src/report/mod.rs

//! Reporting layer: persists per-trial rates and aggregate statistics.
//!
//! Nothing here feeds back into the simulation; it only formats the numbers
//! the core hands over.

use crate::core::QkdError;
use crate::experiment::ExperimentConfig;
use crate::simulation::AggregateStatistics;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// File name of the per-experiment summary table.
pub const SUMMARY_FILE: &str = "summary_statistics.csv";

/// File name of the configuration a run actually used, seed included.
pub const CONFIG_FILE: &str = "experiment_config.toml";

const SUMMARY_HEADER: &str = "n,Avg_Error_With_Eavesdropping,Std_Error_With_Eavesdropping,\
Avg_Error_Without_Eavesdropping,Std_Error_Without_Eavesdropping";

/// Writes experiment output below one directory.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    /// Writer targeting `output_dir`, created on first write if missing.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into() }
    }

    /// Directory the files land in.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes the four per-trial files of one transmission length and returns their paths.
    ///
    /// * `error_rates_{condition}_n_{n}.txt` with `Trial i: x.xx%` lines.
    /// * `error_rates_{condition}_n_{n}.csv` with a `Trial,Error Rate (%)` table.
    pub fn write_trials(&self, stats: &AggregateStatistics) -> Result<Vec<PathBuf>, QkdError> {
        let n = stats.transmission_length();
        let mut written = Vec::with_capacity(4);
        for (condition, rates) in [
            ("with_eavesdropping", stats.raw_with()),
            ("without_eavesdropping", stats.raw_without()),
        ] {
            let stem = format!("error_rates_{}_n_{}", condition, n);

            let log_path = self.path_for(&format!("{}.txt", stem))?;
            write_lines(&log_path, rates.iter().enumerate().map(|(i, rate)| {
                format!("Trial {}: {:.2}%", i + 1, rate)
            }))?;
            written.push(log_path);

            let table_path = self.path_for(&format!("{}.csv", stem))?;
            write_lines(
                &table_path,
                std::iter::once("Trial,Error Rate (%)".to_string())
                    .chain(rates.iter().enumerate().map(|(i, rate)| format!("{},{}", i + 1, rate))),
            )?;
            written.push(table_path);
        }
        log::info!("wrote per-trial rates for n = {} to {}", n, self.output_dir.display());
        Ok(written)
    }

    /// Writes `summary_statistics.csv`, one row per transmission length.
    pub fn write_summary(&self, results: &[AggregateStatistics]) -> Result<PathBuf, QkdError> {
        let path = self.path_for(SUMMARY_FILE)?;
        write_lines(&path, std::iter::once(SUMMARY_HEADER.to_string()).chain(results.iter().map(summary_row)))?;
        log::info!("wrote summary of {} lengths to {}", results.len(), path.display());
        Ok(path)
    }

    /// Writes `experiment_config.toml`, loadable with [`ExperimentConfig::load`] to replay the run.
    pub fn write_config(&self, config: &ExperimentConfig) -> Result<PathBuf, QkdError> {
        let rendered = config.to_toml_string().map_err(|e| QkdError::Report { message: e.to_string() })?;
        let path = self.path_for(CONFIG_FILE)?;
        fs::write(&path, rendered).map_err(|e| QkdError::Report {
            message: format!("cannot write {}: {}", path.display(), e),
        })?;
        log::info!("wrote run configuration to {}", path.display());
        Ok(path)
    }

    /// Per-trial files for every aggregate followed by the summary table.
    pub fn write_all(&self, results: &[AggregateStatistics]) -> Result<PathBuf, QkdError> {
        for stats in results {
            self.write_trials(stats)?;
        }
        self.write_summary(results)
    }

    fn path_for(&self, file_name: &str) -> Result<PathBuf, QkdError> {
        fs::create_dir_all(&self.output_dir).map_err(|e| QkdError::Report {
            message: format!("cannot create {}: {}", self.output_dir.display(), e),
        })?;
        Ok(self.output_dir.join(file_name))
    }
}

fn summary_row(stats: &AggregateStatistics) -> String {
    format!(
        "{},{},{},{},{}",
        stats.transmission_length(),
        stats.mean_with(),
        stats.std_with(),
        stats.mean_without(),
        stats.std_without()
    )
}

fn write_lines(path: &Path, lines: impl Iterator<Item = String>) -> Result<(), QkdError> {
    let file = File::create(path).map_err(|e| QkdError::Report {
        message: format!("cannot create {}: {}", path.display(), e),
    })?;
    let mut out = BufWriter::new(file);
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::ConditionStatistics;

    fn sample() -> AggregateStatistics {
        AggregateStatistics::new(
            10,
            ConditionStatistics::from_rates(vec![25.0, 12.5]),
            ConditionStatistics::from_rates(vec![0.0, 5.0]),
        )
    }

    #[test]
    fn test_trial_files_use_one_based_lines() -> Result<(), QkdError> {
        let dir = tempfile::tempdir()?;
        let writer = ReportWriter::new(dir.path());
        let paths = writer.write_trials(&sample())?;
        assert_eq!(paths.len(), 4);

        let log = fs::read_to_string(dir.path().join("error_rates_with_eavesdropping_n_10.txt"))?;
        assert_eq!(log, "Trial 1: 25.00%\nTrial 2: 12.50%\n");

        let table = fs::read_to_string(dir.path().join("error_rates_without_eavesdropping_n_10.csv"))?;
        assert_eq!(table, "Trial,Error Rate (%)\n1,0\n2,5\n");
        Ok(())
    }

    #[test]
    fn test_summary_has_header_and_one_row_per_length() -> Result<(), QkdError> {
        let dir = tempfile::tempdir()?;
        let path = ReportWriter::new(dir.path().join("nested")).write_summary(&[sample()])?;
        let summary = fs::read_to_string(path)?;
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines[0], SUMMARY_HEADER);
        assert_eq!(lines[1], "10,18.75,6.25,2.5,2.5");
        assert_eq!(lines.len(), 2);
        Ok(())
    }

    #[test]
    fn test_written_config_replays_the_run() -> Result<(), QkdError> {
        use crate::experiment::Experiment;

        let dir = tempfile::tempdir()?;
        let config = ExperimentConfig {
            transmission_lengths: vec![20, 40],
            trials: 15,
            ..Default::default()
        };
        let first = Experiment::new(config.clone())?.run()?;

        let used = ExperimentConfig { seed: Some(first.seed), ..config };
        let path = ReportWriter::new(dir.path()).write_config(&used)?;
        assert_eq!(path, dir.path().join(CONFIG_FILE));

        let replayed = Experiment::new(ExperimentConfig::load(&path)?)?.run()?;
        assert_eq!(replayed.seed, first.seed);
        assert_eq!(replayed.results, first.results);
        Ok(())
    }
}
