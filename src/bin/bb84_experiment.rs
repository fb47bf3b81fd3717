//! BB84 eavesdropping experiment
//!
//! Runs the comparative experiment for every configured transmission length,
//! prints the console summary and writes the per-trial and summary reports.

use anyhow::{Context, Result};
use bb84_qber::{Experiment, ExperimentConfig, ReportWriter};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "bb84_experiment", version, about = "Measure how intercept-resend eavesdropping shifts the BB84 sifted error rate")]
struct Cli {
    /// TOML experiment configuration; flags below override its values
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Transmission lengths to simulate, comma separated
    #[arg(long, value_name = "N,...", value_delimiter = ',')]
    lengths: Option<Vec<usize>>,

    /// Trials per transmission length and condition
    #[arg(long, value_name = "N")]
    trials: Option<usize>,

    /// Probability that a basis-matched measurement flips the bit
    #[arg(long, value_name = "P")]
    noise: Option<f64>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Run trials in parallel (requires the `parallel` feature)
    #[arg(long)]
    parallel: bool,

    /// Directory for report files
    #[arg(long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Only print the console summary
    #[arg(long)]
    no_files: bool,
}

impl Cli {
    fn experiment_config(&self) -> Result<ExperimentConfig> {
        let mut config = match &self.config {
            Some(path) => ExperimentConfig::load(path)
                .with_context(|| format!("loading configuration from {}", path.display()))?,
            None => ExperimentConfig::default(),
        };
        if let Some(lengths) = &self.lengths {
            config.transmission_lengths = lengths.clone();
        }
        if let Some(trials) = self.trials {
            config.trials = trials;
        }
        if let Some(noise) = self.noise {
            config.noise_probability = noise;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.parallel |= self.parallel;
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.experiment_config()?;
    let experiment = Experiment::new(config.clone()).context("invalid experiment configuration")?;
    let report = experiment.run().context("simulation failed")?;

    for stats in &report.results {
        println!("\n{}", stats);
    }
    println!("Seed: {}", report.seed);

    if !cli.no_files {
        let writer = ReportWriter::new(&cli.output_dir);
        writer
            .write_config(&ExperimentConfig { seed: Some(report.seed), ..config })
            .with_context(|| format!("writing configuration to {}", cli.output_dir.display()))?;
        let summary = writer
            .write_all(&report.results)
            .with_context(|| format!("writing reports to {}", cli.output_dir.display()))?;
        println!("\nSummary CSV saved as '{}'", summary.display());
    }
    Ok(())
}
