// src/simulation/mod.rs

//! The protocol-simulation core: trials, sifting, error rates and their
//! aggregation over many repetitions.

mod error_rate;
mod results;
mod sifting;
mod stats;
mod trial;

pub use error_rate::calculate_error_rate;
pub use results::{AggregateStatistics, ConditionStatistics};
pub use sifting::{extract, sift};
pub use stats::mean_and_std_dev;
pub use trial::{TrialRecord, run_trial, simulate_trial};

use crate::core::constants::qkd_constants::SMALL_TRANSMISSION_LENGTH;
use crate::core::{NoiseProbability, QkdError};
use crate::entropy::EntropySource;

/// Checks the shared entry conditions of the aggregators.
pub(crate) fn validate_run(n: usize, trials: usize) -> Result<(), QkdError> {
    if n == 0 {
        return Err(QkdError::invalid("transmission length must be positive"));
    }
    if trials == 0 {
        return Err(QkdError::invalid("trial count must be positive"));
    }
    if n < SMALL_TRANSMISSION_LENGTH {
        log::warn!("transmission length {} is small; many trials will sift to nothing and report 0%", n);
    }
    Ok(())
}

/// Runs `trials` repetitions of `n`-photon exchanges with and without an
/// eavesdropper and reduces both rate series.
///
/// Each repetition runs the eavesdropped trial first, then the clean one,
/// both drawing from the same `entropy` stream.
///
/// # Returns
/// * `Ok(AggregateStatistics)` holding the raw rates and their mean/population std.
/// * `Err(QkdError::InvalidParameter)` if `n` or `trials` is zero.
pub fn run_simulation_for_n<E: EntropySource + ?Sized>(
    n: usize,
    trials: usize,
    noise: NoiseProbability,
    entropy: &mut E,
) -> Result<AggregateStatistics, QkdError> {
    validate_run(n, trials)?;
    log::debug!("running {} trials for n = {} (noise {})", trials, n, noise);

    let mut with_rates = Vec::with_capacity(trials);
    let mut without_rates = Vec::with_capacity(trials);

    for trial in 0..trials {
        let rate_with = simulate_trial(n, true, noise, entropy)?;
        let rate_without = simulate_trial(n, false, noise, entropy)?;
        log::trace!(
            "n = {} trial {}: with {:.2}%, without {:.2}%",
            n,
            trial + 1,
            rate_with,
            rate_without
        );
        with_rates.push(rate_with);
        without_rates.push(rate_without);
    }

    Ok(finish(n, with_rates, without_rates))
}

/// Parallel counterpart of [`run_simulation_for_n`].
///
/// Every trial draws from its own [`SeededEntropy`](crate::entropy::SeededEntropy)
/// seeded by [`derive_stream_seed`](crate::entropy::derive_stream_seed), so the
/// result depends only on `seed`, never on thread scheduling.
#[cfg(feature = "parallel")]
pub fn run_simulation_for_n_parallel(
    n: usize,
    trials: usize,
    noise: NoiseProbability,
    seed: u64,
) -> Result<AggregateStatistics, QkdError> {
    use crate::entropy::{SeededEntropy, derive_stream_seed};
    use rayon::prelude::*;

    validate_run(n, trials)?;
    log::debug!(
        "running {} trials for n = {} on {} threads",
        trials,
        n,
        rayon::current_num_threads()
    );

    let pairs = (0..trials)
        .into_par_iter()
        .map(|trial| {
            let mut entropy = SeededEntropy::from_seed(derive_stream_seed(seed, n, trial));
            let rate_with = simulate_trial(n, true, noise, &mut entropy)?;
            let rate_without = simulate_trial(n, false, noise, &mut entropy)?;
            Ok::<(f64, f64), QkdError>((rate_with, rate_without))
        })
        .collect::<Result<Vec<(f64, f64)>, QkdError>>()?;

    let (with_rates, without_rates): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
    Ok(finish(n, with_rates, without_rates))
}

fn finish(n: usize, with_rates: Vec<f64>, without_rates: Vec<f64>) -> AggregateStatistics {
    let stats = AggregateStatistics::new(
        n,
        ConditionStatistics::from_rates(with_rates),
        ConditionStatistics::from_rates(without_rates),
    );
    log::debug!(
        "n = {} done: with {:.2}% (std {:.2}), without {:.2}% (std {:.2})",
        n,
        stats.mean_with(),
        stats.std_with(),
        stats.mean_without(),
        stats.std_without()
    );
    stats
}
