// src/lib.rs

//! `bb84_qber` - A statistical harness for the BB84 key distribution protocol
//!
//! The crate models one round of BB84 transmission and measurement with a
//! noisy channel and an optional intercept-resend eavesdropper, sifts the
//! bits where sender and receiver bases agree, and measures the sifted
//! error rate (QBER). Repeating that many times per transmission length
//! shows the protocol's core security property: eavesdropping is detectable
//! because it lifts the expected sifted error rate from the noise floor to
//! roughly 25%.

pub mod core;
pub mod entropy;
pub mod channel;
pub mod simulation;
pub mod experiment;
pub mod report;

// Re-export the most common types for easier top-level use
pub use crate::core::{Basis, Bit, NoiseProbability, Polarization, QkdError};
pub use entropy::{EntropySource, ScriptedEntropy, SeededEntropy, random_bases, random_bits};
pub use channel::{intercept_resend, measure};
pub use simulation::{
    AggregateStatistics,
    ConditionStatistics,
    TrialRecord,
    calculate_error_rate,
    run_simulation_for_n,
    run_trial,
    simulate_trial,
};
pub use experiment::{Experiment, ExperimentConfig, ExperimentReport};
pub use report::ReportWriter;

// Example 1: Eavesdropping shows up in the sifted error rate
// Runs the same number of trials with and without an intercept-resend
// attacker and compares the mean sifted error rates.
/// ```
/// use bb84_qber::{NoiseProbability, QkdError, SeededEntropy, run_simulation_for_n};
///
/// let mut entropy = SeededEntropy::from_seed(42);
/// let stats = run_simulation_for_n(500, 200, NoiseProbability::default(), &mut entropy)?;
///
/// println!("{}", stats);
/// // Noise floor near 2%, intercept-resend near 25%.
/// assert!(stats.mean_without() < 5.0);
/// assert!(stats.mean_with() > 20.0);
/// assert!(stats.mean_with() > stats.mean_without());
/// # Ok::<(), QkdError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Inspecting a single trial
// A scripted entropy source fixes every basis choice, so the sifted
// positions are known in advance.
/// ```
/// use bb84_qber::{Basis, NoiseProbability, QkdError, ScriptedEntropy, run_trial};
/// use Basis::{Diagonal as D, Rectilinear as R};
///
/// // Sender bases R R D D, then receiver bases R D D R.
/// let mut entropy = ScriptedEntropy::new().with_bases(vec![R, R, D, D, R, D, D, R]);
/// let record = run_trial(4, false, NoiseProbability::ZERO, &mut entropy)?;
///
/// println!("{}", record);
/// assert_eq!(record.sifted_indices(), [0, 2]);
/// assert_eq!(record.error_rate(), 0.0);
/// # Ok::<(), QkdError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
