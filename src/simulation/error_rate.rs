// src/simulation/error_rate.rs

use crate::core::{Bit, QkdError};

/// Fraction of positions where the two sequences disagree, in `[0, 1]`.
///
/// Two empty sequences have an error rate of 0. Sequences of different
/// length are a contract violation and are reported as `LengthMismatch`.
pub fn calculate_error_rate(seq_a: &[Bit], seq_b: &[Bit]) -> Result<f64, QkdError> {
    if seq_a.len() != seq_b.len() {
        return Err(QkdError::LengthMismatch {
            left: seq_a.len(),
            right: seq_b.len(),
        });
    }
    if seq_a.is_empty() {
        return Ok(0.0);
    }
    Ok(count_mismatches(seq_a, seq_b) as f64 / seq_a.len() as f64)
}

pub(crate) fn count_mismatches(seq_a: &[Bit], seq_b: &[Bit]) -> usize {
    seq_a.iter().zip(seq_b).filter(|(a, b)| a != b).count()
}
