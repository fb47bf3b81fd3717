// src/channel/measurement.rs

use crate::core::{Basis, Bit, NoiseProbability, QkdError};
use crate::entropy::EntropySource;

/// Bit a receiver records when measuring one photon.
///
/// * Matching bases: the sent bit survives with probability `1 - noise` and is
///   flipped with probability `noise` (one unit draw; flipped iff draw < noise).
/// * Mismatched bases: the outcome is a fresh uniform bit, independent of both
///   the sent bit and the noise level (one bit draw).
pub fn measure<E: EntropySource + ?Sized>(
    bit: Bit,
    sender_basis: Basis,
    receiver_basis: Basis,
    noise: NoiseProbability,
    entropy: &mut E,
) -> Bit {
    if sender_basis == receiver_basis {
        if entropy.next_unit() < noise.value() {
            bit.flip()
        } else {
            bit
        }
    } else {
        entropy.next_bit()
    }
}

/// Applies [`measure`] position by position over a whole transmission.
///
/// All three sequences describe the same photons and must share one length.
pub fn transmit<E: EntropySource + ?Sized>(
    bits: &[Bit],
    sender_bases: &[Basis],
    receiver_bases: &[Basis],
    noise: NoiseProbability,
    entropy: &mut E,
) -> Result<Vec<Bit>, QkdError> {
    ensure_same_length(bits.len(), sender_bases.len())?;
    ensure_same_length(bits.len(), receiver_bases.len())?;

    Ok(bits
        .iter()
        .zip(sender_bases.iter().zip(receiver_bases))
        .map(|(bit, (sent, received))| measure(*bit, *sent, *received, noise, &mut *entropy))
        .collect())
}

fn ensure_same_length(left: usize, right: usize) -> Result<(), QkdError> {
    if left != right {
        return Err(QkdError::LengthMismatch { left, right });
    }
    Ok(())
}
