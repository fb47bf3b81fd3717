// src/simulation/trial.rs

use super::error_rate::{calculate_error_rate, count_mismatches};
use super::sifting::{extract, sift};
use crate::channel::{intercept_resend, transmit};
use crate::core::{Basis, Bit, NoiseProbability, Polarization, QkdError};
use crate::entropy::{EntropySource, random_bases, random_bits};
use std::fmt;

/// Full trace of one protocol run.
///
/// Built only by [`run_trial`], so every per-photon sequence has the same
/// length and `sifted_indices` is ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialRecord {
    sender_bits: Vec<Bit>,
    sender_bases: Vec<Basis>,
    receiver_bases: Vec<Basis>,
    receiver_bits: Vec<Bit>,
    eavesdropper_bases: Option<Vec<Basis>>,
    eavesdropper_bits: Option<Vec<Bit>>,
    sifted_indices: Vec<usize>,
    mismatches: usize,
    error_rate: f64,
}

impl TrialRecord {
    /// Number of photons transmitted.
    pub fn transmission_length(&self) -> usize {
        self.sender_bits.len()
    }

    /// Bits the sender encoded.
    pub fn sender_bits(&self) -> &[Bit] {
        &self.sender_bits
    }

    /// Bases the sender encoded in.
    pub fn sender_bases(&self) -> &[Basis] {
        &self.sender_bases
    }

    /// Bases the receiver measured in.
    pub fn receiver_bases(&self) -> &[Basis] {
        &self.receiver_bases
    }

    /// Bits the receiver recorded.
    pub fn receiver_bits(&self) -> &[Bit] {
        &self.receiver_bits
    }

    /// Bases guessed by the eavesdropper, when one was present.
    pub fn eavesdropper_bases(&self) -> Option<&[Basis]> {
        self.eavesdropper_bases.as_deref()
    }

    /// Bits the eavesdropper measured and re-sent, when one was present.
    pub fn eavesdropper_bits(&self) -> Option<&[Bit]> {
        self.eavesdropper_bits.as_deref()
    }

    /// Positions where sender and receiver bases agree, ascending.
    pub fn sifted_indices(&self) -> &[usize] {
        &self.sifted_indices
    }

    /// Sifted positions whose bits disagree.
    pub fn mismatches(&self) -> usize {
        self.mismatches
    }

    /// Sifted error rate as a percentage in `[0, 100]`.
    pub fn error_rate(&self) -> f64 {
        self.error_rate
    }

    /// Sender bits at the sifted positions.
    pub fn sifted_sender_bits(&self) -> Vec<Bit> {
        pick(&self.sender_bits, &self.sifted_indices)
    }

    /// Receiver bits at the sifted positions.
    pub fn sifted_receiver_bits(&self) -> Vec<Bit> {
        pick(&self.receiver_bits, &self.sifted_indices)
    }

    /// True when no position survived sifting.
    pub fn is_degenerate(&self) -> bool {
        self.sifted_indices.is_empty()
    }
}

fn pick(bits: &[Bit], indices: &[usize]) -> Vec<Bit> {
    indices.iter().filter_map(|&i| bits.get(i).copied()).collect()
}

impl fmt::Display for TrialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Trial: {} photons, {} sifted, {} mismatched ({:.2}%)",
            self.transmission_length(),
            self.sifted_indices.len(),
            self.mismatches,
            self.error_rate
        )?;
        let photons = self
            .sender_bits
            .iter()
            .zip(&self.sender_bases)
            .zip(self.receiver_bits.iter().zip(&self.receiver_bases))
            .enumerate();
        for (i, ((sent, sent_basis), (received, received_basis))) in photons {
            let kept = if self.sifted_indices.contains(&i) { "kept" } else { "" };
            writeln!(
                f,
                "  #{:<4} sent {} ({} {})  received {} ({})  {}",
                i,
                sent,
                sent_basis,
                Polarization::of(*sent, *sent_basis),
                received,
                received_basis,
                kept
            )?;
        }
        Ok(())
    }
}

/// Runs one BB84 exchange of `n` photons and returns its full trace.
///
/// Draw order: `n` sender bits, `n` sender bases, `n` receiver bases, then
/// (eavesdropping only) `n` eavesdropper bases, then the measurement draws
/// photon by photon, intercept hop before resend hop.
pub fn run_trial<E: EntropySource + ?Sized>(
    n: usize,
    eavesdropping: bool,
    noise: NoiseProbability,
    entropy: &mut E,
) -> Result<TrialRecord, QkdError> {
    let sender_bits = random_bits(n, entropy);
    let sender_bases = random_bases(n, entropy);
    let receiver_bases = random_bases(n, entropy);

    let (receiver_bits, eavesdropper_bases, eavesdropper_bits) = if eavesdropping {
        let interception = intercept_resend(&sender_bits, &sender_bases, &receiver_bases, noise, entropy)?;
        (
            interception.receiver_bits,
            Some(interception.eavesdropper_bases),
            Some(interception.eavesdropper_bits),
        )
    } else {
        (transmit(&sender_bits, &sender_bases, &receiver_bases, noise, entropy)?, None, None)
    };

    let sifted_indices = sift(&sender_bases, &receiver_bases)?;
    let sender_sifted = extract(&sender_bits, &sifted_indices)?;
    let receiver_sifted = extract(&receiver_bits, &sifted_indices)?;

    if sifted_indices.is_empty() {
        log::debug!("no positions survived sifting for n = {}; rate defined as 0%", n);
    }

    let error_rate = calculate_error_rate(&sender_sifted, &receiver_sifted)? * 100.0;
    let mismatches = count_mismatches(&sender_sifted, &receiver_sifted);

    Ok(TrialRecord {
        sender_bits,
        sender_bases,
        receiver_bases,
        receiver_bits,
        eavesdropper_bases,
        eavesdropper_bits,
        sifted_indices,
        mismatches,
        error_rate,
    })
}

/// Sifted error rate of one exchange, as a percentage in `[0, 100]`.
///
/// `n == 0`, or a trial where no basis matched, yields `0.0`.
pub fn simulate_trial<E: EntropySource + ?Sized>(
    n: usize,
    eavesdropping: bool,
    noise: NoiseProbability,
    entropy: &mut E,
) -> Result<f64, QkdError> {
    Ok(run_trial(n, eavesdropping, noise, entropy)?.error_rate())
}
