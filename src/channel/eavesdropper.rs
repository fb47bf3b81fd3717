// src/channel/eavesdropper.rs

use super::measurement::transmit;
use crate::core::{Basis, Bit, NoiseProbability, QkdError};
use crate::entropy::{EntropySource, random_bases};

/// What an intercept-resend attack leaves behind: the eavesdropper's own
/// view of the transmission and the bits the receiver finally records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interception {
    /// Bases the eavesdropper guessed, one per photon.
    pub eavesdropper_bases: Vec<Basis>,
    /// Bits the eavesdropper measured and re-sent.
    pub eavesdropper_bits: Vec<Bit>,
    /// Bits the receiver recorded from the re-sent photons.
    pub receiver_bits: Vec<Bit>,
}

/// Runs an intercept-resend attack on one transmission.
///
/// The eavesdropper draws its own bases, measures every photon (intercept),
/// then re-prepares each one from its recorded bit in its own basis and lets
/// the receiver measure it (resend). Both hops go through the measurement
/// model, so both pay the noise and the basis-mismatch randomization.
pub fn intercept_resend<E: EntropySource + ?Sized>(
    sender_bits: &[Bit],
    sender_bases: &[Basis],
    receiver_bases: &[Basis],
    noise: NoiseProbability,
    entropy: &mut E,
) -> Result<Interception, QkdError> {
    let eavesdropper_bases = random_bases(sender_bits.len(), entropy);
    let eavesdropper_bits = transmit(sender_bits, sender_bases, &eavesdropper_bases, noise, entropy)?;
    let receiver_bits = transmit(&eavesdropper_bits, &eavesdropper_bases, receiver_bases, noise, entropy)?;

    Ok(Interception {
        eavesdropper_bases,
        eavesdropper_bits,
        receiver_bits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::ScriptedEntropy;

    #[test]
    fn test_correct_guess_passes_the_bit_through() -> Result<(), QkdError> {
        // Eavesdropper guesses the sender's basis; no noise draws flip anything.
        let mut entropy = ScriptedEntropy::new()
            .with_bases(vec![Basis::Diagonal])
            .with_units(vec![0.9]);
        let outcome = intercept_resend(
            &[Bit::One, Bit::Zero],
            &[Basis::Diagonal, Basis::Diagonal],
            &[Basis::Diagonal, Basis::Diagonal],
            NoiseProbability::default(),
            &mut entropy,
        )?;
        assert_eq!(outcome.eavesdropper_bases, vec![Basis::Diagonal; 2]);
        assert_eq!(outcome.eavesdropper_bits, vec![Bit::One, Bit::Zero]);
        assert_eq!(outcome.receiver_bits, vec![Bit::One, Bit::Zero]);
        Ok(())
    }

    #[test]
    fn test_wrong_guess_randomizes_the_resent_bit() -> Result<(), QkdError> {
        // Sender and receiver agree on Rectilinear; eavesdropper picks Diagonal.
        // Intercept draws a random bit (One), resend draws another (Zero).
        let mut entropy = ScriptedEntropy::new()
            .with_bases(vec![Basis::Diagonal])
            .with_bits(vec![Bit::One, Bit::Zero]);
        let outcome = intercept_resend(
            &[Bit::One],
            &[Basis::Rectilinear],
            &[Basis::Rectilinear],
            NoiseProbability::ZERO,
            &mut entropy,
        )?;
        assert_eq!(outcome.eavesdropper_bits, vec![Bit::One]);
        assert_eq!(outcome.receiver_bits, vec![Bit::Zero]);
        Ok(())
    }

    #[test]
    fn test_empty_transmission() -> Result<(), QkdError> {
        let mut entropy = ScriptedEntropy::new();
        let outcome = intercept_resend(&[], &[], &[], NoiseProbability::ZERO, &mut entropy)?;
        assert!(outcome.receiver_bits.is_empty());
        assert_eq!(entropy.draws(), (0, 0, 0));
        Ok(())
    }
}
