// src/simulation/sifting.rs

use crate::core::{Basis, Bit, QkdError};

/// Indices where sender and receiver used the same basis, in ascending order.
pub fn sift(sender_bases: &[Basis], receiver_bases: &[Basis]) -> Result<Vec<usize>, QkdError> {
    if sender_bases.len() != receiver_bases.len() {
        return Err(QkdError::LengthMismatch {
            left: sender_bases.len(),
            right: receiver_bases.len(),
        });
    }
    Ok(sender_bases
        .iter()
        .zip(receiver_bases)
        .enumerate()
        .filter(|(_, (sent, received))| sent == received)
        .map(|(index, _)| index)
        .collect())
}

/// Picks the bits at `indices`, preserving their order.
pub fn extract(bits: &[Bit], indices: &[usize]) -> Result<Vec<Bit>, QkdError> {
    indices
        .iter()
        .map(|&index| {
            bits.get(index)
                .copied()
                .ok_or(QkdError::SiftIndexOutOfRange { index, length: bits.len() })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use Basis::{Diagonal as D, Rectilinear as R};

    #[test]
    fn test_sift_keeps_matching_positions_in_order() -> Result<(), QkdError> {
        assert_eq!(sift(&[R, R, D, D], &[R, D, D, R])?, vec![0, 2]);
        assert_eq!(sift(&[R, D], &[D, R])?, Vec::<usize>::new());
        assert_eq!(sift(&[], &[])?, Vec::<usize>::new());
        Ok(())
    }

    #[test]
    fn test_sift_rejects_ragged_bases() {
        assert_eq!(sift(&[R], &[R, D]), Err(QkdError::LengthMismatch { left: 1, right: 2 }));
    }

    #[test]
    fn test_extract_preserves_pairing() -> Result<(), QkdError> {
        let bits = [Bit::One, Bit::Zero, Bit::Zero, Bit::One];
        assert_eq!(extract(&bits, &[0, 3])?, vec![Bit::One, Bit::One]);
        Ok(())
    }

    #[test]
    fn test_extract_reports_the_stray_index() {
        let bits = [Bit::One, Bit::Zero, Bit::Zero, Bit::One];
        assert_eq!(
            extract(&bits, &[1, 4]),
            Err(QkdError::SiftIndexOutOfRange { index: 4, length: 4 })
        );
        assert!(!matches!(extract(&bits, &[4]), Err(QkdError::InvalidParameter { .. })));
    }
}
