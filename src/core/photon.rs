// src/core/photon.rs

use super::error::QkdError;
use std::fmt;

/// Classical outcome carried by one photon: the bit the sender encodes or
/// the bit a receiver records after measuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bit {
    /// Classical 0.
    Zero,
    /// Classical 1.
    One,
}

impl Bit {
    /// Returns the opposite bit (`1 - bit`).
    pub fn flip(self) -> Self {
        match self {
            Bit::Zero => Bit::One,
            Bit::One => Bit::Zero,
        }
    }

    /// Numeric value, 0 or 1.
    pub fn value(self) -> u8 {
        match self {
            Bit::Zero => 0,
            Bit::One => 1,
        }
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value { Bit::One } else { Bit::Zero }
    }
}

impl From<Bit> for u8 {
    fn from(bit: Bit) -> Self {
        bit.value()
    }
}

impl TryFrom<u8> for Bit {
    type Error = QkdError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Bit::Zero),
            1 => Ok(Bit::One),
            other => Err(QkdError::invalid(format!("{} is not a bit value (expected 0 or 1)", other))),
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Encoding/measurement basis. Only equality matters to the protocol:
/// a matching basis preserves the bit, a mismatched one destroys it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Basis {
    /// 0° / 90° polarizations.
    Rectilinear,
    /// 45° / 135° polarizations.
    Diagonal,
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Basis::Rectilinear => write!(f, "R"),
            Basis::Diagonal => write!(f, "D"),
        }
    }
}

/// Polarization angle of a photon prepared with a given bit and basis.
/// Display only; no protocol decision reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Polarization {
    degrees: u16,
}

impl Polarization {
    /// Maps (bit, basis) onto one of the four BB84 angles.
    pub fn of(bit: Bit, basis: Basis) -> Self {
        let degrees = match (bit, basis) {
            (Bit::Zero, Basis::Rectilinear) => 0,
            (Bit::One, Basis::Rectilinear) => 90,
            (Bit::Zero, Basis::Diagonal) => 45,
            (Bit::One, Basis::Diagonal) => 135,
        };
        Self { degrees }
    }

    /// Angle in degrees.
    pub fn degrees(&self) -> u16 {
        self.degrees
    }
}

impl fmt::Display for Polarization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_is_an_involution() {
        for bit in [Bit::Zero, Bit::One] {
            assert_ne!(bit.flip(), bit);
            assert_eq!(bit.flip().flip(), bit);
        }
    }

    #[test]
    fn test_bit_from_u8_rejects_non_bits() {
        assert_eq!(Bit::try_from(0u8), Ok(Bit::Zero));
        assert_eq!(Bit::try_from(1u8), Ok(Bit::One));
        assert!(matches!(Bit::try_from(2u8), Err(QkdError::InvalidParameter { .. })));
    }

    #[test]
    fn test_polarization_angles() {
        assert_eq!(Polarization::of(Bit::Zero, Basis::Rectilinear).to_string(), "0°");
        assert_eq!(Polarization::of(Bit::One, Basis::Rectilinear).to_string(), "90°");
        assert_eq!(Polarization::of(Bit::Zero, Basis::Diagonal).to_string(), "45°");
        assert_eq!(Polarization::of(Bit::One, Basis::Diagonal).degrees(), 135);
    }
}
