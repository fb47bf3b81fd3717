// src/entropy/scripted.rs

use super::EntropySource;
use crate::core::{Basis, Bit};

/// Deterministic source replaying fixed scripts.
///
/// Each script cycles once exhausted. An empty script yields `Bit::Zero`,
/// `Basis::Rectilinear` or `0.5`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEntropy {
    bits: Vec<Bit>,
    bases: Vec<Basis>,
    units: Vec<f64>,
    bit_cursor: usize,
    basis_cursor: usize,
    unit_cursor: usize,
}

impl ScriptedEntropy {
    /// Source with empty scripts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bit script.
    pub fn with_bits(mut self, bits: Vec<Bit>) -> Self {
        self.bits = bits;
        self.bit_cursor = 0;
        self
    }

    /// Sets the basis script.
    pub fn with_bases(mut self, bases: Vec<Basis>) -> Self {
        self.bases = bases;
        self.basis_cursor = 0;
        self
    }

    /// Sets the `[0, 1)` draw script. Values are clamped into `[0, 1)`.
    pub fn with_units(mut self, units: Vec<f64>) -> Self {
        self.units = units
            .into_iter()
            .map(|u| if u.is_nan() { 0.0 } else { u.clamp(0.0, 1.0 - f64::EPSILON) })
            .collect();
        self.unit_cursor = 0;
        self
    }

    /// Number of draws consumed so far as (bits, bases, units).
    pub fn draws(&self) -> (usize, usize, usize) {
        (self.bit_cursor, self.basis_cursor, self.unit_cursor)
    }
}

fn replay<T: Copy>(script: &[T], cursor: &mut usize, fallback: T) -> T {
    let value = if script.is_empty() {
        fallback
    } else {
        script[*cursor % script.len()]
    };
    *cursor += 1;
    value
}

impl EntropySource for ScriptedEntropy {
    fn next_bit(&mut self) -> Bit {
        replay(&self.bits, &mut self.bit_cursor, Bit::Zero)
    }

    fn next_basis(&mut self) -> Basis {
        replay(&self.bases, &mut self.basis_cursor, Basis::Rectilinear)
    }

    fn next_unit(&mut self) -> f64 {
        replay(&self.units, &mut self.unit_cursor, 0.5)
    }
}
