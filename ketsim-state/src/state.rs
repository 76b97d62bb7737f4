//! Dense amplitude-vector quantum state
//!
//! An n-qubit state is `2^n` complex amplitudes. Index `i` encodes the
//! basis state whose binary digits are the qubit values, with qubit 1 on
//! the least-significant bit: `index = sum(bit(q) << (q - 1))`. Everything
//! downstream (gate kernels, measurement, the circuit log and its
//! consumers) indexes through this convention.

use crate::error::{Result, StateError};
use ketsim_core::Qubit;
use num_complex::Complex64;

/// Hard capacity ceiling: `2^30` amplitudes, 16 GiB of `Complex64`.
pub const MAX_QUBITS: usize = 30;

/// A dense n-qubit state vector.
///
/// Mutated in place by gate application and measurement; owned by the
/// caller. Outside of one in-flight operation the squared norm stays 1
/// within `ketsim_core::DEFAULT_TOLERANCE`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantumState {
    nbits: usize,
    amplitudes: Vec<Complex64>,
}

impl QuantumState {
    /// Creates the all-zero basis state |0...0>.
    ///
    /// # Errors
    /// Fails with `NoQubits` when `nbits` is zero and `TooManyQubits`
    /// above the capacity ceiling.
    ///
    /// # Example
    /// ```
    /// use ketsim_state::QuantumState;
    ///
    /// let state = QuantumState::new(2).unwrap();
    /// assert_eq!(state.nbits(), 2);
    /// assert_eq!(state.dimension(), 4);
    /// assert_eq!(state.probability(0).unwrap(), 1.0);
    /// ```
    pub fn new(nbits: usize) -> Result<Self> {
        Self::with_basis(nbits, 0)
    }

    /// Creates a computational basis state from an explicit index.
    ///
    /// `basis` follows the qubit bit convention: qubit q contributes
    /// `bit << (q - 1)`. Fails with `BasisOutOfRange` when
    /// `basis >= 2^nbits`.
    pub fn with_basis(nbits: usize, basis: usize) -> Result<Self> {
        check_width(nbits)?;
        let dimension = 1usize << nbits;
        if basis >= dimension {
            return Err(StateError::BasisOutOfRange { basis, dimension });
        }
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); dimension];
        amplitudes[basis] = Complex64::new(1.0, 0.0);
        Ok(QuantumState { nbits, amplitudes })
    }

    /// Creates the uniform superposition: every amplitude `1/sqrt(2^n)`.
    pub fn uniform(nbits: usize) -> Result<Self> {
        check_width(nbits)?;
        let dimension = 1usize << nbits;
        let amplitude = Complex64::new(1.0 / (dimension as f64).sqrt(), 0.0);
        Ok(QuantumState {
            nbits,
            amplitudes: vec![amplitude; dimension],
        })
    }

    /// Wraps caller-supplied amplitudes.
    ///
    /// The length must be a power of two covering at least one qubit
    /// (`BadAmplitudeCount` otherwise). The data is not renormalized;
    /// `is_normalized` reports whether it needed to be.
    pub fn from_amplitudes(amplitudes: Vec<Complex64>) -> Result<Self> {
        let count = amplitudes.len();
        if count < 2 || !count.is_power_of_two() {
            return Err(StateError::BadAmplitudeCount { count });
        }
        let nbits = count.trailing_zeros() as usize;
        check_width(nbits)?;
        Ok(QuantumState { nbits, amplitudes })
    }

    /// Number of qubits, fixed at construction.
    #[inline]
    pub fn nbits(&self) -> usize {
        self.nbits
    }

    /// State dimension (`2^nbits`).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// The amplitudes in basis-index order.
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Mutable access to the amplitudes, for the gate and measurement
    /// engines.
    #[inline]
    pub fn amplitudes_mut(&mut self) -> &mut [Complex64] {
        &mut self.amplitudes
    }

    /// The L2 norm of the state vector.
    pub fn norm(&self) -> f64 {
        self.amplitudes
            .iter()
            .map(|a| a.norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    /// True if `|norm - 1| < tolerance`.
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.norm() - 1.0).abs() < tolerance
    }

    /// Scales all amplitudes so the norm equals 1. A numerically zero
    /// vector is left unchanged.
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 1e-10 {
            let inv_norm = 1.0 / norm;
            for amplitude in &mut self.amplitudes {
                *amplitude *= inv_norm;
            }
        }
    }

    /// Probability of observing basis state `index`.
    pub fn probability(&self, index: usize) -> Result<f64> {
        if index >= self.amplitudes.len() {
            return Err(StateError::BasisOutOfRange {
                basis: index,
                dimension: self.amplitudes.len(),
            });
        }
        Ok(self.amplitudes[index].norm_sqr())
    }

    /// Probability of every basis state, in index order.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Marginal probability that `qubit` reads `value` (0 or 1; any
    /// nonzero value counts as 1).
    pub fn probability_of(&self, qubit: Qubit, value: u8) -> Result<f64> {
        self.check_qubit(qubit)?;
        let mask = qubit.mask();
        let want = if value == 0 { 0 } else { mask };
        Ok(self
            .amplitudes
            .iter()
            .enumerate()
            .filter(|(index, _)| index & mask == want)
            .map(|(_, amplitude)| amplitude.norm_sqr())
            .sum())
    }

    fn check_qubit(&self, qubit: Qubit) -> Result<()> {
        if qubit.index() < 1 || qubit.index() > self.nbits {
            return Err(StateError::QubitOutOfRange {
                qubit,
                nbits: self.nbits,
            });
        }
        Ok(())
    }
}

fn check_width(nbits: usize) -> Result<()> {
    if nbits == 0 {
        return Err(StateError::NoQubits);
    }
    if nbits > MAX_QUBITS {
        return Err(StateError::TooManyQubits {
            requested: nbits,
            max: MAX_QUBITS,
        });
    }
    Ok(())
}

/// Basis index addressed by per-qubit values: `bits[q - 1]` is qubit q's
/// value, and the index is `sum(bit << (q - 1))`.
pub fn index_of(bits: &[u8]) -> usize {
    bits.iter().enumerate().fold(0, |index, (position, bit)| {
        index | (((bit & 1) as usize) << position)
    })
}

/// Value of `qubit` inside basis index `index`.
pub fn bit_of(index: usize, qubit: Qubit) -> u8 {
    ((index >> (qubit.index() - 1)) & 1) as u8
}

/// Ket-style label for a basis index, most-significant qubit first:
/// index 5 of a 3-qubit state reads |101> (q3=1, q2=0, q1=1).
pub fn basis_label(index: usize, nbits: usize) -> String {
    let mut label = String::with_capacity(nbits + 2);
    label.push('|');
    for q in (1..=nbits).rev() {
        let bit = (index >> (q - 1)) & 1;
        label.push(if bit == 1 { '1' } else { '0' });
    }
    label.push('>');
    label
}
