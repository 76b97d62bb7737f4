//! Qubit index newtype
//!
//! Qubits are numbered starting at 1. Qubit 1 occupies the least-significant
//! bit of a basis-state index, qubit `n` the most significant, so a basis
//! index decomposes as `sum(bit(q) << (q - 1))`. Every component of the
//! library (gate application, measurement, the circuit log and its
//! consumers) indexes through this convention.

use std::fmt;

/// A 1-based qubit index.
///
/// The type itself does not know how many qubits a state has; range checks
/// happen where a qubit meets a concrete state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Qubit(usize);

impl Qubit {
    /// Creates a qubit index. Valid indices start at 1.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Qubit(index)
    }

    /// Returns the 1-based index.
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }

    /// Bit mask selecting this qubit's position inside a basis index:
    /// `1 << (index - 1)`.
    #[inline]
    pub const fn mask(&self) -> usize {
        1 << (self.0 - 1)
    }
}

impl fmt::Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<usize> for Qubit {
    fn from(index: usize) -> Self {
        Qubit(index)
    }
}

impl From<Qubit> for usize {
    fn from(qubit: Qubit) -> Self {
        qubit.0
    }
}
