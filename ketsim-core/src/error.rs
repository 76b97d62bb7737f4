//! Error types for gate and matrix construction

use crate::Qubit;
use thiserror::Error;

/// Result type for gate and matrix construction
pub type Result<T> = std::result::Result<T, GateError>;

/// Errors raised while building matrices and gates
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GateError {
    /// Flattened element list does not form a square matrix
    #[error("Matrix with {count} elements is not square")]
    NotSquare { count: usize },

    /// Matrix dimension is not a power of two covering at least one qubit
    #[error("Matrix dimension {dim} is not a power of two of at least 2")]
    BadDimension { dim: usize },

    /// Matrix dimension does not match the declared number of target qubits
    #[error("Matrix of dimension {dim} cannot act on {targets} target qubit(s)")]
    DimensionMismatch { dim: usize, targets: usize },

    /// Matrix fails the unitarity check
    #[error("Matrix is not unitary: worst element deviation {deviation:.3e}")]
    NotUnitary { deviation: f64 },

    /// Same qubit listed twice in one operand list
    #[error("Duplicate qubit {0} in gate operands")]
    DuplicateQubit(Qubit),
}
