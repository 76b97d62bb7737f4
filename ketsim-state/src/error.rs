//! Error types for state construction and inspection

use ketsim_core::Qubit;
use thiserror::Error;

/// Result type for state operations
pub type Result<T> = std::result::Result<T, StateError>;

/// Errors raised while constructing or inspecting a quantum state
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StateError {
    /// A state needs at least one qubit
    #[error("State must have at least one qubit")]
    NoQubits,

    /// Requested width exceeds the capacity ceiling
    #[error("State with {requested} qubits exceeds the {max}-qubit capacity ceiling")]
    TooManyQubits { requested: usize, max: usize },

    /// Basis index does not fit the state's dimension
    #[error("Basis index {basis} out of range for dimension {dimension}")]
    BasisOutOfRange { basis: usize, dimension: usize },

    /// Amplitude list length is not a power of two covering at least one qubit
    #[error("Amplitude count {count} is not a power of two of at least 2")]
    BadAmplitudeCount { count: usize },

    /// Qubit index does not address a qubit of this state
    #[error("Qubit {qubit} out of range for a {nbits}-qubit state")]
    QubitOutOfRange { qubit: Qubit, nbits: usize },
}
