//! Error types for the simulation engines

use ketsim_core::{GateError, Qubit};
use ketsim_state::StateError;
use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors raised while applying gates and measurements
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Operand does not address a qubit of this state
    #[error("Qubit {qubit} out of range for a {nbits}-qubit state")]
    QubitOutOfRange { qubit: Qubit, nbits: usize },

    /// Same qubit used as both control and target
    #[error("Qubit {qubit} is both control and target")]
    ControlIsTarget { qubit: Qubit },

    /// Chosen measurement outcome has zero probability
    #[error("Measurement outcome {outcome} on qubit {qubit} has zero probability")]
    DegenerateOutcome { qubit: Qubit, outcome: u8 },

    /// Gate shape violation caught at application time
    #[error(transparent)]
    Gate(#[from] GateError),

    /// State construction error surfaced through a session
    #[error(transparent)]
    State(#[from] StateError),
}
