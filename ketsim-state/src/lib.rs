//! Dense quantum state for the ketsim simulator
//!
//! This crate holds the amplitude vector and its basis-indexing
//! convention: an n-qubit state is `2^n` complex amplitudes, qubit 1 on
//! the least-significant bit of the index. Construction enforces the
//! capacity ceiling ([`MAX_QUBITS`]); inspection covers norms and
//! per-index or per-qubit probabilities. Gate application and measurement
//! live in `ketsim-sim` and mutate states through [`QuantumState::amplitudes_mut`].
//!
//! # Example
//!
//! ```
//! use ketsim_state::{basis_label, QuantumState};
//!
//! let state = QuantumState::uniform(2).unwrap();
//! assert!(state.is_normalized(1e-9));
//! assert_eq!(basis_label(2, 2), "|10>");
//! ```

pub mod error;
pub mod state;

// Re-exports for convenience
pub use error::{Result, StateError};
pub use state::{basis_label, bit_of, index_of, QuantumState, MAX_QUBITS};
