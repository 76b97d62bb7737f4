//! Core circuit vocabulary for the ketsim quantum simulator
//!
//! This crate provides the pieces a circuit is described with:
//! - [`Qubit`]: 1-based qubit addressing, qubit 1 on the least-significant
//!   bit of a basis index
//! - [`Unitary`]: validated gate matrices, never larger than the gate
//! - [`Gate`]: the closed set of gate shapes the engine applies
//! - [`CircuitLog`]: the append-only operation history, consumed by the
//!   [`qasm`] exporter and the [`ascii`] renderer
//!
//! # Example
//! ```
//! use ketsim_core::{Gate, Qubit};
//!
//! let gate = Gate::cnot(Qubit::new(2), Qubit::new(1));
//! assert_eq!(format!("{}", gate), "controlled-not(q2, q1)");
//! ```

pub mod ascii;
pub mod error;
pub mod gate;
pub mod log;
pub mod matrices;
pub mod matrix;
pub mod qasm;
pub mod qubit;

// Re-exports for convenience
pub use error::{GateError, Result};
pub use gate::{Gate, GateKind};
pub use log::{CircuitLog, LogEntry, OpKind};
pub use matrix::Unitary;
pub use num_complex::Complex64;
pub use qasm::ExportError;
pub use qubit::Qubit;

/// Shared numeric tolerance: unitarity validation, normalization checks,
/// and the measurement determinism shortcut all use this bound.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;
