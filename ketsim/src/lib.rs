//! Dense state-vector quantum circuit simulation.
//!
//! `ketsim` bundles the workspace crates behind one dependency:
//!
//! - `ketsim-core`: qubits, unitaries, gates, the circuit log, and the
//!   ASCII and OpenQASM renderers built on it
//! - `ketsim-state`: the dense complex amplitude vector
//! - `ketsim-sim`: gate application, measurement, sampling, and the
//!   [`Simulator`] session
//!
//! # Example
//!
//! ```
//! use ketsim::{qasm, Gate, Qubit, Simulator};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(11);
//! let mut sim = Simulator::new(2).unwrap();
//!
//! // Bell pair: measuring one qubit fixes the other
//! sim.apply(&Gate::hadamard(Qubit::new(1))).unwrap();
//! sim.apply(&Gate::cnot(Qubit::new(1), Qubit::new(2))).unwrap();
//! let first = sim.measure(Qubit::new(1), &mut rng).unwrap();
//! let second = sim.measure(Qubit::new(2), &mut rng).unwrap();
//! assert_eq!(first, second);
//!
//! let program = qasm::export(sim.log(), sim.nbits()).unwrap();
//! assert!(program.contains("cx q[0], q[1];"));
//! ```

pub use ketsim_core::{
    ascii, matrices, qasm, CircuitLog, Complex64, ExportError, Gate, GateError, GateKind,
    LogEntry, OpKind, Qubit, Unitary, DEFAULT_TOLERANCE,
};
pub use ketsim_sim::{apply, measure, sample, SampleCounts, SimError, Simulator};
pub use ketsim_state::{basis_label, bit_of, index_of, QuantumState, StateError, MAX_QUBITS};
