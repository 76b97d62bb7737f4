//! Dense state-vector simulation engine
//!
//! This crate evolves a [`ketsim_state::QuantumState`] under the gates of
//! [`ketsim_core`]: in-place gate application that never materializes the
//! full `2^n x 2^n` operator, projective measurement with collapse, and
//! repeated whole-register sampling. The [`Simulator`] session ties a
//! state to a [`ketsim_core::CircuitLog`] so finished circuits can be
//! rendered or exported.
//!
//! # Example
//!
//! ```
//! use ketsim_core::{Gate, Qubit};
//! use ketsim_sim::Simulator;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut sim = Simulator::new(2).unwrap();
//!
//! // Bell pair
//! sim.apply(&Gate::hadamard(Qubit::new(1))).unwrap();
//! sim.apply(&Gate::cnot(Qubit::new(1), Qubit::new(2))).unwrap();
//!
//! let first = sim.measure(Qubit::new(1), &mut rng).unwrap();
//! let second = sim.measure(Qubit::new(2), &mut rng).unwrap();
//! assert_eq!(first, second);
//! ```

pub mod apply;
pub mod error;
pub mod measure;
pub mod simulator;

pub use apply::apply;
pub use error::{Result, SimError};
pub use measure::{measure, sample, SampleCounts};
pub use simulator::Simulator;
