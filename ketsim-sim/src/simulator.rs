//! Stateful session pairing a register with its circuit log

use ketsim_core::{CircuitLog, Gate, Qubit};
use ketsim_state::QuantumState;
use rand::Rng;

use crate::{
    apply,
    error::Result,
    measure::{self, SampleCounts},
};

/// A quantum register together with the log of everything done to it.
///
/// Every successful gate application and measurement is recorded in
/// order, so a finished session can be rendered as an ASCII diagram or
/// exported to OpenQASM. Failed operations leave both the state and the
/// log untouched.
///
/// # Example
///
/// ```
/// use ketsim_core::{Gate, Qubit};
/// use ketsim_sim::Simulator;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let mut sim = Simulator::new(2).unwrap();
///
/// sim.apply(&Gate::hadamard(Qubit::new(1))).unwrap();
/// sim.apply(&Gate::cnot(Qubit::new(1), Qubit::new(2))).unwrap();
/// let outcome = sim.measure(Qubit::new(1), &mut rng).unwrap();
///
/// assert_eq!(sim.log().len(), 3);
/// assert!(outcome == 0 || outcome == 1);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    state: QuantumState,
    log: CircuitLog,
}

impl Simulator {
    /// Creates a session over `nbits` qubits in the all-zeros state.
    ///
    /// # Errors
    ///
    /// Returns an error if `nbits` is zero or above the supported
    /// maximum.
    pub fn new(nbits: usize) -> Result<Self> {
        Ok(Self::from_state(QuantumState::new(nbits)?))
    }

    /// Creates a session starting in the basis state `basis`.
    pub fn with_basis(nbits: usize, basis: usize) -> Result<Self> {
        Ok(Self::from_state(QuantumState::with_basis(nbits, basis)?))
    }

    /// Wraps an already prepared state with an empty log.
    pub fn from_state(state: QuantumState) -> Self {
        Self {
            state,
            log: CircuitLog::new(),
        }
    }

    #[inline]
    pub fn nbits(&self) -> usize {
        self.state.nbits()
    }

    /// The current state vector.
    #[inline]
    pub fn state(&self) -> &QuantumState {
        &self.state
    }

    /// Everything applied so far, in order.
    #[inline]
    pub fn log(&self) -> &CircuitLog {
        &self.log
    }

    /// Applies `gate` to the state and records it.
    ///
    /// The log grows only when the application succeeds.
    ///
    /// # Errors
    ///
    /// Propagates any validation error from the engine; see
    /// [`crate::SimError`].
    pub fn apply(&mut self, gate: &Gate) -> Result<()> {
        apply::apply(gate, &mut self.state)?;
        self.log.record_gate(gate);
        Ok(())
    }

    /// Measures `qubit`, collapses the state, and records the outcome.
    pub fn measure(&mut self, qubit: Qubit, rng: &mut impl Rng) -> Result<u8> {
        let outcome = measure::measure(&mut self.state, qubit, rng)?;
        self.log.record_measurement(qubit, outcome);
        Ok(outcome)
    }

    /// Draws `shots` whole-register samples from the current state.
    ///
    /// Sampling reads the state without collapsing it and is not
    /// logged.
    pub fn sample(&self, shots: usize, rng: &mut impl Rng) -> SampleCounts {
        measure::sample(&self.state, shots, rng)
    }

    /// Splits the session into its state and log.
    pub fn into_parts(self) -> (QuantumState, CircuitLog) {
        (self.state, self.log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ketsim_core::LogEntry;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn q(index: usize) -> Qubit {
        Qubit::new(index)
    }

    #[test]
    fn test_log_grows_only_on_success() {
        let mut sim = Simulator::new(2).unwrap();
        sim.apply(&Gate::hadamard(q(1))).unwrap();
        assert_eq!(sim.log().len(), 1);

        let before = sim.state().clone();
        assert!(sim.apply(&Gate::not(q(9))).is_err());

        assert_eq!(sim.log().len(), 1);
        assert_eq!(sim.state(), &before);
    }

    #[test]
    fn test_measurement_entry_carries_outcome() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut sim = Simulator::with_basis(2, 0b01).unwrap();

        let outcome = sim.measure(q(1), &mut rng).unwrap();
        assert_eq!(outcome, 1);

        match sim.log().get(0) {
            Some(LogEntry::Measurement { target, outcome }) => {
                assert_eq!(*target, q(1));
                assert_eq!(*outcome, 1);
            }
            other => panic!("unexpected entry: {other:?}"),
        }
    }

    #[test]
    fn test_sampling_is_not_logged() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut sim = Simulator::new(2).unwrap();
        sim.apply(&Gate::hadamard(q(1))).unwrap();

        let counts = sim.sample(128, &mut rng);

        assert_eq!(counts.shots(), 128);
        assert_eq!(sim.log().len(), 1);
        assert!(sim.state().is_normalized(1e-9));
    }

    #[test]
    fn test_with_basis_starts_where_asked() {
        let sim = Simulator::with_basis(3, 0b101).unwrap();
        assert_eq!(sim.nbits(), 3);
        assert_relative_eq!(sim.state().probability(0b101).unwrap(), 1.0);
        assert!(sim.log().is_empty());
    }

    #[test]
    fn test_into_parts_hands_back_state_and_log() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut sim = Simulator::new(1).unwrap();
        sim.apply(&Gate::not(q(1))).unwrap();
        sim.measure(q(1), &mut rng).unwrap();

        let (state, log) = sim.into_parts();
        assert_relative_eq!(state.probability(1).unwrap(), 1.0);
        assert_eq!(log.len(), 2);
        assert!(log.has_measurements());
    }
}
