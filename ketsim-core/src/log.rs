//! Circuit log
//!
//! An append-only record of the operations applied to one state lineage.
//! Entries carry resolved 1-based qubit indices and measurement outcomes by
//! value, never matrices, so a log outlives any state snapshot. Renderers
//! and exporters only ever read it.

use crate::gate::Gate;
use crate::qubit::Qubit;
use std::fmt;

/// Closed operation tag set exposed to log consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum OpKind {
    Not,
    Hadamard,
    ControlledNot,
    PauliZ,
    GenericUnitary,
    Measurement,
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OpKind::Not => "not",
            OpKind::Hadamard => "hadamard",
            OpKind::ControlledNot => "controlled-not",
            OpKind::PauliZ => "pauli-z",
            OpKind::GenericUnitary => "generic-unitary",
            OpKind::Measurement => "measurement",
        };
        write!(f, "{}", name)
    }
}

/// One recorded operation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum LogEntry {
    /// A gate application.
    Gate {
        kind: OpKind,
        targets: Vec<Qubit>,
        controls: Vec<Qubit>,
    },
    /// A projective measurement and its collapsed outcome.
    Measurement { target: Qubit, outcome: u8 },
}

impl LogEntry {
    /// The operation tag for this entry.
    pub fn kind(&self) -> OpKind {
        match self {
            LogEntry::Gate { kind, .. } => *kind,
            LogEntry::Measurement { .. } => OpKind::Measurement,
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogEntry::Gate {
                kind,
                targets,
                controls,
            } => {
                write!(f, "{}(", kind)?;
                let mut first = true;
                for qubit in controls.iter().chain(targets.iter()) {
                    if !first {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", qubit)?;
                    first = false;
                }
                write!(f, ")")
            }
            LogEntry::Measurement { target, outcome } => {
                write!(f, "measurement({}) = {}", target, outcome)
            }
        }
    }
}

/// Ordered history of the operations applied to one state lineage.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct CircuitLog {
    entries: Vec<LogEntry>,
}

impl CircuitLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        CircuitLog {
            entries: Vec::new(),
        }
    }

    /// Appends a gate entry describing `gate`.
    pub fn record_gate(&mut self, gate: &Gate) {
        self.entries.push(LogEntry::Gate {
            kind: gate.op_kind(),
            targets: gate.targets().to_vec(),
            controls: gate.controls().to_vec(),
        });
    }

    /// Appends a measurement entry.
    pub fn record_measurement(&mut self, target: Qubit, outcome: u8) {
        self.entries
            .push(LogEntry::Measurement { target, outcome });
    }

    /// Number of recorded entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, if recorded.
    pub fn get(&self, index: usize) -> Option<&LogEntry> {
        self.entries.get(index)
    }

    /// Iterates entries in application order. Restartable; the log is
    /// never consumed by iteration.
    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.entries.iter()
    }

    /// True when at least one measurement has been recorded.
    pub fn has_measurements(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| matches!(entry, LogEntry::Measurement { .. }))
    }
}

impl<'a> IntoIterator for &'a CircuitLog {
    type Item = &'a LogEntry;
    type IntoIter = std::slice::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for CircuitLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Circuit log with {} entries:", self.len())?;
        for (i, entry) in self.entries.iter().enumerate() {
            writeln!(f, "  {}: {}", i, entry)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_preserves_order() {
        let mut log = CircuitLog::new();
        log.record_gate(&Gate::hadamard(Qubit::new(1)));
        log.record_gate(&Gate::cnot(Qubit::new(1), Qubit::new(2)));
        log.record_measurement(Qubit::new(1), 1);

        assert_eq!(log.len(), 3);
        assert_eq!(log.get(0).unwrap().kind(), OpKind::Hadamard);
        assert_eq!(log.get(1).unwrap().kind(), OpKind::ControlledNot);
        assert_eq!(log.get(2).unwrap().kind(), OpKind::Measurement);
    }

    #[test]
    fn test_gate_entry_carries_operands() {
        let mut log = CircuitLog::new();
        log.record_gate(&Gate::cnot(Qubit::new(2), Qubit::new(1)));

        match log.get(0).unwrap() {
            LogEntry::Gate {
                targets, controls, ..
            } => {
                assert_eq!(targets, &[Qubit::new(1)]);
                assert_eq!(controls, &[Qubit::new(2)]);
            }
            other => panic!("expected a gate entry, got {:?}", other),
        }
    }

    #[test]
    fn test_measurement_entry_carries_outcome() {
        let mut log = CircuitLog::new();
        log.record_measurement(Qubit::new(3), 0);

        assert_eq!(
            log.get(0),
            Some(&LogEntry::Measurement {
                target: Qubit::new(3),
                outcome: 0
            })
        );
    }

    #[test]
    fn test_has_measurements() {
        let mut log = CircuitLog::new();
        assert!(!log.has_measurements());
        log.record_gate(&Gate::not(Qubit::new(1)));
        assert!(!log.has_measurements());
        log.record_measurement(Qubit::new(1), 1);
        assert!(log.has_measurements());
    }

    #[test]
    fn test_op_kind_names() {
        assert_eq!(format!("{}", OpKind::Not), "not");
        assert_eq!(format!("{}", OpKind::Hadamard), "hadamard");
        assert_eq!(format!("{}", OpKind::ControlledNot), "controlled-not");
        assert_eq!(format!("{}", OpKind::PauliZ), "pauli-z");
        assert_eq!(format!("{}", OpKind::GenericUnitary), "generic-unitary");
        assert_eq!(format!("{}", OpKind::Measurement), "measurement");
    }

    #[test]
    fn test_log_display_lists_entries() {
        let mut log = CircuitLog::new();
        log.record_gate(&Gate::hadamard(Qubit::new(1)));
        log.record_measurement(Qubit::new(1), 0);

        let rendered = format!("{}", log);
        assert!(rendered.contains("2 entries"));
        assert!(rendered.contains("0: hadamard(q1)"));
        assert!(rendered.contains("1: measurement(q1) = 0"));
    }

    #[cfg(feature = "serialization")]
    #[test]
    fn test_log_round_trips_through_json() {
        let mut log = CircuitLog::new();
        log.record_gate(&Gate::cnot(Qubit::new(2), Qubit::new(1)));
        log.record_measurement(Qubit::new(1), 1);

        let json = serde_json::to_string(&log).unwrap();
        let back: CircuitLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, log);
    }
}
