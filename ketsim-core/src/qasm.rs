//! OpenQASM 2.0 export
//!
//! Translates a circuit log into an OpenQASM 2.0 program. The log speaks
//! 1-based qubit indices; OpenQASM registers are 0-based, so qubit `q`
//! becomes `q[q-1]`. That translation is local to this module; nothing in
//! the engine knows about it.
//!
//! Measurements are opt-in. `export` emits only the unitary prefix of the
//! circuit, every gate strictly before the first measurement entry.
//! `export_with_measurements` declares a classical register and emits
//! `measure` statements in place.

use crate::log::{CircuitLog, LogEntry, OpKind};
use thiserror::Error;

/// Errors raised while exporting a circuit log.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportError {
    /// Entry has no OpenQASM 2.0 statement (generic unitaries,
    /// multi-controlled forms).
    #[error("Log entry {index} ({kind}) has no OpenQASM 2.0 statement")]
    Unsupported { index: usize, kind: OpKind },
}

/// Renders the unitary prefix of the log: every gate entry strictly before
/// the first measurement, and nothing after it.
pub fn export(log: &CircuitLog, nbits: usize) -> Result<String, ExportError> {
    render(log, nbits, false)
}

/// Renders the whole log, with a classical register and one
/// `measure q[i] -> c[i];` statement per measurement entry.
pub fn export_with_measurements(log: &CircuitLog, nbits: usize) -> Result<String, ExportError> {
    render(log, nbits, true)
}

fn render(
    log: &CircuitLog,
    nbits: usize,
    include_measurements: bool,
) -> Result<String, ExportError> {
    let mut qasm = String::new();
    qasm.push_str("OPENQASM 2.0;\n");
    qasm.push_str("include \"qelib1.inc\";\n");
    qasm.push_str(&format!("qreg q[{}];\n", nbits));
    if include_measurements {
        qasm.push_str(&format!("creg c[{}];\n", nbits));
    }

    for (index, entry) in log.iter().enumerate() {
        match entry {
            LogEntry::Measurement { target, .. } => {
                if !include_measurements {
                    break;
                }
                let offset = target.index() - 1;
                qasm.push_str(&format!("measure q[{}] -> c[{}];\n", offset, offset));
            }
            LogEntry::Gate {
                kind,
                targets,
                controls,
            } => {
                let statement = match (kind, controls.as_slice(), targets.as_slice()) {
                    (OpKind::Not, [], [t]) => format!("x q[{}];\n", t.index() - 1),
                    (OpKind::Hadamard, [], [t]) => format!("h q[{}];\n", t.index() - 1),
                    (OpKind::PauliZ, [], [t]) => format!("z q[{}];\n", t.index() - 1),
                    (OpKind::ControlledNot, [c], [t]) => {
                        format!("cx q[{}], q[{}];\n", c.index() - 1, t.index() - 1)
                    }
                    _ => {
                        return Err(ExportError::Unsupported {
                            index,
                            kind: *kind,
                        })
                    }
                };
                qasm.push_str(&statement);
            }
        }
    }

    Ok(qasm)
}
