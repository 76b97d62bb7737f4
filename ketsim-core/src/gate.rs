//! Gate descriptions
//!
//! A `Gate` is pure data: a unitary matrix plus the qubits it acts on.
//! Nothing here touches amplitudes; application lives in the simulator
//! crate, which matches the three shapes exhaustively. One gate value can
//! be applied to any number of states.

use crate::error::{GateError, Result};
use crate::log::OpKind;
use crate::matrices;
use crate::matrix::Unitary;
use crate::qubit::Qubit;
use smallvec::{smallvec, SmallVec};
use std::fmt;

/// Which canonical 2x2 matrix a gate carries.
///
/// Recorded at construction so log consumers can name the gate without
/// inspecting matrix elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateKind {
    Not,
    Hadamard,
    PauliZ,
    /// Any caller-supplied matrix.
    Generic,
}

/// A unitary operation on one or more qubits.
#[derive(Debug, Clone, PartialEq)]
pub enum Gate {
    /// A 2x2 matrix on one target qubit.
    Single {
        kind: GateKind,
        matrix: Unitary,
        target: Qubit,
    },
    /// A 2x2 matrix applied to the target iff every control reads 1.
    Controlled {
        kind: GateKind,
        matrix: Unitary,
        controls: SmallVec<[Qubit; 2]>,
        target: Qubit,
    },
    /// A `2^k x 2^k` matrix on `k` ordered targets. `targets[0]` is the
    /// least-significant bit of the matrix's own index space.
    Multi {
        matrix: Unitary,
        targets: SmallVec<[Qubit; 2]>,
    },
}

impl Gate {
    /// NOT (Pauli-X) gate on one qubit.
    pub fn not(target: Qubit) -> Gate {
        Gate::Single {
            kind: GateKind::Not,
            matrix: Unitary::from_canonical_2x2(matrices::NOT),
            target,
        }
    }

    /// Hadamard gate on one qubit.
    pub fn hadamard(target: Qubit) -> Gate {
        Gate::Single {
            kind: GateKind::Hadamard,
            matrix: Unitary::from_canonical_2x2(matrices::HADAMARD),
            target,
        }
    }

    /// Pauli-Z gate on one qubit.
    pub fn pauli_z(target: Qubit) -> Gate {
        Gate::Single {
            kind: GateKind::PauliZ,
            matrix: Unitary::from_canonical_2x2(matrices::PAULI_Z),
            target,
        }
    }

    /// Controlled-not gate. A control equal to the target is rejected when
    /// the gate meets a state, not here.
    pub fn cnot(control: Qubit, target: Qubit) -> Gate {
        Gate::Controlled {
            kind: GateKind::Not,
            matrix: Unitary::from_canonical_2x2(matrices::NOT),
            controls: smallvec![control],
            target,
        }
    }

    /// A caller-supplied 2x2 unitary on one target.
    pub fn single(matrix: Unitary, target: Qubit) -> Result<Gate> {
        if matrix.dim() != 2 {
            return Err(GateError::DimensionMismatch {
                dim: matrix.dim(),
                targets: 1,
            });
        }
        Ok(Gate::Single {
            kind: GateKind::Generic,
            matrix,
            target,
        })
    }

    /// A caller-supplied 2x2 unitary applied to `target` iff every control
    /// reads 1.
    pub fn controlled(matrix: Unitary, controls: &[Qubit], target: Qubit) -> Result<Gate> {
        if matrix.dim() != 2 {
            return Err(GateError::DimensionMismatch {
                dim: matrix.dim(),
                targets: 1,
            });
        }
        check_distinct(controls)?;
        Ok(Gate::Controlled {
            kind: GateKind::Generic,
            matrix,
            controls: SmallVec::from_slice(controls),
            target,
        })
    }

    /// A caller-supplied `2^k x 2^k` unitary on `k` ordered targets.
    pub fn multi(matrix: Unitary, targets: &[Qubit]) -> Result<Gate> {
        if matrix.num_targets() != targets.len() {
            return Err(GateError::DimensionMismatch {
                dim: matrix.dim(),
                targets: targets.len(),
            });
        }
        check_distinct(targets)?;
        Ok(Gate::Multi {
            matrix,
            targets: SmallVec::from_slice(targets),
        })
    }

    /// The matrix this gate applies.
    pub fn matrix(&self) -> &Unitary {
        match self {
            Gate::Single { matrix, .. } => matrix,
            Gate::Controlled { matrix, .. } => matrix,
            Gate::Multi { matrix, .. } => matrix,
        }
    }

    /// Target qubits in gate order.
    pub fn targets(&self) -> SmallVec<[Qubit; 2]> {
        match self {
            Gate::Single { target, .. } => smallvec![*target],
            Gate::Controlled { target, .. } => smallvec![*target],
            Gate::Multi { targets, .. } => targets.clone(),
        }
    }

    /// Control qubits; empty unless the gate is controlled.
    pub fn controls(&self) -> SmallVec<[Qubit; 2]> {
        match self {
            Gate::Controlled { controls, .. } => controls.clone(),
            _ => SmallVec::new(),
        }
    }

    /// The tag log consumers see for this gate.
    ///
    /// Only the single-control NOT tags `ControlledNot`; every other
    /// controlled or multi-target shape reports `GenericUnitary`.
    pub fn op_kind(&self) -> OpKind {
        match self {
            Gate::Single { kind, .. } => match kind {
                GateKind::Not => OpKind::Not,
                GateKind::Hadamard => OpKind::Hadamard,
                GateKind::PauliZ => OpKind::PauliZ,
                GateKind::Generic => OpKind::GenericUnitary,
            },
            Gate::Controlled { kind, controls, .. } => {
                if *kind == GateKind::Not && controls.len() == 1 {
                    OpKind::ControlledNot
                } else {
                    OpKind::GenericUnitary
                }
            }
            Gate::Multi { .. } => OpKind::GenericUnitary,
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.op_kind())?;
        let mut first = true;
        for qubit in self.controls().iter().chain(self.targets().iter()) {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", qubit)?;
            first = false;
        }
        write!(f, ")")
    }
}

fn check_distinct(qubits: &[Qubit]) -> Result<()> {
    for i in 0..qubits.len() {
        for j in (i + 1)..qubits.len() {
            if qubits[i] == qubits[j] {
                return Err(GateError::DuplicateQubit(qubits[i]));
            }
        }
    }
    Ok(())
}
