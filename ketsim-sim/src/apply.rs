//! Gate application engine
//!
//! Applies a k-target gate to an n-qubit state in place, never forming the
//! full `2^n x 2^n` operator. The `2^n` basis indices split into `2^(n-k)`
//! groups differing only in the target bits; each group is multiplied by
//! the gate matrix independently. Groups are disjoint, so processing order
//! does not matter and the engine stays single-threaded.
//!
//! Every operand is validated before the first amplitude write; a failed
//! apply leaves the state untouched.

use crate::error::{Result, SimError};
use ketsim_core::{Gate, GateError, Qubit, Unitary};
use ketsim_state::QuantumState;
use num_complex::Complex64;
use smallvec::SmallVec;

/// Applies `gate` to `state` in place.
///
/// Runs in `O(2^n * 2^k)` time for `k` target qubits with `O(2^k)`
/// scratch. Single-target and controlled gates take direct stride-pair
/// kernels; the general kernel handles any `k`.
pub fn apply(gate: &Gate, state: &mut QuantumState) -> Result<()> {
    match gate {
        Gate::Single { matrix, target, .. } => apply_single(matrix, *target, state),
        Gate::Controlled {
            matrix,
            controls,
            target,
            ..
        } => apply_controlled(matrix, controls, *target, state),
        Gate::Multi { matrix, targets } => apply_multi(matrix, targets, state),
    }
}

fn apply_single(matrix: &Unitary, target: Qubit, state: &mut QuantumState) -> Result<()> {
    check_qubit(target, state.nbits())?;
    check_dim(matrix, 1)?;

    let m00 = matrix.get(0, 0);
    let m01 = matrix.get(0, 1);
    let m10 = matrix.get(1, 0);
    let m11 = matrix.get(1, 1);
    let stride = target.mask();

    let amplitudes = state.amplitudes_mut();
    let n = amplitudes.len();
    let mut i = 0;
    while i < n {
        for j in 0..stride {
            let idx0 = i + j;
            let idx1 = idx0 + stride;

            let a = amplitudes[idx0];
            let b = amplitudes[idx1];

            amplitudes[idx0] = m00 * a + m01 * b;
            amplitudes[idx1] = m10 * a + m11 * b;
        }
        i += stride * 2;
    }

    Ok(())
}

fn apply_controlled(
    matrix: &Unitary,
    controls: &[Qubit],
    target: Qubit,
    state: &mut QuantumState,
) -> Result<()> {
    let nbits = state.nbits();
    check_qubit(target, nbits)?;
    let mut control_mask = 0usize;
    for &control in controls {
        check_qubit(control, nbits)?;
        if control == target {
            return Err(SimError::ControlIsTarget { qubit: control });
        }
        control_mask |= control.mask();
    }
    check_dim(matrix, 1)?;

    let m00 = matrix.get(0, 0);
    let m01 = matrix.get(0, 1);
    let m10 = matrix.get(1, 0);
    let m11 = matrix.get(1, 1);
    let target_stride = target.mask();

    let amplitudes = state.amplitudes_mut();
    let n = amplitudes.len();
    let mut i = 0;
    while i < n {
        for j in 0..target_stride {
            let idx = i + j;
            // Pairs whose control bits are not all 1 stay untouched
            if idx & control_mask == control_mask {
                let idx1 = idx + target_stride;

                let a = amplitudes[idx];
                let b = amplitudes[idx1];

                amplitudes[idx] = m00 * a + m01 * b;
                amplitudes[idx1] = m10 * a + m11 * b;
            }
        }
        i += target_stride * 2;
    }

    Ok(())
}

fn apply_multi(matrix: &Unitary, targets: &[Qubit], state: &mut QuantumState) -> Result<()> {
    let nbits = state.nbits();
    for &target in targets {
        check_qubit(target, nbits)?;
    }
    // Gate fields are public, so shape invariants are rechecked here
    // before any write
    for i in 0..targets.len() {
        for j in (i + 1)..targets.len() {
            if targets[i] == targets[j] {
                return Err(GateError::DuplicateQubit(targets[i]).into());
            }
        }
    }
    check_dim(matrix, targets.len())?;

    let dim = matrix.dim();
    let masks: SmallVec<[usize; 2]> = targets.iter().map(|t| t.mask()).collect();
    let combined: usize = masks.iter().fold(0, |acc, mask| acc | mask);

    let mut scratch = vec![Complex64::new(0.0, 0.0); dim];
    let mut positions = vec![0usize; dim];

    let amplitudes = state.amplitudes_mut();
    for base in 0..amplitudes.len() {
        // One representative per group: all target bits clear
        if base & combined != 0 {
            continue;
        }

        // targets[0] is the low bit of the gate's local index space
        for local in 0..dim {
            let mut index = base;
            for (bit, mask) in masks.iter().enumerate() {
                if local & (1 << bit) != 0 {
                    index |= mask;
                }
            }
            positions[local] = index;
            scratch[local] = amplitudes[index];
        }

        for row in 0..dim {
            let mut sum = Complex64::new(0.0, 0.0);
            for col in 0..dim {
                sum += matrix.get(row, col) * scratch[col];
            }
            amplitudes[positions[row]] = sum;
        }
    }

    Ok(())
}

pub(crate) fn check_qubit(qubit: Qubit, nbits: usize) -> Result<()> {
    if qubit.index() < 1 || qubit.index() > nbits {
        return Err(SimError::QubitOutOfRange { qubit, nbits });
    }
    Ok(())
}

fn check_dim(matrix: &Unitary, targets: usize) -> Result<()> {
    if matrix.num_targets() != targets {
        return Err(GateError::DimensionMismatch {
            dim: matrix.dim(),
            targets,
        }
        .into());
    }
    Ok(())
}
