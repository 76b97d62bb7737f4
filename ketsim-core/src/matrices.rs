//! Canonical gate matrices as compile-time constants
//!
//! Every named gate the library ships is built from one of these tables.
//! Multi-qubit tables index their basis states with the library's LSB-first
//! convention: the first target qubit is the low bit of the row index.

use num_complex::Complex64;

// Compile-time constant helpers
const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);
const NEG_I: Complex64 = Complex64::new(0.0, -1.0);
const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);

const INV_SQRT2: f64 = 0.7071067811865476; // 1/√2

// Single-qubit gate matrices (2x2)

/// NOT gate matrix (Pauli-X)
/// X = [[0, 1],
///      [1, 0]]
pub const NOT: [[Complex64; 2]; 2] = [
    [ZERO, ONE],
    [ONE, ZERO],
];

/// Hadamard gate matrix
/// H = 1/√2 * [[1,  1],
///             [1, -1]]
pub const HADAMARD: [[Complex64; 2]; 2] = [
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(INV_SQRT2, 0.0),
    ],
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(-INV_SQRT2, 0.0),
    ],
];

/// Pauli-Y gate matrix
/// Y = [[0, -i],
///      [i,  0]]
pub const PAULI_Y: [[Complex64; 2]; 2] = [
    [ZERO, NEG_I],
    [I, ZERO],
];

/// Pauli-Z gate matrix
/// Z = [[1,  0],
///      [0, -1]]
pub const PAULI_Z: [[Complex64; 2]; 2] = [
    [ONE, ZERO],
    [ZERO, NEG_ONE],
];

/// Identity gate matrix
/// I = [[1, 0],
///      [0, 1]]
pub const IDENTITY: [[Complex64; 2]; 2] = [
    [ONE, ZERO],
    [ZERO, ONE],
];

// Two-qubit gate matrices (4x4)

/// Controlled-not gate matrix, control listed first.
///
/// The control is the low bit of the row index, the target the high bit,
/// so basis states run |c=0,t=0>, |c=1,t=0>, |c=0,t=1>, |c=1,t=1>.
/// CNOT = [[1, 0, 0, 0],
///         [0, 0, 0, 1],
///         [0, 0, 1, 0],
///         [0, 1, 0, 0]]
pub const CNOT: [[Complex64; 4]; 4] = [
    [ONE, ZERO, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ONE],
    [ZERO, ZERO, ONE, ZERO],
    [ZERO, ONE, ZERO, ZERO],
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_not_squaring() {
        // X² = I
        let mut result = [[ZERO; 2]; 2];
        for i in 0..2 {
            for j in 0..2 {
                for k in 0..2 {
                    result[i][j] += NOT[i][k] * NOT[k][j];
                }
            }
        }

        for i in 0..2 {
            for j in 0..2 {
                assert_relative_eq!(result[i][j].re, IDENTITY[i][j].re, epsilon = 1e-10);
                assert_relative_eq!(result[i][j].im, IDENTITY[i][j].im, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_hadamard_self_inverse() {
        // H² = I
        let mut result = [[ZERO; 2]; 2];
        for i in 0..2 {
            for j in 0..2 {
                for k in 0..2 {
                    result[i][j] += HADAMARD[i][k] * HADAMARD[k][j];
                }
            }
        }

        for i in 0..2 {
            for j in 0..2 {
                assert_relative_eq!(result[i][j].re, IDENTITY[i][j].re, epsilon = 1e-10);
                assert_relative_eq!(result[i][j].im, IDENTITY[i][j].im, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_pauli_y_squaring() {
        // Y² = I
        let mut result = [[ZERO; 2]; 2];
        for i in 0..2 {
            for j in 0..2 {
                for k in 0..2 {
                    result[i][j] += PAULI_Y[i][k] * PAULI_Y[k][j];
                }
            }
        }

        for i in 0..2 {
            for j in 0..2 {
                assert_relative_eq!(result[i][j].re, IDENTITY[i][j].re, epsilon = 1e-10);
                assert_relative_eq!(result[i][j].im, IDENTITY[i][j].im, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_cnot_flips_target_when_control_set() {
        // Control is the low bit: |c=1,t=0> (index 1) maps to |c=1,t=1>
        // (index 3) and back, while indices 0 and 2 stay put.
        let mut images = [0usize; 4];
        for j in 0..4 {
            for i in 0..4 {
                if CNOT[i][j] == ONE {
                    images[j] = i;
                }
            }
        }
        assert_eq!(images, [0, 3, 2, 1]);
    }

    #[test]
    fn test_cnot_self_inverse() {
        let mut result = [[ZERO; 4]; 4];
        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    result[i][j] += CNOT[i][k] * CNOT[k][j];
                }
            }
        }

        for i in 0..4 {
            for j in 0..4 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(result[i][j].re, expected, epsilon = 1e-10);
                assert_relative_eq!(result[i][j].im, 0.0, epsilon = 1e-10);
            }
        }
    }
}
