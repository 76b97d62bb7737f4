//! Validated unitary matrix type
//!
//! Gates never materialize anything larger than their own matrix; the
//! simulator applies a `2^k x 2^k` unitary to an n-qubit state without
//! forming the full `2^n x 2^n` operator. `Unitary` guarantees at
//! construction that the element list is square, the dimension is a power
//! of two covering at least one qubit, and `U * U† ≈ I`.

use crate::error::{GateError, Result};
use crate::DEFAULT_TOLERANCE;
use num_complex::Complex64;

/// A square unitary matrix stored flattened in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Unitary {
    elements: Vec<Complex64>,
    dim: usize,
}

impl Unitary {
    /// Builds a matrix from a flattened row-major element list.
    ///
    /// Fails with `NotSquare` if the element count has no integer square
    /// root, `BadDimension` if the dimension is not a power of two of at
    /// least 2, and `NotUnitary` if `U * U†` strays from the identity by
    /// more than `DEFAULT_TOLERANCE` in any element.
    pub fn new(elements: Vec<Complex64>) -> Result<Self> {
        let count = elements.len();
        let dim = (count as f64).sqrt().round() as usize;
        if dim * dim != count {
            return Err(GateError::NotSquare { count });
        }
        if dim < 2 || !dim.is_power_of_two() {
            return Err(GateError::BadDimension { dim });
        }

        // (U * U†)[r][c] = sum_k U[r][k] * conj(U[c][k])
        let mut worst = 0.0_f64;
        for row in 0..dim {
            for col in 0..dim {
                let mut sum = Complex64::new(0.0, 0.0);
                for k in 0..dim {
                    sum += elements[row * dim + k] * elements[col * dim + k].conj();
                }
                let expected = if row == col { 1.0 } else { 0.0 };
                let deviation = (sum - expected).norm();
                if deviation > worst {
                    worst = deviation;
                }
            }
        }
        if worst > DEFAULT_TOLERANCE {
            return Err(GateError::NotUnitary { deviation: worst });
        }

        Ok(Unitary { elements, dim })
    }

    /// Builds a 2x2 matrix from nested rows.
    pub fn from_2x2(rows: [[Complex64; 2]; 2]) -> Result<Self> {
        Self::new(vec![rows[0][0], rows[0][1], rows[1][0], rows[1][1]])
    }

    /// Builds a 4x4 matrix from nested rows.
    pub fn from_4x4(rows: [[Complex64; 4]; 4]) -> Result<Self> {
        let mut elements = Vec::with_capacity(16);
        for row in &rows {
            elements.extend_from_slice(row);
        }
        Self::new(elements)
    }

    /// Builds from a canonical constant table without revalidating.
    pub(crate) fn from_canonical_2x2(rows: [[Complex64; 2]; 2]) -> Self {
        Unitary {
            elements: vec![rows[0][0], rows[0][1], rows[1][0], rows[1][1]],
            dim: 2,
        }
    }

    /// Matrix dimension (rows and columns).
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of target qubits this matrix acts on: `log2(dim)`.
    #[inline]
    pub fn num_targets(&self) -> usize {
        self.dim.trailing_zeros() as usize
    }

    /// Element at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.elements[row * self.dim + col]
    }

    /// Flattened row-major elements.
    #[inline]
    pub fn as_slice(&self) -> &[Complex64] {
        &self.elements
    }

    /// Conjugate transpose. The adjoint of a unitary is unitary, so no
    /// revalidation happens.
    pub fn adjoint(&self) -> Unitary {
        let dim = self.dim;
        let mut elements = vec![Complex64::new(0.0, 0.0); dim * dim];
        for row in 0..dim {
            for col in 0..dim {
                elements[col * dim + row] = self.elements[row * dim + col].conj();
            }
        }
        Unitary { elements, dim }
    }
}
