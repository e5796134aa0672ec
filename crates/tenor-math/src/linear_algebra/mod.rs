//! Linear algebra utilities.
//!
//! Dense LU decomposition with partial pivoting, used to solve the small
//! normal-equation systems of least-squares regressions.

use crate::error::{MathError, MathResult};
use nalgebra::{DMatrix, DVector};

/// Pivot magnitude below which a matrix is treated as singular.
const SINGULAR_THRESHOLD: f64 = 1e-15;

/// LU decomposition `P * A = L * U` of a square matrix.
#[derive(Debug, Clone)]
pub struct LuDecomposition {
    /// Unit lower-triangular factor.
    pub l: DMatrix<f64>,
    /// Upper-triangular factor.
    pub u: DMatrix<f64>,
    /// Row permutation: row `i` of `P * A` is row `permutation[i]` of `A`.
    pub permutation: Vec<usize>,
}

/// Performs LU decomposition of a square matrix with partial pivoting.
pub fn lu_decomposition(matrix: &DMatrix<f64>) -> MathResult<LuDecomposition> {
    let n = matrix.nrows();
    if n != matrix.ncols() {
        return Err(MathError::invalid_input(
            "Matrix must be square for LU decomposition",
        ));
    }

    let mut l = DMatrix::identity(n, n);
    let mut u = matrix.clone();
    let mut permutation: Vec<usize> = (0..n).collect();

    for k in 0..n {
        let pivot_row = (k..n)
            .max_by(|&a, &b| u[(a, k)].abs().total_cmp(&u[(b, k)].abs()))
            .unwrap_or(k);

        if u[(pivot_row, k)].abs() < SINGULAR_THRESHOLD {
            return Err(MathError::SingularMatrix);
        }

        if pivot_row != k {
            u.swap_rows(k, pivot_row);
            permutation.swap(k, pivot_row);
            for j in 0..k {
                let tmp = l[(k, j)];
                l[(k, j)] = l[(pivot_row, j)];
                l[(pivot_row, j)] = tmp;
            }
        }

        for i in k + 1..n {
            let factor = u[(i, k)] / u[(k, k)];
            l[(i, k)] = factor;

            for j in k..n {
                u[(i, j)] -= factor * u[(k, j)];
            }
        }
    }

    Ok(LuDecomposition { l, u, permutation })
}

/// Solves a linear system Ax = b using LU decomposition.
pub fn solve_linear_system(a: &DMatrix<f64>, b: &DVector<f64>) -> MathResult<DVector<f64>> {
    let n = a.nrows();
    if n != a.ncols() {
        return Err(MathError::invalid_input("Matrix must be square"));
    }
    if n != b.len() {
        return Err(MathError::DimensionMismatch {
            rows1: n,
            cols1: n,
            rows2: b.len(),
            cols2: 1,
        });
    }

    let LuDecomposition { l, u, permutation } = lu_decomposition(a)?;

    // Solve Ly = Pb (forward substitution)
    let mut y = DVector::zeros(n);
    for i in 0..n {
        let mut sum = b[permutation[i]];
        for j in 0..i {
            sum -= l[(i, j)] * y[j];
        }
        y[i] = sum;
    }

    // Solve Ux = y (back substitution)
    let mut x = DVector::zeros(n);
    for i in (0..n).rev() {
        let mut sum = y[i];
        for j in i + 1..n {
            sum -= u[(i, j)] * x[j];
        }
        x[i] = sum / u[(i, i)];
    }

    Ok(x)
}
