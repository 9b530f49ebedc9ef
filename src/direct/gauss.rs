//! Gaussian elimination with partial pivoting
//!
//! Solves a dense square system `Ax = b` in two phases over working copies
//! of the inputs: forward elimination with row pivoting and pivot-row
//! normalization, then back substitution on the resulting unit-diagonal
//! upper-triangular system.

use crate::traits::RealScalar;
use ndarray::{Array1, Array2};
use thiserror::Error;

/// Errors that can occur while solving a dense system
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GaussError {
    #[error("invalid dimensions: matrix is {rows}x{cols}, rhs has {rhs_len} entries")]
    InvalidDimensions {
        rows: usize,
        cols: usize,
        rhs_len: usize,
    },
    #[error("matrix is singular: zero pivot in column {column}")]
    SingularMatrix { column: usize },
}

/// Elimination configuration
#[derive(Debug, Clone)]
pub struct GaussConfig<R> {
    /// Pivots with absolute value at or below this threshold are treated as
    /// zero. The default of zero keeps the strict exact-zero singularity
    /// check; raise it to also reject near-singular systems whose tiny
    /// pivots would amplify rounding error.
    pub pivot_tolerance: R,
}

impl<R: RealScalar> Default for GaussConfig<R> {
    fn default() -> Self {
        Self {
            pivot_tolerance: R::zero(),
        }
    }
}

/// Solve `Ax = b` by Gaussian elimination with partial pivoting.
///
/// Uses the default [`GaussConfig`], i.e. only an exactly-zero pivot is
/// reported as singular. The caller's `a` and `b` are never mutated; all
/// row operations happen on internal working copies.
pub fn gauss_solve<T: RealScalar>(
    a: &Array2<T>,
    b: &Array1<T>,
) -> Result<Array1<T>, GaussError> {
    gauss_solve_with(a, b, &GaussConfig::default())
}

/// Solve `Ax = b` by Gaussian elimination with partial pivoting.
///
/// At each column the remaining row with the largest absolute value is
/// swapped into pivot position (ties go to the smallest row index), the
/// pivot row is normalized to a unit diagonal entry, and the entries below
/// the pivot are eliminated. Back substitution then fills the solution
/// from the last row to the first.
///
/// Fails with [`GaussError::SingularMatrix`] when a pivot does not exceed
/// `config.pivot_tolerance` in absolute value, and with
/// [`GaussError::InvalidDimensions`] when `a` is not square or `b` has the
/// wrong length. No partial result is returned on failure.
pub fn gauss_solve_with<T: RealScalar>(
    a: &Array2<T>,
    b: &Array1<T>,
    config: &GaussConfig<T>,
) -> Result<Array1<T>, GaussError> {
    let n = a.nrows();
    if a.ncols() != n || b.len() != n {
        return Err(GaussError::InvalidDimensions {
            rows: a.nrows(),
            cols: a.ncols(),
            rhs_len: b.len(),
        });
    }

    // Working copies; the caller's data stays untouched.
    let mut a = a.clone();
    let mut b = b.clone();

    log::debug!("gaussian elimination on {n}x{n} system");

    // Forward elimination
    for i in 0..n {
        let pivot_row = select_pivot(&a, i);
        if pivot_row != i {
            swap_rows(&mut a, &mut b, i, pivot_row);
        }

        let pivot = a[[i, i]];
        if pivot.abs() <= config.pivot_tolerance {
            log::debug!("singular pivot {pivot:?} in column {i}");
            return Err(GaussError::SingularMatrix { column: i });
        }

        // Normalize the pivot row to a unit diagonal entry. Columns left
        // of the pivot are already zero.
        for j in i..n {
            a[[i, j]] /= pivot;
        }
        b[i] /= pivot;

        // Eliminate the entries below the pivot, transforming b in lockstep.
        for r in (i + 1)..n {
            let factor = a[[r, i]];
            for c in i..n {
                let update = factor * a[[i, c]];
                a[[r, c]] -= update;
            }
            let update = factor * b[i];
            b[r] -= update;
        }
    }

    // Back substitution; the unit diagonal means no division is needed.
    let mut x = Array1::from_elem(n, T::zero());
    for i in (0..n).rev() {
        let mut acc = b[i];
        for j in (i + 1)..n {
            acc = acc - a[[i, j]] * x[j];
        }
        x[i] = acc;
    }

    Ok(x)
}

/// Index of the row in `col..n` holding the largest absolute value in
/// column `col`. Ties resolve to the smallest row index.
fn select_pivot<T: RealScalar>(a: &Array2<T>, col: usize) -> usize {
    let mut best = col;
    let mut best_abs = a[[col, col]].abs();

    for r in (col + 1)..a.nrows() {
        let v = a[[r, col]].abs();
        if v > best_abs {
            best_abs = v;
            best = r;
        }
    }

    best
}

/// Swap rows `i` and `r` in both the matrix and the right-hand side.
fn swap_rows<T: RealScalar>(a: &mut Array2<T>, b: &mut Array1<T>, i: usize, r: usize) {
    for c in 0..a.ncols() {
        a.swap([i, c], [r, c]);
    }
    b.swap(i, r);
}
