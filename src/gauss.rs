//! Gaussian elimination with back-substitution on an augmented matrix `[M|a]`.
//!
//! Available functions:
//! - `gaussian_solve()` with the default `SolverConfig`
//! - `gaussian_solve_with()` with an explicit configuration
//! - `solve_vector()` for a single right hand side given as a slice
use alloc::vec::Vec;

use log::{trace, warn};
use num_traits::Float;

use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::{lit, DEFAULT_TOLERANCE};

/// Row exchange strategy used during forward elimination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pivoting {
    /// Rows are eliminated in their given order. A vanishing pivot is an error
    /// even if a row further down could have replaced it.
    #[default]
    None,
    /// Before each elimination step the row with the largest magnitude
    /// in the pivot column is swapped into place.
    Partial,
}

/// Tuning knobs for the solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T> {
    /// Absolute tolerance for all comparisons against zero and one.
    pub tolerance: T,
    pub pivoting: Pivoting,
}

impl<T: Float> Default for SolverConfig<T> {
    fn default() -> Self {
        SolverConfig {
            tolerance: lit(DEFAULT_TOLERANCE),
            pivoting: Pivoting::None,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    pub fn with_tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_pivoting(mut self, pivoting: Pivoting) -> Self {
        self.pivoting = pivoting;
        self
    }
}

/// Solve `m * x = a` for `x` using the default configuration
/// (tolerance `1e-5`, no pivoting).
///
/// `m` must be square and `a` must have as many rows as `m`. `a` may hold
/// several right hand sides as columns; the returned `x` has the shape of `a`.
///
/// ```rust
/// use bezier_fit::{gaussian_solve, Matrix};
///
/// let m: Matrix<f64> = Matrix::from_rows(&[[4.0, 1.0], [1.0, 4.0]]).unwrap();
/// let a = Matrix::column(&[6.0, 9.0]);
/// let x = gaussian_solve(&m, &a).unwrap();
///
/// assert!((x[(0, 0)] - 1.0).abs() < 1e-12);
/// assert!((x[(1, 0)] - 2.0).abs() < 1e-12);
/// ```
pub fn gaussian_solve<T: Float>(m: &Matrix<T>, a: &Matrix<T>) -> Result<Matrix<T>> {
    gaussian_solve_with(m, a, &SolverConfig::default())
}

/// Solve `m * x = a` for `x` with an explicit [`SolverConfig`].
pub fn gaussian_solve_with<T: Float>(
    m: &Matrix<T>,
    a: &Matrix<T>,
    config: &SolverConfig<T>,
) -> Result<Matrix<T>> {
    if !m.is_square() {
        return Err(Error::NotSquare {
            rows: m.rows(),
            cols: m.cols(),
        });
    }
    let n = m.rows();
    let k = a.cols();
    let mut c = m.augment(a)?;

    forward_eliminate(&mut c, n, config)?;
    back_substitute(&mut c, n);

    let mut x = Matrix::new(n, k);
    for i in 0..n {
        x.row_mut(i).copy_from_slice(&c.row(i)[n..]);
    }
    Ok(x)
}

/// Solve `m * x = a` for a single right hand side.
pub fn solve_vector<T: Float>(m: &Matrix<T>, a: &[T]) -> Result<Vec<T>> {
    let x = gaussian_solve(m, &Matrix::column(a))?;
    Ok(x.as_slice().to_vec())
}

/// Reduce the left `n x n` block of `c` to upper triangular form with a unit
/// diagonal (up to the tolerance).
fn forward_eliminate<T: Float>(c: &mut Matrix<T>, n: usize, config: &SolverConfig<T>) -> Result<()> {
    let eps = config.tolerance;
    for i in 0..n {
        if config.pivoting == Pivoting::Partial {
            let best = (i..n)
                .max_by(|&r, &s| {
                    c[(r, i)]
                        .abs()
                        .partial_cmp(&c[(s, i)].abs())
                        .unwrap_or(core::cmp::Ordering::Equal)
                })
                .unwrap_or(i);
            if best != i {
                trace!("pivot {}: swapping in row {}", i, best);
                c.swap_rows(i, best);
            }
        }

        let pivot = c[(i, i)];
        if !(pivot.abs() > eps) {
            warn!("singular matrix: pivot {} vanished during elimination", i);
            return Err(Error::SingularMatrix { pivot: i });
        }
        if (pivot - T::one()).abs() > eps {
            c.scale_row(i, T::one() / pivot);
        }
        trace!("pivot {} normalised", i);

        let pivot = c[(i, i)];
        for j in (i + 1)..n {
            let below = c[(j, i)];
            if below.abs() > eps {
                c.sub_scaled_row(j, i, below / pivot);
            }
        }
    }
    Ok(())
}

/// Resolve the unknowns from the last row upwards, leaving the solution in
/// the right hand columns of `c`.
fn back_substitute<T: Float>(c: &mut Matrix<T>, n: usize) {
    let width = c.cols();
    for i in (0..n).rev() {
        for j in (i + 1)..n {
            let w = c[(i, j)];
            if w != T::zero() {
                for col in n..width {
                    let resolved = c[(j, col)];
                    c[(i, col)] = c[(i, col)] - w * resolved;
                }
                c[(i, j)] = T::zero();
            }
        }
        // pivots within tolerance of one were left unscaled
        let pivot = c[(i, i)];
        if pivot != T::one() {
            for col in n..width {
                c[(i, col)] = c[(i, col)] / pivot;
            }
            c[(i, i)] = T::one();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use alloc::vec;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn residual(m: &Matrix<f64>, x: &Matrix<f64>, a: &Matrix<f64>) -> f64 {
        let mx = m.mul(x).unwrap();
        let mut max = 0.0f64;
        for r in 0..a.rows() {
            for c in 0..a.cols() {
                max = max.max((mx[(r, c)] - a[(r, c)]).abs());
            }
        }
        max
    }

    /// Strictly diagonally dominant matrices never produce a vanishing pivot.
    fn random_dominant(rng: &mut StdRng, n: usize) -> Matrix<f64> {
        let mut m = Matrix::new(n, n);
        for r in 0..n {
            let mut off = 0.0;
            for c in 0..n {
                if r != c {
                    let v: f64 = rng.gen_range(-1.0..1.0);
                    m[(r, c)] = v;
                    off += v.abs();
                }
            }
            let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            m[(r, r)] = sign * (off + rng.gen_range(1.0..4.0));
        }
        m
    }

    #[test]
    fn solves_two_by_two() {
        let m = Matrix::from_rows(&[[4.0, 1.0], [1.0, 4.0]]).unwrap();
        let x = solve_vector(&m, &[6.0, 9.0]).unwrap();
        assert!((x[0] - 1.0).abs() < 1e-12);
        assert!((x[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn identity_returns_rhs() {
        let a = Matrix::from_rows(&[[1.5, -2.0], [0.25, 3.0], [7.0, 0.0]]).unwrap();
        let x = gaussian_solve(&Matrix::identity(3), &a).unwrap();
        assert_eq!(x, a);
    }

    #[test]
    fn random_well_conditioned_systems() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for n in 1..=12 {
            for _ in 0..8 {
                let m = random_dominant(&mut rng, n);
                let values: Vec<f64> = (0..n).map(|_| rng.gen_range(-10.0..10.0)).collect();
                let a = Matrix::column(&values);
                let x = gaussian_solve(&m, &a).unwrap();
                assert!(residual(&m, &x, &a) < 1e-4);
            }
        }
    }

    #[test]
    fn multiple_right_hand_sides_match_single_solves() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = random_dominant(&mut rng, 6);
        let mut a = Matrix::new(6, 3);
        for r in 0..6 {
            for c in 0..3 {
                a[(r, c)] = rng.gen_range(-5.0..5.0);
            }
        }
        let x = gaussian_solve(&m, &a).unwrap();
        for c in 0..3 {
            let column: Vec<f64> = (0..6).map(|r| a[(r, c)]).collect();
            let single = solve_vector(&m, &column).unwrap();
            for r in 0..6 {
                assert_eq!(x[(r, c)], single[r]);
            }
        }
    }

    #[test]
    fn inputs_are_left_untouched() {
        let m = Matrix::from_rows(&[[2.0, 1.0], [1.0, 3.0]]).unwrap();
        let a = Matrix::column(&[3.0, 5.0]);
        let (m0, a0) = (m.clone(), a.clone());
        gaussian_solve(&m, &a).unwrap();
        assert_eq!(m, m0);
        assert_eq!(a, a0);
    }

    #[test]
    fn rejects_non_square() {
        let m: Matrix<f64> = Matrix::new(2, 3);
        let err = gaussian_solve(&m, &Matrix::column(&[1.0, 2.0])).unwrap_err();
        assert_eq!(err, Error::NotSquare { rows: 2, cols: 3 });
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn rejects_mismatched_rhs() {
        let m: Matrix<f64> = Matrix::identity(2);
        let err = gaussian_solve(&m, &Matrix::column(&[1.0, 2.0, 3.0])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn singular_matrix_is_reported() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
        let err = solve_vector(&m, &[1.0, 2.0]).unwrap_err();
        assert_eq!(err, Error::SingularMatrix { pivot: 1 });
        assert_eq!(err.kind(), ErrorKind::NumericalInstability);
    }

    #[test]
    fn zero_leading_pivot_needs_partial_pivoting() {
        let m = Matrix::from_rows(&[[0.0, 1.0], [1.0, 1.0]]).unwrap();
        let a = Matrix::column(&[2.0, 3.0]);

        assert_eq!(
            gaussian_solve(&m, &a),
            Err(Error::SingularMatrix { pivot: 0 })
        );

        let config = SolverConfig::default().with_pivoting(Pivoting::Partial);
        let x = gaussian_solve_with(&m, &a, &config).unwrap();
        assert!((x[(0, 0)] - 1.0).abs() < 1e-12);
        assert!((x[(1, 0)] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn tolerance_is_configurable() {
        let m = Matrix::from_rows(&[[1e-3, 0.0], [0.0, 1.0]]).unwrap();
        let a = Matrix::column(&[1e-3, 1.0]);
        assert!(gaussian_solve(&m, &a).is_ok());

        let coarse = SolverConfig::default().with_tolerance(1e-2);
        assert_eq!(
            gaussian_solve_with(&m, &a, &coarse),
            Err(Error::SingularMatrix { pivot: 0 })
        );
    }

    #[test]
    fn near_unit_pivot_is_divided_out() {
        // pivot within tolerance of one is not rescaled during elimination
        let m = Matrix::from_rows(&[[1.000001, 0.0], [0.0, 2.0]]).unwrap();
        let x = solve_vector(&m, &[1.000001, 4.0]).unwrap();
        assert!((x[0] - 1.0).abs() < 1e-12);
        assert!((x[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn works_with_f32() {
        let m: Matrix<f32> = Matrix::from_rows(&[[3.0, 2.0, -1.0], [2.0, -2.0, 4.0], [-1.0, 0.5, -1.0]]).unwrap();
        let x = solve_vector(&m, &[1.0, -2.0, 0.0]).unwrap();
        let expected = vec![1.0f32, -2.0, -2.0];
        for (got, want) in x.iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-4);
        }
    }
}
