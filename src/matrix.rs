//! Dense row-major matrix used to set up and solve small linear systems.
use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use num_traits::Float;

use crate::error::{Error, Result};

/// A resizable `rows x cols` matrix of floating point scalars, stored row-major.
///
/// `Clone` duplicates the element values into independent storage.
///
/// ```rust
/// use bezier_fit::Matrix;
///
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let b = Matrix::column(&[5.0, 6.0]);
/// let c = a.augment(&b).unwrap();
///
/// assert_eq!(c.cols(), 3);
/// assert_eq!(c.row(1), &[3.0, 4.0, 6.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Matrix<T>
where
    T: Float,
{
    /// Create a zero filled matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Create a matrix from a list of equally long rows.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(Error::DimensionMismatch {
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Matrix {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Create a `n x 1` column vector.
    pub fn column(values: &[T]) -> Self {
        Matrix {
            rows: values.len(),
            cols: 1,
            data: values.to_vec(),
        }
    }

    pub fn identity(n: usize) -> Self {
        let mut m = Matrix::new(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Change the shape of the matrix. The previous contents are discarded
    /// and all elements are zero afterwards.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.data.clear();
        self.data.resize(rows * cols, T::zero());
    }

    /// Checked element read, `None` if out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Element read. Panics if `row` or `col` is out of range.
    pub fn at(&self, row: usize, col: usize) -> T {
        self[(row, col)]
    }

    /// Mutable element access. Panics if `row` or `col` is out of range.
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self[(row, col)]
    }

    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.rows, "row {} out of range ({} rows)", row, self.rows);
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        assert!(row < self.rows, "row {} out of range ({} rows)", row, self.rows);
        &mut self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Place `other` to the right of `self`, giving a `rows x (self.cols + other.cols)` matrix.
    pub fn augment(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.rows != other.rows {
            return Err(Error::RowMismatch {
                expected: self.rows,
                found: other.rows,
            });
        }
        let mut out = Matrix::new(self.rows, self.cols + other.cols);
        for r in 0..self.rows {
            let (left, right) = out.row_mut(r).split_at_mut(self.cols);
            left.copy_from_slice(self.row(r));
            right.copy_from_slice(other.row(r));
        }
        Ok(out)
    }

    /// Matrix product `self * rhs`.
    pub fn mul(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        if self.cols != rhs.rows {
            return Err(Error::DimensionMismatch {
                expected: self.cols,
                found: rhs.rows,
            });
        }
        let mut out = Matrix::new(self.rows, rhs.cols);
        for r in 0..self.rows {
            for c in 0..rhs.cols {
                let mut acc = T::zero();
                for k in 0..self.cols {
                    acc = acc + self[(r, k)] * rhs[(k, c)];
                }
                out[(r, c)] = acc;
            }
        }
        Ok(out)
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let cols = self.cols;
        for c in 0..cols {
            self.data.swap(a * cols + c, b * cols + c);
        }
    }

    /// Multiply every element of `row` by `factor`.
    pub(crate) fn scale_row(&mut self, row: usize, factor: T) {
        for v in self.row_mut(row) {
            *v = *v * factor;
        }
    }

    /// `row[target] -= factor * row[source]`
    pub(crate) fn sub_scaled_row(&mut self, target: usize, source: usize, factor: T) {
        let cols = self.cols;
        for c in 0..cols {
            let s = self.data[source * cols + c];
            let t = &mut self.data[target * cols + c];
            *t = *t - factor * s;
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of range for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of range for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}
