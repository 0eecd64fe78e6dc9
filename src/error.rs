//! Error type shared by the matrix solver and the spline fitter.
use core::fmt;

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed data that violates a precondition
    /// (too few points, non square matrix, mismatched shapes).
    InvalidInput,
    /// Elimination hit a pivot that is zero within tolerance.
    NumericalInstability,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Curve fitting needs at least `required` points.
    TooFewPoints { found: usize, required: usize },
    /// The coefficient matrix of a linear system must be square.
    NotSquare { rows: usize, cols: usize },
    /// Two matrices that are put side by side must have the same row count.
    RowMismatch { expected: usize, found: usize },
    /// Ragged rows or incompatible shapes for a product.
    DimensionMismatch { expected: usize, found: usize },
    /// The pivot in row/column `pivot` vanished during elimination.
    SingularMatrix { pivot: usize },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::TooFewPoints { .. }
            | Error::NotSquare { .. }
            | Error::RowMismatch { .. }
            | Error::DimensionMismatch { .. } => ErrorKind::InvalidInput,
            Error::SingularMatrix { .. } => ErrorKind::NumericalInstability,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TooFewPoints { found, required } => {
                write!(f, "need at least {} points to fit a curve, got {}", required, found)
            }
            Error::NotSquare { rows, cols } => {
                write!(f, "coefficient matrix must be square, got {}x{}", rows, cols)
            }
            Error::RowMismatch { expected, found } => {
                write!(f, "row count mismatch: expected {}, found {}", expected, found)
            }
            Error::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {}, found {}", expected, found)
            }
            Error::SingularMatrix { pivot } => {
                write!(f, "matrix is singular (zero pivot at row {})", pivot)
            }
        }
    }
}

impl core::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(
            Error::TooFewPoints { found: 2, required: 4 }.kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(Error::NotSquare { rows: 2, cols: 3 }.kind(), ErrorKind::InvalidInput);
        assert_eq!(
            Error::RowMismatch { expected: 2, found: 3 }.kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            Error::SingularMatrix { pivot: 0 }.kind(),
            ErrorKind::NumericalInstability
        );
    }

    #[test]
    fn display_names_the_problem() {
        let msg = Error::SingularMatrix { pivot: 3 }.to_string();
        assert!(msg.contains("singular"));
        assert!(msg.contains('3'));
    }
}
