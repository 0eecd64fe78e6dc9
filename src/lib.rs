//! Smooth cubic Bézier curves fitted exactly through sample points.
//!
//! Given an ordered list of at least four points, [`BezierSpline::from_points`]
//! solves the cubic spline continuity system (tridiagonal `1 4 1` relation) once
//! per coordinate axis and turns the resulting B-spline control polygon into one
//! [`CubicBezier`] segment per pair of consecutive samples. The composite curve
//! passes through every sample: `interpolate(i) == points[i]`.
//!
//! The linear systems are solved by a small dense [`Matrix`] with Gaussian
//! elimination ([`gaussian_solve`]), which is usable on its own.
//!
//! Points are generic: anything implementing [`Point`] (and [`PointIndex`] for
//! fitting) works, [`PointN`] is provided for convenience.
//!
//! ```rust
//! use bezier_fit::{BezierSpline, Point, PointN};
//!
//! let samples = [
//!     PointN::new([0.0, 0.0, 0.0]),
//!     PointN::new([1.0, 1.0, 0.0]),
//!     PointN::new([2.0, 0.0, 0.0]),
//!     PointN::new([3.0, 1.0, 0.0]),
//! ];
//! let curve = BezierSpline::from_points(&samples).unwrap();
//!
//! assert_eq!(curve.segment_count(), 3);
//! assert!((curve.interpolate(1.0) - samples[1]).squared_length() < 1e-12);
//!
//! // 11 points per unit segment, joints shared
//! let polyline = curve.sample(10);
//! assert_eq!(polyline.len(), 31);
//! ```
#![no_std]

extern crate alloc;

use num_traits::{Float, NumCast};

pub mod bezier_spline;
pub mod cubic_bezier;
pub mod error;
pub mod gauss;
pub mod matrix;
pub mod point;
pub mod point_generic;
pub mod spline;

pub use bezier_spline::{BezierSpline, DEFAULT_SAMPLES_PER_SEGMENT};
pub use cubic_bezier::CubicBezier;
pub use error::{Error, ErrorKind, Result};
pub use gauss::{gaussian_solve, gaussian_solve_with, solve_vector, Pivoting, SolverConfig};
pub use matrix::Matrix;
pub use point::{Point, PointIndex};
pub use point_generic::{Point3, PointN};
pub use spline::Spline;

/// Absolute tolerance used by the solver unless configured otherwise.
pub const DEFAULT_TOLERANCE: f64 = 1e-5;

// squared distance threshold for floating point comparisons in tests
#[cfg(test)]
pub(crate) const EPSILON: f64 = 1e-10;

/// Converts an `f64` literal into the generic scalar (NaN if the cast fails).
#[inline]
pub(crate) fn lit<T: Float>(value: f64) -> T {
    <T as NumCast>::from(value).unwrap_or_else(T::nan)
}
