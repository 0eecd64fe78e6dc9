//! Piecewise cubic Bezier curve fitted through sample points.
use alloc::vec::Vec;
use core::slice;

use log::debug;
use num_traits::{Float, NumCast, One, Zero};
use tinyvec::TinyVec;

use super::cubic_bezier::CubicBezier;
use super::point::{Point, PointIndex};
use super::spline::Spline;
use crate::error::{Error, Result};
use crate::gauss::{gaussian_solve_with, SolverConfig};
use crate::lit;
use crate::matrix::Matrix;

/// Subdivisions per unit segment used by renderers that don't pick their own
/// density (11 points per segment including both ends).
pub const DEFAULT_SAMPLES_PER_SEGMENT: usize = 10;

const MIN_POINTS: usize = 4;

/// A smooth curve through an ordered list of points, made of one cubic
/// Bezier segment per pair of consecutive points.
///
/// Segment `i` covers the global parameter range `[i, i + 1]` and runs from
/// `points[i]` to `points[i + 1]`. The curve is C2 continuous at the joints.
///
/// # Examples
/// ```rust
/// use bezier_fit::{BezierSpline, Point, PointN};
///
/// let points = [
///     PointN::new([0.0, 0.0]),
///     PointN::new([1.0, 2.0]),
///     PointN::new([3.0, 2.5]),
///     PointN::new([4.0, 0.0]),
///     PointN::new([6.0, 1.0]),
/// ];
/// let curve = BezierSpline::from_points(&points).unwrap();
///
/// for (i, p) in points.iter().enumerate() {
///     let err = curve.interpolate(i as f64) - *p;
///     assert!(err.squared_length() < 1e-12);
/// }
/// // parameters outside the domain are clamped
/// assert_eq!(curve.interpolate(-1.0), points[0]);
/// assert_eq!(curve.interpolate(10.0), points[4]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BezierSpline<P>
where
    P: Point,
{
    segments: TinyVec<[CubicBezier<P>; 8]>,
}

impl<P> Spline<P> for BezierSpline<P>
where
    P: Point,
{
    fn eval(&self, t: P::Scalar) -> P {
        self.interpolate(t)
    }
}

impl<P> BezierSpline<P>
where
    P: Point,
{
    /// Fit a curve through `points` with the default solver configuration.
    /// At least four points are required.
    pub fn from_points(points: &[P]) -> Result<Self>
    where
        P: PointIndex,
    {
        Self::from_points_with(points, &SolverConfig::default())
    }

    /// Fit a curve through `points`, solving the spline system with `config`.
    ///
    /// The interior B-spline control points `b[1..=n-2]` satisfy
    /// `b[i-1] + 4 b[i] + b[i+1] = 6 d[i]` with `b[0] = d[0]` and
    /// `b[n-1] = d[n-1]`. All axes are solved in one elimination.
    pub fn from_points_with(points: &[P], config: &SolverConfig<P::Scalar>) -> Result<Self>
    where
        P: PointIndex,
    {
        let n = points.len();
        if n < MIN_POINTS {
            return Err(Error::TooFewPoints {
                found: n,
                required: MIN_POINTS,
            });
        }

        let size = n - 2;
        let one = P::Scalar::one();
        let four: P::Scalar = lit(4.0);
        let six: P::Scalar = lit(6.0);

        let mut m = Matrix::new(size, size);
        for i in 0..size {
            m[(i, i)] = four;
            if i > 0 {
                m[(i, i - 1)] = one;
            }
            if i + 1 < size {
                m[(i, i + 1)] = one;
            }
        }

        let mut rhs = Matrix::new(size, P::DIM);
        for axis in 0..P::DIM {
            for i in 0..size {
                rhs[(i, axis)] = six * points[i + 1].axis(axis);
            }
            rhs[(0, axis)] = rhs[(0, axis)] - points[0].axis(axis);
            rhs[(size - 1, axis)] = rhs[(size - 1, axis)] - points[size + 1].axis(axis);
        }

        let x = gaussian_solve_with(&m, &rhs, config)?;

        let mut polygon: Vec<P> = Vec::with_capacity(n);
        polygon.push(points[0]);
        for i in 0..size {
            let mut b = P::default();
            for axis in 0..P::DIM {
                b[axis] = x[(i, axis)];
            }
            polygon.push(b);
        }
        polygon.push(points[n - 1]);

        let two: P::Scalar = lit(2.0);
        let third: P::Scalar = lit(1.0 / 3.0);
        let mut segments = TinyVec::with_capacity(n - 1);
        for i in 0..n - 1 {
            let (b0, b1) = (polygon[i], polygon[i + 1]);
            segments.push(CubicBezier::new(
                points[i],
                (b0 * two + b1) * third,
                (b0 + b1 * two) * third,
                points[i + 1],
            ));
        }

        debug!("fitted {} cubic segments through {} points", n - 1, n);
        Ok(BezierSpline { segments })
    }

    /// Number of cubic segments, one less than the number of fitted points.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> slice::Iter<'_, CubicBezier<P>> {
        self.segments.iter()
    }

    /// The parameter range `[0, segment_count]` covered by the curve.
    pub fn domain(&self) -> (P::Scalar, P::Scalar) {
        (P::Scalar::zero(), lit(self.segments.len() as f64))
    }

    /// First fitted point.
    pub fn start(&self) -> P {
        self.segments[0].start()
    }

    /// Last fitted point.
    pub fn end(&self) -> P {
        self.segments[self.segments.len() - 1].end()
    }

    /// Evaluate the curve at the global parameter `t`.
    /// The integer part of `t` picks the segment, the fractional part is the
    /// position within it. Values outside `[0, segment_count]` are clamped,
    /// NaN evaluates to the start point.
    pub fn interpolate(&self, t: P::Scalar) -> P {
        let (index, local_t) = self.segment_parameter(t);
        self.segments[index].eval(local_t)
    }

    /// Flatten the curve into a polyline with `steps_per_segment` equal
    /// parameter steps per segment. Joints are shared between neighbouring
    /// segments, so the result has `segment_count * steps_per_segment + 1`
    /// points. A step count of zero is treated as one.
    pub fn sample(&self, steps_per_segment: usize) -> Vec<P> {
        let steps = steps_per_segment.max(1);
        let mut polyline = Vec::with_capacity(self.segments.len() * steps + 1);
        for segment in self.segments.iter() {
            for s in 0..steps {
                polyline.push(segment.eval(lit(s as f64 / steps as f64)));
            }
        }
        polyline.push(self.end());
        polyline
    }

    /// Length of the polyline returned by `sample(steps_per_segment)`.
    pub fn arclen(&self, steps_per_segment: usize) -> P::Scalar {
        self.sample(steps_per_segment)
            .windows(2)
            .fold(P::Scalar::zero(), |acc, w| acc + w[0].distance(w[1]))
    }

    fn segment_parameter(&self, t: P::Scalar) -> (usize, P::Scalar) {
        let zero = P::Scalar::zero();
        let one = P::Scalar::one();
        let last = self.segments.len() - 1;

        // also catches NaN
        if !(t > zero) {
            return (0, zero);
        }

        let index = match <usize as NumCast>::from(t.floor()) {
            Some(index) => index.min(last),
            None => last,
        };
        let local = t - lit(index as f64);
        (index, num_traits::clamp(local, zero, one))
    }
}
