use num_traits::{One, Zero};

use super::point::Point;
use super::spline::Spline;
use crate::lit;

/// A cubic Bezier curve defined by four points: the starting point, two successive
/// control points and the ending point.
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * start + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * end```
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct CubicBezier<P> {
    pub(crate) start: P,
    pub(crate) ctrl1: P,
    pub(crate) ctrl2: P,
    pub(crate) end: P,
}

impl<P> Spline<P> for CubicBezier<P>
where
    P: Point,
{
    fn eval(&self, t: P::Scalar) -> P {
        self.eval(t)
    }
}

impl<P> CubicBezier<P>
where
    P: Point,
{
    pub fn new(start: P, ctrl1: P, ctrl2: P, end: P) -> Self {
        CubicBezier {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    pub fn start(&self) -> P {
        self.start
    }

    pub fn end(&self) -> P {
        self.end
    }

    pub fn control_points(&self) -> [P; 4] {
        [self.start, self.ctrl1, self.ctrl2, self.end]
    }

    /// Evaluate a CubicBezier curve at t by direct evaluation of the polynomial (not numerically stable)
    pub fn eval(&self, t: P::Scalar) -> P {
        let one_t = P::Scalar::one() - t;
        let three: P::Scalar = lit(3.0);
        self.start * (one_t * one_t * one_t)
            + self.ctrl1 * (three * one_t * one_t * t)
            + self.ctrl2 * (three * one_t * t * t)
            + self.end * (t * t * t)
    }

    /// Evaluate a CubicBezier curve at t using the numerically stable De Casteljau algorithm
    pub fn eval_casteljau(&self, t: P::Scalar) -> P {
        // unrolled de casteljau algorithm
        // _1ab is the first iteration from first (a) to second (b) control point and so on
        let ctrl_1ab = self.start + (self.ctrl1 - self.start) * t;
        let ctrl_1bc = self.ctrl1 + (self.ctrl2 - self.ctrl1) * t;
        let ctrl_1cd = self.ctrl2 + (self.end - self.ctrl2) * t;
        // second iteration
        let ctrl_2ab = ctrl_1ab + (ctrl_1bc - ctrl_1ab) * t;
        let ctrl_2bc = ctrl_1bc + (ctrl_1cd - ctrl_1bc) * t;
        // third iteration, final point on the curve
        ctrl_2ab + (ctrl_2bc - ctrl_2ab) * t
    }

    /// Sample the coordinate axis of the curve at t.
    /// Convenience shortcut for bezier.eval(t).axis(axis)
    pub fn axis(&self, t: P::Scalar, axis: usize) -> P::Scalar {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = P::Scalar::one() - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;
        let three: P::Scalar = lit(3.0);

        one_t3 * self.start.axis(axis)
            + three * one_t2 * t * self.ctrl1.axis(axis)
            + three * one_t * t2 * self.ctrl2.axis(axis)
            + t3 * self.end.axis(axis)
    }

    /// Approximates the arc length of the curve by flattening it with straight line segments.
    /// Remember arclen also works by linear approximation, not the integral, so we have to accept error!
    /// This approximation is unfeasable if desired accuracy is greater than 2 decimal places
    pub fn arclen(&self, nsteps: usize) -> P::Scalar {
        let nsteps = nsteps.max(1);
        let stepsize: P::Scalar = lit(1.0 / nsteps as f64);
        let mut arclen = P::Scalar::zero();
        let mut prev = self.start;
        for i in 1..=nsteps {
            let t = if i == nsteps {
                P::Scalar::one()
            } else {
                stepsize * lit(i as f64)
            };
            let p = self.eval_casteljau(t);
            arclen = arclen + prev.distance(p);
            prev = p;
        }
        arclen
    }
}
