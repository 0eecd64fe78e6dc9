//! Trait for common abstractions over all curve types (single segments and fitted splines)
use super::Point;

pub trait Spline<P: Point> {
    fn eval(&self, t: P::Scalar) -> P;
}
