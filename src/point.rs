use core::ops::{Add, Index, IndexMut, Mul, Sub};

use num_traits::{Float, Zero};

/// Trait defined over generic points P with a floating point Scalar type.
/// Many libraries already provide Point-types and the mathematical operations
/// that we need for working with curves, so that implementing methods requires mostly wrapping.
/// Keeping the trait as minimal as possible to make integration with other libraries easy
pub trait Point:
    Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<<Self as Point>::Scalar, Output = Self>
    + Copy
    + PartialEq
    + Default
{
    type Scalar: Float + Default;

    /// Number of coordinate axes, e.g. 3 for x, y, z
    const DIM: usize;

    /// Returns the component of the Point on its axis corresponding to index e.g. [0, 1, 2] -> [x, y, z]
    fn axis(&self, index: usize) -> Self::Scalar;

    /// Returns the squared L2 norm of the Point interpreted as a Vector
    fn squared_length(&self) -> Self::Scalar {
        let mut sqr = Self::Scalar::zero();
        for i in 0..Self::DIM {
            let a = self.axis(i);
            sqr = sqr + a * a;
        }
        sqr
    }

    /// Returns the distance between the two Points self and other
    fn distance(&self, other: Self) -> Self::Scalar {
        (*self - other).squared_length().sqrt()
    }
}

/// Points whose components can be written by axis index.
/// Required to rebuild points from the per-axis solutions when fitting.
pub trait PointIndex:
    Point + Index<usize, Output = <Self as Point>::Scalar> + IndexMut<usize>
{
}

impl<P> PointIndex for P where
    P: Point + Index<usize, Output = <P as Point>::Scalar> + IndexMut<usize>
{
}
