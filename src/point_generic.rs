use core::ops::{Add, Index, IndexMut, Mul, Sub};

use num_traits::Float;

use super::Point;

/// Point with dimensions of constant generic size N and of generic type T
/// (Implemented as Newtype Pattern on an array
/// see book or https://www.worthe-it.co.za/blog/2020-10-31-newtype-pattern-in-rust.html)
/// This type only interacts with the library through
/// the point trait, so you are free to use your own
/// Point/Coord/Vec structures instead by implementing the (small) trait
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointN<T, const N: usize>([T; N]);

/// The three dimensional samples the fitter was written for.
pub type Point3<T> = PointN<T, 3>;

impl<T, const N: usize> PointN<T, N> {
    pub fn new(array: [T; N]) -> Self {
        PointN(array)
    }

    pub fn into_array(self) -> [T; N] {
        self.0
    }
}

impl<T, const N: usize> From<[T; N]> for PointN<T, N> {
    fn from(array: [T; N]) -> Self {
        PointN(array)
    }
}

/// Initialize with the Default value for the underlying type
impl<T: Default + Copy, const N: usize> Default for PointN<T, N> {
    fn default() -> Self {
        PointN([T::default(); N])
    }
}

impl<T, const N: usize> Add for PointN<T, N>
where
    T: Add<Output = T> + Copy,
{
    type Output = Self;

    fn add(self, other: PointN<T, N>) -> PointN<T, N> {
        let mut res = self;
        for i in 0..N {
            res.0[i] = self.0[i] + other.0[i];
        }
        res
    }
}

impl<T, const N: usize> Sub for PointN<T, N>
where
    T: Sub<Output = T> + Copy,
{
    type Output = Self;

    fn sub(self, other: PointN<T, N>) -> PointN<T, N> {
        let mut res = self;
        for i in 0..N {
            res.0[i] = self.0[i] - other.0[i];
        }
        res
    }
}

impl<T, const N: usize> Mul<T> for PointN<T, N>
where
    // The multiplication is done by multiplying T * T => T
    T: Mul<T, Output = T> + Copy,
{
    type Output = PointN<T, N>;

    fn mul(self, rhs: T) -> PointN<T, N> {
        let mut res = self;
        for i in 0..N {
            res.0[i] = res.0[i] * rhs;
        }
        res
    }
}

impl<T, const N: usize> Index<usize> for PointN<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for PointN<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T, const N: usize> IntoIterator for PointN<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<Self::Item, N>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIterator::into_iter(self.0)
    }
}

impl<T, const N: usize> Point for PointN<T, N>
where
    T: Float + Default,
{
    type Scalar = T;
    const DIM: usize = N;

    fn axis(&self, index: usize) -> T {
        self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PointIndex;

    fn set_axes<P: PointIndex>(values: &[P::Scalar]) -> P {
        let mut p = P::default();
        for (axis, v) in values.iter().enumerate() {
            p[axis] = *v;
        }
        p
    }

    #[test]
    fn arithmetic_is_componentwise() {
        let a = PointN::new([1.0f64, 2.0, 3.0]);
        let b = PointN::new([0.5f64, -1.0, 4.0]);
        assert_eq!(a + b, PointN::new([1.5, 1.0, 7.0]));
        assert_eq!(a - b, PointN::new([0.5, 3.0, -1.0]));
        assert_eq!(a * 2.0, PointN::new([2.0, 4.0, 6.0]));
    }

    #[test]
    fn length_and_distance() {
        let a: Point3<f64> = PointN::new([3.0, 4.0, 0.0]);
        assert_eq!(a.squared_length(), 25.0);
        assert_eq!(a.distance(PointN::default()), 5.0);
    }

    #[test]
    fn writable_by_axis() {
        let p: Point3<f32> = set_axes(&[1.0, -2.0, 0.5]);
        assert_eq!(p.axis(0), 1.0);
        assert_eq!(p[1], -2.0);
        assert_eq!(p.into_array(), [1.0, -2.0, 0.5]);
    }
}
