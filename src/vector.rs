//! Fixed-dimension vectors
//!
//! [`Vector`] is a small value type over [`nalgebra::SVector`] carrying the operator set the
//! tracer is written against: `*` between two vectors is the dot product, `*` with a scalar scales,
//! and `/` by a scalar divides every component.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use nalgebra::{RealField, SVector, Scalar};

/// How far a normal's length may stray from 1 before reflection refuses it
const UNIT_TOLERANCE: f64 = 1e-5;

/// N scalars of type T, copied by value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<T: Scalar, const N: usize>(SVector<T, N>);

impl<T: RealField + Copy, const N: usize> Vector<T, N> {
    /// Build a vector from explicit components
    ///
    /// Missing trailing components repeat the last given value; with no components at all the
    /// vector is zero. Surplus components are ignored.
    pub fn from_components(components: &[T]) -> Self {
        let fill = components.last().copied().unwrap_or_else(T::zero);
        Self(SVector::from_fn(|i, _| {
            components.get(i).copied().unwrap_or(fill)
        }))
    }

    pub fn zeros() -> Self {
        Self(SVector::zeros())
    }

    pub fn as_slice(&self) -> &[T] {
        self.0.as_slice()
    }

    pub fn dot(&self, other: &Self) -> T {
        self.0.dot(&other.0)
    }

    /// Cross product of the first three components
    ///
    /// Panics if `N < 3`. Components past the third are zero in the result.
    pub fn cross_product(&self, other: &Self) -> Self {
        assert!(N >= 3, "cross product needs at least 3 dimensions, got {N}");
        let (a, b) = (&self.0, &other.0);
        let mut out = SVector::<T, N>::zeros();
        out[0] = a[1] * b[2] - a[2] * b[1];
        out[1] = a[2] * b[0] - a[0] * b[2];
        out[2] = a[0] * b[1] - a[1] * b[0];
        Self(out)
    }

    /// Squared euclidean length, skips the root
    pub fn square_of_length(&self) -> T {
        self.dot(self)
    }

    pub fn length(&self) -> T {
        self.square_of_length().sqrt()
    }

    /// Scale to unit length in place
    ///
    /// A zero-length vector is divided by zero and comes out non-finite.
    pub fn normalize(&mut self) {
        let length = self.length();
        self.0 /= length;
    }

    pub fn normalized(&self) -> Self {
        let mut v = *self;
        v.normalize();
        v
    }

    /// Unit-length copy, or `None` when the length is not above `min_length`
    pub fn try_normalized(&self, min_length: T) -> Option<Self> {
        let length = self.length();
        if length <= min_length {
            return None;
        }
        Some(*self / length)
    }

    /// Mirror this vector about `normal`: `v - 2(v·n)n`
    ///
    /// Panics unless `normal` is unit length within 1e-5.
    pub fn get_reflective(&self, normal: &Self) -> Self {
        let tolerance: T = nalgebra::convert(UNIT_TOLERANCE);
        let normal_length = normal.length();
        let deviation = normal_length - T::one();
        assert!(
            deviation <= tolerance && -deviation <= tolerance,
            "reflection normal must be unit length, got length {normal_length:?}"
        );
        let two = T::one() + T::one();
        *self - *normal * (two * (*self * *normal))
    }

    /// Angle of the normalized vector in the plane of two components, `atan2(v[axis2], v[axis1])`
    pub fn angle(&self, axis1: usize, axis2: usize) -> T {
        let unit = self.normalized();
        unit[axis2].atan2(unit[axis1])
    }
}

impl<T: RealField + Copy> Vector<T, 2> {
    /// Unit vector `(cos θ, sin θ)`
    pub fn from_angle(theta: T) -> Self {
        Self(SVector::<T, 2>::new(theta.cos(), theta.sin()))
    }
}

impl<T: RealField + Copy> Vector<T, 3> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self(SVector::<T, 3>::new(x, y, z))
    }

    pub fn x(&self) -> T {
        self.0[0]
    }

    pub fn y(&self) -> T {
        self.0[1]
    }

    pub fn z(&self) -> T {
        self.0[2]
    }
}

impl<T: RealField + Copy, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: RealField + Copy, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(components: [T; N]) -> Self {
        Self(SVector::from(components))
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.0[i]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.0[i]
    }
}

// Compound assignment, component-wise against a vector or broadcast from a scalar

impl<T: RealField + Copy, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<T: RealField + Copy, const N: usize> AddAssign<T> for Vector<T, N> {
    fn add_assign(&mut self, rhs: T) {
        self.0.add_scalar_mut(rhs);
    }
}

impl<T: RealField + Copy, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<T: RealField + Copy, const N: usize> SubAssign<T> for Vector<T, N> {
    fn sub_assign(&mut self, rhs: T) {
        self.0.add_scalar_mut(-rhs);
    }
}

impl<T: RealField + Copy, const N: usize> MulAssign for Vector<T, N> {
    fn mul_assign(&mut self, rhs: Self) {
        self.0.component_mul_assign(&rhs.0);
    }
}

impl<T: RealField + Copy, const N: usize> MulAssign<T> for Vector<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        self.0 *= rhs;
    }
}

impl<T: RealField + Copy, const N: usize> DivAssign for Vector<T, N> {
    fn div_assign(&mut self, rhs: Self) {
        self.0.component_div_assign(&rhs.0);
    }
}

impl<T: RealField + Copy, const N: usize> DivAssign<T> for Vector<T, N> {
    fn div_assign(&mut self, rhs: T) {
        self.0 /= rhs;
    }
}

// Binary operators

impl<T: RealField + Copy, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T: RealField + Copy, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<T: RealField + Copy, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(mut self) -> Self {
        self *= -T::one();
        self
    }
}

/// Dot product
impl<T: RealField + Copy, const N: usize> Mul for Vector<T, N> {
    type Output = T;

    fn mul(self, rhs: Self) -> T {
        self.dot(&rhs)
    }
}

impl<T: RealField + Copy, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        self *= rhs;
        self
    }
}

/// `vector[i] / scalar` for every component
impl<T: RealField + Copy, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    fn div(mut self, rhs: T) -> Self {
        self /= rhs;
        self
    }
}

macro_rules! scalar_times_vector {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                fn mul(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                    rhs * self
                }
            }
        )*
    };
}

scalar_times_vector!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    type V3 = Vector<f64, 3>;

    fn close(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn from_components_repeats_last_value() {
        let v = Vector::<f64, 4>::from_components(&[1.0, 2.0]);
        assert_eq!(v.as_slice(), &[1.0, 2.0, 2.0, 2.0]);

        let empty = Vector::<f64, 3>::from_components(&[]);
        assert_eq!(empty, V3::zeros());

        let long = Vector::<f32, 2>::from_components(&[1.0, 2.0, 3.0]);
        assert_eq!(long.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn arithmetic() {
        let a = V3::new(1.0, 2.0, 3.0);
        let b = V3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, V3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, V3::new(3.0, 3.0, 3.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(b / 2.0, V3::new(2.0, 2.5, 3.0));
        assert_eq!(-a, V3::new(-1.0, -2.0, -3.0));
        assert_eq!(a * b, 32.0);

        let mut c = a;
        c *= b;
        assert_eq!(c, V3::new(4.0, 10.0, 18.0));
        c /= b;
        assert_eq!(c, a);
        c += 1.0;
        assert_eq!(c, V3::new(2.0, 3.0, 4.0));
        c -= 1.0;
        assert_eq!(c, a);
    }

    #[test]
    fn cross_product_is_right_handed() {
        let x = V3::new(1.0, 0.0, 0.0);
        let y = V3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross_product(&y), V3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross_product(&x), V3::new(0.0, 0.0, -1.0));
    }

    #[test]
    #[should_panic]
    fn cross_product_needs_three_dimensions() {
        let a = Vector::<f64, 2>::from([1.0, 0.0]);
        let _ = a.cross_product(&a);
    }

    #[test]
    fn normalize_gives_unit_length() {
        for v in [
            V3::new(3.0, 4.0, 0.0),
            V3::new(-0.001, 0.002, 0.0005),
            V3::new(1e5, -2e5, 3e4),
        ] {
            let n = v.normalized();
            assert!(close(n.square_of_length(), 1.0, 1e-4));
        }
    }

    #[test]
    fn normalize_zero_is_not_finite() {
        let mut v = V3::zeros();
        v.normalize();
        assert!(!v[0].is_finite());
        assert!(V3::zeros().try_normalized(1e-12).is_none());
        assert!(V3::new(0.0, 2.0, 0.0).try_normalized(1e-12).is_some());
    }

    #[test]
    fn reflection_preserves_length_and_flips_normal_component() {
        let n = V3::new(1.0, 1.0, 0.5).normalized();
        for v in [
            V3::new(1.0, -2.0, 3.0),
            V3::new(0.0, 0.0, -1.0),
            V3::new(-4.0, 0.5, 0.25),
        ] {
            let r = v.get_reflective(&n);
            assert!(close(r.length(), v.length(), 1e-9));
            assert!(close(r * n, -(v * n), 1e-9));
        }
    }

    #[test]
    #[should_panic]
    fn reflection_rejects_non_unit_normal() {
        let _ = V3::new(1.0, 0.0, 0.0).get_reflective(&V3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn angle_round_trips_from_angle() {
        let theta = 0.7_f64;
        let v = Vector::<f64, 2>::from_angle(theta);
        assert!(close(v.length(), 1.0, 1e-12));
        assert!(close(v.angle(0, 1), theta, 1e-12));
        assert!(close((3.0 * v).angle(0, 1), theta, 1e-12));
    }
}
