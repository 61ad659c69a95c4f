//! Fixed-dimension vector math shared by 2D, 3D, and 4D vectors.

use std::fmt;
use std::ops::*;

use crate::error::ParseVectorError;
use crate::{Float, Precision};

/// Constructs a 2D, 3D, or 4D vector depending on the number of components.
///
/// ```
/// # use hypergeo::prelude::*;
/// assert_eq!(hypergeo::vector![1.0, 2.0], Vector2::new(1.0, 2.0));
/// assert_eq!(hypergeo::vector![1.0, 2.0, 3.0], Vector3::new(1.0, 2.0, 3.0));
/// ```
#[macro_export]
macro_rules! vector {
    [$x:expr, $y:expr $(,)?] => {
        $crate::Vector2::new($x, $y)
    };
    [$x:expr, $y:expr, $z:expr $(,)?] => {
        $crate::Vector3::new($x, $y, $z)
    };
    [$x:expr, $y:expr, $z:expr, $w:expr $(,)?] => {
        $crate::Vector4::new($x, $y, $z, $w)
    };
}

/// Constructs a 2D, 3D, or 4D point, using the same syntax as
/// [`vector!`](crate::vector!).
#[macro_export]
macro_rules! point {
    [$($tok:tt)*] => {
        $crate::vector![$($tok)*]
    };
}

/// Fixed-dimension Euclidean vector. Components beyond the dimension of the
/// vector read as zero.
///
/// All operations return new values except the explicit setters such as
/// [`Vector::set_norm()`].
pub trait Vector:
    fmt::Debug
    + fmt::Display
    + Default
    + Copy
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<Float, Output = Self>
    + Div<Float, Output = Self>
{
    /// Number of components in the vector.
    const NDIM: u8;
    /// Vector with all components zero.
    const ZERO: Self;

    /// Returns a component of the vector. If the index is out of bounds,
    /// returns zero.
    fn get(&self, axis: u8) -> Float;
    /// Constructs a vector from a function for each component.
    fn from_fn(f: impl FnMut(u8) -> Float) -> Self;

    /// Returns the dot product of this vector with another.
    fn dot(&self, rhs: &Self) -> Float;
    /// Returns the Euclidean length of the vector.
    fn norm(&self) -> Float;
    /// Returns the squared Euclidean length of the vector.
    fn norm2(&self) -> Float {
        self.dot(self)
    }

    /// Returns a vector with every component equal to `value`.
    fn splat(value: Float) -> Self {
        Self::from_fn(|_| value)
    }
    /// Returns a unit vector along an axis, or zero if the axis is out of
    /// bounds.
    fn unit(axis: u8) -> Self {
        Self::from_fn(|i| if i == axis { 1.0 } else { 0.0 })
    }

    /// Returns an iterator over the components of the vector.
    fn components(&self) -> impl Iterator<Item = Float> {
        let v = *self;
        (0..Self::NDIM).map(move |i| v.get(i))
    }
    /// Returns the sum of all the components.
    fn sum(&self) -> Float {
        self.components().sum()
    }
    /// Returns a copy of the vector with one component replaced.
    #[must_use]
    fn with_component(self, axis: u8, value: Float) -> Self {
        Self::from_fn(|i| if i == axis { value } else { self.get(i) })
    }
    /// Applies a function to each component.
    #[must_use]
    fn map(self, mut f: impl FnMut(Float) -> Float) -> Self {
        Self::from_fn(|i| f(self.get(i)))
    }
    /// Applies a function to each pair of corresponding components.
    #[must_use]
    fn zip_map(self, other: Self, mut f: impl FnMut(Float, Float) -> Float) -> Self {
        Self::from_fn(|i| f(self.get(i), other.get(i)))
    }

    /// Returns whether every component is exactly zero.
    fn is_zero(&self) -> bool {
        self.components().all(|x| x == 0.0)
    }

    /// Scales the vector to have the given norm. Does nothing if the vector
    /// is zero, since it has no direction to preserve.
    fn set_norm(&mut self, norm: Float) {
        let old_norm = self.norm();
        if old_norm != 0.0 {
            *self = *self * (norm / old_norm);
        }
    }
    /// Scales the vector to have the given squared norm. Does nothing if the
    /// vector is zero.
    fn set_norm2(&mut self, norm2: Float) {
        self.set_norm(norm2.sqrt());
    }
    /// Returns a copy of the vector scaled to the given norm, or zero if the
    /// vector is zero.
    #[must_use]
    fn with_norm(mut self, norm: Float) -> Self {
        self.set_norm(norm);
        self
    }
    /// Returns a normalized copy of the vector, or `None` if the vector is
    /// zero.
    #[must_use]
    fn normalize(&self) -> Option<Self> {
        let norm = self.norm();
        (norm != 0.0).then(|| *self / norm)
    }

    /// Returns the distance between two points.
    fn distance_to(&self, other: &Self) -> Float {
        (*other - *self).norm()
    }

    /// Returns the component of the vector that is parallel to `onto`.
    ///
    /// Returns `None` if `onto` is zero.
    fn projected_to(&self, onto: &Self) -> Option<Self> {
        let Some(unit) = onto.normalize() else {
            log::trace!("projection of {self} onto a zero vector is undefined");
            return None;
        };
        Some(unit * self.dot(&unit))
    }
    /// Returns the component of the vector that is perpendicular to `other`.
    ///
    /// Returns `None` if `other` is zero.
    fn rejected_from(&self, other: &Self) -> Option<Self> {
        Some(*self - self.projected_to(other)?)
    }
    /// Returns the component of the vector that lies in the plane spanned by
    /// `u` and `v`.
    ///
    /// Returns `None` if `u` and `v` are not exactly orthogonal or if either
    /// is zero.
    fn projected_to_plane(&self, [u, v]: [&Self; 2]) -> Option<Self> {
        if u.dot(v) != 0.0 {
            log::trace!("{u} and {v} are not an orthogonal basis of a plane");
            return None;
        }
        Some(self.projected_to(u)? + self.projected_to(v)?)
    }

    /// Returns whether the two vectors are collinear, meaning that
    /// `|a · b| == |a| * |b|` exactly. A zero vector is collinear with every
    /// vector.
    fn is_collinear_with(&self, other: &Self) -> bool {
        self.is_collinear_within(other, Precision::EXACT)
    }
    /// Returns whether the two vectors are collinear within the given
    /// precision.
    fn is_collinear_within(&self, other: &Self, prec: Precision) -> bool {
        prec.eq(self.dot(other).abs(), self.norm() * other.norm())
    }
}

/// Parses the components of a vector written as `(a, b, ...)`.
pub(crate) fn parse_components(s: &str) -> Result<Vec<Float>, ParseVectorError> {
    let inner = s
        .trim()
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or(ParseVectorError::MissingParentheses)?;
    inner
        .split(',')
        .map(|component| Ok(component.trim().parse()?))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::DimensionMismatch;
    use crate::{Vector2, Vector3, Vector4};

    #[test]
    pub fn test_vector_add() {
        let v1 = vector![1.0, 2.0, -10.0];
        let v2 = vector![-5.0, 0.0, 0.5];
        assert_eq!(v1 + v2, vector![-4.0, 2.0, -9.5]);
        assert_eq!(&v1 + &v2, vector![-4.0, 2.0, -9.5]);
    }

    #[test]
    pub fn test_vector_sub() {
        let v1 = vector![1.0, 2.0, -10.0];
        let v2 = vector![-5.0, 0.0, 0.5];
        assert_eq!(v1 - v2, vector![6.0, 2.0, -10.5]);
        assert_eq!(v2 - &v1, vector![-6.0, -2.0, 10.5]);
    }

    #[test]
    pub fn test_vector_neg_and_scale() {
        let v = vector![1.0, 2.0, -10.0];
        assert_eq!(-v, vector![-1.0, -2.0, 10.0]);
        assert_eq!(-&v, vector![-1.0, -2.0, 10.0]);
        assert_eq!(v * 2.0, vector![2.0, 4.0, -20.0]);
        assert_eq!(2.0 * v, vector![2.0, 4.0, -20.0]);
        assert_eq!(v / 2.0, vector![0.5, 1.0, -5.0]);
    }

    #[test]
    pub fn test_dot_product() {
        let zero = Vector3::ZERO;
        assert_eq!(0.0, zero.dot(&vector![0.0, 8.2, -4.1]));
        assert_eq!(0.0, vector![3.987, 778.2, -104.1].dot(&zero));
        assert_eq!(10.0, vector![2.0, 0.0, 0.0].dot(&vector![5.0, 0.0, 0.0]));
        assert_eq!(0.0, vector![2.0, 0.0, 0.0].dot(&vector![0.0, 5.0, 0.0]));
        assert_eq!(8.609, Vector3::X.dot(&vector![8.609, 0.0, -5.2]));
        assert_eq!(-5.2, Vector3::Z.dot(&vector![8.609, 0.0, -5.2]));

        let a = vector![4.1, 0.7, -2.5];
        let b = vector![5.2, -8.3, 0.4];
        assert_eq!(a.dot(&b), b.dot(&a));
    }

    #[test]
    pub fn test_norm() {
        assert_eq!(0.0, Vector3::ZERO.norm());
        assert_eq!(1.0, Vector3::X.norm());
        assert_eq!(1.0, (-Vector3::Y).norm());
        assert_approx_eq!(2.0_f64.sqrt(), vector![1.0, 1.0, 0.0].norm());
        assert_eq!(
            vector![1.0, 6.0, 2.2].norm(),
            vector![-1.0, -6.0, -2.2].norm(),
        );
        assert_approx_eq!(3.0, vector![1.0, 2.0, 2.0].norm());
        assert_approx_eq!(5.0, vector![3.0, 4.0].norm());
        assert_approx_eq!(2.0, vector![1.0, 1.0, 1.0, 1.0].norm());
        assert_eq!(25.0, vector![3.0, 4.0].norm2());
    }

    #[test]
    pub fn test_norm_of_huge_vector_does_not_overflow() {
        let v = vector![1e300, 1e300, 0.0];
        assert!(v.norm().is_finite());
        assert!(v.norm2().is_infinite());
    }

    #[test]
    pub fn test_set_norm() {
        let mut v = vector![1.0, 2.0, 2.0];
        v.set_norm(10.0);
        assert_approx_eq!(v, vector![10.0 / 3.0, 20.0 / 3.0, 20.0 / 3.0]);

        let mut v = vector![1.0, 2.0, 2.0];
        v.set_norm(0.0);
        assert_eq!(v, Vector3::ZERO);

        let mut v = vector![3.0, 4.0];
        v.set_norm2(100.0);
        assert_approx_eq!(v, vector![6.0, 8.0]);

        let mut zero = Vector2::ZERO;
        zero.set_norm(5.0);
        assert_eq!(zero, Vector2::ZERO);
        assert_eq!(Vector4::ZERO.with_norm(5.0), Vector4::ZERO);
    }

    #[test]
    pub fn test_normalize() {
        assert_eq!(None, Vector3::ZERO.normalize());
        assert_eq!(Some(Vector3::Y), vector![0.0, 7.5, 0.0].normalize());
    }

    #[test]
    pub fn test_sum_and_components() {
        let v = vector![1.0, 2.0, 3.0, 4.0];
        assert_eq!(10.0, v.sum());
        assert_eq!(vec![1.0, 2.0, 3.0, 4.0], v.components().collect::<Vec<_>>());
        assert_eq!(0.0, vector![1.0, 2.0].get(2));
        assert_eq!(vector![1.0, 5.0], vector![1.0, 2.0].with_component(1, 5.0));
        assert_eq!(
            vector![1.0, 2.0, 3.0],
            [vector![1.0, 0.0, 0.0], vector![0.0, 2.0, 0.0], vector![0.0, 0.0, 3.0]]
                .iter()
                .sum::<Vector3>(),
        );
    }

    #[test]
    pub fn test_projection() {
        let v = vector![4.1, -8.3, 0.78];
        assert_eq!(Some(vector![4.1, 0.0, 0.0]), v.projected_to(&Vector3::X));
        assert_eq!(Some(vector![0.0, -8.3, 0.0]), v.projected_to(&Vector3::Y));
        assert_eq!(Some(vector![0.0, 0.0, 0.78]), v.projected_to(&Vector3::Z));
        assert_eq!(
            Some(Vector3::ZERO),
            Vector3::ZERO.projected_to(&vector![0.8, 78.048, -9.2]),
        );
        assert_eq!(None, v.projected_to(&Vector3::ZERO));
        assert_approx_eq!(v, v.projected_to(&v).expect("nonzero"));
        assert_approx_eq!(
            vector![0.0, -8.3, 0.78],
            v.rejected_from(&Vector3::X).expect("nonzero"),
        );
    }

    #[test]
    pub fn test_projection_to_plane() {
        let v = vector![4.1, -8.3, 0.78];
        assert_eq!(
            Some(vector![4.1, -8.3, 0.0]),
            v.projected_to_plane([&Vector3::X, &Vector3::Y]),
        );
        assert_eq!(None, v.projected_to_plane([&Vector3::X, &vector![1.0, 1.0, 0.0]]));
        assert_eq!(None, v.projected_to_plane([&Vector3::X, &Vector3::ZERO]));
    }

    #[test]
    pub fn test_collinearity() {
        let v = vector![2.0, 0.0, 0.0];
        assert!(v.is_collinear_with(&vector![5.0, 0.0, 0.0]));
        assert!(v.is_collinear_with(&vector![-3.0, 0.0, 0.0]));
        assert!(!v.is_collinear_with(&vector![0.0, 5.0, 0.0]));
        assert!(!v.is_collinear_with(&vector![1.0, 1.0, 0.0]));
        assert!(Vector3::ZERO.is_collinear_with(&v));

        let diagonal = vector![1.0, 2.3, -4.01];
        assert!(diagonal.is_collinear_within(&(diagonal * 3.0), Precision::APPROX));
    }

    #[test]
    pub fn test_display_and_parse() {
        assert_eq!("(1, -2.5)", vector![1.0, -2.5].to_string());
        assert_eq!("(0.1, 2, 3)", vector![0.1, 2.0, 3.0].to_string());
        assert_eq!(Ok(vector![1.0, -2.5]), " ( 1, -2.5 ) ".parse());
        let v = vector![0.1, 1e-20, -7.25, 12.0];
        assert_eq!(Ok(v), v.to_string().parse());

        assert_eq!(
            Err(ParseVectorError::MissingParentheses),
            "1, 2".parse::<Vector2>(),
        );
        assert_eq!(
            Err(ParseVectorError::DimensionMismatch(DimensionMismatch {
                expected: 2,
                got: 3,
            })),
            "(1, 2, 3)".parse::<Vector2>(),
        );
        assert!(matches!(
            "(1, x)".parse::<Vector2>(),
            Err(ParseVectorError::InvalidComponent(_)),
        ));
    }

    #[test]
    pub fn test_array_conversions() {
        assert_eq!(Vector3::from([1.0, 2.0, 3.0]), vector![1.0, 2.0, 3.0]);
        assert_eq!([1.0, 2.0], <[Float; 2]>::from(vector![1.0, 2.0]));
        assert_eq!(
            Ok(vector![1.0, 2.0, 3.0, 4.0]),
            Vector4::try_from([1.0, 2.0, 3.0, 4.0].as_slice()),
        );
        assert_eq!(
            Err(DimensionMismatch {
                expected: 3,
                got: 1,
            }),
            Vector3::try_from([1.0].as_slice()),
        );
    }

    #[test]
    pub fn test_indexing() {
        let mut v = vector![1.0, 2.0, 3.0];
        assert_eq!(2.0, v[1]);
        v[2] = 7.0;
        assert_eq!(vector![1.0, 2.0, 7.0], v);
    }

    #[test]
    #[should_panic(expected = "vector index out of bounds")]
    pub fn test_index_out_of_bounds() {
        let mut v = vector![1.0, 2.0];
        v[2] = 1.0;
    }
}
