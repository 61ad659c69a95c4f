//! 4D vectors, which double as quaternions.

use std::ops::Mul;

use crate::{Float, Vector, Vector2, Vector3};

/// 4D vector, also used as a quaternion with real part `w` and imaginary part
/// `(x, y, z)`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[repr(C)]
pub struct Vector4 {
    /// X component, or the coefficient of `i`.
    pub x: Float,
    /// Y component, or the coefficient of `j`.
    pub y: Float,
    /// Z component, or the coefficient of `k`.
    pub z: Float,
    /// W component, or the real part.
    pub w: Float,
}

/// Quaternion with real part `w` and imaginary part `(x, y, z)`.
pub type Quaternion = Vector4;

/// 4D point, represented by its displacement from the origin.
pub type Point4 = Vector4;

impl_vector!(Vector4, 4, { 0 => x, 1 => y, 2 => z, 3 => w });

/// Hamilton product.
impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let (r1, v1) = (self.real(), self.imaginary());
        let (r2, v2) = (rhs.real(), rhs.imaginary());
        Self::from_parts(
            r1 * r2 - v1.dot(&v2),
            v2 * r1 + v1 * r2 + v1.cross(&v2),
        )
    }
}
impl_forward_bin_ops_to_ref! {
    impl Mul for Quaternion { fn mul() }
}

impl Vector4 {
    /// Unit vector along the X axis, also the quaternion `i`.
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    /// Unit vector along the Y axis, also the quaternion `j`.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    /// Unit vector along the Z axis, also the quaternion `k`.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    /// Unit vector along the W axis, also the identity quaternion.
    pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Identity quaternion, which represents no rotation.
    pub const IDENTITY: Self = Self::W;

    /// Constructs a 4D vector.
    pub const fn new(x: Float, y: Float, z: Float, w: Float) -> Self {
        Self { x, y, z, w }
    }
    /// Constructs a quaternion from its real and imaginary parts.
    pub const fn from_parts(real: Float, imaginary: Vector3) -> Self {
        Self::new(imaginary.x, imaginary.y, imaginary.z, real)
    }
    /// Constructs the unit quaternion that rotates by `angle` radians around
    /// `axis`, following the right-hand rule.
    ///
    /// The axis is normalized first if it is not already. Returns `None` if
    /// `axis` is zero.
    pub fn from_axis_angle(axis: Vector3, angle: Float) -> Option<Self> {
        let axis = if axis.norm() == 1.0 {
            axis
        } else {
            axis.normalize()?
        };
        let half_angle = angle / 2.0;
        Some(Self::from_parts(half_angle.cos(), axis * half_angle.sin()))
    }

    /// Returns the real part of the quaternion.
    pub fn real(&self) -> Float {
        self.w
    }
    /// Returns the imaginary part of the quaternion.
    pub fn imaginary(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Returns the conjugate of the quaternion, which has the imaginary part
    /// negated.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::from_parts(self.w, -self.imaginary())
    }
    /// Returns the inverse of the quaternion, satisfying `q * q.inv() == 1`.
    ///
    /// The inverse of the zero quaternion has non-finite components.
    #[must_use]
    pub fn inv(&self) -> Self {
        self.conjugate() / self.norm2()
    }

    /// Returns the X and Y components.
    pub fn to_vector2(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }
    /// Returns the X, Y, and Z components, which are the imaginary part of
    /// the quaternion.
    pub fn to_vector3(&self) -> Vector3 {
        self.imaginary()
    }
}
