//! 3D vectors.

use crate::{Float, Quaternion, Vector2};

/// 3D vector.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[repr(C)]
pub struct Vector3 {
    /// X component.
    pub x: Float,
    /// Y component.
    pub y: Float,
    /// Z component.
    pub z: Float,
}

/// 3D point, represented by its displacement from the origin.
pub type Point3 = Vector3;

impl_vector!(Vector3, 3, { 0 => x, 1 => y, 2 => z });

impl Vector3 {
    /// Unit vector along the X axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit vector along the Y axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit vector along the Z axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Constructs a 3D vector.
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }

    /// Returns the right-handed cross product of two vectors.
    #[must_use]
    pub fn cross(&self, rhs: &Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Drops the Z component.
    pub fn to_vector2(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }
    /// Converts the vector to a pure quaternion (one with zero real part).
    pub fn to_quaternion(&self) -> Quaternion {
        Quaternion::from_parts(0.0, *self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vector;

    #[test]
    fn test_cross_product() {
        assert_eq!(Vector3::Z, Vector3::X.cross(&Vector3::Y));
        assert_eq!(Vector3::X, Vector3::Y.cross(&Vector3::Z));
        assert_eq!(Vector3::Y, Vector3::Z.cross(&Vector3::X));
        assert_eq!(-Vector3::Z, Vector3::Y.cross(&Vector3::X));

        let a = vector![1.0, 2.0, 3.0];
        let b = vector![-4.0, 0.5, 2.0];
        let c = a.cross(&b);
        assert_eq!(vector![2.5, -14.0, 8.5], c);
        assert_eq!(0.0, c.dot(&a));
        assert_eq!(0.0, c.dot(&b));
        assert_eq!(Vector3::ZERO, a.cross(&(a * 2.0)));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(vector![1.0, 2.0], vector![1.0, 2.0, 3.0].to_vector2());
        assert_eq!(
            vector![1.0, 2.0, 3.0, 0.0],
            vector![1.0, 2.0, 3.0].to_quaternion(),
        );
    }
}
