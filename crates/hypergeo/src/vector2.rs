//! 2D vectors.

use crate::{Float, Quaternion, Vector, Vector3};

/// 2D vector.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[repr(C)]
pub struct Vector2 {
    /// X component.
    pub x: Float,
    /// Y component.
    pub y: Float,
}

/// 2D point, represented by its displacement from the origin.
pub type Point2 = Vector2;

impl_vector!(Vector2, 2, { 0 => x, 1 => y });

impl Vector2 {
    /// Unit vector along the X axis.
    pub const X: Self = Self::new(1.0, 0.0);
    /// Unit vector along the Y axis.
    pub const Y: Self = Self::new(0.0, 1.0);

    /// Constructs a 2D vector.
    pub const fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }
    /// Constructs a 2D vector from polar coordinates.
    pub fn from_polar(radius: Float, azimuth: Float) -> Self {
        let (sin, cos) = azimuth.sin_cos();
        Self::new(radius * cos, radius * sin)
    }

    /// Returns the distance from the origin. This is the same as the norm.
    pub fn radius(&self) -> Float {
        self.norm()
    }
    /// Sets the distance from the origin, keeping the azimuth.
    pub fn set_radius(&mut self, radius: Float) {
        self.set_norm(radius);
    }
    /// Returns the counterclockwise angle from the X axis, in the range
    /// `-π..=π`.
    pub fn azimuth(&self) -> Float {
        self.y.atan2(self.x)
    }
    /// Sets the counterclockwise angle from the X axis, keeping the radius.
    pub fn set_azimuth(&mut self, azimuth: Float) {
        *self = Self::from_polar(self.radius(), azimuth);
    }

    /// Returns the vector rotated a quarter turn counterclockwise.
    #[must_use]
    pub fn perpendicular(&self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Extends the vector to 3D with a zero Z component.
    pub fn to_vector3(&self) -> Vector3 {
        Vector3::new(self.x, self.y, 0.0)
    }
    /// Converts the vector to a pure quaternion.
    pub fn to_quaternion(&self) -> Quaternion {
        self.to_vector3().to_quaternion()
    }
}

impl From<Vector2> for Vector3 {
    fn from(v: Vector2) -> Self {
        v.to_vector3()
    }
}
