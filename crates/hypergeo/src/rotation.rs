//! Rotations of vectors in 2D and 3D.

use std::fmt;
use std::ops::Neg;

use crate::{Float, Quaternion, Vector, Vector2, Vector3};

/// Value that can be rotated by a rotation of type `R`.
///
/// In 2D, `R` is an angle in radians. In 3D, `R` may be a [`Quaternion`], an
/// [`AxisAngle`], or a rotation vector whose norm is the angle.
pub trait Rotate<R>: Sized {
    /// Returns a copy rotated by `rotation`.
    #[must_use]
    fn rotated(&self, rotation: R) -> Self;

    /// Rotates in place by `rotation`.
    fn rotate(&mut self, rotation: R) {
        *self = self.rotated(rotation);
    }
}

/// Rotation around an axis through the origin, following the right-hand
/// rule.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct AxisAngle {
    /// Axis of rotation. Need not be normalized.
    pub axis: Vector3,
    /// Angle of rotation in radians.
    pub angle: Float,
}

impl AxisAngle {
    /// Constructs an axis-angle rotation.
    pub const fn new(axis: Vector3, angle: Float) -> Self {
        Self { axis, angle }
    }
}

impl fmt::Display for AxisAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rad around {}", self.angle, self.axis)
    }
}

/// Vector space that shapes can live in, with an associated way of
/// describing their orientation.
pub trait Space: Vector {
    /// Orientation of a shape in the space. The default value is the
    /// identity, and negating an orientation inverts it.
    type Orientation: fmt::Debug
        + fmt::Display
        + Default
        + Copy
        + PartialEq
        + Neg<Output = Self::Orientation>;

    /// Name of a filled round shape in the space.
    const BALL_NAME: &'static str;
    /// Name of a box with independent side lengths in the space.
    const ORTHOTOPE_NAME: &'static str;
    /// Name of a box with equal side lengths in the space.
    const HYPERCUBE_NAME: &'static str;

    /// Returns the vector rotated by an orientation.
    #[must_use]
    fn oriented(&self, orientation: Self::Orientation) -> Self;
}

/// Orientation is the counterclockwise angle in radians.
impl Space for Vector2 {
    type Orientation = Float;

    const BALL_NAME: &'static str = "Circle";
    const ORTHOTOPE_NAME: &'static str = "Rectangle";
    const HYPERCUBE_NAME: &'static str = "Square";

    fn oriented(&self, angle: Float) -> Self {
        self.rotated(angle)
    }
}

/// Orientation is a rotation vector: the axis of rotation scaled by the angle
/// in radians.
impl Space for Vector3 {
    type Orientation = Vector3;

    const BALL_NAME: &'static str = "Sphere";
    const ORTHOTOPE_NAME: &'static str = "Cuboid";
    const HYPERCUBE_NAME: &'static str = "Cube";

    fn oriented(&self, rotation: Vector3) -> Self {
        self.rotated(rotation)
    }
}

/// Rotates `(a, b)` counterclockwise by the angle with the given sine and
/// cosine.
fn rotate_pair(a: Float, b: Float, (sin, cos): (Float, Float)) -> (Float, Float) {
    (a * cos - b * sin, a * sin + b * cos)
}

impl Rotate<Float> for Vector2 {
    fn rotated(&self, angle: Float) -> Self {
        let (x, y) = rotate_pair(self.x, self.y, angle.sin_cos());
        Self::new(x, y)
    }
}

impl Rotate<Quaternion> for Vector3 {
    /// Rotates by a quaternion, which need not be normalized. The zero
    /// quaternion leaves the vector unchanged.
    fn rotated(&self, q: Quaternion) -> Self {
        if q.is_zero() {
            log::trace!("skipping rotation of {self} by zero quaternion");
            return *self;
        }
        (q * self.to_quaternion() * q.inv()).imaginary()
    }
}

impl Rotate<AxisAngle> for Vector3 {
    /// Rotates around an axis. A zero axis leaves the vector unchanged.
    fn rotated(&self, AxisAngle { axis, angle }: AxisAngle) -> Self {
        match Quaternion::from_axis_angle(axis, angle) {
            Some(q) => self.rotated(q),
            None => {
                log::trace!("skipping rotation of {self} around zero axis");
                *self
            }
        }
    }
}

impl Rotate<Vector3> for Vector3 {
    /// Rotates by a rotation vector, whose direction is the axis and whose
    /// norm is the angle in radians.
    fn rotated(&self, rotation: Vector3) -> Self {
        if rotation.is_zero() {
            return *self;
        }
        self.rotated(AxisAngle::new(rotation, rotation.norm()))
    }
}

impl Vector3 {
    /// Returns the vector rotated by `angle` radians around `axis`.
    #[must_use]
    pub fn rotated_around(&self, angle: Float, axis: Vector3) -> Self {
        self.rotated(AxisAngle::new(axis, angle))
    }

    /// Returns the vector rotated by `angle` radians around the X axis.
    #[must_use]
    pub fn rotated_around_x(&self, angle: Float) -> Self {
        let (y, z) = rotate_pair(self.y, self.z, angle.sin_cos());
        Self::new(self.x, y, z)
    }
    /// Returns the vector rotated by `angle` radians around the Y axis.
    #[must_use]
    pub fn rotated_around_y(&self, angle: Float) -> Self {
        let (z, x) = rotate_pair(self.z, self.x, angle.sin_cos());
        Self::new(x, self.y, z)
    }
    /// Returns the vector rotated by `angle` radians around the Z axis.
    #[must_use]
    pub fn rotated_around_z(&self, angle: Float) -> Self {
        let (x, y) = rotate_pair(self.x, self.y, angle.sin_cos());
        Self::new(x, y, self.z)
    }
}
