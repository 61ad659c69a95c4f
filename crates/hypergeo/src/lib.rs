//! Vectors, quaternions, lines, and shapes in 2D and 3D, with containment and
//! nearest-point queries.
//!
//! Containment uses exact floating-point comparisons by default. Pass a
//! [`Precision`] to the `*_within` methods to tolerate rounding error.

pub use {approx, num_traits as num};

/// Floating-point type used for geometry.
pub type Float = f64;

/// Small floating-point value used for approximate comparisons.
pub const EPSILON: Float = 0.000001;

/// Asserts that both arguments are approximately equal.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::EPSILON)
    };
}

#[macro_use]
mod impl_macros;
#[macro_use]
mod vector;

pub mod error;
pub mod lines;
mod point_set;
mod precision;
mod quaternion;
mod rotation;
pub mod shapes;
mod vector2;
mod vector3;
mod which_side;

#[cfg(test)]
mod tests;

/// Structs, traits, functions, and constants.
pub mod prelude {
    pub use crate::error::{DimensionMismatch, ParseVectorError};
    pub use crate::lines::{
        RayLine, SegmentLine, StraightLine, ray_from_left, ray_from_right, segment, straight,
    };
    pub use crate::precision::Precision;
    pub use crate::quaternion::{Point4, Quaternion, Vector4};
    pub use crate::rotation::AxisAngle;
    pub use crate::shapes::{
        Ball, Circle, CircleFrame, Cube, CubeFrame, Cuboid, CuboidFrame, Frame, Hypercube,
        Orthotope, Rectangle, RectangleFrame, Sphere, SphereFrame, Square, SquareFrame,
    };
    pub use crate::traits::*;
    pub use crate::vector2::{Point2, Vector2};
    pub use crate::vector3::{Point3, Vector3};
    pub use crate::which_side::PointWhichSide;
    pub use crate::{EPSILON, Float, point, vector};
}
pub use prelude::*;

/// Traits only.
pub mod traits {
    pub use approx::AbsDiffEq;

    pub use crate::lines::Line;
    pub use crate::point_set::PointSet;
    pub use crate::rotation::{Rotate, Space};
    pub use crate::shapes::{Shape, Solid};
    pub use crate::vector::Vector;
}
