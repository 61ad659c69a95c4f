//! Shapes with a center, an orientation, and a size.
//!
//! Filled shapes ([`Ball`], [`Orthotope`], [`Hypercube`]) contain their
//! interior and boundary. A [`Frame`] wraps a filled shape and contains only
//! its boundary.

mod frame;
mod orthotope;
mod round;

pub use frame::Frame;
pub use orthotope::{Hypercube, Orthotope};
pub use round::Ball;

use crate::{Float, PointSet, PointWhichSide, Precision, Space, Vector2, Vector3};

/// Filled disk.
pub type Circle = Ball<Vector2>;
/// Filled ball.
pub type Sphere = Ball<Vector3>;
/// Filled rectangle with independent width and height.
pub type Rectangle = Orthotope<Vector2>;
/// Filled box with independent width, height, and depth.
pub type Cuboid = Orthotope<Vector3>;
/// Filled square.
pub type Square = Hypercube<Vector2>;
/// Filled cube.
pub type Cube = Hypercube<Vector3>;

/// Circle outline.
pub type CircleFrame = Frame<Circle>;
/// Spherical shell.
pub type SphereFrame = Frame<Sphere>;
/// Rectangle outline.
pub type RectangleFrame = Frame<Rectangle>;
/// Surface of a cuboid.
pub type CuboidFrame = Frame<Cuboid>;
/// Square outline.
pub type SquareFrame = Frame<Square>;
/// Surface of a cube.
pub type CubeFrame = Frame<Cube>;

/// Shape positioned in space by its center and orientation.
pub trait Shape<V: Space>: PointSet<V> {
    /// Returns the center of the shape.
    fn center(&self) -> V {
        self.pivotal_point()
    }
    /// Moves the center of the shape.
    fn set_center(&mut self, center: V);
    /// Translates the shape by `offset`.
    fn translate(&mut self, offset: V) {
        self.set_center(self.center() + offset);
    }

    /// Returns the orientation of the shape.
    fn orientation(&self) -> V::Orientation;
    /// Sets the orientation of the shape.
    fn set_orientation(&mut self, orientation: V::Orientation);

    /// Returns the diameter of the smallest ball centered on the shape that
    /// contains the whole shape.
    fn size(&self) -> Float;
    /// Scales the shape uniformly so that [`Shape::size()`] is `size`,
    /// keeping the aspect ratio.
    fn set_size(&mut self, size: Float);

    /// Returns the side lengths of the shape's bounding box along each of
    /// its local axes.
    fn extents(&self) -> V;

    /// Returns the position of `point` relative to the boundary of the
    /// shape.
    fn which_side(&self, point: &V, prec: Precision) -> PointWhichSide;

    /// Converts a point from global coordinates to coordinates relative to
    /// the center and orientation of the shape.
    fn to_local(&self, point: &V) -> V {
        (*point - self.center()).oriented(-self.orientation())
    }
    /// Converts a point from coordinates relative to the center and
    /// orientation of the shape to global coordinates.
    fn to_global(&self, local: &V) -> V {
        local.oriented(self.orientation()) + self.center()
    }
}

/// Shape with an interior, whose boundary can be taken as a [`Frame`].
pub trait Solid<V: Space>: Shape<V> {
    /// Returns the point on the boundary of the shape that is nearest to
    /// `to`, even if `to` is in the interior.
    fn nearest_boundary_point(&self, to: &V) -> V;
}

/// Implements [`PointSet`] for a filled shape from its [`Shape::which_side()`]
/// and a `nearest_outside` method used for points that are not contained.
macro_rules! impl_solid_point_set {
    ($type:ident) => {
        impl<V: Space> PointSet<V> for $type<V> {
            fn pivotal_point(&self) -> V {
                self.center
            }

            fn contains_within(&self, point: &V, prec: Precision) -> bool {
                self.which_side(point, prec).is_in_closure()
            }

            fn nearest_point(&self, to: &V) -> V {
                if self.contains(to) {
                    *to
                } else {
                    self.nearest_outside(to)
                }
            }
        }
    };
}
pub(crate) use impl_solid_point_set;
