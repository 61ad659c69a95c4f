use std::fmt;

use super::{Frame, Shape, Solid, impl_solid_point_set};
use crate::{Float, PointSet, PointWhichSide, Precision, Space};

/// Filled ball: every point within `radius` of the center.
///
/// In 2D this is a [`super::Circle`] and in 3D a [`super::Sphere`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ball<V: Space> {
    /// Distance from the center to the boundary.
    pub radius: Float,
    /// Center of the ball.
    pub center: V,
    /// Orientation of the ball. This does not affect which points it
    /// contains.
    pub orientation: V::Orientation,
}

impl<V: Space> Ball<V> {
    /// Constructs a ball centered at the origin.
    pub fn new(radius: Float) -> Self {
        Self {
            radius,
            center: V::ZERO,
            orientation: V::Orientation::default(),
        }
    }
    /// Returns the ball moved to a new center.
    #[must_use]
    pub fn with_center(mut self, center: V) -> Self {
        self.center = center;
        self
    }
    /// Returns the ball with a new orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: V::Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Returns the boundary of the ball.
    pub fn frame(self) -> Frame<Self> {
        Frame(self)
    }

    fn nearest_outside(&self, to: &V) -> V {
        self.center + (*to - self.center).with_norm(self.radius)
    }
}

impl_solid_point_set!(Ball);

impl<V: Space> Shape<V> for Ball<V> {
    fn set_center(&mut self, center: V) {
        self.center = center;
    }

    fn orientation(&self) -> V::Orientation {
        self.orientation
    }
    fn set_orientation(&mut self, orientation: V::Orientation) {
        self.orientation = orientation;
    }

    fn size(&self) -> Float {
        self.radius * 2.0
    }
    fn set_size(&mut self, size: Float) {
        self.radius = size / 2.0;
    }

    fn extents(&self) -> V {
        V::splat(self.size())
    }

    fn which_side(&self, point: &V, prec: Precision) -> PointWhichSide {
        let distance = self.center.distance_to(point);
        PointWhichSide::from_distance_cmp(prec.cmp(distance, self.radius))
    }
}

impl<V: Space> Solid<V> for Ball<V> {
    fn nearest_boundary_point(&self, to: &V) -> V {
        let offset = *to - self.center;
        if offset.is_zero() {
            self.center + V::unit(0) * self.radius
        } else {
            self.center + offset.with_norm(self.radius)
        }
    }
}

impl<V: Space> fmt::Display for Ball<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { radius, center, .. } = self;
        write!(f, "{}(center: {center}, radius: {radius})", V::BALL_NAME)
    }
}
