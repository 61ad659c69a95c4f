use std::fmt;

use super::{Shape, Solid};
use crate::{Float, PointSet, PointWhichSide, Precision, Space};

/// Boundary of a filled shape, excluding its interior.
///
/// A point is in the frame if and only if it is exactly on the boundary of
/// the filled shape.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Frame<S>(pub S);

impl<S> Frame<S> {
    /// Constructs the boundary of a filled shape.
    pub fn new(filled: S) -> Self {
        Self(filled)
    }
    /// Returns the filled shape whose boundary this is.
    pub fn filled(self) -> S {
        self.0
    }
}

impl<V: Space, S: Solid<V>> PointSet<V> for Frame<S> {
    fn pivotal_point(&self) -> V {
        self.0.pivotal_point()
    }

    fn contains_within(&self, point: &V, prec: Precision) -> bool {
        self.0.which_side(point, prec) == PointWhichSide::On
    }

    fn nearest_point(&self, to: &V) -> V {
        if self.contains(to) {
            *to
        } else {
            self.0.nearest_boundary_point(to)
        }
    }
}

impl<V: Space, S: Solid<V>> Shape<V> for Frame<S> {
    fn set_center(&mut self, center: V) {
        self.0.set_center(center);
    }

    fn orientation(&self) -> V::Orientation {
        self.0.orientation()
    }
    fn set_orientation(&mut self, orientation: V::Orientation) {
        self.0.set_orientation(orientation);
    }

    fn size(&self) -> Float {
        self.0.size()
    }
    fn set_size(&mut self, size: Float) {
        self.0.set_size(size);
    }

    fn extents(&self) -> V {
        self.0.extents()
    }

    fn which_side(&self, point: &V, prec: Precision) -> PointWhichSide {
        self.0.which_side(point, prec)
    }
}

impl<S: fmt::Display> fmt::Display for Frame<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}
