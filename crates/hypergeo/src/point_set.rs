//! Sets of points that support containment and nearest-point queries.

use crate::{Float, Precision, Vector};

/// Set of points in a vector space, such as a line or a shape.
pub trait PointSet<V: Vector> {
    /// Returns the reference point of the set: the first defining point of a
    /// line, or the center of a shape.
    fn pivotal_point(&self) -> V;

    /// Returns whether `point` is in the set, using exact comparisons.
    ///
    /// A point that is off by a rounding error is not contained. Use
    /// [`PointSet::contains_within()`] to absorb rounding.
    fn contains(&self, point: &V) -> bool {
        self.contains_within(point, Precision::EXACT)
    }
    /// Returns whether `point` is in the set, using the given precision for
    /// comparisons.
    fn contains_within(&self, point: &V, prec: Precision) -> bool;

    /// Returns the point in the set that is nearest to `to`. If `to` is in
    /// the set according to [`PointSet::contains()`], returns `to`
    /// unchanged.
    fn nearest_point(&self, to: &V) -> V;

    /// Returns the distance from `point` to the nearest point in the set.
    fn distance_to(&self, point: &V) -> Float {
        self.nearest_point(point).distance_to(point)
    }
}
