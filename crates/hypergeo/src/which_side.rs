//! Location of a point relative to the boundary of a shape.

use std::cmp::Ordering;
use std::ops::Neg;

/// Position of a point relative to the boundary of a shape.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PointWhichSide {
    /// The point is on the boundary between inside and outside.
    On,
    /// The point is strictly inside the shape.
    Inside,
    /// The point is strictly outside the shape.
    Outside,
}

impl Neg for PointWhichSide {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            PointWhichSide::Inside => PointWhichSide::Outside,
            PointWhichSide::Outside => PointWhichSide::Inside,
            other => other,
        }
    }
}

impl PointWhichSide {
    /// Returns the location of a point from the comparison of its distance to
    /// the boundary distance, such as a radius or half-extent.
    pub fn from_distance_cmp(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => PointWhichSide::Inside,
            Ordering::Equal => PointWhichSide::On,
            Ordering::Greater => PointWhichSide::Outside,
        }
    }

    /// Returns the location of a point from several constraints that must all
    /// hold for the point to be in the shape, such as one per axis of a box.
    ///
    /// The point is outside if any constraint is violated, on the boundary if
    /// any constraint is tight, and inside otherwise.
    pub fn from_constraints(constraints: impl IntoIterator<Item = PointWhichSide>) -> Self {
        let mut ret = PointWhichSide::Inside;
        for which_side in constraints {
            match which_side {
                PointWhichSide::Outside => return PointWhichSide::Outside,
                PointWhichSide::On => ret = PointWhichSide::On,
                PointWhichSide::Inside => (),
            }
        }
        ret
    }

    /// Returns whether the point is in the closed (filled) shape.
    pub fn is_in_closure(self) -> bool {
        self != PointWhichSide::Outside
    }
}
