//! Line segments, rays, and infinite straight lines.
//!
//! Every line is stored as a pivotal point and a descriptor vector. The
//! second defining point is `b = pivotal + descriptor`. If the descriptor is
//! zero, the line degenerates to its pivotal point.

use std::fmt;

use crate::{Float, PointSet, Precision, Rotate, Vector};

/// Line defined by two points.
pub trait Line<V: Vector>: PointSet<V> {
    /// Returns the displacement from the pivotal point to the second
    /// defining point.
    fn descriptor(&self) -> V;
    /// Sets the displacement from the pivotal point to the second defining
    /// point, keeping the pivotal point.
    fn set_descriptor(&mut self, descriptor: V);
    /// Moves the pivotal point, keeping the descriptor. This translates the
    /// whole line.
    fn set_pivotal_point(&mut self, point: V);

    /// Returns the first defining point, which is the pivotal point.
    fn a(&self) -> V {
        self.pivotal_point()
    }
    /// Returns the second defining point.
    fn b(&self) -> V {
        self.pivotal_point() + self.descriptor()
    }
    /// Moves the second defining point, keeping the pivotal point.
    fn set_b(&mut self, b: V) {
        self.set_descriptor(b - self.pivotal_point());
    }

    /// Translates the line by `offset`.
    fn translate(&mut self, offset: V) {
        self.set_pivotal_point(self.pivotal_point() + offset);
    }
    /// Returns whether the line has degenerated to a single point.
    fn is_degenerate(&self) -> bool {
        self.descriptor().is_zero()
    }
}

/// Line segment between two points.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct SegmentLine<V> {
    pivotal: V,
    descriptor: V,
}

/// Half-infinite line that starts at an origin and passes through a second
/// point.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct RayLine<V> {
    origin: V,
    descriptor: V,
}

/// Infinite line through two points.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct StraightLine<V> {
    pivotal: V,
    descriptor: V,
}

macro_rules! impl_line {
    ($type:ident, $pivotal:ident) => {
        impl<V: Vector> $type<V> {
            /// Constructs a line from its pivotal point and descriptor
            /// vector.
            pub fn from_descriptor(pivotal: V, descriptor: V) -> Self {
                Self {
                    $pivotal: pivotal,
                    descriptor,
                }
            }
        }

        impl<V: Vector> Line<V> for $type<V> {
            fn descriptor(&self) -> V {
                self.descriptor
            }
            fn set_descriptor(&mut self, descriptor: V) {
                self.descriptor = descriptor;
            }
            fn set_pivotal_point(&mut self, point: V) {
                self.$pivotal = point;
            }
        }

        /// Rotates the line around its pivotal point.
        impl<V: Vector + Rotate<R>, R> Rotate<R> for $type<V> {
            fn rotated(&self, rotation: R) -> Self {
                Self {
                    $pivotal: self.$pivotal,
                    descriptor: self.descriptor.rotated(rotation),
                }
            }
        }

        impl<V: Vector> fmt::Display for $type<V> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}[{}, {}]", stringify!($type), self.a(), self.b())
            }
        }
    };
}

impl_line!(SegmentLine, pivotal);
impl_line!(RayLine, origin);
impl_line!(StraightLine, pivotal);

/// Returns `(point - pivotal) · descriptor` if `point` is on the infinite
/// line through `pivotal` with direction `descriptor`, or `None` if it is
/// not.
fn line_parameter<V: Vector>(pivotal: V, descriptor: V, point: V, prec: Precision) -> Option<Float> {
    let r = point - pivotal;
    if descriptor.is_zero() {
        return prec.eq_zero(r.norm()).then_some(0.0);
    }
    r.is_collinear_within(&descriptor, prec)
        .then(|| r.dot(&descriptor))
}

/// Returns the projection of `to` onto the infinite line through `pivotal`
/// with direction `descriptor`, or `pivotal` if the line is degenerate.
fn offset_projection<V: Vector>(pivotal: V, descriptor: V, to: V) -> V {
    match (to - pivotal).projected_to(&descriptor) {
        Some(projection) => pivotal + projection,
        None => {
            log::trace!("line through {pivotal} is degenerate; using its pivotal point");
            pivotal
        }
    }
}

impl<V: Vector> SegmentLine<V> {
    /// Constructs a segment between two points.
    pub fn new(a: V, b: V) -> Self {
        Self::from_descriptor(a, b - a)
    }

    /// Returns the distance between the endpoints.
    pub fn length(&self) -> Float {
        self.descriptor.norm()
    }
    /// Returns the point halfway between the endpoints.
    pub fn midpoint(&self) -> V {
        self.pivotal + self.descriptor / 2.0
    }
}

impl<V: Vector> PointSet<V> for SegmentLine<V> {
    fn pivotal_point(&self) -> V {
        self.pivotal
    }

    fn contains_within(&self, point: &V, prec: Precision) -> bool {
        line_parameter(self.pivotal, self.descriptor, *point, prec)
            .is_some_and(|d| prec.lt_eq(0.0, d) && prec.lt_eq(d, self.descriptor.norm2()))
    }

    fn nearest_point(&self, to: &V) -> V {
        if self.contains(to) {
            return *to;
        }
        let t = (*to - self.pivotal).dot(&self.descriptor);
        if t < 0.0 {
            self.pivotal
        } else if t > self.descriptor.norm2() {
            self.b()
        } else {
            offset_projection(self.pivotal, self.descriptor, *to)
        }
    }
}

impl<V: Vector> RayLine<V> {
    /// Constructs a ray that starts at `origin` and passes through
    /// `through`.
    pub fn new(origin: V, through: V) -> Self {
        Self::from_descriptor(origin, through - origin)
    }

    /// Returns the point where the ray starts.
    pub fn origin(&self) -> V {
        self.origin
    }
}

impl<V: Vector> PointSet<V> for RayLine<V> {
    fn pivotal_point(&self) -> V {
        self.origin
    }

    fn contains_within(&self, point: &V, prec: Precision) -> bool {
        line_parameter(self.origin, self.descriptor, *point, prec)
            .is_some_and(|d| prec.gt_eq(d, 0.0))
    }

    fn nearest_point(&self, to: &V) -> V {
        if self.contains(to) {
            *to
        } else if self.descriptor.dot(&(*to - self.origin)) < 0.0 {
            self.origin
        } else {
            offset_projection(self.origin, self.descriptor, *to)
        }
    }
}

impl<V: Vector> StraightLine<V> {
    /// Constructs an infinite line through two points.
    pub fn new(a: V, b: V) -> Self {
        Self::from_descriptor(a, b - a)
    }
}

impl<V: Vector> PointSet<V> for StraightLine<V> {
    fn pivotal_point(&self) -> V {
        self.pivotal
    }

    fn contains_within(&self, point: &V, prec: Precision) -> bool {
        line_parameter(self.pivotal, self.descriptor, *point, prec).is_some()
    }

    fn nearest_point(&self, to: &V) -> V {
        if self.contains(to) {
            *to
        } else {
            offset_projection(self.pivotal, self.descriptor, *to)
        }
    }
}

/// Constructs a segment between `a` and `b`.
pub fn segment<V: Vector>(a: V, b: V) -> SegmentLine<V> {
    SegmentLine::new(a, b)
}
/// Constructs a ray that starts at `a` and passes through `b`.
pub fn ray_from_left<V: Vector>(a: V, b: V) -> RayLine<V> {
    RayLine::new(a, b)
}
/// Constructs a ray that starts at `b` and passes through `a`.
pub fn ray_from_right<V: Vector>(a: V, b: V) -> RayLine<V> {
    RayLine::new(b, a)
}
/// Constructs an infinite line through `a` and `b`.
pub fn straight<V: Vector>(a: V, b: V) -> StraightLine<V> {
    StraightLine::new(a, b)
}
