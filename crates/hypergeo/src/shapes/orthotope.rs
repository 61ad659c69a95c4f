use std::fmt;

use float_ord::FloatOrd;

use super::{Frame, Shape, Solid, impl_solid_point_set};
use crate::{Float, PointSet, PointWhichSide, Precision, Space, Vector, Vector2, Vector3};

/// Filled box with independent side lengths.
///
/// In 2D this is a [`super::Rectangle`] and in 3D a [`super::Cuboid`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Orthotope<V: Space> {
    /// Distance from the center to each pair of opposite faces, measured
    /// along the local axes.
    pub half_extents: V,
    /// Center of the box.
    pub center: V,
    /// Orientation of the box.
    pub orientation: V::Orientation,
}

/// Filled box whose sides all have the same length.
///
/// In 2D this is a [`super::Square`] and in 3D a [`super::Cube`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hypercube<V: Space> {
    /// Half of the side length.
    pub half_side: Float,
    /// Center of the box.
    pub center: V,
    /// Orientation of the box.
    pub orientation: V::Orientation,
}

impl Orthotope<Vector2> {
    /// Constructs a rectangle centered at the origin.
    pub fn new(width: Float, height: Float) -> Self {
        Self::from_extents(Vector2::new(width, height))
    }
}

impl Orthotope<Vector3> {
    /// Constructs a cuboid centered at the origin.
    pub fn new(width: Float, height: Float, depth: Float) -> Self {
        Self::from_extents(Vector3::new(width, height, depth))
    }

    /// Returns the side length along the local Z axis.
    pub fn depth(&self) -> Float {
        self.extent(2)
    }
    /// Sets the side length along the local Z axis.
    pub fn set_depth(&mut self, depth: Float) {
        self.set_extent(2, depth);
    }
}

impl<V: Space> Orthotope<V> {
    /// Constructs a box centered at the origin from the distance from the
    /// center to each face.
    pub fn from_half_extents(half_extents: V) -> Self {
        Self {
            half_extents,
            center: V::ZERO,
            orientation: V::Orientation::default(),
        }
    }
    /// Constructs a box centered at the origin from its side lengths.
    pub fn from_extents(extents: V) -> Self {
        Self::from_half_extents(extents / 2.0)
    }
    /// Returns the box moved to a new center.
    #[must_use]
    pub fn with_center(mut self, center: V) -> Self {
        self.center = center;
        self
    }
    /// Returns the box with a new orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: V::Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Returns half of the side length along a local axis.
    pub fn half_extent(&self, axis: u8) -> Float {
        self.half_extents.get(axis)
    }
    /// Sets half of the side length along a local axis.
    pub fn set_half_extent(&mut self, axis: u8, half_extent: Float) {
        self.half_extents = self.half_extents.with_component(axis, half_extent);
    }
    /// Returns the side length along a local axis.
    pub fn extent(&self, axis: u8) -> Float {
        self.half_extent(axis) * 2.0
    }
    /// Sets the side length along a local axis.
    pub fn set_extent(&mut self, axis: u8, extent: Float) {
        self.set_half_extent(axis, extent / 2.0);
    }

    /// Returns the side length along the local X axis.
    pub fn width(&self) -> Float {
        self.extent(0)
    }
    /// Sets the side length along the local X axis.
    pub fn set_width(&mut self, width: Float) {
        self.set_extent(0, width);
    }
    /// Returns the side length along the local Y axis.
    pub fn height(&self) -> Float {
        self.extent(1)
    }
    /// Sets the side length along the local Y axis.
    pub fn set_height(&mut self, height: Float) {
        self.set_extent(1, height);
    }

    /// Returns the boundary of the box.
    pub fn frame(self) -> Frame<Self> {
        Frame(self)
    }

    fn nearest_outside(&self, to: &V) -> V {
        self.to_global(&clamp_to_box(self.to_local(to), self.half_extents))
    }
}

impl_solid_point_set!(Orthotope);

impl<V: Space> Shape<V> for Orthotope<V> {
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
        self.half_extents.norm() * 2.0
    }
    fn set_size(&mut self, size: Float) {
        self.half_extents.set_norm(size / 2.0);
    }

    fn extents(&self) -> V {
        self.half_extents * 2.0
    }

    fn which_side(&self, point: &V, prec: Precision) -> PointWhichSide {
        box_which_side(self.to_local(point), self.half_extents, prec)
    }
}

impl<V: Space> Solid<V> for Orthotope<V> {
    fn nearest_boundary_point(&self, to: &V) -> V {
        self.to_global(&nearest_on_box_boundary(
            self.to_local(to),
            self.half_extents,
        ))
    }
}

impl<V: Space> From<Hypercube<V>> for Orthotope<V> {
    fn from(cube: Hypercube<V>) -> Self {
        cube.to_orthotope()
    }
}

impl<V: Space> fmt::Display for Orthotope<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            center,
            orientation,
            ..
        } = self;
        let extents = self.extents();
        write!(
            f,
            "{}(center: {center}, extents: {extents}, orientation: {orientation})",
            V::ORTHOTOPE_NAME,
        )
    }
}

impl Hypercube<Vector3> {
    /// Returns the side length. All sides of a cube have the same length.
    pub fn depth(&self) -> Float {
        self.side_size()
    }
    /// Sets the length of every side.
    pub fn set_depth(&mut self, depth: Float) {
        self.set_side_size(depth);
    }
}

impl<V: Space> Hypercube<V> {
    /// Constructs a box centered at the origin with every side of length
    /// `side_size`.
    pub fn new(side_size: Float) -> Self {
        Self {
            half_side: side_size / 2.0,
            center: V::ZERO,
            orientation: V::Orientation::default(),
        }
    }
    /// Returns the box moved to a new center.
    #[must_use]
    pub fn with_center(mut self, center: V) -> Self {
        self.center = center;
        self
    }
    /// Returns the box with a new orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: V::Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Returns the length of each side.
    pub fn side_size(&self) -> Float {
        self.half_side * 2.0
    }
    /// Sets the length of every side.
    pub fn set_side_size(&mut self, side_size: Float) {
        self.half_side = side_size / 2.0;
    }

    /// Returns the distance from the center to each face, which is the same
    /// along every axis.
    pub fn half_extents(&self) -> V {
        V::splat(self.half_side)
    }
    /// Returns half of the side length. The axis is ignored.
    pub fn half_extent(&self, _axis: u8) -> Float {
        self.half_side
    }
    /// Sets half of the length of every side. Setting the half-extent along
    /// any axis sets it along all of them.
    pub fn set_half_extent(&mut self, _axis: u8, half_extent: Float) {
        self.half_side = half_extent;
    }

    /// Returns the side length.
    pub fn width(&self) -> Float {
        self.side_size()
    }
    /// Sets the length of every side.
    pub fn set_width(&mut self, width: Float) {
        self.set_side_size(width);
    }
    /// Returns the side length.
    pub fn height(&self) -> Float {
        self.side_size()
    }
    /// Sets the length of every side.
    pub fn set_height(&mut self, height: Float) {
        self.set_side_size(height);
    }

    /// Returns a box with independent side lengths that has the same center,
    /// orientation, and sides as this one.
    pub fn to_orthotope(&self) -> Orthotope<V> {
        Orthotope {
            half_extents: self.half_extents(),
            center: self.center,
            orientation: self.orientation,
        }
    }

    /// Returns the boundary of the box.
    pub fn frame(self) -> Frame<Self> {
        Frame(self)
    }

    fn nearest_outside(&self, to: &V) -> V {
        self.to_global(&clamp_to_box(self.to_local(to), self.half_extents()))
    }
}

impl_solid_point_set!(Hypercube);

impl<V: Space> Shape<V> for Hypercube<V> {
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
        self.half_extents().norm() * 2.0
    }
    fn set_size(&mut self, size: Float) {
        let mut half_extents = self.half_extents();
        half_extents.set_norm(size / 2.0);
        self.half_side = half_extents.get(0);
    }

    fn extents(&self) -> V {
        V::splat(self.side_size())
    }

    fn which_side(&self, point: &V, prec: Precision) -> PointWhichSide {
        box_which_side(self.to_local(point), self.half_extents(), prec)
    }
}

impl<V: Space> Solid<V> for Hypercube<V> {
    fn nearest_boundary_point(&self, to: &V) -> V {
        self.to_global(&nearest_on_box_boundary(
            self.to_local(to),
            self.half_extents(),
        ))
    }
}

impl<V: Space> fmt::Display for Hypercube<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            center,
            orientation,
            ..
        } = self;
        let side = self.side_size();
        write!(
            f,
            "{}(center: {center}, side: {side}, orientation: {orientation})",
            V::HYPERCUBE_NAME,
        )
    }
}

/// Returns the position of a point in local coordinates relative to the
/// boundary of an axis-aligned box centered at the origin.
fn box_which_side<V: Vector>(local: V, half_extents: V, prec: Precision) -> PointWhichSide {
    PointWhichSide::from_constraints((0..V::NDIM).map(|axis| {
        let distance = local.get(axis).abs();
        PointWhichSide::from_distance_cmp(prec.cmp(distance, half_extents.get(axis)))
    }))
}

/// Clamps each coordinate of `local` into `[-h, h]` for the corresponding
/// half-extent `h`.
fn clamp_to_box<V: Vector>(local: V, half_extents: V) -> V {
    local.zip_map(half_extents, |c, h| c.max(-h).min(h))
}

/// Returns the nearest point on the boundary of an axis-aligned box centered
/// at the origin.
///
/// After clamping, exactly one axis is pushed out to its face: the one with
/// the least slack, preferring lower axes on ties. A zero coordinate goes to
/// the positive face.
fn nearest_on_box_boundary<V: Vector>(local: V, half_extents: V) -> V {
    let clamped = clamp_to_box(local, half_extents);
    let axis = (0..V::NDIM)
        .min_by_key(|&i| FloatOrd(half_extents.get(i) - clamped.get(i).abs()))
        .unwrap_or(0);
    let h = half_extents.get(axis);
    let face = if local.get(axis) < 0.0 { -h } else { h };
    clamped.with_component(axis, face)
}
