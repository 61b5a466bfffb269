//! Support mapping based oriented box shape.

use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::cuboid::{local_vertex, support_corner};
use crate::shape::{FeatureId, SupportMap};

/// A box with an arbitrary orientation.
///
/// The box is centered at `pos.translation` and its edges are aligned with the axes of
/// `pos.rotation`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct OrientedCuboid {
    /// The position of the box center and the orientation of its axes.
    pub pos: Isometry<Real>,
    /// The half-extents of the box along each of its local axes.
    pub half_extents: Vector<Real>,
}

impl OrientedCuboid {
    /// Creates a new oriented box.
    #[inline]
    pub fn new(pos: Isometry<Real>, half_extents: Vector<Real>) -> Self {
        Self { pos, half_extents }
    }

    /// The vertex identified by `id`, using the same numbering as [`super::Cuboid`] in the
    /// local frame of the box.
    pub fn vertex(&self, id: u32) -> Point<Real> {
        self.pos * Point::from(local_vertex(&self.half_extents, id))
    }
}

impl SupportMap for OrientedCuboid {
    #[inline]
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = self.pos.inverse_transform_vector(dir);
        let (corner, _) = support_corner(&self.half_extents, &local_dir);
        self.pos * Point::from(corner)
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        self.pos.translation.vector.into()
    }

    #[inline]
    fn support_feature(&self, dir: &Vector<Real>) -> FeatureId {
        let local_dir = self.pos.inverse_transform_vector(dir);
        FeatureId::Vertex(support_corner(&self.half_extents, &local_dir).1)
    }
}
