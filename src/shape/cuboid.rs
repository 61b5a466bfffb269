//! Support mapping based axis-aligned Cuboid shape.

use crate::math::{Isometry, Point, Real, Vector, DIM};
use crate::shape::{FeatureId, OrientedCuboid, SupportMap};

/// An axis-aligned box, used as a convex shape.
///
/// The box is described by its center and its half-extents along each coordinate axis.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    /// The center of the box.
    pub center: Point<Real>,
    /// The half-extents of the box along each coordinate axis.
    pub half_extents: Vector<Real>,
}

// NOTE: format of the cuboid feature id:
//
// FeatureId::Vertex(id): the i-th bit of `id` is set to 1 iff. the i-th component of the vertex is negative.
impl Cuboid {
    /// Creates a new box from its center and half-extents.
    #[inline]
    pub fn new(center: Point<Real>, half_extents: Vector<Real>) -> Cuboid {
        Cuboid {
            center,
            half_extents,
        }
    }

    /// Creates the box bounded by the points `mins` and `maxs`.
    #[inline]
    pub fn from_mins_maxs(mins: Point<Real>, maxs: Point<Real>) -> Cuboid {
        Self::new(na::center(&mins, &maxs), (maxs - mins) / 2.0)
    }

    /// The vertex identified by `id`, following the vertex numbering of [`Cuboid`].
    pub fn vertex(&self, id: u32) -> Point<Real> {
        self.center + local_vertex(&self.half_extents, id)
    }

    /// Computes the world-space box obtained by applying `pos` to `self`.
    ///
    /// The result is an oriented box since `pos` may contain a rotation.
    #[inline]
    pub fn transform_by(&self, pos: &Isometry<Real>) -> OrientedCuboid {
        let center = pos * self.center;
        OrientedCuboid::new(
            Isometry::from_parts(center.coords.into(), pos.rotation),
            self.half_extents,
        )
    }
}

/// Selects the corner of a box centered at the origin that is the farthest along `dir`.
///
/// Returns the corner and its vertex id. Zero components of `dir` select the positive
/// half-extent.
#[inline]
pub(crate) fn support_corner(half_extents: &Vector<Real>, dir: &Vector<Real>) -> (Vector<Real>, u32) {
    let mut corner = *half_extents;
    let mut vid = 0;

    for i in 0..DIM {
        if dir[i] < 0.0 {
            corner[i] = -corner[i];
            vid |= 1 << i;
        }
    }

    (corner, vid)
}

#[inline]
pub(crate) fn local_vertex(half_extents: &Vector<Real>, id: u32) -> Vector<Real> {
    let mut res = *half_extents;

    for i in 0..DIM {
        if id & (1 << i) != 0 {
            res[i] = -res[i]
        }
    }

    res
}

impl SupportMap for Cuboid {
    #[inline]
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.center + support_corner(&self.half_extents, dir).0
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        self.center
    }

    #[inline]
    fn support_feature(&self, dir: &Vector<Real>) -> FeatureId {
        FeatureId::Vertex(support_corner(&self.half_extents, dir).1)
    }
}
