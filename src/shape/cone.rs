//! Support mapping based Cone shape.

use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::{FeatureId, SupportMap};
use num::Zero;

/// A cone shape defined by the center of its base disk, its apex, and the radius of its base.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cone {
    /// The center of the base disk.
    pub base: Point<Real>,
    /// The apex of the cone.
    pub apex: Point<Real>,
    /// The radius of the base disk.
    pub radius: Real,
}

// NOTE: format of the cone feature id:
//
// FeatureId::Vertex(0): the apex.
// FeatureId::Face(0): the base disk.
// FeatureId::Edge(0): the rim of the base disk.
impl Cone {
    /// Creates a new cone pointing toward `+y`, centered at `center`.
    ///
    /// The base disk lies at `center.y - half_height` and the apex at `center.y + half_height`.
    pub fn new_y(center: Point<Real>, half_height: Real, radius: Real) -> Self {
        let h = Vector::y() * half_height;
        Self::new(center - h, center + h, radius)
    }

    /// Creates a new cone from its base center, apex and base radius.
    pub fn new(base: Point<Real>, apex: Point<Real>, radius: Real) -> Self {
        Self { base, apex, radius }
    }

    /// Computes the world-space cone obtained by applying `pos` to `self`.
    pub fn transform_by(&self, pos: &Isometry<Real>) -> Self {
        Self::new(pos * self.base, pos * self.apex, self.radius)
    }

    fn support_point_and_feature(&self, dir: &Vector<Real>) -> (Point<Real>, FeatureId) {
        let axis = (self.apex - self.base)
            .try_normalize(0.0)
            .unwrap_or_else(Vector::zeros);
        let mut radial = dir - axis * dir.dot(&axis);

        let (rim, feature) = if radial.normalize_mut().is_zero() {
            (self.base, FeatureId::Face(0))
        } else {
            (self.base + radial * self.radius, FeatureId::Edge(0))
        };

        if dir.dot(&self.apex.coords) > dir.dot(&rim.coords) {
            (self.apex, FeatureId::Vertex(0))
        } else {
            (rim, feature)
        }
    }
}

impl SupportMap for Cone {
    #[inline]
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.support_point_and_feature(dir).0
    }

    /// The centroid of the cone, a quarter of the way from the base to the apex.
    #[inline]
    fn center(&self) -> Point<Real> {
        self.base + (self.apex - self.base) * 0.25
    }

    #[inline]
    fn support_feature(&self, dir: &Vector<Real>) -> FeatureId {
        self.support_point_and_feature(dir).1
    }
}
