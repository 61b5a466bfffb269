//! Support mapping based Capsule shape.

use crate::math::{Isometry, Point, Real, UnitVector, Vector};
use crate::shape::{FeatureId, SupportMap};

/// A capsule shape, also known as a pill or capped cylinder.
///
/// A capsule is the set of points at a distance smaller than `radius` from the segment
/// `[a, b]`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Capsule {
    /// The first endpoint of the capsule's principal axis.
    pub a: Point<Real>,
    /// The second endpoint of the capsule's principal axis.
    pub b: Point<Real>,
    /// The radius of the capsule.
    pub radius: Real,
}

impl Capsule {
    /// Creates a new capsule aligned with the `y` axis, centered at `center`.
    pub fn new_y(center: Point<Real>, half_height: Real, radius: Real) -> Self {
        let b = Vector::y() * half_height;
        Self::new(center - b, center + b, radius)
    }

    /// Creates a new capsule defined as the segment between `a` and `b` and with the given `radius`.
    pub fn new(a: Point<Real>, b: Point<Real>, radius: Real) -> Self {
        Self { a, b, radius }
    }

    /// The height of this capsule, i.e., the length of its principal axis.
    pub fn height(&self) -> Real {
        (self.b - self.a).norm()
    }

    /// Computes the world-space capsule obtained by applying `pos` to `self`.
    pub fn transform_by(&self, pos: &Isometry<Real>) -> Self {
        Self::new(pos * self.a, pos * self.b, self.radius)
    }

    /// The closest point to `pt` on the principal axis of this capsule.
    pub fn project_on_axis(&self, pt: &Point<Real>) -> Point<Real> {
        let ab = self.b - self.a;
        let sq_len = ab.norm_squared();

        if sq_len == 0.0 {
            return self.a;
        }

        let t = ((pt - self.a).dot(&ab) / sq_len).clamp(0.0, 1.0);
        self.a + ab * t
    }

    fn support_endpoint(&self, dir: &Vector<Real>) -> (Point<Real>, u32) {
        if dir.dot(&self.a.coords) > dir.dot(&self.b.coords) {
            (self.a, 0)
        } else {
            (self.b, 1)
        }
    }
}

impl SupportMap for Capsule {
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        match UnitVector::try_new(*dir, 0.0) {
            Some(dir) => self.support_point_toward(&dir),
            None => na::center(&self.a, &self.b),
        }
    }

    fn support_point_toward(&self, dir: &UnitVector<Real>) -> Point<Real> {
        self.support_endpoint(dir).0 + **dir * self.radius
    }

    fn center(&self) -> Point<Real> {
        na::center(&self.a, &self.b)
    }

    fn support_feature(&self, dir: &Vector<Real>) -> FeatureId {
        FeatureId::Face(self.support_endpoint(dir).1)
    }
}
