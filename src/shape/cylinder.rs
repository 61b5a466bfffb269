//! Support mapping based Cylinder shape.

use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::{FeatureId, SupportMap};
use num::Zero;
#[cfg(not(feature = "std"))]
use na::ComplexField;

/// A cylinder shape defined by the centers of its two caps and its radius.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cylinder {
    /// The center of the first cap.
    pub a: Point<Real>,
    /// The center of the second cap.
    pub b: Point<Real>,
    /// The radius of the cylinder.
    pub radius: Real,
}

// NOTE: format of the cylinder feature id:
//
// FeatureId::Face(0|1): the cap centered at `a` (resp. `b`).
// FeatureId::Face(2): the lateral surface.
// FeatureId::Edge(0|1): the rim of the cap centered at `a` (resp. `b`).
impl Cylinder {
    /// Creates a new cylinder aligned with the `y` axis, centered at `center`.
    pub fn new_y(center: Point<Real>, half_height: Real, radius: Real) -> Self {
        let b = Vector::y() * half_height;
        Self::new(center - b, center + b, radius)
    }

    /// Creates a new cylinder from its cap centers and radius.
    pub fn new(a: Point<Real>, b: Point<Real>, radius: Real) -> Self {
        Self { a, b, radius }
    }

    /// Computes the world-space cylinder obtained by applying `pos` to `self`.
    pub fn transform_by(&self, pos: &Isometry<Real>) -> Self {
        Self::new(pos * self.a, pos * self.b, self.radius)
    }

    // The radial offset toward `dir`, i.e., the component of `dir` orthogonal to the axis,
    // rescaled to the cylinder radius.
    fn radial_offset(&self, dir: &Vector<Real>) -> Vector<Real> {
        let axis = (self.b - self.a).try_normalize(0.0).unwrap_or_else(Vector::zeros);
        let mut radial = dir - axis * dir.dot(&axis);

        if radial.normalize_mut().is_zero() {
            Vector::zeros()
        } else {
            radial * self.radius
        }
    }
}

impl SupportMap for Cylinder {
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let cap = if dir.dot(&self.a.coords) > dir.dot(&self.b.coords) {
            self.a
        } else {
            self.b
        };

        cap + self.radial_offset(dir)
    }

    fn center(&self) -> Point<Real> {
        na::center(&self.a, &self.b)
    }

    fn support_feature(&self, dir: &Vector<Real>) -> FeatureId {
        let Some(axis) = (self.b - self.a).try_normalize(0.0) else {
            return FeatureId::Face(0);
        };
        let Some(dir) = dir.try_normalize(0.0) else {
            return FeatureId::Unknown;
        };

        let axial = dir.dot(&axis);
        let cap = if axial < 0.0 { 0 } else { 1 };

        if axial.abs() < DEFAULT_EPSILON.sqrt() {
            FeatureId::Face(2)
        } else if (1.0 - axial.abs()) < DEFAULT_EPSILON.sqrt() {
            FeatureId::Face(cap)
        } else {
            FeatureId::Edge(cap)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn support_is_on_rim_or_cap() {
        let cyl = Cylinder::new_y(Point::origin(), 1.0, 0.5);

        let pt = cyl.support_point(&Vector::new(1.0, 1.0, 0.0));
        assert_relative_eq!(pt, Point::new(0.5, 1.0, 0.0), epsilon = 1.0e-6);

        // Straight up: the radial offset vanishes and the cap center is a valid support point.
        let pt = cyl.support_point(&Vector::y());
        assert_relative_eq!(pt, Point::new(0.0, 1.0, 0.0), epsilon = 1.0e-6);
        assert_eq!(cyl.support_feature(&Vector::y()), FeatureId::Face(1));
        assert_eq!(cyl.support_feature(&-Vector::y()), FeatureId::Face(0));
        assert_eq!(cyl.support_feature(&Vector::x()), FeatureId::Face(2));
        assert_eq!(
            cyl.support_feature(&Vector::new(1.0, -1.0, 0.0)),
            FeatureId::Edge(0)
        );
    }
}
