//! Support mapping based Ball shape.

use crate::math::{Isometry, Point, Real, UnitVector, Vector};
use crate::shape::{FeatureId, SupportMap};

/// A Ball shape (a sphere in 3D).
///
/// The ball is described by its center, expressed in the frame shared by all the shapes of
/// a query, and by its radius.
///
/// # Example
///
/// ```
/// use pact3d::math::{Point, Vector};
/// use pact3d::shape::{Ball, SupportMap};
///
/// let ball = Ball::new(Point::new(1.0, 0.0, 0.0), 0.5);
/// let pt = ball.support_point(&Vector::new(0.0, 2.0, 0.0));
/// assert_eq!(pt, Point::new(1.0, 0.5, 0.0));
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Ball {
    /// The center of the ball.
    pub center: Point<Real>,
    /// The radius of the ball.
    pub radius: Real,
}

impl Ball {
    /// Creates a new ball from its center and radius.
    #[inline]
    pub fn new(center: Point<Real>, radius: Real) -> Ball {
        Ball { center, radius }
    }

    /// Computes the world-space ball obtained by applying `pos` to `self`.
    #[inline]
    pub fn transform_by(&self, pos: &Isometry<Real>) -> Self {
        Self::new(pos * self.center, self.radius)
    }
}

impl SupportMap for Ball {
    #[inline]
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        match UnitVector::try_new(*dir, 0.0) {
            Some(dir) => self.support_point_toward(&dir),
            None => self.center,
        }
    }

    #[inline]
    fn support_point_toward(&self, dir: &UnitVector<Real>) -> Point<Real> {
        self.center + **dir * self.radius
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        self.center
    }

    #[inline]
    fn support_feature(&self, _dir: &Vector<Real>) -> FeatureId {
        FeatureId::Face(0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zero_direction_falls_back_to_center() {
        let ball = Ball::new(Point::new(1.0, 2.0, 3.0), 2.0);
        assert_eq!(ball.support_point(&Vector::zeros()), ball.center);
        assert_eq!(
            Ball::new(Point::origin(), 0.0).support_point(&Vector::x()),
            Point::origin()
        );
    }
}
