//! Traits for support mapping based shapes.

use crate::math::{Point, Real, UnitVector, Vector};
use crate::shape::FeatureId;

/// Traits of convex shapes representable by a support mapping function.
///
/// Every shape handled by GJK and EPA is expressed in the frame shared by both
/// shapes of the query (typically the world frame): callers transform their
/// shapes before running a query.
pub trait SupportMap {
    /// Evaluates the support function of this shape.
    ///
    /// A support function is a function associating a vector to the shape point which
    /// maximizes their dot product. `dir` does not need to be normalized. A zero `dir`
    /// must not produce NaN: implementors fall back to a reference point of the shape.
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// Same as `self.support_point` except that `dir` is normalized.
    fn support_point_toward(&self, dir: &UnitVector<Real>) -> Point<Real> {
        self.support_point(dir.as_ref())
    }

    /// A point strictly inside of this shape, used to seed the GJK search direction.
    fn center(&self) -> Point<Real>;

    /// The feature (vertex, edge, or face) containing the support point toward `dir`.
    ///
    /// Shapes without discrete features report [`FeatureId::Unknown`].
    fn support_feature(&self, _dir: &Vector<Real>) -> FeatureId {
        FeatureId::Unknown
    }
}

impl<S: ?Sized + SupportMap> SupportMap for &S {
    #[inline]
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        (**self).support_point(dir)
    }

    #[inline]
    fn support_point_toward(&self, dir: &UnitVector<Real>) -> Point<Real> {
        (**self).support_point_toward(dir)
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        (**self).center()
    }

    #[inline]
    fn support_feature(&self, dir: &Vector<Real>) -> FeatureId {
        (**self).support_feature(dir)
    }
}
