//! Support mapping based convex hull of a point cloud.

use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::{FeatureId, SupportMap};
use crate::utils;
use alloc::vec::Vec;

/// Errors raised while building a [`ConvexHull`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConvexHullError {
    /// A convex hull must contain at least one point.
    #[error("a convex hull must contain at least one point.")]
    Empty,
    /// One of the input points has a NaN or infinite coordinate.
    #[error("the point {0} has a non-finite coordinate.")]
    NonFinitePoint(usize),
    /// The number of points exceeds what a feature id can address.
    #[error("a convex hull cannot have more than {max} points, found {len}.")]
    TooManyPoints {
        /// The number of points given.
        len: usize,
        /// The maximum supported number of points.
        max: usize,
    },
}

/// The convex hull of a set of points, represented implicitly by the points themselves.
///
/// No hull is actually computed: the support function scans every point, which is
/// efficient enough for the small point clouds (typically less than 64 points) used as
/// collision shapes. Interior points are allowed and never returned as support points
/// unless they lie on the hull boundary.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct ConvexHull {
    points: Vec<Point<Real>>,
    center: Point<Real>,
}

impl ConvexHull {
    /// The maximum number of points of a convex hull, bounded by the feature id encoding.
    pub const MAX_POINTS: usize = 1 << 30;

    /// Creates the convex hull of the given points.
    pub fn try_new(points: Vec<Point<Real>>) -> Result<Self, ConvexHullError> {
        if points.is_empty() {
            return Err(ConvexHullError::Empty);
        }

        if points.len() > Self::MAX_POINTS {
            return Err(ConvexHullError::TooManyPoints {
                len: points.len(),
                max: Self::MAX_POINTS,
            });
        }

        if let Some(i) = points.iter().position(|pt| !pt.iter().all(|x| x.is_finite())) {
            return Err(ConvexHullError::NonFinitePoint(i));
        }

        let center = utils::center(&points);
        Ok(Self { points, center })
    }

    /// The points this hull is built from.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// Computes the world-space hull obtained by applying `pos` to `self`.
    pub fn transform_by(&self, pos: &Isometry<Real>) -> Self {
        Self {
            points: self.points.iter().map(|pt| pos * pt).collect(),
            center: pos * self.center,
        }
    }
}

impl SupportMap for ConvexHull {
    #[inline]
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        utils::point_cloud_support_point(dir, &self.points)
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        self.center
    }

    #[inline]
    fn support_feature(&self, dir: &Vector<Real>) -> FeatureId {
        utils::point_cloud_support_point_id(dir, &self.points)
            .map(|i| FeatureId::Vertex(i as u32))
            .unwrap_or(FeatureId::Unknown)
    }
}
