//! The Gilbert-Johnson-Keerthi distance algorithm.
//!
//! GJK operates on the Minkowski difference (the Configuration-Space Obstacle, or CSO) of
//! two convex shapes: the shapes intersect if and only if their CSO contains the origin,
//! and their distance is the distance from the origin to the CSO otherwise. The CSO is
//! never built explicitly. Instead, a simplex of support points is iteratively refined
//! toward the origin.
//!
//! When the shapes intersect, GJK leaves a simplex enclosing the origin that can be handed
//! to [`crate::query::epa::Epa`] to compute the penetration depth.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::gjk::{CsoPoint, Simplex};
use crate::shape::SupportMap;
#[cfg(not(feature = "std"))]
use na::ComplexField;

/// Parameters of the GJK algorithm.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct GjkOptions {
    /// The maximum number of support points queried before giving up.
    pub max_iterations: u32,
    /// Relative tolerance on the squared distance used to detect convergence.
    pub tolerance: Real,
}

impl Default for GjkOptions {
    fn default() -> Self {
        Self {
            max_iterations: 32,
            tolerance: eps_tol(),
        }
    }
}

/// The absolute tolerance used by the GJK algorithm.
pub fn eps_tol() -> Real {
    DEFAULT_EPSILON * 10.0
}

/// Results of the GJK algorithm.
///
/// All points are expressed in the frame shared by both shapes.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct GjkResult {
    /// Whether the shapes are intersecting.
    pub intersecting: bool,
    /// The closest point on the first shape. Zero if the shapes intersect.
    pub point1: Point<Real>,
    /// The closest point on the second shape. Zero if the shapes intersect.
    pub point2: Point<Real>,
    /// The distance between both shapes. Zero if the shapes intersect.
    pub distance: Real,
    /// The number of iterations performed.
    pub iterations: u32,
}

impl GjkResult {
    fn intersection(iterations: u32) -> Self {
        Self {
            intersecting: true,
            point1: Point::origin(),
            point2: Point::origin(),
            distance: 0.0,
            iterations,
        }
    }

    fn separation(simplex: &Simplex, distance: Real, iterations: u32) -> Self {
        let (point1, point2) = simplex.witness_points();

        Self {
            intersecting: false,
            point1,
            point2,
            distance,
            iterations,
        }
    }

    /// The unit direction from `point1` to `point2`, if the shapes are separated.
    pub fn separating_axis(&self) -> Option<Vector<Real>> {
        if self.intersecting {
            None
        } else {
            (self.point2 - self.point1).try_normalize(DEFAULT_EPSILON)
        }
    }
}

/// Computes the closest points between two convex shapes, or detects their intersection.
///
/// `simplex` is cleared first. When the shapes intersect, it holds on return the last
/// simplex built by GJK, ready for the EPA.
///
/// If the iteration budget runs out before any separating axis was found, the shapes are
/// reported as intersecting.
pub fn closest_points<G1, G2>(
    g1: &G1,
    g2: &G2,
    options: &GjkOptions,
    simplex: &mut Simplex,
) -> GjkResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let mut dir = g2.center() - g1.center();

    if dir.norm_squared() <= DEFAULT_EPSILON * DEFAULT_EPSILON {
        dir = Vector::x();
    }

    simplex.reset(CsoPoint::from_shapes(g1, g2, &dir));

    let mut found_separating_axis = false;
    let mut prev_sq_dist = Real::MAX;
    let mut last_sq_dist = Real::MAX;

    for niter in 1..=options.max_iterations {
        let Some(proj) = simplex.project_origin_and_reduce() else {
            return GjkResult::intersection(niter);
        };

        let sq_dist = proj.coords.norm_squared();

        if sq_dist <= options.tolerance * simplex.max_sq_len() {
            return GjkResult::intersection(niter);
        }

        last_sq_dist = sq_dist;

        if sq_dist >= prev_sq_dist {
            // No progress since the last iteration.
            return GjkResult::separation(simplex, sq_dist.sqrt(), niter);
        }

        prev_sq_dist = sq_dist;

        let dir = -proj.coords;
        let support = CsoPoint::from_shapes(g1, g2, &dir);

        if support.point.coords.dot(&dir) < 0.0 {
            found_separating_axis = true;
        }

        let gap = sq_dist - proj.coords.dot(&support.point.coords);

        if gap <= options.tolerance * sq_dist || !simplex.add_point(support) {
            return GjkResult::separation(simplex, sq_dist.sqrt(), niter);
        }
    }

    if found_separating_axis {
        if let Some(proj) = simplex.project_origin_and_reduce() {
            let sq_dist = proj.coords.norm_squared().min(last_sq_dist);
            return GjkResult::separation(simplex, sq_dist.sqrt(), options.max_iterations);
        }
    }

    log::debug!(
        "GJK did not converge after {} iterations; reporting an intersection.",
        options.max_iterations
    );
    GjkResult::intersection(options.max_iterations)
}

/// Tests if two convex shapes intersect.
pub fn intersect<G1, G2>(g1: &G1, g2: &G2, options: &GjkOptions) -> bool
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let mut simplex = Simplex::new();
    closest_points(g1, g2, options, &mut simplex).intersecting
}
