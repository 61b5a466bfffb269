use crate::query::gjk::{self, GjkOptions, Simplex};
use crate::shape::SupportMap;

/// Intersection test between support-mapped shapes (`Cuboid`, `ConvexHull`, etc.)
pub fn intersection_test_support_map_support_map<G1, G2>(
    g1: &G1,
    g2: &G2,
    gjk_options: &GjkOptions,
) -> bool
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    intersection_test_support_map_support_map_with_params(g1, g2, &mut Simplex::new(), gjk_options)
}

/// Intersection test between support-mapped shapes (`Cuboid`, `ConvexHull`, etc.)
///
/// This allows a more fine grained control over the underlying GJK algorithm. When the
/// shapes intersect, `simplex` is left ready for the EPA.
pub fn intersection_test_support_map_support_map_with_params<G1, G2>(
    g1: &G1,
    g2: &G2,
    simplex: &mut Simplex,
    gjk_options: &GjkOptions,
) -> bool
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    gjk::closest_points(g1, g2, gjk_options, simplex).intersecting
}
