use crate::math::Real;
use crate::query::gjk::{self, GjkOptions, Simplex};
use crate::shape::SupportMap;

/// Distance between support-mapped shapes.
pub fn distance_support_map_support_map<G1, G2>(
    g1: &G1,
    g2: &G2,
    gjk_options: &GjkOptions,
) -> Real
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    distance_support_map_support_map_with_params(g1, g2, &mut Simplex::new(), gjk_options)
}

/// Distance between support-mapped shapes.
///
/// This allows a more fine grained control over the underlying GJK algorithm.
pub fn distance_support_map_support_map_with_params<G1, G2>(
    g1: &G1,
    g2: &G2,
    simplex: &mut Simplex,
    gjk_options: &GjkOptions,
) -> Real
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    gjk::closest_points(g1, g2, gjk_options, simplex).distance
}
