use crate::math::Real;
use crate::query::details::distance_support_map_support_map;
use crate::query::gjk::GjkOptions;
use crate::shape::SupportMap;

/// Computes the minimum distance separating two convex shapes.
///
/// Both shapes must be expressed in the same frame. Returns `0.0` if the shapes are
/// touching or penetrating.
pub fn distance<G1, G2>(g1: &G1, g2: &G2) -> Real
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    distance_support_map_support_map(g1, g2, &GjkOptions::default())
}
