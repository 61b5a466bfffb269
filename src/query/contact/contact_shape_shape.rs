use crate::math::Real;
use crate::query::details::contact_support_map_support_map;
use crate::query::Contact;
use crate::shape::SupportMap;

/// Computes one pair of contact points between two convex shapes.
///
/// Both shapes must be expressed in the same frame. Returns `None` if the shapes are
/// separated by a distance larger than `prediction`.
///
/// The returned contact normal points from the first shape toward the second one, and the
/// contact distance is negative when the shapes are penetrating.
pub fn contact<G1, G2>(g1: &G1, g2: &G2, prediction: Real) -> Option<Contact>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    contact_support_map_support_map(g1, g2, prediction)
}
