use crate::math::{Real, UnitVector, Vector};
use crate::query::epa::{Epa, EpaOptions};
use crate::query::gjk::{self, GjkOptions, Simplex};
use crate::query::Contact;
use crate::shape::SupportMap;

/// Contact between support-mapped shapes (`Cuboid`, `ConvexHull`, etc.)
pub fn contact_support_map_support_map<G1, G2>(
    g1: &G1,
    g2: &G2,
    prediction: Real,
) -> Option<Contact>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    contact_support_map_support_map_with_params(
        g1,
        g2,
        prediction,
        &GjkOptions::default(),
        &EpaOptions::default(),
        &mut Simplex::new(),
        &mut Epa::new(),
    )
}

/// Contact between support-mapped shapes (`Cuboid`, `ConvexHull`, etc.)
///
/// This allows a more fine grained control over the underlying GJK and EPA algorithms,
/// and the reuse of their buffers.
///
/// Penetrating shapes always produce a contact. If the EPA did not converge, that contact
/// is its best estimate.
pub fn contact_support_map_support_map_with_params<G1, G2>(
    g1: &G1,
    g2: &G2,
    prediction: Real,
    gjk_options: &GjkOptions,
    epa_options: &EpaOptions,
    simplex: &mut Simplex,
    epa: &mut Epa,
) -> Option<Contact>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let cpts = gjk::closest_points(g1, g2, gjk_options, simplex);

    if !cpts.intersecting {
        if cpts.distance > prediction {
            return None;
        }

        let normal1 = cpts
            .separating_axis()
            .map(UnitVector::new_unchecked)
            .unwrap_or_else(Vector::x_axis);

        return Some(Contact::new(
            cpts.point1,
            cpts.point2,
            normal1,
            -normal1,
            cpts.distance,
        ));
    }

    // The origin is inside of the CSO: use the EPA.
    let res = epa.closest_points(g1, g2, simplex, epa_options);

    if !res.valid {
        log::debug!(
            "Using a non-converged penetration estimate after {} EPA iterations.",
            res.iterations
        );
    }

    Some(Contact::new(
        res.point1,
        res.point2,
        res.normal,
        -res.normal,
        -res.depth,
    ))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Point;
    use crate::shape::{Ball, Cuboid};

    #[test]
    fn prediction_distance() {
        let b1 = Ball::new(Point::origin(), 1.0);
        let b2 = Ball::new(Point::new(2.1, 0.0, 0.0), 1.0);

        assert!(contact_support_map_support_map(&b1, &b2, 0.0).is_none());

        let contact = contact_support_map_support_map(&b1, &b2, 0.2).unwrap();
        assert_relative_eq!(contact.dist, 0.1, epsilon = 1.0e-4);
        assert_relative_eq!(contact.normal1, Vector::x_axis(), epsilon = 1.0e-4);
    }

    #[test]
    fn penetrating_cuboids() {
        let c1 = Cuboid::new(Point::origin(), Vector::repeat(1.0));
        let c2 = Cuboid::new(Point::new(0.0, 1.8, 0.0), Vector::repeat(1.0));
        let contact = contact_support_map_support_map(&c1, &c2, 0.0).unwrap();

        assert_relative_eq!(contact.dist, -0.2, epsilon = 1.0e-4);
        assert_relative_eq!(contact.normal1, Vector::y_axis(), epsilon = 1.0e-4);
        assert_relative_eq!(contact.normal2, -Vector::y_axis(), epsilon = 1.0e-4);
    }
}
