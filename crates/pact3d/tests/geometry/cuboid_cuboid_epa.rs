use na::{Point3, Vector3};
use pact3d::query::epa::{Epa, EpaOptions};
use pact3d::query::gjk::{self, GjkOptions, Simplex};
use pact3d::shape::{ConvexShape, Cuboid, OrientedCuboid};

#[test]
#[allow(non_snake_case)]
fn unit_cuboids_EPA() {
    let c1 = Cuboid::new(Point3::origin(), Vector3::repeat(1.0));
    let c2 = Cuboid::new(Point3::new(1.5, 0.0, 0.0), Vector3::repeat(1.0));
    let mut simplex = Simplex::new();
    let mut epa = Epa::new();

    assert!(gjk::closest_points(&c1, &c2, &GjkOptions::default(), &mut simplex).intersecting);
    let res = epa.closest_points(&c1, &c2, &simplex, &EpaOptions::default());

    assert!(res.valid);
    assert_relative_eq!(res.depth, 0.5, epsilon = 1.0e-4);
    assert_relative_eq!(res.normal.into_inner(), Vector3::x(), epsilon = 1.0e-4);

    // Same query with the shapes swapped, reusing both workspaces.
    assert!(gjk::closest_points(&c2, &c1, &GjkOptions::default(), &mut simplex).intersecting);
    let res = epa.closest_points(&c2, &c1, &simplex, &EpaOptions::default());

    assert!(res.valid);
    assert_relative_eq!(res.depth, 0.5, epsilon = 1.0e-4);
    assert_relative_eq!(res.normal.into_inner(), -Vector3::x(), epsilon = 1.0e-4);
}

#[test]
fn dispatched_shapes_match_concrete_ones() {
    let c1 = Cuboid::new(Point3::origin(), Vector3::repeat(1.0));
    let c2 = OrientedCuboid::new(
        na::Isometry3::translation(0.0, 1.8, 0.0),
        Vector3::repeat(1.0),
    );
    let g1 = ConvexShape::from(c1);
    let g2 = ConvexShape::from(c2);

    let concrete = pact3d::query::contact(&c1, &c2, 0.0).unwrap();
    let dispatched = pact3d::query::contact(&g1, &g2, 0.0).unwrap();

    assert_relative_eq!(concrete.dist, -0.2, epsilon = 1.0e-4);
    assert_relative_eq!(dispatched.dist, concrete.dist, epsilon = 1.0e-6);
    assert_relative_eq!(dispatched.normal1, concrete.normal1, epsilon = 1.0e-6);
}
