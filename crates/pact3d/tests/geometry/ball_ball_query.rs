use na::{Point3, Vector3};
use pact3d::query::epa::{Epa, EpaOptions};
use pact3d::query::gjk::{self, GjkOptions, Simplex};
use pact3d::query::{self, Contact};
use pact3d::shape::Ball;

#[test]
fn separated_balls_distance() {
    let b1 = Ball::new(Point3::new(0.5, -1.0, 2.0), 1.0);
    let b2 = Ball::new(Point3::new(3.5, 3.0, 2.0), 1.5);

    let dist = query::distance(&b1, &b2);
    assert_relative_eq!(dist, 5.0 - 2.5, epsilon = 1.0e-4);
    assert!(!query::intersection_test(&b1, &b2));
}

#[test]
fn overlapping_balls_penetration() {
    let dir = Vector3::new(2.0, -1.0, 2.0) / 3.0;
    let b1 = Ball::new(Point3::origin(), 1.0);
    let b2 = Ball::new(Point3::from(dir * 1.2), 0.7);

    let mut simplex = Simplex::new();
    let gjk_res = gjk::closest_points(&b1, &b2, &GjkOptions::default(), &mut simplex);
    assert!(gjk_res.intersecting);

    let res = Epa::new().closest_points(&b1, &b2, &simplex, &EpaOptions::default());
    assert_relative_eq!(res.depth, 0.5, epsilon = 1.0e-3);
    assert_relative_eq!(res.normal.into_inner(), dir, epsilon = 1.0e-3);
    assert_relative_eq!(res.point1, Point3::from(dir), epsilon = 1.0e-3);
    assert_relative_eq!(res.point2, Point3::from(dir * 0.5), epsilon = 1.0e-3);
}

#[test]
fn swapping_shapes_flips_the_contact() {
    let dir = Vector3::new(2.0, -1.0, 2.0) / 3.0;
    let b1 = Ball::new(Point3::origin(), 1.0);
    let b2 = Ball::new(Point3::from(dir * 1.2), 0.7);
    let far = Ball::new(Point3::new(-4.0, 0.0, 0.0), 0.7);

    assert_eq!(
        query::intersection_test(&b1, &b2),
        query::intersection_test(&b2, &b1)
    );
    assert_eq!(
        query::intersection_test(&b1, &far),
        query::intersection_test(&far, &b1)
    );

    let c12: Contact = query::contact(&b1, &b2, 0.0).unwrap();
    let c21 = query::contact(&b2, &b1, 0.0).unwrap().flipped();

    assert_relative_eq!(c12.dist, c21.dist, epsilon = 1.0e-3);
    assert_relative_eq!(c12.normal1, c21.normal1, epsilon = 1.0e-3);
    assert_relative_eq!(c12.point1, c21.point1, epsilon = 1.0e-3);
    assert_relative_eq!(c12.point2, c21.point2, epsilon = 1.0e-3);
}
