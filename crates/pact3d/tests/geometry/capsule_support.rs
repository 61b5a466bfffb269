use na::{Point3, Vector3};
use pact3d::shape::{Capsule, SupportMap};

#[test]
fn capsule_support_points_lie_on_the_surface() {
    let capsule = Capsule::new(
        Point3::new(-0.5, 1.0, 0.25),
        Point3::new(1.0, -0.5, 0.75),
        0.4,
    );
    let mut rng = oorandom::Rand32::new(42);
    let mut tested = 0;

    while tested < 1000 {
        let dir = Vector3::new(
            rng.rand_float() * 2.0 - 1.0,
            rng.rand_float() * 2.0 - 1.0,
            rng.rand_float() * 2.0 - 1.0,
        );

        if dir.norm() < 1.0e-3 {
            continue;
        }

        let pt = capsule.support_point(&dir);
        let on_axis = capsule.project_on_axis(&pt);
        assert_relative_eq!(na::distance(&pt, &on_axis), capsule.radius, epsilon = 1.0e-5);

        // Neither spherical cap reaches farther along `dir`.
        for endpoint in [capsule.a, capsule.b] {
            let extreme = endpoint + dir.normalize() * capsule.radius;
            assert!(pt.coords.dot(&dir) >= extreme.coords.dot(&dir) - 1.0e-5);
        }

        tested += 1;
    }
}
