use na::{Isometry3, Point3, Vector3};
use oorandom::Rand32;
use pact3d::query::epa::{Epa, EpaOptions, EpaResult};
use pact3d::query::gjk::{self, GjkOptions, Simplex};
use pact3d::shape::{
    Ball, Capsule, Cone, ConvexHull, ConvexShape, Cuboid, Cylinder, OrientedCuboid, SupportMap,
    Triangle,
};

fn random_vector(rng: &mut Rand32) -> Vector3<f32> {
    Vector3::new(
        rng.rand_float() * 2.0 - 1.0,
        rng.rand_float() * 2.0 - 1.0,
        rng.rand_float() * 2.0 - 1.0,
    )
}

fn random_size(rng: &mut Rand32) -> f32 {
    0.2 + rng.rand_float() * 0.8
}

fn random_shape(rng: &mut Rand32, kind: u32) -> ConvexShape {
    let center = Point3::from(random_vector(rng));

    match kind {
        0 => Ball::new(center, random_size(rng)).into(),
        1 => {
            let half_extents = Vector3::new(random_size(rng), random_size(rng), random_size(rng));
            Cuboid::new(center, half_extents).into()
        }
        2 => {
            let pos = Isometry3::new(center.coords, random_vector(rng) * 3.0);
            let half_extents = Vector3::new(random_size(rng), random_size(rng), random_size(rng));
            OrientedCuboid::new(pos, half_extents).into()
        }
        3 => {
            let b = center + random_vector(rng) * 0.5;
            Capsule::new(center, b, random_size(rng) * 0.7).into()
        }
        4 => {
            let b = center + random_vector(rng) * 0.8;
            Cylinder::new(center, b, random_size(rng) * 0.7).into()
        }
        5 => {
            let apex = center + random_vector(rng) * 0.8;
            Cone::new(center, apex, random_size(rng) * 0.7).into()
        }
        6 => {
            let a = center + random_vector(rng) * 0.8;
            let b = center + random_vector(rng) * 0.8;
            let c = center + random_vector(rng) * 0.8;
            Triangle::new(a, b, c).into()
        }
        _ => {
            let points = (0..8)
                .map(|_| center + random_vector(rng) * 0.8)
                .collect();
            ConvexHull::try_new(points).unwrap().into()
        }
    }
}

fn penetration(
    g1: &dyn SupportMap,
    g2: &dyn SupportMap,
    simplex: &mut Simplex,
    epa: &mut Epa,
) -> Option<EpaResult> {
    if !gjk::closest_points(g1, g2, &GjkOptions::default(), simplex).intersecting {
        return None;
    }

    Some(epa.closest_points(g1, g2, simplex, &EpaOptions::default()))
}

#[test]
fn penetration_is_symmetric_for_all_shape_kinds() {
    let mut rng = Rand32::new(7);
    let mut simplex = Simplex::new();
    let mut epa = Epa::new();
    let mut compared = 0;

    for i in 0..400u32 {
        let g1 = random_shape(&mut rng, i % 8);
        let g2 = random_shape(&mut rng, (i / 8) % 8);

        let res12 = penetration(&g1, &g2, &mut simplex, &mut epa);
        let res21 = penetration(&g2, &g1, &mut simplex, &mut epa);

        let (Some(res12), Some(res21)) = (res12, res21) else {
            continue;
        };

        if !res12.valid || !res21.valid {
            continue;
        }

        assert_relative_eq!(res12.depth, res21.depth, epsilon = 1.0e-3);

        if res12.depth > 1.0e-2 {
            assert!(
                res12.normal.dot(&res21.normal) < -0.99,
                "{:?} vs {:?}: normals {:?} and {:?}",
                g1.shape_type(),
                g2.shape_type(),
                res12.normal,
                res21.normal
            );
        }

        compared += 1;
    }

    assert!(compared > 20, "only {} pairs were compared", compared);
}
