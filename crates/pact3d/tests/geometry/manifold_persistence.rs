use na::{Isometry3, Point3, Vector3};
use pact3d::query::{self, ContactManifold, ManifoldOptions, TrackedContact};
use pact3d::shape::{Cuboid, PackedFeatureId};

fn corner_contacts() -> Vec<TrackedContact> {
    [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)]
        .iter()
        .enumerate()
        .map(|(i, (x, z))| {
            TrackedContact::new(
                Point3::new(*x, 0.5, *z),
                Point3::new(*x, 0.48, *z),
                Vector3::y(),
                0.02,
            )
            .with_features(PackedFeatureId::face(2), PackedFeatureId::vertex(i as u32))
        })
        .collect()
}

#[test]
fn merging_unchanged_contacts_keeps_impulses() {
    let options = ManifoldOptions::default();
    let contacts = corner_contacts();
    let mut manifold = ContactManifold::new(7, 8);

    manifold.merge_with(&contacts, &options);
    assert_eq!(manifold.len(), 4);
    assert_relative_eq!(manifold.normal, Vector3::y());

    for (i, pt) in manifold.points.iter_mut().enumerate() {
        assert_eq!(pt.lifespan, 0);
        pt.normal_impulse = 1.0 + i as f32;
        pt.tangent_impulse1 = -0.5;
        pt.tangent_impulse2 = 0.25;
    }

    for frame in 1..=2 {
        manifold.merge_with(&contacts, &options);

        for (i, pt) in manifold.contacts().iter().enumerate() {
            assert_eq!(pt.lifespan, frame);
            assert_eq!(pt.normal_impulse, 1.0 + i as f32);
            assert_eq!(pt.tangent_impulse1, -0.5);
            assert_eq!(pt.tangent_impulse2, 0.25);
        }
    }

    manifold.reset_impulses();
    assert!(manifold
        .contacts()
        .iter()
        .all(|pt| pt.normal_impulse == 0.0 && pt.tangent_impulse1 == 0.0));
}

#[test]
fn fifth_contact_evicts_the_farthest_point() {
    let mut manifold = ContactManifold::new(7, 8);

    for (i, mut pt) in corner_contacts().into_iter().enumerate() {
        pt.normal_impulse = 10.0 * (i + 1) as f32;
        assert!(manifold.add(pt).is_none());
    }

    let new_pt = TrackedContact::new(
        Point3::new(-0.4, 0.5, 0.45),
        Point3::new(-0.4, 0.49, 0.45),
        Vector3::y(),
        0.01,
    )
    .with_features(PackedFeatureId::face(2), PackedFeatureId::edge(11));
    let evicted = manifold.add(new_pt).unwrap();

    // (0.5, -0.5) is the corner farthest from the new point.
    assert_eq!(evicted.fid2, PackedFeatureId::vertex(1));
    assert_eq!(manifold.len(), 4);

    let kept: Vec<_> = manifold
        .contacts()
        .iter()
        .filter(|pt| pt.fid2 != PackedFeatureId::edge(11))
        .map(|pt| (pt.fid2, pt.normal_impulse))
        .collect();
    assert_eq!(
        kept,
        vec![
            (PackedFeatureId::vertex(0), 10.0),
            (PackedFeatureId::vertex(2), 30.0),
            (PackedFeatureId::vertex(3), 40.0),
        ]
    );
}

#[test]
fn cached_contacts_follow_the_bodies() {
    let options = ManifoldOptions::default();
    let ground = Cuboid::new(Point3::origin(), Vector3::new(5.0, 0.5, 5.0));
    let block = Cuboid::new(Point3::origin(), Vector3::repeat(0.5));
    let pos1 = Isometry3::identity();
    let pos2 = Isometry3::translation(0.0, 0.95, 0.0);

    let world_block = block.transform_by(&pos2);
    let contact = query::contact(&ground, &world_block, 0.0).unwrap();
    let tracked = TrackedContact::from_contact(&ground, &world_block, &contact)
        .with_local_points(&pos1, &pos2);

    let mut manifold = ContactManifold::new(0, 1);
    assert!(manifold.add(tracked).is_none());
    assert_relative_eq!(manifold.points[0].depth, 0.05, epsilon = 1.0e-4);

    // Lifting the block by less than half the breaking threshold keeps the contact.
    let lifted = Isometry3::translation(0.0, 1.01, 0.0);
    manifold.validate_contacts(&pos1, &lifted, &options);
    assert_eq!(manifold.len(), 1);
    assert_relative_eq!(manifold.points[0].depth, -0.01, epsilon = 1.0e-4);

    // Sliding the block sideways past the drift threshold drops it.
    let slid = Isometry3::translation(0.1, 0.95, 0.0);
    manifold.validate_contacts(&pos1, &slid, &options);
    assert!(manifold.is_empty());
}

#[test]
fn lifting_past_the_breaking_threshold_drops_contacts() {
    let options = ManifoldOptions::default();
    let mut manifold = ContactManifold::from_candidates(0, 1, &corner_contacts());
    let lifted = Isometry3::translation(0.0, 0.05, 0.0);

    manifold.validate_contacts(&Isometry3::identity(), &lifted, &options);
    assert!(manifold.is_empty());
}
