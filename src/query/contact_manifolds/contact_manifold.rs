use crate::math::{Isometry, Real, Vector};
use crate::query::contact_manifolds::{
    reduce_contacts, ManifoldOptions, TrackedContact, MAX_MANIFOLD_POINTS,
};
use arrayvec::ArrayVec;

/// A persistent set of at most four contact points between two shapes.
///
/// A manifold is created the first time a pair of shapes collides, and kept by the caller
/// (usually in a cache keyed by `shape1` and `shape2`) as long as the pair stays a collision
/// candidate. Every frame, the cached points are first validated against the new body
/// positions with [`Self::validate_contacts`], then merged with the newly computed points
/// using [`Self::merge_with`] or [`Self::add_or_refresh`]. Matched points keep their
/// accumulated impulses so the constraint solver can be warm-started.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ContactManifold {
    /// The contact points of this manifold.
    pub points: ArrayVec<TrackedContact, MAX_MANIFOLD_POINTS>,
    /// The normal shared by the contacts of this manifold, pointing from the first shape
    /// toward the second shape.
    pub normal: Vector<Real>,
    /// Identifier of the first shape, chosen by the caller.
    pub shape1: u64,
    /// Identifier of the second shape, chosen by the caller.
    pub shape2: u64,
}

impl ContactManifold {
    /// Creates an empty manifold between the shapes identified by `shape1` and `shape2`.
    pub fn new(shape1: u64, shape2: u64) -> Self {
        Self {
            points: ArrayVec::new(),
            normal: Vector::zeros(),
            shape1,
            shape2,
        }
    }

    /// Creates a manifold holding the most representative contacts among `candidates`.
    pub fn from_candidates(shape1: u64, shape2: u64, candidates: &[TrackedContact]) -> Self {
        let mut result = Self::new(shape1, shape2);
        result.points = reduce_contacts(candidates);
        result.update_normal();
        result
    }

    /// The contact points of this manifold.
    #[inline]
    pub fn contacts(&self) -> &[TrackedContact] {
        &self.points
    }

    /// The number of contact points of this manifold.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Does this manifold have no contact point?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Removes every contact point of this manifold.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Sets the accumulated impulses of every contact point to zero.
    pub fn reset_impulses(&mut self) {
        for pt in &mut self.points {
            pt.reset_impulses();
        }
    }

    /// Returns the contact with the largest penetration depth.
    pub fn find_deepest_contact(&self) -> Option<&TrackedContact> {
        let mut deepest = self.points.first()?;

        for pt in &self.points {
            if pt.depth > deepest.depth {
                deepest = pt;
            }
        }

        Some(deepest)
    }

    /// Adds a contact point to this manifold.
    ///
    /// If the manifold is already full, the existing point whose `point1` is the farthest from
    /// the `point1` of `contact` is replaced and returned. The manifold normal is set to the
    /// normal of `contact`.
    pub fn add(&mut self, contact: TrackedContact) -> Option<TrackedContact> {
        self.normal = contact.normal;

        if !self.points.is_full() {
            self.points.push(contact);
            return None;
        }

        let mut farthest = 0;
        let mut farthest_dist = -1.0;

        for (i, pt) in self.points.iter().enumerate() {
            let dist = na::distance_squared(&pt.point1, &contact.point1);

            if dist > farthest_dist {
                farthest = i;
                farthest_dist = dist;
            }
        }

        Some(core::mem::replace(&mut self.points[farthest], contact))
    }

    /// Refreshes the cached point matching `contact`, or adds `contact` if there is none.
    ///
    /// A refreshed point takes the geometry of `contact` but keeps its impulses, and its
    /// lifespan is incremented. Returns the point evicted by [`Self::add`], if any.
    pub fn add_or_refresh(
        &mut self,
        contact: TrackedContact,
        options: &ManifoldOptions,
    ) -> Option<TrackedContact> {
        if let Some(i) = self.find_match(&contact, &[false; MAX_MANIFOLD_POINTS], options) {
            let pt = &mut self.points[i];
            pt.copy_geometry_from(&contact);
            pt.lifespan += 1;
            self.normal = contact.normal;
            None
        } else {
            self.add(contact)
        }
    }

    /// Replaces the points of this manifold by `new_points`, transferring the impulses of the
    /// cached points they match.
    ///
    /// A new point matches a cached point if both carry the same known feature ids, or else if
    /// their `point1` are closer than `options.position_threshold`. Each cached point is matched
    /// at most once. Matched points keep the impulses of the cached point and their lifespan is
    /// incremented; unmatched points start with zero impulses. If there are more than four new
    /// points, they are reduced with [`reduce_contacts`] first.
    pub fn merge_with(&mut self, new_points: &[TrackedContact], options: &ManifoldOptions) {
        let new_points = reduce_contacts(new_points);
        let mut merged = ArrayVec::<TrackedContact, MAX_MANIFOLD_POINTS>::new();
        let mut used = [false; MAX_MANIFOLD_POINTS];

        for new_pt in &new_points {
            let mut pt = *new_pt;

            if let Some(i) = self.find_match(new_pt, &used, options) {
                used[i] = true;
                let old = &self.points[i];
                pt.normal_impulse = old.normal_impulse;
                pt.tangent_impulse1 = old.tangent_impulse1;
                pt.tangent_impulse2 = old.tangent_impulse2;
                pt.lifespan = old.lifespan + 1;
            } else {
                pt.reset_impulses();
                pt.lifespan = 0;
            }

            merged.push(pt);
        }

        self.points = merged;
        self.update_normal();
    }

    /// Checks the cached points against the current positions of both bodies.
    ///
    /// The local points of each contact are moved to world-space with `pos1` and `pos2`. A
    /// point is removed if both witness points separated along its normal by more than
    /// `options.breaking_threshold`, or slid apart orthogonally to its normal by more than
    /// `options.drift_threshold`. The world-space points and depth of the remaining points are
    /// updated.
    pub fn validate_contacts(
        &mut self,
        pos1: &Isometry<Real>,
        pos2: &Isometry<Real>,
        options: &ManifoldOptions,
    ) {
        self.points.retain(|pt| {
            let world1 = pos1 * pt.local_p1;
            let world2 = pos2 * pt.local_p2;
            let separation = (world2 - world1).dot(&pt.normal);
            let offset = world1 - world2;
            let drift = offset - pt.normal * offset.dot(&pt.normal);

            if separation > options.breaking_threshold
                || drift.norm_squared() > options.drift_threshold * options.drift_threshold
            {
                return false;
            }

            pt.point1 = world1;
            pt.point2 = world2;
            pt.depth = -separation;
            true
        });
    }

    /// Removes the points that survived more than `options.max_age` updates.
    pub fn prune_stale_contacts(&mut self, options: &ManifoldOptions) {
        self.points.retain(|pt| pt.lifespan <= options.max_age);
    }

    fn find_match(
        &self,
        contact: &TrackedContact,
        used: &[bool; MAX_MANIFOLD_POINTS],
        options: &ManifoldOptions,
    ) -> Option<usize> {
        let candidates = || {
            self.points
                .iter()
                .enumerate()
                .filter(|(i, _)| !used[*i])
                .map(|(i, pt)| (i, na::distance_squared(&pt.point1, &contact.point1)))
        };
        let closest = |best: Option<(usize, Real)>, (i, dist): (usize, Real)| match best {
            Some((_, best_dist)) if best_dist <= dist => best,
            _ => Some((i, dist)),
        };

        let by_features = candidates()
            .filter(|(i, _)| self.points[*i].same_features(contact))
            .fold(None, closest);

        if let Some((i, _)) = by_features {
            return Some(i);
        }

        let sq_threshold = options.position_threshold * options.position_threshold;
        candidates()
            .filter(|(_, dist)| *dist <= sq_threshold)
            .fold(None, closest)
            .map(|(i, _)| i)
    }

    fn update_normal(&mut self) {
        if let Some(deepest) = self.find_deepest_contact() {
            self.normal = deepest.normal;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Point;
    use crate::shape::PackedFeatureId;

    fn contact_at(x: Real, z: Real, fid: u32) -> TrackedContact {
        TrackedContact::new(Point::new(x, 0.0, z), Point::new(x, 0.0, z), Vector::y(), 0.0)
            .with_features(PackedFeatureId::vertex(fid), PackedFeatureId::face(0))
    }

    fn square() -> ContactManifold {
        let mut manifold = ContactManifold::new(1, 2);
        for (i, (x, z)) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)]
            .into_iter()
            .enumerate()
        {
            let mut pt = contact_at(x, z, i as u32);
            pt.normal_impulse = i as Real + 1.0;
            assert!(manifold.add(pt).is_none());
        }
        manifold
    }

    #[test]
    fn fifth_point_evicts_the_farthest() {
        let mut manifold = square();
        let evicted = manifold.add(contact_at(-0.9, -0.8, 10)).unwrap();

        assert_eq!(evicted.fid1, PackedFeatureId::vertex(2));
        assert_eq!(manifold.len(), 4);
        assert_eq!(manifold.points[2].fid1, PackedFeatureId::vertex(10));
        assert_eq!(manifold.points[0].normal_impulse, 1.0);
        assert_eq!(manifold.points[3].normal_impulse, 4.0);
    }

    #[test]
    fn merge_matches_by_features_then_position() {
        let mut manifold = square();
        let moved = contact_at(0.5, 0.5, 2);
        let mut unlabelled = contact_at(-1.005, 1.0, 0);
        unlabelled.fid1 = PackedFeatureId::UNKNOWN;
        let far = contact_at(0.0, 0.0, 42);

        manifold.merge_with(&[moved, unlabelled, far], &ManifoldOptions::default());

        assert_eq!(manifold.len(), 3);
        assert_eq!(manifold.points[0].normal_impulse, 3.0);
        assert_eq!(manifold.points[0].lifespan, 1);
        assert_eq!(manifold.points[1].normal_impulse, 4.0);
        assert_eq!(manifold.points[1].lifespan, 1);
        assert_eq!(manifold.points[2].normal_impulse, 0.0);
        assert_eq!(manifold.points[2].lifespan, 0);
    }

    #[test]
    fn merge_uses_each_cached_point_once() {
        let mut manifold = ContactManifold::new(1, 2);
        let mut cached = contact_at(0.0, 0.0, 0);
        cached.normal_impulse = 5.0;
        let _ = manifold.add(cached);

        manifold.merge_with(&[cached, cached], &ManifoldOptions::default());

        assert_eq!(manifold.points[0].normal_impulse, 5.0);
        assert_eq!(manifold.points[1].normal_impulse, 0.0);
    }

    #[test]
    fn refresh_keeps_impulses() {
        let mut manifold = square();
        let options = ManifoldOptions::default();
        let mut refreshed = contact_at(1.0, 1.0, 2);
        refreshed.depth = 0.3;

        assert!(manifold.add_or_refresh(refreshed, &options).is_none());
        assert_eq!(manifold.len(), 4);
        assert_eq!(manifold.points[2].depth, 0.3);
        assert_eq!(manifold.points[2].normal_impulse, 3.0);
        assert_eq!(manifold.points[2].lifespan, 1);

        let evicted = manifold.add_or_refresh(contact_at(-0.9, -0.8, 10), &options);
        assert_eq!(evicted.map(|pt| pt.fid1), Some(PackedFeatureId::vertex(2)));
    }

    #[test]
    fn validation_drops_separated_and_drifting_points() {
        let mut manifold = square();
        let options = ManifoldOptions::default();

        // The second body moves away by half the breaking threshold.
        let pos1 = Isometry::identity();
        let pos2 = Isometry::translation(0.0, 0.01, 0.0);
        manifold.validate_contacts(&pos1, &pos2, &options);
        assert_eq!(manifold.len(), 4);
        assert_relative_eq!(manifold.points[0].depth, -0.01, epsilon = 1.0e-6);
        assert_relative_eq!(manifold.points[0].point2, Point::new(-1.0, 0.01, -1.0));

        // Sliding farther than the drift threshold.
        let pos2 = Isometry::translation(0.06, 0.0, 0.0);
        manifold.validate_contacts(&pos1, &pos2, &options);
        assert!(manifold.is_empty());
    }

    #[test]
    fn validation_drops_points_beyond_breaking_threshold() {
        let mut manifold = square();
        let pos2 = Isometry::translation(0.0, 0.03, 0.0);

        manifold.validate_contacts(&Isometry::identity(), &pos2, &ManifoldOptions::default());
        assert!(manifold.is_empty());
    }

    #[test]
    fn stale_points_are_pruned() {
        let mut manifold = square();
        manifold.points[1].lifespan = 61;
        manifold.points[3].lifespan = 60;

        manifold.prune_stale_contacts(&ManifoldOptions::default());
        assert_eq!(manifold.len(), 3);
        assert!(manifold.contacts().iter().all(|pt| pt.lifespan <= 60));
    }

    #[test]
    fn impulses_reset_and_deepest() {
        let mut manifold = square();
        manifold.points[3].depth = 0.2;

        assert_eq!(
            manifold.find_deepest_contact().map(|pt| pt.fid1),
            Some(PackedFeatureId::vertex(3))
        );
        manifold.reset_impulses();
        assert!(manifold.contacts().iter().all(|pt| pt.normal_impulse == 0.0));

        manifold.clear();
        assert!(manifold.find_deepest_contact().is_none());
    }
}
