use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::query::contact_manifolds::{TrackedContact, MAX_MANIFOLD_POINTS};
use crate::shape::Triangle;
use arrayvec::ArrayVec;
#[cfg(not(feature = "std"))]
use na::ComplexField;

/// Selects the four most representative contacts among `candidates`.
///
/// The selection keeps the deepest contact, then the contact farthest from it, then the one
/// farthest from the line through the first two, and finally the one farthest from the plane
/// through the first three (or, for coplanar contacts, the one farthest from the triangle
/// they span).
///
/// Candidates are returned unchanged if there are at most four of them. Ties are resolved in
/// favor of the candidate appearing first.
pub fn reduce_contacts(
    candidates: &[TrackedContact],
) -> ArrayVec<TrackedContact, MAX_MANIFOLD_POINTS> {
    if candidates.len() <= MAX_MANIFOLD_POINTS {
        return candidates.iter().copied().collect();
    }

    let mut selected = ArrayVec::<usize, MAX_MANIFOLD_POINTS>::new();

    // NOTE: every `argmax` below succeeds since there are more candidates than selected ids.
    let Some(ia) = argmax(candidates, &selected, |c| c.depth) else {
        return ArrayVec::new();
    };
    selected.push(ia);
    let pa = candidates[ia].point1;

    let Some(ib) = argmax(candidates, &selected, |c| na::distance_squared(&c.point1, &pa)) else {
        return ArrayVec::new();
    };
    selected.push(ib);
    let pb = candidates[ib].point1;
    let ab = pb - pa;

    let Some(ic) = argmax(candidates, &selected, |c| (c.point1 - pa).cross(&ab).norm_squared())
    else {
        return ArrayVec::new();
    };
    selected.push(ic);
    let pc = candidates[ic].point1;

    // Contacts are usually coplanar, in which case the farthest point from the triangle
    // spanned by the first three is kept instead.
    let coplanar_eps = DEFAULT_EPSILON.sqrt() * ab.norm();
    let plane_dist = |pt: &Point<Real>| {
        ab.cross(&(pc - pa))
            .try_normalize(DEFAULT_EPSILON)
            .map(|n| (pt - pa).dot(&n).abs())
            .unwrap_or(0.0)
    };
    let tri = Triangle::new(pa, pb, pc);

    let Some(mut id) = argmax(candidates, &selected, |c| plane_dist(&c.point1)) else {
        return ArrayVec::new();
    };

    if plane_dist(&candidates[id].point1) <= coplanar_eps {
        let Some(in_plane) = argmax(candidates, &selected, |c| {
            na::distance_squared(&tri.project_point_with_location(&c.point1).0, &c.point1)
        }) else {
            return ArrayVec::new();
        };
        id = in_plane;
    }

    selected.push(id);

    selected.iter().map(|i| candidates[*i]).collect()
}

fn argmax(
    candidates: &[TrackedContact],
    excluded: &[usize],
    score: impl Fn(&TrackedContact) -> Real,
) -> Option<usize> {
    let mut best: Option<(usize, Real)> = None;

    for (i, candidate) in candidates.iter().enumerate() {
        if excluded.contains(&i) {
            continue;
        }

        let s = score(candidate);

        if best.map(|(_, best_score)| s > best_score).unwrap_or(true) {
            best = Some((i, s));
        }
    }

    best.map(|(i, _)| i)
}
