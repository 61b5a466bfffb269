use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::query::gjk::CsoPoint;
use crate::shape::{Triangle, TrianglePointLocation};
use arrayvec::ArrayVec;
#[cfg(not(feature = "std"))]
use na::ComplexField;

type Weighted = ArrayVec<(CsoPoint, Real), 4>;

/// A simplex of dimension up to 3 living in the Minkowski difference of two shapes.
///
/// After each projection of the origin, only the vertices supporting the projection are
/// kept, together with their barycentric weights.
#[derive(Clone, Debug, Default)]
pub struct Simplex {
    points: ArrayVec<CsoPoint, 4>,
    weights: ArrayVec<Real, 4>,
}

impl Simplex {
    /// Creates an empty simplex.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets this simplex to a single point.
    pub fn reset(&mut self, pt: CsoPoint) {
        self.points.clear();
        self.weights.clear();
        self.points.push(pt);
        self.weights.push(1.0);
    }

    /// Adds a point to this simplex.
    ///
    /// Returns `false` if the simplex is full or if `pt` is already one of its vertices.
    pub fn add_point(&mut self, pt: CsoPoint) -> bool {
        if self.points.is_full() {
            return false;
        }

        let eps = DEFAULT_EPSILON * DEFAULT_EPSILON * self.max_sq_len().max(1.0);

        if self
            .points
            .iter()
            .any(|p| na::distance_squared(&p.point, &pt.point) <= eps)
        {
            return false;
        }

        self.points.push(pt);
        self.weights.push(0.0);
        true
    }

    /// The vertices of this simplex.
    #[inline]
    pub fn points(&self) -> &[CsoPoint] {
        &self.points
    }

    /// The `i`-th vertex of this simplex.
    #[inline]
    pub fn point(&self, i: usize) -> &CsoPoint {
        &self.points[i]
    }

    /// The number of vertices of this simplex.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Is this simplex empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The maximum squared length of the vertices of this simplex.
    pub fn max_sq_len(&self) -> Real {
        self.points
            .iter()
            .map(|p| p.point.coords.norm_squared())
            .fold(0.0, Real::max)
    }

    /// The points of each shape whose difference is the last projection of the origin.
    pub fn witness_points(&self) -> (Point<Real>, Point<Real>) {
        let mut pt1 = Point::origin();
        let mut pt2 = Point::origin();

        for (p, w) in self.points.iter().zip(self.weights.iter()) {
            pt1 += p.orig1.coords * *w;
            pt2 += p.orig2.coords * *w;
        }

        (pt1, pt2)
    }

    /// Projects the origin on this simplex, then drops every vertex not needed to express
    /// the projection.
    ///
    /// Returns `None`, leaving the simplex untouched, if this simplex is a tetrahedron
    /// enclosing the origin.
    pub fn project_origin_and_reduce(&mut self) -> Option<Point<Real>> {
        let (proj, kept) = match self.points.len() {
            0 => return Some(Point::origin()),
            1 => {
                let mut kept = Weighted::new();
                kept.push((self.points[0], 1.0));
                (self.points[0].point, kept)
            }
            2 => project_on_segment(&self.points[0], &self.points[1]),
            3 => project_on_triangle([&self.points[0], &self.points[1], &self.points[2]]),
            _ => project_on_tetrahedron(&self.points)?,
        };

        self.points.clear();
        self.weights.clear();

        for (pt, w) in kept {
            self.points.push(pt);
            self.weights.push(w);
        }

        Some(proj)
    }
}

fn project_on_segment(a: &CsoPoint, b: &CsoPoint) -> (Point<Real>, Weighted) {
    let mut kept = Weighted::new();
    let ab = b.point - a.point;
    let sq_len = ab.norm_squared();
    let t = if sq_len > DEFAULT_EPSILON * DEFAULT_EPSILON {
        -a.point.coords.dot(&ab) / sq_len
    } else {
        0.0
    };

    if t <= 0.0 {
        kept.push((*a, 1.0));
        (a.point, kept)
    } else if t >= 1.0 {
        kept.push((*b, 1.0));
        (b.point, kept)
    } else {
        kept.push((*a, 1.0 - t));
        kept.push((*b, t));
        (a.point + ab * t, kept)
    }
}

fn project_on_triangle(pts: [&CsoPoint; 3]) -> (Point<Real>, Weighted) {
    let tri = Triangle::new(pts[0].point, pts[1].point, pts[2].point);
    let (proj, loc) = tri.project_point_with_location(&Point::origin());
    let bcoords = loc.barycentric_coordinates();
    let mut kept = Weighted::new();

    match loc {
        TrianglePointLocation::OnVertex(i) => kept.push((*pts[i as usize], 1.0)),
        TrianglePointLocation::OnEdge(..) | TrianglePointLocation::OnFace(_) => {
            for (pt, w) in pts.iter().zip(bcoords.iter()) {
                if *w > 0.0 {
                    kept.push((**pt, *w));
                }
            }
        }
    }

    (proj, kept)
}

fn project_on_tetrahedron(pts: &[CsoPoint]) -> Option<(Point<Real>, Weighted)> {
    // Each face followed by the vertex it does not contain.
    const FACES: [[usize; 4]; 4] = [[0, 1, 2, 3], [0, 1, 3, 2], [0, 2, 3, 1], [1, 2, 3, 0]];

    let p0 = pts[0].point;
    let sq_scale = pts[1..]
        .iter()
        .map(|p| (p.point - p0).norm_squared())
        .fold(0.0, Real::max);
    let volume = (pts[1].point - p0)
        .cross(&(pts[2].point - p0))
        .dot(&(pts[3].point - p0));
    let flat = volume.abs() <= DEFAULT_EPSILON * 100.0 * sq_scale * sq_scale.sqrt();

    let mut best: Option<(Real, Point<Real>, Weighted)> = None;

    for [i, j, k, l] in FACES {
        let a = pts[i].point;
        let n = (pts[j].point - a).cross(&(pts[k].point - a));
        let side_opp = n.dot(&(pts[l].point - a));
        let side_origin = -n.dot(&a.coords);

        if flat || side_opp * side_origin < 0.0 {
            let (proj, kept) = project_on_triangle([&pts[i], &pts[j], &pts[k]]);
            let sq_dist = proj.coords.norm_squared();

            if best.as_ref().map(|b| sq_dist < b.0).unwrap_or(true) {
                best = Some((sq_dist, proj, kept));
            }
        }
    }

    best.map(|(_, proj, kept)| (proj, kept))
}
