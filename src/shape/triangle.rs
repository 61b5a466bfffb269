//! Definition of the triangle shape.

use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::{FeatureId, SupportMap};
#[cfg(not(feature = "std"))]
use na::ComplexField;

/// A triangle shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

/// Description of the location of a point on a triangle.
///
/// Edges are numbered `0` for `ab`, `1` for `bc` and `2` for `ac`; the two weights of an
/// edge location apply to the edge endpoints in that order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TrianglePointLocation {
    /// The point lies on a vertex.
    OnVertex(u32),
    /// The point lies on an edge, with the barycentric coordinates of the edge endpoints.
    OnEdge(u32, [Real; 2]),
    /// The point lies on the triangle interior, with its barycentric coordinates.
    OnFace([Real; 3]),
}

impl TrianglePointLocation {
    /// The barycentric coordinates of the located point with respect to `a`, `b` and `c`.
    pub fn barycentric_coordinates(&self) -> [Real; 3] {
        let mut bcoords = [0.0; 3];

        match *self {
            TrianglePointLocation::OnVertex(i) => bcoords[i as usize] = 1.0,
            TrianglePointLocation::OnEdge(i, uv) => {
                let (i1, i2) = match i {
                    0 => (0, 1),
                    1 => (1, 2),
                    _ => (0, 2),
                };

                bcoords[i1] = uv[0];
                bcoords[i2] = uv[1];
            }
            TrianglePointLocation::OnFace(uvw) => bcoords = uvw,
        }

        bcoords
    }
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// Computes the world-space triangle obtained by applying `pos` to `self`.
    #[inline]
    pub fn transform_by(&self, pos: &Isometry<Real>) -> Self {
        Triangle::new(pos * self.a, pos * self.b, pos * self.c)
    }

    /// Checks that the three vertices of this triangle are (almost) colinear.
    pub fn is_affinely_dependent(&self) -> bool {
        const EPS: Real = DEFAULT_EPSILON * 100.0;

        let p1p2 = self.b - self.a;
        let p1p3 = self.c - self.a;
        relative_eq!(p1p2.cross(&p1p3).norm_squared(), 0.0, epsilon = EPS * EPS)
    }

    /// Projects `pt` on this triangle and reports which feature of the triangle holds the
    /// projection.
    ///
    /// Degenerate triangles are handled as the union of their edges.
    pub fn project_point_with_location(
        &self,
        pt: &Point<Real>,
    ) -> (Point<Real>, TrianglePointLocation) {
        let (a, b, c) = (self.a, self.b, self.c);
        let ab = b - a;
        let ac = c - a;

        let ap = pt - a;
        let d1 = ab.dot(&ap);
        let d2 = ac.dot(&ap);

        if d1 <= 0.0 && d2 <= 0.0 {
            return (a, TrianglePointLocation::OnVertex(0));
        }

        let bp = pt - b;
        let d3 = ab.dot(&bp);
        let d4 = ac.dot(&bp);

        if d3 >= 0.0 && d4 <= d3 {
            return (b, TrianglePointLocation::OnVertex(1));
        }

        let vc = d1 * d4 - d3 * d2;
        if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
            let v = d1 / (d1 - d3);
            return (a + ab * v, TrianglePointLocation::OnEdge(0, [1.0 - v, v]));
        }

        let cp = pt - c;
        let d5 = ab.dot(&cp);
        let d6 = ac.dot(&cp);

        if d6 >= 0.0 && d5 <= d6 {
            return (c, TrianglePointLocation::OnVertex(2));
        }

        let vb = d5 * d2 - d1 * d6;
        if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
            let w = d2 / (d2 - d6);
            return (a + ac * w, TrianglePointLocation::OnEdge(2, [1.0 - w, w]));
        }

        let va = d3 * d6 - d5 * d4;
        if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
            let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
            return (
                b + (c - b) * w,
                TrianglePointLocation::OnEdge(1, [1.0 - w, w]),
            );
        }

        let sum = va + vb + vc;

        if sum.abs() <= DEFAULT_EPSILON * ab.norm_squared().max(ac.norm_squared()).powi(2) {
            return self.project_point_on_edges(pt);
        }

        let denom = 1.0 / sum;
        let v = vb * denom;
        let w = vc * denom;

        (
            a + ab * v + ac * w,
            TrianglePointLocation::OnFace([1.0 - v - w, v, w]),
        )
    }

    fn project_point_on_edges(&self, pt: &Point<Real>) -> (Point<Real>, TrianglePointLocation) {
        let edges = [(0, self.a, self.b), (1, self.b, self.c), (2, self.a, self.c)];
        let mut best = (self.a, TrianglePointLocation::OnVertex(0));
        let mut best_dist = Real::MAX;

        for (id, p1, p2) in edges {
            let dir = p2 - p1;
            let sq_len = dir.norm_squared();
            let t = if sq_len > 0.0 {
                ((pt - p1).dot(&dir) / sq_len).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let proj = p1 + dir * t;
            let dist = na::distance_squared(&proj, pt);

            if dist < best_dist {
                best_dist = dist;
                best = (proj, TrianglePointLocation::OnEdge(id, [1.0 - t, t]));
            }
        }

        best
    }

    fn support_vertex_id(&self, dir: &Vector<Real>) -> u32 {
        let d1 = self.a.coords.dot(dir);
        let d2 = self.b.coords.dot(dir);
        let d3 = self.c.coords.dot(dir);

        if d1 >= d2 {
            if d1 >= d3 {
                0
            } else {
                2
            }
        } else if d2 >= d3 {
            1
        } else {
            2
        }
    }
}

impl SupportMap for Triangle {
    #[inline]
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        match self.support_vertex_id(dir) {
            0 => self.a,
            1 => self.b,
            _ => self.c,
        }
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        Point::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }

    #[inline]
    fn support_feature(&self, dir: &Vector<Real>) -> FeatureId {
        FeatureId::Vertex(self.support_vertex_id(dir))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn project_origin_on_each_region() {
        let tri = Triangle::new(
            Point::new(-1.0, -1.0, 1.0),
            Point::new(1.0, -1.0, 1.0),
            Point::new(0.0, 1.0, 1.0),
        );

        let (proj, loc) = tri.project_point_with_location(&Point::origin());
        assert_relative_eq!(proj, Point::new(0.0, 0.0, 1.0), epsilon = 1.0e-6);
        assert!(matches!(loc, TrianglePointLocation::OnFace(_)));
        let bcoords = loc.barycentric_coordinates();
        assert_relative_eq!(bcoords.iter().sum::<Real>(), 1.0, epsilon = 1.0e-6);

        let (proj, loc) = tri.project_point_with_location(&Point::new(0.0, -3.0, 1.0));
        assert_relative_eq!(proj, Point::new(0.0, -1.0, 1.0), epsilon = 1.0e-6);
        assert_eq!(loc, TrianglePointLocation::OnEdge(0, [0.5, 0.5]));

        let (proj, loc) = tri.project_point_with_location(&Point::new(0.0, 5.0, 1.0));
        assert_eq!(proj, tri.c);
        assert_eq!(loc, TrianglePointLocation::OnVertex(2));
    }

    #[test]
    fn degenerate_triangle_projects_on_edges() {
        let tri = Triangle::new(
            Point::new(-1.0, 1.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(1.0, 1.0, 0.0),
        );
        let (proj, _) = tri.project_point_with_location(&Point::origin());

        assert!(tri.is_affinely_dependent());
        assert_relative_eq!(proj, Point::new(0.0, 1.0, 0.0), epsilon = 1.0e-6);
    }
}
