//! Three-dimensional penetration depth queries using the Expanding Polytope Algorithm.

use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::query::gjk::{self, CsoPoint, Simplex};
use crate::shape::{SupportMap, Triangle};
use crate::utils;
use alloc::vec::Vec;
use ordered_float::OrderedFloat;
#[cfg(not(feature = "std"))]
use na::ComplexField;

/// Parameters of the Expanding Polytope Algorithm.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct EpaOptions {
    /// The maximum number of polytope expansions.
    pub max_iterations: u32,
    /// The polytope is considered converged once the support point along the closest face
    /// normal is closer than this to the face plane.
    pub tolerance: Real,
}

impl Default for EpaOptions {
    fn default() -> Self {
        Self {
            max_iterations: 32,
            tolerance: 1.0e-4,
        }
    }
}

/// The penetration information computed by the [`Epa`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct EpaResult {
    /// The penetration direction, pointing from the first shape toward the second shape.
    pub normal: UnitVector<Real>,
    /// The penetration depth along `normal`. Always non-negative.
    pub depth: Real,
    /// The deepest point of the first shape inside the second one.
    pub point1: Point<Real>,
    /// The deepest point of the second shape inside the first one.
    pub point2: Point<Real>,
    /// `false` if the polytope degenerated or did not converge within the iteration budget.
    /// The other fields are then only a best estimate.
    pub valid: bool,
    /// The number of polytope expansions performed.
    pub iterations: u32,
}

impl EpaResult {
    fn degenerate(iterations: u32) -> Self {
        Self {
            normal: Vector::y_axis(),
            depth: 0.0,
            point1: Point::origin(),
            point2: Point::origin(),
            valid: false,
            iterations,
        }
    }
}

#[derive(Clone, Debug)]
struct Face {
    pts: [usize; 3],
    normal: Vector<Real>,
    dist: Real,
    degenerate: bool,
}

/// Normal, distance and witness points of a face, copied out of the polytope.
#[derive(Copy, Clone, Debug)]
struct FaceEstimate {
    normal: Vector<Real>,
    dist: Real,
    point1: Point<Real>,
    point2: Point<Real>,
}

impl Face {
    fn new(vertices: &[CsoPoint], pts: [usize; 3]) -> Self {
        match utils::ccw_face_normal([
            &vertices[pts[0]].point,
            &vertices[pts[1]].point,
            &vertices[pts[2]].point,
        ]) {
            Some(n) => Face {
                pts,
                normal: n.into_inner(),
                dist: n.dot(&vertices[pts[0]].point.coords),
                degenerate: false,
            },
            None => Face {
                pts,
                normal: Vector::zeros(),
                dist: Real::MAX,
                degenerate: true,
            },
        }
    }

    fn flip(&mut self) {
        self.pts.swap(1, 2);
        self.normal = -self.normal;
        self.dist = -self.dist;
    }

    fn edges(&self) -> [[usize; 2]; 3] {
        let [a, b, c] = self.pts;
        [[a, b], [b, c], [c, a]]
    }

    fn has_edge(&self, edge: [usize; 2]) -> bool {
        self.edges().contains(&edge)
    }

    // Degenerate faces are always reported as visible so they get replaced.
    fn can_be_seen_by(&self, vertices: &[CsoPoint], pt: &Point<Real>) -> bool {
        self.degenerate || self.normal.dot(&(pt - vertices[self.pts[0]].point)) > gjk::eps_tol()
    }

    fn estimate(&self, vertices: &[CsoPoint]) -> FaceEstimate {
        let [a, b, c] = self.pts.map(|i| vertices[i]);
        let tri = Triangle::new(a.point, b.point, c.point);
        let (_, loc) = tri.project_point_with_location(&Point::origin());
        let bcoords = loc.barycentric_coordinates();

        FaceEstimate {
            normal: self.normal,
            dist: self.dist,
            point1: a.orig1 * bcoords[0] + b.orig1.coords * bcoords[1] + c.orig1.coords * bcoords[2],
            point2: a.orig2 * bcoords[0] + b.orig2.coords * bcoords[1] + c.orig2.coords * bcoords[2],
        }
    }
}

/// The Expanding Polytope Algorithm in 3D.
///
/// Starting from a GJK simplex enclosing the origin, the EPA grows a convex polytope inside
/// the Minkowski difference of both shapes until its face closest to the origin lies on the
/// boundary of the Minkowski difference. The distance of that face to the origin is the
/// penetration depth.
///
/// Faces are kept wound counterclockwise seen from outside the polytope. A run that would
/// break this, or leave the origin outside of the polytope, stops early with
/// `valid == false` and the last face estimate.
///
/// The `Epa` structure can be reused across multiple queries to avoid allocations.
#[derive(Default)]
pub struct Epa {
    vertices: Vec<CsoPoint>,
    faces: Vec<Face>,
    horizon: Vec<[usize; 2]>,
    visible: Vec<bool>,
    stack: Vec<usize>,
}

impl Epa {
    /// Creates a new instance of the 3D Expanding Polytope Algorithm.
    pub fn new() -> Self {
        Self::default()
    }

    fn reset(&mut self) {
        self.vertices.clear();
        self.faces.clear();
        self.horizon.clear();
        self.visible.clear();
        self.stack.clear();
    }

    /// Computes the penetration depth, normal and witness points of two intersecting shapes.
    ///
    /// `simplex` is the simplex left by [`gjk::closest_points`] when it reported an
    /// intersection. Simplices with fewer than four vertices are completed with support
    /// points along the coordinate axes.
    ///
    /// The result is `valid` only if the polytope converged within `options.max_iterations`.
    pub fn closest_points<G1, G2>(
        &mut self,
        g1: &G1,
        g2: &G2,
        simplex: &Simplex,
        options: &EpaOptions,
    ) -> EpaResult
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        self.reset();

        /*
         * Initialization.
         */
        for pt in simplex.points() {
            if self.vertices.len() < 4 && is_affinely_independent(&self.vertices, &pt.point) {
                self.vertices.push(*pt);
            }
        }

        let axes = [
            Vector::x(),
            -Vector::x(),
            Vector::y(),
            -Vector::y(),
            Vector::z(),
            -Vector::z(),
        ];

        for dir in &axes {
            if self.vertices.len() == 4 {
                break;
            }

            let pt = CsoPoint::from_shapes(g1, g2, dir);

            if is_affinely_independent(&self.vertices, &pt.point) {
                self.vertices.push(pt);
            }
        }

        if self.vertices.len() < 4 {
            log::debug!("EPA: could not build an initial tetrahedron.");
            return EpaResult::degenerate(0);
        }

        for [i, j, k, opp] in [[0, 1, 2, 3], [1, 3, 2, 0], [0, 2, 3, 1], [0, 3, 1, 2]] {
            let mut face = Face::new(&self.vertices, [i, j, k]);

            if !face.degenerate
                && face.normal.dot(&(self.vertices[opp].point - self.vertices[i].point)) > 0.0
            {
                face.flip();
            }

            self.faces.push(face);
        }

        let Some(closest) = self.closest_face() else {
            log::debug!("EPA: the initial tetrahedron is flat.");
            return EpaResult::degenerate(0);
        };

        let mut best = self.faces[closest].estimate(&self.vertices);

        // GJK stops once the origin is close enough to its simplex, so the origin may lie
        // slightly outside of the tetrahedron.
        let scale = self
            .vertices
            .iter()
            .map(|pt| pt.point.coords.norm_squared())
            .fold(0.0, Real::max)
            .sqrt();
        let slack = options.tolerance.max(gjk::eps_tol().sqrt() * scale);

        if self
            .faces
            .iter()
            .any(|face| !face.degenerate && face.dist < -slack)
        {
            log::debug!("EPA: the initial tetrahedron does not contain the origin.");
            return self.finish(g1, g2, &best, false, options, 0);
        }

        /*
         * Expansion.
         */
        for niter in 1..=options.max_iterations {
            let Some(closest) = self.closest_face() else {
                log::debug!("EPA: the polytope lost all its faces.");
                return self.finish(g1, g2, &best, false, options, niter);
            };

            best = self.faces[closest].estimate(&self.vertices);

            let dir = UnitVector::new_unchecked(best.normal);
            let support = CsoPoint::from_shapes_toward(g1, g2, &dir);
            let support_dist = support.point.coords.dot(&best.normal);

            if support_dist - best.dist < options.tolerance {
                return self.finish(g1, g2, &best, true, options, niter);
            }

            let new_id = self.vertices.len();
            self.vertices.push(support);

            if !self.compute_horizon(closest, &support.point) {
                log::debug!("EPA: the faces visible from the new vertex do not form a disk.");
                return self.finish(g1, g2, &best, false, options, niter);
            }

            let visible = &self.visible;
            let mut face_id = 0;
            self.faces.retain(|_| {
                face_id += 1;
                !visible[face_id - 1]
            });

            for [a, b] in &self.horizon {
                // The horizon edges keep the winding of the removed faces.
                let face = Face::new(&self.vertices, [*a, *b, new_id]);

                if !face.degenerate && face.dist < -slack {
                    log::debug!("EPA: the origin left the polytope.");
                    return self.finish(g1, g2, &best, false, options, niter);
                }

                self.faces.push(face);
            }
        }

        log::debug!(
            "EPA did not converge after {} iterations.",
            options.max_iterations
        );

        if let Some(closest) = self.closest_face() {
            best = self.faces[closest].estimate(&self.vertices);
        }

        self.finish(g1, g2, &best, false, options, options.max_iterations)
    }

    fn closest_face(&self) -> Option<usize> {
        self.faces
            .iter()
            .enumerate()
            .filter(|(_, face)| !face.degenerate)
            .min_by_key(|(_, face)| OrderedFloat(face.dist.abs()))
            .map(|(id, _)| id)
    }

    fn adjacent_face(&self, edge: [usize; 2]) -> Option<usize> {
        self.faces
            .iter()
            .position(|face| face.has_edge([edge[1], edge[0]]))
    }

    /// Marks the faces visible from `pt` that are connected to `first` and collects the
    /// boundary of that region into `self.horizon`.
    ///
    /// Returns `false` if the polytope is not closed or the boundary is not a single loop.
    fn compute_horizon(&mut self, first: usize, pt: &Point<Real>) -> bool {
        self.horizon.clear();
        self.stack.clear();
        self.visible.clear();
        self.visible.resize(self.faces.len(), false);

        self.visible[first] = true;
        self.stack.push(first);

        while let Some(face_id) = self.stack.pop() {
            for edge in self.faces[face_id].edges() {
                let Some(adj) = self.adjacent_face(edge) else {
                    return false;
                };

                if !self.visible[adj] && self.faces[adj].can_be_seen_by(&self.vertices, pt) {
                    self.visible[adj] = true;
                    self.stack.push(adj);
                }
            }
        }

        for (face_id, face) in self.faces.iter().enumerate() {
            if !self.visible[face_id] {
                continue;
            }

            for edge in face.edges() {
                match self.adjacent_face(edge) {
                    Some(adj) if !self.visible[adj] => self.horizon.push(edge),
                    Some(_) => {}
                    None => return false,
                }
            }
        }

        is_single_loop(&self.horizon)
    }

    fn finish<G1, G2>(
        &self,
        g1: &G1,
        g2: &G2,
        best: &FaceEstimate,
        converged: bool,
        options: &EpaOptions,
        iterations: u32,
    ) -> EpaResult
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        let refined = refine_normal(g1, g2, &best.normal, options.tolerance);

        // The face distance is a lower bound of the depth and the support distance along
        // any direction is an upper bound. Without convergence, only a stationary direction
        // makes that upper bound a usable estimate.
        let use_refined = if converged {
            refined.improved
        } else {
            refined.stationary
        };

        if use_refined {
            return EpaResult {
                normal: refined.normal,
                depth: refined.depth.max(0.0),
                point1: refined.support.orig1,
                point2: refined.support.orig2,
                valid: converged,
                iterations,
            };
        }

        EpaResult {
            normal: UnitVector::new_unchecked(best.normal),
            depth: best.dist.max(0.0),
            point1: best.point1,
            point2: best.point2,
            valid: converged,
            iterations,
        }
    }
}

/// Checks that `edges` is one closed loop visiting each of its start vertices once.
fn is_single_loop(edges: &[[usize; 2]]) -> bool {
    if edges.len() < 3 {
        return false;
    }

    let unique_starts = edges
        .iter()
        .enumerate()
        .all(|(i, e)| edges[..i].iter().all(|prev| prev[0] != e[0]));

    if !unique_starts {
        return false;
    }

    let mut end = edges[0][1];
    let mut len = 1;

    while end != edges[0][0] {
        if len == edges.len() {
            return false;
        }

        match edges.iter().find(|e| e[0] == end) {
            Some(next) => end = next[1],
            None => return false,
        }

        len += 1;
    }

    len == edges.len()
}

fn is_affinely_independent(pts: &[CsoPoint], pt: &Point<Real>) -> bool {
    const EPS: Real = DEFAULT_EPSILON * 100.0;

    match pts.len() {
        0 => true,
        1 => na::distance_squared(&pts[0].point, pt) > EPS * EPS,
        2 => !Triangle::new(pts[0].point, pts[1].point, *pt).is_affinely_dependent(),
        3 => {
            let p0 = pts[0].point;
            let d1 = pts[1].point - p0;
            let d2 = pts[2].point - p0;
            let d3 = pt - p0;
            let sq_scale = d1
                .norm_squared()
                .max(d2.norm_squared())
                .max(d3.norm_squared());

            d1.cross(&d2).dot(&d3).abs() > EPS * sq_scale * sq_scale.sqrt()
        }
        _ => false,
    }
}

struct RefinedNormal {
    normal: UnitVector<Real>,
    support: CsoPoint,
    depth: Real,
    improved: bool,
    stationary: bool,
}

/// Polishes a penetration direction of two curved shapes.
///
/// The penetration depth is the minimum of `h(n) = support(n).n` over unit directions `n`,
/// where `support` is the support map of the Minkowski difference. Starting from `normal`,
/// this takes a few secant steps on the derivative of `h` along its steepest descent great
/// circle. A step is kept only if it strictly decreases `h`, so polyhedral results (for
/// which the EPA normal is already exact) are left untouched.
fn refine_normal<G1, G2>(
    g1: &G1,
    g2: &G2,
    normal: &Vector<Real>,
    tolerance: Real,
) -> RefinedNormal
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    const MAX_STEPS: usize = 8;
    const MAX_ANGLE: Real = core::f32::consts::FRAC_PI_4;

    let mut n = *normal;
    let mut support = CsoPoint::from_shapes(g1, g2, &n);
    let mut h = support.point.coords.dot(&n);
    let mut improved = false;

    for _ in 0..MAX_STEPS {
        let tangent = support.point.coords - n * h;
        let slope = tangent.norm();
        let scale = support.point.coords.norm();

        if slope <= gjk::eps_tol() * scale.max(1.0) {
            break;
        }

        let u = -tangent / slope;
        let secant_angle = (slope / scale).min(MAX_ANGLE);
        let (sin1, cos1) = secant_angle.sin_cos();
        let secant = CsoPoint::from_shapes(g1, g2, &(n * cos1 + u * sin1));
        let secant_slope = secant.point.coords.dot(&(u * cos1 - n * sin1));
        let curvature = secant_slope + slope;

        // A non-positive curvature means the secant model is useless: take the largest
        // descent step and let the decrease test decide.
        let angle = if curvature > DEFAULT_EPSILON {
            (secant_angle * slope / curvature).min(MAX_ANGLE)
        } else {
            MAX_ANGLE
        };
        let (sin, cos) = angle.sin_cos();
        let candidate_n = (n * cos + u * sin).normalize();
        let candidate = CsoPoint::from_shapes(g1, g2, &candidate_n);
        let candidate_h = candidate.point.coords.dot(&candidate_n);

        if candidate_h >= h {
            break;
        }

        n = candidate_n;
        support = candidate;
        h = candidate_h;
        improved = true;
    }

    let stationary = (support.point.coords - n * h).norm() <= tolerance;

    RefinedNormal {
        normal: UnitVector::new_normalize(n),
        support,
        depth: h,
        improved,
        stationary,
    }
}
