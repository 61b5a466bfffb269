use crate::math::{Point, Real, Vector};

/// Computes the index of the support point of a cloud of points.
///
/// Ties are resolved in favor of the point with the smallest index. Returns `None` if
/// `points` is empty.
#[inline]
pub fn point_cloud_support_point_id(dir: &Vector<Real>, points: &[Point<Real>]) -> Option<usize> {
    let mut iter = points.iter().enumerate();
    let (mut best_pt, first) = iter.next()?;
    let mut best_dot = first.coords.dot(dir);

    for (i, p) in iter {
        let dot = p.coords.dot(dir);

        if dot > best_dot {
            best_dot = dot;
            best_pt = i;
        }
    }

    Some(best_pt)
}

/// Computes the support point of a cloud of points.
///
/// Returns the origin if `points` is empty.
#[inline]
pub fn point_cloud_support_point(dir: &Vector<Real>, points: &[Point<Real>]) -> Point<Real> {
    point_cloud_support_point_id(dir, points)
        .map(|i| points[i])
        .unwrap_or_else(Point::origin)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn first_point_wins_ties() {
        let pts = [
            Point::new(1.0, 0.0, 0.0),
            Point::new(1.0, 1.0, 0.0),
            Point::new(-1.0, 0.0, 0.0),
        ];

        assert_eq!(point_cloud_support_point_id(&Vector::x(), &pts), Some(0));
        assert_eq!(point_cloud_support_point_id(&-Vector::x(), &pts), Some(2));
        assert_eq!(point_cloud_support_point_id(&Vector::x(), &[]), None);
    }
}
