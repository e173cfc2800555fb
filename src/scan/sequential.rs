//! Sequential Graham scan
//!
//! Builds the convex hull of an unordered slice of points in O(n log n).
//!
//! # Algorithm
//!
//! 1. Pick the lexicographically smallest point as pivot. It is always a hull
//!    vertex and every other point sits at an angle in `[-π/2, π/2]` from it.
//! 2. Translate so the pivot is at the origin.
//! 3. Sort the rest by polar angle, closer points first on equal angles.
//! 4. Sweep with a monotonic stack, popping the top while the next candidate
//!    does not make a left turn, then retrying that candidate.
//! 5. Return the stack bottom first, in input coordinates.

use crate::geometry::{
    lexicographic_min, polar_angle, polar_radius, sort_by_polar_key, turn, Point, Turn,
};
use crate::hull::Hull;

/// Build the convex hull of `points`
///
/// The hull runs counter-clockwise from the lexicographically smallest point.
/// Inputs with fewer than three points are returned unchanged. Collinear
/// inputs never fail: a fully collinear set collapses to its two extreme
/// points.
///
/// # Example
///
/// ```rust
/// use graham_hull::{build_hull, Point};
///
/// let points = [
///     Point::new(0.0, 0.0),
///     Point::new(4.0, 0.0),
///     Point::new(4.0, 4.0),
///     Point::new(0.0, 4.0),
///     Point::new(2.0, 2.0),
/// ];
///
/// let hull = build_hull(&points);
/// assert_eq!(hull.len(), 4);
/// assert!(!hull.vertices().contains(&Point::new(2.0, 2.0)));
/// ```
pub fn build_hull(points: &[Point]) -> Hull {
    if points.len() < 3 {
        tracing::trace!(points = points.len(), "degenerate input passed through");
        return Hull::from_vertices(points.to_vec());
    }

    let Some(pivot_idx) = lexicographic_min(points) else {
        return Hull::default();
    };
    let pivot = points[pivot_idx];
    tracing::trace!(points = points.len(), pivot_idx, "scanning");

    // Pivot-relative positions alongside the originals, sort keys computed once
    let mut candidates: Vec<(Point, Point, (f64, f64))> = points
        .iter()
        // copies of the pivot add nothing and have no defined polar angle
        .filter(|&&p| p != pivot)
        .map(|&p| {
            let local = p - pivot;
            (local, p, (polar_angle(local), polar_radius(local)))
        })
        .collect();
    if candidates.is_empty() {
        return Hull::from_vertices(vec![pivot]);
    }
    sort_by_polar_key(&mut candidates, |c| c.2);

    let sorted: Vec<Anchored> = candidates
        .into_iter()
        .map(|(local, original, _)| Anchored { local, original })
        .collect();
    let stack = sweep(Anchored { local: Point::ZERO, original: pivot }, &sorted);

    // Undo the translation by handing back the untouched input coordinates
    Hull::from_vertices(stack.into_iter().map(|a| a.original).collect())
}

/// A point in pivot-relative coordinates paired with its input coordinates
#[derive(Debug, Clone, Copy)]
struct Anchored {
    local: Point,
    original: Point,
}

/// Monotonic stack sweep over pivot-relative points in polar order
///
/// `sorted` must hold at least one point.
fn sweep(pivot: Anchored, sorted: &[Anchored]) -> Vec<Anchored> {
    let mut stack: Vec<Anchored> = Vec::with_capacity(sorted.len() + 1);
    stack.push(pivot);
    stack.push(sorted[0]);

    let mut cursor = 1;
    while cursor < sorted.len() {
        let candidate = sorted[cursor];
        let top = stack[stack.len() - 1].local;
        let below = stack[stack.len() - 2].local;

        match turn(below, top, candidate.local) {
            Turn::Left => {
                stack.push(candidate);
                cursor += 1;
            }
            Turn::Collinear | Turn::Right if stack.len() < 3 => {
                // Only the pivot and one point: the candidate is further along
                // the same ray, so it supersedes the nearer point.
                stack.pop();
                stack.push(candidate);
                cursor += 1;
            }
            Turn::Collinear | Turn::Right => {
                stack.pop();
            }
        }
    }

    stack
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::orientation;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_square_with_interior_point() {
        let points = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (2.0, 2.0)]);
        let hull = build_hull(&points);
        assert_eq!(
            hull.vertices(),
            pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]).as_slice()
        );
    }

    #[test]
    fn test_triangle_counter_clockwise() {
        let points = pts(&[(3.0, 1.0), (0.0, 0.0), (1.0, 3.0)]);
        let hull = build_hull(&points);
        assert_eq!(hull.vertices(), pts(&[(0.0, 0.0), (3.0, 1.0), (1.0, 3.0)]).as_slice());
        let v = hull.vertices();
        assert!(orientation(v[0], v[1], v[2]) > 0.0);
    }

    #[test]
    fn test_fewer_than_three_points_pass_through() {
        assert!(build_hull(&[]).is_empty());

        let one = pts(&[(5.0, 5.0)]);
        assert_eq!(build_hull(&one).vertices(), one.as_slice());

        // order is preserved, not normalised
        let two = pts(&[(5.0, 5.0), (1.0, 1.0)]);
        assert_eq!(build_hull(&two).vertices(), two.as_slice());
    }

    #[test]
    fn test_collinear_returns_extremes() {
        let points = pts(&[(2.0, 2.0), (0.0, 0.0), (3.0, 3.0), (1.0, 1.0)]);
        let hull = build_hull(&points);
        assert_eq!(hull.vertices(), pts(&[(0.0, 0.0), (3.0, 3.0)]).as_slice());
    }

    #[test]
    fn test_vertical_collinear_returns_extremes() {
        let points = pts(&[(0.0, 2.0), (0.0, 5.0), (0.0, -1.0), (0.0, 0.0)]);
        let hull = build_hull(&points);
        assert_eq!(hull.vertices(), pts(&[(0.0, -1.0), (0.0, 5.0)]).as_slice());
    }

    #[test]
    fn test_collinear_boundary_points_pruned() {
        // midpoints on every edge, including the first ray out of the pivot
        let points = pts(&[
            (0.0, 0.0),
            (2.0, 0.0),
            (4.0, 0.0),
            (4.0, 2.0),
            (4.0, 4.0),
            (2.0, 4.0),
            (0.0, 4.0),
            (0.0, 2.0),
        ]);
        let hull = build_hull(&points);
        assert_eq!(
            hull.vertices(),
            pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]).as_slice()
        );
    }

    #[test]
    fn test_duplicate_pivot() {
        let points = pts(&[(1.0, 1.0), (0.0, 0.0), (3.0, 0.0), (0.0, 0.0), (0.0, 3.0)]);
        let hull = build_hull(&points);
        assert_eq!(
            hull.vertices(),
            pts(&[(0.0, 0.0), (3.0, 0.0), (0.0, 3.0)]).as_slice()
        );
    }

    #[test]
    fn test_duplicate_pivot_with_points_below() {
        // a second copy of the pivot must not evict (3, -1) from the first ray
        let points = pts(&[(0.0, 0.0), (3.0, -1.0), (0.0, 0.0), (3.0, 3.0), (0.0, 3.0)]);
        let hull = build_hull(&points);
        assert_eq!(
            hull.vertices(),
            pts(&[(0.0, 0.0), (3.0, -1.0), (3.0, 3.0), (0.0, 3.0)]).as_slice()
        );
    }

    #[test]
    fn test_duplicate_hull_vertex_kept_once() {
        let points = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (4.0, 4.0), (0.0, 4.0)]);
        let hull = build_hull(&points);
        assert_eq!(hull.len(), 4);
    }

    #[test]
    fn test_negative_coordinates() {
        let points = pts(&[(-3.0, -3.0), (3.0, -3.0), (0.0, 0.5), (3.0, 3.0), (-3.0, 3.0), (-1.0, 1.0)]);
        let hull = build_hull(&points);
        assert_eq!(
            hull.vertices(),
            pts(&[(-3.0, -3.0), (3.0, -3.0), (3.0, 3.0), (-3.0, 3.0)]).as_slice()
        );
    }

    #[test]
    fn test_idempotent_on_hull_vertices() {
        let points = pts(&[
            (1.0, 7.0),
            (5.0, 2.0),
            (9.0, 8.0),
            (3.0, 3.0),
            (6.0, 6.0),
            (2.0, 9.0),
            (8.0, 1.0),
            (4.0, 5.0),
        ]);
        let hull = build_hull(&points);
        let again = build_hull(hull.vertices());
        assert_eq!(hull, again);
    }

    #[test]
    fn test_all_points_identical() {
        let points = pts(&[(2.0, 2.0), (2.0, 2.0), (2.0, 2.0)]);
        let hull = build_hull(&points);
        assert_eq!(hull.vertices(), pts(&[(2.0, 2.0)]).as_slice());
    }

    #[test]
    fn test_many_points_a_few_ulps_around_one_ray() {
        // angles straddle 0.7 by multiples of 1.4e-16, so neighbours fall
        // inside the angle tolerance while the run as a whole does not
        let ray: Vec<Point> = (0..200)
            .map(|i| {
                let k = (i * 37 % 200) as f64 - 100.0;
                let theta = 0.7 + k * 1.4e-16;
                let r = 5.0 * (i + 1) as f64;
                Point::new(r * theta.cos(), r * theta.sin())
            })
            .collect();
        let far = ray[199];

        let mut points = vec![Point::new(0.0, 0.0)];
        points.extend(ray.iter().copied());
        points.push(Point::new(1.0, -5.0));
        points.push(Point::new(0.0, 5.0));

        let hull = build_hull(&points);
        assert_eq!(
            hull.vertices(),
            &[Point::new(0.0, 0.0), Point::new(1.0, -5.0), far, Point::new(0.0, 5.0)]
        );
        for p in &points {
            assert!(hull.contains(*p), "{:?} lies outside the hull", p);
        }
    }
}
