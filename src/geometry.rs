//! Planar geometry kernel
//!
//! Pure functions over [`Point`]s used by the Graham sweep: polar coordinates
//! relative to the origin, the orientation (signed area) test, and the
//! lexicographic ordering used to pick the sweep pivot.

use glam::DVec2;
use std::cmp::Ordering;

/// A point in the plane
pub type Point = DVec2;

/// Absolute tolerance under which two polar angles are considered equal
///
/// Points whose angles fall within this tolerance are ordered by distance
/// from the pivot instead.
pub const ANGLE_TOLERANCE: f64 = 1e-15;

/// Classification of the turn made by three points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Counter-clockwise turn
    Left,
    /// The three points lie on one line
    Collinear,
    /// Clockwise turn
    Right,
}

/// Euclidean distance of `p` from the origin
#[inline]
pub fn polar_radius(p: Point) -> f64 {
    (p.x * p.x + p.y * p.y).sqrt()
}

/// Angle of `p` measured from the positive x-axis, in `(-π, π]`
///
/// Uses the four-quadrant arctangent so points with `x <= 0` land in the
/// correct half-plane.
#[inline]
pub fn polar_angle(p: Point) -> f64 {
    p.y.atan2(p.x)
}

/// Signed doubled area of the triangle `(a, b, c)`
///
/// Positive when `a -> b -> c` turns left at `b`, zero when collinear,
/// negative when it turns right.
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)
}

/// Classify the turn `a -> b -> c` by the sign of [`orientation`]
pub fn turn(a: Point, b: Point, c: Point) -> Turn {
    let det = orientation(a, b, c);
    if det > 0.0 {
        Turn::Left
    } else if det < 0.0 {
        Turn::Right
    } else {
        Turn::Collinear
    }
}

/// Lexicographic ordering: smaller x first, ties broken by smaller y
///
/// Uses `total_cmp` so NaN coordinates still yield a consistent order.
#[inline]
pub fn lex_cmp(a: &Point, b: &Point) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

/// Index of the lexicographically smallest point
///
/// The first occurrence wins when several points share the minimum.
/// Returns `None` for an empty slice.
pub fn lexicographic_min(points: &[Point]) -> Option<usize> {
    let mut iter = points.iter().enumerate();
    let (mut min_idx, mut min) = iter.next()?;
    for (i, p) in iter {
        if lex_cmp(p, min) == Ordering::Less {
            min_idx = i;
            min = p;
        }
    }
    Some(min_idx)
}

/// Sort items by polar `(angle, radius)` key, closer points first on equal angles
///
/// Items are first put in a strict total order (angle, then radius). Runs of
/// neighbours whose angles differ by at most [`ANGLE_TOLERANCE`] are then
/// reordered by radius alone. A run can therefore span more than the
/// tolerance when its members chain together.
pub fn sort_by_polar_key<T>(items: &mut [T], key: impl Fn(&T) -> (f64, f64)) {
    items.sort_by(|a, b| {
        let (ka, kb) = (key(a), key(b));
        ka.0.total_cmp(&kb.0).then_with(|| ka.1.total_cmp(&kb.1))
    });

    let mut start = 0;
    while start < items.len() {
        let mut end = start + 1;
        while end < items.len()
            && (key(&items[end]).0 - key(&items[end - 1]).0).abs() <= ANGLE_TOLERANCE
        {
            end += 1;
        }
        if end - start > 1 {
            items[start..end].sort_by(|a, b| key(a).1.total_cmp(&key(b).1));
        }
        start = end;
    }
}
