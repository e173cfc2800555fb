//! Convex hull result type

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::{lex_cmp, orientation, Point};
use crate::scan::build_hull;

/// Relative slack allowed by [`Hull::contains`] for rounding in the orientation test
const CONTAINS_EPSILON: f64 = 16.0 * f64::EPSILON;

/// A convex hull as an ordered boundary
///
/// Vertices run counter-clockwise starting at the pivot (the lexicographically
/// smallest input point). Inputs with fewer than three points are carried
/// through unchanged, so a hull may hold 0, 1 or 2 vertices.
///
/// With the `serde` feature a hull serializes as its vertex list. Deserializing
/// rescans that list, so any point sequence comes back as a valid hull.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "Vec<Point>", from = "Vec<Point>"))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hull {
    vertices: Vec<Point>,
}

impl Hull {
    pub(crate) fn from_vertices(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Boundary vertices in counter-clockwise order
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Number of boundary vertices
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the hull has no vertices (only for empty input)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate over the boundary vertices
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.vertices.iter()
    }

    /// Consume the hull and return its vertices
    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    /// Whether `p` lies inside the hull or on its boundary
    ///
    /// Every edge must make a non-right turn towards `p`, up to a small
    /// relative tolerance. Hulls with one or two vertices contain only the
    /// points of that point or segment.
    pub fn contains(&self, p: Point) -> bool {
        match self.vertices.as_slice() {
            [] => false,
            [v] => *v == p,
            [a, b] => on_segment(*a, *b, p),
            vertices => {
                let n = vertices.len();
                (0..n).all(|i| {
                    let a = vertices[i];
                    let b = vertices[(i + 1) % n];
                    let det = orientation(a, b, p);
                    det >= -CONTAINS_EPSILON * (b - a).length() * (p - a).length()
                })
            }
        }
    }

    /// Enclosed area (shoelace formula)
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        let twice: f64 = (0..n)
            .map(|i| {
                let a = self.vertices[i];
                let b = self.vertices[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();
        (twice * 0.5).abs()
    }

    /// Compare vertex sets, ignoring order and starting vertex
    pub fn same_vertex_set(&self, other: &Hull) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mut a = self.vertices.clone();
        let mut b = other.vertices.clone();
        a.sort_by(lex_cmp);
        b.sort_by(lex_cmp);
        a == b
    }
}

impl From<Vec<Point>> for Hull {
    /// Build the hull of an arbitrary point list
    fn from(points: Vec<Point>) -> Self {
        build_hull(&points)
    }
}

impl From<Hull> for Vec<Point> {
    fn from(hull: Hull) -> Self {
        hull.vertices
    }
}

impl<'a> IntoIterator for &'a Hull {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

fn on_segment(a: Point, b: Point, p: Point) -> bool {
    let det = orientation(a, b, p);
    if det.abs() > CONTAINS_EPSILON * (b - a).length() * (p - a).length() {
        return false;
    }
    let (min, max) = (a.min(b), a.max(b));
    p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
}
