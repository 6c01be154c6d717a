use crate::math::polygon_2d::{convex_contains_2d, perimeter_2d};
use crate::math::Point2;

/// A triangle found by the enclosing search.
///
/// For a base-constrained search `b` and `c` lie on the base line and `a` is
/// the apex opposite it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Point2,
    pub b: Point2,
    pub c: Point2,
}

impl Triangle {
    #[must_use]
    pub fn new(a: Point2, b: Point2, c: Point2) -> Self {
        Self { a, b, c }
    }

    #[must_use]
    pub fn vertices(&self) -> [Point2; 3] {
        [self.a, self.b, self.c]
    }

    /// Sum of the three side lengths.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        perimeter_2d(&self.vertices())
    }

    /// Whether `p` is inside the triangle or within `tolerance` of a side.
    #[must_use]
    pub fn contains(&self, p: &Point2, tolerance: f64) -> bool {
        convex_contains_2d(&self.vertices(), p, tolerance)
    }

    /// Vertices as plain `(x, y)` pairs, in `a, b, c` order.
    #[must_use]
    pub fn to_xy(&self) -> [(f64, f64); 3] {
        self.vertices().map(|p| (p.x, p.y))
    }
}
