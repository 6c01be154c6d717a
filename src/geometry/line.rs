use std::fmt;

use crate::math::{cross_2d, Point2, Vector2};

use super::Side;

/// A directed segment from `start` to `end`.
///
/// The parametric form is `P(t) = start + t * (end - start)`, so `t = 0` is
/// the start and `t = 1` the end. The segment also stands for its infinite
/// extension in intersection and side queries.
///
/// A zero-length segment is representable but divides by zero in distance,
/// projection and side queries; callers guard against it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2 {
    start: Point2,
    end: Point2,
    delta: Vector2,
}

impl Line2 {
    /// Creates a new segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self {
            start,
            end,
            delta: end - start,
        }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Returns `end - start`.
    #[must_use]
    pub fn delta(&self) -> &Vector2 {
        &self.delta
    }

    /// Length between the two defining points.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.delta.norm()
    }

    /// Returns the same segment walked from `end` to `start`.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Evaluates `start + t * delta`.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> Point2 {
        self.start + self.delta * t
    }

    /// Parameter of the orthogonal projection of `p` onto the line.
    #[must_use]
    pub fn closest_point_param(&self, p: &Point2) -> f64 {
        self.delta.dot(&(p - self.start)) / self.delta.norm_squared()
    }

    /// Orthogonal projection of `p` onto the (infinite) line.
    #[must_use]
    pub fn closest_point(&self, p: &Point2) -> Point2 {
        self.evaluate(self.closest_point_param(p))
    }

    /// Perpendicular distance from `p` to the infinite line.
    #[must_use]
    pub fn distance_to_point(&self, p: &Point2) -> f64 {
        cross_2d(&self.delta, &(p - self.start)).abs() / self.length()
    }

    /// Parameter along `self` where it crosses `other`.
    ///
    /// Returns `None` when `|delta × other.delta|` is zero or below `error`,
    /// i.e. the lines are parallel.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn intersection_parameter(&self, other: &Line2, error: f64) -> Option<f64> {
        let d = cross_2d(&self.delta, &other.delta);
        if d == 0.0 || d.abs() < error {
            return None;
        }
        let d_start = self.start - other.start;
        Some(cross_2d(&other.delta, &d_start) / d)
    }

    /// Point where `self` crosses `other`, see [`Self::intersection_parameter`].
    #[must_use]
    pub fn intersection_point(&self, other: &Line2, error: f64) -> Option<Point2> {
        self.intersection_parameter(other, error)
            .map(|t| self.evaluate(t))
    }

    /// Classifies `p` against the directed line.
    ///
    /// Points closer than `error` to the line are `Top`; otherwise `Left` is
    /// counter-clockwise of `delta`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn point_on_side(&self, p: &Point2, error: f64) -> Side {
        let n = cross_2d(&self.delta, &(p - self.start));
        if n == 0.0 || n.abs() / self.length() < error {
            return Side::Top;
        }
        if n > 0.0 {
            Side::Left
        } else {
            Side::Right
        }
    }

    #[must_use]
    pub fn point_on_top(&self, p: &Point2, error: f64) -> bool {
        self.point_on_side(p, error).is_top()
    }

    /// Both endpoints of `other` lie on `self` within `error`.
    #[must_use]
    pub fn overlaps(&self, other: &Line2, error: f64) -> bool {
        self.point_on_top(&other.start, error) && self.point_on_top(&other.end, error)
    }

    /// Whether the angle between the two lines is below `deviation` radians.
    ///
    /// ```text
    ///  _______________________________
    ///                        alpha (/
    ///                              /
    ///                             /
    /// ```
    ///
    /// Compares `|delta × other.delta|` against `|delta|² · sin(deviation)`,
    /// which avoids an inverse trigonometric call.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn parallel(&self, other: &Line2, deviation: f64) -> bool {
        let d = cross_2d(&self.delta, &other.delta).abs();
        d == 0.0 || d < self.delta.norm_squared() * deviation.sin()
    }

    /// Index and side of the first point not on the line within `tolerance`.
    ///
    /// Returns `None` when every point is `Top`.
    #[must_use]
    pub fn reference_side(&self, points: &[Point2], tolerance: f64) -> Option<(usize, Side)> {
        points
            .iter()
            .map(|p| self.point_on_side(p, tolerance))
            .enumerate()
            .find(|(_, side)| !side.is_top())
    }
}

impl fmt::Display for Line2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) --> ({}, {})",
            self.start.x, self.start.y, self.end.x, self.end.y
        )
    }
}
