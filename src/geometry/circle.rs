use crate::math::Point2;

use super::Line2;

/// A circle in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    centre: Point2,
    radius: f64,
}

impl Circle {
    #[must_use]
    pub fn new(centre: Point2, radius: f64) -> Self {
        Self { centre, radius }
    }

    #[must_use]
    pub fn centre(&self) -> &Point2 {
        &self.centre
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Whether the infinite extension of `line` touches the circle, i.e. the
    /// centre is `radius` away from it within `error` (absolute or relative
    /// to the radius).
    #[must_use]
    pub fn touches(&self, line: &Line2, error: f64) -> bool {
        let distance = line.distance_to_point(&self.centre);
        (distance - self.radius).abs() < error || (distance / self.radius - 1.0).abs() < error
    }
}
