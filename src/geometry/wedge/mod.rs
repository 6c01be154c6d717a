//! Wedges: two rays leaving a common apex, or two parallel rays pointing the
//! same way (a degenerate wedge, i.e. a strip opened to infinity).
//!
//! ```text
//!            left arm
//!   W *----------------------->
//!      \
//!       \
//!        \  right arm
//!         v
//! ```
//!
//! Circles inscribed between the arms are fitted in [`fit`].

mod fit;

use std::fmt;

use tracing::debug;

use crate::math::{approx_eq, Point2, PARALLEL_ANGLE};

use super::{Line2, Side};

pub use fit::{CircleFits, FitTarget, PointFit, SegmentFit};

/// Two arms bounding a region of the plane.
///
/// A non-degenerate wedge has both arms starting at the apex. A degenerate
/// wedge has parallel arms pointing in the same direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    left_arm: Line2,
    right_arm: Line2,
    is_degenerate: bool,
}

impl Wedge {
    /// Builds the canonical wedge spanned by two arms.
    ///
    /// Parallel arms (within [`PARALLEL_ANGLE`] regardless of their lengths)
    /// give a degenerate wedge, the right arm being flipped when the arms
    /// point in opposite directions. Otherwise both arms are cut or extended
    /// to their intersection and directed away from it.
    ///
    /// Returns `None` when the arms overlap within `error`, when an arm is
    /// split exactly in half by the apex, or when parallel arms are too close
    /// to tell their directions apart.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn new(left_arm: Line2, right_arm: Line2, error: f64) -> Option<Self> {
        if error != 0.0 && left_arm.overlaps(&right_arm, error) {
            debug!(%left_arm, %right_arm, "wedge arms overlap");
            return None;
        }

        // Scaled so that the angle is PARALLEL_ANGLE whatever the arm lengths.
        let deviation = PARALLEL_ANGLE / (left_arm.length() * right_arm.length());
        if left_arm.parallel(&right_arm, deviation) {
            // p lies between the arms. Arms pointing the same way have p on
            // the right of one and on the left of the other.
            //
            // --------*------------>
            //          \
            //           * p
            //            \
            //      -------*----------->
            let middle = Line2::new(left_arm.evaluate(0.5), right_arm.evaluate(0.5));
            let p = middle.evaluate(0.5);
            let side_left = left_arm.point_on_side(&p, error);
            let side_right = right_arm.point_on_side(&p, error);
            if side_left == Side::Top || side_right == Side::Top {
                debug!(%left_arm, %right_arm, "parallel arms too close to orient");
                return None;
            }
            let right_arm = if side_left == side_right {
                right_arm.reversed()
            } else {
                right_arm
            };
            return Some(Self {
                left_arm,
                right_arm,
                is_degenerate: true,
            });
        }

        // The angle between the arms is known to be large enough.
        let t_left = left_arm.intersection_parameter(&right_arm, 0.0)?;
        let t_right = right_arm.intersection_parameter(&left_arm, 0.0)?;

        // Impossible to tell which half of the arm is the excess.
        if t_left == 0.5 || t_right == 0.5 {
            debug!(%left_arm, %right_arm, "apex halves an arm");
            return None;
        }

        let apex = left_arm.evaluate(t_left);
        let left_end = if t_left < 1.0 - t_left {
            *left_arm.end()
        } else {
            *left_arm.start()
        };
        let right_end = if t_right < 1.0 - t_right {
            *right_arm.end()
        } else {
            *right_arm.start()
        };

        Some(Self {
            left_arm: Line2::new(apex, left_end),
            right_arm: Line2::new(apex, right_end),
            is_degenerate: false,
        })
    }

    #[must_use]
    pub fn left_arm(&self) -> &Line2 {
        &self.left_arm
    }

    #[must_use]
    pub fn right_arm(&self) -> &Line2 {
        &self.right_arm
    }

    /// Whether the arms are parallel.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.is_degenerate
    }

    /// Whether `p` lies strictly between the arms; points on an arm (within
    /// `error`) are outside.
    #[must_use]
    pub fn strictly_contains(&self, p: &Point2, error: f64) -> bool {
        self.contains(p, error, false)
    }

    /// Like [`Self::strictly_contains`] but points on an arm are inside.
    #[must_use]
    pub fn loosely_contains(&self, p: &Point2, error: f64) -> bool {
        self.contains(p, error, true)
    }

    fn contains(&self, p: &Point2, error: f64, on_arm: bool) -> bool {
        let p_left = self.left_arm.point_on_side(p, error);
        let p_right = self.right_arm.point_on_side(p, error);

        if p_left.is_top() || p_right.is_top() {
            return on_arm;
        }

        // Off both arms: an inner point is on different sides of them ...
        if p_left == p_right {
            return false;
        }

        // ... and, since the arms meet, projects past the apex onto both.
        self.is_degenerate
            || (self.left_arm.closest_point_param(p) >= 0.0
                && self.right_arm.closest_point_param(p) >= 0.0)
    }

    /// Whether the infinite extension of `line` cuts a genuine triangle out of
    /// the wedge (a band segment for a degenerate wedge).
    ///
    /// False when the line is parallel to an arm, or when its intersections
    /// with the arms coincide with each other or with the apex, or the apex
    /// lies on the chord between them.
    #[must_use]
    pub fn form_triangle(&self, line: &Line2, error: f64) -> bool {
        let thin = self.left_arm.parallel(
            line,
            PARALLEL_ANGLE / (self.left_arm.length() * line.length()),
        ) || self.right_arm.parallel(
            line,
            PARALLEL_ANGLE / (self.right_arm.length() * line.length()),
        );
        if thin {
            return false;
        }

        let (Some(a), Some(b)) = (
            line.intersection_point(&self.left_arm, 0.0),
            line.intersection_point(&self.right_arm, 0.0),
        ) else {
            return false;
        };

        if self.is_degenerate {
            return !approx_eq(&a, &b, error);
        }

        let Some(c) = self.left_arm.intersection_point(&self.right_arm, 0.0) else {
            return false;
        };

        !approx_eq(&c, &a, error)
            && !approx_eq(&c, &b, error)
            && !approx_eq(&a, &b, error)
            && !Line2::new(a, b).point_on_top(&c, error)
    }
}

impl fmt::Display for Wedge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LA: {}\nRA: {}", self.left_arm, self.right_arm)
    }
}
