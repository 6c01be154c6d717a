use crate::geometry::{Line2, Side};
use crate::math::Point2;

/// Outcome of [`line_tangent_to_hull`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TangentTest {
    /// Every point off the line is on one side of it.
    pub holds: bool,
    /// Side of the first point off the line; `Top` when there is none.
    pub side: Side,
}

/// Checks whether `line` supports the hull `points`.
///
/// Points within `tolerance` of the line are ignored. The reference side is
/// taken from the first point off the line, which need not be `points[0]`.
#[must_use]
pub fn line_tangent_to_hull(line: &Line2, points: &[Point2], tolerance: f64) -> TangentTest {
    let Some((first, side)) = line.reference_side(points, tolerance) else {
        return TangentTest {
            holds: true,
            side: Side::Top,
        };
    };

    let holds = points[first + 1..].iter().all(|p| {
        let test = line.point_on_side(p, tolerance);
        test.is_top() || test == side
    });

    TangentTest { holds, side }
}
