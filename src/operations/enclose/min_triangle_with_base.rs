use tracing::debug;

use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::{Line2, Wedge};
use crate::math::{Point2, TOLERANCE};

use super::config::EncloseConfig;
use super::enclosing_side::find_enclosing_side;
use super::triangle::Triangle;

/// Index of the hull point farthest from the base line `(points[0], points[last])`.
///
/// Ties keep the lowest index. Returns 0 for an empty slice.
#[must_use]
pub fn farthest_from_base(points: &[Point2]) -> usize {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return 0;
    };
    let base = Line2::new(*first, *last);

    let mut farthest = 0;
    let mut max_distance = 0.0;
    for (i, p) in points.iter().enumerate() {
        let d = base.distance_to_point(p);
        if d > max_distance {
            max_distance = d;
            farthest = i;
        }
    }
    farthest
}

/// The sides AB and AC at convergence, both starting on the base line.
#[derive(Debug, Clone, Copy)]
struct FreeSides {
    ab: Line2,
    ac: Line2,
}

/// Smallest-perimeter triangle enclosing a convex hull, one side of which
/// lies on the base edge `(hull[0], hull[last])`.
///
/// The hull must be convex and listed in order (either winding). The search
/// starts from the wedge between the base line and its parallel through the
/// farthest hull point, then repeatedly replaces the right arm with the
/// shortest enclosing side found walking the hull: first from the base's
/// last vertex towards the apex, then from the apex towards the base's
/// first vertex. It stops once the two free sides differ in length by at
/// most `tol`.
///
/// In the returned [`Triangle`], `a` is the meeting point of the two sides
/// found last, and `b`/`c` are where they start on the base line.
#[derive(Debug)]
pub struct MinTriangleWithBase {
    hull: Vec<Point2>,
    config: EncloseConfig,
}

impl MinTriangleWithBase {
    #[must_use]
    pub fn new(hull: Vec<Point2>, config: EncloseConfig) -> Self {
        Self { hull, config }
    }

    /// Runs the search.
    ///
    /// `Ok(None)` means the wedge could not be built or closed for this base;
    /// another base edge may still succeed.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` for fewer than 3 hull points or an
    ///   invalid config
    /// - `GeometryError::ZeroVector` if the base edge has no length
    /// - `GeometryError::InconsistentFit` if a circle fit fails inside the
    ///   tolerances
    /// - `OperationError::NotConverged` if the free sides are still unequal
    ///   after `max_iterations` rounds
    pub fn execute(&self) -> Result<Option<Triangle>> {
        let Some(sides) = self.converge()? else {
            return Ok(None);
        };
        Ok(sides
            .ac
            .intersection_point(&sides.ab, 0.0)
            .map(|a| Triangle::new(a, *sides.ab.start(), *sides.ac.start())))
    }

    /// Shrinks the wedge until the two free sides have equal length.
    fn converge(&self) -> Result<Option<FreeSides>> {
        self.config.validate()?;

        let points = &self.hull;
        let n = points.len();
        if n < 3 {
            return Err(OperationError::InvalidInput(format!(
                "at least 3 hull points are required, got {n}"
            ))
            .into());
        }

        let base = Line2::new(points[0], points[n - 1]);
        if base.length() < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }

        let err = self.config.err;
        let apex = farthest_from_base(points);
        let parallel = Line2::new(points[apex], points[apex] + base.delta());

        let Some(mut wedge) = Wedge::new(base, parallel, err) else {
            debug!(apex, "no initial wedge for base");
            return Ok(None);
        };

        let mut c_vertex = n - 1;
        let mut b_vertex = apex;
        let mut gap = f64::INFINITY;

        for iteration in 1..=self.config.max_iterations {
            let Some(ac) = find_enclosing_side(&wedge, c_vertex, apex, points, err)? else {
                return Ok(None);
            };
            c_vertex = ac.stop_vertex;
            let Some(next) = Wedge::new(*wedge.left_arm(), ac.side, err) else {
                return Ok(None);
            };
            wedge = next;

            let Some(ab) = find_enclosing_side(&wedge, b_vertex, 0, points, err)? else {
                return Ok(None);
            };
            b_vertex = ab.stop_vertex;
            let Some(next) = Wedge::new(*wedge.left_arm(), ab.side, err) else {
                return Ok(None);
            };
            wedge = next;

            gap = ab.side.length() - ac.side.length();
            debug!(iteration, gap, c_vertex, b_vertex, "shrinking wedge");

            if gap.abs() <= self.config.tol {
                return Ok(Some(FreeSides {
                    ab: ab.side,
                    ac: ac.side,
                }));
            }
        }

        Err(OperationError::NotConverged {
            iterations: self.config.max_iterations,
            gap,
        }
        .into())
    }
}
