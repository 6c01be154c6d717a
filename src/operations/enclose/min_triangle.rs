use tracing::{info, warn};

use crate::error::{GeometryError, MintriError, Result};
use crate::math::Point2;

use super::config::EncloseConfig;
use super::min_triangle_with_base::MinTriangleWithBase;
use super::triangle::Triangle;

/// Smallest-perimeter triangle enclosing a convex hull.
///
/// Tries every hull edge as the base of a [`MinTriangleWithBase`] search by
/// rotating the vertex list one step at a time, and keeps the triangle with
/// the smallest perimeter. Ties keep the earliest rotation.
#[derive(Debug)]
pub struct MinTriangle {
    hull: Vec<Point2>,
    config: EncloseConfig,
}

impl MinTriangle {
    #[must_use]
    pub fn new(hull: Vec<Point2>, config: EncloseConfig) -> Self {
        Self { hull, config }
    }

    /// Builds the operation from plain `(x, y)` pairs.
    #[must_use]
    pub fn from_xy(points: &[(f64, f64)], config: EncloseConfig) -> Self {
        Self::new(
            points.iter().map(|&(x, y)| Point2::new(x, y)).collect(),
            config,
        )
    }

    /// Runs the search over every base edge.
    ///
    /// Fewer than 3 points give `Ok(None)`; exactly 3 are returned as the
    /// triangle itself. A base whose search finds no triangle or fails is
    /// skipped, so a zero-length base from a repeated vertex only costs its
    /// own rotation. A flat hull gives `Ok(None)`.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` for an invalid config
    /// - `GeometryError::InconsistentFit` from any base search
    /// - `OperationError::NotConverged` if no base gave a triangle and at
    ///   least one of them hit the iteration cap
    pub fn execute(&self) -> Result<Option<Triangle>> {
        self.config.validate()?;

        match self.hull.as_slice() {
            [] | [_] | [_, _] => return Ok(None),
            &[a, b, c] => return Ok(Some(Triangle::new(a, b, c))),
            _ => {}
        }

        let mut rotated = self.hull.clone();
        let mut best: Option<(f64, Triangle)> = None;
        let mut not_converged: Option<MintriError> = None;

        for rotation in 0..rotated.len() {
            if rotation > 0 {
                rotated.rotate_left(1);
            }

            match MinTriangleWithBase::new(rotated.clone(), self.config).execute() {
                Ok(Some(triangle)) => {
                    let perimeter = triangle.perimeter();
                    if best.as_ref().is_none_or(|(p, _)| perimeter < *p) {
                        best = Some((perimeter, triangle));
                    }
                }
                Ok(None) => {
                    warn!(rotation, "no enclosing triangle for base, skipping");
                }
                Err(e @ MintriError::Geometry(GeometryError::InconsistentFit { .. })) => {
                    return Err(e);
                }
                Err(e) if e.is_not_converged() => {
                    warn!(rotation, error = %e, "base search did not converge, skipping");
                    not_converged = Some(e);
                }
                Err(e) => {
                    warn!(rotation, error = %e, "base search failed, skipping");
                }
            }
        }

        match (best, not_converged) {
            (Some((perimeter, triangle)), _) => {
                info!(perimeter, "minimum enclosing triangle found");
                Ok(Some(triangle))
            }
            (None, Some(e)) => Err(e),
            (None, None) => Ok(None),
        }
    }
}
