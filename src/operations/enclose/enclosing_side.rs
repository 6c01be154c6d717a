use tracing::trace;

use crate::error::Result;
use crate::geometry::{CircleFits, FitTarget, Line2, Side, Wedge};
use crate::math::Point2;

use super::tangent::line_tangent_to_hull;

/// A side of the enclosing triangle found by [`find_enclosing_side`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct EnclosingSide {
    /// Starts on the wedge's left arm, ends on the hull.
    pub side: Line2,
    /// Hull vertex at which the walk stopped.
    pub stop_vertex: usize,
}

/// Finds the shortest third side that closes `wedge` around the hull.
///
/// Walks the hull edges `(points[v], points[v - 1])` backwards from
/// `start_vertex` while `v > end_vertex`. An edge generates the side when the
/// circle inscribed in the wedge touches the edge itself and not its
/// extension; otherwise the circle through `points[v - 1]` is tried, and its
/// tangent generates the side when it supports the whole hull.
///
/// Returns `Ok(None)` when the walk runs out of vertices.
///
/// # Errors
///
/// Propagates `GeometryError::InconsistentFit` from the circle fitting.
pub(crate) fn find_enclosing_side(
    wedge: &Wedge,
    start_vertex: usize,
    end_vertex: usize,
    points: &[Point2],
    halo: f64,
) -> Result<Option<EnclosingSide>> {
    let mut vertex = start_vertex;

    while vertex > end_vertex {
        let p1 = points[vertex];
        let p2 = points[vertex - 1];
        let edge = Line2::new(p1, p2);

        if let Some(side) = side_touching_edge(wedge, &edge, points, halo)? {
            trace!(vertex, "side touches edge");
            return Ok(Some(EnclosingSide {
                side,
                stop_vertex: vertex,
            }));
        }

        if let Some(side) = side_through_vertex(wedge, p2, points, halo)? {
            trace!(vertex, "side passes through vertex");
            return Ok(Some(EnclosingSide {
                side,
                stop_vertex: vertex,
            }));
        }

        vertex -= 1;
    }

    Ok(None)
}

/// Side of the hull the circle centres must not be on.
fn hull_side(line: &Line2, points: &[Point2], halo: f64) -> Side {
    line.reference_side(points, halo)
        .map_or(Side::Top, |(_, side)| side)
}

fn side_touching_edge(
    wedge: &Wedge,
    edge: &Line2,
    points: &[Point2],
    halo: f64,
) -> Result<Option<Line2>> {
    let Some(CircleFits::Segment(fits)) = wedge.fit_circles(&FitTarget::Segment(*edge), halo)?
    else {
        return Ok(None);
    };
    let Some(first) = fits.first() else {
        return Ok(None);
    };

    // A degenerate wedge gives two circles; keep the one away from the hull.
    let fit = if wedge.is_degenerate()
        && edge.point_on_side(first.circle.centre(), 0.0) == hull_side(edge, points, halo)
    {
        fits.get(1).unwrap_or(first)
    } else {
        first
    };

    let t = fit.tangent_parameter;
    if t <= 0.0 || t >= 1.0 {
        return Ok(None);
    }

    let touch = edge.evaluate(t);
    Ok(wedge
        .left_arm()
        .intersection_point(edge, halo)
        .map(|joint| Line2::new(joint, touch)))
}

fn side_through_vertex(
    wedge: &Wedge,
    p: Point2,
    points: &[Point2],
    halo: f64,
) -> Result<Option<Line2>> {
    let Some(CircleFits::Point(fits)) = wedge.fit_circles(&FitTarget::Point(p), halo)? else {
        return Ok(None);
    };
    let Some(first) = fits.first() else {
        return Ok(None);
    };

    let fit = if wedge.is_degenerate()
        && first.tangent.point_on_side(first.circle.centre(), halo)
            == hull_side(&first.tangent, points, halo)
    {
        fits.get(1).unwrap_or(first)
    } else {
        first
    };

    // The tangent separates the circle from the hull points near p; it
    // generates the side only if it supports the whole hull.
    if !line_tangent_to_hull(&fit.tangent, points, halo).holds {
        return Ok(None);
    }

    Ok(wedge
        .left_arm()
        .intersection_point(&fit.tangent, halo)
        .map(|joint| Line2::new(joint, p)))
}
