use super::{cross_2d, Point2, TOLERANCE};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Computes the perimeter of a closed polygon.
#[must_use]
pub fn perimeter_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }
    (0..n).map(|i| (points[(i + 1) % n] - points[i]).norm()).sum()
}

/// Checks whether `p` lies inside a convex polygon or within `tolerance` of
/// its boundary. Works for either winding.
#[must_use]
pub fn convex_contains_2d(polygon: &[Point2], p: &Point2, tolerance: f64) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let winding = signed_area_2d(polygon).signum();
    (0..n).all(|i| {
        let a = polygon[i];
        let edge = polygon[(i + 1) % n] - a;
        let len = edge.norm();
        if len < TOLERANCE {
            return true;
        }
        // Signed distance, positive towards the interior.
        winding * cross_2d(&edge, &(p - a)) / len >= -tolerance
    })
}
