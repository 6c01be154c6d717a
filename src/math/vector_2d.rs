use super::{Point2, Vector2};

/// Scalar cross product `a.x * b.y - a.y * b.x`.
///
/// Positive when `b` is counter-clockwise from `a`.
#[must_use]
#[inline]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Returns the right-pointing normal `(y, -x)` of a vector.
#[must_use]
#[inline]
pub fn right_normal(v: &Vector2) -> Vector2 {
    Vector2::new(v.y, -v.x)
}

/// Compares two points.
///
/// With `error == 0` the comparison is exact; otherwise the points are equal
/// when they are closer than `error`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn approx_eq(a: &Point2, b: &Point2, error: f64) -> bool {
    if error == 0.0 {
        return a == b;
    }
    (a - b).norm_squared() < error * error
}
