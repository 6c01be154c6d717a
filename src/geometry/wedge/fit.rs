//! Circles inscribed in a wedge and touching one more element.
//!
//! There are four cases, one function each:
//! - degenerate wedge and a point: [`Wedge::fit_degenerate_point`]
//! - degenerate wedge and a segment: [`Wedge::fit_degenerate_segment`]
//! - non-degenerate wedge and a point: [`Wedge::fit_point`]
//! - non-degenerate wedge and a segment: [`Wedge::fit_segment`]

use tracing::{error, trace};

use crate::error::{GeometryError, Result};
use crate::math::{cross_2d, right_normal, Point2, Vector2, FIT_TOLERANCE};

use super::super::{Circle, Line2};
use super::Wedge;

/// The element a circle inscribed in a wedge must also touch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FitTarget {
    /// The circle passes through the point.
    Point(Point2),
    /// The circle touches the segment's infinite extension.
    Segment(Line2),
}

/// A circle through a point, with the line tangent to it at that point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointFit {
    pub circle: Circle,
    /// Starts at the fitted point, perpendicular to the centre-to-point vector.
    pub tangent: Line2,
}

/// A circle touching a segment, with the segment parameter of the tangency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentFit {
    pub circle: Circle,
    /// Evaluates to the touching point on the target segment.
    pub tangent_parameter: f64,
}

/// Circles fitted by [`Wedge::fit_circles`], tagged by the target kind.
#[derive(Debug, Clone, PartialEq)]
pub enum CircleFits {
    Point(Vec<PointFit>),
    Segment(Vec<SegmentFit>),
}

impl CircleFits {
    /// The fitted circles, in fit order.
    #[must_use]
    pub fn circles(&self) -> Vec<Circle> {
        match self {
            Self::Point(fits) => fits.iter().map(|f| f.circle).collect(),
            Self::Segment(fits) => fits.iter().map(|f| f.circle).collect(),
        }
    }
}

/// Real roots of `a t² + b t + c`, tolerating a slightly negative
/// discriminant as a double root. `None` when clearly negative.
fn quadratic_roots(a: f64, b: f64, c: f64) -> Option<Vec<f64>> {
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < -FIT_TOLERANCE {
        return None;
    }
    if discriminant.abs() < FIT_TOLERANCE {
        return Some(vec![-b / (2.0 * a)]);
    }
    let root = discriminant.sqrt();
    Some(vec![(-b + root) / (2.0 * a), (-b - root) / (2.0 * a)])
}

/// One line per rejected excircle centre with its distance errors to `bc`.
fn candidate_report(candidates: &[Point2], bc: &Line2, r: f64) -> String {
    candidates
        .iter()
        .map(|o| {
            let distance = bc.distance_to_point(o);
            format!(
                "centre: ({}, {}), dist raw: {}, dist norm: {}",
                o.x,
                o.y,
                (distance - r).abs(),
                (distance / r - 1.0).abs()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn tangent_at(p: Point2, centre: &Point2) -> Line2 {
    Line2::new(p, p + right_normal(&(centre - p)))
}

impl Wedge {
    /// Fits circles inscribed in the wedge that touch `target`.
    ///
    /// A degenerate wedge gives up to two circles, a non-degenerate one a
    /// single circle. `Ok(None)` means there is no fit: the point is not
    /// inside the wedge, or the segment does not cut a triangle out of it.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InconsistentFit` when a segment forms a
    /// triangle with a non-degenerate wedge but no excircle candidate touches
    /// the wedge triangle, meaning `error` is inconsistent with the input.
    pub fn fit_circles(&self, target: &FitTarget, error: f64) -> Result<Option<CircleFits>> {
        let fits = match (target, self.is_degenerate) {
            (FitTarget::Point(p), true) => {
                self.fit_degenerate_point(p, error).map(CircleFits::Point)
            }
            (FitTarget::Point(p), false) => self.fit_point(p, error).map(CircleFits::Point),
            (FitTarget::Segment(l), true) => {
                self.fit_degenerate_segment(l, error).map(CircleFits::Segment)
            }
            (FitTarget::Segment(l), false) => self.fit_segment(l, error)?.map(CircleFits::Segment),
        };
        Ok(fits)
    }

    /// Circles between parallel arms passing through `p`.
    ///
    /// ```text
    ///  -----------------------*(Ap)---------------(left)------->
    ///                         |
    ///   ----------------------*(I)-------------------
    ///                         |
    ///                         *(p)
    ///                         |
    ///  -----------------------*(A)----(right)----------->
    /// ```
    fn fit_degenerate_point(&self, p: &Point2, error: f64) -> Option<Vec<PointFit>> {
        if !self.strictly_contains(p, error) {
            return None;
        }

        let a = self.right_arm.closest_point(p);
        let a_prime = self.left_arm.closest_point(&a);

        // A-Ap is normal to both arms: I is on the centre line of the strip
        // and half of |A-Ap| is the radius.
        let mid = Point2::from((a.coords + a_prime.coords) / 2.0);
        let r = (a - a_prime).norm() / 2.0;

        // Centre O = I + t * D, D the right arm direction, with |O - p| = r:
        // |D|² t² + 2 (I - p)·D t + |I - p|² - r² = 0
        let d = self.right_arm.delta();
        let ip = mid - p;
        let roots = quadratic_roots(d.norm_squared(), 2.0 * ip.dot(d), ip.norm_squared() - r * r)?;

        let fits = roots
            .into_iter()
            .map(|t| {
                let centre = mid + d * t;
                PointFit {
                    circle: Circle::new(centre, r),
                    tangent: tangent_at(*p, &centre),
                }
            })
            .collect();
        Some(fits)
    }

    /// The two circles between parallel arms touching the line `l`.
    ///
    /// ```text
    ///  ------(B)*-----*(Ap)---------------(left)------->
    ///            \    |
    ///   -----------\--*(I)-------------------
    ///               \ |
    ///  ---------------*(A)-------------(right)----------->
    /// ```
    fn fit_degenerate_segment(&self, l: &Line2, error: f64) -> Option<Vec<SegmentFit>> {
        if !self.form_triangle(l, error) {
            return None;
        }

        let a = l.intersection_point(&self.right_arm, 0.0)?;
        let b = l.intersection_point(&self.left_arm, 0.0)?;

        let ab = Line2::new(a, b);
        let a_prime = self.left_arm.closest_point(&a);

        let mid = Point2::from((a.coords + a_prime.coords) / 2.0);
        let r = (a - a_prime).norm() / 2.0;

        // Centres run along I + t * D and stay r away from AB.
        let d = self.right_arm.delta();
        let base = cross_2d(ab.delta(), &(a - mid));
        let offset = r * ab.length();
        let denominator = cross_2d(ab.delta(), d);

        let fits = [base + offset, base - offset]
            .into_iter()
            .map(|numerator| {
                let centre = mid + d * (numerator / denominator);
                SegmentFit {
                    circle: Circle::new(centre, r),
                    tangent_parameter: l.closest_point_param(&centre),
                }
            })
            .collect();
        Some(fits)
    }

    /// The largest circle inscribed in the wedge passing through `p`.
    ///
    /// ```text
    ///              *(C)
    ///             /|
    ///            / |
    ///           /  |
    ///          / *(p)
    ///         /    |
    ///    (A) *--*--* (B)
    ///          (D)
    /// ```
    ///
    /// The centre lies on the bisector C-D, equally far from `p` and from the
    /// left arm.
    #[allow(clippy::many_single_char_names)]
    fn fit_point(&self, p: &Point2, error: f64) -> Option<Vec<PointFit>> {
        if !self.strictly_contains(p, error) {
            return None;
        }

        let c = *self.left_arm.start();
        let a = *self.left_arm.end();
        let b = *self.right_arm.end();

        let len_cb = (c - b).norm();
        let len_ca = (c - a).norm();

        let d = b + (a - b) * (len_cb / (len_cb + len_ca));
        let bisector = Line2::new(c, d);

        let cd = d - c;
        let cp = c - p;
        let arm_distance = cross_2d(&(a - c), &cd) / len_ca;
        let roots = quadratic_roots(
            cd.norm_squared() - arm_distance * arm_distance,
            2.0 * cd.dot(&cp),
            cp.norm_squared(),
        )?;

        // Of two candidates keep the one with the larger radius.
        let centre = roots
            .into_iter()
            .map(|t| bisector.evaluate(t))
            .reduce(|best, o| {
                if (best - p).norm_squared() > (o - p).norm_squared() {
                    best
                } else {
                    o
                }
            })?;

        trace!(x = centre.x, y = centre.y, "fitted circle through point");
        Some(vec![PointFit {
            circle: Circle::new(centre, (centre - p).norm()),
            tangent: tangent_at(*p, &centre),
        }])
    }

    /// The circle escribed to the wedge triangle that touches `l`.
    ///
    /// C is the apex, A and B where `l` meets the left and right arm. The
    /// circle touches AB and the extensions of CA and CB beyond A and B.
    #[allow(clippy::many_single_char_names, clippy::similar_names)]
    fn fit_segment(&self, l: &Line2, error: f64) -> Result<Option<Vec<SegmentFit>>> {
        if !self.form_triangle(l, error) {
            return Ok(None);
        }

        let c = *self.left_arm.start();
        let (Some(a), Some(b)) = (
            l.intersection_point(&self.left_arm, 0.0),
            l.intersection_point(&self.right_arm, 0.0),
        ) else {
            return Ok(None);
        };

        let ac = Line2::new(a, c);
        let bc = Line2::new(b, c);
        let ab = Line2::new(a, b);

        let len_a = ac.length();
        let len_b = bc.length();
        let len_c = ab.length();
        let s = (len_a + len_b + len_c) / 2.0;

        // Heron: excircle radius opposite C. A thin triangle makes the
        // radicand vanish.
        let radicand = s * (s - len_a) * (s - len_b) / (s - len_c);
        if !radicand.is_finite() || radicand <= 0.0 {
            trace!(radicand, "wedge triangle too thin for an excircle");
            return Ok(None);
        }
        let r = radicand.sqrt();

        // The centre O solves
        //   AB.delta × (O - A) = ±r |AB|
        //   AC.delta × (O - A) = ±r |AC|
        let det = cross_2d(ab.delta(), ac.delta());
        let ba = cross_2d(&b.coords, &a.coords);
        let ca = cross_2d(&c.coords, &a.coords);
        let column_x = Vector2::new(ab.delta().x, ac.delta().x);
        let column_y = Vector2::new(ab.delta().y, ac.delta().y);

        let candidates: Vec<Point2> = [(1.0, 1.0), (1.0, -1.0), (-1.0, 1.0), (-1.0, -1.0)]
            .into_iter()
            .map(|(sign_c, sign_a)| {
                let rhs = Vector2::new(ba + sign_c * r * len_c, ca + sign_a * r * len_a);
                Point2::new(cross_2d(&column_x, &rhs), cross_2d(&column_y, &rhs)) / -det
            })
            .collect();

        // The escribed circle touches BC and is not on the apex side of AB.
        let found = candidates.iter().find(|o| {
            Circle::new(**o, r).touches(&bc, FIT_TOLERANCE)
                && ac.point_on_side(o, 0.0) != bc.point_on_side(o, 0.0)
        });

        let Some(centre) = found else {
            error!(
                wedge = %self,
                segment = %l,
                r,
                "no excircle candidate touches the wedge triangle"
            );
            return Err(GeometryError::InconsistentFit {
                radius: r,
                candidates: candidate_report(&candidates, &bc, r),
            }
            .into());
        };

        Ok(Some(vec![SegmentFit {
            circle: Circle::new(*centre, r),
            tangent_parameter: l.closest_point_param(centre),
        }]))
    }
}
