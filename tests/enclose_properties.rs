#![allow(clippy::unwrap_used)]

use std::f64::consts::TAU;

use mintri::geometry::{CircleFits, FitTarget};
use mintri::math::polygon_2d::{convex_contains_2d, perimeter_2d};
use mintri::math::{Point2, Vector2};
use mintri::{
    line_tangent_to_hull, EncloseConfig, Line2, MinTriangle, MinTriangleWithBase, Wedge,
};
use proptest::prelude::*;

fn regular_polygon(
    n: usize,
    radius: f64,
    phase: f64,
    centre: (f64, f64),
    reversed: bool,
) -> Vec<Point2> {
    #[allow(clippy::cast_precision_loss)]
    let step = TAU / n as f64;
    let mut points: Vec<Point2> = (0..n)
        .map(|k| {
            #[allow(clippy::cast_precision_loss)]
            let angle = phase + step * k as f64;
            Point2::new(centre.0 + radius * angle.cos(), centre.1 + radius * angle.sin())
        })
        .collect();
    if reversed {
        points.reverse();
    }
    points
}

fn unit(angle: f64) -> Vector2 {
    Vector2::new(angle.cos(), angle.sin())
}

fn coordinate() -> impl Strategy<Value = f64> {
    -10.0..10.0_f64
}

/// Parallel arms `width` apart, the right one shifted along the strip and
/// optionally pointing backwards.
fn strip(origin: Point2, heading: f64, width: f64, shift: f64, backwards: bool) -> Wedge {
    let along = unit(heading);
    let across = Vector2::new(-along.y, along.x);
    let left = Line2::new(origin, origin + along * 2.0);
    let start = origin + across * width + along * shift;
    let right = if backwards {
        Line2::new(start + along * 3.0, start)
    } else {
        Line2::new(start, start + along * 3.0)
    };
    Wedge::new(left, right, 1e-5).unwrap()
}

/// Arms from a common apex, `spread` radians apart.
fn wedge_from_apex(
    apex: Point2,
    heading: f64,
    spread: f64,
    left_len: f64,
    right_len: f64,
) -> Wedge {
    let left = Line2::new(apex, apex + unit(heading) * left_len);
    let right = Line2::new(apex, apex + unit(heading + spread) * right_len);
    Wedge::new(left, right, 1e-5).unwrap()
}

proptest! {
    #[test]
    fn tangent_test_ignores_point_order(
        (points, shuffled) in (3usize..12, 0.5..5.0_f64, 0.0..TAU)
            .prop_flat_map(|(n, radius, phase)| {
                let points = regular_polygon(n, radius, phase, (0.0, 0.0), false);
                (Just(points.clone()), Just(points).prop_shuffle())
            }),
        x0 in coordinate(), y0 in coordinate(),
        x1 in coordinate(), y1 in coordinate(),
    ) {
        prop_assume!((x1 - x0).hypot(y1 - y0) > 1e-3);
        let line = Line2::new(Point2::new(x0, y0), Point2::new(x1, y1));

        let original = line_tangent_to_hull(&line, &points, 1e-5);
        let permuted = line_tangent_to_hull(&line, &shuffled, 1e-5);
        prop_assert_eq!(original.holds, permuted.holds);
        if original.holds {
            prop_assert_eq!(original.side, permuted.side);
        }
    }

    #[test]
    fn edges_of_a_polygon_support_it(
        n in 3usize..12, radius in 0.5..5.0_f64, phase in 0.0..TAU, edge in 0usize..12,
    ) {
        let points = regular_polygon(n, radius, phase, (1.0, -2.0), false);
        let i = edge % n;
        let line = Line2::new(points[i], points[(i + 1) % n]);
        prop_assert!(line_tangent_to_hull(&line, &points, 1e-5).holds);
    }

    #[test]
    fn swapping_arms_mirrors_the_wedge(
        x0 in coordinate(), y0 in coordinate(), x1 in coordinate(), y1 in coordinate(),
        heading in 0.0..TAU, spread in 0.5..2.6_f64, flip in any::<bool>(),
        left_len in 1.0..3.0_f64, right_len in 1.0..3.0_f64,
    ) {
        let spread = if flip { -spread } else { spread };
        let p = Point2::new(x0, y0);
        let q = Point2::new(x1, y1);
        let a = Line2::new(p, p + unit(heading) * left_len);
        let b = Line2::new(q, q + unit(heading + spread) * right_len);

        let w1 = Wedge::new(a, b, 1e-5).unwrap();
        let w2 = Wedge::new(b, a, 1e-5).unwrap();
        prop_assert!(!w1.is_degenerate() && !w2.is_degenerate());
        for (x, y) in [
            (w1.left_arm().start(), w2.right_arm().start()),
            (w1.left_arm().end(), w2.right_arm().end()),
            (w1.right_arm().start(), w2.left_arm().start()),
            (w1.right_arm().end(), w2.left_arm().end()),
        ] {
            prop_assert!((x - y).norm() < 1e-7, "{} != {}", x, y);
        }
    }

    #[test]
    fn circle_through_inner_point_touches_both_arms(
        x in coordinate(), y in coordinate(),
        heading in 0.0..TAU, spread in 0.3..1.5_f64, flip in any::<bool>(),
        left_len in 1.0..5.0_f64, right_len in 1.0..5.0_f64,
        s in 0.05..0.9_f64, t in 0.05..0.9_f64,
    ) {
        let apex = Point2::new(x, y);
        let spread = if flip { -spread } else { spread };
        let wedge = wedge_from_apex(apex, heading, spread, left_len, right_len);
        let p = apex + unit(heading) * (s * left_len) + unit(heading + spread) * (t * right_len);

        let fits = wedge.fit_circles(&FitTarget::Point(p), 1e-5).unwrap();
        let Some(CircleFits::Point(fits)) = fits else {
            return Err(TestCaseError::fail("no circle through an inner point"));
        };
        prop_assert_eq!(fits.len(), 1);
        let circle = fits[0].circle;
        let r = circle.radius();
        let slack = 1e-6 * r.max(1.0);

        prop_assert!(wedge.strictly_contains(circle.centre(), 1e-5));
        prop_assert!(((circle.centre() - p).norm() - r).abs() < slack);
        prop_assert!((wedge.left_arm().distance_to_point(circle.centre()) - r).abs() < slack);
        prop_assert!((wedge.right_arm().distance_to_point(circle.centre()) - r).abs() < slack);
    }

    #[test]
    fn excircle_touches_the_crossing_segment(
        x in coordinate(), y in coordinate(),
        heading in 0.0..TAU, spread in 0.3..1.5_f64, flip in any::<bool>(),
        left_len in 1.0..5.0_f64, right_len in 1.0..5.0_f64,
        s in 0.05..0.9_f64, t in 0.05..0.9_f64,
    ) {
        let apex = Point2::new(x, y);
        let spread = if flip { -spread } else { spread };
        let wedge = wedge_from_apex(apex, heading, spread, left_len, right_len);

        // Crosses the left arm at parameter 0.25 and the right one at 0.75.
        let a = apex + unit(heading) * (s * left_len);
        let b = apex + unit(heading + spread) * (t * right_len);
        let segment = Line2::new(a + (a - b) * 0.5, b + (b - a) * 0.5);

        let fits = wedge.fit_circles(&FitTarget::Segment(segment), 1e-5).unwrap();
        prop_assume!(fits.is_some());
        let Some(CircleFits::Segment(fits)) = fits else {
            return Err(TestCaseError::fail("segment target gave point fits"));
        };
        let fit = fits[0];
        let r = fit.circle.radius();
        let slack = 1e-6 * r.max(1.0);

        prop_assert!(fit.tangent_parameter > 0.25 - 1e-9 && fit.tangent_parameter < 0.75 + 1e-9);
        prop_assert!((segment.distance_to_point(fit.circle.centre()) - r).abs() < slack);
        prop_assert!((wedge.left_arm().distance_to_point(fit.circle.centre()) - r).abs() < slack);
        prop_assert!((wedge.right_arm().distance_to_point(fit.circle.centre()) - r).abs() < slack);
    }

    #[test]
    fn strip_circles_through_inner_point_stay_inside(
        x in coordinate(), y in coordinate(), heading in 0.0..TAU,
        width in 0.5..5.0_f64, flip_side in any::<bool>(),
        shift in -3.0..3.0_f64, backwards in any::<bool>(),
        across in 0.1..0.9_f64, along in -5.0..5.0_f64,
    ) {
        let origin = Point2::new(x, y);
        let width = if flip_side { -width } else { width };
        let wedge = strip(origin, heading, width, shift, backwards);
        prop_assert!(wedge.is_degenerate());

        let dir = unit(heading);
        let p = origin + Vector2::new(-dir.y, dir.x) * (width * across) + dir * along;
        let fits = wedge.fit_circles(&FitTarget::Point(p), 1e-5).unwrap();
        let Some(CircleFits::Point(fits)) = fits else {
            return Err(TestCaseError::fail("no circle through a point inside the strip"));
        };
        prop_assert!(!fits.is_empty() && fits.len() <= 2);

        for fit in &fits {
            let centre = fit.circle.centre();
            let r = fit.circle.radius();
            let slack = 1e-6 * r.max(1.0);
            prop_assert!(wedge.strictly_contains(centre, 1e-5));
            prop_assert!(((centre - p).norm() - r).abs() < slack);
            prop_assert!((wedge.left_arm().distance_to_point(centre) - r).abs() < slack);
            prop_assert!((wedge.right_arm().distance_to_point(centre) - r).abs() < slack);
        }
    }

    #[test]
    fn strip_circles_touch_the_crossing_segment(
        x in coordinate(), y in coordinate(), heading in 0.0..TAU,
        width in 0.5..5.0_f64, flip_side in any::<bool>(),
        shift in -3.0..3.0_f64, backwards in any::<bool>(),
        s in -3.0..3.0_f64, t in -3.0..3.0_f64,
    ) {
        let origin = Point2::new(x, y);
        let width = if flip_side { -width } else { width };
        let wedge = strip(origin, heading, width, shift, backwards);

        // Crosses the left arm at parameter 0.25 and the right one at 0.75.
        let dir = unit(heading);
        let a = origin + dir * s;
        let b = origin + Vector2::new(-dir.y, dir.x) * width + dir * t;
        let segment = Line2::new(a + (a - b) * 0.5, b + (b - a) * 0.5);
        prop_assert!(wedge.form_triangle(&segment, 1e-5));

        let fits = wedge.fit_circles(&FitTarget::Segment(segment), 1e-5).unwrap();
        let Some(CircleFits::Segment(fits)) = fits else {
            return Err(TestCaseError::fail("no circle touching a segment across the strip"));
        };
        prop_assert_eq!(fits.len(), 2);

        for fit in &fits {
            let centre = fit.circle.centre();
            let r = fit.circle.radius();
            let slack = 1e-6 * r.max(1.0);
            prop_assert!(fit.tangent_parameter > 0.25 - 1e-9);
            prop_assert!(fit.tangent_parameter < 0.75 + 1e-9);
            prop_assert!((segment.distance_to_point(centre) - r).abs() < slack);
            prop_assert!((wedge.left_arm().distance_to_point(centre) - r).abs() < slack);
        }
    }

    #[test]
    fn base_triangle_apex_lies_outside_the_hull(
        n in prop::sample::select(vec![5usize, 7, 8, 9]), radius in 0.5..5.0_f64,
        phase in 0.0..TAU, cx in coordinate(), cy in coordinate(),
        reversed in any::<bool>(), rotation in 0usize..9,
    ) {
        let mut points = regular_polygon(n, radius, phase, (cx, cy), reversed);
        points.rotate_left(rotation % n);

        let triangle = MinTriangleWithBase::new(points.clone(), EncloseConfig::default())
            .execute()
            .unwrap()
            .unwrap();
        prop_assert!(!convex_contains_2d(&points, &triangle.a, 0.0), "apex {} inside", triangle.a);
        for p in &points {
            prop_assert!(triangle.contains(p, 1e-6), "{} outside {:?}", p, triangle);
        }
    }

    #[test]
    fn base_search_encloses_regular_polygons(
        n in 4usize..=10, radius in 0.5..5.0_f64, phase in 0.0..TAU,
        cx in coordinate(), cy in coordinate(), reversed in any::<bool>(), rotation in 0usize..10,
    ) {
        let mut points = regular_polygon(n, radius, phase, (cx, cy), reversed);
        points.rotate_left(rotation % n);
        let base = Line2::new(points[0], points[n - 1]);

        let found = MinTriangleWithBase::new(points.clone(), EncloseConfig::default()).execute();
        prop_assert!(found.is_ok(), "{:?}", found);
        if let Some(triangle) = found.unwrap() {
            for p in &points {
                prop_assert!(triangle.contains(p, 1e-6), "{} outside {:?}", p, triangle);
            }
            prop_assert!(base.distance_to_point(&triangle.b) < 1e-6);
            prop_assert!(base.distance_to_point(&triangle.c) < 1e-6);
        }
    }

    #[test]
    fn min_triangle_encloses_regular_polygons(
        n in prop::sample::select(vec![5usize, 7, 8, 9]), radius in 0.5..5.0_f64, phase in 0.0..TAU,
        cx in coordinate(), cy in coordinate(), reversed in any::<bool>(),
    ) {
        let points = regular_polygon(n, radius, phase, (cx, cy), reversed);
        let triangle = MinTriangle::new(points.clone(), EncloseConfig::default())
            .execute()
            .unwrap()
            .unwrap();

        for p in &points {
            prop_assert!(triangle.contains(p, 1e-6), "{} outside {:?}", p, triangle);
        }
        // No enclosing triangle is shorter than the polygon itself.
        prop_assert!(triangle.perimeter() >= perimeter_2d(&points) - 1e-9);
    }
}
