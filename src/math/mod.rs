pub mod polygon_2d;
pub mod vector_2d;

pub use vector_2d::{approx_eq, cross_2d, right_normal};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Angular deviation (radians) below which two lines count as parallel.
pub const PARALLEL_ANGLE: f64 = 0.1;

/// Slack for quadratic discriminants and circle/line touching checks.
pub const FIT_TOLERANCE: f64 = 1e-5;
