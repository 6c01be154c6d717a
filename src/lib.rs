//! Minimum-perimeter triangles enclosing convex polygons.
//!
//! The search shrinks a wedge around the hull by inscribing circles between
//! its arms and walking the hull vertices until the two free sides of the
//! triangle have equal length. See [`operations::enclose`].

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{MintriError, Result};
pub use geometry::{Circle, Line2, Side, Wedge};
pub use operations::enclose::{
    farthest_from_base, line_tangent_to_hull, EncloseConfig, MinTriangle, MinTriangleWithBase,
    TangentTest, Triangle,
};
