//! Minimum-perimeter triangles enclosing a convex hull.
//!
//! The search is tailored from the generic algorithm in
//! <http://scholar.uwindsor.ca/cgi/viewcontent.cgi?article=2527&context=etd>
//! (p. 22 onwards), with the side BC fixed to a base edge of the hull.
//!
//! - [`line_tangent_to_hull`]: supporting-line test.
//! - [`MinTriangleWithBase`]: base edge `(hull[0], hull[last])` fixed.
//! - [`MinTriangle`]: best triangle over every base edge.

mod config;
mod enclosing_side;
mod min_triangle;
mod min_triangle_with_base;
mod tangent;
mod triangle;

pub use config::EncloseConfig;
pub use min_triangle::MinTriangle;
pub use min_triangle_with_base::{farthest_from_base, MinTriangleWithBase};
pub use tangent::{line_tangent_to_hull, TangentTest};
pub use triangle::Triangle;
