mod circle;
mod line;
mod side;
pub mod wedge;

pub use circle::Circle;
pub use line::Line2;
pub use side::Side;
pub use wedge::{CircleFits, FitTarget, PointFit, SegmentFit, Wedge};
