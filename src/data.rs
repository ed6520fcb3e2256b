mod line_segment;
pub(crate) mod point;
pub mod polygon;
mod triangle;
mod vector;

pub use line_segment::*;
pub use triangle::*;

#[doc(inline)]
pub use crate::data::polygon::{EdgeIter, Polygon};
pub use point::Point;
pub use vector::Vector;
