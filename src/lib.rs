//! Ear-clipping triangulation for 2D footprints drawn on the ground plane.
//!
//! Points live in the `(x, z)` plane of a Y-up scene. The triangulator
//! accepts any loop of three or more points (clockwise or counter-clockwise,
//! convex or concave, even self-intersecting) and always answers with
//! triangles expressed as index triples into the caller's point list.
//!
//! ```rust
//! use footprint::algorithms::triangulate;
//! use footprint::data::Point;
//!
//! let square = [
//!   Point::new(0.0, 0.0),
//!   Point::new(0.0, 1.0),
//!   Point::new(1.0, 1.0),
//!   Point::new(1.0, 0.0),
//! ];
//! let trigs = triangulate(&square);
//! assert_eq!(trigs.len(), 2);
//! let area: f64 = trigs.iter().map(|t| t.signed_area(&square)).sum();
//! assert!((area - 1.0).abs() < 1e-9);
//! ```
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]

pub mod algorithms;
pub mod data;
mod intersection;
mod orientation;
mod tolerance;

#[cfg(test)]
pub mod testing;

pub use intersection::Intersects;
pub use orientation::{cross_product, Orientation};
pub use tolerance::Tolerance;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
  /// Fewer than three vertices.
  InsufficientVertices,
  /// Two non-adjacent edges cross.
  SelfIntersections,
  /// Two vertices are closer than [`Tolerance::weld`].
  DuplicatePoints,
  /// The loop does not wind counter-clockwise.
  ClockWiseViolation,
  /// A vertex is collinear with its neighbours within [`Tolerance::collinear`].
  CoLinearViolation,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::SelfIntersections => write!(f, "Self intersections"),
      Error::DuplicatePoints => write!(f, "Duplicate points"),
      Error::ClockWiseViolation => write!(f, "Clockwise violation"),
      Error::CoLinearViolation => write!(f, "Three consecutive points are colinear"),
    }
  }
}

impl std::error::Error for Error {}
