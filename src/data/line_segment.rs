use super::Point;

use crate::Intersects;
use crate::Tolerance;

///////////////////////////////////////////////////////////////////////////////
// LineSegment

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
  pub src: Point,
  pub dst: Point,
}

/// Where two segments cross, as parameters along each of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
  /// Position along the first segment, in `[0, 1]`.
  pub ua: f64,
  /// Position along the second segment, in `[0, 1]`.
  pub ub: f64,
}

impl LineSegment {
  pub const fn new(src: Point, dst: Point) -> LineSegment {
    LineSegment { src, dst }
  }

  /// Parametric segment intersection.
  ///
  /// Segments whose direction determinant is smaller than `parallel` are
  /// treated as parallel and never intersect, even when they overlap.
  /// Shared endpoints count as crossings.
  pub fn intersect_with(&self, other: &LineSegment, parallel: f64) -> Option<Crossing> {
    let (x1, z1) = (self.src.x, self.src.z);
    let (x2, z2) = (self.dst.x, self.dst.z);
    let (x3, z3) = (other.src.x, other.src.z);
    let (x4, z4) = (other.dst.x, other.dst.z);

    let denom = (z4 - z3) * (x2 - x1) - (x4 - x3) * (z2 - z1);
    if denom.abs() < parallel {
      return None;
    }
    let ua = ((x4 - x3) * (z1 - z3) - (z4 - z3) * (x1 - x3)) / denom;
    let ub = ((x2 - x1) * (z1 - z3) - (z2 - z1) * (x1 - x3)) / denom;
    if (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub) {
      Some(Crossing { ua, ub })
    } else {
      None
    }
  }
}

impl From<(Point, Point)> for LineSegment {
  fn from((src, dst): (Point, Point)) -> LineSegment {
    LineSegment { src, dst }
  }
}

impl<'a> Intersects for &'a LineSegment {
  type Result = Crossing;
  fn intersect(self, other: &'a LineSegment) -> Option<Crossing> {
    self.intersect_with(other, Tolerance::default().parallel)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests
