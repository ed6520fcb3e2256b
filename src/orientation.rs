use crate::data::Point;
use crate::tolerance::SNAP;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

/// Twice the signed area spanned by `p1 -> p2` and `p1 -> p3` in the XZ plane.
///
/// Positive when `p1`, `p2`, `p3` turn counter-clockwise. Magnitudes below
/// `1e-10` are snapped to exactly zero.
///
/// # Examples
///
/// ```rust
/// # use footprint::cross_product;
/// # use footprint::data::Point;
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(1.0, 0.0);
/// let c = Point::new(0.0, 1.0);
/// assert_eq!(cross_product(&a, &b, &c), 1.0);
/// assert_eq!(cross_product(&a, &c, &b), -1.0);
/// assert_eq!(cross_product(&a, &b, &Point::new(2.0, 0.0)), 0.0);
/// ```
pub fn cross_product(p1: &Point, p2: &Point, p3: &Point) -> f64 {
  snapped_cross_product(p1, p2, p3, SNAP)
}

// Both products are formed from the same operands regardless of argument
// order, so swapping p2 and p3 negates the result exactly.
pub(crate) fn snapped_cross_product(p1: &Point, p2: &Point, p3: &Point, snap: f64) -> f64 {
  let cross = (p2.x - p1.x) * (p3.z - p1.z) - (p2.z - p1.z) * (p3.x - p1.x);
  if cross.abs() < snap {
    0.0
  } else {
    cross
  }
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// ```rust
  /// # use footprint::data::Point;
  /// # use footprint::Orientation;
  /// let p1 = Point::new(0.0, 0.0);
  /// let p2 = Point::new(0.0, 1.0);
  /// assert!(Orientation::new(&p1, &p2, &Point::new(0.0, 2.0)).is_colinear());
  /// assert!(Orientation::new(&p1, &p2, &Point::new(-1.0, 2.0)).is_ccw());
  /// assert!(Orientation::new(&p1, &p2, &Point::new(1.0, 2.0)).is_cw());
  /// ```
  pub fn new(p1: &Point, p2: &Point, p3: &Point) -> Orientation {
    Orientation::from_cross(cross_product(p1, p2, p3))
  }

  pub fn from_cross(cross: f64) -> Orientation {
    if cross > 0.0 {
      CounterClockWise
    } else if cross < 0.0 {
      ClockWise
    } else {
      CoLinear
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      CounterClockWise => ClockWise,
      ClockWise => CounterClockWise,
      CoLinear => CoLinear,
    }
  }
}
