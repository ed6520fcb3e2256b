use super::Point;
use crate::orientation::snapped_cross_product;
use crate::{Error, Orientation, Tolerance};
use claims::debug_assert_ok;

/// Three indices into a point list, in emission order.
///
/// Triangulations emit `(prev, next, curr)`, which is clockwise in the XZ
/// plane. Lifted into a Y-up scene, the face normal `(b - a) × (c - a)` then
/// points up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle(pub [usize; 3]);

impl Triangle {
  pub const fn new(a: usize, b: usize, c: usize) -> Triangle {
    Triangle([a, b, c])
  }

  pub fn indices(&self) -> [usize; 3] {
    self.0
  }

  /// # Panics
  ///
  /// Panics if any index is out of bounds for `points`.
  pub fn view<'a>(&self, points: &'a [Point]) -> TriangleView<'a> {
    let [a, b, c] = self.0;
    TriangleView::new_unchecked([&points[a], &points[b], &points[c]])
  }

  /// Signed area as seen from above (+Y). Positive for triangles whose
  /// normal points up.
  pub fn signed_area(&self, points: &[Point]) -> f64 {
    -self.view(points).signed_area()
  }

  /// Pairwise distinct and within bounds of a point list of length `len`.
  pub fn is_valid_for(&self, len: usize) -> bool {
    let [a, b, c] = self.0;
    a != b && b != c && a != c && a < len && b < len && c < len
  }

  /// Maps positions in a working order back to the caller's indices.
  pub(crate) fn remap(&self, order: &[usize]) -> Triangle {
    let [a, b, c] = self.0;
    Triangle([order[a], order[b], order[c]])
  }
}

impl From<(usize, usize, usize)> for Triangle {
  fn from((a, b, c): (usize, usize, usize)) -> Triangle {
    Triangle([a, b, c])
  }
}

impl From<Triangle> for [usize; 3] {
  fn from(triangle: Triangle) -> [usize; 3] {
    triangle.0
  }
}

/// Barycentric containment test with the default [`Tolerance::containment`].
///
/// Points on the boundary (within the tolerance) count as inside.
///
/// ```rust
/// # use footprint::data::{point_in_triangle, Point};
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(4.0, 0.0);
/// let c = Point::new(0.0, 4.0);
/// assert!(point_in_triangle(&Point::new(1.0, 1.0), &a, &b, &c));
/// assert!(point_in_triangle(&Point::new(2.0, 2.0), &a, &b, &c));
/// assert!(!point_in_triangle(&Point::new(3.0, 3.0), &a, &b, &c));
/// ```
pub fn point_in_triangle(point: &Point, a: &Point, b: &Point, c: &Point) -> bool {
  TriangleView::new_unchecked([a, b, c]).contains(point, Tolerance::default().containment)
}

pub struct TriangleView<'a>([&'a Point; 3]);

impl<'a> TriangleView<'a> {
  // O(1)
  pub fn new(pts: [&'a Point; 3]) -> TriangleView<'a> {
    let triangle = TriangleView(pts);
    debug_assert_ok!(triangle.validate());
    triangle
  }

  pub fn new_unchecked(pts: [&'a Point; 3]) -> TriangleView<'a> {
    TriangleView(pts)
  }

  pub fn points(&self) -> [&'a Point; 3] {
    self.0
  }

  // O(1)
  pub fn validate(&self) -> Result<(), Error> {
    if self.orientation() != Orientation::CounterClockWise {
      Err(Error::ClockWiseViolation)
    } else {
      Ok(())
    }
  }

  pub fn orientation(&self) -> Orientation {
    let [a, b, c] = self.0;
    a.orientation(b, c)
  }

  /// Barycentric point-in-triangle test, inclusive of the boundary up to
  /// `epsilon`. Works for either winding.
  ///
  /// When the barycentric denominator is smaller than `epsilon` the triangle
  /// is too thin for the division to be trusted, and the test falls back to
  /// checking that the three edge cross products never disagree in sign.
  pub fn contains(&self, pt: &Point, epsilon: f64) -> bool {
    let [a, b, c] = self.0;
    let v0 = c - a;
    let v1 = b - a;
    let v2 = pt - a;

    let dot00 = v0.dot(&v0);
    let dot01 = v0.dot(&v1);
    let dot02 = v0.dot(&v2);
    let dot11 = v1.dot(&v1);
    let dot12 = v1.dot(&v2);

    let denom = dot00 * dot11 - dot01 * dot01;
    if denom.abs() < epsilon {
      return self.contains_by_sign(pt);
    }
    let u = (dot11 * dot02 - dot01 * dot12) / denom;
    let v = (dot00 * dot12 - dot01 * dot02) / denom;
    u >= -epsilon && v >= -epsilon && u + v <= 1.0 + epsilon
  }

  fn contains_by_sign(&self, pt: &Point) -> bool {
    let [a, b, c] = self.0;
    let d1 = snapped_cross_product(pt, a, b, 0.0);
    let d2 = snapped_cross_product(pt, b, c, 0.0);
    let d3 = snapped_cross_product(pt, c, a, 0.0);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
  }

  /// Half of [`TriangleView::signed_area_2x`].
  pub fn signed_area(&self) -> f64 {
    self.signed_area_2x() / 2.0
  }

  /// Twice the signed area, positive for counter-clockwise triangles.
  pub fn signed_area_2x(&self) -> f64 {
    let [a, b, c] = self.0;
    a.x * b.z - b.x * a.z + b.x * c.z - c.x * b.z + c.x * a.z - a.x * c.z
    // x1*y2 - x2*y1 +
    // x2*y3 - x3*y2 +
    // x3*y1 - x1*y3
  }
}
