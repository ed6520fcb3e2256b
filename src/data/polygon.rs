use crate::data::{LineSegment, Point};
use crate::orientation::snapped_cross_product;
use crate::{Error, Tolerance};

mod iter;
pub use iter::*;

mod convex;

/// A closed loop of points.
///
/// `vertices` keeps the caller's points untouched. `order` lists indices
/// into `vertices` and is the only thing winding normalisation and cleanup
/// ever rewrite, so every index handed out by a triangulation still refers
/// to the caller's input.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
  pub(crate) vertices: Vec<Point>,
  pub(crate) order: Vec<usize>,
}

impl Polygon {
  pub fn new_unchecked(vertices: Vec<Point>) -> Polygon {
    let len = vertices.len();
    Polygon {
      vertices,
      order: (0..len).collect(),
    }
  }

  /// Normalise to counter-clockwise and reject anything that is not a simple
  /// polygon under the default [`Tolerance`].
  pub fn new(points: Vec<Point>) -> Result<Polygon, Error> {
    let tolerance = Tolerance::default();
    let mut p = Self::new_unchecked(points);
    p.ensure_ccw();
    if p.is_self_intersecting_with(&tolerance) {
      return Err(Error::SelfIntersections);
    }
    p.validate_with(&tolerance)?;
    Ok(p)
  }

  /// Number of vertices on the loop.
  pub fn len(&self) -> usize {
    self.order.len()
  }

  pub fn is_empty(&self) -> bool {
    self.order.is_empty()
  }

  /// The caller's points, in input order.
  pub fn vertices(&self) -> &[Point] {
    &self.vertices
  }

  /// Indices into [`Polygon::vertices`], in loop order.
  pub fn order(&self) -> &[usize] {
    &self.order
  }

  /// The point at `position` along the loop.
  pub fn point(&self, position: usize) -> &Point {
    &self.vertices[self.order[position]]
  }

  /// `(prev, curr, next)` around the loop position.
  pub fn corner(&self, position: usize) -> (&Point, &Point, &Point) {
    let n = self.len();
    (
      self.point((position + n - 1) % n),
      self.point(position),
      self.point((position + 1) % n),
    )
  }

  pub fn iter(&self) -> Iter<'_> {
    Iter {
      polygon: self,
      position: 0,
    }
  }

  pub fn iter_boundary_edges(&self) -> EdgeIter<'_> {
    EdgeIter {
      polygon: self,
      position: 0,
    }
  }

  fn edge(&self, position: usize) -> LineSegment {
    LineSegment::new(*self.point(position), *self.point((position + 1) % self.len()))
  }

  /// Shoelace area, positive for counter-clockwise loops.
  pub fn signed_area(&self) -> f64 {
    self.signed_area_2x() / 2.0
  }

  pub fn signed_area_2x(&self) -> f64 {
    self
      .iter_boundary_edges()
      .map(|edge| {
        let p = edge.src;
        let q = edge.dst;
        p.x * q.z - q.x * p.z
      })
      .sum()
  }

  /// Reverse the loop if its shoelace sum is negative. Idempotent.
  pub fn ensure_ccw(&mut self) {
    if self.signed_area_2x() < 0.0 {
      self.order.reverse();
    }
  }

  /// Validate with the default [`Tolerance`].
  pub fn validate(&self) -> Result<(), Error> {
    self.validate_with(&Tolerance::default())
  }

  /// Check the preconditions of plain ear clipping: at least three points, no
  /// two points within [`Tolerance::weld`], no vertex collinear with its
  /// neighbours within [`Tolerance::collinear`], and counter-clockwise winding.
  ///
  /// Self intersections are not checked here; see
  /// [`Polygon::is_self_intersecting`].
  pub fn validate_with(&self, tolerance: &Tolerance) -> Result<(), Error> {
    let n = self.len();
    if n < 3 {
      return Err(Error::InsufficientVertices);
    }
    for i in 0..n {
      for j in i + 1..n {
        if self.point(i).is_near(self.point(j), tolerance.weld) {
          return Err(Error::DuplicatePoints);
        }
      }
    }
    for i in 0..n {
      if self.corner_cross(i, tolerance).abs() < tolerance.collinear {
        return Err(Error::CoLinearViolation);
      }
    }
    if self.signed_area_2x() <= 0.0 {
      return Err(Error::ClockWiseViolation);
    }
    Ok(())
  }

  // Cross product of (prev -> curr) and (prev -> next).
  fn corner_cross(&self, position: usize, tolerance: &Tolerance) -> f64 {
    let (prev, curr, next) = self.corner(position);
    snapped_cross_product(prev, curr, next, tolerance.snap)
  }

  pub fn is_self_intersecting(&self) -> bool {
    self.is_self_intersecting_with(&Tolerance::default())
  }

  /// $O(n^2)$ Test every pair of non-adjacent edges for a crossing.
  pub fn is_self_intersecting_with(&self, tolerance: &Tolerance) -> bool {
    let n = self.len();
    for i in 0..n {
      let edge_i = self.edge(i);
      for j in i + 2..n {
        // The last edge shares a vertex with the first.
        if i == 0 && j == n - 1 {
          continue;
        }
        if edge_i
          .intersect_with(&self.edge(j), tolerance.parallel)
          .is_some()
        {
          return true;
        }
      }
    }
    false
  }

  pub fn is_concave(&self) -> bool {
    self.is_concave_with(&Tolerance::default())
  }

  /// True if the non-zero corner cross products disagree in sign.
  pub fn is_concave_with(&self, tolerance: &Tolerance) -> bool {
    let mut sign = None;
    for i in 0..self.len() {
      let cross = self.corner_cross(i, tolerance);
      if cross == 0.0 {
        continue;
      }
      let positive = cross > 0.0;
      match sign {
        None => sign = Some(positive),
        Some(s) if s != positive => return true,
        Some(_) => {}
      }
    }
    false
  }

  pub fn is_complex(&self) -> bool {
    self.is_complex_with(&Tolerance::default())
  }

  /// Concave or self-intersecting. Triangles are never complex.
  pub fn is_complex_with(&self, tolerance: &Tolerance) -> bool {
    self.len() >= 4 && (self.is_self_intersecting_with(tolerance) || self.is_concave_with(tolerance))
  }

  /// Drop every point within [`Tolerance::weld`] of an earlier kept point.
  pub fn weld(&mut self, tolerance: &Tolerance) {
    let mut kept: Vec<usize> = Vec::with_capacity(self.order.len());
    for &idx in self.order.iter() {
      let pt = &self.vertices[idx];
      if !kept
        .iter()
        .any(|&other| self.vertices[other].is_near(pt, tolerance.weld))
      {
        kept.push(idx);
      }
    }
    self.order = kept;
  }

  /// Weld duplicates, then drop vertices collinear with both neighbours.
  ///
  /// If dropping collinear vertices would leave fewer than three points, the
  /// welded loop is kept instead.
  pub fn cleanup(&mut self, tolerance: &Tolerance) {
    self.weld(tolerance);
    let n = self.len();
    let simplified: Vec<usize> = (0..n)
      .filter(|&i| self.corner_cross(i, tolerance).abs() >= tolerance.collinear)
      .map(|i| self.order[i])
      .collect();
    if simplified.len() >= 3 {
      self.order = simplified;
    }
  }
}

/// [`Polygon::cleanup`] on a plain point list.
///
/// ```rust
/// # use footprint::data::{polygon::cleanup_points, Point};
/// # use footprint::Tolerance;
/// let pts = [
///   Point::new(0.0, 0.0),
///   Point::new(0.0, 0.0),
///   Point::new(1.0, 0.0),
///   Point::new(2.0, 0.0),
///   Point::new(2.0, 2.0),
/// ];
/// let clean = cleanup_points(&pts, &Tolerance::default());
/// assert_eq!(clean, vec![pts[0], pts[3], pts[4]]);
/// ```
pub fn cleanup_points(points: &[Point], tolerance: &Tolerance) -> Vec<Point> {
  let mut poly = Polygon::new_unchecked(points.to_vec());
  poly.cleanup(tolerance);
  poly.iter().copied().collect()
}

impl From<Vec<Point>> for Polygon {
  fn from(points: Vec<Point>) -> Polygon {
    Polygon::new_unchecked(points)
  }
}

impl<'a> From<&'a [Point]> for Polygon {
  fn from(points: &'a [Point]) -> Polygon {
    Polygon::new_unchecked(points.to_vec())
  }
}
