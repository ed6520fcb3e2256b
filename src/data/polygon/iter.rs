use crate::data::{LineSegment, Point};

use super::Polygon;

/// Points in loop order.
pub struct Iter<'a> {
  pub(crate) polygon: &'a Polygon,
  pub(crate) position: usize,
}

impl<'a> Iterator for Iter<'a> {
  type Item = &'a Point;
  fn next(&mut self) -> Option<&'a Point> {
    if self.position >= self.polygon.len() {
      return None;
    }
    let pt = self.polygon.point(self.position);
    self.position += 1;
    Some(pt)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.len(), Some(self.len()))
  }
}

impl ExactSizeIterator for Iter<'_> {
  fn len(&self) -> usize {
    self.polygon.len().saturating_sub(self.position)
  }
}

/// Boundary edges in loop order, including the closing edge.
pub struct EdgeIter<'a> {
  pub(crate) polygon: &'a Polygon,
  pub(crate) position: usize,
}

impl Iterator for EdgeIter<'_> {
  type Item = LineSegment;
  fn next(&mut self) -> Option<LineSegment> {
    if self.position >= self.polygon.len() {
      return None;
    }
    let edge = self.polygon.edge(self.position);
    self.position += 1;
    Some(edge)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.len(), Some(self.len()))
  }
}

impl ExactSizeIterator for EdgeIter<'_> {
  fn len(&self) -> usize {
    self.polygon.len().saturating_sub(self.position)
  }
}
