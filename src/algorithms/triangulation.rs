//! Footprint triangulation.
//!
//! [`Triangulator::run`] picks one of several strategies depending on the
//! shape of the input:
//!
//! * three points become a single triangle,
//! * a convex quad is split along its first diagonal,
//! * concave or self-intersecting loops go through [`decompose`] and then a
//!   permissive ear clipper that ends in a forced fan if it gets stuck,
//! * everything else is validated and ear clipped, falling back to a relaxed
//!   ear test and finally to a fan.
//!
//! None of these ever fail. Degraded results are reported through
//! [`Triangulation::fallbacks`] and logged with `tracing` at debug level.
use crate::data::{Point, Polygon, Triangle};
use crate::{Error, Tolerance};

pub mod earclip;
pub mod fan;

pub trait Triangulate {
  type Iter: Iterator<Item = Triangle>;
  fn triangulate(self) -> Self::Iter;
}

impl<'a> Triangulate for &'a Polygon {
  type Iter = std::vec::IntoIter<Triangle>;
  fn triangulate(self) -> Self::Iter {
    Triangulator::default()
      .run_polygon(self.clone())
      .triangles
      .into_iter()
  }
}

/// Which strategy produced a [`Triangulation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Path {
  /// Fewer than three input points.
  Insufficient,
  Triangle,
  /// Fixed split of a convex quad.
  Quad,
  /// Validated ear clipping of a convex loop.
  Simple,
  /// Concave or self-intersecting loop.
  Complex,
}

/// A degradation that kicked in while triangulating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fallback {
  /// Validation failed; the loop was fanned from its first vertex.
  Rejected(Error),
  /// No strictly convex ear was found and a nearly-flat one was clipped.
  RelaxedEar,
  /// Ear clipping stalled and the remaining vertices were fanned.
  ForcedFan,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangulation {
  pub triangles: Vec<Triangle>,
  pub path: Path,
  /// Each fallback appears at most once, in the order it first engaged.
  pub fallbacks: Vec<Fallback>,
}

impl Triangulation {
  fn new(path: Path, vertices: usize) -> Triangulation {
    tracing::trace!(?path, vertices, "triangulating footprint");
    Triangulation {
      triangles: Vec::with_capacity(vertices.saturating_sub(2)),
      path,
      fallbacks: Vec::new(),
    }
  }

  pub(crate) fn push(&mut self, triangle: Triangle) {
    self.triangles.push(triangle);
  }

  pub(crate) fn engage(&mut self, fallback: Fallback, vertices: usize) {
    if !self.fallbacks.contains(&fallback) {
      tracing::debug!(?fallback, path = ?self.path, vertices, "triangulation fallback engaged");
      self.fallbacks.push(fallback);
    }
  }

  pub fn is_degraded(&self) -> bool {
    !self.fallbacks.is_empty()
  }

  pub fn len(&self) -> usize {
    self.triangles.len()
  }

  pub fn is_empty(&self) -> bool {
    self.triangles.is_empty()
  }

  /// Sum of [`Triangle::signed_area`] over all triangles.
  pub fn area(&self, points: &[Point]) -> f64 {
    self.triangles.iter().map(|t| t.signed_area(points)).sum()
  }
}

impl From<Triangulation> for Vec<Triangle> {
  fn from(triangulation: Triangulation) -> Vec<Triangle> {
    triangulation.triangles
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Triangulator {
  tolerance: Tolerance,
}

impl Triangulator {
  pub fn new(tolerance: Tolerance) -> Triangulator {
    Triangulator { tolerance }
  }

  pub fn tolerance(&self) -> &Tolerance {
    &self.tolerance
  }

  /// Triangulate a loop of points. Indices in the result refer to `points`.
  pub fn run(&self, points: &[Point]) -> Triangulation {
    self.run_polygon(Polygon::from(points))
  }

  /// Triangulate the loop described by `polygon.order()`. Indices in the
  /// result refer to `polygon.vertices()`.
  pub fn run_polygon(&self, mut polygon: Polygon) -> Triangulation {
    let tolerance = &self.tolerance;
    if polygon.len() < 3 {
      return Triangulation::new(Path::Insufficient, polygon.len());
    }
    let unwelded = polygon.clone();
    polygon.weld(tolerance);
    if polygon.len() < 3 {
      return degenerate(unwelded);
    }
    polygon.ensure_ccw();

    let n = polygon.len();
    let order = polygon.order();
    if n == 3 {
      let mut out = Triangulation::new(Path::Triangle, n);
      out.push(Triangle::new(0, 2, 1).remap(order));
      return out;
    }

    if polygon.is_complex_with(tolerance) {
      let mut out = Triangulation::new(Path::Complex, n);
      for piece in decompose(&polygon) {
        earclip::earclip_advanced(&piece, tolerance, &mut out);
      }
      return out;
    }

    if n == 4 {
      let mut out = Triangulation::new(Path::Quad, n);
      out.push(Triangle::new(0, 2, 1).remap(order));
      out.push(Triangle::new(0, 3, 2).remap(order));
      return out;
    }

    let mut out = Triangulation::new(Path::Simple, n);
    match polygon.validate_with(tolerance) {
      Ok(()) => earclip::earclip(&polygon, tolerance, &mut out),
      Err(err) => {
        out.engage(Fallback::Rejected(err), n);
        fan::fan(order, 0, &mut out);
      }
    }
    out
  }
}

// Welding left fewer than three points. Triangulate the raw loop instead so
// three or more input points always produce triangles.
fn degenerate(mut polygon: Polygon) -> Triangulation {
  polygon.ensure_ccw();
  let n = polygon.len();
  let order = polygon.order();
  let path = if n == 3 { Path::Triangle } else { Path::Simple };
  let mut out = Triangulation::new(path, n);
  out.engage(Fallback::Rejected(Error::DuplicatePoints), n);
  fan::fan(order, 0, &mut out);
  out
}

/// Triangulate a loop of points with the default [`Tolerance`].
///
/// Returns an empty list for fewer than three points and never fails
/// otherwise.
///
/// ```rust
/// # use footprint::algorithms::triangulate;
/// # use footprint::data::{Point, Triangle};
/// let pts = [Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(1.0, 2.0)];
/// assert_eq!(triangulate(&pts), vec![Triangle::new(0, 2, 1)]);
/// assert!(triangulate(&pts[..2]).is_empty());
/// ```
pub fn triangulate(points: &[Point]) -> Vec<Triangle> {
  Triangulator::default().run(points).triangles
}

/// Split a complex polygon into simpler pieces.
///
/// Currently the identity: the polygon comes back whole and the advanced ear
/// clipper absorbs the complexity.
// TODO: monotone partitioning so self-intersecting loops stop falling back
// to forced fans.
pub fn decompose(polygon: &Polygon) -> Vec<Polygon> {
  vec![polygon.clone()]
}
