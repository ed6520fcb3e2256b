use super::{fan, Fallback, Triangulation};
use crate::data::{Polygon, Triangle, TriangleView};
use crate::orientation::snapped_cross_product;
use crate::Tolerance;

// Ear clipping over a polygon's loop order.
//
// Vertices are addressed by their position in `polygon.order()` and kept in a
// doubly linked list. Clipping an ear unlinks its position; nothing is
// shifted, so scanning and removal never interfere.
//
// Scan the remaining vertices starting at the head:
//   If the vertex is an ear:
//     Emit (prev, next, ear) and unlink the ear.
//     Rescan from the head.
// Stop at three vertices and emit the last triangle.

/// Standard ear clipping for validated, counter-clockwise polygons.
///
/// An ear needs a strictly positive cross product. When a full scan finds
/// none, a nearly-flat ear (cross product above `-relaxed_convexity`) is
/// accepted instead. If that fails as well, the remaining vertices are fanned
/// from the head of the list. At most `2n` ears are attempted.
pub fn earclip(polygon: &Polygon, tolerance: &Tolerance, out: &mut Triangulation) {
  let n = polygon.len();
  if n < 3 {
    return;
  }
  let strict = |cross: f64| cross > 0.0;
  let relaxed = |cross: f64| cross >= -tolerance.relaxed_convexity;

  let mut vertices = List::new(n);
  let mut iterations = 0;
  while vertices.len() > 3 && iterations < 2 * n {
    iterations += 1;
    let ear = match find_ear(polygon, &vertices, tolerance, strict) {
      Some(ear) => ear,
      None => match find_ear(polygon, &vertices, tolerance, relaxed) {
        Some(ear) => {
          out.engage(Fallback::RelaxedEar, n);
          ear
        }
        None => break,
      },
    };
    clip(polygon, &mut vertices, ear, out);
  }
  finish(polygon, &vertices, vertices.head(), n, out);
}

/// Ear clipping for concave or self-intersecting polygons.
///
/// Every ear is tested with the relaxed convexity threshold. After `3n`
/// attempts, or as soon as no ear can be found, the remaining vertices are
/// fanned from the middle of the list.
pub fn earclip_advanced(polygon: &Polygon, tolerance: &Tolerance, out: &mut Triangulation) {
  let n = polygon.len();
  if n < 3 {
    return;
  }
  let relaxed = |cross: f64| cross >= -tolerance.relaxed_convexity;

  let mut vertices = List::new(n);
  let mut iterations = 0;
  while vertices.len() > 3 && iterations < 3 * n {
    iterations += 1;
    match find_ear(polygon, &vertices, tolerance, relaxed) {
      Some(ear) => clip(polygon, &mut vertices, ear, out),
      None => break,
    }
  }
  let middle = vertices.iter().nth(vertices.len() / 2).unwrap_or(vertices.head());
  finish(polygon, &vertices, middle, n, out);
}

fn clip(polygon: &Polygon, vertices: &mut List, ear: usize, out: &mut Triangulation) {
  let prev = vertices.prev(ear);
  let next = vertices.next(ear);
  out.push(Triangle::new(prev, next, ear).remap(polygon.order()));
  vertices.delete(ear);
}

// Emit the last triangle, or fan whatever is left around `apex`.
fn finish(polygon: &Polygon, vertices: &List, apex: usize, n: usize, out: &mut Triangulation) {
  match vertices.len() {
    0..=2 => {}
    3 => {
      let a = vertices.head();
      let b = vertices.next(a);
      let c = vertices.next(b);
      out.push(Triangle::new(a, c, b).remap(polygon.order()));
    }
    _ => {
      out.engage(Fallback::ForcedFan, n);
      let ring: Vec<usize> = vertices.iter().map(|pos| polygon.order()[pos]).collect();
      let apex = vertices.iter().position(|pos| pos == apex).unwrap_or(0);
      fan::fan(&ring, apex, out);
    }
  }
}

fn find_ear<F>(polygon: &Polygon, vertices: &List, tolerance: &Tolerance, convex: F) -> Option<usize>
where
  F: Fn(f64) -> bool,
{
  vertices.iter().find(|&curr| {
    let prev = vertices.prev(curr);
    let next = vertices.next(curr);
    is_ear(polygon, vertices, tolerance, &convex, prev, curr, next)
  })
}

fn is_ear<F>(
  polygon: &Polygon,
  vertices: &List,
  tolerance: &Tolerance,
  convex: &F,
  a: usize,
  b: usize,
  c: usize,
) -> bool
where
  F: Fn(f64) -> bool,
{
  let (pa, pb, pc) = (polygon.point(a), polygon.point(b), polygon.point(c));
  if !convex(snapped_cross_product(pa, pb, pc, tolerance.snap)) {
    return false;
  }
  let trig = TriangleView::new_unchecked([pa, pb, pc]);
  let mut focus = vertices.next(c);
  while focus != a {
    if trig.contains(polygon.point(focus), tolerance.containment) {
      return false;
    }
    focus = vertices.next(focus);
  }
  true
}


///////////////////////////////////////////////////////////////////////////////
// Linked List that supports deletions

struct List {
  prev: Vec<usize>,
  next: Vec<usize>,
  head: usize,
  len: usize,
}

impl List {
  fn new(size: usize) -> List {
    let mut prev = Vec::with_capacity(size);
    let mut next = Vec::with_capacity(size);
    prev.resize(size, 0);
    next.resize(size, 0);
    for i in 0..size {
      prev[(i + 1) % size] = i;
      next[i] = (i + 1) % size;
    }
    List {
      prev,
      next,
      head: 0,
      len: size,
    }
  }

  fn len(&self) -> usize {
    self.len
  }

  fn head(&self) -> usize {
    self.head
  }

  fn prev(&self, vertex: usize) -> usize {
    self.prev[vertex]
  }

  fn next(&self, vertex: usize) -> usize {
    self.next[vertex]
  }

  fn delete(&mut self, vertex: usize) {
    let prev = self.prev[vertex];
    let next = self.next[vertex];
    self.next[prev] = next;
    self.prev[next] = prev;
    if self.head == vertex {
      self.head = next;
    }
    self.len -= 1;
  }

  // Remaining vertices, starting at the head.
  fn iter(&self) -> impl Iterator<Item = usize> + '_ {
    let mut focus = self.head;
    (0..self.len).map(move |_| {
      let out = focus;
      focus = self.next[focus];
      out
    })
  }
}
