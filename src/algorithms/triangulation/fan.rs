use super::Triangulation;
use crate::data::Triangle;

/// Connect `ring[apex]` to every edge of the ring that does not touch it.
///
/// `ring` holds point indices in counter-clockwise loop order. Triangles are
/// emitted with the same up-facing winding as clipped ears. The fan always
/// produces `ring.len() - 2` triangles, but on non-convex rings some of them
/// overlap or hang outside the loop.
pub fn fan(ring: &[usize], apex: usize, out: &mut Triangulation) {
  let n = ring.len();
  if n < 3 {
    return;
  }
  let a = ring[apex % n];
  for i in 1..n - 1 {
    let b = ring[(apex + i) % n];
    let c = ring[(apex + i + 1) % n];
    out.push(Triangle::new(a, c, b));
  }
}
