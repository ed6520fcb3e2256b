// This module contains strategies and fixtures for:
//  * points
//  * arbitrary point loops (possibly degenerate or self-intersecting)
//  * convex polygons
use crate::data::{Point, Polygon};

use core::ops::Range;
use proptest::collection::*;
use proptest::prelude::*;
use rand::SeedableRng;

// A concave comb: a rectangle with a notch cut in from the right.
pub const E_SHAPE: [(f64, f64); 8] = [
  (0.0, 0.0),
  (4.0, 0.0),
  (4.1, 1.0),
  (1.5, 1.2),
  (1.4, 2.0),
  (4.2, 2.2),
  (4.0, 3.2),
  (0.1, 3.0),
];

pub const BOWTIE: [(f64, f64); 4] = [(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)];

// Pentagram traced through every other vertex of a regular pentagon.
pub const STAR: [(f64, f64); 5] = [
  (0.0, 10.0),
  (-5.88, -8.09),
  (9.51, 3.09),
  (-9.51, 3.09),
  (5.88, -8.09),
];

pub fn points(pts: &[(f64, f64)]) -> Vec<Point> {
  pts.iter().map(|&pt| Point::from(pt)).collect()
}

///////////////////////////////////////////////////////////////////////////////
// Arbitrary point

// Coordinates sit on a quarter-unit grid in [-1000, 1000). Every product and
// short sum of them is exact in f64, which keeps area comparisons honest.
pub fn any_point() -> impl Strategy<Value = Point> {
  (-4000..4000_i32, -4000..4000_i32)
    .prop_map(|(x, z)| Point::new(f64::from(x) / 4.0, f64::from(z) / 4.0))
}

///////////////////////////////////////////////////////////////////////////////
// Arbitrary loops

pub fn any_loop(size: Range<usize>) -> impl Strategy<Value = Polygon> {
  vec(any_point(), size).prop_map(Polygon::new_unchecked)
}

///////////////////////////////////////////////////////////////////////////////
// Arbitrary convex polygons

pub fn any_convex(size: Range<usize>) -> impl Strategy<Value = Polygon> {
  (size, any::<u64>()).prop_map(|(n, seed)| {
    let rng = &mut rand::rngs::SmallRng::seed_from_u64(seed);
    Polygon::random_convex(n, rng)
  })
}
