use rand::Rng;
use std::f64::consts::TAU;

use crate::data::Point;

use super::Polygon;

const RADIUS: f64 = 100.0;

impl Polygon {
  /// $O(n)$ Sample a strictly convex, counter-clockwise polygon.
  ///
  /// Vertices lie on a circle of radius 100 around the origin. Each one is
  /// jittered inside its own angular slot, so neighbouring vertices are at
  /// least half a slot apart and no corner is close to collinear.
  ///
  /// ```rust
  /// # use footprint::data::Polygon;
  /// let p = Polygon::random_convex(12, &mut rand::thread_rng());
  /// assert_eq!(p.len(), 12);
  /// assert!(p.validate().is_ok());
  /// ```
  pub fn random_convex<R>(n: usize, rng: &mut R) -> Polygon
  where
    R: Rng + ?Sized,
  {
    let n = n.max(3);
    let slot = TAU / n as f64;
    let offset = rng.gen_range(0.0..TAU);
    let vertices = (0..n)
      .map(|k| {
        let angle = offset + (k as f64 + rng.gen_range(0.0..0.5)) * slot;
        Point::new(RADIUS * angle.cos(), RADIUS * angle.sin())
      })
      .collect();
    Polygon::new_unchecked(vertices)
  }
}
