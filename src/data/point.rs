use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::ops::Sub;

use super::Vector;
use crate::Orientation;

/// A point on the ground plane. The vertical axis is dropped; `z` plays the
/// role of the second planar coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
  pub x: f64,
  pub z: f64,
}

// Random sampling in the unit square.
impl Distribution<Point> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
    Point {
      x: rng.gen(),
      z: rng.gen(),
    }
  }
}

impl Point {
  pub const fn new(x: f64, z: f64) -> Point {
    Point { x, z }
  }

  pub fn squared_euclidean_distance(&self, rhs: &Point) -> f64 {
    (self - rhs).squared_magnitude()
  }

  pub fn euclidean_distance(&self, rhs: &Point) -> f64 {
    self.squared_euclidean_distance(rhs).sqrt()
  }

  /// True if `other` lies strictly within `epsilon` of this point.
  pub fn is_near(&self, other: &Point, epsilon: f64) -> bool {
    self.euclidean_distance(other) < epsilon
  }

  pub fn orientation(&self, q: &Point, r: &Point) -> Orientation {
    Orientation::new(self, q, r)
  }

  pub fn as_array(&self) -> [f64; 2] {
    [self.x, self.z]
  }
}

impl From<[f64; 2]> for Point {
  fn from([x, z]: [f64; 2]) -> Point {
    Point { x, z }
  }
}

impl From<(f64, f64)> for Point {
  fn from((x, z): (f64, f64)) -> Point {
    Point { x, z }
  }
}

impl From<Point> for [f64; 2] {
  fn from(point: Point) -> [f64; 2] {
    point.as_array()
  }
}

// point - point = vector
impl<'a, 'b> Sub<&'a Point> for &'b Point {
  type Output = Vector;

  fn sub(self, other: &'a Point) -> Vector {
    Vector::new(self.x - other.x, self.z - other.z)
  }
}

impl Sub<Point> for Point {
  type Output = Vector;

  fn sub(self, other: Point) -> Vector {
    Sub::sub(&self, &other)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;
  use crate::Orientation::*;

  use proptest::prelude::*;

  proptest! {
    #[test]
    fn distance_is_symmetric(pt1 in any_point(), pt2 in any_point()) {
      prop_assert_eq!(
        pt1.squared_euclidean_distance(&pt2),
        pt2.squared_euclidean_distance(&pt1)
      );
    }

    #[test]
    fn orientation_reverse(pt1 in any_point(), pt2 in any_point(), pt3 in any_point()) {
      let abc = pt1.orientation(&pt2, &pt3);
      let cba = pt3.orientation(&pt2, &pt1);
      prop_assert_eq!(abc, cba.reverse())
    }
  }

  #[test]
  fn nearness_is_strict() {
    let origin = Point::new(0.0, 0.0);
    assert!(origin.is_near(&Point::new(0.0005, 0.0), 0.001));
    assert!(!origin.is_near(&Point::new(0.002, 0.0), 0.001));
  }

  #[test]
  fn conversions() {
    assert_eq!(Point::from([1.0, 2.0]), Point::new(1.0, 2.0));
    assert_eq!(Point::from((1.0, 2.0)), Point::new(1.0, 2.0));
    assert_eq!(<[f64; 2]>::from(Point::new(3.0, 4.0)), [3.0, 4.0]);
  }

  #[test]
  fn unit_1() {
    let origin = Point::new(0.0, 0.0);
    assert_eq!(origin.orientation(&Point::new(1.0, 0.0), &Point::new(1.0, 0.0)), CoLinear);
    assert_eq!(origin.orientation(&Point::new(1.0, 0.0), &Point::new(2.0, 0.0)), CoLinear);
    assert_eq!(
      Point::new(1.0, 0.0).orientation(&Point::new(0.0, 6.0), &Point::new(0.0, 8.0)),
      ClockWise
    );
  }
}
