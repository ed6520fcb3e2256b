#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
  pub x: f64,
  pub z: f64,
}

impl Vector {
  pub const fn new(x: f64, z: f64) -> Vector {
    Vector { x, z }
  }

  pub fn dot(&self, other: &Vector) -> f64 {
    self.x * other.x + self.z * other.z
  }

  pub fn squared_magnitude(&self) -> f64 {
    self.dot(self)
  }
}
