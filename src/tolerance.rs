pub(crate) const SNAP: f64 = 1e-10;

/// Every epsilon used by the geometric predicates.
///
/// Snapping works on raw cross products and is tiny. Welding and validation
/// work on user-drawn coordinates and are much coarser.
///
/// ```rust
/// use footprint::Tolerance;
/// let tol = Tolerance::default().with_weld(0.01);
/// assert_eq!(tol.weld, 0.01);
/// assert_eq!(tol.snap, 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerance {
  /// Cross products with a smaller magnitude are snapped to zero.
  pub snap: f64,
  /// Slack for the barycentric point-in-triangle test. Also the smallest
  /// barycentric denominator considered non-degenerate.
  pub containment: f64,
  /// Segment pairs with a smaller determinant are treated as parallel.
  pub parallel: f64,
  /// Points closer than this are duplicates.
  pub weld: f64,
  /// Vertices whose cross product with their neighbours is smaller than this
  /// are collinear for validation and cleanup.
  pub collinear: f64,
  /// How far below zero a cross product may go and still count as a convex
  /// corner in the relaxed and advanced ear tests.
  pub relaxed_convexity: f64,
}

impl Default for Tolerance {
  fn default() -> Self {
    Tolerance {
      snap: SNAP,
      containment: 1e-4,
      parallel: 1e-4,
      weld: 1e-3,
      collinear: 1e-3,
      relaxed_convexity: 1e-3,
    }
  }
}

impl Tolerance {
  #[must_use]
  pub fn with_snap(mut self, snap: f64) -> Self {
    self.snap = snap;
    self
  }

  #[must_use]
  pub fn with_containment(mut self, containment: f64) -> Self {
    self.containment = containment;
    self
  }

  #[must_use]
  pub fn with_parallel(mut self, parallel: f64) -> Self {
    self.parallel = parallel;
    self
  }

  #[must_use]
  pub fn with_weld(mut self, weld: f64) -> Self {
    self.weld = weld;
    self
  }

  #[must_use]
  pub fn with_collinear(mut self, collinear: f64) -> Self {
    self.collinear = collinear;
    self
  }

  #[must_use]
  pub fn with_relaxed_convexity(mut self, relaxed_convexity: f64) -> Self {
    self.relaxed_convexity = relaxed_convexity;
    self
  }
}
