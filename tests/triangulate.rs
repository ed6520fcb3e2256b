mod triangulate {
  use footprint::algorithms::triangulation::{Fallback, Path};
  use footprint::algorithms::{triangulate, Triangulator};
  use footprint::data::{Point, Polygon, Triangle};
  use footprint::{cross_product, Tolerance};

  use approx::assert_relative_eq;
  use proptest::prelude::*;
  use rand::SeedableRng;
  use test_strategy::proptest;

  fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().map(|&pt| Point::from(pt)).collect()
  }

  fn area(points: &[Point], trigs: &[Triangle]) -> f64 {
    trigs.iter().map(|t| t.signed_area(points)).sum()
  }

  fn shoelace(points: &[Point]) -> f64 {
    Polygon::from(points).signed_area().abs()
  }

  #[proptest]
  fn convex_polygons(#[strategy(3..60_usize)] n: usize, seed: u64) {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(seed);
    let p = Polygon::random_convex(n, &mut rng);
    let trigs = triangulate(p.vertices());
    prop_assert_eq!(trigs.len(), n - 2);
    for t in trigs.iter() {
      prop_assert!(t.signed_area(p.vertices()) > 0.0);
    }
    assert_relative_eq!(area(p.vertices(), &trigs), p.signed_area(), max_relative = 1e-6);
  }

  #[proptest]
  fn clockwise_convex_polygons(#[strategy(3..60_usize)] n: usize, seed: u64) {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(seed);
    let mut points = Polygon::random_convex(n, &mut rng).vertices().to_vec();
    points.reverse();
    let trigs = triangulate(&points);
    prop_assert_eq!(trigs.len(), n - 2);
    assert_relative_eq!(area(&points, &trigs), shoelace(&points), max_relative = 1e-6);
  }

  #[test]
  fn fewer_than_three() {
    assert!(triangulate(&[]).is_empty());
    assert!(triangulate(&pts(&[(0.0, 0.0)])).is_empty());
    assert!(triangulate(&pts(&[(0.0, 0.0), (1.0, 1.0)])).is_empty());
  }

  #[test]
  fn single_triangle() {
    let trigs = triangulate(&pts(&[(0.0, 0.0), (2.0, 0.0), (1.0, 2.0)]));
    assert_eq!(trigs, vec![Triangle::new(0, 2, 1)]);
  }

  #[test]
  fn unit_square() {
    let points = pts(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
    let trigs = triangulate(&points);
    assert_eq!(trigs.len(), 2);
    assert_relative_eq!(area(&points, &trigs), 1.0);
  }

  #[test]
  fn duplicate_point() {
    let points = pts(&[
      (0.0, 0.0),
      (3.0, 0.0),
      (3.0005, 0.0002),
      (4.0, 2.0),
      (2.0, 3.5),
      (0.0, 2.0),
    ]);
    let out = Triangulator::default().run(&points);
    assert_eq!(out.path, Path::Simple);
    assert_eq!(out.len(), 3);
    for t in out.triangles.iter() {
      assert!(t.is_valid_for(points.len()));
      assert!(!t.indices().contains(&2));
    }
    let mut deduped = points.clone();
    deduped.remove(2);
    assert_relative_eq!(area(&points, &out.triangles), shoelace(&deduped), max_relative = 1e-9);
  }

  #[test]
  fn duplicates_never_empty_the_result() {
    let trigs = triangulate(&pts(&[(0.0, 0.0), (0.0, 0.0), (1.0, 1.0)]));
    assert_eq!(trigs, vec![Triangle::new(0, 2, 1)]);
    let trigs = triangulate(&pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 0.0), (1.0, 0.0005)]));
    assert_eq!(trigs.len(), 2);
    let trigs = triangulate(&pts(&[(5.0, 5.0); 6]));
    assert_eq!(trigs.len(), 4);
    assert!(trigs.iter().all(|t| t.is_valid_for(6)));
  }

  #[test]
  fn e_shape() {
    let points = pts(&[
      (0.0, 0.0),
      (4.0, 0.0),
      (4.1, 1.0),
      (1.5, 1.2),
      (1.4, 2.0),
      (4.2, 2.2),
      (4.0, 3.2),
      (0.1, 3.0),
    ]);
    assert!(Polygon::from(points.as_slice()).is_complex());
    let trigs = triangulate(&points);
    assert_eq!(trigs.len(), points.len() - 2);
    assert_relative_eq!(area(&points, &trigs), shoelace(&points), max_relative = 1e-9);
  }

  #[test]
  fn self_intersecting_star() {
    let points = pts(&[
      (0.0, 10.0),
      (-5.88, -8.09),
      (9.51, 3.09),
      (-9.51, 3.09),
      (5.88, -8.09),
    ]);
    let out = Triangulator::default().run(&points);
    assert_eq!(out.path, Path::Complex);
    assert!(!out.is_empty());
    assert!(out.triangles.iter().all(|t| t.is_valid_for(points.len())));
  }

  #[test]
  fn rejected_polygons_are_fanned() {
    let points = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (2.0, 2.0), (1.0, 3.0), (0.0, 2.0)]);
    let out = Triangulator::default().run(&points);
    assert!(out.is_degraded());
    assert!(matches!(out.fallbacks[0], Fallback::Rejected(_)));
    assert_eq!(out.len(), 4);
    assert_relative_eq!(area(&points, &out.triangles), shoelace(&points), max_relative = 1e-9);
  }

  #[test]
  fn custom_tolerance() {
    let points = pts(&[(0.0, 0.0), (1.0, 0.0), (1.05, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    let coarse = Triangulator::new(Tolerance::default().with_weld(0.1));
    let out = coarse.run(&points);
    assert_eq!(out.path, Path::Quad);
    assert_eq!(out.len(), 2);
  }

  #[proptest]
  fn ensure_ccw_idempotent(
    #[strategy(proptest::collection::vec((-100..100_i32, -100..100_i32), 3..20))] raw: Vec<(i32, i32)>,
  ) {
    let points: Vec<Point> = raw
      .into_iter()
      .map(|(x, z)| Point::new(f64::from(x), f64::from(z)))
      .collect();
    let mut p = Polygon::from(points);
    p.ensure_ccw();
    prop_assert!(p.signed_area() >= 0.0);
    let once = p.clone();
    p.ensure_ccw();
    prop_assert_eq!(p, once);
  }

  #[proptest]
  fn cross_product_antisymmetric(
    #[strategy(-1e6..1e6_f64)] ax: f64,
    #[strategy(-1e6..1e6_f64)] az: f64,
    #[strategy(-1e6..1e6_f64)] bx: f64,
    #[strategy(-1e6..1e6_f64)] bz: f64,
    #[strategy(-1e6..1e6_f64)] cx: f64,
    #[strategy(-1e6..1e6_f64)] cz: f64,
  ) {
    let (a, b, c) = (Point::new(ax, az), Point::new(bx, bz), Point::new(cx, cz));
    prop_assert_eq!(cross_product(&a, &b, &c), -cross_product(&a, &c, &b));
  }

  #[proptest]
  fn never_panics(
    #[strategy(proptest::collection::vec((-1e3..1e3_f64, -1e3..1e3_f64), 0..25))] raw: Vec<(f64, f64)>,
  ) {
    let points = pts(&raw);
    let trigs = triangulate(&points);
    prop_assert_eq!(trigs.is_empty(), points.len() < 3);
    for t in trigs {
      prop_assert!(t.is_valid_for(points.len()));
    }
  }
}
