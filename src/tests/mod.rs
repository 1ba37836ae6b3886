#[cfg(test)]
mod tests {
  use crate::data::*;
  use crate::testing::*;
  use crate::*;

  use proptest::prelude::*;
  use std::collections::BTreeSet;
  use test_strategy::proptest;

  fn hull_of(pts: &[Point]) -> Hull {
    convex_hull(pts.iter().map(Point::to_pair)).unwrap()
  }

  // Andrew's monotone chain, keeping only strictly convex corners.
  fn monotone_chain(pts: &[Point]) -> BTreeSet<Point> {
    let mut pts: Vec<Point> = pts.to_vec();
    pts.sort();
    pts.dedup();
    if pts.len() < 3 {
      return pts.into_iter().collect();
    }
    let mut chain: Vec<Point> = Vec::new();
    for pass in 0..2 {
      let start = chain.len();
      for pt in pts.iter() {
        while chain.len() >= start + 2
          && !chain[chain.len() - 2]
            .orientation(&chain[chain.len() - 1], pt)
            .is_ccw()
        {
          chain.pop();
        }
        chain.push(*pt);
      }
      chain.pop();
      if pass == 0 {
        pts.reverse();
      }
    }
    chain.into_iter().collect()
  }

  // Hull vertices where the boundary actually turns.
  fn corners(hull: &Hull) -> BTreeSet<Point> {
    let n = hull.len();
    if n < 3 {
      return hull.iter().copied().collect();
    }
    (0..n)
      .filter(|&i| {
        let prev = &hull[(i + n - 1) % n];
        let next = &hull[(i + 1) % n];
        prev.orientation(&hull[i], next).is_ccw()
      })
      .map(|i| hull[i])
      .collect()
  }

  #[proptest]
  fn hull_is_not_empty(#[strategy(any_points(1..60))] pts: Vec<Point>) {
    prop_assert!(!hull_of(&pts).is_empty());
  }

  #[proptest]
  fn hull_is_subset(#[strategy(any_points(1..60))] pts: Vec<Point>) {
    for pt in hull_of(&pts).iter() {
      prop_assert!(pts.contains(pt));
    }
  }

  #[proptest]
  fn hull_has_no_duplicates(#[strategy(any_points(1..60))] pts: Vec<Point>) {
    let hull = hull_of(&pts);
    let unique: BTreeSet<&Point> = hull.iter().collect();
    prop_assert_eq!(unique.len(), hull.len());
  }

  #[proptest]
  fn hull_encloses_input(#[strategy(any_points(1..60))] pts: Vec<Point>) {
    let hull = hull_of(&pts);
    for pt in pts.iter() {
      prop_assert_ne!(hull.locate(pt), PointLocation::Outside, "{} escapes {:?}", pt, hull);
    }
  }

  #[proptest]
  fn hull_is_convex(#[strategy(any_points(1..60))] pts: Vec<Point>) {
    prop_assert!(hull_of(&pts).is_convex());
  }

  #[proptest]
  fn hull_starts_at_pivot(#[strategy(any_points(1..60))] pts: Vec<Point>) {
    let hull = hull_of(&pts);
    let lowest = pts.iter().min_by_key(|pt| (*pt.y_coord(), *pt.x_coord())).unwrap();
    prop_assert_eq!(&hull[0], lowest);
  }

  #[proptest]
  fn hull_is_idempotent(#[strategy(any_points(1..60))] pts: Vec<Point>) {
    let hull = hull_of(&pts);
    prop_assert_eq!(hull_of(&hull), hull);
  }

  #[proptest]
  fn hull_ignores_input_order(#[strategy(any_points(1..60))] pts: Vec<Point>) {
    let mut rev = pts.clone();
    rev.reverse();
    prop_assert_eq!(hull_of(&pts), hull_of(&rev));
  }

  #[proptest]
  fn hull_has_one_vertex_per_ray(#[strategy(any_points(1..60))] pts: Vec<Point>) {
    let hull = hull_of(&pts);
    let pivot = hull[0];
    for pair in hull[1..].windows(2) {
      prop_assert!(!pivot.orientation(&pair[0], &pair[1]).is_colinear());
    }
  }

  #[proptest]
  fn hull_corners_match_monotone_chain(#[strategy(any_points(1..60))] pts: Vec<Point>) {
    let hull = hull_of(&pts);
    prop_assert_eq!(corners(&hull), monotone_chain(&pts));
  }

  #[test]
  fn monotone_chain_square() {
    let pts: Vec<Point> = [(0., 0.), (2., 0.), (2., 1.), (2., 2.), (0., 2.), (1., 1.)]
      .iter()
      .map(|&(x, y)| Point::new(x, y))
      .collect();
    let expected: BTreeSet<Point> = [(0., 0.), (2., 0.), (2., 2.), (0., 2.)]
      .iter()
      .map(|&(x, y)| Point::new(x, y))
      .collect();
    assert_eq!(monotone_chain(&pts), expected);
    assert_eq!(corners(&hull_of(&pts)), expected);
  }
}
