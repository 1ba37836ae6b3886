// Strategies for points and point sets.
//
// Integer coordinates keep every cross product exact, so properties that
// depend on orientation can be checked without tolerances.
use proptest::collection::vec;
use proptest::prelude::*;
use std::ops::Range;

use crate::data::Point;

fn int_point(range: std::ops::RangeInclusive<i32>) -> impl Strategy<Value = Point> {
  (range.clone(), range).prop_map(|(x, y)| Point::new(f64::from(x), f64::from(y)))
}

/// Points with coordinates in [-1000, 1000].
pub fn any_small() -> impl Strategy<Value = Point> {
  int_point(-1000..=1000)
}

/// Points on a 9x9 grid. Duplicates and colinear triples are common.
pub fn any_grid() -> impl Strategy<Value = Point> {
  int_point(-4..=4)
}

/// Any point with finite coordinates.
pub fn any_finite() -> impl Strategy<Value = Point> {
  (any::<f64>(), any::<f64>())
    .prop_filter_map("Check for non-finite", |(x, y)| Point::try_new(x, y).ok())
}

/// Non-empty point lists that mix a coarse grid with scattered points.
pub fn any_points(len: Range<usize>) -> impl Strategy<Value = Vec<Point>> {
  prop_oneof![vec(any_small(), len.clone()), vec(any_grid(), len)]
}
