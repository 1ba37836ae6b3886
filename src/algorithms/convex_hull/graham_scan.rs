use num_traits::ToPrimitive;
use ordered_float::OrderedFloat;
use std::fmt::Debug;

use crate::data::{Hull, Point, PointSet};
use crate::Error;

/// Points ordered counter-clockwise around the pivot.
///
/// The sequence starts with the pivot and is sorted by polar angle about the
/// pivot, with ties broken by increasing distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AngularOrder {
  pub pivot: Point,
  pub sequence: Vec<Point>,
}

/// Convex hull of a set of points using the [Graham scan][wiki].
///
/// $O(n \log n)$
///
/// The hull is listed counter-clockwise starting at the lowest point. When the
/// input is degenerate the hull is a single point or a segment. Of the points
/// lying on a shared ray from the lowest point only the farthest is kept.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if `points` is empty and
/// [`Error::InvalidElement`] if a coordinate is not a finite number.
///
/// # Examples
///
/// ```rust
/// # use rhull::convex_hull;
/// let hull = convex_hull([(0, 0), (1, 1), (2, 2)]).unwrap();
/// assert_eq!(hull.to_pairs(), vec![(0., 0.), (2., 2.)]);
///
/// let hull = convex_hull([(1e6, 1e6), (2e6, 0.), (3e6, 3e6)]).unwrap();
/// assert_eq!(hull.to_pairs(), vec![(2e6, 0.), (3e6, 3e6), (1e6, 1e6)]);
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub fn convex_hull<I, T>(points: I) -> Result<Hull, Error>
where
  I: IntoIterator<Item = (T, T)>,
  T: ToPrimitive + Debug,
{
  let set = PointSet::new(points)?;
  Ok(convex_hull_of(&set))
}

/// Convex hull of a set that has already been normalized.
pub fn convex_hull_of(set: &PointSet) -> Hull {
  let order = sort_by_angle(set.clone());
  let pivot = order.pivot;
  let hull = sweep(farthest_per_ray(order));
  tracing::debug!(
    points = set.len(),
    %pivot,
    vertices = hull.len(),
    "graham scan finished"
  );
  Hull::new_unchecked(hull)
}

/// $O(n \log n)$ Order the points counter-clockwise around the lowest point.
pub fn sort_by_angle(points: PointSet) -> AngularOrder {
  let pivot = *points.pivot();
  let mut pts = points.into_points();
  pts.sort_by_cached_key(|pt| {
    (
      OrderedFloat(pt.angle_from(&pivot)),
      OrderedFloat(pivot.squared_euclidean_distance(pt)),
    )
  });
  AngularOrder {
    pivot,
    sequence: pts,
  }
}

/// $O(n)$ Drop every point that shares its ray from the pivot with a farther
/// point.
///
/// Points on a shared ray are adjacent in an [`AngularOrder`]. Every point lies
/// at an angle in [0, π) from the pivot, so two points are on the same ray
/// exactly when they are colinear with the pivot, and the farther one has the
/// larger `(y, x)`. Colinearity is only trusted when it can be computed
/// without overflow or underflow. Otherwise both points are kept and the sweep
/// decides.
pub fn farthest_per_ray(order: AngularOrder) -> Vec<Point> {
  let AngularOrder { pivot, sequence } = order;
  let mut pts: Vec<Point> = Vec::with_capacity(sequence.len());
  for pt in sequence {
    match pts.last() {
      Some(last) if *last != pivot && shares_ray(&pivot, last, &pt) => {
        if (last.y_coord(), last.x_coord()) < (pt.y_coord(), pt.x_coord()) {
          tracing::trace!(dropped = %last, farther = %pt, "shared ray");
          pts.pop();
          pts.push(pt);
        } else {
          tracing::trace!(dropped = %pt, farther = %last, "shared ray");
        }
      }
      _ => pts.push(pt),
    }
  }
  pts
}

// `p - pivot` and `q - pivot` are parallel. A product that overflows, or
// underflows past the normal range, cannot show that.
fn shares_ray(pivot: &Point, p: &Point, q: &Point) -> bool {
  let (dx1, dy1) = (p.x() - pivot.x(), p.y() - pivot.y());
  let (dx2, dy2) = (q.x() - pivot.x(), q.y() - pivot.y());
  match (exact_enough(dx1, dy2), exact_enough(dy1, dx2)) {
    (Some(a), Some(b)) => a == b,
    _ => false,
  }
}

fn exact_enough(u: f64, v: f64) -> Option<f64> {
  let uv = u * v;
  if uv.is_normal() || u == 0. || v == 0. {
    Some(uv)
  } else {
    None
  }
}

/// $O(n)$ Graham sweep over an angularly sorted sequence.
///
/// Maintains a stack of candidate vertices. Before pushing a point, the top of
/// the stack is popped for as long as it makes a clockwise turn with the point
/// below it and the incoming point. Colinear turns are kept. So are turns
/// whose cross product overflows to NaN: dropping such a point could leave it
/// outside the hull.
///
/// Sequences with fewer than three points are returned unchanged.
pub fn sweep(sequence: Vec<Point>) -> Vec<Point> {
  if sequence.len() <= 2 {
    return sequence;
  }
  let mut stack: Vec<Point> = Vec::with_capacity(sequence.len());
  for pt in sequence {
    while let [.., p1, p2] = stack.as_slice() {
      if !p1.orientation(p2, &pt).is_cw() {
        break;
      }
      tracing::trace!(popped = %p2, next = %pt, "clockwise turn");
      stack.pop();
    }
    stack.push(pt);
  }
  stack
}
