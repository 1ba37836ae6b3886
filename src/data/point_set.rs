use num_traits::ToPrimitive;
use serde::Serialize;
use std::fmt::Debug;
use std::ops::Deref;

use super::Point;
use crate::Error;

/// A non-empty set of distinct points.
///
/// Points are deduplicated by exact coordinate equality. Two points that
/// differ in the last bit of a coordinate are distinct. The iteration order is
/// an implementation detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PointSet {
  points: Vec<Point>,
}

impl PointSet {
  /// $O(n \log n)$ Validate and deduplicate a sequence of coordinate pairs.
  ///
  /// Integer and floating point coordinates are promoted to `f64`.
  ///
  /// # Errors
  ///
  /// * [`Error::EmptyInput`] if `points` yields nothing.
  /// * [`Error::InvalidElement`] if a coordinate is NaN, infinite or has no
  ///   `f64` representation.
  ///
  /// ```rust
  /// # use rhull::data::PointSet;
  /// let set = PointSet::new([(1, 1), (1, 1), (0, 2)]).unwrap();
  /// assert_eq!(set.len(), 2);
  /// ```
  pub fn new<I, T>(points: I) -> Result<PointSet, Error>
  where
    I: IntoIterator<Item = (T, T)>,
    T: ToPrimitive + Debug,
  {
    let pts = points
      .into_iter()
      .enumerate()
      .map(|(index, (x, y))| {
        Point::from_coords(&x, &y).ok_or_else(|| Error::InvalidElement {
          index,
          element: format!("({:?}, {:?})", x, y),
        })
      })
      .collect::<Result<Vec<Point>, Error>>()?;
    PointSet::from_points(pts)
  }

  /// Deduplicate points that are already validated.
  pub fn from_points(mut pts: Vec<Point>) -> Result<PointSet, Error> {
    if pts.is_empty() {
      return Err(Error::EmptyInput);
    }
    let total = pts.len();
    pts.sort_unstable_by_key(|pt| (*pt.y_coord(), *pt.x_coord()));
    pts.dedup();
    tracing::debug!(total, unique = pts.len(), "normalized point set");
    Ok(PointSet { points: pts })
  }

  /// $O(1)$ The point with the smallest y-coordinate. Ties are broken by the
  /// smallest x-coordinate.
  pub fn pivot(&self) -> &Point {
    // Sorted by (y, x) and never empty.
    &self.points[0]
  }

  pub fn into_points(self) -> Vec<Point> {
    self.points
  }
}

impl Deref for PointSet {
  type Target = [Point];
  fn deref(&self) -> &[Point] {
    &self.points
  }
}

/// Shorthand for [`PointSet::new`].
pub fn normalize<I, T>(points: I) -> Result<PointSet, Error>
where
  I: IntoIterator<Item = (T, T)>,
  T: ToPrimitive + Debug,
{
  PointSet::new(points)
}
