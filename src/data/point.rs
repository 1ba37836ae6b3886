use num_traits::ToPrimitive;
use ordered_float::NotNan;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Orientation;

/// A point in the plane.
///
/// Coordinates are finite `f64` values. Points compare and hash by value, and
/// `-0.0` is stored as `0.0` so that both spellings of zero name the same
/// point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "[f64; 2]", try_from = "[f64; 2]")]
pub struct Point {
  array: [NotNan<f64>; 2],
}

/// A coordinate that is NaN or infinite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotFinite(pub f64);

impl fmt::Display for NotFinite {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "coordinate {} is not a finite number", self.0)
  }
}

impl std::error::Error for NotFinite {}

fn coordinate(value: f64) -> Result<NotNan<f64>, NotFinite> {
  if !value.is_finite() {
    return Err(NotFinite(value));
  }
  let value = if value == 0. { 0. } else { value };
  NotNan::new(value).map_err(|_| NotFinite(value))
}

// Random sampling in the unit square.
impl Distribution<Point> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
    Point::new(rng.gen(), rng.gen())
  }
}

impl Point {
  /// # Panics
  ///
  /// Panics if either coordinate is NaN or infinite.
  pub fn new(x: f64, y: f64) -> Point {
    match Point::try_new(x, y) {
      Ok(pt) => pt,
      Err(err) => panic!("{}", err),
    }
  }

  pub fn try_new(x: f64, y: f64) -> Result<Point, NotFinite> {
    Ok(Point {
      array: [coordinate(x)?, coordinate(y)?],
    })
  }

  /// Promote a pair of integer or floating point coordinates to a point.
  ///
  /// Returns `None` if a coordinate has no finite `f64` representation.
  /// Large integers are rounded to the nearest `f64`.
  pub fn from_coords<T: ToPrimitive>(x: &T, y: &T) -> Option<Point> {
    Point::try_new(x.to_f64()?, y.to_f64()?).ok()
  }

  pub fn x(&self) -> f64 {
    self.array[0].into_inner()
  }

  pub fn y(&self) -> f64 {
    self.array[1].into_inner()
  }

  pub fn x_coord(&self) -> &NotNan<f64> {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &NotNan<f64> {
    &self.array[1]
  }

  pub fn to_pair(&self) -> (f64, f64) {
    (self.x(), self.y())
  }

  pub fn squared_euclidean_distance(&self, rhs: &Point) -> f64 {
    let dx = self.x() - rhs.x();
    let dy = self.y() - rhs.y();
    dx * dx + dy * dy
  }

  /// Polar angle of `self - origin` in the range (-π, π].
  pub fn angle_from(&self, origin: &Point) -> f64 {
    (self.y() - origin.y()).atan2(self.x() - origin.x())
  }

  pub fn orientation(&self, q: &Point, r: &Point) -> Orientation {
    Orientation::new(self, q, r)
  }
}

impl fmt::Display for Point {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.x(), self.y())
  }
}

impl From<Point> for (f64, f64) {
  fn from(point: Point) -> (f64, f64) {
    point.to_pair()
  }
}

impl From<Point> for [f64; 2] {
  fn from(point: Point) -> [f64; 2] {
    [point.x(), point.y()]
  }
}

impl TryFrom<[f64; 2]> for Point {
  type Error = NotFinite;
  fn try_from([x, y]: [f64; 2]) -> Result<Point, NotFinite> {
    Point::try_new(x, y)
  }
}
