use serde::Serialize;
use std::fmt;
use std::ops::Deref;

use super::{Point, PointLocation};
use crate::Orientation;

/// Convex hull of a point set.
///
/// Vertices are listed counter-clockwise starting at the lowest point (ties
/// broken by the smallest x-coordinate). A hull with one vertex is a point and
/// a hull with two vertices is a segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Hull {
  points: Vec<Point>,
}

/// What kind of figure a [`Hull`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HullShape {
  Point,
  Segment,
  /// A polygon with the given number of vertices.
  Polygon(usize),
}

impl fmt::Display for HullShape {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      HullShape::Point => write!(f, "point"),
      HullShape::Segment => write!(f, "segment"),
      HullShape::Polygon(n) => write!(f, "{}-sided polygon", n),
    }
  }
}

impl Hull {
  /// $O(1)$ Assume that `points` are in convex position and ordered
  /// counter-clockwise. See [`Hull::is_convex`].
  pub fn new_unchecked(points: Vec<Point>) -> Hull {
    Hull { points }
  }

  pub fn points(&self) -> &[Point] {
    &self.points
  }

  pub fn to_pairs(&self) -> Vec<(f64, f64)> {
    self.points.iter().map(Point::to_pair).collect()
  }

  pub fn shape(&self) -> HullShape {
    match self.points.len() {
      1 => HullShape::Point,
      2 => HullShape::Segment,
      n => HullShape::Polygon(n),
    }
  }

  /// $O(n)$ Check that no three consecutive vertices, taken cyclically, make
  /// a clockwise turn.
  pub fn is_convex(&self) -> bool {
    let n = self.points.len();
    if n < 3 {
      return true;
    }
    (0..n).all(|i| {
      let p1 = &self.points[i];
      let p2 = &self.points[(i + 1) % n];
      let p3 = &self.points[(i + 2) % n];
      !p1.orientation(p2, p3).is_cw()
    })
  }

  /// $O(n)$
  pub fn locate(&self, pt: &Point) -> PointLocation {
    match self.points.as_slice() {
      [] => PointLocation::Outside,
      [p] if p == pt => PointLocation::OnBoundary,
      [_] => PointLocation::Outside,
      [a, b] => {
        let within = |lo: f64, hi: f64, v: f64| lo.min(hi) <= v && v <= lo.max(hi);
        if a.orientation(b, pt).is_colinear()
          && within(a.x(), b.x(), pt.x())
          && within(a.y(), b.y(), pt.y())
        {
          PointLocation::OnBoundary
        } else {
          PointLocation::Outside
        }
      }
      points => {
        let n = points.len();
        let mut location = PointLocation::Inside;
        for i in 0..n {
          match Orientation::new(&points[i], &points[(i + 1) % n], pt) {
            Orientation::ClockWise => return PointLocation::Outside,
            Orientation::CoLinear => location = PointLocation::OnBoundary,
            Orientation::CounterClockWise => {}
          }
        }
        location
      }
    }
  }

  /// Human readable summary: the kind of figure followed by its vertices.
  pub fn describe(&self) -> String {
    self.to_string()
  }
}

impl fmt::Display for Hull {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "Convex hull: {}", self.shape())?;
    write!(f, "Coordinates: ")?;
    for (i, pt) in self.points.iter().enumerate() {
      if i > 0 {
        write!(f, ", ")?;
      }
      write!(f, "{}", pt)?;
    }
    Ok(())
  }
}

impl Deref for Hull {
  type Target = [Point];
  fn deref(&self) -> &[Point] {
    &self.points
  }
}
