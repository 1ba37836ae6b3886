use crate::data::Point;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// The turn is classified by the sign of [`cross`](Orientation::cross). Plain
  /// `f64` arithmetic is used, so nearly colinear triples with large
  /// coordinates may be misclassified. A cross product that overflows to NaN
  /// is reported as [`CoLinear`](Orientation::CoLinear).
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use rhull::data::Point;
  /// # use rhull::Orientation;
  /// let p1 = Point::new(0., 0.);
  /// let p2 = Point::new(0., 1.); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new(0., 2.)).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new(-1., 2.)).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new(1., 2.)).is_cw());
  /// ```
  pub fn new(p1: &Point, p2: &Point, p3: &Point) -> Orientation {
    let cross = Orientation::cross(p1, p2, p3);
    if cross > 0. {
      CounterClockWise
    } else if cross < 0. {
      ClockWise
    } else {
      CoLinear
    }
  }

  /// Cross product of the edges `p1 -> p2` and `p2 -> p3`.
  ///
  /// Positive for a left turn, negative for a right turn and zero when the
  /// three points are colinear.
  pub fn cross(p1: &Point, p2: &Point, p3: &Point) -> f64 {
    (p2.x() - p1.x()) * (p3.y() - p2.y()) - (p2.y() - p1.y()) * (p3.x() - p2.x())
  }

  pub fn is_colinear(self) -> bool {
    self == CoLinear
  }

  pub fn is_ccw(self) -> bool {
    self == CounterClockWise
  }

  pub fn is_cw(self) -> bool {
    self == ClockWise
  }
}
