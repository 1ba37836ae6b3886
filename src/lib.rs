//! Planar convex hulls with the Graham scan.
//!
//! ```rust
//! use rhull::convex_hull;
//!
//! let hull = convex_hull([(0, 0), (1, 1), (-1, -1), (2, 3), (-2, -3)]).unwrap();
//! assert_eq!(hull.to_pairs(), vec![(-2., -3.), (1., 1.), (2., 3.), (-1., -1.)]);
//! ```
//!
//! The pipeline has three stages, each producing a fresh value:
//!
//! 1. [`PointSet::new`](data::PointSet::new) validates and deduplicates the input.
//! 2. [`sort_by_angle`](algorithms::convex_hull::graham_scan::sort_by_angle) picks
//!    the pivot and orders the points around it.
//! 3. [`sweep`](algorithms::convex_hull::graham_scan::sweep) discards every point
//!    that makes a clockwise turn.
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]

pub mod algorithms;
pub mod data;
pub mod input;
mod orientation;
pub mod render;

pub use orientation::Orientation;

#[doc(inline)]
pub use algorithms::convex_hull::graham_scan::{convex_hull, convex_hull_of};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
  /// The input is not a sequence of coordinate pairs.
  InvalidInputType,
  /// The input sequence holds no points.
  EmptyInput,
  /// The element at `index` is not a pair of finite numbers.
  InvalidElement { index: usize, element: String },
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InvalidInputType => write!(
        f,
        "Invalid input type, expected a list of (x, y) coordinate pairs"
      ),
      Error::EmptyInput => write!(f, "The list of points is empty"),
      Error::InvalidElement { index, element } => {
        write!(f, "Invalid element at index {}: {}", index, element)
      }
    }
  }
}

impl std::error::Error for Error {}

#[cfg(test)]
pub mod testing;

#[cfg(test)]
mod tests;
