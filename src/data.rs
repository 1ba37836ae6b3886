mod hull;
pub(crate) mod point;
mod point_set;

pub use hull::{Hull, HullShape};
pub use point::{NotFinite, Point};
pub use point_set::{normalize, PointSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
