//! Point sets from untyped input.
//!
//! The accepted shape is a JSON array of `[x, y]` pairs where both coordinates
//! are numbers, for example `[[0, 0], [1.5, 2], [-3, 4]]`.
use serde_json::Value;

use crate::data::{Point, PointSet};
use crate::Error;

/// Validate and deduplicate a JSON value.
///
/// # Errors
///
/// * [`Error::InvalidInputType`] if `value` is not an array.
/// * [`Error::EmptyInput`] if the array is empty.
/// * [`Error::InvalidElement`] for the first element that is not a pair of
///   numbers.
///
/// ```rust
/// # use rhull::input::parse_points;
/// # use rhull::Error;
/// let value = serde_json::json!([[1, 2], "string", [3, 4]]);
/// assert!(matches!(parse_points(&value), Err(Error::InvalidElement { index: 1, .. })));
/// ```
pub fn parse_points(value: &Value) -> Result<PointSet, Error> {
  let elements = value.as_array().ok_or(Error::InvalidInputType)?;
  if elements.is_empty() {
    return Err(Error::EmptyInput);
  }
  let pts = elements
    .iter()
    .enumerate()
    .map(|(index, element)| {
      parse_point(element).ok_or_else(|| Error::InvalidElement {
        index,
        element: element.to_string(),
      })
    })
    .collect::<Result<Vec<Point>, Error>>()?;
  PointSet::from_points(pts)
}

/// Parse JSON text and validate it with [`parse_points`].
///
/// Text that is not valid JSON is reported as [`Error::InvalidInputType`].
pub fn from_json_str(text: &str) -> Result<PointSet, Error> {
  let value: Value = serde_json::from_str(text).map_err(|err| {
    tracing::debug!(%err, "input is not JSON");
    Error::InvalidInputType
  })?;
  parse_points(&value)
}

fn parse_point(element: &Value) -> Option<Point> {
  match element.as_array()?.as_slice() {
    [Value::Number(x), Value::Number(y)] => Point::try_new(x.as_f64()?, y.as_f64()?).ok(),
    _ => None,
  }
}
