mod graham_scan {
  use rhull::data::*;
  use rhull::input::*;
  use rhull::*;

  use serde_json::json;

  #[test]
  fn one_point() -> Result<(), Error> {
    assert_eq!(convex_hull([(0, 0)])?.to_pairs(), vec![(0., 0.)]);
    Ok(())
  }

  #[test]
  fn two_points() -> Result<(), Error> {
    assert_eq!(
      convex_hull([(0, 0), (1, 1)])?.to_pairs(),
      vec![(0., 0.), (1., 1.)]
    );
    Ok(())
  }

  #[test]
  fn colinear() -> Result<(), Error> {
    assert_eq!(
      convex_hull([(0, 0), (1, 1), (2, 2)])?.to_pairs(),
      vec![(0., 0.), (2., 2.)]
    );
    Ok(())
  }

  #[test]
  fn identical_points() -> Result<(), Error> {
    assert_eq!(
      convex_hull([(1, 1), (1, 1), (1, 1)])?.to_pairs(),
      vec![(1., 1.)]
    );
    Ok(())
  }

  #[test]
  fn all_quadrants() -> Result<(), Error> {
    let hull = convex_hull([(0, 0), (1, 1), (-1, -1), (2, 3), (-2, -3)])?;
    assert_eq!(
      hull.to_pairs(),
      vec![(-2., -3.), (1., 1.), (2., 3.), (-1., -1.)]
    );
    assert_eq!(hull.shape(), HullShape::Polygon(4));
    Ok(())
  }

  #[test]
  fn large_coordinates() -> Result<(), Error> {
    let hull = convex_hull([(1000000, 1000000), (2000000, 0), (3000000, 3000000)])?;
    assert_eq!(
      hull.to_pairs(),
      vec![(2000000., 0.), (3000000., 3000000.), (1000000., 1000000.)]
    );
    Ok(())
  }

  #[test]
  fn hull_of_hull() -> Result<(), Error> {
    let hull = convex_hull([(0, 0), (4, 0), (1, 1), (4, 4), (0, 4), (2, 3)])?;
    let again = convex_hull(hull.to_pairs())?;
    assert_eq!(hull, again);
    Ok(())
  }

  #[test]
  fn normalized_then_hull() -> Result<(), Error> {
    let set = normalize([(3, 0), (0, 0), (3, 0), (0, 3), (1, 1)])?;
    assert_eq!(set.len(), 4);
    let hull = convex_hull_of(&set);
    assert_eq!(hull.to_pairs(), vec![(0., 0.), (3., 0.), (0., 3.)]);
    Ok(())
  }

  #[test]
  fn empty_list() {
    let empty: Vec<(f64, f64)> = Vec::new();
    assert_eq!(convex_hull(empty), Err(Error::EmptyInput));
    assert_eq!(parse_points(&json!([])), Err(Error::EmptyInput));
  }

  #[test]
  fn not_a_list() {
    assert_eq!(parse_points(&json!("string")), Err(Error::InvalidInputType));
    assert_eq!(from_json_str("\"string\""), Err(Error::InvalidInputType));
  }

  #[test]
  fn invalid_element() {
    let err = parse_points(&json!([[1, 2], "string", [3, 4]])).unwrap_err();
    assert_eq!(
      err,
      Error::InvalidElement {
        index: 1,
        element: "\"string\"".to_string()
      }
    );
    assert_eq!(err.to_string(), "Invalid element at index 1: \"string\"");
  }

  #[test]
  fn json_pipeline() -> Result<(), Error> {
    let set = from_json_str("[[0, 0], [2, 0], [1, 0.5], [2, 2], [0, 2], [1, 1]]")?;
    let hull = convex_hull_of(&set);
    assert_eq!(
      hull.describe(),
      "Convex hull: 4-sided polygon\nCoordinates: (0, 0), (2, 0), (2, 2), (0, 2)"
    );
    assert_eq!(
      serde_json::to_value(&hull).unwrap(),
      json!([[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]])
    );
    Ok(())
  }

  #[test]
  fn independent_calls_in_parallel() -> Result<(), Error> {
    let sizes = [1, 3, 4, 5];
    let handles: Vec<_> = sizes
      .iter()
      .map(|&k: &i32| std::thread::spawn(move || convex_hull([(0, 0), (k, 0), (0, k), (1, 1)])))
      .collect();
    for (k, handle) in sizes.iter().zip(handles) {
      let hull = handle.join().unwrap()?;
      if *k == 1 {
        assert_eq!(hull.to_pairs(), vec![(0., 0.), (1., 0.), (1., 1.), (0., 1.)]);
      } else {
        // (1,1) is strictly inside the triangle.
        assert_eq!(hull.len(), 3);
      }
    }
    Ok(())
  }
}
