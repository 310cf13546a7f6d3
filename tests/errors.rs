use gridbin::{build_grid, Extent, GridError, GridOptions, PointSet, ValueSet};

fn square() -> Vec<f64> {
    vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0]
}

#[test]
fn test_voxel_length_size_mismatch() {
    let coords = square();
    let points = PointSet::new(&coords, 2).unwrap();
    let options = GridOptions::new().voxel_length([1.0, 1.0, 1.0]);

    let err = build_grid(&points, None, &options).unwrap_err();
    assert!(
        matches!(err, GridError::ShapeMismatch { argument: "voxel_length", found: 3, .. }),
        "unexpected error {:?}",
        err
    );
}

#[test]
fn test_fixed_without_dims() {
    let coords = square();
    let points = PointSet::new(&coords, 2).unwrap();
    let options = GridOptions::new().fit_dims(false);

    let err = build_grid(&points, None, &options).unwrap_err();
    assert!(matches!(err, GridError::Configuration { argument: "dims", .. }));
}

#[test]
fn test_values_length_mismatch() {
    let coords = square();
    let points = PointSet::new(&coords, 2).unwrap();
    let raw = [1.0, 2.0, 3.0];
    let values = ValueSet::column(&raw);

    let err = build_grid(&points, Some(&values), &GridOptions::default()).unwrap_err();
    assert!(matches!(err, GridError::ShapeMismatch { argument: "values", found: 3, .. }));
    assert!(err.to_string().contains("4 rows"));
}

#[test]
fn test_dims_and_center_size_mismatch() {
    let coords = square();
    let points = PointSet::new(&coords, 2).unwrap();

    let options = GridOptions::new().fixed([1.0, 2.0, 3.0]);
    let err = build_grid(&points, None, &options).unwrap_err();
    assert!(matches!(err, GridError::ShapeMismatch { argument: "dims", .. }));

    let options = GridOptions::new().fixed(2.0).center(vec![0.0, 0.0, 0.0]);
    let err = build_grid(&points, None, &options).unwrap_err();
    assert!(matches!(err, GridError::ShapeMismatch { argument: "center", found: 3, .. }));
}

#[test]
fn test_non_positive_lengths() {
    let coords = square();
    let points = PointSet::new(&coords, 2).unwrap();

    for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let options = GridOptions::new().voxel_length(bad);
        let err = build_grid(&points, None, &options).unwrap_err();
        assert!(matches!(err, GridError::Configuration { argument: "voxel_length", .. }));
    }

    let options = GridOptions::new().fixed(Extent::PerAxis(vec![2.0, 0.0]));
    let err = build_grid(&points, None, &options).unwrap_err();
    assert!(matches!(err, GridError::Configuration { argument: "dims", .. }));
}

#[test]
fn test_empty_points() {
    let points = PointSet::new(&[], 2).unwrap();

    let err = build_grid(&points, None, &GridOptions::default()).unwrap_err();
    assert!(matches!(err, GridError::ShapeMismatch { argument: "positions", .. }));

    // A fixed box is well defined without any data.
    let (grid, axes) = build_grid(&points, None, &GridOptions::new().fixed(3.0)).unwrap();
    assert_eq!(grid.spatial_shape(), &[3, 3]);
    assert_eq!(grid.totals(), vec![0.0]);
    assert_eq!(axes.len(), 2);
}

#[test]
fn test_malformed_buffers() {
    let coords = [0.0, 1.0, 2.0];
    assert!(matches!(
        PointSet::new(&coords, 2),
        Err(GridError::ShapeMismatch { argument: "positions", found: 3, .. })
    ));
    assert!(matches!(
        ValueSet::new(&coords, 2),
        Err(GridError::ShapeMismatch { argument: "values", found: 3, .. })
    ));
}

#[test]
fn test_grid_too_large_to_allocate() {
    // The range saturates the voxel count of the only axis.
    let points = PointSet::from_points(&[[0.0], [1e300]]);
    let err = build_grid(&points, None, &GridOptions::new().voxel_length(1.0)).unwrap_err();
    assert!(
        matches!(err, GridError::Configuration { argument: "voxel_length", .. }),
        "unexpected error {:?}",
        err
    );

    // Spatial cells fit in usize, but not once multiplied by the properties.
    let coords = [0.0, 0.0, 1e10, 1e9];
    let points = PointSet::new(&coords, 2).unwrap();
    let raw = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    let values = ValueSet::new(&raw, 4).unwrap();
    let err = build_grid(&points, Some(&values), &GridOptions::new().voxel_length(1.0)).unwrap_err();
    assert!(matches!(err, GridError::Configuration { .. }));
}
