use approx::assert_relative_eq;
use gridbin::{build_grid, GridGeometry, GridOptions, PointSet, ValueSet};
use proptest::prelude::*;

/// A flat buffer of `n` points in `dim` dimensions, plus the dimension.
fn cloud() -> impl Strategy<Value = (Vec<f64>, usize)> {
    (1usize..=3, 1usize..60).prop_flat_map(|(dim, n)| {
        (prop::collection::vec(-50.0f64..50.0, dim * n), Just(dim))
    })
}

fn voxel() -> impl Strategy<Value = f64> {
    2.0f64..10.0
}

proptest! {
    #[test]
    fn fitted_grid_counts_every_point((coords, dim) in cloud(), v in voxel()) {
        let points = PointSet::new(&coords, dim).unwrap();
        let (grid, _) = build_grid(&points, None, &GridOptions::new().voxel_length(v)).unwrap();
        prop_assert_eq!(grid.totals()[0], points.len() as f64);
    }

    #[test]
    fn fitted_indices_stay_in_range((coords, dim) in cloud(), v in voxel()) {
        let points = PointSet::new(&coords, dim).unwrap();
        let geometry = GridGeometry::resolve(&points, &GridOptions::new().voxel_length(v)).unwrap();
        for p in points.iter() {
            let index = geometry.voxel_index(p);
            prop_assert!(index.is_some());
            for (i, n) in index.unwrap().into_iter().zip(&geometry.grid_length) {
                prop_assert!(i < *n);
            }
        }
    }

    #[test]
    fn fixed_grid_counts_points_inside_box((coords, dim) in cloud(), v in voxel(), side in 1.0f64..80.0) {
        let points = PointSet::new(&coords, dim).unwrap();
        let center = vec![0.0; dim];
        let options = GridOptions::new().voxel_length(v).fixed(side).center(center);

        let inside = points
            .iter()
            .filter(|p| p.iter().all(|&c| c + side / 2.0 > 0.0 && c + side / 2.0 < side))
            .count();
        let (grid, _) = build_grid(&points, None, &options).unwrap();
        prop_assert_eq!(grid.totals()[0], inside as f64);
    }

    #[test]
    fn density_is_total_over_volume((coords, dim) in cloud(), v in voxel()) {
        let points = PointSet::new(&coords, dim).unwrap();
        let options = GridOptions::new().voxel_length(v);
        let (totals, _) = build_grid(&points, None, &options).unwrap();
        let (density, _) = build_grid(&points, None, &options.clone().density(true)).unwrap();

        let volume = v.powi(dim as i32);
        for (t, d) in totals.as_slice().iter().zip(density.as_slice()) {
            assert_relative_eq!(*d, *t / volume, max_relative = 1e-12);
        }
    }

    #[test]
    fn values_sum_is_conserved((coords, dim) in cloud(), v in voxel()) {
        let points = PointSet::new(&coords, dim).unwrap();
        let raw: Vec<f64> = (0..points.len() * 2).map(|i| i as f64).collect();
        let values = ValueSet::new(&raw, 2).unwrap();

        let (grid, _) = build_grid(&points, Some(&values), &GridOptions::new().voxel_length(v)).unwrap();
        let expected_even: f64 = raw.iter().step_by(2).sum();
        let expected_odd: f64 = raw.iter().skip(1).step_by(2).sum();
        let totals = grid.totals();
        prop_assert_eq!(grid.properties(), 2);
        assert_relative_eq!(totals[0], expected_even, max_relative = 1e-12);
        assert_relative_eq!(totals[1], expected_odd, max_relative = 1e-12);
    }
}
