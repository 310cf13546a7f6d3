use crate::accumulate::{Accumulator, SerialAccumulator};
use crate::axes::Axis;
use crate::error::{GridError, GridResult};
use crate::geometry::{Framing, GridGeometry};
use crate::grid::Grid;
use crate::options::GridOptions;
use crate::points::{PointSet, ValueSet, Weights};

/// Bins points into a regular grid, using a pluggable accumulation pass.
pub struct GridBuilder<A: Accumulator = SerialAccumulator> {
    pub options: GridOptions,
    pub accumulator: A,
}

impl GridBuilder<SerialAccumulator> {
    pub fn new(options: GridOptions) -> Self {
        Self { options, accumulator: SerialAccumulator }
    }
}

impl<A: Accumulator> GridBuilder<A> {
    pub fn with_accumulator(options: GridOptions, accumulator: A) -> Self {
        Self { options, accumulator }
    }

    /// Resolves the geometry only, without touching any values.
    pub fn geometry(&self, points: &PointSet<'_>) -> GridResult<GridGeometry> {
        GridGeometry::resolve(points, &self.options)
    }

    /// Grids `points`, summing `values` per voxel, or counting points when `values` is `None`.
    ///
    /// Returns the grid and one broadcastable coordinate axis per spatial dimension.
    pub fn build(
        &self,
        points: &PointSet<'_>,
        values: Option<&ValueSet<'_>>,
    ) -> GridResult<(Grid, Vec<Axis>)> {
        if let Some(values) = values {
            if values.len() != points.len() {
                return Err(GridError::shape(
                    "values",
                    format!("{} rows, one per point", points.len()),
                    values.len(),
                ));
            }
        }
        let weights = Weights::from(values.copied());

        let geometry = self.geometry(points)?;
        log::debug!(
            "grid {:?} x {} properties, voxel {:?}, origin {:?}",
            geometry.grid_length,
            weights.width(),
            geometry.voxel_length,
            geometry.origin
        );

        let mut grid = Grid::zeros(geometry.grid_length.clone(), weights.width())?;
        let inside = self
            .accumulator
            .accumulate(&geometry, points, &weights, grid.as_mut_slice());

        if let Framing::Fixed { .. } = geometry.framing {
            log::debug!(
                "discarded {} of {} points outside the fixed grid box",
                points.len() - inside,
                points.len()
            );
        }

        if self.options.calc_density {
            grid.divide(geometry.voxel_volume());
        }

        Ok((grid, Axis::from_geometry(&geometry)))
    }
}

/// Grids `points` with the serial accumulator.
///
/// ```
/// use gridbin::{build_grid, GridOptions, PointSet};
///
/// let points = PointSet::from_points(&[[0.2], [0.7], [1.9]]);
/// let (grid, axes) = build_grid(&points, None, &GridOptions::default()).unwrap();
/// assert_eq!(grid.as_slice(), &[2.0, 1.0]);
/// assert!((axes[0].centers()[1] - 1.7).abs() < 1e-12);
/// ```
pub fn build_grid(
    points: &PointSet<'_>,
    values: Option<&ValueSet<'_>>,
    options: &GridOptions,
) -> GridResult<(Grid, Vec<Axis>)> {
    GridBuilder::new(options.clone()).build(points, values)
}
