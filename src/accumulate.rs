use crate::geometry::GridGeometry;
use crate::points::{PointSet, Weights};
use rayon::prelude::*;

/// Trait defining the accumulation pass that scatters point values into voxels.
/// This allows swapping between a serial loop and a parallel reduction.
///
/// Implementations must add every contribution to its voxel, never overwrite it.
pub trait Accumulator: Send + Sync {
    /// Adds the weights of all `points` into `cells`.
    ///
    /// `cells` holds `geometry.cell_count() * weights.width()` entries, property-minor.
    /// Returns the number of points that landed inside the grid.
    fn accumulate(
        &self,
        geometry: &GridGeometry,
        points: &PointSet<'_>,
        weights: &Weights<'_>,
        cells: &mut [f64],
    ) -> usize;
}

/// Single-threaded indexed accumulation loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct SerialAccumulator;

impl Accumulator for SerialAccumulator {
    fn accumulate(
        &self,
        geometry: &GridGeometry,
        points: &PointSet<'_>,
        weights: &Weights<'_>,
        cells: &mut [f64],
    ) -> usize {
        let width = weights.width();
        log::trace!("serial accumulation of {} points", points.len());
        let mut count = 0;
        for (i, p) in points.iter().enumerate() {
            if let Some(voxel) = geometry.voxel_of(p) {
                weights.add_row(i, &mut cells[voxel * width..(voxel + 1) * width]);
                count += 1;
            }
        }
        count
    }
}

/// Multi-threaded accumulation using rayon.
///
/// Each worker fills a private copy of the grid which are then summed, so memory grows with the
/// number of splits. Worth it for many points on a modest grid; for sparse points on a huge grid
/// the serial accumulator is faster.
#[derive(Clone, Copy, Debug)]
pub struct ParallelAccumulator {
    /// Minimum number of points handled by one worker.
    pub min_chunk: usize,
}

impl Default for ParallelAccumulator {
    fn default() -> Self {
        Self { min_chunk: 16_384 }
    }
}

impl ParallelAccumulator {
    pub fn new(min_chunk: usize) -> Self {
        Self { min_chunk: min_chunk.max(1) }
    }
}

impl Accumulator for ParallelAccumulator {
    fn accumulate(
        &self,
        geometry: &GridGeometry,
        points: &PointSet<'_>,
        weights: &Weights<'_>,
        cells: &mut [f64],
    ) -> usize {
        let width = weights.width();
        let len = cells.len();
        log::trace!("parallel accumulation of {} points, min chunk {}", points.len(), self.min_chunk);

        let (partial, count) = (0..points.len())
            .into_par_iter()
            .with_min_len(self.min_chunk)
            .fold(
                || (vec![0.0; len], 0usize),
                |(mut acc, count), i| match geometry.voxel_of(points.point(i)) {
                    Some(voxel) => {
                        weights.add_row(i, &mut acc[voxel * width..(voxel + 1) * width]);
                        (acc, count + 1)
                    }
                    None => (acc, count),
                },
            )
            .reduce(
                || (vec![0.0; len], 0usize),
                |(mut a, ca), (b, cb)| {
                    a.par_iter_mut().zip(b.par_iter()).for_each(|(x, y)| *x += y);
                    (a, ca + cb)
                },
            );

        cells.par_iter_mut().zip(partial.par_iter()).for_each(|(c, p)| *c += p);
        count
    }
}
