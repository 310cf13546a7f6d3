use crate::geometry::GridGeometry;

/// Voxel-center coordinates along one spatial axis of a grid.
///
/// An axis is conceptually an array of shape `[1, .., len, .., 1]` with `len` at position `dim`,
/// so it broadcasts against the grid: [`Axis::at`] accepts a full grid index and only looks at
/// component `dim`.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    dim: usize,
    ndim: usize,
    origin: f64,
    step: f64,
    centers: Vec<f64>,
}

impl Axis {
    /// An axis of `len` voxels of size `step` starting at `origin`.
    pub fn new(dim: usize, ndim: usize, origin: f64, step: f64, len: usize) -> Self {
        let centers = (0..len).map(|k| origin + step * (k as f64 + 0.5)).collect();
        Self { dim, ndim, origin, step, centers }
    }

    /// One axis per spatial dimension of `geometry`.
    pub fn from_geometry(geometry: &GridGeometry) -> Vec<Axis> {
        let ndim = geometry.dim();
        (0..ndim)
            .map(|i| {
                Axis::new(i, ndim, geometry.origin[i], geometry.voxel_length[i], geometry.grid_length[i])
            })
            .collect()
    }

    /// The spatial dimension this axis runs along.
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    pub fn centers(&self) -> &[f64] {
        &self.centers
    }

    /// Voxel side length along this axis.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Shape under which this axis broadcasts against the grid.
    pub fn broadcast_shape(&self) -> Vec<usize> {
        let mut shape = vec![1; self.ndim];
        shape[self.dim] = self.len();
        shape
    }

    /// Coordinate at a full grid index, or `None` if the index is out of range.
    pub fn at(&self, index: &[usize]) -> Option<f64> {
        if index.len() < self.ndim {
            return None;
        }
        self.centers.get(index[self.dim]).copied()
    }

    /// The `len + 1` voxel boundaries along this axis.
    pub fn edges(&self) -> Vec<f64> {
        (0..=self.len()).map(|k| self.origin + self.step * k as f64).collect()
    }
}
