use crate::bounds::BoundingBox;
use crate::error::{GridError, GridResult};
use crate::extent::require_positive;
use crate::options::{BoundaryPolicy, GridOptions};
use crate::points::PointSet;

/// Where the grid box comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum Framing {
    /// Fitted to the bounding box of the data.
    Fitted,
    /// Fixed by the caller; points outside `dims` are discarded.
    Fixed {
        dims: Vec<f64>,
        boundary: BoundaryPolicy,
    },
}

/// The resolved layout of a regular grid: origin, voxel size and voxel counts.
///
/// Voxels are addressed row-major, the last axis varying fastest.
#[derive(Clone, Debug, PartialEq)]
pub struct GridGeometry {
    /// Physical coordinate of the lower corner of voxel `(0, .., 0)`.
    pub origin: Vec<f64>,
    /// Side length of a voxel along each axis.
    pub voxel_length: Vec<f64>,
    /// Number of voxels along each axis.
    pub grid_length: Vec<usize>,
    pub framing: Framing,
    strides: Vec<usize>,
    cell_count: usize,
}

impl GridGeometry {
    /// Resolves the grid for `points` according to `options`.
    pub fn resolve(points: &PointSet<'_>, options: &GridOptions) -> GridResult<Self> {
        let dim = points.dim();
        let voxel_length = options.voxel_length.broadcast(dim, "voxel_length")?;
        require_positive(&voxel_length, "voxel_length")?;

        if options.fit_dims {
            let bounds = BoundingBox::from_points(points)
                .ok_or_else(|| GridError::shape("positions", "at least one point", 0))?;
            let grid_length = (0..dim)
                .map(|i| voxel_count(bounds.extent(i), voxel_length[i]))
                .collect();
            Self::from_parts(bounds.min, voxel_length, grid_length, Framing::Fitted)
        } else {
            let dims = options
                .dims
                .as_ref()
                .ok_or_else(|| GridError::config("dims", "required when fit_dims is false"))?
                .broadcast(dim, "dims")?;
            require_positive(&dims, "dims")?;

            let origin = match &options.center {
                Some(center) if center.len() != dim => {
                    return Err(GridError::shape("center", format!("{} entries", dim), center.len()));
                }
                Some(center) => center.iter().zip(&dims).map(|(c, d)| c - d / 2.0).collect(),
                None => vec![0.0; dim],
            };
            let grid_length = (0..dim).map(|i| voxel_count(dims[i], voxel_length[i])).collect();
            let framing = Framing::Fixed { dims, boundary: options.boundary };
            Self::from_parts(origin, voxel_length, grid_length, framing)
        }
    }

    fn from_parts(
        origin: Vec<f64>,
        voxel_length: Vec<f64>,
        grid_length: Vec<usize>,
        framing: Framing,
    ) -> GridResult<Self> {
        let cell_count = grid_length
            .iter()
            .try_fold(1usize, |acc, &n| acc.checked_mul(n))
            .ok_or_else(|| GridError::config("voxel_length", "grid cell count overflows usize"))?;

        let mut strides = vec![1; grid_length.len()];
        for i in (0..grid_length.len().saturating_sub(1)).rev() {
            strides[i] = strides[i + 1] * grid_length[i + 1];
        }

        Ok(Self { origin, voxel_length, grid_length, framing, strides, cell_count })
    }

    pub fn dim(&self) -> usize {
        self.origin.len()
    }

    /// Total number of voxels.
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Row-major strides of the spatial axes, in voxels.
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Product of all voxel side lengths.
    pub fn voxel_volume(&self) -> f64 {
        self.voxel_length.iter().product()
    }

    /// Voxel coordinates of `point`, or `None` when a fixed box discards it.
    pub fn voxel_index(&self, point: &[f64]) -> Option<Vec<usize>> {
        (0..self.dim()).map(|i| self.axis_index(i, point[i])).collect()
    }

    /// Flat row-major voxel index of `point`, or `None` when a fixed box discards it.
    #[inline]
    pub fn voxel_of(&self, point: &[f64]) -> Option<usize> {
        let mut flat = 0;
        for (i, &c) in point.iter().enumerate() {
            flat += self.axis_index(i, c)? * self.strides[i];
        }
        Some(flat)
    }

    #[inline]
    fn axis_index(&self, axis: usize, c: f64) -> Option<usize> {
        let s = c - self.origin[axis];
        if let Framing::Fixed { dims, boundary } = &self.framing {
            if !boundary.admits(s, dims[axis]) {
                return None;
            }
        }
        // Points on the upper edge of a fitted box land in the last voxel.
        let limit = self.grid_length[axis] - 1;
        Some(((s / self.voxel_length[axis]).floor().max(0.0) as usize).min(limit))
    }
}

/// Number of voxels needed to cover `len`, never less than one.
fn voxel_count(len: f64, voxel_length: f64) -> usize {
    ((len / voxel_length).ceil() as usize).max(1)
}
