use crate::error::{GridError, GridResult};

/// A dense grid of accumulated values.
///
/// Data is stored row-major over the spatial axes with the properties of a voxel stored
/// contiguously, so a grid with `p > 1` properties behaves like an array with one extra
/// trailing axis of length `p`.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    shape: Vec<usize>,
    properties: usize,
    data: Vec<f64>,
}

impl Grid {
    /// A zero-filled grid of the given spatial shape.
    ///
    /// Fails with a configuration error when the buffer cannot be allocated.
    pub fn zeros(shape: Vec<usize>, properties: usize) -> GridResult<Self> {
        let len = shape
            .iter()
            .try_fold(properties, |acc, &n| acc.checked_mul(n))
            .ok_or_else(|| GridError::config("voxel_length", "grid size overflows usize"))?;

        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|e| {
            GridError::config("voxel_length", format!("cannot allocate {} grid values: {}", len, e))
        })?;
        data.resize(len, 0.0);
        Ok(Self { shape, properties, data })
    }

    /// Full array shape, with a trailing property axis when there is more than one property.
    pub fn shape(&self) -> Vec<usize> {
        let mut shape = self.shape.clone();
        if self.properties > 1 {
            shape.push(self.properties);
        }
        shape
    }

    /// Number of voxels along each spatial axis.
    pub fn spatial_shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn properties(&self) -> usize {
        self.properties
    }

    /// Number of voxels.
    pub fn cell_count(&self) -> usize {
        self.data.len() / self.properties
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    fn flat(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.shape.len() {
            return None;
        }
        let mut flat = 0;
        for (&i, &n) in index.iter().zip(&self.shape) {
            if i >= n {
                return None;
            }
            flat = flat * n + i;
        }
        Some(flat)
    }

    /// Spatial index of the voxel at flat position `flat`.
    pub fn unravel(&self, mut flat: usize) -> Vec<usize> {
        let mut index = vec![0; self.shape.len()];
        for (slot, &n) in index.iter_mut().zip(&self.shape).rev() {
            *slot = flat % n;
            flat /= n;
        }
        index
    }

    /// Property values of the voxel at `index`, or `None` if out of range.
    pub fn get(&self, index: &[usize]) -> Option<&[f64]> {
        let flat = self.flat(index)?;
        Some(&self.data[flat * self.properties..(flat + 1) * self.properties])
    }

    /// First property of the voxel at `index`; the voxel value for single-property grids.
    pub fn value(&self, index: &[usize]) -> Option<f64> {
        self.get(index).map(|v| v[0])
    }

    /// Iterates over `(index, values)` for every voxel in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Vec<usize>, &[f64])> + '_ {
        self.data
            .chunks_exact(self.properties)
            .enumerate()
            .map(move |(flat, values)| (self.unravel(flat), values))
    }

    /// Sum over all voxels, per property.
    pub fn totals(&self) -> Vec<f64> {
        let mut totals = vec![0.0; self.properties];
        for values in self.data.chunks_exact(self.properties) {
            for (t, v) in totals.iter_mut().zip(values) {
                *t += v;
            }
        }
        totals
    }

    pub(crate) fn divide(&mut self, divisor: f64) {
        self.data.iter_mut().for_each(|v| *v /= divisor);
    }

    /// Extracts property `k` as a single-property grid.
    pub fn property(&self, k: usize) -> GridResult<Grid> {
        if k >= self.properties {
            return Err(GridError::shape(
                "property",
                format!("an index below {}", self.properties),
                k,
            ));
        }
        let data = self.data.iter().skip(k).step_by(self.properties).copied().collect();
        Ok(Grid { shape: self.shape.clone(), properties: 1, data })
    }

    /// Takes the hyperplane `index` along spatial axis `dim`, dropping that axis.
    ///
    /// Repeated slicing brings a 3-D grid down to a 2-D map suitable for plotting.
    pub fn slice(&self, dim: usize, index: usize) -> GridResult<Grid> {
        if dim >= self.shape.len() || self.shape.len() < 2 {
            return Err(GridError::shape(
                "dim",
                format!("a spatial axis below {} on a grid of 2 or more axes", self.shape.len()),
                dim,
            ));
        }
        if index >= self.shape[dim] {
            return Err(GridError::shape(
                "index",
                format!("an index below {}", self.shape[dim]),
                index,
            ));
        }

        // Split the row-major layout into [outer, dim, inner] blocks.
        let outer: usize = self.shape[..dim].iter().product();
        let inner: usize = self.shape[dim + 1..].iter().product::<usize>() * self.properties;
        let n = self.shape[dim];

        let mut data = Vec::with_capacity(outer * inner);
        for o in 0..outer {
            let start = (o * n + index) * inner;
            data.extend_from_slice(&self.data[start..start + inner]);
        }

        let mut shape = self.shape.clone();
        shape.remove(dim);
        Ok(Grid { shape, properties: self.properties, data })
    }
}
