use crate::error::{GridError, GridResult};

/// A borrowed set of points in a `dim`-dimensional space.
///
/// Coordinates are stored flat and row-major, i.e. `[x0, y0, x1, y1, ...]` for `dim == 2`.
#[derive(Clone, Copy, Debug)]
pub struct PointSet<'a> {
    coords: &'a [f64],
    dim: usize,
}

impl<'a> PointSet<'a> {
    /// Wraps a flat coordinate buffer holding `coords.len() / dim` points.
    pub fn new(coords: &'a [f64], dim: usize) -> GridResult<Self> {
        if dim == 0 {
            return Err(GridError::shape("positions", "at least one dimension", 0));
        }
        if coords.len() % dim != 0 {
            return Err(GridError::shape(
                "positions",
                format!("a multiple of {} coordinates", dim),
                coords.len(),
            ));
        }
        Ok(Self { coords, dim })
    }

    /// Wraps a slice of fixed-size points; the dimensionality is checked at compile time.
    ///
    /// Zero-dimensional points do not compile:
    ///
    /// ```compile_fail
    /// let points = gridbin::PointSet::from_points::<0>(&[[], []]);
    /// ```
    pub fn from_points<const D: usize>(points: &'a [[f64; D]]) -> Self {
        const { assert!(D > 0, "points need at least one dimension") };
        Self { coords: points.as_flattened(), dim: D }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.coords.len() / self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Dimensionality of the embedding space.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Coordinates of the `i`-th point.
    pub fn point(&self, i: usize) -> &'a [f64] {
        &self.coords[i * self.dim..(i + 1) * self.dim]
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a [f64]> + use<'a> {
        self.coords.chunks_exact(self.dim)
    }

    pub fn as_slice(&self) -> &'a [f64] {
        self.coords
    }
}

/// A borrowed table of `width` properties per point, flat and row-major.
#[derive(Clone, Copy, Debug)]
pub struct ValueSet<'a> {
    values: &'a [f64],
    width: usize,
}

impl<'a> ValueSet<'a> {
    pub fn new(values: &'a [f64], width: usize) -> GridResult<Self> {
        if width == 0 {
            return Err(GridError::shape("values", "at least one property", 0));
        }
        if values.len() % width != 0 {
            return Err(GridError::shape(
                "values",
                format!("a multiple of {} entries", width),
                values.len(),
            ));
        }
        Ok(Self { values, width })
    }

    /// A single property per point.
    pub fn column(values: &'a [f64]) -> Self {
        Self { values, width: 1 }
    }

    /// Wraps a slice of fixed-size property rows.
    ///
    /// ```compile_fail
    /// let values = gridbin::ValueSet::from_rows::<0>(&[[]]);
    /// ```
    pub fn from_rows<const P: usize>(rows: &'a [[f64; P]]) -> Self {
        const { assert!(P > 0, "rows need at least one property") };
        Self { values: rows.as_flattened(), width: P }
    }

    /// Number of rows, which must match the number of points.
    pub fn len(&self) -> usize {
        self.values.len() / self.width
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of properties per point.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn row(&self, i: usize) -> &'a [f64] {
        &self.values[i * self.width..(i + 1) * self.width]
    }
}

/// What gets added into a voxel for each point.
#[derive(Clone, Copy, Debug)]
pub enum Weights<'a> {
    /// Counting mode: every point contributes exactly 1.
    Unit,
    /// Every point contributes its row of the table.
    Table(ValueSet<'a>),
}

impl<'a> Weights<'a> {
    pub fn width(&self) -> usize {
        match self {
            Weights::Unit => 1,
            Weights::Table(values) => values.width(),
        }
    }

    /// Adds the contribution of point `i` into `dst`, which holds `width()` entries.
    #[inline]
    pub fn add_row(&self, i: usize, dst: &mut [f64]) {
        match self {
            Weights::Unit => dst[0] += 1.0,
            Weights::Table(values) => {
                for (d, v) in dst.iter_mut().zip(values.row(i)) {
                    *d += v;
                }
            }
        }
    }
}

impl<'a> From<Option<ValueSet<'a>>> for Weights<'a> {
    fn from(values: Option<ValueSet<'a>>) -> Self {
        match values {
            Some(values) => Weights::Table(values),
            None => Weights::Unit,
        }
    }
}
