//! Grid configuration.

use crate::extent::Extent;
use serde::{Deserialize, Serialize};

/// How points lying exactly on the edge of a fixed grid box are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// Keep only points strictly inside the box: `0 < s < dims`.
    #[default]
    Exclusive,
    /// Keep the lower edge, drop the upper one: `0 <= s < dims`.
    HalfOpen,
}

impl BoundaryPolicy {
    /// Tests an origin-shifted coordinate `s` against a box side of length `len`.
    #[inline]
    pub fn admits(self, s: f64, len: f64) -> bool {
        match self {
            BoundaryPolicy::Exclusive => s > 0.0 && s < len,
            BoundaryPolicy::HalfOpen => s >= 0.0 && s < len,
        }
    }
}

/// Grid parameters.
///
/// The defaults produce a count histogram with unit voxels fitted to the data.
/// Options can be chained:
///
/// ```
/// use gridbin::GridOptions;
///
/// let options = GridOptions::new()
///     .voxel_length([0.5, 2.0])
///     .fixed([10.0, 20.0])
///     .center(vec![0.0, 0.0])
///     .density(true);
/// assert!(!options.fit_dims);
/// ```
///
/// or loaded from JSON, where every field is optional:
///
/// ```
/// let options: gridbin::GridOptions =
///     serde_json::from_str(r#"{ "voxel_length": 0.25, "calc_density": true }"#).unwrap();
/// assert!(options.fit_dims);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    /// Divide accumulated totals by the voxel volume.
    pub calc_density: bool,
    /// Side length of a voxel, shared or per axis.
    pub voxel_length: Extent,
    /// Fit the grid to the bounding box of the data instead of using `dims`/`center`.
    pub fit_dims: bool,
    /// Side lengths of the fixed grid box. Required when `fit_dims` is false.
    pub dims: Option<Extent>,
    /// Center of the fixed grid box, `dims / 2` when absent.
    pub center: Option<Vec<f64>>,
    /// Edge policy for fixed-box filtering.
    pub boundary: BoundaryPolicy,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            calc_density: false,
            voxel_length: Extent::Uniform(1.0),
            fit_dims: true,
            dims: None,
            center: None,
            boundary: BoundaryPolicy::Exclusive,
        }
    }
}

impl GridOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn density(mut self, calc_density: bool) -> Self {
        self.calc_density = calc_density;
        self
    }

    pub fn voxel_length(mut self, voxel_length: impl Into<Extent>) -> Self {
        self.voxel_length = voxel_length.into();
        self
    }

    pub fn fit_dims(mut self, fit_dims: bool) -> Self {
        self.fit_dims = fit_dims;
        self
    }

    /// Switches to a fixed grid box with side lengths `dims`.
    pub fn fixed(mut self, dims: impl Into<Extent>) -> Self {
        self.fit_dims = false;
        self.dims = Some(dims.into());
        self
    }

    pub fn center(mut self, center: impl Into<Vec<f64>>) -> Self {
        self.center = Some(center.into());
        self
    }

    pub fn boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }
}
