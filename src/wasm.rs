use crate::accumulate::ParallelAccumulator;
use crate::axes::Axis;
use crate::builder::GridBuilder;
use crate::grid::Grid;
use crate::options::{BoundaryPolicy, GridOptions};
use crate::points::{PointSet, ValueSet};
use js_sys::{Array, Float64Array};
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_rayon::init_thread_pool;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_threads(n: usize) -> js_sys::Promise {
    init_thread_pool(n)
}

/// WASM wrapper around [`GridBuilder`] with the parallel accumulator.
#[wasm_bindgen(js_name = Gridder)]
pub struct GridderWASM {
    options: GridOptions,
}

#[wasm_bindgen(js_class = Gridder)]
impl GridderWASM {
    #[wasm_bindgen(constructor)]
    pub fn new(voxel_length: f64) -> GridderWASM {
        GridderWASM { options: GridOptions::new().voxel_length(voxel_length) }
    }

    /// Loads all options from a JSON string.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<GridderWASM, JsValue> {
        let options: GridOptions =
            serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(GridderWASM { options })
    }

    #[wasm_bindgen(js_name = setVoxelLengths)]
    pub fn set_voxel_lengths(&mut self, voxel_length: Vec<f64>) {
        self.options.voxel_length = voxel_length.into();
    }

    #[wasm_bindgen(js_name = setDensity)]
    pub fn set_density(&mut self, calc_density: bool) {
        self.options.calc_density = calc_density;
    }

    /// Uses a fixed grid box; `center` defaults to `dims / 2`.
    #[wasm_bindgen(js_name = setFixed)]
    pub fn set_fixed(&mut self, dims: Vec<f64>, center: Option<Vec<f64>>) {
        self.options.fit_dims = false;
        self.options.dims = Some(dims.into());
        self.options.center = center;
    }

    #[wasm_bindgen(js_name = setFitted)]
    pub fn set_fitted(&mut self) {
        self.options.fit_dims = true;
    }

    #[wasm_bindgen(js_name = setHalfOpen)]
    pub fn set_half_open(&mut self, half_open: bool) {
        self.options.boundary = if half_open { BoundaryPolicy::HalfOpen } else { BoundaryPolicy::Exclusive };
    }

    /// Grids a flat `positions` buffer of `dim` coordinates per point.
    ///
    /// `values`, when given, holds `width` properties per point.
    pub fn build(
        &self,
        positions: &[f64],
        dim: usize,
        values: Option<Vec<f64>>,
        width: usize,
    ) -> Result<GriddedWASM, JsValue> {
        let points = PointSet::new(positions, dim).map_err(to_js)?;
        let values = match &values {
            Some(v) => Some(ValueSet::new(v, width).map_err(to_js)?),
            None => None,
        };
        let builder = GridBuilder::with_accumulator(self.options.clone(), ParallelAccumulator::default());
        let (grid, axes) = builder.build(&points, values.as_ref()).map_err(to_js)?;
        Ok(GriddedWASM { grid, axes })
    }
}

/// A built grid and its axes, as seen from JavaScript.
#[wasm_bindgen(js_name = GriddedData)]
pub struct GriddedWASM {
    grid: Grid,
    axes: Vec<Axis>,
}

#[wasm_bindgen(js_class = GriddedData)]
impl GriddedWASM {
    /// Full array shape, including the trailing property axis when present.
    #[wasm_bindgen(getter)]
    pub fn shape(&self) -> Vec<u32> {
        self.grid.shape().iter().map(|&n| n as u32).collect()
    }

    #[wasm_bindgen(getter)]
    pub fn properties(&self) -> usize {
        self.grid.properties()
    }

    /// Row-major grid values.
    #[wasm_bindgen(getter)]
    pub fn values(&self) -> Vec<f64> {
        self.grid.as_slice().to_vec()
    }

    /// Voxel centers, one `Float64Array` per spatial axis.
    #[wasm_bindgen(getter)]
    pub fn axes(&self) -> Array {
        self.axes
            .iter()
            .map(|axis| JsValue::from(Float64Array::from(axis.centers())))
            .collect()
    }

    /// Voxel boundaries along spatial axis `dim`.
    pub fn edges(&self, dim: usize) -> Option<Vec<f64>> {
        self.axes.get(dim).map(Axis::edges)
    }
}

fn to_js(err: crate::error::GridError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
