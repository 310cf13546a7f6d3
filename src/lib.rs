//! # gridbin
//!
//! `gridbin` is a Rust library for binning points in an N-dimensional space onto a regular
//! rectilinear grid, designed to be used in Rust as well as compiled to WebAssembly (WASM).
//! The result is a histogram or density map plus the coordinate axes describing its extent.
//!
//! ## Features
//!
//! - **Any dimensionality**: points are flat coordinate buffers with an explicit dimension.
//! - **Auto-fit or fixed framing**: fit the grid to the data, or grid a caller-specified box
//!   and discard everything outside it.
//! - **Anisotropic voxels**: a shared voxel length or one per axis.
//! - **Multi-property accumulation**: count points or sum any number of values per point.
//! - **Densities**: optionally divide totals by the voxel volume.
//! - **Parallel accumulation**: swap in [`ParallelAccumulator`] for large point sets.
//!
//! ## Example
//!
//! ```
//! use gridbin::{build_grid, BoundaryPolicy, GridOptions, PointSet, ValueSet};
//!
//! let points = PointSet::from_points(&[[0.0], [0.0], [1.0]]);
//! let values = ValueSet::from_rows(&[[1.0, 10.0], [2.0, 20.0], [3.0, 30.0]]);
//! let options = GridOptions::new()
//!     .fixed([2.0])
//!     .center(vec![1.0])
//!     .boundary(BoundaryPolicy::HalfOpen);
//!
//! let (grid, axes) = build_grid(&points, Some(&values), &options).unwrap();
//! assert_eq!(grid.shape(), vec![2, 2]);
//! assert_eq!(grid.get(&[0]), Some(&[3.0, 30.0][..]));
//! assert_eq!(axes[0].centers(), &[0.5, 1.5]);
//! ```
//!
//! ## Main Interface
//!
//! The primary entry point is [`build_grid`], or [`GridBuilder`] to choose the accumulator.

mod accumulate;
mod axes;
mod bounds;
mod builder;
mod error;
mod extent;
mod geometry;
mod grid;
mod options;
mod points;
mod wasm;

pub use accumulate::Accumulator;
pub use accumulate::ParallelAccumulator;
pub use accumulate::SerialAccumulator;
pub use axes::Axis;
pub use bounds::BoundingBox;
pub use builder::build_grid;
pub use builder::GridBuilder;
pub use error::GridError;
pub use error::GridResult;
pub use extent::Extent;
pub use geometry::Framing;
pub use geometry::GridGeometry;
pub use grid::Grid;
pub use options::BoundaryPolicy;
pub use options::GridOptions;
pub use points::PointSet;
pub use points::ValueSet;
pub use points::Weights;
