//! Cell-data fields over uniform grids.
//!
//! This module groups the [`UniformGrid`] geometry, the [`ScalarField`] and
//! [`VectorField`] rasters attached to it, and the two baking passes that
//! populate them: supersampled coverage and boundary normals.
pub mod coverage;
pub mod grid;
pub mod normal;
pub mod raster;

pub use grid::UniformGrid;
pub use raster::{ScalarField, VectorField};
