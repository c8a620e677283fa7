//! Output seams for geometry and grid data.
//!
//! This module defines the writer traits the pipeline hands its results to:
//! - implement [`GeometrySink`] to persist a point set with loop connectivity,
//! - implement [`GridSink`] to persist named per-cell fields on a grid.
//!
//! Concrete VTK XML writers live in [`vtk`]; the plain-text coverage dump in
//! [`report`]. Sink interfaces take points as [`mint`] vectors so consumers
//! are not tied to this crate's internal math types.
use mint::Vector3;

use crate::error::Result;
use crate::field::{ScalarField, UniformGrid, VectorField};
use crate::geom::BoundaryTopology;

pub mod report;
pub mod vtk;

/// Writes a point set with a single loop cell to a geometry file.
pub trait GeometrySink {
    fn write_geometry(
        &mut self,
        points: &[Vector3<f64>],
        connectivity: &[usize],
        topology: BoundaryTopology,
    ) -> Result<()>;
}

/// Writes a grid and its named per-cell fields to a grid file.
pub trait GridSink {
    fn write_cell_data(
        &mut self,
        grid: &UniformGrid,
        scalars: &[&ScalarField],
        vectors: &[&VectorField],
    ) -> Result<()>;
}
