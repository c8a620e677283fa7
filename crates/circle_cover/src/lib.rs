#![forbid(unsafe_code)]
//! circle_cover: supersampled circle coverage fields with boundary normal reconstruction.
//!
//! Modules:
//! - geom: circle primitive and boundary loop sampling
//! - field: uniform cell grids, scalar/vector rasters, coverage and normal baking
//! - io: geometry/grid sink traits, VTK XML writers, plain-text coverage reports
//! - pipeline: validated configuration and the end-to-end runner
//!
//! For examples and docs, see README and docs.rs.
pub mod error;
pub mod field;
pub mod geom;
pub mod io;
pub mod pipeline;

/// Convenient re-exports for common types. Import with `use circle_cover::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::field::coverage::{bake_coverage, cell_coverage, COVERAGE_FIELD_NAME};
    pub use crate::field::normal::{bake_normals, NormalStrategy, NORMAL_FIELD_NAME};
    pub use crate::field::{ScalarField, UniformGrid, VectorField};
    pub use crate::geom::{BoundaryLoop, BoundaryTopology, Circle};
    pub use crate::io::report::write_coverage_report;
    pub use crate::io::vtk::{write_vti, write_vtp, XmlImageDataWriter, XmlPolyDataWriter};
    pub use crate::io::{GeometrySink, GridSink};
    pub use crate::pipeline::config::PipelineConfig;
    pub use crate::pipeline::runner::{run, CoverageRunner, RunOutput};
}
