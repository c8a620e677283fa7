//! Runner executing the coverage pipeline over a configured grid.
use tracing::{info, warn};

use crate::error::Result;
use crate::field::coverage::bake_coverage;
use crate::field::normal::bake_normals;
use crate::field::{ScalarField, UniformGrid, VectorField};
use crate::geom::BoundaryLoop;
use crate::pipeline::config::PipelineConfig;

/// Result of a pipeline run.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct RunOutput {
    /// Sampled boundary loop of the circle.
    pub boundary: BoundaryLoop,
    /// Per-cell coverage field, fully populated.
    pub coverage: ScalarField,
    /// Per-cell normal field; zero outside boundary cells.
    pub normals: VectorField,
    /// Number of cells with coverage strictly between 0 and 1.
    pub boundary_cells: usize,
}

/// Executes the full pipeline for a validated configuration.
pub struct CoverageRunner {
    /// Configuration applied to this runner.
    pub config: PipelineConfig,
}

impl CoverageRunner {
    /// Creates a runner after validating `config`.
    pub fn try_new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Creates a runner without validation.
    pub fn new(config: PipelineConfig) -> Self {
        debug_assert!(config.extent > 0, "extent must be > 0");
        debug_assert!(config.samples > 0, "samples must be > 0");
        debug_assert!(config.boundary_points >= 3, "boundary_points must be >= 3");

        Self { config }
    }

    /// Runs the pipeline, returning the boundary loop and both fields.
    pub fn run(&self) -> RunOutput {
        run(&self.config)
    }
}

/// Runs the pipeline for `config`: samples the boundary loop, bakes coverage
/// over the unit-square grid, then reconstructs boundary normals.
pub fn run(config: &PipelineConfig) -> RunOutput {
    let boundary = BoundaryLoop::around_circle(
        &config.circle,
        config.boundary_points,
        config.boundary_topology,
    );

    let grid = UniformGrid::unit_square(config.extent);
    let coverage = bake_coverage(&config.circle, &grid, config.samples);

    let boundary_cells = coverage
        .data
        .iter()
        .filter(|c| **c > 0.0 && **c < 1.0)
        .count();
    info!(
        "Coverage baked over {} cells; {} straddle the circle boundary.",
        grid.cell_count(),
        boundary_cells
    );
    if boundary_cells == 0 {
        warn!("No boundary cells found; the circle misses the grid or swallows it whole.");
    }

    let normals = bake_normals(&coverage, &config.circle, config.normal_strategy);

    RunOutput {
        boundary,
        coverage,
        normals,
        boundary_cells,
    }
}
