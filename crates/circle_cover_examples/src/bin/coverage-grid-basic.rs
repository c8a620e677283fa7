//! Rasterizes the reference circle on a coarse 10x10 grid and writes the
//! boundary polyline, the grid file, and the plain-text coverage report.
use std::fs::File;
use std::io::BufWriter;

use circle_cover::prelude::*;
use circle_cover_examples::init_tracing;
use glam::DVec2;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = PipelineConfig::new(Circle::new(DVec2::new(0.5, 0.5), 0.3))
        .with_extent(10)
        .with_boundary_topology(BoundaryTopology::Polyline)
        .with_normal_strategy(NormalStrategy::Radial);

    let runner = CoverageRunner::try_new(config)?;
    let output = runner.run();

    write_vtp("circle.vtp", &output.boundary)?;
    write_vti(
        "cartesian_grid.vti",
        &output.coverage.grid,
        &[&output.coverage],
        &[&output.normals],
    )?;

    let report = BufWriter::new(File::create("gridCoverage.txt")?);
    write_coverage_report(report, &output.coverage, Some(&output.normals))?;

    tracing::info!(
        "Done: {} boundary cells on a {} cell grid.",
        output.boundary_cells,
        output.coverage.grid.cell_count()
    );
    Ok(())
}
