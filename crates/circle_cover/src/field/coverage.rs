//! Supersampled circle coverage over a uniform grid.
//!
//! Coverage is the estimated fraction of a cell's area lying inside the
//! circle, computed by testing an `S x S` regular lattice of sample points per
//! cell against the inclusive inside test. With the default `S = 10` the
//! estimate has a granularity of 1% (100 discrete values per cell); accuracy
//! improves with `S` but only reaches the analytic area in the limit.
use crate::field::grid::UniformGrid;
use crate::field::raster::ScalarField;
use crate::geom::Circle;

/// Default cell-data array name for the coverage field.
pub const COVERAGE_FIELD_NAME: &str = "InsideCircleCoverage";

/// Estimates the fraction of cell `(i, j)` covered by `circle`.
///
/// The cell is subdivided into `samples x samples` sub-cells and one point is
/// tested at each sub-cell center. Cells entirely outside the circle yield
/// exactly `0.0`, cells entirely inside exactly `1.0`; every other value is a
/// multiple of `1 / samples^2`.
pub fn cell_coverage(
    circle: &Circle,
    grid: &UniformGrid,
    i: usize,
    j: usize,
    samples: usize,
) -> f64 {
    debug_assert!(samples > 0, "samples must be > 0");

    let min = grid.cell_min(i, j);
    let step_x = grid.spacing.x / samples as f64;
    let step_y = grid.spacing.y / samples as f64;

    let mut inside = 0usize;
    for sj in 0..samples {
        for si in 0..samples {
            let p = glam::DVec2::new(
                min.x + (si as f64 + 0.5) * step_x,
                min.y + (sj as f64 + 0.5) * step_y,
            );
            if circle.contains(p) {
                inside += 1;
            }
        }
    }

    inside as f64 / (samples * samples) as f64
}

/// Bakes the coverage field for every cell of `grid`.
///
/// Each cell is independent of its neighbors; the pass runs sequentially in
/// cell-id order.
pub fn bake_coverage(circle: &Circle, grid: &UniformGrid, samples: usize) -> ScalarField {
    debug_assert!(samples > 0, "samples must be > 0");

    let mut field = ScalarField::zeroed(grid.clone(), COVERAGE_FIELD_NAME);
    for j in 0..grid.ny {
        for i in 0..grid.nx {
            field.set(i, j, cell_coverage(circle, grid, i, j, samples));
        }
    }
    field
}
