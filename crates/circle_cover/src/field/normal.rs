//! Boundary normal reconstruction from the coverage field.
//!
//! Only boundary cells (coverage strictly between 0 and 1) receive a normal;
//! every other cell keeps the zero-vector sentinel of the freshly allocated
//! [`VectorField`]. Normals are unit length and point outward, from the
//! covered interior toward the exterior.
use glam::{DVec2, DVec3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::field::raster::{ScalarField, VectorField};
use crate::geom::Circle;

/// Default cell-data array name for the normal field.
pub const NORMAL_FIELD_NAME: &str = "NormalVector";

/// Below this magnitude a gradient or radial vector has no usable direction
/// and the cell keeps the zero vector.
pub const MIN_NORMAL_MAGNITUDE: f64 = 1e-9;

/// How boundary normals are reconstructed from the coverage field.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NormalStrategy {
    /// Negated, normalized central-difference gradient of the coverage field.
    ///
    /// More faithful near irregular boundaries. Cells on the outermost grid
    /// ring are skipped: the central stencil would read past the grid there,
    /// so they keep the zero vector.
    #[default]
    Gradient,
    /// Normalized vector from the circle center to the cell center.
    ///
    /// Cheaper, and exact only because the shape is a true circle.
    Radial,
}

/// Reconstructs boundary normals for the given coverage field.
///
/// `circle` is only consulted by [`NormalStrategy::Radial`]; the gradient
/// strategy works from coverage values alone.
pub fn bake_normals(
    coverage: &ScalarField,
    circle: &Circle,
    strategy: NormalStrategy,
) -> VectorField {
    let grid = coverage.grid.clone();
    let mut normals = VectorField::zeroed(grid, NORMAL_FIELD_NAME);

    match strategy {
        NormalStrategy::Gradient => bake_gradient(coverage, &mut normals),
        NormalStrategy::Radial => bake_radial(coverage, circle, &mut normals),
    }

    normals
}

fn is_boundary(coverage: f64) -> bool {
    coverage > 0.0 && coverage < 1.0
}

fn bake_gradient(coverage: &ScalarField, normals: &mut VectorField) {
    let grid = &coverage.grid;
    if grid.nx < 3 || grid.ny < 3 {
        warn!(
            "Grid of {}x{} cells has no interior for the gradient stencil; all normals stay zero.",
            grid.nx, grid.ny
        );
        return;
    }

    for j in 1..grid.ny - 1 {
        for i in 1..grid.nx - 1 {
            let cov = coverage.get(i as isize, j as isize);
            if !is_boundary(cov) {
                continue;
            }

            let grad = DVec2::new(
                (coverage.get(i as isize + 1, j as isize) - coverage.get(i as isize - 1, j as isize))
                    / (2.0 * grid.spacing.x),
                (coverage.get(i as isize, j as isize + 1) - coverage.get(i as isize, j as isize - 1))
                    / (2.0 * grid.spacing.y),
            );

            let mag = grad.length();
            if mag <= MIN_NORMAL_MAGNITUDE {
                // Locally flat coverage; direction is ambiguous.
                continue;
            }

            let n = -grad / mag;
            normals.set(i, j, DVec3::new(n.x, n.y, 0.0));
        }
    }
}

fn bake_radial(coverage: &ScalarField, circle: &Circle, normals: &mut VectorField) {
    let grid = &coverage.grid;
    for j in 0..grid.ny {
        for i in 0..grid.nx {
            let cov = coverage.get(i as isize, j as isize);
            if !is_boundary(cov) {
                continue;
            }

            let v = grid.cell_center(i, j) - circle.center;
            let mag = v.length();
            if mag <= MIN_NORMAL_MAGNITUDE {
                // Cell center coincides with the circle center.
                continue;
            }

            let n = v / mag;
            normals.set(i, j, DVec3::new(n.x, n.y, 0.0));
        }
    }
}
