//! Uniform cell grid over a rectangular 2D domain.
//!
//! This module defines [`UniformGrid`], the axis-aligned grid that cell-data
//! fields are attached to. Cells are addressed by an `(i, j)` index pair or a
//! flat cell id `j * nx + i`.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned 2D grid of equally sized cells.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct UniformGrid {
    /// Domain position of the grid's lower-left corner.
    pub origin: DVec2,
    /// Number of cells along the X axis.
    pub nx: usize,
    /// Number of cells along the Y axis.
    pub ny: usize,
    /// Cell size per axis in domain units.
    pub spacing: DVec2,
}

impl UniformGrid {
    /// Creates a grid from origin, cell counts, and spacing.
    pub fn new(origin: DVec2, nx: usize, ny: usize, spacing: DVec2) -> Self {
        Self {
            origin,
            nx,
            ny,
            spacing,
        }
    }

    /// Creates an `extent x extent` grid covering the unit square, with the
    /// origin at `(0, 0)` and spacing `1 / extent` per axis.
    pub fn unit_square(extent: usize) -> Self {
        debug_assert!(extent > 0, "extent must be > 0");
        let h = 1.0 / extent as f64;
        Self {
            origin: DVec2::ZERO,
            nx: extent,
            ny: extent,
            spacing: DVec2::splat(h),
        }
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.nx * self.ny
    }

    /// Flat cell id for the cell at `(i, j)`.
    #[inline]
    pub fn cell_id(&self, i: usize, j: usize) -> usize {
        j * self.nx + i
    }

    /// Domain position of the lower-left corner of cell `(i, j)`.
    #[inline]
    pub fn cell_min(&self, i: usize, j: usize) -> DVec2 {
        self.origin + DVec2::new(i as f64 * self.spacing.x, j as f64 * self.spacing.y)
    }

    /// Domain position of the center of cell `(i, j)`.
    #[inline]
    pub fn cell_center(&self, i: usize, j: usize) -> DVec2 {
        self.cell_min(i, j) + 0.5 * self.spacing
    }

    /// Grid point counts per axis, one more than the cell counts.
    pub fn point_dims(&self) -> (usize, usize) {
        (self.nx + 1, self.ny + 1)
    }
}
