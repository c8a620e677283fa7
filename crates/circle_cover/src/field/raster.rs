//! Raster storage for per-cell field values.
//!
//! Stores named cell-data arrays over a [`UniformGrid`], one entry per cell in
//! row-major order matching the grid's flat cell ids.
use glam::DVec3;

use crate::field::grid::UniformGrid;

/// A named scalar value per grid cell.
#[derive(Clone, Debug)]
pub struct ScalarField {
    pub grid: UniformGrid,
    pub name: String,
    pub data: Vec<f64>,
}

impl ScalarField {
    /// Creates a new field over `grid`, initializing all values to zero.
    pub fn zeroed(grid: UniformGrid, name: impl Into<String>) -> Self {
        let len = grid.cell_count();
        Self {
            grid,
            name: name.into(),
            data: vec![0.0; len],
        }
    }

    /// Gets the value at cell `(i, j)`, returning `0.0` if out of bounds.
    #[inline]
    pub fn get(&self, i: isize, j: isize) -> f64 {
        if i < 0 || j < 0 || i >= self.grid.nx as isize || j >= self.grid.ny as isize {
            return 0.0;
        }
        self.data[self.grid.cell_id(i as usize, j as usize)]
    }

    /// Sets the value at cell `(i, j)`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        let id = self.grid.cell_id(i, j);
        self.data[id] = value;
    }
}

/// A named 3-component vector per grid cell, zero-initialized.
///
/// The all-zero vector doubles as a sentinel: consumers read it as "no value
/// assigned for this cell".
#[derive(Clone, Debug)]
pub struct VectorField {
    pub grid: UniformGrid,
    pub name: String,
    pub data: Vec<DVec3>,
}

impl VectorField {
    /// Creates a new field over `grid` with every tuple set to the zero vector.
    pub fn zeroed(grid: UniformGrid, name: impl Into<String>) -> Self {
        let len = grid.cell_count();
        Self {
            grid,
            name: name.into(),
            data: vec![DVec3::ZERO; len],
        }
    }

    /// Gets the vector at cell `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> DVec3 {
        self.data[self.grid.cell_id(i, j)]
    }

    /// Sets the vector at cell `(i, j)`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: DVec3) {
        let id = self.grid.cell_id(i, j);
        self.data[id] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_grid() -> UniformGrid {
        UniformGrid::unit_square(4)
    }

    #[test]
    fn scalar_field_initializes_with_zeroes() {
        let field = ScalarField::zeroed(make_grid(), "values");
        assert_eq!(field.data.len(), 16);
        assert!(field.data.iter().all(|v| *v == 0.0));
        assert_eq!(field.name, "values");
    }

    #[test]
    fn scalar_get_returns_zero_outside_bounds() {
        let mut field = ScalarField::zeroed(make_grid(), "values");
        field.set(2, 1, 0.75);
        assert_eq!(field.get(2, 1), 0.75);
        assert_eq!(field.get(-1, 0), 0.0);
        assert_eq!(field.get(0, 4), 0.0);
    }

    #[test]
    fn vector_field_starts_at_the_zero_sentinel() {
        let field = VectorField::zeroed(make_grid(), "vectors");
        assert_eq!(field.data.len(), 16);
        assert!(field.data.iter().all(|v| *v == DVec3::ZERO));
    }

    #[test]
    fn vector_set_overwrites_a_single_cell() {
        let mut field = VectorField::zeroed(make_grid(), "vectors");
        field.set(1, 3, DVec3::new(1.0, 0.0, 0.0));
        assert_eq!(field.get(1, 3), DVec3::new(1.0, 0.0, 0.0));
        assert_eq!(field.get(0, 0), DVec3::ZERO);
    }
}
