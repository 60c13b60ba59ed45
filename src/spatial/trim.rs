//! Cropping of sparse grids to the bounding box of their letters

use bitvec::prelude::*;
use ndarray::Array2;

use crate::spatial::grid::Grid;

/// Inclusive row and column range containing every letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// First occupied row
    pub min_row: usize,
    /// Last occupied row
    pub max_row: usize,
    /// First occupied column
    pub min_col: usize,
    /// Last occupied column
    pub max_col: usize,
}

impl BoundingBox {
    /// Height of the box
    pub const fn rows(&self) -> usize {
        self.max_row - self.min_row + 1
    }

    /// Width of the box
    pub const fn cols(&self) -> usize {
        self.max_col - self.min_col + 1
    }
}

/// Find the minimal rectangle containing all non-blank cells
///
/// Returns `None` for a fully blank grid.
pub fn occupied_bounds(grid: &Grid) -> Option<BoundingBox> {
    let mut occupied_rows = bitvec![0; grid.rows()];
    let mut occupied_cols = bitvec![0; grid.cols()];

    for ((row, col), cell) in grid.cells().indexed_iter() {
        if !cell.is_blank() {
            occupied_rows.set(row, true);
            occupied_cols.set(col, true);
        }
    }

    Some(BoundingBox {
        min_row: occupied_rows.first_one()?,
        max_row: occupied_rows.last_one()?,
        min_col: occupied_cols.first_one()?,
        max_col: occupied_cols.last_one()?,
    })
}

/// Crop a grid to its letters
///
/// Returns the cropped grid with the row and column offsets to subtract from
/// absolute coordinates. A fully blank grid is returned unchanged with a
/// zero offset.
pub fn trim(grid: &Grid) -> (Grid, usize, usize) {
    occupied_bounds(grid).map_or_else(
        || (grid.clone(), 0, 0),
        |bounds| {
            let cropped = Array2::from_shape_fn((bounds.rows(), bounds.cols()), |(row, col)| {
                grid.get(row + bounds.min_row, col + bounds.min_col).unwrap_or_default()
            });
            (Grid::from_cells(cropped), bounds.min_row, bounds.min_col)
        },
    )
}
