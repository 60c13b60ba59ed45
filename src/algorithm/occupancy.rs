//! Reference-counted cell ownership for reversible placements
//!
//! Two crossing words share a cell. Blanking every cell of a word on undo
//! would erase the letter still owned by the other word, so each cell keeps a
//! count of the words covering it. A letter is written when the count leaves
//! zero and blanked only when it returns to zero.

use ndarray::Array2;

use crate::spatial::{Cell, Grid, Placement};

/// Per-cell count of committed words covering each grid position
#[derive(Debug, Clone)]
pub struct OccupancyLayer {
    owners: Array2<u32>,
}

impl OccupancyLayer {
    /// Create a layer with no owners, matching a grid's dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            owners: Array2::zeros((rows, cols)),
        }
    }

    /// Create a layer sized for a grid
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.rows(), grid.cols())
    }

    /// Number of committed words covering a cell
    pub fn owners(&self, row: usize, col: usize) -> u32 {
        self.owners.get([row, col]).copied().unwrap_or(0)
    }

    /// Whether no cell has an owner
    pub fn is_clear(&self) -> bool {
        self.owners.iter().all(|&count| count == 0)
    }

    /// Write a word into the grid and take ownership of its cells
    ///
    /// The placement must already have passed the validator. Returns the
    /// number of cells that were blank before this call.
    pub fn claim(&mut self, grid: &mut Grid, word: &str, placement: &Placement) -> usize {
        let mut newly_lit = 0;

        for (&(row, col), letter) in placement.cells().iter().zip(word.chars()) {
            if let Some(count) = self.owners.get_mut([row, col]) {
                if *count == 0 {
                    grid.set(row, col, Cell::Letter(letter));
                    newly_lit += 1;
                }
                *count = count.saturating_add(1);
            }
        }

        newly_lit
    }

    /// Give up ownership of a word's cells, blanking those left unowned
    ///
    /// Returns the number of cells blanked.
    pub fn release(&mut self, grid: &mut Grid, placement: &Placement) -> usize {
        let mut cleared = 0;

        for &(row, col) in placement.cells() {
            if let Some(count) = self.owners.get_mut([row, col]) {
                *count = count.saturating_sub(1);
                if *count == 0 {
                    grid.set(row, col, Cell::Blank);
                    cleared += 1;
                }
            }
        }

        cleared
    }
}
