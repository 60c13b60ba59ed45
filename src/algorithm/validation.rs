//! Placement legality and whole-layout consistency checks

use ndarray::Array2;

use crate::io::error::{CrosswordError, Result};
use crate::spatial::{Anchor, Cell, Grid, PlacedSet};

/// Test whether a word can be written from an anchor without conflict
///
/// Every target cell must lie within the grid and be either blank or already
/// hold the word's letter at that index.
pub fn can_place(grid: &Grid, word: &str, anchor: Anchor) -> bool {
    let (rows, cols) = (grid.rows(), grid.cols());
    word.chars().enumerate().all(|(index, letter)| {
        anchor
            .cell(index, rows, cols)
            .and_then(|(row, col)| grid.get(row, col))
            .is_some_and(|cell| cell.accepts(letter))
    })
}

/// Check a finished layout against its placement record
///
/// Verifies for every placed word that its cells are contiguous, match its
/// length, and spell it on the grid; then that every lit cell is claimed by
/// at least one word.
///
/// # Errors
///
/// Returns `InvariantViolation` naming the first offending cell.
pub fn verify_layout(grid: &Grid, placed: &PlacedSet) -> Result<()> {
    let mut claimed = Array2::from_elem((grid.rows(), grid.cols()), false);

    for entry in placed {
        let placement = &entry.placement;
        let (start_row, start_col) = placement.start().unwrap_or((0, 0));

        if placement.len() != entry.word.chars().count() || !placement.is_contiguous() {
            return Err(CrosswordError::InvariantViolation {
                row: start_row,
                col: start_col,
                reason: format!("placement of '{}' is not a straight run of its length", entry.word),
            });
        }

        for (&(row, col), letter) in placement.cells().iter().zip(entry.word.chars()) {
            if grid.get(row, col) != Some(Cell::Letter(letter)) {
                return Err(CrosswordError::InvariantViolation {
                    row,
                    col,
                    reason: format!("cell does not hold '{letter}' of '{}'", entry.word),
                });
            }
            if let Some(flag) = claimed.get_mut([row, col]) {
                *flag = true;
            }
        }
    }

    for ((row, col), cell) in grid.cells().indexed_iter() {
        let is_claimed = claimed.get([row, col]).copied().unwrap_or(false);
        if !cell.is_blank() && !is_claimed {
            return Err(CrosswordError::InvariantViolation {
                row,
                col,
                reason: "letter is not owned by any placed word".to_string(),
            });
        }
    }

    Ok(())
}
