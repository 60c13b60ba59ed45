//! Letter grid with an explicit blank sentinel
//!
//! A search attempt works on a square grid sized once from the word list.
//! The grid never grows: words that would run past an edge are rejected by
//! the placement validator instead. Trimmed grids may be any rectangle.

use ndarray::Array2;
use std::fmt;

use crate::io::configuration::{BLANK_DISPLAY, GRID_SIZE_FACTOR};

/// Contents of a single grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// No letter placed yet
    #[default]
    Blank,
    /// A placed letter
    Letter(char),
}

impl Cell {
    /// Test for the blank sentinel
    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Blank)
    }

    /// Letter stored in the cell, if any
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Blank => None,
            Self::Letter(letter) => Some(letter),
        }
    }

    /// Whether `letter` may be written here without conflict
    pub fn accepts(self, letter: char) -> bool {
        match self {
            Self::Blank => true,
            Self::Letter(existing) => existing == letter,
        }
    }
}

/// Character buffer addressed by `(row, col)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Create a `size × size` grid of blanks
    pub fn new(size: usize) -> Self {
        Self::with_dimensions(size, size)
    }

    /// Create a `rows × cols` grid of blanks
    pub fn with_dimensions(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), Cell::Blank),
        }
    }

    /// Wrap an existing cell array
    pub const fn from_cells(cells: Array2<Cell>) -> Self {
        Self { cells }
    }

    /// Build a grid from text rows, reading [`BLANK_DISPLAY`] as blank
    ///
    /// Returns `None` when the rows have differing lengths.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Option<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().chars().count());
        let mut cells = Vec::with_capacity(rows.len() * cols);

        for row in rows {
            let before = cells.len();
            cells.extend(row.as_ref().chars().map(|ch| {
                if ch == BLANK_DISPLAY {
                    Cell::Blank
                } else {
                    Cell::Letter(ch)
                }
            }));
            if cells.len() - before != cols {
                return None;
            }
        }

        Array2::from_shape_vec((rows.len(), cols), cells)
            .ok()
            .map(Self::from_cells)
    }

    /// Side length needed for a word list: the longest word times [`GRID_SIZE_FACTOR`]
    pub fn side_for_words<S: AsRef<str>>(words: &[S]) -> usize {
        words
            .iter()
            .map(|word| word.as_ref().chars().count())
            .max()
            .unwrap_or(0)
            * GRID_SIZE_FACTOR
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Total number of cells
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Cell at a position, or `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get([row, col]).copied()
    }

    /// Overwrite a cell
    ///
    /// Returns `false` without writing when the position is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        self.cells.get_mut([row, col]).is_some_and(|slot| {
            *slot = cell;
            true
        })
    }

    /// Underlying cell array
    pub const fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    /// Number of non-blank cells
    pub fn letter_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_blank()).count()
    }

    /// Whether every cell holds the blank sentinel
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_blank())
    }

    /// Text of a single row with blanks shown as [`BLANK_DISPLAY`]
    pub fn row_text(&self, row: usize) -> Option<String> {
        (row < self.rows()).then(|| {
            self.cells
                .row(row)
                .iter()
                .map(|cell| cell.letter().unwrap_or(BLANK_DISPLAY))
                .collect()
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.rows().into_iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.letter().unwrap_or(BLANK_DISPLAY))?;
            }
        }
        Ok(())
    }
}
