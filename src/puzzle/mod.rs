//! Finished puzzle handed to layout and rendering collaborators
//!
//! A puzzle carries the trimmed grid, the placements in the coordinates of
//! the search grid, and the offset that maps one onto the other. Renderers
//! number clues and draw pages from this data; nothing here does either.

/// Case-insensitive clue lookup
pub mod clues;

use crate::algorithm::backtracking::SearchStatistics;
use crate::spatial::{Grid, Orientation, PlacedSet, PlacedWord, Placement, trim};

/// Trimmed grid, placement record, and trim offset from one generation
///
/// Equality compares the layout only. Search counters, which include
/// wall-clock time, are ignored.
#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: Grid,
    placements: PlacedSet,
    row_offset: usize,
    col_offset: usize,
    statistics: SearchStatistics,
}

impl PartialEq for Puzzle {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
            && self.placements == other.placements
            && self.offset() == other.offset()
    }
}

impl Eq for Puzzle {}

impl Puzzle {
    /// Trim a solved search grid and package it with its placements
    pub fn from_search(grid: &Grid, placements: PlacedSet, statistics: SearchStatistics) -> Self {
        let (trimmed, row_offset, col_offset) = trim(grid);
        Self {
            grid: trimmed,
            placements,
            row_offset,
            col_offset,
            statistics,
        }
    }

    /// Replace the attached search counters
    #[must_use]
    pub fn with_statistics(mut self, statistics: SearchStatistics) -> Self {
        self.statistics = statistics;
        self
    }

    /// Trimmed grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Placements in search-grid coordinates
    pub const fn placements(&self) -> &PlacedSet {
        &self.placements
    }

    /// Offset to subtract from search-grid coordinates, as `(row, col)`
    pub const fn offset(&self) -> (usize, usize) {
        (self.row_offset, self.col_offset)
    }

    /// Search counters accumulated over all attempts
    pub const fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Area of the trimmed grid
    pub fn area(&self) -> usize {
        self.grid.area()
    }

    /// A word's placement in trimmed-grid coordinates
    pub fn relative_placement(&self, word: &str) -> Option<Placement> {
        self.placements
            .get(word)?
            .translated(self.row_offset, self.col_offset)
    }

    /// A word's cells in trimmed-grid coordinates
    pub fn relative_cells(&self, word: &str) -> Option<Vec<(usize, usize)>> {
        self.relative_placement(word)
            .map(|placement| placement.cells().to_vec())
    }

    /// Words of one orientation ordered by start cell, row first
    pub fn words_in(&self, orientation: Orientation) -> Vec<&PlacedWord> {
        let mut words: Vec<&PlacedWord> = self
            .placements
            .iter()
            .filter(|entry| entry.placement.orientation() == orientation)
            .collect();
        words.sort_by_key(|entry| entry.placement.start());
        words
    }

    /// Horizontal words ordered by start cell
    pub fn across(&self) -> Vec<&PlacedWord> {
        self.words_in(Orientation::Horizontal)
    }

    /// Vertical words ordered by start cell
    pub fn down(&self) -> Vec<&PlacedWord> {
        self.words_in(Orientation::Vertical)
    }

    /// Distinct start cells in trimmed coordinates, in row-major order
    pub fn word_starts(&self) -> Vec<(usize, usize)> {
        let mut starts: Vec<(usize, usize)> = self
            .placements
            .iter()
            .filter_map(|entry| entry.placement.start())
            .filter_map(|(row, col)| {
                Some((
                    row.checked_sub(self.row_offset)?,
                    col.checked_sub(self.col_offset)?,
                ))
            })
            .collect();
        starts.sort_unstable();
        starts.dedup();
        starts
    }
}
