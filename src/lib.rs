//! Backtracking word placement engine for interlocking crossword grids
//!
//! Words are placed longest first on a square grid twice as wide as the
//! longest word. The first word is seeded at the centre; every later word
//! must cross a letter already on the grid. A seeded depth-first search tries
//! the candidate crossings in random order and undoes placements that lead
//! nowhere. The finished grid is cropped to its letters and returned with
//! every word's cells and the crop offset.

#![forbid(unsafe_code)]

/// Placement validation, candidate generation, and the backtracking search
pub mod algorithm;
/// Input parsing, configuration, command-line interface, and errors
pub mod io;
/// Finished puzzles and clue lookup
pub mod puzzle;
/// Grid storage, word placements, and trimming
pub mod spatial;

pub use algorithm::executor::{GeneratorConfig, generate};
pub use io::error::{CrosswordError, Result};
pub use puzzle::Puzzle;
