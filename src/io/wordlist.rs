//! Word and clue list parsing
//!
//! Lists hold one entry per line. Surrounding whitespace is trimmed and blank
//! lines are skipped. A line consisting of [`WORD_LIST_SEPARATOR`] ends the
//! list; anything after it belongs to another puzzle and is ignored.

use std::fs;
use std::path::Path;

use crate::io::configuration::WORD_LIST_SEPARATOR;
use crate::io::error::{Result, file_system};
use crate::puzzle::clues::ClueMap;

/// Parse list text into entries
pub fn parse_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .take_while(|line| *line != WORD_LIST_SEPARATOR)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read and parse a list file
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read.
pub fn read_list(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(file_system(path, "read"))?;
    Ok(parse_list(&text))
}

/// Everything a caller supplies for one puzzle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PuzzleInput {
    /// Optional puzzle title
    pub title: Option<String>,
    /// Words in supplied order
    pub words: Vec<String>,
    /// Clues for the words
    pub clues: ClueMap,
}

impl PuzzleInput {
    /// Load words, and optionally clues paired by position
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `FileSystem` if either file cannot be read
    /// - `InvalidInput` if the clue count differs from the word count
    pub fn load(words_path: &Path, clues_path: Option<&Path>, title: Option<String>) -> Result<Self> {
        let words = read_list(words_path)?;
        let clues = match clues_path {
            Some(path) => ClueMap::from_pairs(&words, &read_list(path)?)?,
            None => ClueMap::new(),
        };

        Ok(Self {
            title,
            words,
            clues,
        })
    }
}
