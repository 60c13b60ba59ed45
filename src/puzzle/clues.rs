//! Clue text for placed words
//!
//! Clues are looked up by word regardless of case. Words without a clue get
//! a fixed placeholder so every entry in a listing has text.

use std::collections::HashMap;

use crate::io::configuration::MISSING_CLUE;
use crate::io::error::{Result, invalid_input};

/// Clue text keyed by lower-cased word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClueMap {
    clues: HashMap<String, String>,
}

impl ClueMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair words with clues by position
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the two lists differ in length.
    pub fn from_pairs<W: AsRef<str>, C: AsRef<str>>(words: &[W], clues: &[C]) -> Result<Self> {
        if words.len() != clues.len() {
            return Err(invalid_input(&format!(
                "{} words but {} clues",
                words.len(),
                clues.len()
            )));
        }

        let mut map = Self::new();
        for (word, clue) in words.iter().zip(clues) {
            map.insert(word.as_ref(), clue.as_ref());
        }
        Ok(map)
    }

    /// Set the clue for a word, replacing any previous one
    pub fn insert(&mut self, word: &str, clue: &str) {
        self.clues.insert(word.to_lowercase(), clue.to_string());
    }

    /// Clue for a word, ignoring case
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.clues.get(&word.to_lowercase()).map(String::as_str)
    }

    /// Clue for a word, or [`MISSING_CLUE`]
    pub fn clue_for(&self, word: &str) -> &str {
        self.lookup(word).unwrap_or(MISSING_CLUE)
    }

    /// Number of clues
    pub fn len(&self) -> usize {
        self.clues.len()
    }

    /// Whether the map holds no clues
    pub fn is_empty(&self) -> bool {
        self.clues.is_empty()
    }
}
