//! Generator constants and runtime configuration defaults

// Grid sizing
/// Grid side as a multiple of the longest word length
pub const GRID_SIZE_FACTOR: usize = 2;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default number of search attempts before giving up
pub const DEFAULT_MAX_ATTEMPTS: usize = 8;

/// Default number of backtracks allowed per attempt
pub const DEFAULT_BACKTRACK_BUDGET: usize = 200_000;

/// Default number of successful layouts to compare (1 keeps the first found)
pub const DEFAULT_BEST_OF: usize = 1;

// Checking the clock on every state is measurable at puzzle scale
/// Number of search states visited between wall-clock checks
pub const INTERRUPT_FREQUENCY: usize = 64;

// Output settings
/// Character used for blank cells in text previews
pub const BLANK_DISPLAY: char = '.';
/// Clue text used when a word has no clue
pub const MISSING_CLUE: &str = "No clue provided";
/// Line that terminates a word or clue list
pub const WORD_LIST_SEPARATOR: &str = "...";

/// How word case is treated before placement
///
/// Letters only intersect when they compare equal, so `a` and `A` never
/// share a cell under [`CasePolicy::Preserve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CasePolicy {
    /// Use words exactly as supplied
    #[default]
    Preserve,
    /// Upper-case every word before placement
    Upper,
}

impl CasePolicy {
    /// Apply the policy to a single word
    pub fn apply(self, word: &str) -> String {
        match self {
            Self::Preserve => word.to_string(),
            Self::Upper => word.to_uppercase(),
        }
    }
}
