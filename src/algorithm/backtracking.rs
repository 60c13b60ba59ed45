//! Depth-first word placement with undo
//!
//! Words are placed longest first. The first word is seeded at the centre of
//! the grid and every later word must cross an existing letter. Candidate
//! anchors are shuffled with the caller's generator before trial, and the
//! first complete layout found is kept.

use rand::{rngs::StdRng, seq::SliceRandom};
use std::cmp::Reverse;
use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::algorithm::intersections::{find_intersections, seed_anchors};
use crate::algorithm::occupancy::OccupancyLayer;
use crate::io::configuration::{DEFAULT_BACKTRACK_BUDGET, INTERRUPT_FREQUENCY};
use crate::io::error::{CrosswordError, Result, invalid_input};
use crate::spatial::{Grid, PlacedSet, Placement};

/// How a single search attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Every word was placed
    Solved,
    /// Every candidate at every level was tried without success
    Exhausted,
    /// The backtrack or time budget ran out first
    Abandoned,
}

/// Limits on the work a single attempt may do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBudget {
    /// Maximum number of undone placements
    pub max_backtracks: usize,
    /// Optional wall-clock limit
    pub time_limit: Option<Duration>,
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self {
            max_backtracks: DEFAULT_BACKTRACK_BUDGET,
            time_limit: None,
        }
    }
}

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Search states entered (one per word index visited)
    pub states: usize,
    /// Placements undone after their subtree failed
    pub backtracks: usize,
    /// Candidate anchors generated
    pub candidates: usize,
    /// Most words simultaneously placed
    pub deepest: usize,
    /// Attempts contributing to these counters
    pub attempts: usize,
    /// Time spent searching
    pub elapsed: Duration,
}

impl SearchStatistics {
    /// Fold another attempt's counters into these
    pub fn absorb(&mut self, other: &Self) {
        self.states += other.states;
        self.backtracks += other.backtracks;
        self.candidates += other.candidates;
        self.deepest = self.deepest.max(other.deepest);
        self.attempts += other.attempts;
        self.elapsed += other.elapsed;
    }
}

/// Stable sort by descending character count
pub fn order_words<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    let mut ordered: Vec<String> = words.iter().map(|word| word.as_ref().to_string()).collect();
    ordered.sort_by_key(|word| Reverse(word.chars().count()));
    ordered
}

/// Reject word lists the search cannot meaningfully run on
///
/// # Errors
///
/// Returns `InvalidInput` for an empty list, an empty word, a repeated word,
/// or a word longer than `side`.
pub fn validate_words<S: AsRef<str>>(words: &[S], side: usize) -> Result<()> {
    if words.is_empty() {
        return Err(invalid_input(&"word list is empty"));
    }

    let mut seen = HashSet::with_capacity(words.len());
    for word in words {
        let word = word.as_ref();
        let length = word.chars().count();
        if length == 0 {
            return Err(invalid_input(&"word list contains an empty word"));
        }
        if length > side {
            return Err(invalid_input(&format!(
                "'{word}' has {length} letters but the grid side is {side}"
            )));
        }
        if !seen.insert(word) {
            return Err(invalid_input(&format!("'{word}' appears more than once")));
        }
    }

    Ok(())
}

/// Search state for one attempt: grid, ownership counts, and committed words
pub struct BacktrackingPlacer {
    words: Vec<String>,
    grid: Grid,
    occupancy: OccupancyLayer,
    placed: PlacedSet,
    budget: SearchBudget,
    statistics: SearchStatistics,
    deadline: Option<Instant>,
}

impl BacktrackingPlacer {
    /// Create a placer on a grid sized from the words
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the word list fails [`validate_words`].
    pub fn new<S: AsRef<str>>(words: &[S], budget: SearchBudget) -> Result<Self> {
        Self::with_side(words, Grid::side_for_words(words), budget)
    }

    /// Create a placer on a grid of an explicit side length
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the word list fails [`validate_words`].
    pub fn with_side<S: AsRef<str>>(words: &[S], side: usize, budget: SearchBudget) -> Result<Self> {
        validate_words(words, side)?;
        let grid = Grid::new(side);
        let occupancy = OccupancyLayer::for_grid(&grid);

        Ok(Self {
            words: order_words(words),
            grid,
            occupancy,
            placed: PlacedSet::new(),
            budget,
            statistics: SearchStatistics::default(),
            deadline: None,
        })
    }

    /// Words in placement order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Current grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current committed words
    pub const fn placed(&self) -> &PlacedSet {
        &self.placed
    }

    /// Counters for this attempt
    pub const fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Run the search
    ///
    /// On `Solved` the grid and placed set hold the layout. On any other
    /// outcome both are back to empty.
    pub fn run(&mut self, rng: &mut StdRng) -> SearchOutcome {
        let started = Instant::now();
        self.deadline = self
            .budget
            .time_limit
            .and_then(|limit| started.checked_add(limit));
        self.statistics.attempts += 1;

        let outcome = self.place_from(0, rng);

        self.statistics.elapsed += started.elapsed();
        outcome
    }

    /// Take the grid, placements, and counters
    pub fn into_parts(self) -> (Grid, PlacedSet, SearchStatistics) {
        (self.grid, self.placed, self.statistics)
    }

    fn place_from(&mut self, index: usize, rng: &mut StdRng) -> SearchOutcome {
        let Some(word) = self.words.get(index).cloned() else {
            return SearchOutcome::Solved;
        };

        self.statistics.states += 1;
        if self.budget_spent() {
            return SearchOutcome::Abandoned;
        }

        let mut candidates = if index == 0 {
            seed_anchors(&word, &self.grid)
        } else {
            find_intersections(&word, &self.grid, &self.placed)
        };
        self.statistics.candidates += candidates.len();
        candidates.shuffle(rng);

        let length = word.chars().count();
        for anchor in candidates {
            let Some(placement) =
                Placement::from_anchor(anchor, length, self.grid.rows(), self.grid.cols())
            else {
                continue;
            };

            self.occupancy.claim(&mut self.grid, &word, &placement);
            self.placed.push(word.as_str(), placement);
            self.statistics.deepest = self.statistics.deepest.max(self.placed.len());

            let outcome = self.place_from(index + 1, rng);
            if outcome == SearchOutcome::Solved {
                return outcome;
            }

            self.undo_last();
            if outcome == SearchOutcome::Abandoned {
                return outcome;
            }
            self.statistics.backtracks += 1;
        }

        SearchOutcome::Exhausted
    }

    fn undo_last(&mut self) {
        if let Some(entry) = self.placed.pop() {
            self.occupancy.release(&mut self.grid, &entry.placement);
        }
    }

    fn budget_spent(&self) -> bool {
        if self.statistics.backtracks >= self.budget.max_backtracks {
            return true;
        }
        self.statistics.states % INTERRUPT_FREQUENCY == 0
            && self
                .deadline
                .is_some_and(|deadline| Instant::now() >= deadline)
    }
}

/// Run a single search attempt over a word list
///
/// # Errors
///
/// Returns:
/// - `InvalidInput` if the word list fails [`validate_words`]
/// - `Infeasible` if the search is exhausted
/// - `SearchAbandoned` if the budget runs out
pub fn place_words<S: AsRef<str>>(
    words: &[S],
    rng: &mut StdRng,
    budget: SearchBudget,
) -> Result<(Grid, PlacedSet)> {
    let mut placer = BacktrackingPlacer::new(words, budget)?;

    match placer.run(rng) {
        SearchOutcome::Solved => {
            let (grid, placed, _) = placer.into_parts();
            Ok((grid, placed))
        }
        SearchOutcome::Exhausted => Err(CrosswordError::Infeasible {
            attempts: 1,
            words_placed: placer.statistics().deepest,
            words_total: placer.words().len(),
        }),
        SearchOutcome::Abandoned => Err(CrosswordError::SearchAbandoned {
            attempts: 1,
            backtracks: placer.statistics().backtracks,
        }),
    }
}
