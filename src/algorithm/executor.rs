//! Retry orchestration around the backtracking placer
//!
//! Each attempt searches a fresh grid with its own generator, seeded from a
//! master generator so that a single configured seed pins every attempt.
//! Abandoned attempts are retried; an exhausted search is final because the
//! full candidate tree does not depend on shuffle order.

use rand::{Rng, SeedableRng, rngs::StdRng};
use std::time::Duration;

use crate::algorithm::backtracking::{
    BacktrackingPlacer, SearchBudget, SearchOutcome, SearchStatistics, validate_words,
};
use crate::algorithm::validation::verify_layout;
use crate::io::configuration::{
    CasePolicy, DEFAULT_BACKTRACK_BUDGET, DEFAULT_BEST_OF, DEFAULT_MAX_ATTEMPTS, DEFAULT_SEED,
};
use crate::io::error::{CrosswordError, Result, invalid_parameter};
use crate::puzzle::Puzzle;
use crate::spatial::Grid;

/// Generator parameters controlling retries, budgets, and word handling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Master seed from which every attempt's seed is drawn
    pub seed: u64,
    /// Maximum number of search attempts
    pub max_attempts: usize,
    /// Backtracks allowed per attempt
    pub backtrack_budget: usize,
    /// Optional wall-clock limit per attempt
    pub time_budget: Option<Duration>,
    /// Number of solved layouts to compare before choosing the most compact
    pub best_of: usize,
    /// Case handling applied to words before placement
    pub case_policy: CasePolicy,
    /// Explicit grid side, overriding the size derived from the words
    pub grid_side: Option<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backtrack_budget: DEFAULT_BACKTRACK_BUDGET,
            time_budget: None,
            best_of: DEFAULT_BEST_OF,
            case_policy: CasePolicy::default(),
            grid_side: None,
        }
    }
}

impl GeneratorConfig {
    /// Check parameter ranges
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a zero attempt count, backtrack budget,
    /// time budget, or `best_of`.
    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(invalid_parameter(
                "max_attempts",
                &self.max_attempts,
                &"at least one attempt is required",
            ));
        }
        if self.backtrack_budget == 0 {
            return Err(invalid_parameter(
                "backtrack_budget",
                &self.backtrack_budget,
                &"must be positive",
            ));
        }
        if let Some(limit) = self.time_budget.filter(Duration::is_zero) {
            return Err(invalid_parameter(
                "time_budget",
                &format!("{limit:?}"),
                &"must be positive",
            ));
        }
        if self.best_of == 0 {
            return Err(invalid_parameter(
                "best_of",
                &self.best_of,
                &"at least one layout must be kept",
            ));
        }
        Ok(())
    }

    /// Per-attempt search limits
    pub const fn budget(&self) -> SearchBudget {
        SearchBudget {
            max_backtracks: self.backtrack_budget,
            time_limit: self.time_budget,
        }
    }
}

/// Seeded source of per-attempt seeds
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic seed source
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw the seed for the next attempt
    pub fn next_seed(&mut self) -> u64 {
        self.rng.random::<u64>()
    }
}

/// Summary of one finished attempt, passed to progress observers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptReport {
    /// 1-based attempt number
    pub attempt: usize,
    /// Configured attempt limit
    pub max_attempts: usize,
    /// Seed used for this attempt
    pub seed: u64,
    /// How the attempt ended
    pub outcome: SearchOutcome,
    /// Counters for this attempt alone
    pub statistics: SearchStatistics,
}

/// Apply the case policy to every word
pub fn prepare_words<S: AsRef<str>>(words: &[S], case_policy: CasePolicy) -> Vec<String> {
    words
        .iter()
        .map(|word| case_policy.apply(word.as_ref()))
        .collect()
}

/// Multi-attempt puzzle generator
pub struct Generator {
    config: GeneratorConfig,
    seeds: RandomSelector,
}

impl Generator {
    /// Create a generator
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration fails validation.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            seeds: RandomSelector::new(config.seed),
        })
    }

    /// Active configuration
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a puzzle
    ///
    /// # Errors
    ///
    /// See [`Generator::generate_with_observer`].
    pub fn generate<S: AsRef<str>>(&mut self, words: &[S]) -> Result<Puzzle> {
        self.generate_with_observer(words, |_| {})
    }

    /// Generate a puzzle, reporting each finished attempt
    ///
    /// With `best_of` above one, attempts continue after the first success
    /// until that many layouts are found or attempts run out; the layout with
    /// the smallest trimmed area wins, earliest first on ties.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `InvalidInput` if the prepared words fail validation
    /// - `Infeasible` if an attempt exhausts the search
    /// - `SearchAbandoned` if every attempt runs out of budget
    /// - `InvariantViolation` if a solved layout fails verification
    pub fn generate_with_observer<S, F>(&mut self, words: &[S], mut observer: F) -> Result<Puzzle>
    where
        S: AsRef<str>,
        F: FnMut(&AttemptReport),
    {
        let words = prepare_words(words, self.config.case_policy);
        let side = self
            .config
            .grid_side
            .unwrap_or_else(|| Grid::side_for_words(&words));
        validate_words(&words, side)?;

        let mut totals = SearchStatistics::default();
        let mut best: Option<Puzzle> = None;
        let mut solved = 0;

        for attempt in 1..=self.config.max_attempts {
            let seed = self.seeds.next_seed();
            let mut rng = StdRng::seed_from_u64(seed);
            let mut placer = BacktrackingPlacer::with_side(&words, side, self.config.budget())?;

            let outcome = placer.run(&mut rng);
            let statistics = *placer.statistics();
            totals.absorb(&statistics);
            observer(&AttemptReport {
                attempt,
                max_attempts: self.config.max_attempts,
                seed,
                outcome,
                statistics,
            });

            match outcome {
                SearchOutcome::Solved => {
                    let (grid, placed, statistics) = placer.into_parts();
                    verify_layout(&grid, &placed)?;
                    let candidate = Puzzle::from_search(&grid, placed, statistics);
                    if best
                        .as_ref()
                        .is_none_or(|current| candidate.area() < current.area())
                    {
                        best = Some(candidate);
                    }
                    solved += 1;
                    if solved >= self.config.best_of {
                        break;
                    }
                }
                SearchOutcome::Exhausted => {
                    return Err(CrosswordError::Infeasible {
                        attempts: attempt,
                        words_placed: totals.deepest,
                        words_total: words.len(),
                    });
                }
                SearchOutcome::Abandoned => {}
            }
        }

        best.map(|puzzle| puzzle.with_statistics(totals))
            .ok_or(CrosswordError::SearchAbandoned {
                attempts: totals.attempts,
                backtracks: totals.backtracks,
            })
    }
}

/// Generate a puzzle with the given configuration
///
/// # Errors
///
/// Returns `InvalidParameter` for a bad configuration, otherwise see
/// [`Generator::generate_with_observer`].
pub fn generate<S: AsRef<str>>(words: &[S], config: GeneratorConfig) -> Result<Puzzle> {
    Generator::new(config)?.generate(words)
}
