//! Command-line interface for generating a puzzle from a word list file

use crate::algorithm::executor::{Generator, GeneratorConfig};
use crate::io::configuration::{
    CasePolicy, DEFAULT_BACKTRACK_BUDGET, DEFAULT_BEST_OF, DEFAULT_MAX_ATTEMPTS, DEFAULT_SEED,
};
use crate::io::error::Result;
use crate::io::progress::AttemptProgress;
use crate::io::wordlist::PuzzleInput;
use crate::puzzle::Puzzle;
use crate::puzzle::clues::ClueMap;
use crate::spatial::Orientation;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "crossgrid")]
#[command(
    author,
    version,
    about = "Lay out words as an interlocking crossword grid"
)]
/// Command-line arguments for the puzzle generator
pub struct Cli {
    /// Word list file, one word per line
    #[arg(value_name = "WORDS")]
    pub words: PathBuf,

    /// Clue list file, one clue per line in word order
    #[arg(short, long)]
    pub clues: Option<PathBuf>,

    /// Puzzle title shown above the preview
    #[arg(short = 'T', long)]
    pub title: Option<String>,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Maximum search attempts
    #[arg(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub attempts: usize,

    /// Backtracks allowed per attempt
    #[arg(short, long, default_value_t = DEFAULT_BACKTRACK_BUDGET)]
    pub budget: usize,

    /// Wall-clock limit per attempt in milliseconds
    #[arg(short, long)]
    pub timeout_ms: Option<u64>,

    /// Fixed grid side instead of twice the longest word
    #[arg(long)]
    pub side: Option<usize>,

    /// Compare this many solved layouts and keep the most compact
    #[arg(short = 'k', long, default_value_t = DEFAULT_BEST_OF)]
    pub best_of: usize,

    /// Upper-case words before placement
    #[arg(short, long)]
    pub uppercase: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Generator configuration described by the arguments
    pub fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            seed: self.seed,
            max_attempts: self.attempts,
            backtrack_budget: self.budget,
            time_budget: self.timeout_ms.map(Duration::from_millis),
            best_of: self.best_of,
            case_policy: if self.uppercase {
                CasePolicy::Upper
            } else {
                CasePolicy::Preserve
            },
            grid_side: self.side,
        }
    }
}

/// Loads input, runs the generator, and writes the preview
pub struct PuzzleProcessor {
    cli: Cli,
}

impl PuzzleProcessor {
    /// Create a processor for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate the puzzle and write its preview to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if input loading, generation, or output fails
    pub fn process(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.process_into(&mut out)
    }

    /// Generate the puzzle and write its preview to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if input loading, generation, or output fails
    // Allow print for the run summary
    #[allow(clippy::print_stderr)]
    pub fn process_into(&self, out: &mut impl Write) -> Result<()> {
        let input = PuzzleInput::load(
            &self.cli.words,
            self.cli.clues.as_deref(),
            self.cli.title.clone(),
        )?;
        let config = self.cli.config();

        let progress = if self.cli.should_show_progress() {
            AttemptProgress::new(config.max_attempts)
        } else {
            AttemptProgress::hidden()
        };

        let mut generator = Generator::new(config)?;
        let result =
            generator.generate_with_observer(&input.words, |report| progress.record(report));
        progress.finish();
        let puzzle = result?;

        if self.cli.should_show_progress() {
            let stats = puzzle.statistics();
            eprintln!(
                "Placed {} words on a {}x{} grid after {} attempt(s), {} states, {} backtracks in {:.1?}",
                puzzle.placements().len(),
                puzzle.grid().rows(),
                puzzle.grid().cols(),
                stats.attempts,
                stats.states,
                stats.backtracks,
                stats.elapsed
            );
        }

        out.write_all(render_preview(&puzzle, &input.clues, input.title.as_deref()).as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// Plain-text view of a puzzle: title, grid, then words grouped by orientation
///
/// Word positions are given in trimmed-grid coordinates.
pub fn render_preview(puzzle: &Puzzle, clues: &ClueMap, title: Option<&str>) -> String {
    let mut lines = Vec::new();

    if let Some(title) = title {
        lines.push(title.to_string());
        lines.push(String::new());
    }

    lines.push(puzzle.grid().to_string());

    for orientation in Orientation::ALL {
        let words = puzzle.words_in(orientation);
        if words.is_empty() {
            continue;
        }
        lines.push(String::new());
        lines.push(orientation.label().to_string());
        for entry in words {
            let (row, col) = puzzle
                .relative_placement(&entry.word)
                .and_then(|placement| placement.start())
                .unwrap_or_default();
            lines.push(format!(
                "  ({row}, {col}) {}: {}",
                entry.word,
                clues.clue_for(&entry.word)
            ));
        }
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
