//! Attempt progress display on stderr

use crate::algorithm::backtracking::SearchOutcome;
use crate::algorithm::executor::AttemptReport;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static ATTEMPT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Attempts: [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar advancing once per finished search attempt
pub struct AttemptProgress {
    bar: ProgressBar,
}

impl AttemptProgress {
    /// Create a bar for up to `max_attempts` attempts
    pub fn new(max_attempts: usize) -> Self {
        let bar = ProgressBar::new(max_attempts as u64);
        bar.set_style(ATTEMPT_STYLE.clone());
        Self { bar }
    }

    /// Create a bar that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Record a finished attempt
    pub fn record(&self, report: &AttemptReport) {
        self.bar.set_position(report.attempt as u64);
        self.bar.set_message(Self::describe(report));
    }

    /// One-line description of an attempt
    pub fn describe(report: &AttemptReport) -> String {
        let verdict = match report.outcome {
            SearchOutcome::Solved => "solved",
            SearchOutcome::Exhausted => "exhausted",
            SearchOutcome::Abandoned => "abandoned",
        };
        format!(
            "seed {:#018x} {verdict} ({} states, {} backtracks)",
            report.seed, report.statistics.states, report.statistics.backtracks
        )
    }

    /// Current bar position
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
