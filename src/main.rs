//! CLI entry point for the crossword grid generator

use clap::Parser;
use crossgrid::io::cli::{Cli, PuzzleProcessor};

fn main() -> crossgrid::Result<()> {
    let cli = Cli::parse();
    let processor = PuzzleProcessor::new(cli);
    processor.process()
}
