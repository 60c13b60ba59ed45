//! Input/output, configuration, and error handling

/// Command-line interface and puzzle preview output
pub mod cli;
/// Constants and case policy
pub mod configuration;
/// Error types and constructors
pub mod error;
/// Attempt progress display
pub mod progress;
/// Word and clue list parsing
pub mod wordlist;
