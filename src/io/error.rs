//! Error types for word placement and puzzle input handling

use std::fmt;
use std::path::PathBuf;

/// Main error type for all crossword generation operations
#[derive(Debug)]
pub enum CrosswordError {
    /// Word list rejected before any search began
    ///
    /// Raised for:
    /// - An empty word list
    /// - An empty word
    /// - The same word appearing twice (after case normalisation)
    /// - A word longer than the grid side
    InvalidInput {
        /// Description of what's wrong with the input
        reason: String,
    },

    /// The search visited every candidate at every level without a full layout
    ///
    /// Exhaustion does not depend on candidate order, so retrying with another
    /// seed cannot succeed.
    Infeasible {
        /// Number of attempts made before giving up
        attempts: usize,
        /// Most words simultaneously placed at any point of the search
        words_placed: usize,
        /// Total number of words requested
        words_total: usize,
    },

    /// Every attempt ran out of its backtrack or time budget
    SearchAbandoned {
        /// Number of attempts made
        attempts: usize,
        /// Backtracks performed across all attempts
        backtracks: usize,
    },

    /// A solved layout disagrees with its own placement record
    ///
    /// Indicates a defect in the undo bookkeeping rather than a bad input.
    InvariantViolation {
        /// Grid row of the offending cell
        row: usize,
        /// Grid column of the offending cell
        col: usize,
        /// Explanation of the disagreement
        reason: String,
    },

    /// Generator parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for CrosswordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => {
                write!(f, "Invalid input: {reason}")
            }
            Self::Infeasible {
                attempts,
                words_placed,
                words_total,
            } => {
                write!(
                    f,
                    "No interlocking layout exists after {attempts} attempt(s) \
                     (at most {words_placed} of {words_total} words placed)"
                )
            }
            Self::SearchAbandoned {
                attempts,
                backtracks,
            } => {
                write!(
                    f,
                    "Search abandoned after {attempts} attempt(s) and {backtracks} backtracks"
                )
            }
            Self::InvariantViolation { row, col, reason } => {
                write!(f, "Layout invariant violated at ({row}, {col}): {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for CrosswordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl CrosswordError {
    /// Whether the failure came from the search rather than from bad input
    pub const fn is_search_failure(&self) -> bool {
        matches!(
            self,
            Self::Infeasible { .. } | Self::SearchAbandoned { .. }
        )
    }
}

/// Convenience type alias for crossword results
pub type Result<T> = std::result::Result<T, CrosswordError>;

impl From<std::io::Error> for CrosswordError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid input error
pub fn invalid_input(reason: &impl ToString) -> CrosswordError {
    CrosswordError::InvalidInput {
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CrosswordError {
    CrosswordError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Attach a path and operation to an I/O failure
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> CrosswordError {
    let path = path.into();
    move |source| CrosswordError::FileSystem {
        path,
        operation,
        source,
    }
}
