//! Error types for gridding operations.

use thiserror::Error;

/// Errors that can occur while building a grid.
///
/// Every failure is a caller-input error, detected before any output is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// An array size disagrees with the dimensionality or the number of points.
    #[error("shape mismatch in `{argument}`: expected {expected}, found {found}")]
    ShapeMismatch {
        /// The argument whose size is wrong.
        argument: &'static str,
        /// Human readable description of the accepted sizes.
        expected: String,
        /// The size that was actually supplied.
        found: usize,
    },

    /// Options are missing or hold values the grid cannot be built from.
    #[error("invalid configuration of `{argument}`: {reason}")]
    Configuration {
        /// The option at fault.
        argument: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

impl GridError {
    pub(crate) fn shape(argument: &'static str, expected: impl Into<String>, found: usize) -> Self {
        GridError::ShapeMismatch { argument, expected: expected.into(), found }
    }

    pub(crate) fn config(argument: &'static str, reason: impl Into<String>) -> Self {
        GridError::Configuration { argument, reason: reason.into() }
    }

    /// The name of the argument that caused the error.
    pub fn argument(&self) -> &'static str {
        match self {
            GridError::ShapeMismatch { argument, .. } => argument,
            GridError::Configuration { argument, .. } => argument,
        }
    }
}

/// Result type for gridding operations.
pub type GridResult<T> = std::result::Result<T, GridError>;
