//! Error type for reading numeric input.

use std::io;

/// Error type for mathutil.
///
/// The numeric routines themselves are total; every variant describes a
/// failure to obtain one of their inputs.
#[derive(Debug, thiserror::Error)]
pub enum MathError {
    /// A token could not be parsed as the expected kind of number.
    #[error("invalid input: expected {expected}, found {token:?}")]
    InvalidInput {
        /// Human-readable name of the expected kind ("integer", "number").
        expected: &'static str,
        /// The offending token.
        token: String,
    },

    /// Input ended before the value was read.
    #[error("unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),

    /// Reading from the input source failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl MathError {
    /// Convenience constructor for a malformed token.
    #[must_use]
    pub fn invalid(expected: &'static str, token: impl Into<String>) -> Self {
        Self::InvalidInput {
            expected,
            token: token.into(),
        }
    }
}
