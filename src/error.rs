//! Error types for simdvec operations.
//!
//! Vector arithmetic itself never fails: out-of-domain results are carried as
//! IEEE-754 infinities and NaNs. Errors only arise where untyped input enters
//! the crate, i.e. slice conversions and batch operations.

use std::fmt;

/// Errors that can occur during simdvec operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// A slice did not have the length the operation requires.
    LengthError {
        /// The length the operation needed.
        expected: usize,
        /// The length that was provided.
        actual: usize,
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::LengthError {
                expected,
                actual,
                message,
            } => write!(
                f,
                "Length mismatch: {} (expected {}, got {})",
                message, expected, actual
            ),
        }
    }
}

impl std::error::Error for VectorError {}

/// Result type alias for simdvec operations.
pub type Result<T> = std::result::Result<T, VectorError>;

/// Creates a length error.
pub fn length_error(expected: usize, actual: usize, message: impl Into<String>) -> VectorError {
    VectorError::LengthError {
        expected,
        actual,
        message: message.into(),
    }
}

/// Returns a length error unless `actual == expected`.
pub(crate) fn check_length(expected: usize, actual: usize, what: &str) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(length_error(expected, actual, what))
    }
}
