//! Error types for tempora-core operations.

use thiserror::Error;

use crate::duration::TemporalKind;
use crate::field::DateField;

/// Error type for all fallible temporal operations.
///
/// Every variant is a local, recoverable condition surfaced at the point of
/// the offending call. Nothing is retried internally; retry policy belongs
/// to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemporalError {
    /// A field combination that does not denote a real calendar date.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// A wall-clock field outside its range.
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    /// Input text that does not match the expected canonical grammar.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A field identifier not supported by the requested operation.
    #[error("Unsupported field {field} for {operation}")]
    UnsupportedField {
        /// The rejected field.
        field: DateField,
        /// The operation that rejected it.
        operation: &'static str,
    },

    /// A duration computation between operands of different temporal kinds,
    /// or against a bare calendar date.
    #[error("Cannot compute a duration between {left} and {right}")]
    Incompatible {
        /// Kind of the first operand.
        left: TemporalKind,
        /// Kind of the second operand.
        right: TemporalKind,
    },

    /// Arithmetic overflow during normalization or span computation.
    #[error("Arithmetic overflow: {0}")]
    Overflow(&'static str),
}

pub type Result<T> = std::result::Result<T, TemporalError>;
