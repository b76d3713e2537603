//! Core error types for chistes-core.
//!
//! Uses `thiserror` for structured, matchable variants covering input
//! validation and arithmetic failures.

use thiserror::Error;

/// Errors produced by the chistes-core crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Joke text was empty.
    #[error("joke text must not be empty")]
    EmptyText,

    /// Provider name was not one of the known upstream sources.
    #[error("unknown joke provider: '{name}'")]
    UnknownProvider { name: String },

    /// An LCM operand was zero or negative.
    #[error("operand must be a positive integer, got {value}")]
    NonPositiveOperand { value: i64 },

    /// A fold was asked to reduce an empty list.
    #[error("at least one value is required")]
    EmptyInput,

    /// The result does not fit in an i64.
    #[error("arithmetic overflow")]
    Overflow,
}
