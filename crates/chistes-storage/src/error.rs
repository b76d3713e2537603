//! Storage error types for chistes-storage.

use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying SQLite call failed.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Applying schema migrations failed.
    #[error("migration error: {0}")]
    Migration(String),

    /// Joke text was empty.
    #[error("joke text must not be empty")]
    EmptyText,

    /// No joke is stored under the given number.
    #[error("joke not found: {0}")]
    JokeNotFound(i64),
}
