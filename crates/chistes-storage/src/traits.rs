//! The [`JokeStore`] trait defining the storage contract for jokes.
//!
//! All backends (InMemoryStore, SqliteStore) implement this trait, so the
//! server can swap them without touching handler code.

use chistes_core::{Joke, JokeNumber};

use crate::error::StorageError;

/// The storage contract for jokes.
///
/// The trait is synchronous; callers serialize access (the server keeps the
/// store behind an async mutex).
pub trait JokeStore {
    /// Number the next created joke will receive.
    ///
    /// 1 if no joke was ever stored, otherwise the highest number ever
    /// assigned + 1. Deletions never lower it, so no number is reused.
    fn next_available_number(&self) -> Result<JokeNumber, StorageError>;

    /// Stores `text` under [`next_available_number`](Self::next_available_number)
    /// and returns the stored record.
    ///
    /// Fails with [`StorageError::EmptyText`] if `text` is empty.
    fn create(&mut self, text: &str) -> Result<Joke, StorageError>;

    /// Looks up a joke by number.
    fn find_by_number(&self, number: JokeNumber) -> Result<Option<Joke>, StorageError>;

    /// Replaces the text of an existing joke.
    ///
    /// Fails with [`StorageError::JokeNotFound`] if no joke has `number`.
    fn update_text(&mut self, number: JokeNumber, text: &str) -> Result<Joke, StorageError>;

    /// Removes a joke, returning how many records were deleted (0 or 1).
    fn delete(&mut self, number: JokeNumber) -> Result<usize, StorageError>;

    /// All stored jokes in ascending number order.
    fn list(&self) -> Result<Vec<Joke>, StorageError>;
}

/// Shared text check for all backends.
pub(crate) fn ensure_text(text: &str) -> Result<(), StorageError> {
    chistes_core::validate_text(text).map_err(|_| StorageError::EmptyText)
}
