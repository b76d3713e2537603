//! In-memory implementation of [`JokeStore`].
//!
//! [`InMemoryStore`] is a first-class backend for tests and ephemeral runs
//! where persistence isn't needed. It keeps jokes in a `BTreeMap` ordered by
//! number plus the last number handed out, with the same semantics as the
//! SQLite backend.

use std::collections::BTreeMap;

use chistes_core::{Joke, JokeNumber};

use crate::error::StorageError;
use crate::traits::{ensure_text, JokeStore};

/// In-memory joke store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    jokes: BTreeMap<JokeNumber, String>,
    /// Highest number ever assigned. Deletes never lower it.
    last_assigned: Option<JokeNumber>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl JokeStore for InMemoryStore {
    fn next_available_number(&self) -> Result<JokeNumber, StorageError> {
        Ok(self
            .last_assigned
            .map(JokeNumber::next)
            .unwrap_or(JokeNumber::FIRST))
    }

    fn create(&mut self, text: &str) -> Result<Joke, StorageError> {
        ensure_text(text)?;
        let numero = self.next_available_number()?;
        self.jokes.insert(numero, text.to_string());
        self.last_assigned = Some(numero);
        Ok(Joke {
            numero,
            texto: text.to_string(),
        })
    }

    fn find_by_number(&self, number: JokeNumber) -> Result<Option<Joke>, StorageError> {
        Ok(self.jokes.get(&number).map(|texto| Joke {
            numero: number,
            texto: texto.clone(),
        }))
    }

    fn update_text(&mut self, number: JokeNumber, text: &str) -> Result<Joke, StorageError> {
        ensure_text(text)?;
        let slot = self
            .jokes
            .get_mut(&number)
            .ok_or(StorageError::JokeNotFound(number.0))?;
        *slot = text.to_string();
        Ok(Joke {
            numero: number,
            texto: text.to_string(),
        })
    }

    fn delete(&mut self, number: JokeNumber) -> Result<usize, StorageError> {
        Ok(usize::from(self.jokes.remove(&number).is_some()))
    }

    fn list(&self) -> Result<Vec<Joke>, StorageError> {
        Ok(self
            .jokes
            .iter()
            .map(|(numero, texto)| Joke {
                numero: *numero,
                texto: texto.clone(),
            })
            .collect())
    }
}
