//! SQLite implementation of [`JokeStore`].
//!
//! [`SqliteStore`] persists jokes in a SQLite database with WAL mode and
//! automatic schema migrations. Joke numbers come from the `AUTOINCREMENT`
//! primary key, whose high-water mark in `sqlite_sequence` survives deletes.

use rusqlite::{params, Connection, OptionalExtension};

use chistes_core::{Joke, JokeNumber};

use crate::error::StorageError;
use crate::traits::{ensure_text, JokeStore};

/// SQLite-backed implementation of [`JokeStore`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn new(path: &str) -> Result<Self, StorageError> {
        let conn = crate::schema::open_database(path)?;
        Ok(SqliteStore { conn })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteStore { conn })
    }
}

impl JokeStore for SqliteStore {
    fn next_available_number(&self) -> Result<JokeNumber, StorageError> {
        // No row until the first insert.
        let last: Option<i64> = self
            .conn
            .query_row(
                "SELECT seq FROM sqlite_sequence WHERE name = 'jokes'",
                [],
                |row| row.get(0),
            )
            .optional()?;
        Ok(last
            .map(|n| JokeNumber(n).next())
            .unwrap_or(JokeNumber::FIRST))
    }

    fn create(&mut self, text: &str) -> Result<Joke, StorageError> {
        ensure_text(text)?;
        let tx = self.conn.transaction()?;
        tx.execute("INSERT INTO jokes (texto) VALUES (?1)", params![text])?;
        let numero = JokeNumber(tx.last_insert_rowid());
        tx.commit()?;
        Ok(Joke {
            numero,
            texto: text.to_string(),
        })
    }

    fn find_by_number(&self, number: JokeNumber) -> Result<Option<Joke>, StorageError> {
        let texto: Option<String> = self
            .conn
            .query_row(
                "SELECT texto FROM jokes WHERE numero = ?1",
                params![number.0],
                |row| row.get(0),
            )
            .optional()?;
        Ok(texto.map(|texto| Joke {
            numero: number,
            texto,
        }))
    }

    fn update_text(&mut self, number: JokeNumber, text: &str) -> Result<Joke, StorageError> {
        ensure_text(text)?;
        let changed = self.conn.execute(
            "UPDATE jokes SET texto = ?2 WHERE numero = ?1",
            params![number.0, text],
        )?;
        if changed == 0 {
            return Err(StorageError::JokeNotFound(number.0));
        }
        Ok(Joke {
            numero: number,
            texto: text.to_string(),
        })
    }

    fn delete(&mut self, number: JokeNumber) -> Result<usize, StorageError> {
        let deleted = self
            .conn
            .execute("DELETE FROM jokes WHERE numero = ?1", params![number.0])?;
        Ok(deleted)
    }

    fn list(&self) -> Result<Vec<Joke>, StorageError> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT numero, texto FROM jokes ORDER BY numero")?;
        let rows = stmt.query_map([], |row| {
            Ok(Joke {
                numero: JokeNumber(row.get(0)?),
                texto: row.get(1)?,
            })
        })?;
        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }
}
