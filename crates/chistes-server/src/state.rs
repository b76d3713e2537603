//! Application state shared by all handlers.
//!
//! [`AppState`] holds the joke store behind `Arc<tokio::sync::Mutex<>>` so
//! handlers await the lock without blocking the runtime. `tokio::sync::Mutex`
//! is used instead of `RwLock` because `rusqlite::Connection` is `!Sync`.
//! The upstream fetcher needs no lock and is shared through an `Arc`.

use std::sync::Arc;

use chistes_storage::{InMemoryStore, JokeStore, SqliteStore};

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::fetcher::JokeFetcher;

/// Boxed store shared across handler tasks.
pub type SharedStore = Arc<tokio::sync::Mutex<Box<dyn JokeStore + Send>>>;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The joke store. Holding the lock across "next number + insert"
    /// serializes concurrent creates.
    pub store: SharedStore,
    /// Upstream joke client.
    pub fetcher: Arc<JokeFetcher>,
}

impl AppState {
    /// Opens the store and builds the upstream client described by `config`.
    pub fn new(config: &ServerConfig) -> Result<Self, ApiError> {
        let fetcher = JokeFetcher::new(config.chuck_url.clone(), config.dad_url.clone())
            .map_err(|e| ApiError::InternalError(format!("failed to build fetcher: {}", e)))?;

        if config.uses_in_memory_store() {
            tracing::warn!("using in-memory joke store; jokes are lost on shutdown");
            return Ok(Self::with_store(InMemoryStore::new(), fetcher));
        }

        let store = SqliteStore::new(&config.db_path)
            .map_err(|e| ApiError::InternalError(format!("failed to open store: {}", e)))?;
        Ok(Self::with_store(store, fetcher))
    }

    /// Wraps an already constructed store and fetcher.
    pub fn with_store<S>(store: S, fetcher: JokeFetcher) -> Self
    where
        S: JokeStore + Send + 'static,
    {
        let store: Box<dyn JokeStore + Send> = Box::new(store);
        AppState {
            store: Arc::new(tokio::sync::Mutex::new(store)),
            fetcher: Arc::new(fetcher),
        }
    }
}
