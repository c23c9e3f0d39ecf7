//! Storage layer
//!
//! `QuoteStore` is implemented three ways: MySQL (the production database),
//! SQLite (embedded, selected by a `sqlite:` connection string) and an
//! in-memory list that lives as long as the process.

pub mod memory;
pub mod mysql;
mod sql;
pub mod sqlite;

pub use memory::MemoryStore;
pub use mysql::MySqlStore;
pub use sqlite::SqliteStore;

use crate::config::{ServerConfig, StorageKind};
use anyhow::{bail, Result};
use async_trait::async_trait;
use quotes_types::{MovieQuote, QuoteDraft};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("quote {0} not found")]
    NotFound(i32),

    #[error("no quotes stored")]
    Empty,

    #[error("quote store unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Quotes present on first startup, as `(id, movie, quote)`
pub const SEED_QUOTES: [(i32, &str, &str); 5] = [
    (1, "Star Wars", "May the Force be with you."),
    (
        2,
        "The Godfather",
        "I'm going to make him an offer he can't refuse.",
    ),
    (3, "Casablanca", "Here's looking at you, kid."),
    (4, "A Few Good Men", "You can't handle the truth!"),
    (5, "The Terminator", "I'll be back."),
];

pub fn seed_quotes() -> Vec<MovieQuote> {
    SEED_QUOTES
        .iter()
        .map(|&(id, movie, quote)| MovieQuote::new(id, QuoteDraft::new(quote, movie)))
        .collect()
}

/// Create/read/update/delete access to the stored quotes.
///
/// Every lookup by id reports [`StoreError::NotFound`] when the id is absent.
/// Concurrent writers race and the last one wins.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// All quotes in creation order
    async fn list(&self) -> StoreResult<Vec<MovieQuote>>;

    async fn get(&self, id: i32) -> StoreResult<MovieQuote>;

    /// A uniformly chosen quote, or [`StoreError::Empty`]
    async fn random(&self) -> StoreResult<MovieQuote>;

    /// Store a new quote under a freshly assigned id
    async fn create(&self, draft: QuoteDraft) -> StoreResult<MovieQuote>;

    async fn update(&self, id: i32, draft: QuoteDraft) -> StoreResult<MovieQuote>;

    async fn delete(&self, id: i32) -> StoreResult<()>;

    async fn count(&self) -> StoreResult<usize>;
}

/// Open the store selected by the configuration, migrating relational backends
pub async fn open(config: &ServerConfig) -> Result<Arc<dyn QuoteStore>> {
    match config.storage {
        StorageKind::Memory => {
            info!("Using in-memory quote store (not persisted)");
            Ok(Arc::new(MemoryStore::seeded()))
        }
        StorageKind::Database => {
            let url = config.connection_string();
            if url.starts_with("mysql:") {
                Ok(Arc::new(MySqlStore::connect(url).await?))
            } else if url.starts_with("sqlite:") {
                Ok(Arc::new(SqliteStore::connect(url).await?))
            } else {
                bail!("Unsupported connection string scheme (expected mysql: or sqlite:)")
            }
        }
    }
}
