//! SQLite database layer (embedded, no external server)

use super::sql::{self, QuoteRow};
use super::{QuoteStore, StoreError, StoreResult, SEED_QUOTES};
use anyhow::{Context, Result};
use async_trait::async_trait;
use quotes_types::{MovieQuote, QuoteDraft};
use rand::Rng;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub async fn connect(connection_string: &str) -> Result<Self> {
        tracing::info!("Opening SQLite database...");

        let options: SqliteConnectOptions = connection_string
            .parse()
            .context("Invalid SQLite connection string")?;
        let options = options
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

        let mut pool_options = SqlitePoolOptions::new().max_connections(5);
        if connection_string.contains(":memory:") {
            // The database lives only as long as its connection
            pool_options = pool_options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .context("Failed to connect to SQLite database")?;

        tracing::info!("SQLite connection established, running migrations...");

        Self::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        tracing::info!("Database initialization complete");

        Ok(Self { pool })
    }

    /// Create and seed the quotes table unless it already exists
    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        if Self::table_exists(pool).await? {
            tracing::info!("Table {} already present, skipping seed", sql::TABLE);
            return Ok(());
        }

        Self::create_and_seed(pool, &SEED_QUOTES).await
    }

    async fn table_exists(pool: &SqlitePool) -> Result<bool> {
        let existing: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
        )
        .bind(sql::TABLE)
        .fetch_one(pool)
        .await?;

        Ok(existing > 0)
    }

    /// Create the table and insert `seeds` in one transaction; SQLite DDL
    /// rolls back with it, so a failed seed leaves no table behind.
    async fn create_and_seed(pool: &SqlitePool, seeds: &[(i32, &str, &str)]) -> Result<()> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            r#"
            CREATE TABLE MovieQuotes (
                Id INTEGER PRIMARY KEY AUTOINCREMENT,
                Quote TEXT NOT NULL,
                Movie TEXT NOT NULL
            )
            "#,
        )
        .execute(&mut *tx)
        .await?;

        for &(id, movie, quote) in seeds {
            sqlx::query(sql::INSERT_SEED)
                .bind(id)
                .bind(quote)
                .bind(movie)
                .execute(&mut *tx)
                .await
                .context("Failed to seed quotes table")?;
        }
        tx.commit().await?;

        tracing::info!("Created table {} with {} seed quotes", sql::TABLE, seeds.len());

        Ok(())
    }
}

#[async_trait]
impl QuoteStore for SqliteStore {
    async fn list(&self) -> StoreResult<Vec<MovieQuote>> {
        let rows: Vec<QuoteRow> = sqlx::query_as(sql::SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn get(&self, id: i32) -> StoreResult<MovieQuote> {
        let row: Option<QuoteRow> = sqlx::query_as(sql::SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| r.into()).ok_or(StoreError::NotFound(id))
    }

    async fn random(&self) -> StoreResult<MovieQuote> {
        let count: i64 = sqlx::query_scalar(sql::COUNT)
            .fetch_one(&self.pool)
            .await?;
        if count == 0 {
            return Err(StoreError::Empty);
        }

        let offset = rand::thread_rng().gen_range(0..count);

        let row: Option<QuoteRow> = sqlx::query_as(sql::SELECT_AT_OFFSET)
            .bind(offset)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| r.into()).ok_or(StoreError::Empty)
    }

    async fn create(&self, draft: QuoteDraft) -> StoreResult<MovieQuote> {
        let result = sqlx::query(sql::INSERT)
            .bind(&draft.quote)
            .bind(&draft.movie)
            .execute(&self.pool)
            .await?;

        let id = result.last_insert_rowid() as i32;
        tracing::info!("Created quote {} ({})", id, draft.movie);

        Ok(MovieQuote::new(id, draft))
    }

    async fn update(&self, id: i32, draft: QuoteDraft) -> StoreResult<MovieQuote> {
        let result = sqlx::query(sql::UPDATE)
            .bind(&draft.quote)
            .bind(&draft.movie)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(MovieQuote::new(id, draft))
    }

    async fn delete(&self, id: i32) -> StoreResult<()> {
        let result = sqlx::query(sql::DELETE)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }

    async fn count(&self) -> StoreResult<usize> {
        let count: i64 = sqlx::query_scalar(sql::COUNT)
            .fetch_one(&self.pool)
            .await?;

        Ok(count as usize)
    }
}
