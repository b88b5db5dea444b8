#![warn(missing_docs)]
//! A SQLite implementation of the `sealbid-core` repository port.
//!
//! Bids live in a single `bid` table created by the embedded migrations in
//! `schema/`. The [`Db`] handle implements
//! [`BidRepository`](sealbid_core::ports::BidRepository): inserts go through
//! a single writer connection, reads through a separate reader pool.

use sqlx::sqlite;
use std::{str::FromStr, time::Duration};
use tokio::try_join;
use tracing::{Level, event};

pub mod config;
mod r#impl;
pub mod types;

use config::SqliteConfig;

/// SQLite database implementation of the bid repository.
///
/// This struct provides separate reader and writer connection pools to a SQLite database.
/// The separation of read and write connections allows for better concurrency control and
/// follows SQLite best practices for Write-Ahead Logging (WAL) mode.
///
/// # Connection Management
///
/// - `reader`: A connection pool for read operations, allowing concurrent reads
/// - `writer`: A single-connection pool for write operations, ensuring serialized writes
///
/// # Example
///
/// ```no_run
/// # use sealbid_sqlite::{Db, config::SqliteConfig};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = SqliteConfig::default();
/// let db = Db::open(&config).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Db {
    /// Connection pool for read operations
    pub reader: sqlx::Pool<sqlx::Sqlite>,
    /// Connection pool for write operations (limited to 1 connection)
    pub writer: sqlx::Pool<sqlx::Sqlite>,
}

impl Db {
    /// Open a connection to the specified SQLite database.
    ///
    /// Creates a new database if one doesn't exist (when `create_if_missing` is true)
    /// and ensures the schema is in place before returning.
    ///
    /// # Database Configuration
    ///
    /// - WAL mode for better concurrency
    /// - A 5 second busy timeout, so concurrent writers wait rather than fail
    /// - Normal synchronous mode
    /// - Without a path, an in-memory database that lives as long as the pools
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if:
    /// - Database connection fails
    /// - Migrations fail to apply
    pub async fn open(config: &SqliteConfig) -> Result<Self, sqlx::Error> {
        let db_path = config
            .database_path
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned());

        let options =
            sqlite::SqliteConnectOptions::from_str(db_path.as_deref().unwrap_or(":memory:"))?
                .busy_timeout(Duration::from_secs(5))
                .foreign_keys(true)
                .journal_mode(sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlite::SqliteSynchronous::Normal)
                .pragma("journal_size_limit", "27103364")
                .pragma("temp_store", "memory")
                .create_if_missing(config.create_if_missing);

        // An in-memory database is dropped with its last connection, so keep
        // one open in each pool for as long as the pools live
        let pool = || {
            let pool = sqlite::SqlitePoolOptions::new();
            if db_path.is_none() {
                pool.min_connections(1).idle_timeout(None).max_lifetime(None)
            } else {
                pool
            }
        };

        let reader = pool().connect_with(options.clone());
        let writer = pool().max_connections(1).connect_with(options);

        let (reader, writer) = try_join!(reader, writer)?;

        let db = Self { reader, writer };
        db.ensure_schema().await?;

        event!(
            Level::INFO,
            path = db_path.as_deref().unwrap_or(":memory:"),
            "opened bid database"
        );

        Ok(db)
    }

    /// Create the `bid` table and its index if they are missing.
    ///
    /// This applies any pending migrations and is safe to call repeatedly;
    /// [`Db::open`] already calls it once.
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::migrate!("./schema").run(&self.writer).await?;
        Ok(())
    }
}
