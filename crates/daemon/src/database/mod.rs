pub mod models;
mod types;

pub use types::{DJson, DUuid};

use std::ops::Deref;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

#[derive(Clone, Debug)]
pub struct Database(SqlitePool);

impl Database {
    pub async fn connect(database_url: &url::Url) -> Result<Self, DatabaseSetupError> {
        if database_url.scheme() == "sqlite" {
            let db = connect_sqlite(database_url).await?;
            migrate_sqlite(&db).await?;
            return Ok(Database::new(db));
        }

        Err(DatabaseSetupError::UnknownDbType(
            database_url.scheme().to_string(),
        ))
    }

    pub fn new(pool: SqlitePool) -> Self {
        Self(pool)
    }
}

impl Deref for Database {
    type Target = SqlitePool;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

async fn connect_sqlite(database_url: &url::Url) -> Result<SqlitePool, DatabaseSetupError> {
    let options: SqliteConnectOptions = database_url
        .as_str()
        .parse()
        .map_err(DatabaseSetupError::Unavailable)?;
    let options = options
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal);

    // an in-memory database exists per-connection, so the pool must not
    // open a second one
    let in_memory = database_url.as_str().contains(":memory:");
    let pool_options = if in_memory {
        SqlitePoolOptions::new().min_connections(1).max_connections(1)
    } else {
        SqlitePoolOptions::new().max_connections(8)
    };

    pool_options
        .connect_with(options)
        .await
        .map_err(DatabaseSetupError::Unavailable)
}

async fn migrate_sqlite(pool: &SqlitePool) -> Result<(), DatabaseSetupError> {
    sqlx::migrate!()
        .run(pool)
        .await
        .map_err(DatabaseSetupError::MigrationFailed)
}

/// Whether an error is a unique-constraint violation, used to distinguish
/// duplicate secondary keys (email) from other write failures.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

#[derive(Debug, thiserror::Error)]
pub enum DatabaseSetupError {
    #[error("error occurred while attempting database migration: {0}")]
    MigrationFailed(sqlx::migrate::MigrateError),

    #[error("unable to perform initial connection and check of the database: {0}")]
    Unavailable(sqlx::Error),

    #[error("requested database type was not recognized: {0}")]
    UnknownDbType(String),
}
