use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, Pool, Sqlite, Transaction};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;
use tracing::log::LevelFilter;

pub type DbPool = Pool<Sqlite>;

pub async fn connect_to_db(connection_string: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(connection_string)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .log_statements(LevelFilter::Debug);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(600))
        .connect_with(options)
        .await?;

    info!("✅ Connected to SQLite at {}", connection_string);
    Ok(pool)
}

/// Opens a transaction that holds the write lock from its first statement.
///
/// A deferred transaction that reads before it writes cannot upgrade its WAL
/// snapshot once another writer has committed, and fails with `SQLITE_BUSY`
/// instead of waiting. `BEGIN IMMEDIATE` queues on the busy timeout.
pub async fn begin_write(pool: &DbPool) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
    pool.begin_with("BEGIN IMMEDIATE").await
}

/// Single-connection in-memory database. Every pooled connection to
/// `sqlite::memory:` would see its own empty database, so the pool is capped
/// at one and never recycled.
#[cfg(test)]
pub async fn connect_in_memory() -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}
