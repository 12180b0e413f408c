//! Connection pool setup and schema migrations.

use std::str::FromStr;
use std::time::Duration;

use sqlx::migrate::MigrateError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{debug, info};


/// How long a connection waits for another connection's write lock.
const BUSY_TIMEOUT: Duration = Duration::from_secs(10);


fn is_in_memory_database_url(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}


/// Connects to the SQLite database at `database_url`, creating the database file if needed.
///
/// File databases use the WAL journal, so readers never wait on a writer.
/// An in-memory database only lives as long as its connection, so such pools are
/// limited to one connection that is never closed.
pub async fn establish_connection_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let connection_options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .busy_timeout(BUSY_TIMEOUT);

    let is_in_memory = is_in_memory_database_url(database_url);

    let connection_options = if is_in_memory {
        connection_options
    } else {
        connection_options.journal_mode(SqliteJournalMode::Wal)
    };

    let pool_options = if is_in_memory {
        debug!("Using an in-memory database, limiting the pool to a single connection.");

        SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new()
            .idle_timeout(Some(Duration::from_secs(60 * 20)))
            .max_lifetime(Some(Duration::from_secs(60 * 60)))
            .min_connections(1)
            .max_connections(max_connections)
    };

    pool_options
        .test_before_acquire(true)
        .connect_with(connection_options)
        .await
}


/// Applies all embedded migrations that haven't been applied to the database yet.
pub async fn run_pending_migrations(database_pool: &SqlitePool) -> Result<(), MigrateError> {
    let migrator = sqlx::migrate!("./migrations");

    migrator.run(database_pool).await?;

    info!(
        total_migrations = migrator.iter().count(),
        "Database schema is up to date."
    );

    Ok(())
}
