//! Pool construction and schema bootstrap.
//! The store is a single-writer resource, so the pool never holds more than
//! one connection and that connection is kept for the life of the process
//! (an in-memory database would otherwise vanish with an idle connection).

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

/// A type alias for the database connection pool (`Pool<Sqlite>`).
pub type DbPool = Pool<Sqlite>;

/// Creates the `users` table when it is absent. Safe to run on every start.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id                    INTEGER PRIMARY KEY,
    money                 INTEGER NOT NULL DEFAULT 0,
    last_daily_timestamp  INTEGER NOT NULL DEFAULT 0
);
"#;

/// Opens the database at `database_url` and applies [`SCHEMA`].
pub async fn connect(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;
    apply_schema(&pool).await?;
    tracing::info!(target = "db.init", url = %database_url, "database ready");
    Ok(pool)
}

pub async fn apply_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(SCHEMA).execute(pool).await?;
    Ok(())
}
