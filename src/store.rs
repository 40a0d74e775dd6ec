//! SQLite pool setup. The database file is created on first connect.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Open a pool for `database_url` (e.g. `sqlite://plants.db`, `sqlite::memory:`).
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;
    tracing::debug!(database_url = %database_url, max_connections, "database pool ready");
    Ok(pool)
}
