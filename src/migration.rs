//! Bootstrap DDL for the plants table. Idempotent; safe to run on every startup.

use crate::error::AppError;
use sqlx::SqlitePool;

const PLANTS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS plants (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT,
        image TEXT,
        price REAL
    )
"#;

pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    tracing::debug!(sql = %PLANTS_DDL.trim(), "migration");
    sqlx::query(PLANTS_DDL).execute(pool).await?;
    Ok(())
}
