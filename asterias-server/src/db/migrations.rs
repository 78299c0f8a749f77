//! Schema initialization for the starfish table
//!
//! Idempotent; invoked explicitly at server startup. Schema changes beyond
//! this require manual intervention.

use sqlx::SqlitePool;

/// Ensure the starfish table exists.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS starfish (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            color TEXT NOT NULL,
            limbs INTEGER NOT NULL,
            depth REAL NOT NULL,
            age INTEGER NOT NULL,
            gender TEXT NOT NULL,
            latin_name TEXT NOT NULL,
            habitat TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("database schema ready");
    Ok(())
}
