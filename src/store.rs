//! SQLite pool setup and table DDL for `bakeries` and `baked_goods`.

use crate::config::ServerConfig;
use crate::error::{AppError, ConfigError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

pub const BAKERIES_TABLE: &str = "bakeries";
pub const BAKED_GOODS_TABLE: &str = "baked_goods";

/// Open a pool for `config.database_url`, creating the database file if it does not exist.
pub async fn connect(config: &ServerConfig) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(|_| ConfigError::Invalid {
            var: "DATABASE_URL",
            value: config.database_url.clone(),
        })?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(opts)
        .await?;
    tracing::debug!(url = %config.database_url, "connected to store");
    Ok(pool)
}

/// Create both tables and the `bakeries.updated_at` trigger if missing. Safe to call on every start.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    let bakeries_ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
        BAKERIES_TABLE
    );
    sqlx::query(&bakeries_ddl).execute(pool).await?;

    let goods_ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            price REAL NOT NULL,
            bakery_id INTEGER REFERENCES {}(id)
        )
        "#,
        BAKED_GOODS_TABLE, BAKERIES_TABLE
    );
    sqlx::query(&goods_ddl).execute(pool).await?;

    let goods_index = format!(
        "CREATE INDEX IF NOT EXISTS idx_{0}_bakery_id ON {0} (bakery_id)",
        BAKED_GOODS_TABLE
    );
    sqlx::query(&goods_index).execute(pool).await?;

    // WHEN guard stops the trigger from firing on its own UPDATE.
    let trigger = format!(
        r#"
        CREATE TRIGGER IF NOT EXISTS {0}_touch_updated_at
        AFTER UPDATE ON {0}
        FOR EACH ROW WHEN NEW.updated_at = OLD.updated_at
        BEGIN
            UPDATE {0} SET updated_at = CURRENT_TIMESTAMP WHERE id = NEW.id;
        END
        "#,
        BAKERIES_TABLE
    );
    sqlx::query(&trigger).execute(pool).await?;

    tracing::debug!("store tables ensured");
    Ok(())
}
