use std::str::FromStr;

use anyhow::Context;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use tracing::info;

use crate::config::AppConfig;

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS USERS (
        id              INTEGER PRIMARY KEY AUTOINCREMENT,
        name            TEXT    NOT NULL,
        email           TEXT    NOT NULL,
        hashed_password TEXT    NOT NULL,
        is_employer     INTEGER NOT NULL DEFAULT 0,
        is_employee     INTEGER NOT NULL DEFAULT 0,
        photo_path      TEXT,
        address         TEXT,
        phone_number    TEXT,
        cv              TEXT
    )
"#;

const CREATE_OFFERS: &str = r#"
    CREATE TABLE IF NOT EXISTS OFFERS (
        id              INTEGER PRIMARY KEY AUTOINCREMENT,
        employee        TEXT,
        employer        TEXT    NOT NULL,
        tags            TEXT    NOT NULL,
        address         TEXT    NOT NULL,
        additional_info TEXT,
        price           REAL,
        timetable       TEXT,
        title           TEXT    NOT NULL,
        category        TEXT    NOT NULL
    )
"#;

/// Open the pool for the configured database file, creating the file if needed.
pub async fn connect(config: &AppConfig) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .with_context(|| format!("parse DATABASE_URL {}", config.database_url))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .context("connect to database")?;
    Ok(pool)
}

/// Create both tables when they are missing. Existing tables are left alone.
pub async fn ensure_schema(db: &SqlitePool) -> anyhow::Result<()> {
    for ddl in [CREATE_USERS, CREATE_OFFERS] {
        sqlx::query(ddl)
            .execute(db)
            .await
            .context("create table")?;
    }
    info!("database schema ready");
    Ok(())
}

/// A private in-memory database. One connection that never expires, otherwise
/// each new connection would see an empty database.
#[cfg(test)]
pub async fn in_memory() -> anyhow::Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .context("open in-memory database")?;
    ensure_schema(&pool).await?;
    Ok(pool)
}
