use crate::config::AppConfig;
use crate::db;
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let db = db::connect(&config).await?;
        db::ensure_schema(&db).await?;
        Ok(Self::from_parts(db, config))
    }

    pub fn from_parts(db: SqlitePool, config: Arc<AppConfig>) -> Self {
        Self { db, config }
    }

    /// State over a fresh in-memory database with default config.
    #[cfg(test)]
    pub async fn for_tests() -> Self {
        let db = db::in_memory().await.expect("in-memory db");
        let config = AppConfig::from_lookup(|_| None).expect("default config");
        Self::from_parts(db, Arc::new(config))
    }
}
