use std::str::FromStr;
use std::sync::Arc;

use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::AppConfig;

const CREATE_MEALLOG: &str = r#"
CREATE TABLE IF NOT EXISTS meallog (
  id INTEGER NOT NULL PRIMARY KEY,
  name TEXT,
  calories INTEGER,
  protein INTEGER,
  fat INTEGER,
  carbs INTEGER,
  vitaminA INTEGER,
  vitaminB INTEGER,
  time DATETIME NOT NULL
);
"#;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let db = open_store(&config.database_url).await?;
        Ok(Self { db, config })
    }

    pub fn from_parts(db: SqlitePool, config: Arc<AppConfig>) -> Self {
        Self { db, config }
    }
}

/// Opens (or creates) the store file and ensures the meal table exists.
pub async fn open_store(database_url: &str) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .context("parse DATABASE_URL")?
        .create_if_missing(true);
    let db = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .context("open meal store")?;
    ensure_schema(&db).await?;
    Ok(db)
}

// Idempotent, runs on every startup.
pub async fn ensure_schema(db: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query(CREATE_MEALLOG)
        .execute(db)
        .await
        .context("create meallog table")?;
    Ok(())
}
