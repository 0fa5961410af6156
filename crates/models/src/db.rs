use std::time::Duration;

use configs::{AppConfig, DatabaseConfig};
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

/// Database section from `config.toml`, or from `DATABASE_URL` and defaults.
pub fn load_config() -> anyhow::Result<DatabaseConfig> {
    let _ = dotenvy::dotenv();
    Ok(AppConfig::load_or_env()?.database)
}

pub fn connect_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);
    opt
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(connect_options(cfg)).await?;
    Ok(db)
}

pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    connect_with_config(&load_config()?).await
}

/// Connect and bring the schema up to date. Called once at process start.
pub async fn init(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = connect_with_config(cfg).await?;
    migration::Migrator::up(&db, None).await?;
    info!(max_connections = cfg.max_connections, "database ready");
    Ok(db)
}
