//! Migrate command - applies database migrations and exits

use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::infrastructure::storage::{run_storage_migrations, seed_demo_data, PostgresMigrator};

/// Apply all pending migrations against the configured database
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let url = config
        .database
        .url
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("database.url must be set to run migrations"))?;

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(url)
        .await?;

    run_storage_migrations(&pool).await?;

    if config.database.seed_demo_data {
        seed_demo_data(&pool).await?;
    }

    let version = PostgresMigrator::new(pool.clone()).current_version().await?;
    info!(version = ?version, "Migrations applied");

    Ok(())
}
