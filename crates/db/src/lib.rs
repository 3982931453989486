//! Database layer for Épingle

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

pub mod badges;
pub mod comments;
pub mod likes;
pub mod notifications;
pub mod pins;
pub mod saved_pins;
pub mod stats;
pub mod teams;
pub mod users;

/// Create a database connection pool
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;
    info!("Database connected");
    Ok(pool)
}

/// Run database migrations from SQL files
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    info!("Running migrations...");

    let migration_sql = include_str!("../../../migrations/001_initial.sql");
    sqlx::raw_sql(migration_sql).execute(pool).await?;

    info!("Migrations complete");
    Ok(())
}
