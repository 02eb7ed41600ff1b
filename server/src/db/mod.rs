// storefront_server/src/db/mod.rs

//! Postgres plumbing: the pool, schema setup, seeding and the store adapter.

pub mod pg_store;
pub mod schema;
pub mod seed;

pub use pg_store::PgStore;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::AppConfig;
use crate::errors::Result;

pub async fn connect_pool(config: &AppConfig) -> Result<PgPool> {
  let pool = PgPoolOptions::new()
    .max_connections(config.db_pool_size)
    .connect_with(config.db_connect.clone())
    .await?;
  Ok(pool)
}

/// Creates the tables if needed and, when configured, upserts the house catalog.
pub async fn prepare_database(pool: &PgPool, config: &AppConfig) -> Result<()> {
  schema::ensure_schema(pool).await?;
  if config.seed_db {
    seed::seed_products(pool).await?;
  } else {
    tracing::info!("Database seeding disabled (SEED_DB=false).");
  }
  Ok(())
}
