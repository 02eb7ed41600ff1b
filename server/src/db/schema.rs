// storefront_server/src/db/schema.rs

//! Idempotent table setup. Safe to run on every startup.

use sqlx::PgPool;
use tracing::{info, instrument};

use crate::errors::Result;

pub const CREATE_PRODUCTS: &str = r#"
CREATE TABLE IF NOT EXISTS products (
  id VARCHAR(64) PRIMARY KEY,
  name VARCHAR(255) NOT NULL,
  price NUMERIC(10,2) NOT NULL CHECK (price >= 0),
  flavor VARCHAR(255),
  img TEXT
)"#;

pub const CREATE_ORDERS: &str = r#"
CREATE TABLE IF NOT EXISTS orders (
  order_id VARCHAR(64) PRIMARY KEY,
  order_date TIMESTAMPTZ NOT NULL,
  total_amount NUMERIC(10,2) NOT NULL,
  status VARCHAR(64) NOT NULL
)"#;

pub const CREATE_ORDER_ITEMS: &str = r#"
CREATE TABLE IF NOT EXISTS order_items (
  item_id BIGSERIAL PRIMARY KEY,
  order_id VARCHAR(64) NOT NULL REFERENCES orders(order_id) ON DELETE CASCADE,
  product_id VARCHAR(64) NOT NULL,
  product_name VARCHAR(255) NOT NULL,
  quantity INT NOT NULL CHECK (quantity > 0),
  unit_price NUMERIC(10,2) NOT NULL
)"#;

// Order matters: order_items references orders.
pub const SCHEMA_STATEMENTS: [&str; 3] = [CREATE_PRODUCTS, CREATE_ORDERS, CREATE_ORDER_ITEMS];

#[instrument(skip(pool))]
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
  for statement in SCHEMA_STATEMENTS {
    sqlx::query(statement).execute(pool).await?;
  }
  info!("Database schema is in place.");
  Ok(())
}
