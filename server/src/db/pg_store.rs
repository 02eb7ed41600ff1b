// storefront_server/src/db/pg_store.rs

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use storefront::{ModelError, Order, OrderStore, Product, ProductStore, StoreError, StoreResult};
use tracing::{error, info, instrument};

/// Postgres implementation of both store ports. Each call borrows one pooled
/// connection for its own duration; order creation runs in one transaction.
#[derive(Clone)]
pub struct PgStore {
  pool: PgPool,
}

impl PgStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  pub fn pool(&self) -> &PgPool {
    &self.pool
  }
}

#[derive(Debug, FromRow)]
struct ProductRow {
  id: String,
  name: String,
  price: Decimal,
  flavor: Option<String>,
  img: Option<String>,
}

impl ProductRow {
  fn into_product(self) -> Result<Product, ModelError> {
    Product::new(self.id, self.name, self.price, self.flavor, self.img)
  }
}

fn rows_into_products(operation: &'static str, rows: Vec<ProductRow>) -> StoreResult<Vec<Product>> {
  rows
    .into_iter()
    .map(|row| row.into_product().map_err(|e| StoreError::operation(operation, e)))
    .collect()
}

/// Connection-level failures mean the datastore is unreachable; everything
/// else is a failed statement.
pub(crate) fn map_sqlx_error(operation: &'static str, err: sqlx::Error) -> StoreError {
  match err {
    sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) | sqlx::Error::Tls(_) => {
      StoreError::unavailable(err)
    }
    other => StoreError::operation(operation, other),
  }
}

#[async_trait]
impl ProductStore for PgStore {
  #[instrument(name = "PgStore::list_products", skip(self))]
  async fn list_products(&self) -> StoreResult<Vec<Product>> {
    let rows: Vec<ProductRow> = sqlx::query_as("SELECT id, name, price, flavor, img FROM products ORDER BY id")
      .fetch_all(&self.pool)
      .await
      .map_err(|e| {
        error!("Failed to fetch products from database: {}", e);
        map_sqlx_error("list_products", e)
      })?;
    rows_into_products("list_products", rows)
  }

  #[instrument(name = "PgStore::find_products", skip(self, ids), fields(requested = ids.len()))]
  async fn find_products(&self, ids: &[String]) -> StoreResult<Vec<Product>> {
    let rows: Vec<ProductRow> =
      sqlx::query_as("SELECT id, name, price, flavor, img FROM products WHERE id = ANY($1)")
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
          error!("Failed to look up products for checkout: {}", e);
          map_sqlx_error("find_products", e)
        })?;
    rows_into_products("find_products", rows)
  }
}

#[async_trait]
impl OrderStore for PgStore {
  /// Any early return drops `tx`, which rolls the transaction back.
  #[instrument(name = "PgStore::create_order", skip(self, order), fields(order_id = %order.order_id, items = order.items.len()))]
  async fn create_order(&self, order: &Order) -> StoreResult<()> {
    let mut tx = self.pool.begin().await.map_err(|e| map_sqlx_error("begin_transaction", e))?;

    sqlx::query("INSERT INTO orders (order_id, order_date, total_amount, status) VALUES ($1, $2, $3, $4)")
      .bind(order.order_id.to_string())
      .bind(order.order_date)
      .bind(order.total_amount)
      .bind(order.status.as_str())
      .execute(&mut *tx)
      .await
      .map_err(|e| {
        error!("Failed to insert order row: {}", e);
        map_sqlx_error("insert_order", e)
      })?;

    for item in &order.items {
      sqlx::query(
        "INSERT INTO order_items (order_id, product_id, product_name, quantity, unit_price) VALUES ($1, $2, $3, $4, $5)",
      )
      .bind(order.order_id.to_string())
      .bind(&item.product_id)
      .bind(&item.product_name)
      .bind(item.quantity)
      .bind(item.unit_price)
      .execute(&mut *tx)
      .await
      .map_err(|e| {
        error!(product_id = %item.product_id, "Failed to insert order item row: {}", e);
        map_sqlx_error("insert_order_item", e)
      })?;
    }

    tx.commit().await.map_err(|e| map_sqlx_error("commit_transaction", e))?;
    info!("Order and items committed.");
    Ok(())
  }
}
