// storefront_server/src/db/seed.rs

//! The house catalog, upserted at startup when `SEED_DB` is on.

use rust_decimal::Decimal;
use sqlx::PgPool;
use storefront::Product;
use tracing::{info, instrument};

use crate::errors::{AppError, Result};

const HOUSE_PRODUCTS: [(&str, &str, i64, &str, &str); 6] = [
  (
    "prod-001",
    "70% Dark Cacao Bar",
    800,
    "Intense, deep, pure",
    "https://images.pexels.com/photos/6167328/pexels-photo-6167328.jpeg",
  ),
  (
    "prod-002",
    "Sea Salt Dark Squares",
    1200,
    "Dark chocolate, sea salt flakes",
    "https://images.unsplash.com/photo-1504674900247-0877df9cc836",
  ),
  (
    "prod-003",
    "Espresso Milk Bar",
    1000,
    "Smooth milk chocolate, espresso",
    "https://images.unsplash.com/photo-1504674900247-0877df9cc836",
  ),
  (
    "prod-004",
    "White Raspberry Truffle",
    1400,
    "White chocolate, raspberry",
    "https://images.unsplash.com/photo-1527515637462-cff94eecc1ac",
  ),
  (
    "prod-005",
    "Champagne Truffle",
    1700,
    "Milk chocolate, champagne",
    "https://images.pexels.com/photos/4399753/pexels-photo-4399753.jpeg",
  ),
  (
    "prod-006",
    "Salted Caramel Praline",
    1600,
    "Milk chocolate, salted caramel",
    "https://images.pexels.com/photos/7676087/pexels-photo-7676087.jpeg",
  ),
];

/// The six house products with prices in cents converted to 2-place decimals.
pub fn house_products() -> Result<Vec<Product>> {
  HOUSE_PRODUCTS
    .iter()
    .map(|(id, name, price_cents, flavor, img)| {
      Product::new(
        *id,
        *name,
        Decimal::new(*price_cents, 2),
        Some((*flavor).to_string()),
        Some((*img).to_string()),
      )
      .map_err(|e| AppError::Internal(format!("Invalid seed product {}: {}", id, e)))
    })
    .collect()
}

#[instrument(skip(pool))]
pub async fn seed_products(pool: &PgPool) -> Result<usize> {
  let products = house_products()?;
  for p in &products {
    sqlx::query(
      "INSERT INTO products (id, name, price, flavor, img) VALUES ($1, $2, $3, $4, $5) \
       ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name, price = EXCLUDED.price, \
       flavor = EXCLUDED.flavor, img = EXCLUDED.img",
    )
    .bind(&p.id)
    .bind(&p.name)
    .bind(p.price)
    .bind(&p.flavor)
    .bind(&p.img)
    .execute(pool)
    .await?;
  }
  info!(count = products.len(), "House products upserted.");
  Ok(products.len())
}
