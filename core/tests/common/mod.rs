// tests/common/mod.rs
#![allow(dead_code)] // Each test binary uses a different subset of these helpers.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::sync::Arc;
use storefront::{CartItem, CatalogReader, CheckoutProcessor, InMemoryStore, Product};
use tracing::Level;

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// Money from cents, e.g. `cents(800)` is 8.00.
pub fn cents(amount: i64) -> Decimal {
  Decimal::new(amount, 2)
}

pub fn product(id: &str, name: &str, price_cents: i64) -> Product {
  Product::new(id, name, cents(price_cents), Some(format!("{} flavor", name)), None).unwrap()
}

pub fn chocolate_catalog() -> Vec<Product> {
  vec![
    product("prod-001", "70% Dark Cacao Bar", 800),
    product("prod-002", "Sea Salt Dark Squares", 1200),
    product("prod-003", "Espresso Milk Bar", 1000),
    product("prod-004", "White Raspberry Truffle", 1400),
    product("prod-005", "Champagne Truffle", 1700),
    product("prod-006", "Salted Caramel Praline", 1600),
  ]
}

pub fn cart(lines: &[(&str, i64)]) -> Vec<CartItem> {
  lines.iter().map(|(id, qty)| CartItem::new(*id, *qty)).collect()
}

pub struct Harness {
  pub store: Arc<InMemoryStore>,
  pub catalog: CatalogReader,
  pub checkout: CheckoutProcessor,
}

pub fn harness() -> Harness {
  setup_tracing();
  let store = Arc::new(InMemoryStore::with_products(chocolate_catalog()));
  Harness {
    catalog: CatalogReader::new(store.clone()),
    checkout: CheckoutProcessor::new(store.clone(), store.clone()),
    store,
  }
}
