// core/examples/in_memory_checkout.rs
//
// Lists a tiny catalog and places one order against the in-memory store.
// Run with: cargo run -p storefront --example in_memory_checkout

use rust_decimal::Decimal;
use std::sync::Arc;
use storefront::{CartItem, CatalogReader, CheckoutError, CheckoutProcessor, InMemoryStore, Product};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt().with_env_filter("info").init();

  let store = Arc::new(InMemoryStore::with_products(vec![
    Product::new("prod-001", "70% Dark Cacao Bar", Decimal::new(800, 2), Some("Intense, deep, pure".into()), None)?,
    Product::new("prod-003", "Espresso Milk Bar", Decimal::new(1000, 2), Some("Smooth milk chocolate, espresso".into()), None)?,
  ]));
  let catalog = CatalogReader::new(store.clone());
  let checkout = CheckoutProcessor::new(store.clone(), store.clone());

  for product in catalog.list_products().await? {
    println!("{:<10} {:<22} {:>6}", product.id, product.name, product.price);
  }

  let order = checkout
    .checkout(vec![CartItem::new("prod-001", 2), CartItem::new("prod-003", 1)])
    .await?;
  println!("Order {} ({}) total {}", order.order_id, order.status, order.total_amount);

  match checkout.checkout(vec![CartItem::new("prod-001", 0)]).await {
    Err(e @ CheckoutError::InvalidItem { .. }) => println!("Rejected as expected: {}", e),
    other => println!("Unexpected outcome: {:?}", other),
  }

  println!("Orders stored: {}", store.orders().len());
  Ok(())
}
