// tests/catalog_tests.rs
mod common;

use common::*;
use storefront::{CatalogError, StoreError};

#[tokio::test]
async fn test_lists_every_product_unfiltered() {
  let h = harness();

  let products = h.catalog.list_products().await.unwrap();

  assert_eq!(products.len(), 6);
  assert_eq!(products[0].id, "prod-001");
  assert_eq!(products[0].price, cents(800));
  assert_eq!(products[5].name, "Salted Caramel Praline");
}

#[tokio::test]
async fn test_listing_twice_returns_identical_results() {
  let h = harness();

  let first = h.catalog.list_products().await.unwrap();
  let second = h.catalog.list_products().await.unwrap();

  assert_eq!(first, second);
}

#[tokio::test]
async fn test_listing_has_no_side_effects_on_orders() {
  let h = harness();

  h.catalog.list_products().await.unwrap();

  assert!(h.store.orders().is_empty());
}

#[tokio::test]
async fn test_unavailable_store_is_reported() {
  let h = harness();
  h.store.set_unavailable(true);

  let err = h.catalog.list_products().await.unwrap_err();

  assert!(matches!(err, CatalogError::StoreUnavailable(StoreError::Unavailable { .. })));
}

#[tokio::test]
async fn test_product_serializes_price_as_number() {
  let h = harness();
  let products = h.catalog.list_products().await.unwrap();

  let json = serde_json::to_value(&products[2]).unwrap();

  assert_eq!(json["id"], "prod-003");
  assert_eq!(json["price"], serde_json::json!(10.0));
  assert_eq!(json["img"], serde_json::Value::Null);
}
