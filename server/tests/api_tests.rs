// storefront_server/tests/api_tests.rs

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, App};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use storefront::{InMemoryStore, Product};
use storefront_server::state::AppState;
use storefront_server::web::configure_app_routes;
use uuid::Uuid;

fn product(id: &str, name: &str, price_cents: i64) -> Product {
  Product::new(id, name, Decimal::new(price_cents, 2), Some("Classic".to_string()), None).unwrap()
}

fn seeded_store() -> Arc<InMemoryStore> {
  Arc::new(InMemoryStore::with_products(vec![
    product("prod-001", "70% Dark Cacao Bar", 800),
    product("prod-002", "Sea Salt Dark Squares", 1200),
    product("prod-003", "Espresso Milk Bar", 1000),
  ]))
}

macro_rules! init_app {
  ($store:expr) => {{
    let store = $store.clone();
    let state = AppState::new(store.clone(), store);
    test::init_service(App::new().app_data(web::Data::new(state)).configure(configure_app_routes)).await
  }};
}

#[actix_web::test]
async fn health_reports_ok() {
  let app = init_app!(seeded_store());
  let req = test::TestRequest::get().uri("/health").to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::OK);
  let body = test::read_body(resp).await;
  assert_eq!(body, "Server is healthy!");
}

#[actix_web::test]
async fn products_lists_catalog_with_categories() {
  let app = init_app!(seeded_store());
  let req = test::TestRequest::get().uri("/api/products").to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;

  let products = body["products"].as_array().expect("products array");
  assert_eq!(products.len(), 3);
  assert_eq!(products[0]["id"], "prod-001");
  assert_eq!(products[0]["price"], json!(8.0));
  assert_eq!(products[1]["name"], "Sea Salt Dark Squares");

  let categories = body["categories"].as_array().expect("categories array");
  assert_eq!(categories.len(), 3);
  assert_eq!(categories[0]["name"], "Dark Chocolate");
}

#[actix_web::test]
async fn products_unavailable_store_is_server_error() {
  let store = seeded_store();
  store.set_unavailable(true);
  let app = init_app!(store);

  let req = test::TestRequest::get().uri("/api/products").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn checkout_places_order() {
  let store = seeded_store();
  let app = init_app!(store);

  let req = test::TestRequest::post()
    .uri("/api/checkout")
    .set_json(json!({ "items": [{ "id": "prod-001", "qty": 2 }, { "id": "prod-003", "qty": 1 }] }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);

  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["status"], "Processing");
  assert_eq!(body["total"], json!(26.0));
  assert_eq!(body["message"], "Order placed successfully!");

  let order_id = Uuid::parse_str(body["orderId"].as_str().expect("orderId string")).expect("uuid order id");
  let orders = store.orders();
  assert_eq!(orders.len(), 1);
  assert_eq!(orders[0].order_id, order_id);
  assert_eq!(store.order_items(order_id).len(), 2);
}

#[actix_web::test]
async fn checkout_rejects_client_errors() {
  let cases = [
    (json!({ "items": [] }), "Cart is empty."),
    (json!({}), "Cart is empty."),
    (json!({ "items": null }), "Cart is empty."),
    (json!({ "items": [{ "id": "", "qty": 1 }] }), "Invalid item or quantity found in cart."),
    (json!({ "items": [{ "id": " prod-001 ", "qty": 1 }] }), "Invalid item or quantity found in cart."),
    (json!({ "items": [{ "id": "prod-404", "qty": 1 }] }), "Invalid item or quantity found in cart."),
    (json!({ "items": [{ "id": "prod-001", "qty": 0 }] }), "Invalid item or quantity found in cart."),
    (json!({ "items": [{ "id": "prod-001" }] }), "Invalid item or quantity found in cart."),
  ];

  for (payload, expected) in cases {
    let store = seeded_store();
    let app = init_app!(store);
    let req = test::TestRequest::post().uri("/api/checkout").set_json(&payload).to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "payload: {}", payload);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], expected, "payload: {}", payload);
    assert!(store.orders().is_empty());
  }
}

#[actix_web::test]
async fn checkout_malformed_body_is_bad_request() {
  let app = init_app!(seeded_store());
  let req = test::TestRequest::post()
    .uri("/api/checkout")
    .insert_header(("content-type", "application/json"))
    .set_payload("{not json")
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = test::read_body_json(resp).await;
  assert!(body["message"].is_string());
}

#[actix_web::test]
async fn checkout_store_failure_is_generic_server_error() {
  let store = seeded_store();
  store.fail_item_writes_after(1);
  let app = init_app!(store);

  let req = test::TestRequest::post()
    .uri("/api/checkout")
    .set_json(json!({ "items": [{ "id": "prod-001", "qty": 1 }, { "id": "prod-002", "qty": 1 }] }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["message"], "Server encountered a database error. Please try again.");
  assert!(store.orders().is_empty());
  assert_eq!(store.order_item_count(), 0);
}
