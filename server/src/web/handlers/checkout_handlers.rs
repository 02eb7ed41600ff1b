// storefront_server/src/web/handlers/checkout_handlers.rs

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use storefront::{CartItem, OrderStatus};
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;

// --- Request DTOs ---
#[derive(Deserialize, Debug)]
pub struct CheckoutRequestPayload {
  // Absent and `null` both read as an empty cart.
  #[serde(default)]
  pub items: Option<Vec<CheckoutItemPayload>>,
}

#[derive(Deserialize, Debug)]
pub struct CheckoutItemPayload {
  pub id: String,
  // A missing quantity reads as 0 and is rejected by checkout.
  #[serde(default)]
  pub qty: i64,
}

impl From<CheckoutItemPayload> for CartItem {
  fn from(item: CheckoutItemPayload) -> Self {
    CartItem::new(item.id, item.qty)
  }
}

// --- Response DTO ---
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
  pub order_id: String,
  pub status: OrderStatus,
  #[serde(with = "rust_decimal::serde::float")]
  pub total: Decimal,
  pub message: &'static str,
}

#[instrument(
    name = "handler::checkout",
    skip(app_state, req_payload),
    fields(cart_lines = req_payload.items.as_ref().map_or(0, Vec::len))
)]
pub async fn checkout_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<CheckoutRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let cart: Vec<CartItem> = req_payload
    .into_inner()
    .items
    .unwrap_or_default()
    .into_iter()
    .map(CartItem::from)
    .collect();

  let order = app_state.checkout.checkout(cart).await.map_err(|e| {
    warn!(error = %e, "Checkout failed.");
    AppError::from(e)
  })?;

  info!(order_id = %order.order_id, total = %order.total_amount, "Checkout succeeded.");
  Ok(HttpResponse::Ok().json(CheckoutResponse {
    order_id: order.order_id.to_string(),
    status: order.status,
    total: order.total_amount,
    message: "Order placed successfully!",
  }))
}
