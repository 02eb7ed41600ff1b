// storefront/src/checkout/steps.rs

//! Handlers for the checkout pipeline, one per step. Every handler drops its
//! lock guard before awaiting the store.

use std::collections::HashSet;

use tracing::{info, warn};

use crate::checkout::context::CheckoutCtxData;
use crate::error::CheckoutError;
use crate::model::{Order, OrderItem};
use crate::pipeline::{ContextData, PipelineControl};

pub const REJECT_EMPTY_CART: &str = "reject_empty_cart";
pub const COLLECT_PRODUCT_IDS: &str = "collect_product_ids";
pub const LOAD_CATALOG_ENTRIES: &str = "load_catalog_entries";
pub const PRICE_CART_LINES: &str = "price_cart_lines";
pub const PERSIST_ORDER: &str = "persist_order";

pub const CHECKOUT_STEPS: &[&str] = &[
  REJECT_EMPTY_CART,
  COLLECT_PRODUCT_IDS,
  LOAD_CATALOG_ENTRIES,
  PRICE_CART_LINES,
  PERSIST_ORDER,
];

pub async fn reject_empty_cart(ctx: ContextData<CheckoutCtxData>) -> Result<PipelineControl, CheckoutError> {
  if ctx.read().cart.is_empty() {
    info!("Checkout rejected: cart is empty.");
    return Err(CheckoutError::EmptyCart);
  }
  Ok(PipelineControl::Continue)
}

/// Ids are taken exactly as submitted; unknown or malformed ids fail later at pricing.
pub async fn collect_product_ids(ctx: ContextData<CheckoutCtxData>) -> Result<PipelineControl, CheckoutError> {
  let mut guard = ctx.write();
  let product_ids: Vec<String> = {
    let mut seen = HashSet::new();
    guard
      .cart
      .iter()
      .map(|item| item.product_id.as_str())
      .filter(|id| seen.insert(*id))
      .map(str::to_string)
      .collect()
  };

  if product_ids.is_empty() {
    info!("Checkout rejected: no product ids in cart.");
    return Err(CheckoutError::NoValidItems);
  }
  guard.product_ids = product_ids;
  Ok(PipelineControl::Continue)
}

pub async fn load_catalog_entries(ctx: ContextData<CheckoutCtxData>) -> Result<PipelineControl, CheckoutError> {
  let (store, ids) = {
    let guard = ctx.read();
    (guard.products.clone(), guard.product_ids.clone())
  };

  let found = store.find_products(&ids).await?;
  info!(requested = ids.len(), found = found.len(), "Catalog entries loaded for checkout.");

  ctx.write().catalog = found.into_iter().map(|p| (p.id.clone(), p)).collect();
  Ok(PipelineControl::Continue)
}

/// Prices every cart line from the catalog. The first unknown id or unusable
/// quantity rejects the whole cart.
pub async fn price_cart_lines(ctx: ContextData<CheckoutCtxData>) -> Result<PipelineControl, CheckoutError> {
  let mut guard = ctx.write();
  let mut lines = Vec::with_capacity(guard.cart.len());

  for item in &guard.cart {
    let invalid = || CheckoutError::InvalidItem {
      product_id: item.product_id.clone(),
      quantity: item.quantity,
    };

    let Some(product) = guard.catalog.get(&item.product_id) else {
      warn!(product_id = %item.product_id, "Checkout rejected: unknown product.");
      return Err(invalid());
    };
    let quantity = match i32::try_from(item.quantity) {
      Ok(q) if q > 0 => q,
      _ => {
        warn!(product_id = %item.product_id, quantity = item.quantity, "Checkout rejected: unusable quantity.");
        return Err(invalid());
      }
    };

    let line = OrderItem::new(product.id.as_str(), product.name.as_str(), quantity, product.price).map_err(|e| {
      warn!(product_id = %item.product_id, error = %e, "Checkout rejected: line failed validation.");
      invalid()
    })?;
    lines.push(line);
  }

  guard.lines = lines;
  Ok(PipelineControl::Continue)
}

pub async fn persist_order(ctx: ContextData<CheckoutCtxData>) -> Result<PipelineControl, CheckoutError> {
  let (store, lines) = {
    let mut guard = ctx.write();
    (guard.orders.clone(), std::mem::take(&mut guard.lines))
  };

  let order = Order::place(lines);
  store.create_order(&order).await?;
  info!(
    order_id = %order.order_id,
    total = %order.total_amount,
    items = order.items.len(),
    "Order persisted."
  );

  ctx.write().order = Some(order);
  Ok(PipelineControl::Continue)
}
