// storefront/src/checkout/mod.rs

//! Checkout: validates a cart against the catalog, prices it from current
//! catalog prices and persists the order with its items in one atomic write.
//!
//! The work is a fixed pipeline of five steps (see [`steps::CHECKOUT_STEPS`]);
//! each step fails fast, and the only write happens in the last one.

pub mod context;
pub mod steps;

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::error::CheckoutError;
use crate::model::{CartItem, Order};
use crate::pipeline::{ContextData, Pipeline, PipelineResult};
use crate::store::{OrderStore, ProductStore};

pub use context::CheckoutCtxData;

/// Builds the checkout pipeline with every step wired to its handler.
pub fn build_checkout_pipeline() -> Pipeline<CheckoutCtxData, CheckoutError> {
  let mut p = Pipeline::<CheckoutCtxData, CheckoutError>::new(steps::CHECKOUT_STEPS);
  p.on(steps::REJECT_EMPTY_CART, steps::reject_empty_cart);
  p.on(steps::COLLECT_PRODUCT_IDS, steps::collect_product_ids);
  p.on(steps::LOAD_CATALOG_ENTRIES, steps::load_catalog_entries);
  p.on(steps::PRICE_CART_LINES, steps::price_cart_lines);
  p.on(steps::PERSIST_ORDER, steps::persist_order);
  p
}

pub struct CheckoutProcessor {
  products: Arc<dyn ProductStore>,
  orders: Arc<dyn OrderStore>,
  pipeline: Pipeline<CheckoutCtxData, CheckoutError>,
}

impl CheckoutProcessor {
  pub fn new(products: Arc<dyn ProductStore>, orders: Arc<dyn OrderStore>) -> Self {
    Self {
      products,
      orders,
      pipeline: build_checkout_pipeline(),
    }
  }

  /// Runs one checkout. Either returns the persisted order or an error with
  /// nothing written.
  #[instrument(name = "CheckoutProcessor::checkout", skip_all, fields(cart_lines = cart.len()))]
  pub async fn checkout(&self, cart: Vec<CartItem>) -> Result<Order, CheckoutError> {
    let ctx = ContextData::new(CheckoutCtxData::new(self.products.clone(), self.orders.clone(), cart));

    match self.pipeline.run(ctx.clone()).await? {
      PipelineResult::Completed => {
        let order = ctx.write().order.take();
        match order {
          Some(order) => {
            info!(order_id = %order.order_id, total = %order.total_amount, "Checkout completed.");
            Ok(order)
          }
          None => {
            warn!("Checkout pipeline completed without producing an order.");
            Err(CheckoutError::Halted)
          }
        }
      }
      PipelineResult::Stopped => {
        warn!("Checkout pipeline was stopped before persisting an order.");
        Err(CheckoutError::Halted)
      }
    }
  }
}
