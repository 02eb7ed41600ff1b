// storefront/src/checkout/context.rs

//! Data a single checkout run operates on. Handlers receive it wrapped in
//! `ContextData`.

use std::collections::HashMap;
use std::sync::Arc;

use crate::model::{CartItem, Order, OrderItem, Product};
use crate::store::{OrderStore, ProductStore};

#[derive(Clone)]
pub struct CheckoutCtxData {
  pub products: Arc<dyn ProductStore>,
  pub orders: Arc<dyn OrderStore>,
  pub cart: Vec<CartItem>,
  // Deduplicated, first-seen order.
  pub product_ids: Vec<String>,
  pub catalog: HashMap<String, Product>,
  pub lines: Vec<OrderItem>,
  pub order: Option<Order>,
}

impl CheckoutCtxData {
  pub fn new(products: Arc<dyn ProductStore>, orders: Arc<dyn OrderStore>, cart: Vec<CartItem>) -> Self {
    Self {
      products,
      orders,
      cart,
      product_ids: Vec::new(),
      catalog: HashMap::new(),
      lines: Vec::new(),
      order: None,
    }
  }
}
