// storefront_server/src/state.rs
use std::sync::Arc;

use storefront::{CatalogReader, CheckoutProcessor, OrderStore, ProductStore};

#[derive(Clone)]
pub struct AppState {
  pub catalog: CatalogReader,
  pub checkout: Arc<CheckoutProcessor>,
}

impl AppState {
  /// Wires the catalog reader and checkout processor to the given stores.
  pub fn new(products: Arc<dyn ProductStore>, orders: Arc<dyn OrderStore>) -> Self {
    Self {
      catalog: CatalogReader::new(products.clone()),
      checkout: Arc::new(CheckoutProcessor::new(products, orders)),
    }
  }
}
