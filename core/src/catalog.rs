// storefront/src/catalog.rs

use std::sync::Arc;

use tracing::{error, info, instrument};

use crate::error::CatalogError;
use crate::model::Product;
use crate::store::ProductStore;

/// Returns the full, unfiltered product list.
#[derive(Clone)]
pub struct CatalogReader {
  products: Arc<dyn ProductStore>,
}

impl CatalogReader {
  pub fn new(products: Arc<dyn ProductStore>) -> Self {
    Self { products }
  }

  #[instrument(name = "CatalogReader::list_products", skip(self))]
  pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
    let products = self.products.list_products().await.map_err(|e| {
      error!(error = %e, "Failed to read the product catalog.");
      CatalogError::StoreUnavailable(e)
    })?;
    info!(count = products.len(), "Product catalog read.");
    Ok(products)
  }
}
