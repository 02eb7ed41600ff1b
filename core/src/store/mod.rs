// storefront/src/store/mod.rs

//! Ports to the relational datastore. The catalog reader and the checkout
//! processor receive these as injected handles; nothing here is global.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::model::{Order, Product};

pub mod memory;

pub use memory::InMemoryStore;

/// Read access to the product table.
#[async_trait]
pub trait ProductStore: Send + Sync {
  /// Every product, in the store's natural order.
  async fn list_products(&self) -> StoreResult<Vec<Product>>;

  /// All products whose id is in `ids`, fetched in one batch. Unknown ids are
  /// simply absent from the result.
  async fn find_products(&self, ids: &[String]) -> StoreResult<Vec<Product>>;
}

/// Write access to the orders and order_items tables.
#[async_trait]
pub trait OrderStore: Send + Sync {
  /// Persists the order row and one row per item as a single atomic unit.
  /// On error nothing from this call may be visible to later reads.
  async fn create_order(&self, order: &Order) -> StoreResult<()>;
}
