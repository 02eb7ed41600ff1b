// storefront/src/store/memory.rs

//! An in-process implementation of both store ports, used by tests, benches
//! and demos. Writes are staged and only committed when every row succeeds,
//! mirroring a single database transaction.

use async_trait::async_trait;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::model::{Order, OrderItem, Product};
use crate::store::{OrderStore, ProductStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredOrderItem {
  pub item_id: i64,
  pub order_id: Uuid,
  pub item: OrderItem,
}

#[derive(Debug, Default)]
struct Tables {
  products: Vec<Product>,
  orders: Vec<Order>,
  order_items: Vec<StoredOrderItem>,
  next_item_id: i64,
}

#[derive(Debug, Default)]
struct Faults {
  unavailable: bool,
  // Item writes allowed before the next order write fails.
  fail_item_writes_after: Option<usize>,
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
  tables: Mutex<Tables>,
  faults: Mutex<Faults>,
}

impl InMemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
    let store = Self::new();
    for product in products {
      store.upsert_product(product);
    }
    store
  }

  /// Inserts the product, or replaces the one with the same id in place.
  pub fn upsert_product(&self, product: Product) {
    let mut tables = self.tables.lock();
    match tables.products.iter_mut().find(|p| p.id == product.id) {
      Some(existing) => *existing = product,
      None => tables.products.push(product),
    }
  }

  /// Changes a catalog price. Returns false if the product does not exist.
  pub fn set_product_price(&self, product_id: &str, price: Decimal) -> bool {
    let mut tables = self.tables.lock();
    match tables.products.iter_mut().find(|p| p.id == product_id) {
      Some(product) => {
        product.price = price;
        true
      }
      None => false,
    }
  }

  /// Committed orders, in commit order. Item lists are as persisted.
  pub fn orders(&self) -> Vec<Order> {
    self.tables.lock().orders.clone()
  }

  pub fn order_items(&self, order_id: Uuid) -> Vec<StoredOrderItem> {
    self
      .tables
      .lock()
      .order_items
      .iter()
      .filter(|row| row.order_id == order_id)
      .cloned()
      .collect()
  }

  pub fn order_item_count(&self) -> usize {
    self.tables.lock().order_items.len()
  }

  /// Deleting an order cascades to its items.
  pub fn delete_order(&self, order_id: Uuid) -> bool {
    let mut tables = self.tables.lock();
    let before = tables.orders.len();
    tables.orders.retain(|o| o.order_id != order_id);
    tables.order_items.retain(|row| row.order_id != order_id);
    tables.orders.len() != before
  }

  /// Makes every subsequent call fail with `StoreError::Unavailable`.
  pub fn set_unavailable(&self, unavailable: bool) {
    self.faults.lock().unavailable = unavailable;
  }

  /// The next `create_order` with more than `n` items fails after writing `n`
  /// item rows. Smaller orders succeed and leave the fault armed.
  pub fn fail_item_writes_after(&self, n: usize) {
    self.faults.lock().fail_item_writes_after = Some(n);
  }

  fn check_available(&self) -> StoreResult<()> {
    if self.faults.lock().unavailable {
      return Err(StoreError::unavailable(anyhow::anyhow!("in-memory store is marked unavailable")));
    }
    Ok(())
  }
}

#[async_trait]
impl ProductStore for InMemoryStore {
  async fn list_products(&self) -> StoreResult<Vec<Product>> {
    self.check_available()?;
    Ok(self.tables.lock().products.clone())
  }

  async fn find_products(&self, ids: &[String]) -> StoreResult<Vec<Product>> {
    self.check_available()?;
    let tables = self.tables.lock();
    Ok(tables.products.iter().filter(|p| ids.contains(&p.id)).cloned().collect())
  }
}

#[async_trait]
impl OrderStore for InMemoryStore {
  #[instrument(name = "InMemoryStore::create_order", skip_all, fields(order_id = %order.order_id))]
  async fn create_order(&self, order: &Order) -> StoreResult<()> {
    self.check_available()?;
    let fail_after = {
      let mut faults = self.faults.lock();
      match faults.fail_item_writes_after {
        Some(n) if n < order.items.len() => faults.fail_item_writes_after.take(),
        _ => None,
      }
    };

    let mut tables = self.tables.lock();
    if tables.orders.iter().any(|o| o.order_id == order.order_id) {
      return Err(StoreError::operation(
        "insert_order",
        anyhow::anyhow!("duplicate order_id {}", order.order_id),
      ));
    }

    // Stage every item row first; nothing touches the tables until all succeed.
    let mut staged = Vec::with_capacity(order.items.len());
    let mut next_item_id = tables.next_item_id;
    for (idx, item) in order.items.iter().enumerate() {
      if fail_after == Some(idx) {
        debug!(written = idx, "Injected failure while writing order items; discarding staged rows.");
        return Err(StoreError::operation(
          "insert_order_item",
          anyhow::anyhow!("injected failure after {} item rows", idx),
        ));
      }
      next_item_id += 1;
      staged.push(StoredOrderItem {
        item_id: next_item_id,
        order_id: order.order_id,
        item: item.clone(),
      });
    }

    tables.next_item_id = next_item_id;
    tables.orders.push(order.clone());
    tables.order_items.extend(staged);
    Ok(())
  }
}
