// storefront/src/model/cart_item.rs

/// One line of a submitted cart. Transient: never persisted as-is.
///
/// `quantity` is kept exactly as received so that zero, negative and
/// oversized values can be rejected by checkout rather than by parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
  pub product_id: String,
  pub quantity: i64,
}

impl CartItem {
  pub fn new(product_id: impl Into<String>, quantity: i64) -> Self {
    Self {
      product_id: product_id.into(),
      quantity,
    }
  }
}
