// storefront/src/model/order.rs

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use uuid::Uuid;

use crate::error::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrderStatus {
  Processing,
}

impl OrderStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      OrderStatus::Processing => "Processing",
    }
  }
}

impl std::fmt::Display for OrderStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A line of an order. The product name and unit price are copied from the
/// catalog at order time, so later catalog edits never alter past orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderItem {
  pub product_id: String,
  pub product_name: String,
  pub quantity: i32,
  #[serde(with = "rust_decimal::serde::float")]
  pub unit_price: Decimal,
}

impl OrderItem {
  pub fn new(
    product_id: impl Into<String>,
    product_name: impl Into<String>,
    quantity: i32,
    unit_price: Decimal,
  ) -> Result<Self, ModelError> {
    if quantity <= 0 {
      return Err(ModelError::InvalidField {
        entity: "OrderItem",
        field: "quantity",
        reason: format!("quantity must be positive, got {}", quantity),
      });
    }
    if unit_price < Decimal::ZERO {
      return Err(ModelError::InvalidField {
        entity: "OrderItem",
        field: "unit_price",
        reason: format!("unit price must be non-negative, got {}", unit_price),
      });
    }
    Ok(Self {
      product_id: product_id.into(),
      product_name: product_name.into(),
      quantity,
      unit_price,
    })
  }

  pub fn line_total(&self) -> Decimal {
    self.unit_price * Decimal::from(self.quantity)
  }
}

/// A completed checkout. Owns its line items; persisted as one order row plus
/// one row per item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
  pub order_id: Uuid,
  pub order_date: DateTime<Utc>,
  #[serde(with = "rust_decimal::serde::float")]
  pub total_amount: Decimal,
  pub status: OrderStatus,
  pub items: Vec<OrderItem>,
}

impl Order {
  /// Creates a `Processing` order with a fresh id, stamped now, whose total is
  /// the rounded sum of its line totals.
  pub fn place(items: Vec<OrderItem>) -> Self {
    let total_amount = round_money(items.iter().map(OrderItem::line_total).sum());
    Self {
      order_id: Uuid::new_v4(),
      order_date: Utc::now(),
      total_amount,
      status: OrderStatus::Processing,
      items,
    }
  }
}

/// Rounds to cents, half away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
  amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
