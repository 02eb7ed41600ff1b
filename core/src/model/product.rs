// storefront/src/model/product.rs

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::ModelError;

/// A purchasable catalog entry. Read-only from the storefront's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
  pub id: String,
  pub name: String,
  #[serde(with = "rust_decimal::serde::float")]
  pub price: Decimal,
  pub flavor: Option<String>,
  pub img: Option<String>,
}

impl Product {
  /// Builds a product, rejecting blank identifiers or names and negative prices.
  pub fn new(
    id: impl Into<String>,
    name: impl Into<String>,
    price: Decimal,
    flavor: Option<String>,
    img: Option<String>,
  ) -> Result<Self, ModelError> {
    let id = id.into();
    let name = name.into();
    if id.trim().is_empty() {
      return Err(ModelError::MissingField {
        entity: "Product",
        field: "id",
      });
    }
    if name.trim().is_empty() {
      return Err(ModelError::MissingField {
        entity: "Product",
        field: "name",
      });
    }
    if price < Decimal::ZERO {
      return Err(ModelError::InvalidField {
        entity: "Product",
        field: "price",
        reason: format!("price must be non-negative, got {}", price),
      });
    }
    Ok(Self {
      id,
      name,
      price,
      flavor,
      img,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rejects_negative_price() {
    let err = Product::new("prod-x", "Bar", Decimal::new(-100, 2), None, None).unwrap_err();
    assert!(matches!(err, ModelError::InvalidField { field: "price", .. }));
  }

  #[test]
  fn rejects_blank_id_and_name() {
    assert!(Product::new("  ", "Bar", Decimal::ONE, None, None).is_err());
    assert!(Product::new("prod-x", "", Decimal::ONE, None, None).is_err());
  }

  #[test]
  fn free_products_are_allowed() {
    let product = Product::new("prod-x", "Sample", Decimal::ZERO, None, None).unwrap();
    assert_eq!(product.price, Decimal::ZERO);
  }
}
