// storefront/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Structural failures raised by the step pipeline itself.
#[derive(Debug, Error)]
pub enum PipelineError {
  #[error("Handler missing for step: {step_name}")]
  HandlerMissing { step_name: String },
}

/// An entity failed constructor-level validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
  #[error("Missing required field '{field}' on {entity}")]
  MissingField { entity: &'static str, field: &'static str },

  #[error("Invalid value for '{field}' on {entity}: {reason}")]
  InvalidField {
    entity: &'static str,
    field: &'static str,
    reason: String,
  },
}

/// Failures reported by a `ProductStore` or `OrderStore` implementation.
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("Datastore unavailable: {source}")]
  Unavailable {
    #[source]
    source: AnyhowError,
  },

  #[error("Datastore operation '{operation}' failed: {source}")]
  Operation {
    operation: &'static str,
    #[source]
    source: AnyhowError,
  },
}

impl StoreError {
  pub fn unavailable(source: impl Into<AnyhowError>) -> Self {
    StoreError::Unavailable { source: source.into() }
  }

  pub fn operation(operation: &'static str, source: impl Into<AnyhowError>) -> Self {
    StoreError::Operation {
      operation,
      source: source.into(),
    }
  }
}

#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("Product catalog is unavailable: {0}")]
  StoreUnavailable(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum CheckoutError {
  #[error("Cart is empty.")]
  EmptyCart,

  #[error("No valid items.")]
  NoValidItems,

  #[error("Invalid item or quantity found in cart (product '{product_id}', quantity {quantity}).")]
  InvalidItem { product_id: String, quantity: i64 },

  #[error("Datastore error during checkout: {0}")]
  Store(#[from] StoreError),

  #[error("Checkout pipeline error: {0}")]
  Pipeline(#[from] PipelineError),

  #[error("Checkout pipeline was halted before an order was created.")]
  Halted,
}

impl CheckoutError {
  /// True for rejections caused by the submitted cart rather than by infrastructure.
  pub fn is_client_error(&self) -> bool {
    matches!(
      self,
      CheckoutError::EmptyCart | CheckoutError::NoValidItems | CheckoutError::InvalidItem { .. }
    )
  }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
