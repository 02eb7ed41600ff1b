// storefront_server/src/errors.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use storefront::{CatalogError, CheckoutError};
use thiserror::Error;

/// Returned to clients for every datastore failure; the detail only goes to the log.
pub const DATABASE_ERROR_MESSAGE: &str = "Server encountered a database error. Please try again.";

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Store Error: {0}")]
  Store(String),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl From<CheckoutError> for AppError {
  fn from(err: CheckoutError) -> Self {
    match err {
      CheckoutError::EmptyCart => AppError::Validation("Cart is empty.".to_string()),
      CheckoutError::NoValidItems => AppError::Validation("No valid items.".to_string()),
      CheckoutError::InvalidItem { .. } => AppError::Validation("Invalid item or quantity found in cart.".to_string()),
      CheckoutError::Store(e) => AppError::Store(e.to_string()),
      e @ (CheckoutError::Pipeline(_) | CheckoutError::Halted) => AppError::Internal(e.to_string()),
    }
  }
}

impl From<CatalogError> for AppError {
  fn from(err: CatalogError) -> Self {
    match err {
      CatalogError::StoreUnavailable(e) => AppError::Store(e.to_string()),
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    match self {
      AppError::Validation(m) => {
        tracing::info!(application_error = %self, "Rejecting request");
        HttpResponse::BadRequest().json(json!({ "message": m }))
      }
      AppError::Sqlx(_) | AppError::Store(_) => {
        tracing::error!(application_error = %self, "Responding with database error");
        HttpResponse::InternalServerError().json(json!({ "message": DATABASE_ERROR_MESSAGE }))
      }
      AppError::Config(_) | AppError::Internal(_) => {
        tracing::error!(application_error = %self, "Responding with internal error");
        HttpResponse::InternalServerError().json(json!({ "message": "An internal error occurred." }))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
