// storefront_server/src/web/routes.rs

use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse};

use crate::errors::AppError;
use crate::web::handlers::{checkout_handlers, product_handlers};

// Liveness only; does not touch the database.
async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().content_type("text/plain; charset=utf-8").body("Server is healthy!")
}

/// Malformed checkout bodies are client errors and use the same `{"message"}` shape.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  tracing::info!(error = %err, "Rejecting malformed JSON body.");
  AppError::Validation("Invalid checkout request body.".to_string()).into()
}

pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
    .route("/health", web::get().to(health_check_handler))
    .service(
      web::scope("/api")
        .route("/products", web::get().to(product_handlers::list_products_handler))
        .route("/checkout", web::post().to(checkout_handlers::checkout_handler)),
    );
}
