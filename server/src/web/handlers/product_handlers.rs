// storefront_server/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Serialize;
use storefront::Product;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct Category {
  pub id: u32,
  pub name: &'static str,
  pub img: &'static str,
  pub flavors: &'static [&'static str],
}

/// Storefront navigation categories. Static; not stored in the database.
pub static CATEGORIES: [Category; 3] = [
  Category {
    id: 1,
    name: "Dark Chocolate",
    img: "https://images.pexels.com/photos/65882/chocolate-dark-coffee-confiserie-65882.jpeg",
    flavors: &["70% Cacao", "Espresso", "Sea Salt", "Orange Zest"],
  },
  Category {
    id: 2,
    name: "Milk Chocolate",
    img: "https://images.unsplash.com/photo-1504674900247-0877df9cc836",
    flavors: &["Classic", "Hazelnut", "Caramel", "Almond"],
  },
  Category {
    id: 3,
    name: "Truffles & Pralines",
    img: "https://images.pexels.com/photos/19121798/pexels-photo-19121798.jpeg",
    flavors: &["Champagne", "Salted Caramel", "Tiramisu", "Rum"],
  },
];

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
  pub categories: &'static [Category],
  pub products: Vec<Product>,
}

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = app_state.catalog.list_products().await?;
  info!("Successfully fetched {} products.", products.len());

  Ok(HttpResponse::Ok().json(ProductListResponse {
    categories: &CATEGORIES,
    products,
  }))
}
