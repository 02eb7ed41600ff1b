// storefront_server/src/web/handlers/mod.rs

pub mod checkout_handlers;
pub mod product_handlers;
