// storefront/src/model/mod.rs

//! Typed records for the storefront entities.

pub mod cart_item;
pub mod order;
pub mod product;

pub use cart_item::CartItem;
pub use order::{round_money, Order, OrderItem, OrderStatus};
pub use product::Product;
