// storefront/src/lib.rs

//! Storefront: the catalog and checkout core of a small shop backend.
//!
//!  - [`CatalogReader`] lists every product in the catalog.
//!  - [`CheckoutProcessor`] turns a cart into a persisted order: it validates
//!    the cart against the catalog, prices it from current catalog prices and
//!    writes the order plus its line items as one atomic unit.
//!  - Storage sits behind the [`ProductStore`] and [`OrderStore`] ports and is
//!    injected at construction. [`InMemoryStore`] implements both.
//!  - Checkout runs as a named-step [`Pipeline`] over shared [`ContextData`].

pub mod catalog;
pub mod checkout;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::catalog::CatalogReader;
pub use crate::checkout::CheckoutProcessor;
pub use crate::error::{CatalogError, CheckoutError, ModelError, PipelineError, StoreError, StoreResult};
pub use crate::model::{CartItem, Order, OrderItem, OrderStatus, Product};
pub use crate::pipeline::{ContextData, Handler, Pipeline, PipelineControl, PipelineResult};
pub use crate::store::{InMemoryStore, OrderStore, ProductStore};
