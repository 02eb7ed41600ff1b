// storefront_server/src/lib.rs

//! HTTP surface for the storefront: config, error mapping, Postgres stores and routes.

pub mod config;
pub mod db;
pub mod errors;
pub mod state;
pub mod web;
