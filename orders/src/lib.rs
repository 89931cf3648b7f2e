#![forbid(unsafe_code)]

//! The orders front end: its pages, the routes that reach them and the
//! REST contract behind them.
//!
//! With the `browser` feature the crate builds to a wasm module whose
//! `start` mounts the router into the page's outlet element.

pub mod api;
#[cfg(feature = "browser")]
mod browser;
pub mod routes;
pub mod views;

pub use api::{ApiError, Endpoint, Method};
#[cfg(feature = "browser")]
pub use browser::*;
use orders_router_config::{
    errors::RouterConfigError, get_config_from_str, RouterOptions,
};
pub use views::OrderView;

/// Router options from this crate's `[package.metadata.orders-router]`,
/// with `ORDERS_ROUTER_*` environment overrides applied.
pub fn app_options() -> Result<RouterOptions, RouterConfigError> {
    get_config_from_str(include_str!("../Cargo.toml"))
}
