//! ShopZone Storefront library.
//!
//! The client-side core of the storefront: a read-only catalog API
//! client, the reactive cart and theme stores consumed by view code,
//! and the static mock order history.
//!
//! View rendering and routing live elsewhere; this crate has no
//! opinion on how its state is displayed.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod orders;
pub mod state;
pub mod stores;

pub use error::{AppError, Result};
pub use state::AppState;
