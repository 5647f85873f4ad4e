//! ShopZone Core - Shared types library.
//!
//! This crate provides common types used across all ShopZone components:
//! - `storefront` - Catalog client and client-side state containers
//! - `cli` - Command-line catalog browser
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
