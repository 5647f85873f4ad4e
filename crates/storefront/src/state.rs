//! Application context shared across view code.
//!
//! The cart and theme stores are deliberately not process-wide
//! globals: views receive this context by reference (or cheap clone)
//! and subscribe to the stores they render.

use std::sync::Arc;

use crate::catalog::{CatalogClient, CatalogError};
use crate::config::StorefrontConfig;
use crate::stores::{CartStore, ThemeStore};

/// Application context shared across all views.
///
/// Cheaply cloneable via `Arc`; clones share the catalog client's
/// connection pool and cache and both stores' state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogClient,
    cart: CartStore,
    theme: ThemeStore,
}

impl AppState {
    /// Create a new application context with an empty cart and the
    /// default (light) theme.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog HTTP client cannot be built.
    pub fn new(config: StorefrontConfig) -> Result<Self, CatalogError> {
        let catalog = CatalogClient::new(&config.catalog)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                cart: CartStore::new(),
                theme: ThemeStore::new(),
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog API client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }

    /// Get a reference to the theme store.
    #[must_use]
    pub fn theme(&self) -> &ThemeStore {
        &self.inner.theme
    }
}
