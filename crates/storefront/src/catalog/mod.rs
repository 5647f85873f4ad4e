//! Product catalog API client.
//!
//! # Architecture
//!
//! - Plain read-only REST endpoints (dummyjson.com-compatible), fetched
//!   with `reqwest` and decoded with `serde`
//! - The catalog is source of truth - no local sync, direct API calls
//! - In-memory caching via `moka` for GET responses (TTL from config);
//!   search responses are never cached
//!
//! # Example
//!
//! ```rust,ignore
//! use shopzone_storefront::catalog::CatalogClient;
//!
//! let client = CatalogClient::new(&config.catalog)?;
//!
//! // Browse the catalog
//! let page = client.get_products(Some(20), None).await?;
//! let product = client.get_product(ProductId::new(1)).await?;
//! let hits = client.search_products("phone").await?;
//! ```

mod cache;
mod client;
pub mod types;

pub use client::CatalogClient;
pub use types::{Category, Product, ProductPage, Review};

use thiserror::Error;

/// Errors that can occur when talking to the catalog service.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed (connect, timeout, etc.).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON decoding failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found (404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limited by the catalog service.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Any other non-2xx response.
    #[error("Catalog returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated for logging.
        body: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::NotFound("product 123".to_string());
        assert_eq!(err.to_string(), "Not found: product 123");
    }

    #[test]
    fn test_rate_limited_error() {
        let err = CatalogError::RateLimited(60);
        assert_eq!(err.to_string(), "Rate limited, retry after 60 seconds");
    }

    #[test]
    fn test_status_error_display() {
        let err = CatalogError::Status {
            status: 500,
            body: "oops".to_string(),
        };
        assert_eq!(err.to_string(), "Catalog returned HTTP 500: oops");
    }
}
