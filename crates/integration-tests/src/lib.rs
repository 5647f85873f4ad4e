//! Integration tests for ShopZone.
//!
//! The catalog service is stubbed with `wiremock`; each test gets its
//! own mock server and a fresh [`AppState`] pointed at it.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopzone-integration-tests
//! ```

use std::time::Duration;

use shopzone_storefront::AppState;
use shopzone_storefront::config::{CatalogConfig, StorefrontConfig};
use url::Url;
use wiremock::MockServer;

/// A mock catalog server plus an application context wired to it.
pub struct TestContext {
    /// The wiremock server standing in for the catalog API.
    pub server: MockServer,
    /// Application context (catalog client, cart store, theme store).
    pub state: AppState,
}

impl TestContext {
    /// Start a mock catalog server and build a fresh context against it.
    ///
    /// # Panics
    ///
    /// Panics if the mock server URI is unparseable or the HTTP client
    /// cannot be built; both indicate a broken test environment.
    pub async fn new() -> Self {
        let server = MockServer::start().await;

        let config = StorefrontConfig {
            catalog: CatalogConfig {
                base_url: Url::parse(&server.uri()).expect("mock server uri"),
                cache_ttl: Duration::from_secs(300),
                cache_capacity: 100,
                timeout: Duration::from_secs(5),
            },
        };
        let state = AppState::new(config).expect("app state");

        Self { server, state }
    }
}

/// Minimal product JSON in the catalog's wire format.
#[must_use]
pub fn product_json(id: i64, title: &str, price: f64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "description": format!("Description of {title}"),
        "category": "smartphones",
        "price": price,
        "discountPercentage": 10.0,
        "rating": 4.5,
        "stock": 12,
        "thumbnail": format!("https://cdn.example.com/{id}/thumbnail.jpg"),
        "images": [format!("https://cdn.example.com/{id}/1.jpg")],
    })
}

/// A product page wrapping the given products.
#[must_use]
pub fn page_json(products: Vec<serde_json::Value>, total: i64, skip: i64) -> serde_json::Value {
    let limit = i64::try_from(products.len()).unwrap_or(0);
    serde_json::json!({
        "products": products,
        "total": total,
        "skip": skip,
        "limit": limit,
    })
}
