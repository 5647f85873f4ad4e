//! Catalog REST client implementation.
//!
//! Thin `reqwest` wrapper over the read-only catalog endpoints, with
//! `moka` caching for everything except free-text search.

use std::sync::Arc;

use moka::future::Cache;
use serde::de::DeserializeOwned;
use shopzone_core::ProductId;
use tracing::{debug, instrument};
use url::Url;

use crate::catalog::CatalogError;
use crate::catalog::cache::CacheValue;
use crate::catalog::types::{Category, Product, ProductPage};
use crate::config::CatalogConfig;

/// Client for the product catalog API.
///
/// Cheaply cloneable; all clones share the same HTTP connection pool
/// and response cache.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: Url,
    cache: Cache<String, CacheValue>,
}

impl CatalogClient {
    /// Create a new catalog client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        let cache = Cache::builder()
            .max_capacity(config.cache_capacity)
            .time_to_live(config.cache_ttl)
            .build();

        Ok(Self {
            inner: Arc::new(CatalogClientInner {
                client,
                base_url: config.base_url.clone(),
                cache,
            }),
        })
    }

    /// Build a request URL from a path relative to the base URL.
    fn endpoint(&self, path: &str) -> Result<Url, CatalogError> {
        self.inner
            .base_url
            .join(path)
            .map_err(|e| CatalogError::Status {
                status: 0,
                body: format!("invalid endpoint {path}: {e}"),
            })
    }

    /// Execute a GET request and decode the JSON response.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, CatalogError> {
        let response = self.inner.client.get(url.clone()).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(CatalogError::RateLimited(retry_after));
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(url.path().to_string()));
        }

        // Read the body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            let truncated: String = body.chars().take(500).collect();
            tracing::error!(
                status = %status,
                body = %truncated,
                "Catalog returned non-success status"
            );
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body: truncated,
            });
        }

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %body.chars().take(500).collect::<String>(),
                    "Failed to parse catalog response"
                );
                Err(CatalogError::Parse(e))
            }
        }
    }

    // =========================================================================
    // Product Methods
    // =========================================================================

    /// Get a paginated list of products.
    ///
    /// `limit` of `None` lets the server apply its default page size.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_products(
        &self,
        limit: Option<u32>,
        skip: Option<u32>,
    ) -> Result<ProductPage, CatalogError> {
        let cache_key = format!(
            "products:{}:{}",
            limit.map_or_else(String::new, |n| n.to_string()),
            skip.map_or_else(String::new, |n| n.to_string()),
        );

        if let Some(CacheValue::Page(page)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for products");
            return Ok(page);
        }

        let mut url = self.endpoint("products")?;
        if limit.is_some() || skip.is_some() {
            let mut pairs = url.query_pairs_mut();
            if let Some(limit) = limit {
                pairs.append_pair("limit", &limit.to_string());
            }
            if let Some(skip) = skip {
                pairs.append_pair("skip", &skip.to_string());
            }
        }

        let page: ProductPage = self.get_json(url).await?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Page(page.clone()))
            .await;

        Ok(page)
    }

    /// Get a product by its ID.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the product does not exist,
    /// or another error if the API request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        let cache_key = format!("product:{id}");

        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for product");
            return Ok(*product);
        }

        let url = self.endpoint(&format!("products/{id}"))?;
        let product: Product = self.get_json(url).await?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Product(Box::new(product.clone())))
            .await;

        Ok(product)
    }

    /// Search products by free-text query.
    ///
    /// Search results are never cached.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(query = %query))]
    pub async fn search_products(&self, query: &str) -> Result<ProductPage, CatalogError> {
        let mut url = self.endpoint("products/search")?;
        url.query_pairs_mut().append_pair("q", query);

        self.get_json(url).await
    }

    // =========================================================================
    // Category Methods
    // =========================================================================

    /// Get the list of product categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_categories(&self) -> Result<Vec<Category>, CatalogError> {
        let cache_key = "categories".to_string();

        if let Some(CacheValue::Categories(categories)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for categories");
            return Ok(categories);
        }

        let url = self.endpoint("products/categories")?;
        let categories: Vec<Category> = self.get_json(url).await?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Categories(categories.clone()))
            .await;

        Ok(categories)
    }

    /// Get the products in a category, filtered server-side.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(slug = %slug))]
    pub async fn get_products_by_category(&self, slug: &str) -> Result<ProductPage, CatalogError> {
        let cache_key = format!("category:{slug}");

        if let Some(CacheValue::Page(page)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for category products");
            return Ok(page);
        }

        let url = self.endpoint(&format!("products/category/{slug}"))?;
        let page: ProductPage = self.get_json(url).await?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Page(page.clone()))
            .await;

        Ok(page)
    }

    // =========================================================================
    // Cache Management
    // =========================================================================

    /// Invalidate all cached catalog data.
    pub async fn invalidate_all(&self) {
        self.inner.cache.invalidate_all();
        self.inner.cache.run_pending_tasks().await;
    }
}
