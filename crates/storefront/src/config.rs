//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `CATALOG_BASE_URL` - Catalog API base URL (default: <https://dummyjson.com>)
//! - `CATALOG_CACHE_TTL_SECS` - Catalog cache time-to-live (default: 300)
//! - `CATALOG_CACHE_CAPACITY` - Max cached catalog responses (default: 1000)
//! - `CATALOG_TIMEOUT_SECS` - HTTP request timeout (default: 10)

use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_BASE_URL: &str = "https://dummyjson.com";
const DEFAULT_CACHE_TTL_SECS: u64 = 300;
const DEFAULT_CACHE_CAPACITY: u64 = 1000;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Catalog API configuration.
    pub catalog: CatalogConfig,
}

/// Catalog API configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog service.
    pub base_url: Url,
    /// Time-to-live for cached catalog responses.
    pub cache_ttl: Duration,
    /// Maximum number of cached catalog responses.
    pub cache_capacity: u64,
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default catalog URL is valid"),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = parse_url("CATALOG_BASE_URL", std::env::var("CATALOG_BASE_URL").ok())?;
        let cache_ttl = parse_secs(
            "CATALOG_CACHE_TTL_SECS",
            std::env::var("CATALOG_CACHE_TTL_SECS").ok(),
            DEFAULT_CACHE_TTL_SECS,
        )?;
        let cache_capacity = parse_u64(
            "CATALOG_CACHE_CAPACITY",
            std::env::var("CATALOG_CACHE_CAPACITY").ok(),
            DEFAULT_CACHE_CAPACITY,
        )?;
        let timeout = parse_secs(
            "CATALOG_TIMEOUT_SECS",
            std::env::var("CATALOG_TIMEOUT_SECS").ok(),
            DEFAULT_TIMEOUT_SECS,
        )?;

        Ok(Self {
            catalog: CatalogConfig {
                base_url,
                cache_ttl,
                cache_capacity,
                timeout,
            },
        })
    }
}

fn parse_url(name: &str, value: Option<String>) -> Result<Url, ConfigError> {
    value.map_or_else(
        || Ok(CatalogConfig::default().base_url),
        |raw| {
            Url::parse(&raw).map_err(|e| ConfigError::InvalidEnvVar(name.to_string(), e.to_string()))
        },
    )
}

fn parse_u64(name: &str, value: Option<String>, default: u64) -> Result<u64, ConfigError> {
    value.map_or(Ok(default), |raw| {
        raw.parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar(name.to_string(), e.to_string()))
    })
}

fn parse_secs(name: &str, value: Option<String>, default: u64) -> Result<Duration, ConfigError> {
    parse_u64(name, value, default).map(Duration::from_secs)
}
