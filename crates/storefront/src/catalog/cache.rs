//! Cache types for catalog API responses.

use crate::catalog::types::{Category, Product, ProductPage};

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Product(Box<Product>),
    Page(ProductPage),
    Categories(Vec<Category>),
}
