//! Domain types for the catalog API.
//!
//! These mirror the catalog's JSON wire format (camelCase fields).
//! Optional fields default safely: a product with no `images` list is
//! displayed with just its thumbnail, and `reviews` defaults to empty.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shopzone_core::ProductId;

/// A product record from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog product ID.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Long-form description.
    #[serde(default)]
    pub description: String,
    /// Category slug (e.g., "smartphones").
    #[serde(default)]
    pub category: String,
    /// Current unit price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Discount applied to the list price, as a percentage.
    #[serde(default, with = "rust_decimal::serde::float")]
    pub discount_percentage: Decimal,
    /// Average review rating (0.0 - 5.0).
    #[serde(default)]
    pub rating: f64,
    /// Units in stock.
    #[serde(default)]
    pub stock: i64,
    /// Brand name, if the catalog provides one.
    #[serde(default)]
    pub brand: Option<String>,
    /// Thumbnail image URL.
    #[serde(default)]
    pub thumbnail: String,
    /// Full-size image URLs. May be absent; see [`Product::gallery`].
    #[serde(default)]
    pub images: Vec<String>,
    /// Customer reviews. May be absent.
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Product {
    /// Image URLs for display: the image list, or just the thumbnail
    /// when the catalog sent none.
    #[must_use]
    pub fn gallery(&self) -> Vec<&str> {
        if self.images.is_empty() {
            vec![self.thumbnail.as_str()]
        } else {
            self.images.iter().map(String::as_str).collect()
        }
    }

    /// Pre-discount list price, derived from the current price and the
    /// discount percentage, rounded to cents.
    #[must_use]
    pub fn list_price(&self) -> Decimal {
        let markup = Decimal::ONE + self.discount_percentage / Decimal::ONE_HUNDRED;
        (self.price * markup).round_dp(2)
    }
}

/// A customer review on a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Star rating (1 - 5).
    pub rating: i32,
    /// Review text.
    #[serde(default)]
    pub comment: String,
    /// When the review was posted.
    pub date: DateTime<Utc>,
    /// Display name of the reviewer.
    #[serde(default)]
    pub reviewer_name: String,
}

/// One page of a product listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPage {
    /// Products on this page.
    pub products: Vec<Product>,
    /// Total products matching the request, across all pages.
    #[serde(default)]
    pub total: i64,
    /// Offset of this page.
    #[serde(default)]
    pub skip: i64,
    /// Page size the server applied.
    #[serde(default)]
    pub limit: i64,
}

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// URL-safe identifier (e.g., "mens-watches").
    pub slug: String,
    /// Display label (e.g., "Mens Watches").
    pub name: String,
    /// Endpoint listing the category's products.
    #[serde(default)]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_json() -> &'static str {
        r#"{
            "id": 1,
            "title": "Essence Mascara Lash Princess",
            "description": "A popular mascara.",
            "category": "beauty",
            "price": 9.99,
            "discountPercentage": 7.17,
            "rating": 4.94,
            "stock": 5,
            "brand": "Essence",
            "thumbnail": "https://cdn.example.com/1/thumbnail.png",
            "images": ["https://cdn.example.com/1/1.png"],
            "reviews": [
                {
                    "rating": 2,
                    "comment": "Very unhappy with my purchase!",
                    "date": "2024-05-23T08:56:21.618Z",
                    "reviewerName": "John Doe",
                    "reviewerEmail": "john@x.dummyjson.com"
                }
            ]
        }"#
    }

    #[test]
    fn test_product_deserialize() {
        let product: Product = serde_json::from_str(sample_json()).expect("valid product");
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price, dec!(9.99));
        assert_eq!(product.discount_percentage, dec!(7.17));
        assert_eq!(product.brand.as_deref(), Some("Essence"));
        assert_eq!(product.reviews.len(), 1);
        assert_eq!(product.reviews[0].reviewer_name, "John Doe");
    }

    #[test]
    fn test_missing_optionals_default() {
        // Only the fields the core actually needs are required
        let product: Product = serde_json::from_str(
            r#"{"id": 2, "title": "Bare", "price": 5.0, "thumbnail": "t.png"}"#,
        )
        .expect("minimal product");
        assert!(product.images.is_empty());
        assert!(product.reviews.is_empty());
        assert!(product.brand.is_none());
        assert_eq!(product.discount_percentage, Decimal::ZERO);
    }

    #[test]
    fn test_gallery_falls_back_to_thumbnail() {
        let product: Product = serde_json::from_str(
            r#"{"id": 3, "title": "NoImages", "price": 1.0, "thumbnail": "thumb.png"}"#,
        )
        .expect("valid product");
        assert_eq!(product.gallery(), vec!["thumb.png"]);

        let with_images: Product = serde_json::from_str(sample_json()).expect("valid product");
        assert_eq!(with_images.gallery(), vec!["https://cdn.example.com/1/1.png"]);
    }

    #[test]
    fn test_list_price_derivation() {
        let product: Product = serde_json::from_str(sample_json()).expect("valid product");
        // 9.99 * 1.0717 = 10.706283 -> 10.71
        assert_eq!(product.list_price(), dec!(10.71));
    }

    #[test]
    fn test_product_page_deserialize() {
        let page: ProductPage = serde_json::from_str(
            r#"{"products": [], "total": 194, "skip": 20, "limit": 10}"#,
        )
        .expect("valid page");
        assert_eq!(page.total, 194);
        assert_eq!(page.skip, 20);
        assert_eq!(page.limit, 10);
    }

    #[test]
    fn test_category_deserialize() {
        let category: Category = serde_json::from_str(
            r#"{"slug": "mens-watches", "name": "Mens Watches", "url": "https://dummyjson.com/products/category/mens-watches"}"#,
        )
        .expect("valid category");
        assert_eq!(category.slug, "mens-watches");
        assert_eq!(category.name, "Mens Watches");
    }
}
