//! Catalog browsing commands.

use shopzone_core::{Price, ProductId};
use shopzone_storefront::catalog::{Product, ProductPage};
use shopzone_storefront::{AppState, Result};

/// List products with pagination.
pub async fn products(state: &AppState, limit: Option<u32>, skip: Option<u32>) -> Result<()> {
    let page = state.catalog().get_products(limit, skip).await?;
    print_page(&page);
    Ok(())
}

/// Show a single product in detail.
pub async fn product(state: &AppState, id: i64) -> Result<()> {
    let product = state.catalog().get_product(ProductId::new(id)).await?;
    print_detail(&product);
    Ok(())
}

/// List all categories.
#[allow(clippy::print_stdout)]
pub async fn categories(state: &AppState) -> Result<()> {
    let categories = state.catalog().get_categories().await?;
    for category in &categories {
        println!("{:<24} {}", category.slug, category.name);
    }
    println!("{} categories", categories.len());
    Ok(())
}

/// List the products in one category.
pub async fn by_category(state: &AppState, slug: &str) -> Result<()> {
    let page = state.catalog().get_products_by_category(slug).await?;
    print_page(&page);
    Ok(())
}

/// Search products by free-text query.
pub async fn search(state: &AppState, query: &str) -> Result<()> {
    let page = state.catalog().search_products(query).await?;
    print_page(&page);
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_page(page: &ProductPage) {
    for product in &page.products {
        println!(
            "{:>5}  {:>10}  {:>4.1}  {:<40}  [{}]",
            product.id,
            Price::usd(product.price).display(),
            product.rating,
            truncate(&product.title, 40),
            product.category,
        );
    }
    println!(
        "{} of {} products (skip {})",
        page.products.len(),
        page.total,
        page.skip
    );
}

#[allow(clippy::print_stdout)]
fn print_detail(product: &Product) {
    println!("{}  (#{})", product.title, product.id);
    if let Some(brand) = &product.brand {
        println!("Brand:      {brand}");
    }
    println!("Category:   {}", product.category);
    println!(
        "Price:      {}  (list {}, -{}%)",
        Price::usd(product.price),
        Price::usd(product.list_price()),
        product.discount_percentage,
    );
    println!("Rating:     {:.2}", product.rating);
    println!("Stock:      {}", product.stock);
    println!();
    println!("{}", product.description);
    if !product.reviews.is_empty() {
        println!();
        println!("Reviews:");
        for review in &product.reviews {
            println!(
                "  {}/5  {}  - {} ({})",
                review.rating,
                review.comment,
                review.reviewer_name,
                review.date.format("%Y-%m-%d"),
            );
        }
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
