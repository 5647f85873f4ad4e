//! ShopZone CLI - Catalog browser and order history viewer.
//!
//! # Usage
//!
//! ```bash
//! # List products (paginated)
//! shopzone products --limit 20 --skip 40
//!
//! # Show one product
//! shopzone product 1
//!
//! # Browse categories
//! shopzone categories
//! shopzone category smartphones
//!
//! # Free-text search
//! shopzone search "laptop"
//!
//! # Mock order history
//! shopzone orders
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use shopzone_storefront::config::StorefrontConfig;
use shopzone_storefront::{AppState, Result};

mod commands;

#[derive(Parser)]
#[command(name = "shopzone")]
#[command(author, version, about = "ShopZone catalog browser")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products, paginated
    Products {
        /// Maximum number of products to fetch
        #[arg(short, long)]
        limit: Option<u32>,

        /// Number of products to skip
        #[arg(short, long)]
        skip: Option<u32>,
    },
    /// Show a single product by ID
    Product {
        /// Catalog product ID
        id: i64,
    },
    /// List product categories
    Categories,
    /// List the products in a category
    Category {
        /// Category slug (e.g., "smartphones")
        slug: String,
    },
    /// Search products by free-text query
    Search {
        /// Search query
        query: String,
    },
    /// Show the order history
    Orders,
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    // Default to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shopzone=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            std::process::ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = StorefrontConfig::from_env()?;
    let state = AppState::new(config)?;

    match cli.command {
        Commands::Products { limit, skip } => commands::catalog::products(&state, limit, skip).await,
        Commands::Product { id } => commands::catalog::product(&state, id).await,
        Commands::Categories => commands::catalog::categories(&state).await,
        Commands::Category { slug } => commands::catalog::by_category(&state, &slug).await,
        Commands::Search { query } => commands::catalog::search(&state, &query).await,
        Commands::Orders => {
            commands::orders::show();
            Ok(())
        }
    }
}
