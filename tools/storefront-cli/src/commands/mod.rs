//! CLI command implementations.

pub mod add_product;
pub mod categories;
pub mod config;
pub mod product;
pub mod products;
pub mod shop;

use std::time::Duration;

use clap::{Args, Subcommand};
use storefront_commerce::catalog::Product;
use storefront_commerce::ProductId;
use storefront_data::FetchError;

use crate::context::Context;

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Only show products whose title contains this text.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only show products in this category.
    #[arg(short, long)]
    pub category: Option<String>,

    /// Ask the API for the category instead of filtering locally.
    #[arg(long, requires = "category")]
    pub remote_category: bool,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID.
    pub id: ProductId,
}

/// Arguments for the add-product command.
#[derive(Args, Default)]
pub struct AddProductArgs {
    /// Product title.
    #[arg(long)]
    pub title: Option<String>,

    /// Price in dollars.
    #[arg(long)]
    pub price: Option<String>,

    /// Product description.
    #[arg(long)]
    pub description: Option<String>,

    /// Category name.
    #[arg(long)]
    pub category: Option<String>,

    /// Image URL.
    #[arg(long)]
    pub image: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

/// Products and categories, read concurrently.
pub(crate) async fn load_catalog(
    ctx: &Context,
) -> (Result<Vec<Product>, FetchError>, Result<Vec<String>, FetchError>) {
    let spinner = ctx.output.spinner("Loading products...");
    let loaded = tokio::join!(ctx.catalog.list_products(), ctx.catalog.list_categories());
    spinner.finish_and_clear();
    loaded
}

/// Wait out a simulated round trip behind a spinner.
pub(crate) async fn simulate(ctx: &Context, msg: &str, delay: Duration) {
    let spinner = ctx.output.spinner(msg);
    tokio::time::sleep(delay).await;
    spinner.finish_and_clear();
}
