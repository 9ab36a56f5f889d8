//! Storefront CLI - browse the product catalog and fill a cart from the terminal.
//!
//! Commands:
//! - `storefront products` - List products, optionally filtered
//! - `storefront categories` - List category names
//! - `storefront product <ID>` - Show one product
//! - `storefront add-product` - Validate and (pretend to) submit a product
//! - `storefront shop` - Interactive session with a cart
//! - `storefront config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;
mod views;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{AddProductArgs, ConfigArgs, ProductArgs, ProductsArgs};

/// Storefront - browse the catalog, fill a cart, simulate checkout
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products(ProductsArgs),

    /// List product categories
    Categories,

    /// Show product details
    Product(ProductArgs),

    /// Validate a new product and simulate its submission
    AddProduct(AddProductArgs),

    /// Start an interactive shopping session
    Shop,

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    logging::init(cli.verbose, &ctx.config.log.level);

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Categories => commands::categories::run(&ctx).await,
        Commands::Product(args) => commands::product::run(args, &ctx).await,
        Commands::AddProduct(args) => commands::add_product::run(args, &ctx).await,
        Commands::Shop => commands::shop::run(&ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
