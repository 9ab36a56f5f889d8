//! Product grid command.

use anyhow::{bail, Result};
use storefront_commerce::catalog::{category_label, Product};
use storefront_commerce::search::CatalogFilter;

use super::{load_catalog, ProductsArgs};
use crate::context::Context;
use crate::views;

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let (products, categories) = load_catalog(ctx).await;

    let products = match products {
        Ok(products) => products,
        Err(e) => {
            tracing::debug!(error = %e, "product list unavailable");
            bail!(views::LOAD_FAILED);
        }
    };

    let category = args.category.unwrap_or_default();
    match categories {
        Ok(names) if !category.is_empty() && !names.contains(&category) => {
            ctx.output.warn(&format!("Unknown category '{}'", category));
            ctx.output.info(&format!(
                "Available: {}",
                names.iter().map(|n| category_label(n)).collect::<Vec<_>>().join(", ")
            ));
        }
        Ok(_) => {}
        Err(e) => tracing::debug!(error = %e, "category list unavailable"),
    }

    let filter = CatalogFilter::new(args.search.unwrap_or_default(), category);

    if args.remote_category {
        let remote = match ctx.catalog.list_products_in_category(&filter.category).await {
            Ok(remote) => remote,
            Err(e) => {
                tracing::debug!(error = %e, "category read failed");
                bail!(views::LOAD_FAILED);
            }
        };
        let shown = CatalogFilter::new(filter.search_query.clone(), "").apply(&remote);
        render(ctx, &shown, products.len(), &filter);
        return Ok(());
    }

    let shown = filter.apply(&products);
    render(ctx, &shown, products.len(), &filter);
    Ok(())
}

fn render(ctx: &Context, shown: &[&Product], total: usize, filter: &CatalogFilter) {
    views::render_products(&ctx.output, shown, total, !filter.is_empty());
}
