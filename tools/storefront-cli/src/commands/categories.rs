//! Category listing command.

use anyhow::{bail, Result};
use storefront_commerce::catalog::category_label;

use crate::context::Context;
use crate::views;

/// Run the categories command.
pub async fn run(ctx: &Context) -> Result<()> {
    let spinner = ctx.output.spinner("Loading categories...");
    let categories = ctx.catalog.list_categories().await;
    spinner.finish_and_clear();

    let categories = match categories {
        Ok(categories) => categories,
        Err(e) => {
            tracing::debug!(error = %e, "category list unavailable");
            bail!(views::LOAD_FAILED);
        }
    };

    if ctx.output.is_json() {
        ctx.output.json(&categories);
        return Ok(());
    }

    ctx.output.header("Categories");
    for name in &categories {
        ctx.output.list_item(&format!("{} ({})", category_label(name), name));
    }

    Ok(())
}
