//! Product details command.

use anyhow::{bail, Result};

use super::ProductArgs;
use crate::context::Context;
use crate::views;

/// Run the product command.
pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let spinner = ctx.output.spinner("Loading product...");
    let product = ctx.catalog.get_product(args.id).await;
    spinner.finish_and_clear();

    match product {
        Ok(product) => {
            views::render_product_details(&ctx.output, &product);
            Ok(())
        }
        Err(e) => {
            tracing::debug!(id = %args.id, error = %e, "product unavailable");
            bail!(views::DETAILS_FAILED)
        }
    }
}
