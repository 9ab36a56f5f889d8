//! Add-product form command.

use anyhow::{bail, Result};
use storefront_commerce::catalog::NewProduct;

use super::{simulate, AddProductArgs};
use crate::context::Context;

/// Run the add-product command.
pub async fn run(args: AddProductArgs, ctx: &Context) -> Result<()> {
    submit(ctx, &form_from_args(args)).await
}

fn form_from_args(args: AddProductArgs) -> NewProduct {
    NewProduct {
        title: args.title.unwrap_or_default(),
        price: args.price.unwrap_or_default(),
        description: args.description.unwrap_or_default(),
        category: args.category.unwrap_or_default(),
        image: args.image.unwrap_or_default(),
    }
}

/// Validate the form and pretend to submit it.
///
/// Field errors are printed one per line; nothing leaves the process.
pub async fn submit(ctx: &Context, form: &NewProduct) -> Result<()> {
    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(errors) => {
            if ctx.output.is_json() {
                ctx.output.json(&errors);
            }
            for error in &errors.errors {
                ctx.output.warn(&format!("{}: {}", error.field, error.message));
            }
            bail!("Product has {} invalid field(s)", errors.len());
        }
    };

    simulate(ctx, "Submitting product...", ctx.config.submit.delay()).await;
    tracing::info!(
        title = %draft.title,
        price = %draft.price,
        category = %draft.category,
        "Mock product submission"
    );

    if ctx.output.is_json() {
        ctx.output.json(&draft);
    } else {
        ctx.output.success(&format!(
            "Product \"{}\" added successfully! (mock submission)",
            draft.title
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_args_fail_validation() {
        let form = form_from_args(AddProductArgs {
            title: Some("Desk lamp".to_string()),
            ..Default::default()
        });
        let errors = form.validate().unwrap_err();
        assert!(errors.for_field("title").is_none());
        assert_eq!(errors.for_field("price"), Some("Price is required"));
        assert_eq!(errors.for_field("image"), Some("Image URL is required"));
    }

    #[test]
    fn test_complete_args_validate() {
        let form = form_from_args(AddProductArgs {
            title: Some("Desk lamp".to_string()),
            price: Some("24.50".to_string()),
            description: Some("A warm light for late nights".to_string()),
            category: Some("electronics".to_string()),
            image: Some("https://example.com/lamp.png".to_string()),
        });
        let draft = form.validate().unwrap();
        assert_eq!(draft.price.amount_cents, 2450);
    }
}
