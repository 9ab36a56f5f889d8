//! Rendering of catalog, product and cart views.

use storefront_commerce::cart::{Cart, CartLine};
use storefront_commerce::catalog::{category_label, Product, Rating};

use crate::output::{cart_badge, Output};

/// Shown when the product list cannot be loaded.
pub const LOAD_FAILED: &str = "Failed to load products. Please try again later.";
/// Shown when a single product cannot be loaded.
pub const DETAILS_FAILED: &str = "Failed to load product details.";
/// Shown when filters hide every product.
pub const NO_MATCHES: &str = "No products match your filters";
/// Shown when the catalog itself is empty.
pub const NO_PRODUCTS: &str = "No products found";
/// Shown for an empty cart.
pub const EMPTY_CART: &str = "Your cart is empty";

const TITLE_WIDTH: usize = 50;
const WIDTHS: [usize; 5] = [4, TITLE_WIDTH + 3, 10, 20, 8];

/// Summary line above the product grid.
pub fn filter_summary(shown: usize, total: usize) -> String {
    if shown == total {
        format!("Showing all {} products", total)
    } else {
        format!("Showing {} of {} products", shown, total)
    }
}

/// Grid heading; changes once any filter is active.
pub fn grid_title(filtered: bool) -> &'static str {
    if filtered {
        "Filtered Products"
    } else {
        "Featured Products"
    }
}

/// Cut `text` to `max` characters, marking the cut with "...".
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

/// Five-star strip for a rating.
pub fn stars(rating: &Rating) -> String {
    let filled = rating.filled_stars();
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// "4.1 (259 reviews)"
pub fn rating_text(rating: &Rating) -> String {
    format!("{} ({} reviews)", rating.rate, rating.count)
}

/// Render the product grid with its summary line.
///
/// `total` is the size of the unfiltered list.
pub fn render_products(output: &Output, shown: &[&Product], total: usize, filtered: bool) {
    if output.is_json() {
        output.json(&shown);
        return;
    }

    if total == 0 {
        output.header(NO_PRODUCTS);
        output.line("Check back later for new products.");
        return;
    }

    output.header(grid_title(filtered));
    output.line(&filter_summary(shown.len(), total));

    if shown.is_empty() {
        output.warn(NO_MATCHES);
        output.line("Try adjusting your search or category filters.");
        return;
    }

    output.line("");
    output.table_row(&["ID", "TITLE", "PRICE", "CATEGORY", "RATING"], &WIDTHS);
    for product in shown {
        let id = product.id.to_string();
        let title = truncate(&product.title, TITLE_WIDTH);
        let price = product.price.display();
        let rate = product.rating.rate.to_string();
        output.table_row(&[&id, &title, &price, &product.category, &rate], &WIDTHS);
        if output.is_verbose() {
            output.kv("image", &product.image);
        }
    }
}

/// Render the details of one product.
pub fn render_product_details(output: &Output, product: &Product) {
    if output.is_json() {
        output.json(product);
        return;
    }

    output.header(&product.title);
    output.kv("id", &product.id.to_string());
    output.kv("price", &product.price.display());
    output.kv("category", &category_label(&product.category));
    output.kv(
        "rating",
        &format!("{} {}", stars(&product.rating), rating_text(&product.rating)),
    );
    output.kv("image", &product.image);
    output.line("");
    output.line(&product.description);
}

/// One cart line as a single row of text.
pub fn cart_line_label(line: &CartLine) -> String {
    format!(
        "{} x{} @ {} = {}",
        truncate(&line.product.title, TITLE_WIDTH),
        line.quantity,
        line.product.price.display(),
        line.subtotal().display()
    )
}

/// Header for the cart view, carrying the badge.
pub fn cart_title(cart: &Cart) -> String {
    format!("Shopping Cart ({})", cart_badge(cart.total_items()))
}

/// Render the cart contents and totals.
pub fn render_cart(output: &Output, cart: &Cart) {
    if output.is_json() {
        output.json(cart);
        return;
    }

    output.header(&cart_title(cart));
    if cart.is_empty() {
        output.line(EMPTY_CART);
        output.line("Add some products to get started!");
        return;
    }

    for line in cart.lines() {
        output.list_item(&cart_line_label(line));
    }
    output.line("");
    output.kv("items", &cart.total_items().to_string());
    output.kv("total", &cart.total_price().display());
}
