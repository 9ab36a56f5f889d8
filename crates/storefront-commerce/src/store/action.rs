//! Store actions.

use crate::catalog::Product;
use crate::ids::ProductId;

/// A mutation of the store state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the search text verbatim.
    SetSearchQuery(String),
    /// Replace the selected category verbatim. Empty means all categories.
    SetSelectedCategory(String),
    /// Add one unit of a product.
    AddToCart(Product),
    /// Remove a line; no-op if absent.
    RemoveFromCart(ProductId),
    /// Set a line's quantity; zero or less removes it.
    UpdateQuantity { product_id: ProductId, quantity: i64 },
    /// Empty the cart.
    ClearCart,
    /// Select (or deselect) the product shown in the details view.
    SetSelectedProduct(Option<ProductId>),
    /// Open or close the details view.
    SetModalOpen(bool),
}

impl Action {
    /// Short action name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetSearchQuery(_) => "set_search_query",
            Action::SetSelectedCategory(_) => "set_selected_category",
            Action::AddToCart(_) => "add_to_cart",
            Action::RemoveFromCart(_) => "remove_from_cart",
            Action::UpdateQuantity { .. } => "update_quantity",
            Action::ClearCart => "clear_cart",
            Action::SetSelectedProduct(_) => "set_selected_product",
            Action::SetModalOpen(_) => "set_modal_open",
        }
    }
}
