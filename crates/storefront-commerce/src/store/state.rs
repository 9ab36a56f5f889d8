//! Store state, reducer, and container.

use crate::cart::{Cart, CartLine};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use crate::search::CatalogFilter;
use crate::store::Action;
use serde::{Deserialize, Serialize};

/// Everything the view keeps between events.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StoreState {
    /// Search text, stored verbatim.
    pub search_query: String,
    /// Selected category label; empty means all.
    pub selected_category: String,
    /// Cart contents.
    pub cart: Cart,
    /// Product shown in the details view.
    pub selected_product_id: Option<ProductId>,
    /// Whether the details view is open.
    pub is_modal_open: bool,
}

impl StoreState {
    /// The current filter fields.
    pub fn filter(&self) -> CatalogFilter {
        CatalogFilter::new(self.search_query.clone(), self.selected_category.clone())
    }

    /// The product whose details must be fetched, if any.
    ///
    /// A closed details view never needs a fetch.
    pub fn product_to_fetch(&self) -> Option<ProductId> {
        if self.is_modal_open {
            self.selected_product_id
        } else {
            None
        }
    }
}

/// Apply one action to a state, returning the next state.
pub fn reduce(mut state: StoreState, action: Action) -> StoreState {
    match action {
        Action::SetSearchQuery(query) => state.search_query = query,
        Action::SetSelectedCategory(category) => state.selected_category = category,
        Action::AddToCart(product) => state.cart.add(product),
        Action::RemoveFromCart(product_id) => {
            state.cart.remove(product_id);
        }
        Action::UpdateQuantity {
            product_id,
            quantity,
        } => {
            state.cart.update_quantity(product_id, quantity);
        }
        Action::ClearCart => state.cart.clear(),
        Action::SetSelectedProduct(product_id) => state.selected_product_id = product_id,
        Action::SetModalOpen(open) => state.is_modal_open = open,
    }
    state
}

/// State container the view dispatches into.
///
/// There is exactly one writer: whoever holds `&mut Store`.
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: StoreState,
}

impl Store {
    /// Create a store with empty filters, an empty cart and the details view closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// Apply an action.
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(action = action.name(), "dispatch");
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.dispatch(Action::SetSearchQuery(query.into()));
    }

    pub fn set_selected_category(&mut self, category: impl Into<String>) {
        self.dispatch(Action::SetSelectedCategory(category.into()));
    }

    pub fn add_to_cart(&mut self, product: Product) {
        self.dispatch(Action::AddToCart(product));
    }

    /// Add `quantity` single units of a product, as the details view does.
    ///
    /// Returns an error if quantity is not positive.
    pub fn add_to_cart_times(&mut self, product: Product, quantity: i64) -> Result<(), CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        for _ in 0..quantity {
            self.add_to_cart(product.clone());
        }
        Ok(())
    }

    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        self.dispatch(Action::RemoveFromCart(product_id));
    }

    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) {
        self.dispatch(Action::UpdateQuantity {
            product_id,
            quantity,
        });
    }

    pub fn clear_cart(&mut self) {
        self.dispatch(Action::ClearCart);
    }

    pub fn set_selected_product(&mut self, product_id: Option<ProductId>) {
        self.dispatch(Action::SetSelectedProduct(product_id));
    }

    pub fn set_modal_open(&mut self, open: bool) {
        self.dispatch(Action::SetModalOpen(open));
    }

    /// Select a product and open the details view.
    pub fn open_product(&mut self, product_id: ProductId) {
        self.set_selected_product(Some(product_id));
        self.set_modal_open(true);
    }

    /// Close the details view and clear the selection.
    pub fn close_product(&mut self) {
        self.set_modal_open(false);
        self.set_selected_product(None);
    }

    /// Cart lines in insertion order.
    pub fn cart_items(&self) -> &[CartLine] {
        self.state.cart.lines()
    }

    pub fn cart(&self) -> &Cart {
        &self.state.cart
    }

    /// Sum of quantities, recomputed on each call.
    pub fn total_items(&self) -> i64 {
        crate::cart::total_items(self.cart_items())
    }

    /// Sum of price times quantity, recomputed on each call.
    pub fn total_price(&self) -> Money {
        crate::cart::total_price(self.cart_items())
    }

    pub fn search_query(&self) -> &str {
        &self.state.search_query
    }

    pub fn selected_category(&self) -> &str {
        &self.state.selected_category
    }

    pub fn selected_product_id(&self) -> Option<ProductId> {
        self.state.selected_product_id
    }

    pub fn is_modal_open(&self) -> bool {
        self.state.is_modal_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Rating;

    fn product(id: u64, cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {}", id),
            price: Money::new(cents),
            description: String::new(),
            category: "jewelery".to_string(),
            image: String::new(),
            rating: Rating::default(),
        }
    }

    #[test]
    fn test_reduce_is_pure() {
        let before = StoreState::default();
        let after = reduce(before.clone(), Action::AddToCart(product(1, 1000)));
        assert!(before.cart.is_empty());
        assert_eq!(after.cart.total_items(), 1);
    }

    #[test]
    fn test_filters_stored_verbatim() {
        let mut store = Store::new();
        store.set_search_query("  Mens ");
        store.set_selected_category("men's clothing");
        assert_eq!(store.search_query(), "  Mens ");
        assert_eq!(store.selected_category(), "men's clothing");
        assert_eq!(store.state().filter(), CatalogFilter::new("  Mens ", "men's clothing"));
    }

    #[test]
    fn test_modal_selection() {
        let mut store = Store::new();
        assert_eq!(store.state().product_to_fetch(), None);

        store.set_selected_product(Some(ProductId::new(5)));
        assert_eq!(store.state().product_to_fetch(), None);

        store.set_modal_open(true);
        assert_eq!(store.state().product_to_fetch(), Some(ProductId::new(5)));

        store.close_product();
        assert!(!store.is_modal_open());
        assert_eq!(store.selected_product_id(), None);

        store.open_product(ProductId::new(7));
        assert_eq!(store.state().product_to_fetch(), Some(ProductId::new(7)));
    }

    #[test]
    fn test_add_to_cart_times() {
        let mut store = Store::new();
        store.add_to_cart_times(product(1, 250), 3).unwrap();
        assert_eq!(store.total_items(), 3);
        assert_eq!(store.cart_items().len(), 1);
        assert_eq!(store.total_price().amount_cents, 750);

        assert!(store.add_to_cart_times(product(1, 250), 0).is_err());
        assert_eq!(store.total_items(), 3);
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let mut store = Store::new();
        store.add_to_cart(product(1, 100));
        let before = store.state().clone();

        store.remove_from_cart(ProductId::new(99));
        store.update_quantity(ProductId::new(99), 4);
        assert_eq!(store.state(), &before);
    }
}
