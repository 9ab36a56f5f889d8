//! Storefront domain types and logic.
//!
//! This crate holds everything the storefront does without touching the network:
//!
//! - **Catalog**: Products as returned by the product API, category labels,
//!   and the add-product form
//! - **Cart**: Line items keyed by product id with derived totals
//! - **Search**: Title/category filtering of a product list
//! - **Store**: The state container the view dispatches actions into
//! - **Checkout**: Summary of a simulated checkout
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_commerce::prelude::*;
//!
//! let mut store = Store::new();
//! store.add_to_cart(product.clone());
//! store.add_to_cart(product);
//!
//! assert_eq!(store.total_items(), 2);
//! println!("Total: {}", store.total_price());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;
pub mod checkout;
pub mod search;
pub mod store;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{
        category_label, FieldError, NewProduct, Product, ProductDraft, Rating, ValidationErrors,
    };

    // Cart
    pub use crate::cart::{Cart, CartLine};

    // Checkout
    pub use crate::checkout::CheckoutSummary;

    // Search
    pub use crate::search::{filter_products, CatalogFilter};

    // Store
    pub use crate::store::{reduce, Action, Store, StoreState};
}
