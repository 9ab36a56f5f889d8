//! Search module.
//!
//! Title and category filtering over a fetched product list.

mod filter;

pub use filter::{filter_products, CatalogFilter};
