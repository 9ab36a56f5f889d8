//! Product catalog module.
//!
//! Contains the product shape served by the catalog API, category labels,
//! and the add-product form.

mod category;
mod new_product;
mod product;

pub use category::category_label;
pub use new_product::{FieldError, NewProduct, ProductDraft, ValidationErrors};
pub use product::{Product, Rating};
