//! Shopping cart module.
//!
//! Contains the cart, its line items, and the derived-total functions.

mod cart;

pub use cart::{total_items, total_price, Cart, CartLine};
