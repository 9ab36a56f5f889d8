//! Checkout module.
//!
//! Checkout is simulated: the view waits, logs the summary and clears the cart.

mod summary;

pub use summary::CheckoutSummary;
