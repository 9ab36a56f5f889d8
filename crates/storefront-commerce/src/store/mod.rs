//! Store module.
//!
//! The view's state lives in a [`StoreState`] value. Every mutation is an
//! [`Action`] applied by the pure [`reduce`] function; [`Store`] owns the current
//! state and is handed to the view explicitly.

mod action;
mod state;

pub use action::Action;
pub use state::{reduce, Store, StoreState};
