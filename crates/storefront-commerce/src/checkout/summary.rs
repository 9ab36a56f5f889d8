//! Checkout summary.

use crate::cart::{Cart, CartLine};
use crate::error::CommerceError;
use crate::money::Money;
use serde::Serialize;

/// Snapshot of a cart at the moment of checkout.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CheckoutSummary {
    /// Lines being checked out.
    pub items: Vec<CartLine>,
    /// Sum of quantities.
    pub total_items: i64,
    /// Sum of price times quantity.
    pub total: Money,
}

impl CheckoutSummary {
    /// Capture a cart for checkout.
    ///
    /// Returns an error if the cart is empty.
    pub fn from_cart(cart: &Cart) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        Ok(Self {
            items: cart.lines().to_vec(),
            total_items: cart.total_items(),
            total: cart.total_price(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Product, Rating};
    use crate::ids::ProductId;

    #[test]
    fn test_empty_cart_rejected() {
        let result = CheckoutSummary::from_cart(&Cart::new());
        assert!(matches!(result, Err(CommerceError::EmptyCart)));
    }

    #[test]
    fn test_summary_totals() {
        let mut cart = Cart::new();
        let product = Product {
            id: ProductId::new(1),
            title: "Backpack".to_string(),
            price: Money::new(10995),
            description: String::new(),
            category: "men's clothing".to_string(),
            image: String::new(),
            rating: Rating::default(),
        };
        cart.add(product.clone());
        cart.add(product);

        let summary = CheckoutSummary::from_cart(&cart).unwrap();
        assert_eq!(summary.items.len(), 1);
        assert_eq!(summary.total_items, 2);
        assert_eq!(summary.total.amount_cents, 21990);
    }
}
