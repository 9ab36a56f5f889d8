//! Cart and line item types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// Lines are kept in insertion order and keyed by product id: no two lines share
/// an id, and every line present has a quantity of at least 1.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line for `product.id`, or appends a new line with
    /// quantity 1.
    pub fn add(&mut self, product: Product) {
        if let Some(existing) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return;
        }
        self.lines.push(CartLine::new(product));
    }

    /// Set a line's quantity.
    ///
    /// A quantity of zero or less removes the line. Returns whether a line was
    /// changed or removed.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(product_id);
        }

        match self.lines.iter_mut().find(|l| l.product.id == product_id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove a line from the cart.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| l.product.id != product_id);
        self.lines.len() < len_before
    }

    /// Remove all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get a line by product id.
    pub fn get(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    /// Get total item count (sum of quantities).
    pub fn total_items(&self) -> i64 {
        total_items(&self.lines)
    }

    /// Get the sum of price times quantity over all lines.
    pub fn total_price(&self) -> Money {
        total_price(&self.lines)
    }

    /// Get number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A line item in the cart: the product as added, plus a quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    /// Always at least 1 while the line is in a cart.
    pub quantity: i64,
}

impl CartLine {
    /// A new line with quantity 1.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Price times quantity.
    pub fn subtotal(&self) -> Money {
        self.product.price * self.quantity
    }
}

/// Sum of quantities over `lines`; 0 for an empty slice.
pub fn total_items(lines: &[CartLine]) -> i64 {
    lines
        .iter()
        .fold(0_i64, |acc, l| acc.saturating_add(l.quantity))
}

/// Sum of price times quantity over `lines`; zero for an empty slice.
pub fn total_price(lines: &[CartLine]) -> Money {
    lines.iter().map(CartLine::subtotal).sum()
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
            category: "electronics".to_string(),
            image: String::new(),
            rating: Rating::default(),
        }
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert!(cart.total_price().is_zero());
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::new();
        cart.add(product(1, 1000));
        cart.add(product(1, 1000));

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.get(ProductId::new(1)).unwrap().quantity, 2);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price().amount_cents, 2000);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.add(product(3, 100));
        cart.add(product(1, 100));
        cart.add(product(3, 100));
        cart.add(product(2, 100));

        let ids: Vec<u64> = cart.lines().iter().map(|l| l.product.id.get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new();
        cart.add(product(1, 1000));

        assert!(cart.update_quantity(ProductId::new(1), 5));
        assert_eq!(cart.total_items(), 5);
        assert!(!cart.update_quantity(ProductId::new(9), 5));
    }

    #[test]
    fn test_update_quantity_non_positive_removes() {
        let mut cart = Cart::new();
        cart.add(product(1, 1000));
        cart.add(product(2, 1000));

        assert!(cart.update_quantity(ProductId::new(1), 0));
        assert!(cart.update_quantity(ProductId::new(2), -5));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        cart.add(product(1, 1000));

        assert!(cart.remove(ProductId::new(1)));
        assert!(!cart.remove(ProductId::new(1)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_pricing() {
        let mut cart = Cart::new();
        cart.add(product(1, 1000));
        cart.add(product(1, 1000));
        cart.add(product(2, 2000));

        assert_eq!(cart.total_price().amount_cents, 4000); // 2*1000 + 1*2000
    }

    #[test]
    fn test_line_serializes_flat() {
        let line = CartLine::new(product(1, 1000));
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["quantity"], 1);
        assert_eq!(json["price"], 10.0);
    }
}
