//! Store behaviour across sequences of view events.

use storefront_commerce::prelude::*;

fn product(id: u64, price: f64, title: &str, category: &str) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_string(),
        price: Money::from_decimal(price),
        description: format!("{} description", title),
        category: category.to_string(),
        image: format!("https://example.com/{}.png", id),
        rating: Rating { rate: 4.1, count: 10 },
    }
}

#[test]
fn every_add_counts_one_unit() {
    let catalog = [
        product(1, 10.0, "Backpack", "men's clothing"),
        product(2, 22.3, "T-Shirt", "men's clothing"),
        product(3, 695.0, "Bracelet", "jewelery"),
    ];
    // Deterministic but irregular sequence of adds.
    let sequence = [0, 2, 2, 1, 0, 0, 2, 1, 2, 2, 0];

    let mut store = Store::new();
    for (calls, &index) in sequence.iter().enumerate() {
        store.add_to_cart(catalog[index].clone());
        assert_eq!(store.total_items(), calls as i64 + 1);
    }
    assert_eq!(store.cart_items().len(), 3);
}

#[test]
fn repeat_add_of_same_product_gives_one_line() {
    let mut store = Store::new();
    let p = product(1, 10.0, "Backpack", "men's clothing");
    store.add_to_cart(p.clone());
    store.add_to_cart(p);

    let lines = store.cart_items();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].product.id, ProductId::new(1));
    assert_eq!(lines[0].quantity, 2);
    assert_eq!(store.total_items(), 2);
    assert_eq!(store.total_price(), Money::from_decimal(20.0));
}

#[test]
fn non_positive_quantity_removes_line() {
    let mut store = Store::new();
    store.add_to_cart(product(1, 10.0, "Backpack", "men's clothing"));
    store.add_to_cart(product(2, 5.0, "Ring", "jewelery"));

    store.update_quantity(ProductId::new(1), 0);
    assert!(store.cart().get(ProductId::new(1)).is_none());

    store.update_quantity(ProductId::new(2), -5);
    assert!(store.cart().is_empty());
    assert_eq!(store.total_items(), 0);
    assert!(store.total_price().is_zero());
}

#[test]
fn total_price_is_sum_of_line_subtotals() {
    let mut store = Store::new();
    store.add_to_cart(product(1, 109.95, "Backpack", "men's clothing"));
    store.add_to_cart(product(2, 22.3, "T-Shirt", "men's clothing"));
    store.update_quantity(ProductId::new(2), 3);
    store.update_quantity(ProductId::new(1), 1000);

    let expected: i64 = store
        .cart_items()
        .iter()
        .map(|l| l.product.price.amount_cents * l.quantity)
        .sum();
    assert_eq!(store.total_price().amount_cents, expected);
    assert_eq!(store.total_price().display(), "$110,016.90");
}

#[test]
fn checkout_then_clear() {
    let mut store = Store::new();
    assert!(matches!(
        CheckoutSummary::from_cart(store.cart()),
        Err(CommerceError::EmptyCart)
    ));

    store.add_to_cart(product(3, 695.0, "Bracelet", "jewelery"));
    let summary = CheckoutSummary::from_cart(store.cart()).unwrap();
    assert_eq!(summary.total.display(), "$695.00");

    store.clear_cart();
    assert!(store.cart().is_empty());
}

#[test]
fn filter_follows_store_fields() {
    let catalog = vec![
        product(1, 10.0, "Mens Casual Premium Slim Fit T-Shirts", "men's clothing"),
        product(2, 5.0, "Pierced Owl Rose Gold Plated", "jewelery"),
        product(3, 64.0, "SanDisk SSD PLUS 1TB", "electronics"),
    ];

    let mut store = Store::new();
    assert_eq!(store.state().filter().apply(&catalog).len(), 3);

    store.set_search_query("gold");
    assert_eq!(store.state().filter().apply(&catalog).len(), 1);

    store.set_selected_category("electronics");
    assert!(store.state().filter().apply(&catalog).is_empty());

    store.set_search_query("");
    let shown = filter_products(&catalog, store.search_query(), store.selected_category());
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].id, ProductId::new(3));
}
