//! Catalog filter.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// The filter fields the view holds: search text and selected category.
///
/// An empty field does not constrain the result.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogFilter {
    /// Case-insensitive substring of the title.
    pub search_query: String,
    /// Exact category label.
    pub category: String,
}

impl CatalogFilter {
    /// Create a filter from search text and a category.
    pub fn new(search_query: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            search_query: search_query.into(),
            category: category.into(),
        }
    }

    /// Check if neither field constrains the result.
    pub fn is_empty(&self) -> bool {
        self.search_query.is_empty() && self.category.is_empty()
    }

    /// Check whether a product passes both fields.
    pub fn matches(&self, product: &Product) -> bool {
        let matches_search = product.title_contains(&self.search_query);
        let matches_category = self.category.is_empty() || product.in_category(&self.category);
        matches_search && matches_category
    }

    /// Products passing the filter, in their original order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Filter `products` by search text and category.
pub fn filter_products<'a>(
    products: &'a [Product],
    search_query: &str,
    category: &str,
) -> Vec<&'a Product> {
    CatalogFilter::new(search_query, category).apply(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Rating;
    use crate::ids::ProductId;
    use crate::money::Money;

    fn product(id: u64, title: &str, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            price: Money::new(100),
            description: String::new(),
            category: category.to_string(),
            image: String::new(),
            rating: Rating::default(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Mens Casual Slim Fit", "men's clothing"),
            product(2, "Solid Gold Petite Micropave", "jewelery"),
            product(3, "WD 2TB Elements Portable Hard Drive", "electronics"),
            product(4, "Mens Cotton Jacket", "men's clothing"),
        ]
    }

    #[test]
    fn test_empty_filter_returns_everything() {
        let products = catalog();
        let shown = filter_products(&products, "", "");
        assert_eq!(shown.len(), products.len());
        assert!(shown.iter().zip(products.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let products = catalog();
        let shown = filter_products(&products, "MENS", "");
        let ids: Vec<u64> = shown.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn test_category_is_exact() {
        let products = catalog();
        assert_eq!(filter_products(&products, "", "electronics").len(), 1);
        assert!(filter_products(&products, "", "Electronics").is_empty());
    }

    #[test]
    fn test_search_and_category_combine() {
        let products = catalog();
        let shown = filter_products(&products, "jacket", "men's clothing");
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, ProductId::new(4));
        assert!(filter_products(&products, "jacket", "jewelery").is_empty());
    }

    #[test]
    fn test_matches_agrees_with_apply() {
        let products = catalog();
        let filters = [
            CatalogFilter::default(),
            CatalogFilter::new("e", ""),
            CatalogFilter::new("", "jewelery"),
            CatalogFilter::new("e", "men's clothing"),
            CatalogFilter::new("JACKET", "electronics"),
        ];
        for filter in &filters {
            let via_matches: Vec<ProductId> = products
                .iter()
                .filter(|p| filter.matches(p))
                .map(|p| p.id)
                .collect();
            let via_apply: Vec<ProductId> = filter.apply(&products).iter().map(|p| p.id).collect();
            assert_eq!(via_matches, via_apply, "{:?}", filter);
        }
    }

    #[test]
    fn test_search_text_is_not_trimmed() {
        let products = catalog();
        assert!(filter_products(&products, " jacket ", "").is_empty());
    }
}
