//! Product types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Aggregate customer rating.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Rating {
    /// Average rating, 0 to 5.
    pub rate: f64,
    /// Number of reviews.
    pub count: u32,
}

impl Rating {
    /// Number of whole stars to fill when rendering the rate.
    pub fn filled_stars(&self) -> usize {
        self.rate.floor().clamp(0.0, 5.0) as usize
    }
}

/// A product in the catalog.
///
/// Field names match the catalog API's JSON. Products are immutable once fetched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Externally assigned product identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Unit price.
    pub price: Money,
    /// Full description.
    pub description: String,
    /// Free-text category label.
    pub category: String,
    /// Image URL.
    pub image: String,
    /// Customer rating.
    #[serde(default)]
    pub rating: Rating,
}

impl Product {
    /// Check whether the title contains `needle`, ignoring case.
    ///
    /// An empty needle matches everything.
    pub fn title_contains(&self, needle: &str) -> bool {
        needle.is_empty() || self.title.to_lowercase().contains(&needle.to_lowercase())
    }

    /// Check whether the product carries exactly this category label.
    pub fn in_category(&self, category: &str) -> bool {
        self.category == category
    }
}
