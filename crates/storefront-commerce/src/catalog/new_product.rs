//! Add-product form input and validation.
//!
//! Nothing is ever submitted upstream; the form only checks its fields and the
//! view pretends to send it.

use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

const TITLE_MIN: usize = 3;
const TITLE_MAX: usize = 100;
const DESCRIPTION_MIN: usize = 10;
const DESCRIPTION_MAX: usize = 500;
const PRICE_MIN: f64 = 0.01;
const PRICE_MAX: f64 = 10_000.0;

/// Raw add-product form input, as typed by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    pub title: String,
    /// Price as entered; parsed during validation.
    pub price: String,
    pub description: String,
    pub category: String,
    pub image: String,
}

/// A form that passed validation, with its price parsed.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductDraft {
    pub title: String,
    pub price: Money,
    pub description: String,
    pub category: String,
    pub image: String,
}

/// A validation message attached to one form field.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// All field errors of one validation pass, in form order.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// The message for a field, if it failed.
    pub fn for_field(&self, field: &str) -> Option<&'static str> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.message)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    fn push(&mut self, field: &'static str, message: &'static str) {
        self.errors.push(FieldError { field, message });
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl NewProduct {
    /// Validate every field, reporting the first failing rule of each.
    pub fn validate(&self) -> Result<ProductDraft, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if let Some(msg) = check_length(
            &self.title,
            TITLE_MIN,
            TITLE_MAX,
            [
                "Title is required",
                "Title must be at least 3 characters",
                "Title must be less than 100 characters",
            ],
        ) {
            errors.push("title", msg);
        }

        let price = match parse_price(&self.price) {
            Ok(price) => Some(price),
            Err(msg) => {
                errors.push("price", msg);
                None
            }
        };

        if let Some(msg) = check_length(
            &self.description,
            DESCRIPTION_MIN,
            DESCRIPTION_MAX,
            [
                "Description is required",
                "Description must be at least 10 characters",
                "Description must be less than 500 characters",
            ],
        ) {
            errors.push("description", msg);
        }

        if self.category.is_empty() {
            errors.push("category", "Category is required");
        }

        if self.image.is_empty() {
            errors.push("image", "Image URL is required");
        } else if url::Url::parse(&self.image).is_err() {
            errors.push("image", "Please enter a valid URL");
        }

        match price {
            Some(price) if errors.is_empty() => Ok(ProductDraft {
                title: self.title.clone(),
                price,
                description: self.description.clone(),
                category: self.category.clone(),
                image: self.image.clone(),
            }),
            _ => Err(errors),
        }
    }
}

/// `messages` is `[required, too short, too long]`.
fn check_length(
    value: &str,
    min: usize,
    max: usize,
    messages: [&'static str; 3],
) -> Option<&'static str> {
    let len = value.chars().count();
    if len == 0 {
        Some(messages[0])
    } else if len < min {
        Some(messages[1])
    } else if len > max {
        Some(messages[2])
    } else {
        None
    }
}

fn parse_price(raw: &str) -> Result<Money, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Price is required");
    }
    let value: f64 = raw.parse().map_err(|_| "Price must be a number")?;
    if !value.is_finite() {
        return Err("Price must be a number");
    }
    if value < PRICE_MIN {
        return Err("Price must be greater than 0");
    }
    if value > PRICE_MAX {
        return Err("Price must be less than $10,000");
    }
    Ok(Money::from_decimal(value))
}
