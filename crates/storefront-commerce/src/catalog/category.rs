//! Category labels.
//!
//! Categories are free-text names assigned by the catalog (e.g. "men's clothing").
//! There is no category entity; products carry the name directly.

/// Display form of a category name: first character upper-cased, rest untouched.
pub fn category_label(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
