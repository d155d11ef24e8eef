//! Case folding for lookups and searches.
//!
//! Folding uses Unicode default lower-casing, which does not depend on the
//! process locale. Both the stored value and the query go through the same
//! function before they are compared.

/// Fold a value for case-insensitive comparison.
pub fn fold(value: &str) -> String {
    value.to_lowercase()
}

/// Case-insensitive equality.
pub fn eq_folded(stored: &str, query: &str) -> bool {
    fold(stored) == fold(query)
}

/// Case-insensitive substring test. An empty query matches everything.
pub fn contains_folded(stored: &str, query: &str) -> bool {
    fold(stored).contains(&fold(query))
}
