// Helper functions for UTF-16 string operations
use std::cmp::Ordering;

/// Lowercase the way the host's `toLowerCase` does: full Unicode mapping, no locale.
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Relational string order of the host runtime: code unit by code unit, so
/// astral characters sort by their surrogates rather than by scalar value.
pub fn utf16_cmp(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}
