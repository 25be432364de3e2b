//! Free-text helpers for legal documents
//!
//! A contract never leaves a silent gap where a value is missing: blank text
//! is replaced with a run of underscores that can be filled in by hand.

/// Placeholder rendered in place of any blank free-text value
pub const TEXT_PLACEHOLDER: &str = "__________";

/// Returns true when the value is empty or whitespace only
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Returns the trimmed value, or [`TEXT_PLACEHOLDER`] when it is blank
pub fn or_placeholder(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        TEXT_PLACEHOLDER
    } else {
        trimmed
    }
}
