//! Custom Test Assertions
//!
//! Provides assertion helpers for assembled documents that give more
//! meaningful failure messages than searching the blocks by hand.

use domain_lease::{ClauseBlock, ValidationResult};

/// Finds the block whose title contains the given heading
pub fn find_clause<'a>(blocks: &'a [ClauseBlock], heading: &str) -> Option<&'a ClauseBlock> {
    blocks.iter().find(|b| b.title.contains(heading))
}

/// Returns the block whose title contains the heading
///
/// # Panics
///
/// Panics if no block matches, listing the titles that were present
pub fn expect_clause<'a>(blocks: &'a [ClauseBlock], heading: &str) -> &'a ClauseBlock {
    find_clause(blocks, heading).unwrap_or_else(|| {
        panic!(
            "No block titled '{}'; titles were: {:?}",
            heading,
            titles(blocks)
        )
    })
}

/// Titles of every block, in order
pub fn titles(blocks: &[ClauseBlock]) -> Vec<&str> {
    blocks.iter().map(|b| b.title.as_str()).collect()
}

/// Asserts that the block titled with `heading` contains `needle`
pub fn assert_body_contains(blocks: &[ClauseBlock], heading: &str, needle: &str) {
    let block = expect_clause(blocks, heading);
    assert!(
        block.body.contains(needle),
        "Block '{}' does not contain '{}'. Body:\n{}",
        block.title,
        needle,
        block.body
    );
}

/// Asserts that the block titled with `heading` does not contain `needle`
pub fn assert_body_lacks(blocks: &[ClauseBlock], heading: &str, needle: &str) {
    let block = expect_clause(blocks, heading);
    assert!(
        !block.body.contains(needle),
        "Block '{}' unexpectedly contains '{}'",
        block.title,
        needle
    );
}

/// Asserts the exact title of a clause, e.g. `DÉCIMA.- JURISDICCIÓN.`
pub fn assert_clause_title(blocks: &[ClauseBlock], heading: &str, expected: &str) {
    let block = expect_clause(blocks, heading);
    assert_eq!(block.title, expected, "Unexpected title for '{}'", heading);
}

/// Asserts that validation passed, listing the errors otherwise
pub fn assert_valid(result: &ValidationResult) {
    assert!(
        result.is_valid,
        "Expected valid contract, got errors: {:?}",
        result.errors
    );
}

/// Asserts that validation reported `message` on `field`
pub fn assert_field_error(result: &ValidationResult, field: &str, message: &str) {
    assert_eq!(
        result.error_for(field),
        Some(message),
        "Unexpected error for '{}'; all errors: {:?}",
        field,
        result.errors
    );
}
