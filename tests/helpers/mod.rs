//! Shared helpers for integration tests.

pub mod source_fixtures;

/// Split a document into the line slices the crate's APIs take.
pub fn doc_lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}
