//! Registry tests
//!
//! Tests for:
//! - Full document indexing (spans, zones, determinism)
//! - Zone coverage, disjointness, and point lookup
//! - Local reparse isolation
