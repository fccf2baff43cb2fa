//! Session tests
//!
//! Tests for:
//! - Edit classification (structural vs local)
//! - Open/change/close orchestration
//! - The injected catalog capability

pub mod tests_session;
