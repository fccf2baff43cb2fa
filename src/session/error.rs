//! Error types for session operations.
//!
//! The parsing core itself has no error channel: every scanning and parsing
//! function is total and classifies rather than fails. The only session-level
//! error is a protocol misuse by the caller.

use thiserror::Error;

/// Errors that can occur when driving a [`Session`](super::Session).
#[derive(Debug, Error)]
pub enum SessionError {
    /// A change notification arrived for a document that was never opened.
    #[error("document not open: {uri}")]
    DocumentNotOpen { uri: String },
}
