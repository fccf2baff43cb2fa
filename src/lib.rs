//! # commlang-base
//!
//! Core library for incremental structural analysis of simulation command
//! files: an error-tolerant registry of command spans that stays
//! approximately correct while a document is typed character by character,
//! backing completion, hover, and signature help.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! session   → edit orchestration, per-document registries, catalog seam
//!   ↓
//! registry  → CommandSpan, ZoneIndex, point queries
//!   ↓
//! parser    → boundary detection, span resolution, parameter extraction
//!   ↓
//! scanner   → comment stripping, balanced paren/quote scanning
//!   ↓
//! base      → primitives (constants, identifier predicates)
//! ```
//!
//! ## Usage
//!
//! ```
//! use commlang::session::{DocumentChange, Session};
//!
//! let mut session = Session::new();
//! session.open_document("file:///case.comm", &["CH = AFFE_CHAR_MECA(MODELE=MO)"]);
//!
//! let registry = session.registry("file:///case.comm").unwrap();
//! let span = registry.command_at_line(1).unwrap();
//! assert_eq!(span.name, "AFFE_CHAR_MECA");
//! assert_eq!(span.parameters.get("MODELE").unwrap(), "MO");
//! ```

// ============================================================================
// MODULES (dependency order: base → scanner → parser → registry → session)
// ============================================================================

/// Foundation: domain constants, identifier predicates
pub mod base;

/// Scanner: comment stripping, paren/quote-aware line scanning
pub mod scanner;

/// Parser: boundary detection, span resolution, parameter extraction
pub mod parser;

/// Registry: command spans, zone index, point queries
pub mod registry;

/// Session: edit classification and orchestration, catalog seam
pub mod session;

// Re-export foundation types
pub use base::{NESTED_BLOCK_MARKER, NESTED_PLACEHOLDER, NESTED_SEQUENCE_PLACEHOLDER};
pub use registry::{CommandKey, CommandRegistry, CommandSpan, Zone, ZoneIndex};
pub use session::{
    ChangeRange, CommandCatalog, DocumentChange, EditClass, Session, SessionError,
};
