//! Per-document command registry.
//!
//! The registry keeps an always-available, approximately-correct model of
//! where each command starts and ends while the document is being edited,
//! including while the text is syntactically invalid. It owns:
//! - [`CommandSpan`] — one detected command with its parameters;
//! - [`ZoneIndex`] — sorted, gap-filled line ranges for O(log n) point lookup;
//! - [`CommandRegistry`] — the two above plus full-rebuild and local-reparse
//!   operations.

mod registry;
mod span;
mod zones;

pub use registry::CommandRegistry;
pub use span::{CommandKey, CommandSpan};
pub use zones::{Zone, ZoneIndex};
