//! Session layer: edit orchestration over open documents.
//!
//! A [`Session`] is an explicit context object owning one [`CommandRegistry`]
//! per open document (no hidden global state). Change notifications are
//! classified as structural (full rebuild) or local (parameter reparse of the
//! owning command only) and applied one at a time to completion.
//!
//! The [`catalog`] submodule holds the injected read-only catalog capability
//! consumed by downstream feature providers; the core itself never calls it.

pub mod catalog;
mod change;
mod error;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use tracing::{debug, trace};

use crate::registry::CommandRegistry;

pub use catalog::{CommandCatalog, ParameterSchema, ParameterSpec, StaticCatalog};
pub use change::{ChangeRange, DocumentChange, EditClass, classify};
pub use error::SessionError;

/// Session-scoped context owning the `document URI -> registry` map.
///
/// Created when an editing session starts and discarded when it ends. Each
/// registry is mutated only here, in response to that document's sequential
/// edit notifications; reads between edits always see a fully-built state.
#[derive(Debug, Default)]
pub struct Session {
    registries: FxHashMap<SmolStr, CommandRegistry>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry for a newly opened document.
    ///
    /// Reopening an already-open URI rebuilds from the given text.
    pub fn open_document(&mut self, uri: &str, lines: &[&str]) {
        let mut registry = CommandRegistry::new();
        registry.initialize(lines);
        debug!(uri, commands = registry.len(), "document opened");
        self.registries.insert(SmolStr::new(uri), registry);
    }

    /// Drop the registry of a closed document.
    pub fn close_document(&mut self, uri: &str) {
        if self.registries.remove(uri).is_some() {
            debug!(uri, "document closed");
        }
    }

    /// Apply one change notification to completion.
    ///
    /// `lines` is the document's full current text, after the change.
    /// Structural edits rebuild the whole registry; local edits reparse the
    /// parameters of the owning command only, and are a no-op on filler lines.
    pub fn apply_change(
        &mut self,
        uri: &str,
        lines: &[&str],
        change: &DocumentChange,
    ) -> Result<(), SessionError> {
        let registry = self
            .registries
            .get_mut(uri)
            .ok_or_else(|| SessionError::DocumentNotOpen {
                uri: uri.to_string(),
            })?;

        match classify(change) {
            EditClass::Structural => {
                trace!(uri, "structural edit, full rebuild");
                registry.initialize(lines);
            }
            EditClass::Local => {
                // classify() returns Local only when a range is present.
                let line = change.range.as_ref().map_or(1, |r| r.start_line);
                trace!(uri, line, "local edit");
                registry.apply_local_edit(lines, line);
            }
        }
        Ok(())
    }

    /// Read access to an open document's registry, for feature providers.
    pub fn registry(&self, uri: &str) -> Option<&CommandRegistry> {
        self.registries.get(uri)
    }

    /// URIs of the currently open documents, in no particular order.
    pub fn open_documents(&self) -> impl Iterator<Item = &str> {
        self.registries.keys().map(|uri| uri.as_str())
    }

    pub fn len(&self) -> usize {
        self.registries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registries.is_empty()
    }
}
