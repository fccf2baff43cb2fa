//! The injected command catalog capability.
//!
//! The catalog — command names and their parameter schemas — lives outside
//! this crate. Downstream feature providers (completion, hover, signature
//! help) receive it through this read-only trait instead of a global
//! singleton, so the core stays testable without the catalog present. Nothing
//! in this crate calls it.

use indexmap::IndexMap;
use smol_str::SmolStr;

/// Ordered parameter schema of one command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSchema {
    /// Parameters in declaration order.
    pub parameters: Vec<ParameterSpec>,
}

/// Schema of one keyword parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
    pub name: SmolStr,
    /// Human-readable type description, e.g. `R` or `TXM`.
    pub type_hint: String,
    /// Sub-parameter names when the value is a nested block.
    pub nested_children: Vec<SmolStr>,
    /// Raw text of the condition under which this parameter is enabled, if
    /// any. Evaluated downstream against the extractor's flat, ordered
    /// name→text mapping.
    pub enabling_condition: Option<String>,
}

/// Read-only access to the command catalog.
pub trait CommandCatalog {
    /// All known command names, in catalog order.
    fn command_names(&self) -> Vec<SmolStr>;

    /// The parameter schema of `name`, if the catalog knows it.
    fn parameter_schema(&self, name: &str) -> Option<&ParameterSchema>;
}

/// Trivial in-memory catalog, for tests and for embedding without the real
/// catalog service.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    schemas: IndexMap<SmolStr, ParameterSchema>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command with its schema, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<SmolStr>, schema: ParameterSchema) {
        self.schemas.insert(name.into(), schema);
    }
}

impl CommandCatalog for StaticCatalog {
    fn command_names(&self) -> Vec<SmolStr> {
        self.schemas.keys().cloned().collect()
    }

    fn parameter_schema(&self, name: &str) -> Option<&ParameterSchema> {
        self.schemas.get(name)
    }
}
