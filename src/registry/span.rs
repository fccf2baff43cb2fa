//! A detected command invocation and its identity key.

use std::fmt;

use indexmap::IndexMap;
use smol_str::SmolStr;

/// Identity of a command within a document: `(name, start_line)`.
///
/// Rendered as `NAME:line`, e.g. `AFFE_CHAR_MECA:12`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandKey {
    pub name: SmolStr,
    pub start_line: usize,
}

impl fmt::Display for CommandKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.start_line)
    }
}

/// A top-level command invocation detected in a document.
///
/// Lines are 1-based. Invariants: `zone_end_line >= start_line`, and for
/// complete spans `zone_end_line == end_line`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpan {
    /// Command name, e.g. `AFFE_CHAR_MECA`.
    pub name: SmolStr,
    /// Identifier the result is bound to, if any.
    pub bound_name: Option<SmolStr>,
    /// Line of the command start.
    pub start_line: usize,
    /// Line of the closing parenthesis; `None` while incomplete.
    pub end_line: Option<usize>,
    /// Column (char index) of the closing parenthesis on `end_line`.
    pub end_column: Option<usize>,
    /// Last line this command owns: `end_line` when complete, otherwise the
    /// line before the next detected command start or the document end.
    pub zone_end_line: usize,
    pub complete: bool,
    /// Top-level parameters in source order; nested-block values are replaced
    /// by an opaque placeholder.
    pub parameters: IndexMap<SmolStr, String>,
}

impl CommandSpan {
    /// The unique key of this command within its document.
    pub fn key(&self) -> CommandKey {
        CommandKey {
            name: self.name.clone(),
            start_line: self.start_line,
        }
    }

    /// Check whether a line belongs to this command's zone.
    pub fn contains_line(&self, line: usize) -> bool {
        self.start_line <= line && line <= self.zone_end_line
    }

    /// Check whether a position sits to the right of the closing parenthesis
    /// on the end line.
    ///
    /// Feature providers use this to suppress in-command assistance just after
    /// the `)`. Always false for incomplete spans: there is no closing
    /// parenthesis to be past.
    pub fn position_past_end(&self, line: usize, column: usize) -> bool {
        match (self.end_line, self.end_column) {
            (Some(end_line), Some(end_column)) => line == end_line && column > end_column,
            _ => false,
        }
    }

    /// Render this span in the exposed `"start-end"` / `"start"` form
    /// (open-ended for incomplete spans).
    pub fn range_display(&self) -> String {
        match self.end_line {
            Some(end_line) if self.complete => format!("{}-{}", self.start_line, end_line),
            _ => self.start_line.to_string(),
        }
    }
}
