//! Change notifications and their structural/local classification.

/// A line/column range in a document (1-based lines, char-index columns).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRange {
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

/// One change notification from the document layer.
///
/// `range: None` means "replace the whole document".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentChange {
    pub range: Option<ChangeRange>,
    /// Replacement text; empty for a pure deletion.
    pub text: String,
}

impl DocumentChange {
    /// A ranged edit replacing `range` with `text`.
    pub fn ranged(range: ChangeRange, text: impl Into<String>) -> Self {
        Self {
            range: Some(range),
            text: text.into(),
        }
    }

    /// A single-position insertion at `line:column`.
    pub fn insertion(line: usize, column: usize, text: impl Into<String>) -> Self {
        Self {
            range: Some(ChangeRange {
                start_line: line,
                start_column: column,
                end_line: line,
                end_column: column,
            }),
            text: text.into(),
        }
    }

    /// A whole-document replacement.
    pub fn full(text: impl Into<String>) -> Self {
        Self {
            range: None,
            text: text.into(),
        }
    }
}

/// How an edit is applied to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditClass {
    /// Likely to alter command boundaries: full rebuild.
    Structural,
    /// Confined to one line of one command's zone: parameter reparse only.
    Local,
}

/// Classify a change notification.
///
/// Structural: whole-document replacement, a range spanning multiple lines
/// (which removes a line break), replacement text containing a line break, or
/// replacement text inserting a literal `(`. Everything else is local.
pub fn classify(change: &DocumentChange) -> EditClass {
    let Some(range) = &change.range else {
        return EditClass::Structural;
    };
    if range.end_line > range.start_line
        || change.text.contains('\n')
        || change.text.contains('(')
    {
        EditClass::Structural
    } else {
        EditClass::Local
    }
}
