//! Span resolution: finding where a started command ends.
//!
//! From a detected start, scan forward line by line carrying parenthesis depth.
//! Three outcomes:
//! - depth returns to zero → the command is **complete** at that line/column;
//! - a later line itself starts a command → the current one is finalized
//!   **incomplete** (the user began a new command before closing the last one,
//!   a normal mid-edit state);
//! - the document ends with depth still positive → **incomplete**.
//!
//! Each physical line is comment-stripped before depth scanning, and quote
//! state does not carry across lines.

use super::boundary::{CommandStart, detect_command_start};
use crate::scanner::{scan_line, strip_comment};

/// Outcome of resolving a command span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSpan {
    /// Line of the closing parenthesis (1-based), if the command is complete.
    pub end_line: Option<usize>,
    /// Column (char index) of the closing parenthesis on `end_line`.
    pub end_column: Option<usize>,
    pub complete: bool,
}

impl ResolvedSpan {
    fn complete(end_line: usize, end_column: usize) -> Self {
        Self {
            end_line: Some(end_line),
            end_column: Some(end_column),
            complete: true,
        }
    }

    fn incomplete() -> Self {
        Self {
            end_line: None,
            end_column: None,
            complete: false,
        }
    }
}

/// Resolve the span of the command starting at `lines[start_idx]` (0-based).
///
/// `start` must be the boundary detection result for that line; scanning
/// begins just after its opening parenthesis with depth 1.
pub fn resolve_span(lines: &[&str], start_idx: usize, start: &CommandStart) -> ResolvedSpan {
    let mut depth = 1u32;
    let mut idx = start_idx;

    if idx >= lines.len() {
        return ResolvedSpan::incomplete();
    }

    // Remainder of the start line, past the opening paren.
    let stripped = strip_comment(lines[idx]);
    let scan = scan_line(stripped, start.paren_column + 1, depth);
    if let Some(col) = scan.closed_at {
        return ResolvedSpan::complete(idx + 1, col);
    }
    depth = scan.depth;
    idx += 1;

    while idx < lines.len() {
        // A new command start finalizes this one before any depth scanning.
        if detect_command_start(lines[idx]).is_some() {
            return ResolvedSpan::incomplete();
        }

        let stripped = strip_comment(lines[idx]);
        let scan = scan_line(stripped, 0, depth);
        if let Some(col) = scan.closed_at {
            return ResolvedSpan::complete(idx + 1, col);
        }
        depth = scan.depth;
        idx += 1;
    }

    ResolvedSpan::incomplete()
}
