//! Comment stripping and string/parenthesis-aware scanning primitives.
//!
//! These are the lowest-level text operations of the crate: everything above
//! (boundary detection, span resolution, parameter extraction) is built on the
//! two functions here. Both are total over arbitrary input and never panic.
//!
//! Quote state is line-local throughout: a string opened on one physical line
//! is considered closed at the end of that line. The command language is not
//! assumed to have multi-line string literals.

use crate::base::COMMENT_CHAR;

/// Result of scanning a line for parenthesis balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineScan {
    /// Parenthesis depth after the scan.
    pub depth: u32,
    /// Column (char index) of the parenthesis that brought depth to zero,
    /// if the scan closed on this line. The rest of the line is not scanned.
    pub closed_at: Option<usize>,
}

/// Return the prefix of `line` before a `#` that is not inside a quoted
/// string on that same physical line.
///
/// Backslash-escaped quotes do not close a string. If there is no comment,
/// the whole line is returned.
pub fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    let mut string_char = '\0';
    let mut prev = '\0';

    for (i, c) in line.char_indices() {
        if c == '"' || c == '\'' {
            if !in_string {
                in_string = true;
                string_char = c;
            } else if c == string_char && prev != '\\' {
                in_string = false;
            }
        } else if c == COMMENT_CHAR && !in_string {
            return &line[..i];
        }
        prev = c;
    }
    line
}

/// Walk `line` from `start_col` (char index), tracking parenthesis depth and
/// quote state.
///
/// Parentheses inside quoted strings are ignored; escaped quotes do not close
/// a string. The scan stops as soon as depth reaches zero and reports the
/// closing column. A stray `)` at depth zero is ignored rather than
/// underflowing. Quote state starts fresh: callers scanning a multi-line
/// construct carry only `depth` from line to line.
pub fn scan_line(line: &str, start_col: usize, depth: u32) -> LineScan {
    let chars: Vec<char> = line.chars().collect();
    let mut depth = depth;
    let mut in_string = false;
    let mut string_char = '\0';
    let mut col = start_col;

    while col < chars.len() {
        let c = chars[col];

        if c == '"' || c == '\'' {
            if !in_string {
                in_string = true;
                string_char = c;
            } else if c == string_char && (col == 0 || chars[col - 1] != '\\') {
                in_string = false;
            }
        }

        if !in_string {
            if c == '(' {
                depth += 1;
            } else if c == ')' && depth > 0 {
                depth -= 1;
                if depth == 0 {
                    return LineScan {
                        depth: 0,
                        closed_at: Some(col),
                    };
                }
            }
        }

        col += 1;
    }

    LineScan {
        depth,
        closed_at: None,
    }
}
