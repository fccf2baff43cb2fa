//! Parameter extraction: top-level `key=value` pairs of a command span.
//!
//! One forward pass over the span window with a local depth counter (0 = the
//! top level of this command) and quote-aware scanning. Nested blocks are
//! skipped by depth counting without being parsed, then collapsed to a fixed
//! placeholder so result size stays bounded regardless of nesting depth.
//!
//! Never fails: for complete well-formed input this yields exactly the
//! top-level parameter set; for malformed or incomplete input, a best-effort
//! subset. A parameter still being typed when the owning command is incomplete
//! is withheld rather than presented as final.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::base::{
    NESTED_BLOCK_MARKER, NESTED_PLACEHOLDER, NESTED_SEQUENCE_PLACEHOLDER, ident,
};

/// Extract the top-level parameters of the command spanning
/// `start_line ..= zone_end` (1-based, inclusive).
///
/// The window starts just after the first `(` found in the zone text, which is
/// the command's own opening parenthesis. Bounds outside the document are
/// clamped; an empty or paren-less window yields an empty map.
pub fn extract_parameters(
    lines: &[&str],
    start_line: usize,
    zone_end: usize,
) -> IndexMap<SmolStr, String> {
    let mut params = IndexMap::new();

    if start_line == 0 || start_line > lines.len() {
        return params;
    }
    let zone_end = zone_end.min(lines.len());
    if zone_end < start_line {
        return params;
    }

    let window = lines[start_line - 1..zone_end].join("\n");
    let chars: Vec<char> = window.chars().collect();

    let Some(open) = chars.iter().position(|&c| c == '(') else {
        return params;
    };

    let mut i = open + 1;
    let mut depth = 0u32;
    let mut current: Option<SmolStr> = None;
    let mut value_start = 0usize;

    while i < chars.len() {
        let c = chars[i];

        // Quoted strings are skipped wholesale; escapes honored.
        if c == '"' || c == '\'' {
            let quote = c;
            i += 1;
            while i < chars.len() && chars[i] != quote {
                if chars[i] == '\\' {
                    i += 2;
                } else {
                    i += 1;
                }
            }
            i += 1;
            continue;
        }

        if c == '(' {
            depth += 1;
        } else if c == ')' {
            if depth == 0 {
                // The command's own closing paren: flush and stop.
                if let Some(name) = current.take() {
                    params.insert(name, clean_value(&slice(&chars, value_start, i)));
                }
                break;
            }
            depth -= 1;
        }

        // A parameter is finalized only by the next parameter head or by the
        // command's closing paren. A bare depth-0 comma does not finalize:
        // while the command is still open, the value before the cursor may be
        // mid-edit, and a half-written value must not be presented as final.
        if depth == 0 {
            if let Some((name, after)) = match_param_head(&chars, i) {
                if let Some(prev) = current.take() {
                    params.insert(prev, clean_value(&slice(&chars, value_start, i)));
                }
                current = Some(name);
                i = after;
                value_start = i;
                continue;
            }
        }

        i += 1;
    }

    // A parameter still pending here belongs to an incomplete command and is
    // deliberately not emitted.

    for value in params.values_mut() {
        if let Some(collapsed) = collapse_nested(value) {
            *value = collapsed.to_string();
        }
    }

    params
}

/// Match `IDENT \s* = \s*` starting at `pos` (leading whitespace allowed).
/// Returns the parameter name and the index just past the matched head.
fn match_param_head(chars: &[char], pos: usize) -> Option<(SmolStr, usize)> {
    let mut i = pos;
    while i < chars.len() && chars[i].is_whitespace() {
        i += 1;
    }
    let name_start = i;
    while i < chars.len() && ident::is_word_char(chars[i]) {
        i += 1;
    }
    if i == name_start {
        return None;
    }
    let name_end = i;
    while i < chars.len() && chars[i].is_whitespace() {
        i += 1;
    }
    if chars.get(i) != Some(&'=') {
        return None;
    }
    i += 1;
    while i < chars.len() && chars[i].is_whitespace() {
        i += 1;
    }
    let name: String = chars[name_start..name_end].iter().collect();
    Some((SmolStr::new(name), i))
}

fn slice(chars: &[char], start: usize, end: usize) -> String {
    if start >= end || end > chars.len() {
        return String::new();
    }
    chars[start..end].iter().collect()
}

/// Trim a raw value: surrounding whitespace, trailing commas, and one pair of
/// matching outer quotes.
fn clean_value(raw: &str) -> String {
    let v = raw.trim().trim_end_matches(',').trim_end();
    if v.len() >= 2 {
        let first = v.chars().next();
        let last = v.chars().last();
        if (first == Some('"') && last == Some('"'))
            || (first == Some('\'') && last == Some('\''))
        {
            return v[1..v.len() - 1].to_string();
        }
    }
    v.to_string()
}

/// Replace nested-block values with their opaque placeholder, if applicable.
fn collapse_nested(value: &str) -> Option<&'static str> {
    let v = value.trim();
    if v.strip_prefix(NESTED_BLOCK_MARKER)
        .is_some_and(|rest| rest.starts_with('('))
    {
        return Some(NESTED_PLACEHOLDER);
    }
    if v.starts_with('(') && contains_nested_block(v) {
        return Some(NESTED_SEQUENCE_PLACEHOLDER);
    }
    None
}

fn contains_nested_block(value: &str) -> bool {
    value
        .match_indices(NESTED_BLOCK_MARKER)
        .any(|(i, m)| value[i + m.len()..].starts_with('('))
}
