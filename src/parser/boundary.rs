//! Boundary detection: recognizing command starts on a line.
//!
//! A command start is `NAME(` optionally preceded by a binding, `ident = NAME(`,
//! anchored at the beginning of the line modulo whitespace. `NAME` follows the
//! upper-case command convention. The reserved nested-block marker is excluded
//! by exact equality: nested blocks are syntactically identical to command
//! invocations, and this single rule is what separates the two.

use smol_str::SmolStr;

use crate::base::{NESTED_BLOCK_MARKER, ident};
use crate::scanner::strip_comment;

/// A detected command start on a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandStart {
    /// The command name, e.g. `AFFE_CHAR_MECA`.
    pub name: SmolStr,
    /// The identifier the result is bound to, e.g. `CHARD` in
    /// `CHARD = AFFE_CHAR_MECA(`, if any.
    pub bound_name: Option<SmolStr>,
    /// Column (char index, relative to the comment-stripped line) of the
    /// command's opening parenthesis.
    pub paren_column: usize,
}

/// Detect a command start on `line`, or return `None`.
///
/// The line is comment-stripped first. Column indices in the result refer to
/// the stripped line, which shares its prefix with the raw line.
pub fn detect_command_start(line: &str) -> Option<CommandStart> {
    let stripped = strip_comment(line);
    let chars: Vec<char> = stripped.chars().collect();

    let mut pos = skip_whitespace(&chars, 0);
    let word_start = pos;
    let first_word = read_word(&chars, &mut pos)?;

    let after_word = skip_whitespace(&chars, pos);
    let (name, bound_name, mut pos) = if chars.get(after_word) == Some(&'=') {
        // Binding form: `ident = NAME(`
        let mut pos = skip_whitespace(&chars, after_word + 1);
        let name_start = pos;
        read_word(&chars, &mut pos)?;
        let name: String = chars[name_start..pos].iter().collect();
        let bound: String = chars[word_start..word_start + first_word].iter().collect();
        (name, Some(SmolStr::new(bound)), pos)
    } else {
        // Bare form: `NAME(`
        let name: String = chars[word_start..pos].iter().collect();
        (name, None, pos)
    };

    if !ident::is_command_name(&name) {
        return None;
    }
    pos = skip_whitespace(&chars, pos);
    if chars.get(pos) != Some(&'(') {
        return None;
    }
    if name == NESTED_BLOCK_MARKER {
        return None;
    }

    Some(CommandStart {
        name: SmolStr::new(name),
        bound_name,
        paren_column: pos,
    })
}

fn skip_whitespace(chars: &[char], mut pos: usize) -> usize {
    while pos < chars.len() && chars[pos].is_whitespace() {
        pos += 1;
    }
    pos
}

/// Read a run of word characters at `*pos`, advancing past it.
/// Returns the length of the word, or `None` if there is no word here.
fn read_word(chars: &[char], pos: &mut usize) -> Option<usize> {
    let start = *pos;
    while *pos < chars.len() && ident::is_word_char(chars[*pos]) {
        *pos += 1;
    }
    (*pos > start).then(|| *pos - start)
}
