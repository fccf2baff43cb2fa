//! Identifier character predicates.
//!
//! Two conventions coexist in command files: bound result names and parameter
//! names are ordinary identifiers (Unicode word characters), while command
//! names follow the upper-case convention `[A-Z_][A-Z0-9_]*`.

/// Check if a character is part of a word (identifier).
///
/// Uses Unicode Standard Annex #31 rules for identifier characters.
#[inline]
pub fn is_word_char(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// Check if a character can start a command name (`A`-`Z` or `_`).
#[inline]
pub fn is_command_start_char(c: char) -> bool {
    c.is_ascii_uppercase() || c == '_'
}

/// Check if a character can continue a command name (`A`-`Z`, `0`-`9` or `_`).
#[inline]
pub fn is_command_continue_char(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'
}

/// Check if an identifier follows the command-name convention.
pub fn is_command_name(ident: &str) -> bool {
    let mut chars = ident.chars();
    match chars.next() {
        Some(c) if is_command_start_char(c) => chars.all(is_command_continue_char),
        _ => false,
    }
}
