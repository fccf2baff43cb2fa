//! Domain constants for the command language.

/// The reserved keyword introducing a nested structured block (a parenthesized
/// set of keyword sub-parameters inside a command).
///
/// Syntactically a nested block looks exactly like a command invocation; this
/// marker is what the boundary detector excludes, by exact equality, when
/// deciding whether a line starts a new top-level command.
pub const NESTED_BLOCK_MARKER: &str = "_F";

/// Opaque replacement for a parameter value that is a nested block.
///
/// Keeps extracted parameter sets bounded regardless of nesting depth.
pub const NESTED_PLACEHOLDER: &str = "_F(...)";

/// Opaque replacement for a parameter value that is a sequence wrapping one or
/// more nested blocks, e.g. `(_F(...), _F(...))`.
pub const NESTED_SEQUENCE_PLACEHOLDER: &str = "(_F(...), ...)";

/// Character starting a line comment (outside of quoted strings).
pub const COMMENT_CHAR: char = '#';
