//! Foundation types for the commlang toolchain.
//!
//! This module provides the primitives used throughout the crate:
//! - Domain constants (reserved nested-block marker, placeholders)
//! - Identifier character predicates
//!
//! This module has NO dependencies on other commlang modules.

pub mod constants;
pub mod ident;

pub use constants::{
    COMMENT_CHAR, NESTED_BLOCK_MARKER, NESTED_PLACEHOLDER, NESTED_SEQUENCE_PLACEHOLDER,
};
pub use ident::{is_command_continue_char, is_command_name, is_command_start_char, is_word_char};
