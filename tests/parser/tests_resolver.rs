//! Span resolver tests: where a started command ends.

use commlang::parser::{detect_command_start, resolve_span};

use crate::helpers::doc_lines;
use crate::helpers::source_fixtures::*;

fn resolve(lines: &[&str], start_idx: usize) -> commlang::parser::ResolvedSpan {
    let start = detect_command_start(lines[start_idx]).expect("fixture line starts a command");
    resolve_span(lines, start_idx, &start)
}

#[test]
fn test_single_line_complete() {
    let lines = ["FOO(A=1)"];
    let resolved = resolve(&lines, 0);
    assert!(resolved.complete);
    assert_eq!(resolved.end_line, Some(1));
    assert_eq!(resolved.end_column, Some(7));
}

#[test]
fn test_multi_line_complete() {
    let lines = doc_lines(SMALL_STUDY);
    let resolved = resolve(&lines, 1);
    assert!(resolved.complete);
    assert_eq!(resolved.end_line, Some(3));

    let resolved = resolve(&lines, 4);
    assert!(resolved.complete);
    assert_eq!(resolved.end_line, Some(8));
}

#[test]
fn test_new_command_finalizes_incomplete() {
    let lines = doc_lines(INTERRUPTED_COMMAND);
    let resolved = resolve(&lines, 0);
    assert!(!resolved.complete);
    assert_eq!(resolved.end_line, None);
    assert_eq!(resolved.end_column, None);
}

#[test]
fn test_unclosed_at_document_end() {
    let lines = doc_lines(UNCLOSED_AT_EOF);
    let resolved = resolve(&lines, 0);
    assert!(!resolved.complete);
    assert_eq!(resolved.end_line, None);
}

#[test]
fn test_paren_in_comment_ignored() {
    let lines = ["FOO(A=1 # )", ")"];
    let resolved = resolve(&lines, 0);
    assert!(resolved.complete);
    assert_eq!(resolved.end_line, Some(2));
    assert_eq!(resolved.end_column, Some(0));
}

#[test]
fn test_paren_in_string_ignored() {
    let lines = ["FOO(A='x)y',", "    B=2)"];
    let resolved = resolve(&lines, 0);
    assert!(resolved.complete);
    assert_eq!(resolved.end_line, Some(2));
    assert_eq!(resolved.end_column, Some(7));
}

#[test]
fn test_nested_blocks_span_lines() {
    let lines = [
        "CH = AFFE_CHAR_MECA(DDL_IMPO=_F(GROUP_MA='BASE',",
        "                                DX=0.0),",
        "                    )",
    ];
    let resolved = resolve(&lines, 0);
    assert!(resolved.complete);
    assert_eq!(resolved.end_line, Some(3));
    assert_eq!(resolved.end_column, Some(20));
}
