//! Session orchestration tests.

use rstest::rstest;

use commlang::session::{ChangeRange, DocumentChange, EditClass, Session, classify};
use commlang::SessionError;

use crate::helpers::doc_lines;
use crate::helpers::source_fixtures::*;

const URI: &str = "file:///study/case.comm";

#[rstest]
#[case(DocumentChange::full("FOO(A=1)"), EditClass::Structural)]
#[case(DocumentChange::insertion(1, 4, "\n"), EditClass::Structural)]
#[case(DocumentChange::insertion(1, 4, "("), EditClass::Structural)]
#[case(DocumentChange::insertion(1, 4, "BAR("), EditClass::Structural)]
#[case(
    DocumentChange::ranged(
        ChangeRange { start_line: 1, start_column: 0, end_line: 2, end_column: 0 },
        ""
    ),
    EditClass::Structural
)]
#[case(DocumentChange::insertion(1, 10, "2"), EditClass::Local)]
#[case(DocumentChange::insertion(1, 10, ")"), EditClass::Local)]
#[case(
    DocumentChange::ranged(
        ChangeRange { start_line: 3, start_column: 4, end_line: 3, end_column: 7 },
        "0.5"
    ),
    EditClass::Local
)]
fn test_classification(#[case] change: DocumentChange, #[case] expected: EditClass) {
    assert_eq!(classify(&change), expected);
}

#[test]
fn test_open_query_close() {
    let mut session = Session::new();
    let lines = doc_lines(SMALL_STUDY);
    session.open_document(URI, &lines);

    assert_eq!(session.len(), 1);
    assert_eq!(session.open_documents().collect::<Vec<_>>(), [URI]);

    let registry = session.registry(URI).unwrap();
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.command_at_line(2).unwrap().name, "LIRE_MAILLAGE");

    session.close_document(URI);
    assert!(session.registry(URI).is_none());
    assert!(session.is_empty());
}

#[test]
fn test_local_change_reparses_owning_command_only() {
    let mut session = Session::new();
    let lines = doc_lines(TWO_ADJACENT_COMMANDS);
    session.open_document(URI, &lines);

    let other_before = session
        .registry(URI)
        .unwrap()
        .command_at_line(1)
        .unwrap()
        .clone();

    let edited = ["A = FOO(X=1)", "B = BAR(Y=42)"];
    let change = DocumentChange::ranged(
        ChangeRange {
            start_line: 2,
            start_column: 10,
            end_line: 2,
            end_column: 11,
        },
        "42",
    );
    session.apply_change(URI, &edited, &change).unwrap();

    let registry = session.registry(URI).unwrap();
    assert_eq!(
        registry.command_at_line(2).unwrap().parameters.get("Y").unwrap(),
        "42"
    );
    assert_eq!(*registry.command_at_line(1).unwrap(), other_before);
}

#[test]
fn test_structural_change_rebuilds() {
    let mut session = Session::new();
    session.open_document(URI, &["FOO(A=1)"]);

    // A new command line was inserted
    let edited = ["FOO(A=1)", "BAR(B=2)"];
    let change = DocumentChange::insertion(1, 8, "\nBAR(B=2)");
    session.apply_change(URI, &edited, &change).unwrap();

    let registry = session.registry(URI).unwrap();
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.command_at_line(2).unwrap().name, "BAR");
    assert_eq!(registry.document_len(), 2);
}

#[test]
fn test_whole_document_replace() {
    let mut session = Session::new();
    session.open_document(URI, &doc_lines(SMALL_STUDY));

    let replacement = doc_lines(TWO_ADJACENT_COMMANDS);
    let change = DocumentChange::full(TWO_ADJACENT_COMMANDS);
    session.apply_change(URI, &replacement, &change).unwrap();

    let registry = session.registry(URI).unwrap();
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.command_at_line(1).unwrap().name, "FOO");
}

#[test]
fn test_local_change_on_filler_line_is_noop() {
    let mut session = Session::new();
    let lines = doc_lines(SMALL_STUDY);
    session.open_document(URI, &lines);
    let before: Vec<_> = session.registry(URI).unwrap().commands().cloned().collect();

    let change = DocumentChange::insertion(4, 0, " ");
    session.apply_change(URI, &lines, &change).unwrap();

    let after: Vec<_> = session.registry(URI).unwrap().commands().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn test_change_for_unopened_document_is_an_error() {
    let mut session = Session::new();
    let change = DocumentChange::insertion(1, 0, "x");
    let err = session.apply_change(URI, &["x"], &change).unwrap_err();
    assert!(matches!(err, SessionError::DocumentNotOpen { .. }));
    assert_eq!(err.to_string(), format!("document not open: {URI}"));
}

#[test]
fn test_reopen_rebuilds_from_new_text() {
    let mut session = Session::new();
    session.open_document(URI, &["FOO(A=1)"]);
    session.open_document(URI, &doc_lines(TWO_ADJACENT_COMMANDS));

    assert_eq!(session.len(), 1);
    assert_eq!(session.registry(URI).unwrap().len(), 2);
}
