use super::*;

#[test]
fn loading_document_is_not_parsed() {
    assert!(!is_parsed("loading"));
}

#[test]
fn interactive_and_complete_documents_are_parsed() {
    assert!(is_parsed("interactive"));
    assert!(is_parsed("complete"));
}

#[test]
fn unknown_ready_state_counts_as_parsed() {
    assert!(is_parsed(""));
    assert!(is_parsed("prerendered"));
}
