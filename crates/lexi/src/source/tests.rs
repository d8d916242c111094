use crate::{fold_case, FoldedSource, Span};
use pretty_assertions::assert_eq;

#[test]
fn folds_ascii_on_construction() {
    let source = FoldedSource::new("Hello, WORLD!");
    assert_eq!(source.as_str(), "hello, world!");
    assert_eq!(source.len(), 13);
}

#[test]
fn folds_non_ascii_letters() {
    assert_eq!(fold_case("ÄÖÜ Straße"), "äöü straße");
    assert_eq!(fold_case("ὈΔΥΣΣΕΎΣ"), "ὀδυσσεύς");
}

#[test]
fn folding_may_change_byte_length() {
    // U+0130 (2 bytes) lowercases to "i" + U+0307 (3 bytes).
    let source = FoldedSource::new("\u{130}");
    assert_eq!(source.as_str(), "i\u{307}");
    assert_eq!(source.len(), 3);
}

#[test]
fn empty_source() {
    let source = FoldedSource::new("");
    assert!(source.is_empty());
    assert!(source.cursor().is_eof());
}

#[test]
fn cursor_starts_at_zero() {
    let source = FoldedSource::new("abc");
    assert_eq!(source.cursor().pos(), 0);
    assert_eq!(source.cursor().current(), Some('a'));
}

#[test]
fn cursor_at_resumes() {
    let source = FoldedSource::new("abc def");
    let cursor = source.cursor_at(4);
    assert_eq!(cursor.rest(), "def");
}

#[test]
fn slice_by_span() {
    let source = FoldedSource::new("ONE two");
    assert_eq!(source.slice(Span::new(0, 3)), "one");
    assert_eq!(source.slice(Span::new(4, 7)), "two");
}
