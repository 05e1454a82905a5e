//! Unit tests for name resolution

use super::*;

#[test]
fn slugify_lowercases_and_hyphenates() {
    assert_eq!(slugify("Jane Doe"), "jane-doe");
    assert_eq!(slugify("  D'Angelo   Smith Jr. "), "dangelo-smith-jr");
    assert_eq!(slugify("jane_doe"), "jane-doe");
}

#[test]
fn slugify_strips_punctuation_inside_names() {
    // Apostrophe names slug without a break on the real site.
    assert_eq!(slugify("De'Von Achane"), "devon-achane");
    assert_eq!(slugify("Ja'Marr Chase"), "jamarr-chase");
}

#[test]
fn slugify_collapses_separator_runs() {
    assert_eq!(slugify("A --- B"), "a-b");
    assert_eq!(slugify("Smith--Jones"), "smith-jones");
    assert_eq!(slugify("O'Neil-Jones"), "oneil-jones");
}

#[test]
fn slugify_trims_leading_and_trailing_separators() {
    assert_eq!(slugify("!Jane Doe!"), "jane-doe");
    assert_eq!(slugify("-Jane Doe-"), "jane-doe");
}

#[test]
fn candidates_appends_numeric_suffixes() {
    assert_eq!(candidates("Jane Doe"), vec!["jane-doe-1", "jane-doe-2"]);
}

#[test]
fn candidates_tries_presuffixed_slug_first() {
    assert_eq!(
        candidates("Jane Doe 3"),
        vec!["jane-doe-3", "jane-doe-1", "jane-doe-2"]
    );
}

#[test]
fn candidates_deduplicates_presuffixed_overlap() {
    assert_eq!(candidates("Jane Doe 1"), vec!["jane-doe-1", "jane-doe-2"]);
}

#[test]
fn candidates_never_empty() {
    for name in ["", "   ", "!!!", "Jane Doe"] {
        assert!(!candidates(name).is_empty(), "empty candidates for {name:?}");
        assert!(candidates(name).iter().all(|c| !c.is_empty()));
    }
}

#[test]
fn candidates_are_idempotent() {
    let first = candidates("Jane Doe 2");
    let second = candidates("Jane Doe 2");
    assert_eq!(first, second);
}
