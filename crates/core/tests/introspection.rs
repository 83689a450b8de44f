//! Integration tests for the editor-facing registry listings.

use incar_core::introspection::{describe, keyword_alist, keywords};
use incar_core::registry;

/// Split `("a" "b" ...)` back into names.
fn parse_list(out: &str) -> Vec<&str> {
    out.trim_start_matches('(')
        .trim_end_matches(')')
        .split_whitespace()
        .map(|s| s.trim_matches('"'))
        .collect()
}

#[test]
fn keyword_list_covers_every_rule_once() {
    let binding = keywords();
    let names = parse_list(&binding);
    assert_eq!(names.len(), registry().len());
    let mut sorted = names.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted, names);
    assert!(names.contains(&"ispin"));
    assert!(names.contains(&"ldau_luj"));
}

#[test]
fn listings_exclude_helpers() {
    let binding = keywords();
    let names = parse_list(&binding);
    for helper in ["keywords", "keyword_alist", "describe", "validate", "registry"] {
        assert!(!names.contains(&helper), "{helper} leaked into the listing");
    }
}

#[test]
fn alist_has_one_cell_per_rule() {
    let out = keyword_alist();
    assert_eq!(out.matches(")(").count() + 1, registry().len());
    for rule in registry().rules() {
        let cell = format!("(\"{}\" \"", rule.name);
        assert_eq!(out.matches(&cell).count(), 1, "{}", rule.name);
    }
}

#[test]
fn alist_summaries_are_single_lines() {
    for rule in registry().rules() {
        assert!(!rule.summary().is_empty(), "{} has no summary", rule.name);
        assert!(!rule.summary().contains('\n'));
    }
}

#[test]
fn describe_is_case_insensitive() {
    assert_eq!(describe("ISIF"), describe("isif"));
    assert!(describe("isif").unwrap().contains("cell shape"));
    assert!(describe("not_a_keyword").is_none());
}
