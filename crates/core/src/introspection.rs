//! Registry listings for editor integration.
//!
//! Both outputs are Emacs Lisp readable: a list of keyword strings for
//! completion and an alist of `(keyword summary)` pairs for tooltips.

use crate::keywords::{registry, Registry};

/// `("algo" "atoms" ...)` over every registered keyword.
pub fn keywords() -> String {
    keywords_of(registry())
}

/// `(("algo" "summary")("atoms" "summary")...)` over every registered keyword.
pub fn keyword_alist() -> String {
    keyword_alist_of(registry())
}

/// Full documentation for `name`, if it has a rule.
pub fn describe(name: &str) -> Option<&'static str> {
    registry().get(name).map(|rule| rule.doc)
}

pub fn keywords_of(registry: &Registry) -> String {
    let names: Vec<String> = registry.names().map(lisp_string).collect();
    format!("({})", names.join(" "))
}

pub fn keyword_alist_of(registry: &Registry) -> String {
    let cells: String = registry
        .rules()
        .map(|rule| format!("({} {})", lisp_string(rule.name), lisp_string(rule.summary())))
        .collect();
    format!("({cells})")
}

/// Quote `s` as an Emacs Lisp string literal.
fn lisp_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}
