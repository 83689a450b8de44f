//! Shared kind, range and membership checks used by the rule modules.
//!
//! Each helper returns the unwrapped payload on success so rules can chain
//! a kind check into a domain check with `?`.

use std::collections::BTreeMap;

use crate::error::{KeywordError, KeywordResult};
use crate::types::Value;

pub(crate) fn type_error(keyword: &'static str, expected: &'static str, value: &Value) -> KeywordError {
    KeywordError::Type {
        keyword,
        expected,
        found: value.kind(),
    }
}

pub(crate) fn domain_error(keyword: &'static str, message: impl Into<String>) -> KeywordError {
    KeywordError::Domain {
        keyword,
        message: message.into(),
    }
}

pub(crate) fn structure_error(keyword: &'static str, message: impl Into<String>) -> KeywordError {
    KeywordError::Structure {
        keyword,
        message: message.into(),
    }
}

pub(crate) fn cross_field_error(keyword: &'static str, message: impl Into<String>) -> KeywordError {
    KeywordError::CrossField {
        keyword,
        message: message.into(),
    }
}

// ---------------------------------------------------------------------------
// Kind checks
// ---------------------------------------------------------------------------

pub(crate) fn expect_int(keyword: &'static str, value: &Value) -> KeywordResult<i64> {
    value
        .as_int()
        .ok_or_else(|| type_error(keyword, "an integer", value))
}

/// A float proper. Integers are rejected.
pub(crate) fn expect_float(keyword: &'static str, value: &Value) -> KeywordResult<f64> {
    match value {
        Value::Float(x) => Ok(*x),
        _ => Err(type_error(keyword, "a float", value)),
    }
}

/// An integer or a float.
pub(crate) fn expect_number(keyword: &'static str, value: &Value) -> KeywordResult<f64> {
    value
        .as_number()
        .ok_or_else(|| type_error(keyword, "a number", value))
}

pub(crate) fn expect_bool(keyword: &'static str, value: &Value) -> KeywordResult<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        _ => Err(type_error(keyword, "a boolean", value)),
    }
}

pub(crate) fn expect_text<'v>(keyword: &'static str, value: &'v Value) -> KeywordResult<&'v str> {
    value
        .as_str()
        .ok_or_else(|| type_error(keyword, "text", value))
}

pub(crate) fn expect_list<'v>(keyword: &'static str, value: &'v Value) -> KeywordResult<&'v [Value]> {
    value
        .as_list()
        .ok_or_else(|| type_error(keyword, "a list", value))
}

pub(crate) fn expect_map<'v>(
    keyword: &'static str,
    value: &'v Value,
) -> KeywordResult<&'v BTreeMap<String, Value>> {
    value
        .as_map()
        .ok_or_else(|| type_error(keyword, "a mapping", value))
}

// ---------------------------------------------------------------------------
// Domain checks
// ---------------------------------------------------------------------------

pub(crate) fn int_one_of(keyword: &'static str, value: i64, allowed: &[i64]) -> KeywordResult<()> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(domain_error(
            keyword,
            format!("{value} is not one of {allowed:?}"),
        ))
    }
}

/// Membership in `allowed`, optionally ignoring ASCII case.
pub(crate) fn text_one_of(
    keyword: &'static str,
    value: &str,
    allowed: &[&str],
    ignore_case: bool,
) -> KeywordResult<()> {
    let found = if ignore_case {
        allowed.iter().any(|a| a.eq_ignore_ascii_case(value))
    } else {
        allowed.contains(&value)
    };
    if found {
        Ok(())
    } else {
        Err(domain_error(
            keyword,
            format!("'{value}' is not one of {allowed:?}"),
        ))
    }
}

pub(crate) fn positive(keyword: &'static str, value: f64) -> KeywordResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(domain_error(
            keyword,
            format!("must be greater than zero, got {value}"),
        ))
    }
}
