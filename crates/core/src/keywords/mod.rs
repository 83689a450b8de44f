//! Keyword rule registry and dispatch.
//!
//! Every INCAR keyword the layer understands has exactly one [`Rule`]. The
//! table is assembled once from the per-topic modules into an immutable,
//! process-wide [`Registry`]. Dispatch looks a name up, runs its check
//! against a [`KeywordContext`], and fails fast on the first violation.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use crate::config::{UnknownKeywordPolicy, ValidatorConfig};
use crate::context::KeywordContext;
use crate::error::{KeywordError, KeywordResult};
use crate::types::Value;

pub(crate) mod checks;
mod corrections;
mod electronic;
mod ionic;
mod kpoints;
mod output;

/// Validates one value. Returns `Ok(())` or the violation.
pub type CheckFn = fn(&dyn KeywordContext, &Value) -> KeywordResult<()>;

/// Produces a non-fatal advisory for a value that already passed its check.
pub type AdviseFn = fn(&dyn KeywordContext, &Value) -> Option<String>;

/// A keyword and the rule that guards it.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    /// First line is the short summary shown by editor tooltips.
    pub doc: &'static str,
    pub check: CheckFn,
    pub advise: Option<AdviseFn>,
}

impl Rule {
    pub const fn new(name: &'static str, doc: &'static str, check: CheckFn) -> Self {
        Self {
            name,
            doc,
            check,
            advise: None,
        }
    }

    pub const fn with_advice(self, advise: AdviseFn) -> Self {
        Self {
            advise: Some(advise),
            ..self
        }
    }

    pub fn summary(&self) -> &'static str {
        self.doc.lines().next().unwrap_or("").trim()
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("summary", &self.summary())
            .field("advises", &self.advise.is_some())
            .finish()
    }
}

/// Outcome of a successful dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub keyword: String,
    /// `false` when no rule exists and the value was accepted unchecked.
    pub checked: bool,
    pub advisories: Vec<String>,
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Name → rule table, iterated in lexical order.
#[derive(Debug)]
pub struct Registry {
    rules: BTreeMap<&'static str, Rule>,
}

static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::standard);

/// The process-wide rule table.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

impl Registry {
    fn standard() -> Self {
        Self::from_groups(&[
            corrections::RULES,
            electronic::RULES,
            ionic::RULES,
            kpoints::RULES,
            output::RULES,
        ])
    }

    fn from_groups(groups: &[&[Rule]]) -> Self {
        let mut rules = BTreeMap::new();
        for rule in groups.iter().flat_map(|g| g.iter()) {
            if rules.insert(rule.name, *rule).is_some() {
                tracing::warn!(keyword = rule.name, "Duplicate keyword rule replaced");
            }
        }
        Self { rules }
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name.to_ascii_lowercase().as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.keys().copied()
    }

    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.values()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Validate `value` for keyword `name` against `ctx`.
    pub fn validate(
        &self,
        ctx: &dyn KeywordContext,
        name: &str,
        value: &Value,
        config: &ValidatorConfig,
    ) -> KeywordResult<Validation> {
        let keyword = name.to_ascii_lowercase();

        let Some(rule) = self.get(&keyword) else {
            return match config.unknown_keywords {
                UnknownKeywordPolicy::Accept => {
                    tracing::debug!(keyword = %keyword, "No rule for keyword, accepting unchecked");
                    Ok(Validation {
                        keyword,
                        checked: false,
                        advisories: Vec::new(),
                    })
                }
                UnknownKeywordPolicy::Reject => Err(KeywordError::UnknownKeyword(keyword)),
            };
        };

        (rule.check)(ctx, value)?;

        let mut advisories = Vec::new();
        if let Some(message) = rule.advise.and_then(|advise| advise(ctx, value)) {
            if config.advisories_as_errors {
                return Err(KeywordError::Advisory {
                    keyword: rule.name,
                    message,
                });
            }
            tracing::warn!(keyword = rule.name, %value, "{message}");
            advisories.push(message);
        }

        tracing::debug!(keyword = rule.name, %value, "Keyword accepted");
        Ok(Validation {
            keyword,
            checked: true,
            advisories,
        })
    }
}

/// Validate against the process-wide registry with default settings.
pub fn validate(ctx: &dyn KeywordContext, name: &str, value: &Value) -> KeywordResult<Validation> {
    registry().validate(ctx, name, value, &ValidatorConfig::default())
}

/// Validate against the process-wide registry with explicit settings.
pub fn validate_with(
    ctx: &dyn KeywordContext,
    name: &str,
    value: &Value,
    config: &ValidatorConfig,
) -> KeywordResult<Validation> {
    registry().validate(ctx, name, value, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_groups() -> [&'static [Rule]; 5] {
        [
            corrections::RULES,
            electronic::RULES,
            ionic::RULES,
            kpoints::RULES,
            output::RULES,
        ]
    }

    #[test]
    fn every_rule_name_is_unique() {
        let total: usize = all_groups().iter().map(|g| g.len()).sum();
        assert_eq!(registry().len(), total);
    }

    #[test]
    fn names_are_lowercase_and_sorted() {
        let names: Vec<_> = registry().names().collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert!(names.iter().all(|n| *n == n.to_ascii_lowercase()));
    }

    #[test]
    fn every_rule_has_a_summary() {
        for rule in registry().rules() {
            assert!(!rule.summary().is_empty(), "{} has no summary", rule.name);
        }
    }

    #[test]
    fn lookup_ignores_case() {
        assert!(registry().contains("ENCUT"));
        assert!(registry().contains("Ldau_Luj"));
        assert!(!registry().contains("keywords"));
    }

    #[test]
    fn summary_is_first_doc_line() {
        let rule = registry().get("sigma").unwrap();
        assert!(!rule.summary().contains('\n'));
        assert!(rule.doc.starts_with(rule.summary()));
    }
}
