//! JSON input decks checked by `incar check`.
//!
//! A deck names a structure (or NEB images), the keyword settings and
//! optional valence overrides:
//!
//! ```json
//! {
//!   "atoms": { "atoms": [{ "symbol": "Fe" }, { "symbol": "O" }] },
//!   "parameters": { "encut": 520.0, "ispin": 2, "magmom": [4.0, 0.0] },
//!   "valence": { "Fe": 8.0 }
//! }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use incar_core::{Atoms, Calculator, KeywordError, ValidatorConfig, Validation, Value};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Keyword(#[from] KeywordError),
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputDeck {
    #[serde(default)]
    pub atoms: Atoms,
    #[serde(default)]
    pub parameters: serde_json::Map<String, serde_json::Value>,
    /// NEB images, end points included. Replaces `atoms` when present.
    #[serde(default)]
    pub neb: Option<Vec<Atoms>>,
    #[serde(default)]
    pub valence: BTreeMap<String, f64>,
}

impl InputDeck {
    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let text = std::fs::read_to_string(path).map_err(|source| DeckError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| DeckError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// A calculator over the deck's structure with no parameters set yet.
    pub fn calculator(&self, config: ValidatorConfig) -> Calculator {
        let calc = match &self.neb {
            Some(images) => Calculator::for_neb(images.clone()),
            None => Calculator::new(self.atoms.clone()),
        };
        self.valence
            .iter()
            .fold(calc.with_config(config), |calc, (symbol, zval)| {
                calc.with_valence(symbol.as_str(), *zval)
            })
    }

    /// Apply every parameter at once and report the outcome.
    pub fn check(&self, config: ValidatorConfig) -> Result<Report, KeywordError> {
        let mut calc = self.calculator(config);
        let pairs = self
            .parameters
            .iter()
            .map(|(keyword, value)| (keyword.as_str(), Value::from(value.clone())));
        let validations = calc.set_many(pairs)?;
        tracing::info!(
            keywords = validations.len(),
            natoms = self.natoms(),
            "Deck accepted",
        );
        Ok(Report { validations })
    }

    fn natoms(&self) -> usize {
        match &self.neb {
            Some(images) => images.first().map_or(0, Atoms::len),
            None => self.atoms.len(),
        }
    }
}

/// Outcome of a successful check.
#[derive(Debug)]
pub struct Report {
    pub validations: Vec<Validation>,
}

impl Report {
    pub fn advisories(&self) -> impl Iterator<Item = (&str, &str)> {
        self.validations.iter().flat_map(|v| {
            v.advisories
                .iter()
                .map(move |message| (v.keyword.as_str(), message.as_str()))
        })
    }

    /// Keywords accepted without a rule to check them.
    pub fn unchecked(&self) -> impl Iterator<Item = &str> {
        self.validations
            .iter()
            .filter(|v| !v.checked)
            .map(|v| v.keyword.as_str())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ok")?;
        for (keyword, message) in self.advisories() {
            write!(f, "\nwarning: {keyword}: {message}")?;
        }
        for keyword in self.unchecked() {
            write!(f, "\nnote: {keyword} has no rule and was not checked")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(json: &str) -> InputDeck {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn positions_and_sections_are_optional() {
        let d = deck(r#"{ "atoms": { "atoms": [{ "symbol": "Si" }] } }"#);
        assert_eq!(d.atoms.len(), 1);
        assert!(d.parameters.is_empty());
        assert!(d.neb.is_none());
    }

    #[test]
    fn unknown_sections_are_rejected() {
        assert!(serde_json::from_str::<InputDeck>(r#"{ "kpoints": [] }"#).is_err());
    }

    #[test]
    fn report_lists_advisories_then_unchecked() {
        let d = deck(
            r#"{
                "atoms": { "atoms": [{ "symbol": "Si" }] },
                "parameters": { "ialgo": 38, "lhfcalc": true }
            }"#,
        );
        let report = d.check(ValidatorConfig::default()).unwrap();
        let text = report.to_string();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("ok"));
        assert!(lines.next().unwrap().starts_with("warning: ialgo: "));
        assert_eq!(
            lines.next(),
            Some("note: lhfcalc has no rule and was not checked")
        );
    }
}
