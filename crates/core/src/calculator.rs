//! Reference [`KeywordContext`]: a parameter set bound to a structure.
//!
//! Every assignment goes through the rule registry first, so a
//! `Calculator` only ever holds values that passed validation against the
//! state they were set in.

use std::collections::BTreeMap;

use crate::atoms::Atoms;
use crate::config::ValidatorConfig;
use crate::context::KeywordContext;
use crate::error::{KeywordError, KeywordResult};
use crate::extensions::{Extension, Extensions};
use crate::keywords::{validate_with, Validation};
use crate::parameters::Parameters;
use crate::potcar;
use crate::types::Value;

#[derive(Debug, Clone, Default)]
pub struct Calculator {
    parameters: Parameters,
    atoms: Atoms,
    neb: Option<Vec<Atoms>>,
    valence: BTreeMap<String, f64>,
    config: ValidatorConfig,
    extensions: Extensions,
}

impl Calculator {
    pub fn new(atoms: Atoms) -> Self {
        Self {
            atoms,
            ..Self::default()
        }
    }

    /// NEB calculator over `images`, end points included. The first image
    /// becomes the reference structure.
    pub fn for_neb(images: Vec<Atoms>) -> Self {
        let mut calc = Self::default();
        calc.set_images(images);
        calc
    }

    pub fn with_config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the valence-electron count used for `symbol`.
    pub fn with_valence(mut self, symbol: impl Into<String>, zval: f64) -> Self {
        self.valence.insert(symbol.into(), zval);
        self
    }

    pub fn with_extension(mut self, extension: Extension) -> Self {
        self.extensions.register(extension);
        self
    }

    pub fn register_extension(&mut self, extension: Extension) {
        self.extensions.register(extension);
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    pub fn get(&self, keyword: &str) -> Option<&Value> {
        self.parameters.get(keyword)
    }

    #[cfg(test)]
    pub(crate) fn parameters_mut(&mut self) -> &mut Parameters {
        &mut self.parameters
    }

    /// Validate `value` for `keyword` against the current state and store it.
    ///
    /// Nothing changes when validation fails. `atoms` replaces the
    /// structure (or the NEB images) instead of being stored as a parameter.
    pub fn set(&mut self, keyword: &str, value: impl Into<Value>) -> KeywordResult<Validation> {
        let keyword = keyword.to_ascii_lowercase();
        let value = value.into();
        let validation = validate_with(&*self, &keyword, &value, &self.config)?;
        self.apply(&keyword, value);
        Ok(validation)
    }

    /// Apply several assignments atomically.
    ///
    /// All values are staged first, then each is validated against the
    /// staged state, so companions like `ispin` and `magmom` can be set
    /// together. Either every pair is committed or none is.
    pub fn set_many<I, K, V>(&mut self, pairs: I) -> KeywordResult<Vec<Validation>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let pairs: Vec<(String, Value)> = pairs
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_ascii_lowercase(), v.into()))
            .collect();

        let mut staged = self.clone();
        for (keyword, value) in &pairs {
            staged.apply(keyword, value.clone());
        }

        let validations = pairs
            .iter()
            .map(|(keyword, value)| validate_with(&staged, keyword, value, &staged.config))
            .collect::<KeywordResult<Vec<_>>>()?;

        *self = staged;
        Ok(validations)
    }

    /// Re-check every stored parameter against the current state.
    ///
    /// Useful after the structure changed underneath existing settings.
    pub fn validate_all(&self) -> KeywordResult<Vec<Validation>> {
        self.parameters
            .iter()
            .map(|(keyword, value)| validate_with(self, keyword, value, &self.config))
            .collect()
    }

    /// Run the extension registered as `name` against this calculator.
    pub fn call(&self, name: &str) -> KeywordResult<Value> {
        self.extensions.invoke(name, self)
    }

    fn apply(&mut self, keyword: &str, value: Value) {
        match value {
            Value::Structure(atoms) if keyword == "atoms" => {
                self.atoms = atoms;
                self.neb = None;
            }
            Value::List(items)
                if keyword == "atoms" && items.iter().all(|v| matches!(v, Value::Structure(_))) =>
            {
                let images = items
                    .into_iter()
                    .filter_map(|v| match v {
                        Value::Structure(atoms) => Some(atoms),
                        _ => None,
                    })
                    .collect();
                self.set_images(images);
            }
            value => {
                self.parameters.insert(keyword, value);
            }
        }
    }

    fn set_images(&mut self, images: Vec<Atoms>) {
        if let Some(first) = images.first() {
            self.atoms = first.clone();
        }
        self.neb = Some(images);
    }
}

impl KeywordContext for Calculator {
    fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    fn atoms(&self) -> &Atoms {
        &self.atoms
    }

    fn valence_electrons(&self) -> KeywordResult<f64> {
        self.atoms
            .symbols()
            .map(|symbol| {
                self.valence
                    .get(symbol)
                    .copied()
                    .or_else(|| potcar::default_valence(symbol))
                    .ok_or_else(|| {
                        KeywordError::Context(format!(
                            "no valence electron count for {symbol}; set one with with_valence"
                        ))
                    })
            })
            .sum()
    }

    fn neb(&self) -> Option<&[Atoms]> {
        self.neb.as_deref()
    }
}
