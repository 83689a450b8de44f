//! `incar-core` -- validation rules for VASP calculator keywords.
//!
//! Every keyword has one stateless rule in a static [`Registry`]. A rule
//! checks a proposed [`Value`] against a read-only [`KeywordContext`] (the
//! parameter set plus the structure being simulated) and either accepts it
//! or returns a [`KeywordError`] describing the violation.
//!
//! [`Calculator`] is the reference context: it routes every assignment
//! through the registry. [`introspection`] renders the registry for editor
//! completion and [`extensions`] attaches named behaviours to a calculator.

pub mod atoms;
pub mod calculator;
pub mod config;
pub mod context;
pub mod error;
pub mod extensions;
pub mod introspection;
pub mod keywords;
pub mod parameters;
pub mod potcar;
pub mod types;
pub mod xc;

pub use atoms::{Atom, Atoms};
pub use calculator::Calculator;
pub use config::{UnknownKeywordPolicy, ValidatorConfig};
pub use context::KeywordContext;
pub use error::{ConfigError, KeywordError, KeywordResult};
pub use extensions::{Extension, Extensions, Provenance};
pub use keywords::{registry, validate, validate_with, Registry, Rule, Validation};
pub use parameters::Parameters;
pub use types::{Value, ValueKind};
