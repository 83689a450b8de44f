//! Named behaviours attached to a calculator at compile time.
//!
//! An [`Extension`] is a plain function over a [`KeywordContext`] plus a
//! doc string. Registering one never touches the rule registry. The
//! [`extension!`](crate::extension) macro records where the extension was
//! defined, and that location is appended to its documentation.

use std::collections::BTreeMap;
use std::fmt;

use crate::context::KeywordContext;
use crate::error::{KeywordError, KeywordResult};
use crate::types::Value;

pub type ExtensionFn = fn(&dyn KeywordContext) -> KeywordResult<Value>;

/// Source location an extension was defined at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Provenance {
    pub file: &'static str,
    pub line: u32,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Extension defined in {} at line {}", self.file, self.line)
    }
}

#[derive(Clone)]
pub struct Extension {
    name: String,
    doc: String,
    provenance: Provenance,
    run: ExtensionFn,
}

impl Extension {
    pub fn new(
        name: impl Into<String>,
        doc: impl Into<String>,
        provenance: Provenance,
        run: ExtensionFn,
    ) -> Self {
        let mut doc = doc.into();
        if !doc.is_empty() {
            doc.push_str("\n\n");
        }
        doc.push_str(&provenance.to_string());
        Self {
            name: name.into(),
            doc,
            provenance,
            run,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Documentation, ending with the provenance line.
    pub fn doc(&self) -> &str {
        &self.doc
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    pub fn run(&self, ctx: &dyn KeywordContext) -> KeywordResult<Value> {
        (self.run)(ctx)
    }
}

impl fmt::Debug for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extension")
            .field("name", &self.name)
            .field("provenance", &self.provenance)
            .finish()
    }
}

/// Build an [`Extension`] whose provenance is the macro call site.
///
/// ```
/// use incar_core::{extension, KeywordContext, Value};
///
/// let natoms = extension!("natoms", "Number of atoms.", |ctx: &dyn KeywordContext| {
///     Ok(Value::Int(ctx.natoms() as i64))
/// });
/// assert!(natoms.doc().contains("Extension defined in"));
/// ```
#[macro_export]
macro_rules! extension {
    ($name:expr, $doc:expr, $run:expr) => {
        $crate::extensions::Extension::new(
            $name,
            $doc,
            $crate::extensions::Provenance {
                file: file!(),
                line: line!(),
            },
            $run,
        )
    };
}

/// Name → extension table held by a calculator.
#[derive(Debug, Clone, Default)]
pub struct Extensions {
    entries: BTreeMap<String, Extension>,
}

impl Extensions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `extension`, replacing any earlier one with the same name.
    pub fn register(&mut self, extension: Extension) {
        if let Some(previous) = self.entries.insert(extension.name.clone(), extension) {
            tracing::warn!(
                extension = %previous.name,
                replaced = %previous.provenance,
                "Extension replaced",
            );
        }
    }

    pub fn get(&self, name: &str) -> Option<&Extension> {
        self.entries.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn invoke(&self, name: &str, ctx: &dyn KeywordContext) -> KeywordResult<Value> {
        self.get(name)
            .ok_or_else(|| KeywordError::UnknownExtension(name.to_string()))?
            .run(ctx)
    }
}
