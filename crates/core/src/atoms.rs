//! Minimal atomic structure used by the structural and cross-field rules.

use serde::{Deserialize, Serialize};

/// A single atom: chemical symbol plus Cartesian position in Å.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    pub symbol: String,
    #[serde(default)]
    pub position: [f64; 3],
}

impl Atom {
    pub fn new(symbol: impl Into<String>, position: [f64; 3]) -> Self {
        Self {
            symbol: symbol.into(),
            position,
        }
    }
}

/// An ordered collection of atoms with an optional unit cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Atoms {
    pub atoms: Vec<Atom>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell: Option<[[f64; 3]; 3]>,
}

impl Atoms {
    pub fn new(atoms: Vec<Atom>) -> Self {
        Self { atoms, cell: None }
    }

    /// Build a structure from symbols alone, placing every atom at the origin.
    pub fn from_symbols<S: AsRef<str>>(symbols: &[S]) -> Self {
        Self::new(
            symbols
                .iter()
                .map(|s| Atom::new(s.as_ref(), [0.0; 3]))
                .collect(),
        )
    }

    pub fn with_cell(mut self, cell: [[f64; 3]; 3]) -> Self {
        self.cell = Some(cell);
        self
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.atoms.iter().map(|a| a.symbol.as_str())
    }

    /// Distinct chemical symbols in order of first appearance.
    pub fn species(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for symbol in self.symbols() {
            if !seen.contains(&symbol) {
                seen.push(symbol);
            }
        }
        seen
    }
}
