//! The capability a context exposes to keyword rules.

use crate::atoms::Atoms;
use crate::error::KeywordResult;
use crate::parameters::Parameters;

/// Read-only view of a calculator that rules validate against.
///
/// Rules receive `&dyn KeywordContext` and must not mutate it through
/// interior mutability either.
pub trait KeywordContext {
    /// The full keyword set currently configured.
    fn parameters(&self) -> &Parameters;

    /// The structure being simulated.
    fn atoms(&self) -> &Atoms;

    /// Total valence electrons over all atoms.
    fn valence_electrons(&self) -> KeywordResult<f64>;

    /// Images of a nudged-elastic-band run, end points included.
    fn neb(&self) -> Option<&[Atoms]> {
        None
    }

    fn natoms(&self) -> usize {
        self.atoms().len()
    }

    fn species(&self) -> Vec<&str> {
        self.atoms().species()
    }
}
