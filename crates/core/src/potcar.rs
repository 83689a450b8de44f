//! Default POTCAR valence (ZVAL) per element.
//!
//! Values are for the standard, unsuffixed PBE potentials. Semicore or soft
//! variants (`_pv`, `_sv`, `_s`, `_h`) carry different counts and must be
//! supplied as overrides on the calculator.

/// `(symbol, ZVAL)` for the unsuffixed PBE POTCAR of each listed element.
pub const DEFAULT_VALENCE: &[(&str, f64)] = &[
    ("H", 1.0),
    ("He", 2.0),
    ("Li", 1.0),
    ("Be", 2.0),
    ("B", 3.0),
    ("C", 4.0),
    ("N", 5.0),
    ("O", 6.0),
    ("F", 7.0),
    ("Ne", 8.0),
    ("Na", 1.0),
    ("Mg", 2.0),
    ("Al", 3.0),
    ("Si", 4.0),
    ("P", 5.0),
    ("S", 6.0),
    ("Cl", 7.0),
    ("Ar", 8.0),
    ("Ti", 4.0),
    ("V", 5.0),
    ("Cr", 6.0),
    ("Mn", 7.0),
    ("Fe", 8.0),
    ("Co", 9.0),
    ("Ni", 10.0),
    ("Cu", 11.0),
    ("Zn", 12.0),
    ("Ga", 3.0),
    ("Ge", 4.0),
    ("As", 5.0),
    ("Se", 6.0),
    ("Br", 7.0),
    ("Kr", 8.0),
    ("Mo", 6.0),
    ("Tc", 7.0),
    ("Ru", 8.0),
    ("Rh", 9.0),
    ("Pd", 10.0),
    ("Ag", 11.0),
    ("Cd", 12.0),
    ("In", 3.0),
    ("Sn", 4.0),
    ("Sb", 5.0),
    ("Te", 6.0),
    ("I", 7.0),
    ("Xe", 8.0),
    ("Hf", 4.0),
    ("Ta", 5.0),
    ("W", 6.0),
    ("Re", 7.0),
    ("Os", 8.0),
    ("Ir", 9.0),
    ("Pt", 10.0),
    ("Au", 11.0),
    ("Hg", 12.0),
    ("Tl", 3.0),
    ("Pb", 4.0),
    ("Bi", 5.0),
];

/// ZVAL of the default POTCAR for `symbol`, if tabulated.
pub fn default_valence(symbol: &str) -> Option<f64> {
    DEFAULT_VALENCE
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, zval)| *zval)
}
