//! Corrections layered on the base functional: DFT+U, van der Waals,
//! dipole and field corrections, implicit solvation, and POTCAR setups.

use super::checks::{
    expect_bool, expect_float, expect_int, expect_list, expect_map, expect_number, int_one_of,
    structure_error, type_error,
};
use super::Rule;
use crate::context::KeywordContext;
use crate::error::KeywordResult;
use crate::types::Value;

pub const LDAUPRINT_VALUES: &[i64] = &[0, 1, 2];

pub const LDAUTYPE_VALUES: &[i64] = &[1, 2, 4];

/// 0 is none; 1/10 D2; 11 D3 zero damping; 12 D3(BJ); 2 TS; 21 TS with
/// iterative Hirshfeld; 202 MBD@rSC; 4 dDsC.
pub const IVDW_VALUES: &[i64] = &[0, 1, 10, 11, 12, 2, 21, 202, 4];

pub const IDIPOL_VALUES: &[i64] = &[1, 2, 3, 4];

pub(super) const RULES: &[Rule] = &[
    Rule::new(
        "ldau",
        "LDAU switches on L(S)DA+U. (bool)\n\n\
         https://www.vasp.at/wiki/index.php/LDAU",
        ldau,
    ),
    Rule::new(
        "ldau_luj",
        "Per-species DFT+U parameters. (dict)\n\n\
         ldau_luj={'Mn': {'L': 2, 'U': 4.0, 'J': 0.0},\n\
         \x20         'O': {'L': -1, 'U': 0.0, 'J': 0.0}}\n\n\
         Every species in the structure needs exactly one entry.",
        ldau_luj,
    ),
    Rule::new(
        "ldauprint",
        "LDAUPRINT sets the verbosity of the L(S)DA+U routines. (int)\n\n\
         0 is silent, 1 writes the occupancy matrix to OUTCAR, 2 also dumps\n\
         the potential matrix to stdout.\n\n\
         https://www.vasp.at/wiki/index.php/LDAUPRINT",
        ldauprint,
    ),
    Rule::new(
        "ldautype",
        "LDAUTYPE selects the flavour of L(S)DA+U. (int)\n\n\
         1 is the rotationally invariant scheme of Liechtenstein et al.,\n\
         Phys. Rev. B 52, R5467 (1995). 2 is the simplified scheme of\n\
         Dudarev et al., Phys. Rev. B 57, 1505 (1998). 4 is LDA+U without\n\
         exchange splitting.\n\n\
         https://www.vasp.at/wiki/index.php/LDAUTYPE",
        ldautype,
    ),
    Rule::new(
        "ivdw",
        "IVDW selects the approximate van der Waals correction. (int)\n\n\
         0 none; 1 or 10 DFT-D2; 11 DFT-D3 zero damping; 12 DFT-D3 with\n\
         Becke-Johnson damping; 2 Tkatchenko-Scheffler; 21 TS with iterative\n\
         Hirshfeld partitioning; 202 MBD@rSC; 4 dDsC.\n\n\
         https://www.vasp.at/wiki/index.php/IVDW",
        ivdw,
    ),
    Rule::new(
        "dipol",
        "DIPOL is the cell centre, in direct coordinates, for the dipole moment. (list)\n\n\
         https://www.vasp.at/wiki/index.php/DIPOL",
        dipol,
    ),
    Rule::new(
        "idipol",
        "IDIPOL switches on monopole, dipole and quadrupole energy corrections. (int)\n\n\
         https://www.vasp.at/wiki/index.php/IDIPOL",
        idipol,
    ),
    Rule::new(
        "ldipol",
        "LDIPOL adds a dipole correction to the potential. (boolean)\n\n\
         https://www.vasp.at/wiki/index.php/LDIPOL",
        ldipol,
    ),
    Rule::new(
        "efield",
        "EFIELD is the strength of the applied electric field in eV/Å. (float)\n\n\
         https://www.vasp.at/wiki/index.php/EFIELD",
        efield,
    ),
    Rule::new(
        "lsol",
        "LSOL activates the VASPsol implicit solvent. (boolean)\n\n\
         https://github.com/henniggroup/VASPsol/blob/master/docs/USAGE.md",
        lsol,
    ),
    Rule::new(
        "eb_k",
        "EB_K is the relative permittivity of the VASPsol solvent. (float)\n\n\
         https://github.com/henniggroup/VASPsol/blob/master/docs/USAGE.md",
        eb_k,
    ),
    Rule::new(
        "setups",
        "Special POTCAR setups as [symbol-or-index, suffix] pairs. (list)\n\n\
         The first element is either a chemical symbol, applying to every atom\n\
         of that species, or an atom index. The suffix is appended to the\n\
         POTCAR name, so [['O', '_s']] selects O_s. Not a VASP keyword.",
        setups,
    ),
];

fn ldau(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    match value {
        Value::Bool(_) | Value::Null => Ok(()),
        _ => Err(type_error("ldau", "a boolean", value)),
    }
}

// Site-specific U would need distinct setups per site; only per-species
// maps are checked here.
fn ldau_luj(ctx: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    let luj = expect_map("ldau_luj", value)?;
    let species = ctx.species();
    if luj.len() != species.len() {
        return Err(structure_error(
            "ldau_luj",
            format!(
                "got {} entries, but the structure has {} species {species:?}",
                luj.len(),
                species.len()
            ),
        ));
    }
    Ok(())
}

fn ldauprint(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    let ldauprint = expect_int("ldauprint", value)?;
    int_one_of("ldauprint", ldauprint, LDAUPRINT_VALUES)
}

fn ldautype(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    let ldautype = expect_int("ldautype", value)?;
    int_one_of("ldautype", ldautype, LDAUTYPE_VALUES)
}

fn ivdw(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    let ivdw = expect_int("ivdw", value)?;
    int_one_of("ivdw", ivdw, IVDW_VALUES)
}

fn dipol(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    expect_list("dipol", value).map(drop)
}

fn idipol(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    let idipol = expect_int("idipol", value)?;
    int_one_of("idipol", idipol, IDIPOL_VALUES)
}

fn ldipol(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    expect_bool("ldipol", value).map(drop)
}

fn efield(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    expect_number("efield", value).map(drop)
}

fn lsol(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    expect_bool("lsol", value).map(drop)
}

fn eb_k(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    expect_float("eb_k", value).map(drop)
}

fn setups(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    let pairs = expect_list("setups", value)?;
    for (i, pair) in pairs.iter().enumerate() {
        let Some(items) = pair.as_list() else {
            return Err(type_error("setups", "a [symbol-or-index, suffix] pair", pair));
        };
        let [target, suffix] = items else {
            return Err(structure_error(
                "setups",
                format!("entry {i} ({pair}) must be a [symbol-or-index, suffix] pair"),
            ));
        };
        if !matches!(target, Value::Int(_) | Value::Text(_)) {
            return Err(type_error("setups", "a symbol or an atom index", target));
        }
        if !matches!(suffix, Value::Text(_)) {
            return Err(type_error("setups", "text", suffix));
        }
    }
    Ok(())
}
