//! k-point sampling keywords. Apart from KSPACING these drive the KPOINTS
//! file rather than INCAR.

use super::checks::{expect_bool, expect_float, expect_int, expect_list, structure_error};
use super::Rule;
use crate::context::KeywordContext;
use crate::error::KeywordResult;
use crate::types::Value;

pub(super) const RULES: &[Rule] = &[
    Rule::new(
        "kpts",
        "Sets the k-point mesh or explicit k-points. Not a VASP keyword. (list)",
        kpts,
    ),
    Rule::new(
        "gamma",
        "Centres the k-point mesh on Gamma, shifted by the given vector. (list)\n\n\
         The value is a length-3 shift from the Gamma point; use [0, 0, 0]\n\
         for no shift.",
        gamma,
    ),
    Rule::new(
        "reciprocal",
        "Writes explicit k-points in reciprocal coordinates. Not a VASP keyword. (boolean)",
        reciprocal,
    ),
    Rule::new(
        "kspacing",
        "KSPACING sets the k-point density when no KPOINTS file is present. (float)\n\n\
         https://www.vasp.at/wiki/index.php/KSPACING",
        kspacing,
    ),
    Rule::new(
        "kpts_nintersections",
        "Switches KPOINTS to line mode for band structures. (int)\n\n\
         The value is the number of points per segment.\n\n\
         https://www.vasp.at/wiki/index.php/KPOINTS",
        kpts_nintersections,
    ),
];

fn kpts(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    expect_list("kpts", value).map(drop)
}

fn gamma(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    let shift = expect_list("gamma", value)?;
    if shift.len() != 3 {
        return Err(structure_error(
            "gamma",
            format!("expected a shift of length 3, got length {}", shift.len()),
        ));
    }
    Ok(())
}

fn reciprocal(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    expect_bool("reciprocal", value).map(drop)
}

fn kspacing(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    expect_float("kspacing", value).map(drop)
}

fn kpts_nintersections(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    expect_int("kpts_nintersections", value).map(drop)
}
