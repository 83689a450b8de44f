//! Output-file keywords and the projection settings that feed PROCAR.

use super::checks::{cross_field_error, expect_bool, expect_int, expect_map};
use super::Rule;
use crate::context::KeywordContext;
use crate::error::KeywordResult;
use crate::types::Value;

/// LORBIT values from here up ignore RWIGS.
pub const LORBIT_IGNORES_RWIGS: i64 = 10;

pub(super) const RULES: &[Rule] = &[
    Rule::new(
        "lcharg",
        "LCHARG controls whether CHGCAR and CHG are written. (boolean)\n\n\
         https://www.vasp.at/wiki/index.php/LCHARG",
        lcharg,
    ),
    Rule::new(
        "lwave",
        "LWAVE controls whether WAVECAR is written. (boolean)\n\n\
         https://www.vasp.at/wiki/index.php/LWAVE",
        lwave,
    ),
    Rule::new(
        "lvtot",
        "LVTOT controls whether the total local potential is written to LOCPOT. (boolean)\n\n\
         https://www.vasp.at/wiki/index.php/LVTOT",
        lvtot,
    ),
    Rule::new(
        "lvhar",
        "LVHAR limits LOCPOT to the electrostatic (ionic + Hartree) potential. (boolean)\n\n\
         Without it LOCPOT also includes exchange-correlation.\n\n\
         https://www.vasp.at/wiki/index.php/LVHAR",
        lvhar,
    ),
    Rule::new(
        "lorbit",
        "LORBIT controls whether PROCAR or PROOUT are written. (int)\n\n\
         Values below 10 project onto spheres of radius RWIGS, which must be set.\n\n\
         https://www.vasp.at/wiki/index.php/LORBIT",
        lorbit,
    ),
    Rule::new(
        "rwigs",
        "RWIGS gives the Wigner-Seitz radius of each species. (dict)\n\n\
         Entered as {symbol: radius}. Ignored when LORBIT >= 10.\n\n\
         https://www.vasp.at/wiki/index.php/RWIGS",
        rwigs,
    ),
];

fn lcharg(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    expect_bool("lcharg", value).map(drop)
}

fn lwave(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    expect_bool("lwave", value).map(drop)
}

fn lvtot(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    expect_bool("lvtot", value).map(drop)
}

fn lvhar(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    expect_bool("lvhar", value).map(drop)
}

fn lorbit(ctx: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    let lorbit = expect_int("lorbit", value)?;
    if lorbit < LORBIT_IGNORES_RWIGS && !ctx.parameters().contains("rwigs") {
        return Err(cross_field_error(
            "lorbit",
            format!("lorbit = {lorbit} requires rwigs to be set"),
        ));
    }
    Ok(())
}

fn rwigs(ctx: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    expect_map("rwigs", value)?;
    let lorbit = ctx.parameters().get_int("lorbit").unwrap_or(0);
    if lorbit >= LORBIT_IGNORES_RWIGS {
        return Err(cross_field_error(
            "rwigs",
            format!("lorbit = {lorbit} >= {LORBIT_IGNORES_RWIGS}, rwigs is ignored"),
        ));
    }
    Ok(())
}
