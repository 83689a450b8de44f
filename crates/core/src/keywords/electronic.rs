//! Electronic-structure keywords: algorithms, cutoffs, smearing, spin,
//! band counts and the functional selection.

use super::checks::{
    cross_field_error, domain_error, expect_float, expect_int, expect_list,
    expect_number, expect_text, int_one_of, positive, structure_error, text_one_of, type_error,
};
use super::Rule;
use crate::context::KeywordContext;
use crate::error::KeywordResult;
use crate::types::Value;
use crate::xc;

// ---------------------------------------------------------------------------
// Allowed values
// ---------------------------------------------------------------------------

pub const ALGO_VALUES: &[&str] = &[
    "Normal", "VeryFast", "Fast", "Conjugate", "All", "Damped", "Subrot", "Eigenval", "None",
    "Nothing", "CHI", "GW0", "GW", "scGW0", "scGW",
];

pub const IALGO_VALUES: &[i64] = &[
    -1, 2, 3, 4, 5, 6, 7, 8, 15, 16, 17, 18, 28, 38, 44, 45, 46, 47, 48, 53, 54, 55, 56, 57, 58,
];

/// `RE` through `B3` are accepted by VASP but undocumented; the vdW-DF and
/// hybrid presets in [`crate::xc`] rely on them.
pub const GGA_VALUES: &[&str] = &[
    "91", "PE", "RP", "AM", "PS", "RE", "OR", "BO", "MK", "ML", "BF", "B3",
];

pub const PREC_VALUES: &[&str] = &["low", "medium", "high", "normal", "accurate", "single"];

pub const PP_VALUES: &[&str] = &["PBE", "LDA", "GGA"];

pub const LREAL_VALUES: &[&str] = &["On", "Auto", "O", "A"];

pub const ISMEAR_VALUES: &[i64] = &[-5, -4, -3, -2, -1, 0, 1, 2];

pub const LMAXMIX_VALUES: &[i64] = &[2, 4, 6];

pub(super) const RULES: &[Rule] = &[
    Rule::new(
        "algo",
        "ALGO selects the electronic minimisation algorithm. (string)\n\n\
         Matching is case-insensitive.\n\n\
         https://www.vasp.at/wiki/index.php/ALGO",
        algo,
    ),
    Rule::new(
        "ialgo",
        "IALGO selects the orbital optimisation algorithm by number. (int)\n\n\
         Prefer ALGO; IALGO is kept for old inputs.\n\n\
         https://www.vasp.at/wiki/index.php/IALGO",
        ialgo,
    )
    .with_advice(ialgo_advice),
    Rule::new(
        "prec",
        "PREC sets the precision mode. (string)\n\n\
         https://www.vasp.at/wiki/index.php/PREC",
        prec,
    ),
    Rule::new(
        "encut",
        "ENCUT is the plane-wave cutoff in eV. (float)\n\n\
         https://www.vasp.at/wiki/index.php/ENCUT",
        encut,
    ),
    Rule::new(
        "ediff",
        "EDIFF is the break condition for the electronic loop. (float)\n\n\
         https://www.vasp.at/wiki/index.php/EDIFF",
        ediff,
    ),
    Rule::new(
        "nelm",
        "NELM caps the number of electronic self-consistency steps. (int)\n\n\
         https://www.vasp.at/wiki/index.php/NELM",
        nelm,
    ),
    Rule::new(
        "nbands",
        "NBANDS sets the number of bands in the calculation. (int)\n\n\
         Must exceed half the valence-electron count of the structure.\n\n\
         https://www.vasp.at/wiki/index.php/NBANDS",
        nbands,
    ),
    Rule::new(
        "gga",
        "GGA selects the exchange-correlation functional tag. (string)\n\n\
         https://www.vasp.at/wiki/index.php/GGA",
        gga,
    ),
    Rule::new(
        "xc",
        "Selects an exchange-correlation preset by name. (string)\n\n\
         Not a VASP keyword. The preset expands to PP, GGA and related tags.",
        xc_preset,
    ),
    Rule::new(
        "pp",
        "Chooses the POTCAR family the potentials are read from. (string)\n\n\
         Not a VASP keyword.",
        pp,
    ),
    Rule::new(
        "lreal",
        "LREAL picks real- or reciprocal-space projection operators. (boolean or string)\n\n\
         https://www.vasp.at/wiki/index.php/LREAL",
        lreal,
    ),
    Rule::new(
        "nsim",
        "NSIM is the number of bands optimised together by RMM-DIIS. (int)\n\n\
         https://www.vasp.at/wiki/index.php/NSIM",
        nsim,
    ),
    Rule::new(
        "ncore",
        "NCORE is the number of cores that work on one orbital. (int)\n\n\
         https://www.vasp.at/wiki/index.php/NCORE",
        ncore,
    ),
    Rule::new(
        "maxmix",
        "MAXMIX is the number of steps kept by the Broyden mixer. (int)\n\n\
         https://www.vasp.at/wiki/index.php/MAXMIX",
        maxmix,
    ),
    Rule::new(
        "lmaxmix",
        "LMAXMIX is the highest l-quantum number passed to the charge mixer. (int)\n\n\
         Use 4 for d-elements and 6 for f-elements, mostly with DFT+U.\n\n\
         https://www.vasp.at/wiki/index.php/LMAXMIX",
        lmaxmix,
    ),
    Rule::new(
        "ispin",
        "ISPIN switches spin polarisation. (int)\n\n\
         1 is non-spin-polarised (default) and 2 is spin-polarised. ISPIN = 2\n\
         needs a MAGMOM entry for every atom.\n\n\
         https://www.vasp.at/wiki/index.php/ISPIN",
        ispin,
    ),
    Rule::new(
        "magmom",
        "MAGMOM gives the initial magnetic moment of each atom. (list)\n\n\
         https://www.vasp.at/wiki/index.php/MAGMOM",
        magmom,
    ),
    Rule::new(
        "nupdown",
        "NUPDOWN fixes the spin-up minus spin-down electron count. (number)\n\n\
         Documented as an integer, but fractional values are accepted.\n\n\
         https://www.vasp.at/wiki/index.php/NUPDOWN",
        nupdown,
    ),
    Rule::new(
        "ismear",
        "ISMEAR chooses how partial occupancies are set. (int)\n\n\
         https://www.vasp.at/wiki/index.php/ISMEAR",
        ismear,
    ),
    Rule::new(
        "sigma",
        "SIGMA is the smearing width in eV. (float)\n\n\
         https://www.vasp.at/wiki/index.php/SIGMA",
        sigma,
    ),
    Rule::new(
        "icharg",
        "ICHARG chooses how the initial charge density is built. (int)\n\n\
         0 from the initial wave functions, 1 from CHGCAR, 2 from atomic\n\
         charge densities (default), 11 for band structures.\n\n\
         https://www.vasp.at/wiki/index.php/ICHARG",
        icharg,
    ),
];

fn algo(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    let algo = expect_text("algo", value)?;
    text_one_of("algo", algo, ALGO_VALUES, true)
}

fn ialgo(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    let ialgo = expect_int("ialgo", value)?;
    int_one_of("ialgo", ialgo, IALGO_VALUES)
}

fn ialgo_advice(_: &dyn KeywordContext, _: &Value) -> Option<String> {
    Some("You are advised to use the algo key instead of ialgo.".into())
}

fn prec(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    let prec = expect_text("prec", value)?;
    text_one_of("prec", prec, PREC_VALUES, true)
}

fn encut(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    let encut = expect_number("encut", value)?;
    positive("encut", encut)
}

fn ediff(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    match value {
        Value::Float(_) | Value::Int(0) => Ok(()),
        _ => Err(type_error("ediff", "a float (or 0)", value)),
    }
}

fn nelm(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    expect_int("nelm", value).map(drop)
}

fn nsim(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    expect_int("nsim", value).map(drop)
}

fn ncore(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    expect_int("ncore", value).map(drop)
}

fn maxmix(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    expect_int("maxmix", value).map(drop)
}

fn icharg(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    expect_int("icharg", value).map(drop)
}

fn nbands(ctx: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    let nbands = expect_int("nbands", value)?;
    let half = ctx.valence_electrons()? / 2.0;
    if (nbands as f64) > half {
        Ok(())
    } else {
        Err(domain_error(
            "nbands",
            format!("nbands = {nbands} which is less than {half}"),
        ))
    }
}

fn gga(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    let gga = expect_text("gga", value)?;
    text_one_of("gga", gga, GGA_VALUES, false)
}

fn xc_preset(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    let name = expect_text("xc", value)?;
    if xc::preset(name).is_some() {
        Ok(())
    } else {
        Err(domain_error(
            "xc",
            format!("xc ({name}) not in {:?}", xc::names()),
        ))
    }
}

fn pp(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    let pp = expect_text("pp", value)?;
    text_one_of("pp", pp, PP_VALUES, false)
}

fn lreal(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    match value {
        Value::Bool(_) => Ok(()),
        Value::Text(s) => text_one_of("lreal", s, LREAL_VALUES, false),
        _ => Err(type_error("lreal", "a boolean or text", value)),
    }
}

fn lmaxmix(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    let lmaxmix = expect_int("lmaxmix", value)?;
    int_one_of("lmaxmix", lmaxmix, LMAXMIX_VALUES)
}

fn ispin(ctx: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    let ispin = expect_int("ispin", value)?;
    if !matches!(ispin, 1 | 2) {
        return Err(domain_error("ispin", format!("ispin should be 1 or 2, got {ispin}")));
    }
    if ispin == 1 {
        return Ok(());
    }

    let magmom = ctx
        .parameters()
        .get("magmom")
        .ok_or_else(|| cross_field_error("ispin", "ispin = 2 requires magmom, which is not set"))?;
    let moments = magmom
        .as_list()
        .ok_or_else(|| cross_field_error("ispin", "magmom must be a list when ispin = 2"))?;
    if moments.len() != ctx.natoms() {
        return Err(cross_field_error(
            "ispin",
            format!(
                "len(magmom) = {} does not match {} atoms",
                moments.len(),
                ctx.natoms()
            ),
        ));
    }
    Ok(())
}

fn magmom(ctx: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    let moments = expect_list("magmom", value)?;
    if moments.len() != ctx.natoms() {
        return Err(structure_error(
            "magmom",
            format!(
                "got {} moments for {} atoms",
                moments.len(),
                ctx.natoms()
            ),
        ));
    }
    Ok(())
}

fn nupdown(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    expect_number("nupdown", value).map(drop)
}

fn ismear(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    let ismear = expect_int("ismear", value)?;
    int_one_of("ismear", ismear, ISMEAR_VALUES)
}

fn sigma(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    let sigma = expect_float("sigma", value)?;
    positive("sigma", sigma)
}
