//! Ionic-relaxation, molecular-dynamics and NEB keywords.

use super::checks::{
    cross_field_error, expect_float, expect_int, expect_number, int_one_of, structure_error,
    type_error,
};
use super::Rule;
use crate::context::KeywordContext;
use crate::error::KeywordResult;
use crate::types::Value;

pub const IBRION_VALUES: &[i64] = &[-1, 0, 1, 2, 3, 5, 6, 7, 8, 44];

pub const ISIF_VALUES: &[i64] = &[0, 1, 2, 3, 4, 5, 6, 7];

pub const ISYM_VALUES: &[i64] = &[-1, 0, 1, 2, 3];

/// IBRION settings whose optimisers honour SPRING.
pub const NEB_IBRION_VALUES: &[i64] = &[1, 3];

pub(super) const RULES: &[Rule] = &[
    Rule::new(
        "atoms",
        "The structure to simulate, or a list of structures for an NEB. (structure)",
        atoms,
    ),
    Rule::new(
        "ibrion",
        "IBRION selects how ions are moved during relaxation. (int)\n\n\
         https://www.vasp.at/wiki/index.php/IBRION",
        ibrion,
    ),
    Rule::new(
        "isif",
        "ISIF chooses which degrees of freedom relax. (int)\n\n\
         | ISIF | stress | ions | cell shape | cell volume |\n\
         |------+--------+------+------------+-------------|\n\
         |    0 | no     | yes  | no         | no          |\n\
         |    1 | trace  | yes  | no         | no          |\n\
         |    2 | yes    | yes  | no         | no          |\n\
         |    3 | yes    | yes  | yes        | yes         |\n\
         |    4 | yes    | yes  | yes        | no          |\n\
         |    5 | yes    | no   | yes        | no          |\n\
         |    6 | yes    | no   | yes        | yes         |\n\
         |    7 | yes    | no   | no         | yes         |\n\n\
         https://www.vasp.at/wiki/index.php/ISIF",
        isif,
    ),
    Rule::new(
        "nsw",
        "NSW caps the number of ionic steps. (int)\n\n\
         https://www.vasp.at/wiki/index.php/NSW",
        nsw,
    ),
    Rule::new(
        "potim",
        "POTIM is the MD time step or the relaxation step scaling. (float)\n\n\
         https://www.vasp.at/wiki/index.php/POTIM",
        potim,
    ),
    Rule::new(
        "ediffg",
        "EDIFFG is the break condition for the ionic loop. (float)\n\n\
         A negative value is a force criterion in eV/Å.\n\n\
         https://www.vasp.at/wiki/index.php/EDIFFG",
        ediffg,
    ),
    Rule::new(
        "isym",
        "ISYM controls how symmetry is used. (int)\n\n\
         https://www.vasp.at/wiki/index.php/ISYM",
        isym,
    ),
    Rule::new(
        "images",
        "IMAGES is the number of NEB images, end points excluded. (int)\n\n\
         https://www.vasp.at/wiki/index.php/IMAGES",
        images,
    ),
    Rule::new(
        "spring",
        "SPRING is the spring constant of the elastic band; -5 selects NEB. (number)\n\n\
         https://www.vasp.at/wiki/index.php/SPRING",
        spring,
    )
    .with_advice(spring_advice),
];

fn atoms(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    match value {
        Value::Structure(_) => Ok(()),
        Value::List(images) if images.is_empty() => Err(structure_error(
            "atoms",
            "an NEB needs at least one image, got an empty list",
        )),
        Value::List(images) => match images.iter().find(|v| !matches!(v, Value::Structure(_))) {
            Some(other) => Err(type_error("atoms", "a list of structures", other)),
            None => Ok(()),
        },
        _ => Err(type_error("atoms", "a structure or a list of structures", value)),
    }
}

fn ibrion(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    let ibrion = expect_int("ibrion", value)?;
    int_one_of("ibrion", ibrion, IBRION_VALUES)
}

fn isif(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    let isif = expect_int("isif", value)?;
    int_one_of("isif", isif, ISIF_VALUES)
}

fn nsw(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    expect_int("nsw", value).map(drop)
}

fn potim(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    expect_float("potim", value).map(drop)
}

fn ediffg(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    match value {
        Value::Float(_) | Value::Int(0) => Ok(()),
        _ => Err(type_error("ediffg", "a float (or 0)", value)),
    }
}

fn isym(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    let isym = expect_int("isym", value)?;
    int_one_of("isym", isym, ISYM_VALUES)
}

fn images(ctx: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    let images = expect_int("images", value)?;
    let neb = ctx
        .neb()
        .ok_or_else(|| cross_field_error("images", "images is only valid for an NEB calculation"))?;

    let expected = neb.len() as i64 - 2;
    if images != expected {
        return Err(structure_error(
            "images",
            format!(
                "got {images}, but the NEB has {} frames so {expected} images are expected",
                neb.len()
            ),
        ));
    }
    Ok(())
}

fn spring(_: &dyn KeywordContext, value: &Value) -> KeywordResult<()> {
    expect_number("spring", value).map(drop)
}

fn spring_advice(ctx: &dyn KeywordContext, _: &Value) -> Option<String> {
    match ctx.parameters().get_int("ibrion") {
        Some(ibrion) if NEB_IBRION_VALUES.contains(&ibrion) => None,
        _ => Some("ibrion should be 1 or 3.".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::Atoms;
    use crate::calculator::Calculator;

    #[test]
    fn atoms_accepts_neb_image_lists() {
        let c = Calculator::new(Atoms::from_symbols(&["H"]));
        let image = Value::from(Atoms::from_symbols(&["H"]));
        assert!(atoms(&c, &image).is_ok());
        assert!(atoms(&c, &Value::List(vec![image.clone(), image])).is_ok());
        assert!(atoms(&c, &Value::from(vec![1, 2])).is_err());
    }

    #[test]
    fn atoms_rejects_an_empty_image_list() {
        let c = Calculator::new(Atoms::from_symbols(&["H"]));
        assert_matches::assert_matches!(
            atoms(&c, &Value::List(Vec::new())),
            Err(crate::error::KeywordError::Structure { keyword: "atoms", .. })
        );
    }

    #[test]
    fn spring_advises_without_neb_optimiser() {
        let mut c = Calculator::new(Atoms::from_symbols(&["H"]));
        assert!(spring_advice(&c, &Value::Int(-5)).is_some());
        c.parameters_mut().insert("ibrion", 3);
        assert!(spring_advice(&c, &Value::Int(-5)).is_none());
    }
}
