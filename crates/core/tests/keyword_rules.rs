//! Integration tests for the keyword rule table.
//!
//! Exercises every registered rule through the public dispatch entry
//! point, covering kind checks, enumerated domains, structural checks and
//! cross-field preconditions.

use std::collections::BTreeMap;

use assert_matches::assert_matches;
use incar_core::{
    registry, validate, Atoms, Calculator, KeywordContext, KeywordError, Value, ValueKind,
};

fn calc(symbols: &[&str]) -> Calculator {
    Calculator::new(Atoms::from_symbols(symbols))
}

fn map(pairs: &[(&str, Value)]) -> Value {
    Value::Map(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect::<BTreeMap<_, _>>(),
    )
}

fn ok(c: &Calculator, keyword: &str, value: impl Into<Value>) -> bool {
    validate(c, keyword, &value.into()).is_ok()
}

// ---------------------------------------------------------------------------
// Kind checks
// ---------------------------------------------------------------------------

/// A value of the wrong kind fails with a type violation for every rule.
#[test]
fn every_rule_rejects_the_wrong_kind() {
    let c = calc(&["Fe", "O"]);
    for name in registry().names() {
        let wrong = match name {
            "ldau_luj" | "rwigs" => Value::Int(1),
            _ => Value::Map(BTreeMap::new()),
        };
        let result = validate(&c, name, &wrong);
        assert_matches!(
            result,
            Err(KeywordError::Type { keyword, .. }) if keyword == name,
            "{name} accepted or misreported {wrong}"
        );
    }
}

#[test]
fn float_keywords_reject_integers() {
    let c = calc(&["Si"]);
    for keyword in ["eb_k", "kspacing", "potim", "sigma"] {
        assert_matches!(
            validate(&c, keyword, &Value::Int(1)),
            Err(KeywordError::Type { found: ValueKind::Int, .. }),
            "{keyword}"
        );
        assert!(validate(&c, keyword, &Value::Float(0.5)).is_ok(), "{keyword}");
    }
}

#[test]
fn integer_keywords_reject_floats() {
    let c = calc(&["Si"]);
    for keyword in [
        "icharg",
        "kpts_nintersections",
        "maxmix",
        "ncore",
        "nelm",
        "nsim",
        "nsw",
    ] {
        assert!(validate(&c, keyword, &Value::Int(4)).is_ok(), "{keyword}");
        assert!(validate(&c, keyword, &Value::Float(4.0)).is_err(), "{keyword}");
    }
}

#[test]
fn boolean_keywords_reject_integers() {
    let c = calc(&["Si"]);
    for keyword in ["lcharg", "ldipol", "lsol", "lvhar", "lvtot", "lwave", "reciprocal"] {
        assert!(validate(&c, keyword, &Value::Bool(true)).is_ok(), "{keyword}");
        assert!(validate(&c, keyword, &Value::Bool(false)).is_ok(), "{keyword}");
        assert!(validate(&c, keyword, &Value::Int(1)).is_err(), "{keyword}");
    }
}

#[test]
fn number_keywords_accept_ints_and_floats() {
    let c = calc(&["Si"]);
    for keyword in ["efield", "nupdown", "spring"] {
        assert!(ok(&c, keyword, 2), "{keyword}");
        assert!(ok(&c, keyword, 0.1), "{keyword}");
        assert!(!ok(&c, keyword, "2"), "{keyword}");
    }
}

// ---------------------------------------------------------------------------
// Enumerated domains
// ---------------------------------------------------------------------------

#[test]
fn integer_enumerations_accept_members_only() {
    let c = calc(&["Si"]);
    let cases: &[(&str, &[i64], &[i64])] = &[
        ("ibrion", &[-1, 0, 1, 2, 3, 5, 6, 7, 8, 44], &[4, 9, -2]),
        ("isif", &[0, 1, 2, 3, 4, 5, 6, 7], &[-1, 8]),
        ("ismear", &[-5, -4, -3, -2, -1, 0, 1, 2], &[-6, 3]),
        ("isym", &[-1, 0, 1, 2, 3], &[-2, 4]),
        ("ivdw", &[0, 1, 10, 11, 12, 2, 21, 202, 4], &[3, 13, 20]),
        ("idipol", &[1, 2, 3, 4], &[0, 5]),
        ("ldauprint", &[0, 1, 2], &[3, -1]),
        ("ldautype", &[1, 2, 4], &[0, 3]),
        ("lmaxmix", &[2, 4, 6], &[3, 8]),
        ("ialgo", &[-1, 2, 8, 15, 28, 38, 48, 58], &[0, 1, 9, 59]),
    ];
    for (keyword, good, bad) in cases {
        for v in *good {
            assert!(ok(&c, keyword, *v), "{keyword} = {v} should pass");
        }
        for v in *bad {
            assert_matches!(
                validate(&c, keyword, &Value::Int(*v)),
                Err(KeywordError::Domain { .. }),
                "{keyword} = {v} should fail"
            );
        }
    }
}

#[test]
fn algo_and_prec_ignore_case() {
    let c = calc(&["Si"]);
    assert!(ok(&c, "algo", "fast"));
    assert!(ok(&c, "algo", "VERYFAST"));
    assert!(ok(&c, "algo", "scGW0"));
    assert!(!ok(&c, "algo", "Slow"));
    assert!(ok(&c, "prec", "Accurate"));
    assert!(ok(&c, "prec", "NORMAL"));
    assert!(!ok(&c, "prec", "extreme"));
}

#[test]
fn gga_and_pp_are_case_sensitive() {
    let c = calc(&["Si"]);
    assert!(ok(&c, "gga", "PE"));
    assert!(ok(&c, "gga", "91"));
    assert!(!ok(&c, "gga", "pe"));
    assert!(ok(&c, "pp", "PBE"));
    assert!(!ok(&c, "pp", "pbe"));
    assert!(!ok(&c, "pp", "PW91"));
}

#[test]
fn xc_accepts_presets_in_any_case() {
    let c = calc(&["Si"]);
    assert!(ok(&c, "xc", "PBE"));
    assert!(ok(&c, "xc", "hse06"));
    assert!(ok(&c, "xc", "BEEF-vdW"));
    let err = validate(&c, "xc", &Value::from("pbe-d3")).unwrap_err();
    assert!(err.to_string().contains("pbe-d3"), "{err}");
}

#[test]
fn xc_presets_expand_to_valid_settings() {
    let c = calc(&["Si"]);
    for name in incar_core::xc::names() {
        let params = incar_core::xc::defaults(name).expect("preset");
        for keyword in ["pp", "gga"] {
            if let Some(value) = params.get(keyword) {
                assert!(
                    validate(&c, keyword, value).is_ok(),
                    "{name} sets invalid {keyword} = {value}"
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Ranges and structure
// ---------------------------------------------------------------------------

#[test]
fn encut_must_be_positive() {
    let c = calc(&["Si"]);
    assert_matches!(
        validate(&c, "encut", &Value::Int(-5)),
        Err(KeywordError::Domain { keyword: "encut", .. })
    );
    assert!(!ok(&c, "encut", 0));
    assert!(ok(&c, "encut", 520.0));
    assert!(ok(&c, "encut", 400));
}

#[test]
fn sigma_must_be_a_positive_float() {
    let c = calc(&["Si"]);
    assert!(ok(&c, "sigma", 0.05));
    assert!(!ok(&c, "sigma", 0.0));
    assert!(!ok(&c, "sigma", -0.1));
}

#[test]
fn gamma_needs_three_components() {
    let c = calc(&["Si"]);
    assert!(ok(&c, "gamma", vec![0, 0, 0]));
    assert_matches!(
        validate(&c, "gamma", &Value::from(vec![0, 0])),
        Err(KeywordError::Structure { keyword: "gamma", .. })
    );
}

#[test]
fn magmom_length_matches_atom_count() {
    let c = calc(&["Fe", "Fe", "O"]);
    assert!(ok(&c, "magmom", vec![2.0, 2.0, 0.0]));
    assert_matches!(
        validate(&c, "magmom", &Value::from(vec![2.0, 2.0])),
        Err(KeywordError::Structure { keyword: "magmom", .. })
    );
}

#[test]
fn ldau_luj_needs_one_entry_per_species() {
    let c = calc(&["Mn", "O", "O"]);
    let u = |l: i64| map(&[("L", Value::Int(l)), ("U", Value::Float(0.0)), ("J", Value::Float(0.0))]);

    assert!(validate(&c, "ldau_luj", &map(&[("Mn", u(2)), ("O", u(-1))])).is_ok());
    assert_matches!(
        validate(&c, "ldau_luj", &map(&[("Mn", u(2))])),
        Err(KeywordError::Structure { keyword: "ldau_luj", .. })
    );
    assert!(validate(
        &c,
        "ldau_luj",
        &map(&[("Mn", u(2)), ("O", u(-1)), ("Fe", u(2))])
    )
    .is_err());
}

#[test]
fn nbands_depends_on_valence_electrons() {
    // Si carries 4 valence electrons: 8 over two atoms.
    let c = calc(&["Si", "Si"]);
    assert!(!ok(&c, "nbands", 4));
    assert!(ok(&c, "nbands", 5));

    let unknown = calc(&["Og"]);
    assert_matches!(
        validate(&unknown, "nbands", &Value::Int(10)),
        Err(KeywordError::Context(_))
    );
}

#[test]
fn setups_separates_kind_and_shape_errors() {
    let c = calc(&["O", "H"]);
    let pairs = Value::List;

    assert!(validate(
        &c,
        "setups",
        &pairs(vec![
            Value::from(vec!["O", "_s"]),
            Value::List(vec![Value::Int(1), Value::from("_h")]),
        ])
    )
    .is_ok());
    assert_matches!(
        validate(
            &c,
            "setups",
            &pairs(vec![Value::List(vec![Value::from("O"), Value::Int(2)])])
        ),
        Err(KeywordError::Type { keyword: "setups", found: ValueKind::Int, .. })
    );
    assert_matches!(
        validate(&c, "setups", &pairs(vec![Value::Int(1)])),
        Err(KeywordError::Type { keyword: "setups", .. })
    );
    assert_matches!(
        validate(&c, "setups", &pairs(vec![Value::from(vec!["O"])])),
        Err(KeywordError::Structure { keyword: "setups", .. })
    );
}

#[test]
fn atoms_needs_at_least_one_image() {
    let c = calc(&["H"]);
    assert_matches!(
        validate(&c, "atoms", &Value::List(Vec::new())),
        Err(KeywordError::Structure { keyword: "atoms", .. })
    );
}

// ---------------------------------------------------------------------------
// Cross-field preconditions
// ---------------------------------------------------------------------------

#[test]
fn ispin_one_always_succeeds() {
    let c = calc(&["Fe", "Fe"]);
    assert!(ok(&c, "ispin", 1));
}

#[test]
fn ispin_two_requires_matching_magmom() {
    let mut c = calc(&["Fe", "Fe"]);
    assert_matches!(
        validate(&c, "ispin", &Value::Int(2)),
        Err(KeywordError::CrossField { keyword: "ispin", .. })
    );

    c.set("magmom", vec![1.0, 1.0]).unwrap();
    assert!(ok(&c, "ispin", 2));

    c.set("atoms", Atoms::from_symbols(&["Fe", "Fe", "Fe"])).unwrap();
    assert_matches!(
        validate(&c, "ispin", &Value::Int(2)),
        Err(KeywordError::CrossField { keyword: "ispin", .. })
    );
}

#[test]
fn ispin_outside_one_or_two_fails() {
    let c = calc(&["Fe"]);
    assert_matches!(
        validate(&c, "ispin", &Value::Int(3)),
        Err(KeywordError::Domain { keyword: "ispin", .. })
    );
}

#[test]
fn lorbit_below_ten_requires_rwigs() {
    let mut c = calc(&["Pt"]);
    assert!(ok(&c, "lorbit", 11));
    assert_matches!(
        validate(&c, "lorbit", &Value::Int(0)),
        Err(KeywordError::CrossField { keyword: "lorbit", .. })
    );
    c.set("rwigs", map(&[("Pt", Value::Float(1.455))])).unwrap();
    assert!(ok(&c, "lorbit", 0));
}

#[test]
fn rwigs_is_rejected_when_lorbit_ignores_it() {
    let mut c = calc(&["Pt"]);
    let radii = map(&[("Pt", Value::Float(1.455))]);
    assert!(validate(&c, "rwigs", &radii).is_ok());
    c.set("lorbit", 11).unwrap();
    assert_matches!(
        validate(&c, "rwigs", &radii),
        Err(KeywordError::CrossField { keyword: "rwigs", .. })
    );
}

#[test]
fn images_must_match_the_neb() {
    let c = calc(&["H"]);
    assert_matches!(
        validate(&c, "images", &Value::Int(3)),
        Err(KeywordError::CrossField { keyword: "images", .. })
    );

    let frames = vec![Atoms::from_symbols(&["H", "H"]); 5];
    let neb = Calculator::for_neb(frames);
    assert!(ok(&neb, "images", 3));
    assert_matches!(
        validate(&neb, "images", &Value::Int(5)),
        Err(KeywordError::Structure { keyword: "images", .. })
    );
}

// ---------------------------------------------------------------------------
// Advisories and purity
// ---------------------------------------------------------------------------

#[test]
fn ialgo_passes_with_an_advisory() {
    let c = calc(&["Si"]);
    let validation = validate(&c, "ialgo", &Value::Int(38)).unwrap();
    assert!(validation.checked);
    assert_eq!(validation.advisories.len(), 1);
    assert!(validation.advisories[0].contains("algo"));
}

#[test]
fn spring_advises_unless_ibrion_supports_neb() {
    let mut c = calc(&["Si"]);
    assert_eq!(validate(&c, "spring", &Value::Int(-5)).unwrap().advisories.len(), 1);
    c.set("ibrion", 1).unwrap();
    assert!(validate(&c, "spring", &Value::Int(-5)).unwrap().advisories.is_empty());
}

#[test]
fn validation_is_idempotent() {
    let mut c = calc(&["Fe", "Fe"]);
    c.set("magmom", vec![1.0, 1.0]).unwrap();
    let before = c.clone();
    for (keyword, value) in [
        ("ispin", Value::Int(2)),
        ("ispin", Value::Int(5)),
        ("encut", Value::Float(-1.0)),
        ("ialgo", Value::Int(38)),
    ] {
        let first = validate(&c, keyword, &value);
        let second = validate(&c, keyword, &value);
        assert_eq!(first, second, "{keyword}");
    }
    assert_eq!(c.parameters(), before.parameters());
}
