//! Exchange-correlation presets.
//!
//! Each preset names a functional and the INCAR settings that select it.
//! The `xc` rule accepts exactly the preset names listed here.

use crate::parameters::Parameters;
use crate::types::Value;

/// A constant INCAR setting inside a preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Setting {
    Text(&'static str),
    Float(f64),
    Bool(bool),
}

impl From<Setting> for Value {
    fn from(setting: Setting) -> Self {
        match setting {
            Setting::Text(s) => Value::from(s),
            Setting::Float(x) => Value::Float(x),
            Setting::Bool(b) => Value::Bool(b),
        }
    }
}

#[derive(Debug)]
pub struct XcPreset {
    pub name: &'static str,
    pub settings: &'static [(&'static str, Setting)],
}

use Setting::{Bool, Float, Text};

pub const PRESETS: &[XcPreset] = &[
    XcPreset {
        name: "lda",
        settings: &[("pp", Text("LDA"))],
    },
    XcPreset {
        name: "pbe",
        settings: &[("pp", Text("PBE"))],
    },
    XcPreset {
        name: "pw91",
        settings: &[("pp", Text("GGA")), ("gga", Text("91"))],
    },
    XcPreset {
        name: "pbesol",
        settings: &[("pp", Text("PBE")), ("gga", Text("PS"))],
    },
    XcPreset {
        name: "revpbe",
        settings: &[("pp", Text("PBE")), ("gga", Text("RE"))],
    },
    XcPreset {
        name: "rpbe",
        settings: &[("pp", Text("PBE")), ("gga", Text("RP"))],
    },
    XcPreset {
        name: "am05",
        settings: &[("pp", Text("PBE")), ("gga", Text("AM"))],
    },
    XcPreset {
        name: "optpbe-vdw",
        settings: &[
            ("pp", Text("PBE")),
            ("gga", Text("OR")),
            ("luse_vdw", Bool(true)),
            ("aggac", Float(0.0)),
        ],
    },
    XcPreset {
        name: "optb88-vdw",
        settings: &[
            ("pp", Text("PBE")),
            ("gga", Text("BO")),
            ("luse_vdw", Bool(true)),
            ("aggac", Float(0.0)),
            ("param1", Float(1.1 / 6.0)),
            ("param2", Float(0.22)),
        ],
    },
    XcPreset {
        name: "optb86b-vdw",
        settings: &[
            ("pp", Text("PBE")),
            ("gga", Text("MK")),
            ("luse_vdw", Bool(true)),
            ("aggac", Float(0.0)),
            ("param1", Float(0.1234)),
            ("param2", Float(1.0)),
        ],
    },
    XcPreset {
        name: "vdw-df2",
        settings: &[
            ("pp", Text("PBE")),
            ("gga", Text("ML")),
            ("luse_vdw", Bool(true)),
            ("aggac", Float(0.0)),
            ("zab_vdw", Float(-1.8867)),
        ],
    },
    XcPreset {
        name: "beef-vdw",
        settings: &[
            ("pp", Text("PBE")),
            ("gga", Text("BF")),
            ("luse_vdw", Bool(true)),
            ("zab_vdw", Float(-1.8867)),
            ("lbeefens", Bool(true)),
        ],
    },
    XcPreset {
        name: "pbe0",
        settings: &[
            ("pp", Text("PBE")),
            ("gga", Text("PE")),
            ("lhfcalc", Bool(true)),
        ],
    },
    XcPreset {
        name: "hse03",
        settings: &[
            ("pp", Text("PBE")),
            ("gga", Text("PE")),
            ("lhfcalc", Bool(true)),
            ("hfscreen", Float(0.3)),
        ],
    },
    XcPreset {
        name: "hse06",
        settings: &[
            ("pp", Text("PBE")),
            ("gga", Text("PE")),
            ("lhfcalc", Bool(true)),
            ("hfscreen", Float(0.2)),
        ],
    },
    XcPreset {
        name: "b3lyp",
        settings: &[
            ("pp", Text("PBE")),
            ("gga", Text("B3")),
            ("lhfcalc", Bool(true)),
            ("aexx", Float(0.2)),
            ("aggax", Float(0.72)),
            ("aggac", Float(0.81)),
            ("aldac", Float(0.19)),
        ],
    },
    XcPreset {
        name: "hf",
        settings: &[
            ("pp", Text("PBE")),
            ("lhfcalc", Bool(true)),
            ("aexx", Float(1.0)),
            ("aldac", Float(0.0)),
            ("aggac", Float(0.0)),
        ],
    },
];

/// All preset names, lowercase.
pub fn names() -> Vec<&'static str> {
    PRESETS.iter().map(|p| p.name).collect()
}

pub fn preset(name: &str) -> Option<&'static XcPreset> {
    let name = name.to_ascii_lowercase();
    PRESETS.iter().find(|p| p.name == name)
}

/// The INCAR settings implied by preset `name`.
pub fn defaults(name: &str) -> Option<Parameters> {
    preset(name).map(|p| {
        p.settings
            .iter()
            .map(|(key, setting)| (*key, Value::from(*setting)))
            .collect()
    })
}
