use crate::error::ConfigError;

/// What dispatch does with a keyword that has no rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownKeywordPolicy {
    /// Store the value unchecked.
    #[default]
    Accept,
    /// Fail with `KeywordError::UnknownKeyword`.
    Reject,
}

impl UnknownKeywordPolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "accept" => Some(Self::Accept),
            "reject" => Some(Self::Reject),
            _ => None,
        }
    }
}

/// Dispatch settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatorConfig {
    pub unknown_keywords: UnknownKeywordPolicy,
    /// Promote advisories (e.g. deprecated keyword use) to errors.
    pub advisories_as_errors: bool,
}

impl ValidatorConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                      | Default  |
    /// |------------------------------|----------|
    /// | `INCAR_UNKNOWN_KEYWORDS`     | `accept` |
    /// | `INCAR_ADVISORIES_AS_ERRORS` | `false`  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reading from `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let unknown_keywords = match lookup("INCAR_UNKNOWN_KEYWORDS") {
            None => UnknownKeywordPolicy::default(),
            Some(raw) => {
                UnknownKeywordPolicy::parse(&raw).ok_or(ConfigError::InvalidValue {
                    var: "INCAR_UNKNOWN_KEYWORDS",
                    expected: "accept, reject",
                    value: raw,
                })?
            }
        };

        let advisories_as_errors = match lookup("INCAR_ADVISORIES_AS_ERRORS") {
            None => false,
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidValue {
                var: "INCAR_ADVISORIES_AS_ERRORS",
                expected: "true, false, 1, 0",
                value: raw,
            })?,
        };

        Ok(Self {
            unknown_keywords,
            advisories_as_errors,
        })
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
