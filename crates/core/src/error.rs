use crate::types::ValueKind;

/// A rejected keyword assignment.
///
/// Every variant renders a message meant to be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KeywordError {
    #[error("{keyword}: expected {expected}, got {found}")]
    Type {
        keyword: &'static str,
        expected: &'static str,
        found: ValueKind,
    },

    #[error("{keyword}: {message}")]
    Domain {
        keyword: &'static str,
        message: String,
    },

    #[error("{keyword}: {message}")]
    Structure {
        keyword: &'static str,
        message: String,
    },

    #[error("{keyword}: {message}")]
    CrossField {
        keyword: &'static str,
        message: String,
    },

    #[error("Unknown keyword: {0}")]
    UnknownKeyword(String),

    /// An advisory promoted to an error by `ValidatorConfig::advisories_as_errors`.
    #[error("{keyword}: {message}")]
    Advisory {
        keyword: &'static str,
        message: String,
    },

    /// The context could not supply a derived quantity a rule needs.
    #[error("Context error: {0}")]
    Context(String),

    #[error("Unknown extension: {0}")]
    UnknownExtension(String),
}

pub type KeywordResult<T> = Result<T, KeywordError>;

/// An environment variable held a value the validator cannot interpret.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be one of {expected}, got '{value}'")]
    InvalidValue {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}
