//! Subcommand execution.
//!
//! Each command renders its output as a string so `main` owns the
//! process streams and exit code.

use incar_core::{introspection, UnknownKeywordPolicy, ValidatorConfig};

use crate::args::Command;
use crate::deck::{DeckError, InputDeck};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("no rule for keyword {0}")]
    UnknownKeyword(String),

    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Run `command` with `config` as the base settings. Flags on `check`
/// only ever tighten them.
pub fn run(command: Command, config: &ValidatorConfig) -> Result<String, CliError> {
    match command {
        Command::Keywords => Ok(introspection::keywords()),
        Command::Alist => Ok(introspection::keyword_alist()),
        Command::Describe { keyword } => introspection::describe(&keyword)
            .map(str::to_string)
            .ok_or(CliError::UnknownKeyword(keyword)),
        Command::Check {
            file,
            reject_unknown,
            strict,
        } => {
            let mut config = config.clone();
            if reject_unknown {
                config.unknown_keywords = UnknownKeywordPolicy::Reject;
            }
            config.advisories_as_errors |= strict;

            tracing::debug!(path = %file.display(), ?config, "Checking deck");
            let deck = InputDeck::load(&file)?;
            let report = deck.check(config).map_err(DeckError::from)?;
            Ok(report.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn describe_unknown_keyword_fails() {
        let result = run(
            Command::Describe {
                keyword: "nope".into(),
            },
            &ValidatorConfig::default(),
        );
        assert_matches!(result, Err(CliError::UnknownKeyword(k)) if k == "nope");
    }

    #[test]
    fn keywords_lists_registry() {
        let out = run(Command::Keywords, &ValidatorConfig::default()).unwrap();
        assert!(out.contains("\"ispin\""));
    }
}
