//! CLI argument definitions using clap
//!
//! Commands:
//! - incar keywords
//! - incar alist
//! - incar describe <KEYWORD>
//! - incar check <FILE> [--reject-unknown] [--strict]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// incar - validate VASP calculator keywords
#[derive(Parser, Debug)]
#[command(name = "incar")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Print every validated keyword as an Emacs Lisp list
    Keywords,

    /// Print (keyword summary) pairs as an Emacs Lisp alist
    Alist,

    /// Print the full documentation of one keyword
    Describe {
        /// Keyword name, in any case
        keyword: String,
    },

    /// Validate a JSON input deck
    Check {
        /// Path to the deck
        file: PathBuf,

        /// Fail on keywords that have no rule
        #[arg(long)]
        reject_unknown: bool,

        /// Treat advisories as errors
        #[arg(long)]
        strict: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
