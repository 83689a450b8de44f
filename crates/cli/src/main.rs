//! `incar` -- VASP keyword validation from the command line.
//!
//! # Environment variables
//!
//! | Variable                     | Required | Default       | Description                          |
//! |------------------------------|----------|---------------|--------------------------------------|
//! | `INCAR_UNKNOWN_KEYWORDS`     | no       | `accept`      | `accept` or `reject` keywords with no rule |
//! | `INCAR_ADVISORIES_AS_ERRORS` | no       | `false`       | Fail on advisories instead of warning |
//! | `RUST_LOG`                   | no       | `incar=info`  | Log filter                           |

use std::process::ExitCode;

use anyhow::Context;
use incar_cli::args::Cli;
use incar_cli::commands;
use incar_core::ValidatorConfig;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "incar=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse_args();

    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let config = ValidatorConfig::from_env().context("invalid configuration")?;
    Ok(commands::run(cli.command, &config)?)
}
