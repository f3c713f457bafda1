//! dcs - docker compose with secrets from Vault.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dcs::cli::output;
use dcs::cli::{execute, Cli};
use dcs::core::constants;
use dcs::error::{ConfigError, Error, ExecError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("dcs=debug")
        } else {
            EnvFilter::new("dcs=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Config(ConfigError::MissingEnvironment(_)) => {
                Some("export the variables above, or rename them in .dcs.toml [backend.env]")
            }
            Error::Exec(ExecError::NotFound(_)) => {
                Some("install docker, or set [compose] program in .dcs.toml")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
