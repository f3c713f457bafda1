//! Command-line interface.

pub mod lifecycle;
pub mod output;

use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use crate::core::backend::{Schema, VaultClient};
use crate::core::compose::Compose;
use crate::core::config::{ConnectionConfig, Settings};
use crate::core::domain::Lifecycle;
use crate::error::Result;

/// dcs - docker compose with secrets from Vault.
#[derive(Parser, Debug)]
#[command(
    name = "dcs",
    about = "Run docker compose with secrets fetched from Vault",
    version,
    after_help = "Example: dcs start"
)]
pub struct Cli {
    /// Lifecycle command to run
    #[arg(value_enum)]
    pub command: Lifecycle,

    /// Settings file (defaults to .dcs.toml when present)
    #[arg(short, long, env = "DCS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Response schema of the secret backend
    #[arg(long, value_enum)]
    pub schema: Option<Schema>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Execute a parsed command line.
///
/// Settings and connection parameters are resolved before anything touches
/// the network or spawns a process.
pub fn execute(cli: Cli) -> Result<()> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(schema) = cli.schema {
        settings.backend.schema = schema;
    }

    let connection = ConnectionConfig::resolve(&settings.backend.env)?;
    debug!(?connection, "connection resolved");

    let compose = Compose::new(&settings.compose.program)?;
    let vault = VaultClient::new(&connection, &settings.backend)?;

    lifecycle::Dispatcher::new(&vault, &compose).dispatch(cli.command)
}
