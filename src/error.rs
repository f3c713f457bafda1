//! Error types for dcs.
//!
//! Every failure is fatal: errors propagate to `main`, which prints them and
//! exits non-zero. Nothing here is retried.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Secret(#[from] SecretError),

    #[error(transparent)]
    Exec(#[from] ExecError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration errors, raised before any network or subprocess activity.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("environment variable(s) empty or unset: {}", .0.join(", "))]
    MissingEnvironment(Vec<String>),

    #[error("invalid secret backend address `{address}`: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Errors talking to the secret backend or decoding its answer.
#[derive(Error, Debug)]
pub enum SecretError {
    #[error("failed to reach secret backend: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("secret backend error: {0}")]
    Remote(String),

    #[error("malformed secret response: {0}")]
    Malformed(String),

    #[error("failed to start http runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Errors launching or running the orchestration program.
#[derive(Error, Debug)]
pub enum ExecError {
    #[error("`{0}` not found on PATH")]
    NotFound(String),

    #[error("failed to launch `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` {}", describe_exit(.code))]
    Failed { command: String, code: Option<i32> },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {}", code),
        None => "was terminated by a signal".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, Error>;
