//! Configuration.
//!
//! Two layers:
//! - [`Settings`]: optional `.dcs.toml` describing *how* to reach the backend
//!   and which program to run. Falls back to built-in defaults.
//! - [`ConnectionConfig`]: the address, token and path read from the
//!   environment variables named by the settings. Resolved once per run.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use crate::core::backend::Schema;
use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Settings loaded from `.dcs.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Secret backend settings
    pub backend: BackendSettings,
    /// Orchestration program settings
    pub compose: ComposeSettings,
}

/// How to talk to the secret backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackendSettings {
    /// Response schema, which also selects the endpoint prefix
    pub schema: Schema,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Header carrying the access token
    pub token_header: String,
    /// Names of the environment variables holding the connection parameters
    pub env: EnvNames,
}

/// Names of the environment variables read by [`ConnectionConfig::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvNames {
    pub address: String,
    pub token: String,
    pub path: String,
}

/// Which orchestration program to run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComposeSettings {
    /// Program name (looked up on PATH) or path
    pub program: String,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            schema: Schema::default(),
            timeout_secs: constants::DEFAULT_TIMEOUT_SECS,
            token_header: constants::TOKEN_HEADER.to_string(),
            env: EnvNames::default(),
        }
    }
}

impl Default for EnvNames {
    fn default() -> Self {
        Self {
            address: constants::ADDRESS_ENV.to_string(),
            token: constants::TOKEN_ENV.to_string(),
            path: constants::PATH_ENV.to_string(),
        }
    }
}

impl Default for ComposeSettings {
    fn default() -> Self {
        Self {
            program: constants::COMPOSE_PROGRAM.to_string(),
        }
    }
}

impl BackendSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Settings {
    /// Load settings.
    ///
    /// An explicit `path` must exist. Without one, `.dcs.toml` in the current
    /// directory is used if present, otherwise defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` or `ConfigError::Parse` if the file cannot
    /// be read or parsed, and `ConfigError::InvalidValue` if it fails
    /// validation.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(constants::CONFIG_FILE);
                if !default.exists() {
                    debug!("no settings file, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };

        debug!(path = %path.display(), "loading settings");
        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let settings: Self =
            toml::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })?;
        settings.validate()?;

        debug!(
            schema = %settings.backend.schema,
            program = %settings.compose.program,
            "settings loaded"
        );
        Ok(settings)
    }

    /// Parse and validate settings from TOML text not backed by a file.
    pub fn parse(contents: &str) -> Result<Self> {
        let settings: Self = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that no setting is blank and the timeout is non-zero.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("backend.token_header", &self.backend.token_header),
            ("backend.env.address", &self.backend.env.address),
            ("backend.env.token", &self.backend.env.token),
            ("backend.env.path", &self.backend.env.path),
            ("compose.program", &self.compose.program),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must not be empty".to_string(),
                }
                .into());
            }
        }

        if self.backend.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "backend.timeout_secs",
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Connection parameters for the secret backend.
///
/// All three fields are non-empty once constructed.
#[derive(Clone)]
pub struct ConnectionConfig {
    address: String,
    token: Zeroizing<String>,
    path: String,
}

impl ConnectionConfig {
    /// Resolve connection parameters from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvironment` listing every empty or unset
    /// variable, or `ConfigError::InvalidAddress` if the address is not an
    /// absolute URL.
    pub fn resolve(names: &EnvNames) -> Result<Self> {
        Self::from_lookup(names, |name| std::env::var(name).ok())
    }

    /// Resolve connection parameters through an arbitrary lookup.
    pub fn from_lookup<F>(names: &EnvNames, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let address = read(&names.address);
        let token = read(&names.token);
        let path = read(&names.path);

        let missing: Vec<String> = [
            (&names.address, address.is_none()),
            (&names.token, token.is_none()),
            (&names.path, path.is_none()),
        ]
        .into_iter()
        .filter(|(_, missing)| *missing)
        .map(|(name, _)| name.clone())
        .collect();

        match (address, token, path) {
            (Some(address), Some(token), Some(path)) => Self::new(&address, token, &path),
            _ => Err(ConfigError::MissingEnvironment(missing).into()),
        }
    }

    /// Build from explicit values, normalizing the address and path.
    pub fn new(address: &str, token: String, path: &str) -> Result<Self> {
        let address = address.trim().trim_end_matches('/');
        match reqwest::Url::parse(address) {
            Ok(url) if url.has_host() => {}
            Ok(_) => {
                return Err(ConfigError::InvalidAddress {
                    address: address.to_string(),
                    reason: "missing host".to_string(),
                }
                .into())
            }
            Err(err) => {
                return Err(ConfigError::InvalidAddress {
                    address: address.to_string(),
                    reason: err.to_string(),
                }
                .into())
            }
        }

        let path = path.trim().trim_matches('/');
        if path.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "path",
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        let mut token = token;
        let trimmed = Zeroizing::new(token.trim().to_string());
        token.zeroize();

        Ok(Self {
            address: address.to_string(),
            token: trimmed,
            path: path.to_string(),
        })
    }

    /// Backend address without a trailing slash.
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Secret path without leading or trailing slashes.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("address", &self.address)
            .field("token", &"<redacted>")
            .field("path", &self.path)
            .finish()
    }
}
