//! Constants used throughout dcs.
//!
//! Centralizes default names, endpoints and headers. Most of these can be
//! overridden from the settings file.

/// Settings file looked up in the working directory (.dcs.toml).
pub const CONFIG_FILE: &str = ".dcs.toml";

/// Environment variable holding an explicit settings file path.
pub const CONFIG_ENV: &str = "DCS_CONFIG";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "DCS_LOG";

/// Default variable holding the secret backend address.
pub const ADDRESS_ENV: &str = "VAULT_ADDR";

/// Default variable holding the access token.
pub const TOKEN_ENV: &str = "VAULT_TOKEN";

/// Default variable holding the secret path.
pub const PATH_ENV: &str = "VAULT_PATH";

/// Default header carrying the access token.
pub const TOKEN_HEADER: &str = "X-Vault-Token";

/// Endpoint prefix for the data-wrapped response schema.
pub const WRAPPED_MOUNT: &str = "v1/secret/data";

/// Endpoint prefix for the flat response schema.
pub const FLAT_MOUNT: &str = "v1/secrets/data";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default orchestration program.
pub const COMPOSE_PROGRAM: &str = "docker";
