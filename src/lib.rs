//! dcs - docker compose with secrets from Vault.
//!
//! Fetches key/value secrets from a Vault-style HTTP backend and runs
//! `docker compose` with them injected as environment variables.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── lifecycle     # start / stop / restart / update dispatch
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # .dcs.toml settings and connection parameters
//!     ├── backend/      # Secret backends
//!     │   ├── mod       # SecretSource trait
//!     │   ├── schema    # Wrapped and flat response decoding
//!     │   └── vault     # HTTP client
//!     ├── env           # Secret / environment merging
//!     ├── compose       # Orchestrator trait and compose invoker
//!     ├── validation    # Secret key and value checks
//!     └── domain/       # SecretMap, ChildEnv, Lifecycle
//! ```
//!
//! # Flow
//!
//! One invocation runs one lifecycle command: resolve configuration, fetch
//! secrets if a step needs them, merge them over the inherited environment,
//! run compose, exit.

pub mod cli;
pub mod core;
pub mod error;
