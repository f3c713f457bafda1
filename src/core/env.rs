//! Environment merging.
//!
//! Builds the environment of a compose subprocess from the inherited process
//! environment plus fetched secrets. Only key names and counts are logged.

use tracing::{debug, info};

use crate::core::domain::{ChildEnv, SecretMap};

/// Merge secrets over the current process environment.
pub fn merge(secrets: &SecretMap) -> ChildEnv {
    merge_into(ChildEnv::inherited(), secrets)
}

/// Merge secrets over an explicit base environment.
///
/// Secrets are appended after the base entries, so a secret overrides any
/// inherited variable with the same name. With no secrets the base is
/// returned unchanged.
pub fn merge_into(mut base: ChildEnv, secrets: &SecretMap) -> ChildEnv {
    if secrets.is_empty() {
        info!("no secrets found, continuing without secrets");
        return base;
    }

    for (key, value) in secrets.iter() {
        if base.get(key).is_some() {
            debug!(key, "secret overrides inherited variable");
        }
        base.push(key, value);
    }

    debug!(count = secrets.len(), "merged secrets into child environment");
    base
}
