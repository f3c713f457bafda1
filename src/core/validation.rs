//! Validation for secrets received from the backend.
//!
//! Secrets end up as environment variables of a child process, so their
//! names and values must be representable there.

use crate::error::{Result, SecretError};

/// Validate a secret key name.
///
/// Secret keys must be usable as environment variable names:
/// - Cannot be empty
/// - Cannot contain `=`
/// - Cannot contain NUL
///
/// # Errors
///
/// Returns `SecretError::Malformed` if the key is invalid.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(SecretError::Malformed("empty secret key".to_string()).into());
    }

    if let Some(ch) = key.chars().find(|c| *c == '=' || *c == '\0') {
        return Err(SecretError::Malformed(format!(
            "secret key `{}` contains invalid character {:?}",
            key.escape_default(),
            ch
        ))
        .into());
    }

    Ok(())
}

/// Validate a secret value.
///
/// Values may be empty but cannot contain NUL. The error names the key only.
///
/// # Errors
///
/// Returns `SecretError::Malformed` if the value contains NUL.
pub fn validate_value(key: &str, value: &str) -> Result<()> {
    if value.contains('\0') {
        return Err(SecretError::Malformed(format!(
            "value for secret `{}` contains a NUL byte",
            key
        ))
        .into());
    }

    Ok(())
}
