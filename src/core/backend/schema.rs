//! Response schemas spoken by secret backends.
//!
//! Two incompatible shapes exist in the wild:
//!
//! ```text
//! wrapped  GET {addr}/v1/secret/data/{path}
//!          { "errors": [..], "data": { "data": { "KEY": "value" } } }
//!
//! flat     GET {addr}/v1/secrets/data/{path}
//!          { "errors": [..], "KEY": "value" }
//! ```
//!
//! Both decode into a [`SecretMap`]. Decoding fails closed: any shape
//! mismatch is a single `SecretError::Malformed`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use crate::core::constants;
use crate::core::domain::SecretMap;
use crate::core::validation;
use crate::error::{Result, SecretError};

/// Response schema of the secret backend.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Schema {
    /// Secrets nested under `data.data`, served from `v1/secret/data`
    #[default]
    Wrapped,
    /// Secrets at the top level, served from `v1/secrets/data`
    Flat,
}

#[derive(Deserialize)]
struct WrappedBody {
    #[serde(default)]
    data: Option<WrappedData>,
}

#[derive(Deserialize)]
struct WrappedData {
    #[serde(default)]
    data: Option<BTreeMap<String, Value>>,
}

impl Schema {
    /// Endpoint prefix placed between the address and the secret path.
    pub fn mount(self) -> &'static str {
        match self {
            Schema::Wrapped => constants::WRAPPED_MOUNT,
            Schema::Flat => constants::FLAT_MOUNT,
        }
    }

    /// Decode a response body.
    ///
    /// A non-empty `errors` list wins over any data present. A missing or
    /// null secret map decodes to an empty map.
    ///
    /// # Errors
    ///
    /// Returns `SecretError::Remote` with the errors joined by `"; "`, or
    /// `SecretError::Malformed` if the body does not match the schema.
    pub fn decode(self, body: &[u8]) -> Result<SecretMap> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| SecretError::Malformed(format!("invalid JSON: {}", e)))?;

        check_errors(&value)?;

        let entries = match self {
            Schema::Wrapped => {
                let body: WrappedBody = serde_json::from_value(value).map_err(|e| {
                    SecretError::Malformed(format!("unexpected wrapped response: {}", e))
                })?;
                body.data.and_then(|d| d.data).unwrap_or_default()
            }
            Schema::Flat => match value {
                Value::Null => BTreeMap::new(),
                Value::Object(mut object) => {
                    object.remove("errors");
                    object.into_iter().collect()
                }
                other => {
                    return Err(SecretError::Malformed(format!(
                        "expected a JSON object, found {}",
                        kind(&other)
                    ))
                    .into())
                }
            },
        };

        into_secret_map(entries)
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Schema::Wrapped => "wrapped",
            Schema::Flat => "flat",
        })
    }
}

/// Fail with the joined error list if the body reports any errors.
fn check_errors(value: &Value) -> Result<()> {
    let errors = match value.get("errors") {
        None | Some(Value::Null) => return Ok(()),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(SecretError::Malformed(format!(
                "`errors` must be a list, found {}",
                kind(other)
            ))
            .into())
        }
    };

    let messages = errors
        .iter()
        .map(|item| match item {
            Value::String(msg) => Ok(msg.as_str()),
            other => Err(SecretError::Malformed(format!(
                "`errors` must contain strings, found {}",
                kind(other)
            ))),
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    if messages.is_empty() {
        return Ok(());
    }

    Err(SecretError::Remote(messages.join("; ")).into())
}

fn into_secret_map(entries: BTreeMap<String, Value>) -> Result<SecretMap> {
    let mut secrets = SecretMap::new();

    for (key, value) in entries {
        validation::validate_key(&key)?;
        match value {
            Value::String(value) => {
                validation::validate_value(&key, &value)?;
                secrets.insert(key, value);
            }
            other => {
                return Err(SecretError::Malformed(format!(
                    "value for secret `{}` must be a string, found {}",
                    key,
                    kind(&other)
                ))
                .into())
            }
        }
    }

    Ok(secrets)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
