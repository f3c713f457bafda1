//! Vault HTTP backend.
//!
//! Issues a single authenticated GET against the KV endpoint and decodes the
//! answer with the configured [`Schema`]. The request runs on a throwaway
//! current-thread runtime so the rest of dcs stays synchronous.

use reqwest::header::{HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use tracing::debug;

use super::{Schema, SecretSource};
use crate::core::config::{BackendSettings, ConnectionConfig};
use crate::core::domain::SecretMap;
use crate::error::{ConfigError, Error, Result, SecretError};

const JSON: &str = "application/json";

/// Client for a Vault-style secret backend.
pub struct VaultClient {
    client: Client,
    url: String,
    schema: Schema,
    token_header: HeaderName,
    token: HeaderValue,
}

impl std::fmt::Debug for VaultClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultClient")
            .field("url", &self.url)
            .field("schema", &self.schema)
            .field("token_header", &self.token_header)
            .finish_non_exhaustive()
    }
}

impl VaultClient {
    /// Create a client for the given connection.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the token or header name cannot
    /// be used in an HTTP header, or `SecretError::Transport` if the HTTP
    /// client cannot be built.
    pub fn new(connection: &ConnectionConfig, settings: &BackendSettings) -> Result<Self> {
        let token_header = HeaderName::from_bytes(settings.token_header.as_bytes()).map_err(|e| {
            ConfigError::InvalidValue {
                field: "backend.token_header",
                reason: e.to_string(),
            }
        })?;

        let mut token =
            HeaderValue::from_str(connection.token()).map_err(|_| ConfigError::InvalidValue {
                field: "token",
                reason: "contains characters not allowed in an HTTP header".to_string(),
            })?;
        token.set_sensitive(true);

        let client = Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(SecretError::Transport)?;

        let url = format!(
            "{}/{}/{}",
            connection.address(),
            settings.schema.mount(),
            connection.path()
        );

        Ok(Self {
            client,
            url,
            schema: settings.schema,
            token_header,
            token,
        })
    }

    /// Full URL of the secret endpoint.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and decode secrets.
    ///
    /// A 404 without reported errors means nothing is stored at the path and
    /// yields an empty map.
    pub async fn fetch_async(&self) -> Result<SecretMap> {
        debug!(url = %self.url, schema = %self.schema, "fetching secrets");

        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, JSON)
            .header(CONTENT_TYPE, JSON)
            .header(self.token_header.clone(), self.token.clone())
            .send()
            .await
            .map_err(SecretError::Transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(SecretError::Transport)?;
        debug!(status = status.as_u16(), bytes = body.len(), "secret backend responded");

        let decoded = self.schema.decode(&body);
        if status.is_success() {
            return decoded;
        }

        match decoded {
            Err(err @ Error::Secret(SecretError::Remote(_))) => Err(err),
            _ if status == StatusCode::NOT_FOUND => {
                debug!("nothing stored at secret path");
                Ok(SecretMap::new())
            }
            _ => Err(SecretError::Remote(format!("unexpected HTTP status {}", status)).into()),
        }
    }
}

impl SecretSource for VaultClient {
    fn fetch(&self) -> Result<SecretMap> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(SecretError::Runtime)?;

        let secrets = rt.block_on(self.fetch_async())?;
        debug!(count = secrets.len(), keys = ?secrets.keys().collect::<Vec<_>>(), "secrets fetched");
        Ok(secrets)
    }
}
