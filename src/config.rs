//! Client configuration

use crate::{OmiseError, Result, API_ENDPOINT, DEFAULT_API_VERSION, VAULT_ENDPOINT};
use std::time::Duration;
use url::Url;

/// Keys, API version and endpoints used by an [`OmiseClient`](crate::OmiseClient).
///
/// Keys are not checked here. An operation that needs a key which is
/// empty fails with [`OmiseError::Config`] before any request is sent.
#[derive(Clone)]
pub struct ClientConfig {
    /// Public key, used for tokens and sources
    pub public_key: String,
    /// Secret key, used for customers and charges
    pub secret_key: String,
    /// Value of the `Omise-Version` header; empty disables the header
    pub api_version: String,
    /// Base URL of the vault host
    pub vault_url: String,
    /// Base URL of the API host
    pub api_url: String,
    /// Request timeout
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("public_key", &redact(&self.public_key))
            .field("secret_key", &redact(&self.secret_key))
            .field("api_version", &self.api_version)
            .field("vault_url", &self.vault_url)
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn redact(key: &str) -> &'static str {
    if key.is_empty() {
        "<unset>"
    } else {
        "<redacted>"
    }
}

impl ClientConfig {
    /// Create a new config with the default API version and endpoints
    pub fn new(public_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            secret_key: secret_key.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            vault_url: VAULT_ENDPOINT.to_string(),
            api_url: API_ENDPOINT.to_string(),
            timeout: None,
        }
    }

    /// Set the API version
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Set the vault base URL
    pub fn with_vault_url(mut self, url: impl Into<String>) -> Self {
        self.vault_url = url.into();
        self
    }

    /// Set the API base URL
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate the endpoints
    pub fn validate(&self) -> Result<()> {
        validate_base_url("vault", &self.vault_url)?;
        validate_base_url("API", &self.api_url)
    }

    /// Key for the given class, or a configuration error when it is empty
    pub(crate) fn require_key(&self, kind: crate::auth::KeyKind) -> Result<&str> {
        let key = kind.select(self);
        if key.is_empty() {
            return Err(OmiseError::config(format!(
                "Please configure your {} key",
                kind.as_str()
            )));
        }
        Ok(key)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("", "")
    }
}

fn validate_base_url(name: &str, raw: &str) -> Result<()> {
    let url = Url::parse(raw)
        .map_err(|e| OmiseError::config(format!("Invalid {} URL '{}': {}", name, raw, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(OmiseError::config(format!(
            "{} URL must start with http:// or https://",
            name
        )));
    }

    Ok(())
}
