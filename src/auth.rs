//! Key classes and authentication headers
//!
//! Omise authenticates with HTTP basic auth: the key is the user name and
//! the password is empty. Which key is sent depends on the operation, so
//! the key class is carried in the type of each operation set (see
//! [`PublicOperations`](crate::client::PublicOperations) and
//! [`SecretOperations`](crate::client::SecretOperations)).

use crate::config::ClientConfig;
use crate::{OmiseError, Result, USER_AGENT};
use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT as USER_AGENT_HEADER,
};

/// Header carrying the pinned API version
pub const OMISE_VERSION_HEADER: &str = "omise-version";

/// Which configured key a request is signed with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Client-safe key for tokens and sources
    Public,
    /// Server-only key for customers and charges
    Secret,
}

impl KeyKind {
    /// Pick the matching key out of a config
    pub fn select(self, config: &ClientConfig) -> &str {
        match self {
            KeyKind::Public => &config.public_key,
            KeyKind::Secret => &config.secret_key,
        }
    }

    /// Lowercase name used in messages and logs
    pub fn as_str(self) -> &'static str {
        match self {
            KeyKind::Public => "public",
            KeyKind::Secret => "secret",
        }
    }
}

pub(crate) mod private {
    pub trait Sealed {}
}

/// Type-level key class. Implemented only by [`PublicKey`] and [`SecretKey`].
pub trait KeyClass: private::Sealed {
    const KIND: KeyKind;
}

/// Marker for operations signed with the public key
#[derive(Debug, Clone, Copy)]
pub enum PublicKey {}

/// Marker for operations signed with the secret key
#[derive(Debug, Clone, Copy)]
pub enum SecretKey {}

impl private::Sealed for PublicKey {}
impl private::Sealed for SecretKey {}

impl KeyClass for PublicKey {
    const KIND: KeyKind = KeyKind::Public;
}

impl KeyClass for SecretKey {
    const KIND: KeyKind = KeyKind::Secret;
}

/// `Basic base64("<key>:")`
pub fn basic_auth(key: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:", key)))
}

/// Build the headers sent with every request.
///
/// An empty key is not an error here; operations check for it before
/// calling this.
pub fn build_headers(config: &ClientConfig, kind: KeyKind) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    let mut authorization = header_value("Authorization", &basic_auth(kind.select(config)))?;
    authorization.set_sensitive(true);
    headers.insert(AUTHORIZATION, authorization);
    headers.insert(USER_AGENT_HEADER, HeaderValue::from_static(USER_AGENT));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if !config.api_version.is_empty() {
        headers.insert(
            HeaderName::from_static(OMISE_VERSION_HEADER),
            header_value("Omise-Version", &config.api_version)?,
        );
    }

    Ok(headers)
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| OmiseError::invalid_header(format!("{} header: {}", name, e)))
}
