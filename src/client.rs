//! HTTP client for the Omise API

use crate::auth::{build_headers, KeyClass, PublicKey, SecretKey};
use crate::config::ClientConfig;
use crate::{OmiseError, Result, DEFAULT_API_VERSION};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::header::{HeaderValue, CACHE_CONTROL};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::marker::PhantomData;
use tracing::{debug, warn};

/// Characters escaped in a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Client for the Omise payment API
#[derive(Debug, Clone)]
pub struct OmiseClient {
    /// Underlying HTTP client
    client: Client,
    config: ClientConfig,
}

impl OmiseClient {
    /// Create a client from an explicit configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut client_builder = Client::builder();
        if let Some(timeout) = config.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder
            .build()
            .map_err(|e| OmiseError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Create a client with the given keys and default settings
    pub fn with_keys(public_key: impl Into<String>, secret_key: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::new(public_key, secret_key))
    }

    /// Current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Replace both keys and reset the API version to the default
    pub fn configure(&mut self, public_key: impl Into<String>, secret_key: impl Into<String>) {
        self.configure_with_version(public_key, secret_key, DEFAULT_API_VERSION);
    }

    /// Replace both keys and the API version. An empty version drops the
    /// `Omise-Version` header.
    pub fn configure_with_version(
        &mut self,
        public_key: impl Into<String>,
        secret_key: impl Into<String>,
        api_version: impl Into<String>,
    ) {
        self.config.public_key = public_key.into();
        self.config.secret_key = secret_key.into();
        self.config.api_version = api_version.into();
    }

    /// Operations signed with the public key
    pub fn public(&self) -> PublicOperations<'_> {
        PublicOperations {
            inner: Operations::new(self),
        }
    }

    /// Operations signed with the secret key
    pub fn secret(&self) -> SecretOperations<'_> {
        SecretOperations {
            inner: Operations::new(self),
        }
    }

    /// See [`PublicOperations::create_token`]
    pub async fn create_token<T: Serialize + ?Sized>(&self, data: &T) -> Result<Value> {
        self.public().create_token(data).await
    }

    /// See [`PublicOperations::create_source`]
    pub async fn create_source<T: Serialize + ?Sized>(&self, data: &T) -> Result<Value> {
        self.public().create_source(data).await
    }

    /// See [`SecretOperations::create_customer_with_card`]
    pub async fn create_customer_with_card<T: Serialize + ?Sized>(&self, data: &T) -> Result<Value> {
        self.secret().create_customer_with_card(data).await
    }

    /// See [`SecretOperations::create_charge`]
    #[doc(alias = "create_charges")]
    pub async fn create_charge<T: Serialize + ?Sized>(&self, data: &T) -> Result<Value> {
        self.secret().create_charge(data).await
    }

    /// See [`SecretOperations::attach_card_to_customer`]
    pub async fn attach_card_to_customer<T: Serialize + ?Sized>(
        &self,
        customer_id: &str,
        data: &T,
    ) -> Result<Value> {
        self.secret().attach_card_to_customer(customer_id, data).await
    }

    /// See [`SecretOperations::update_customer`]
    pub async fn update_customer<T: Serialize + ?Sized>(
        &self,
        customer_id: &str,
        data: &T,
    ) -> Result<Value> {
        self.secret().update_customer(customer_id, data).await
    }
}

/// Request issuer shared by both operation sets. `K` fixes which key
/// signs every request it sends.
#[derive(Debug, Clone, Copy)]
struct Operations<'a, K: KeyClass> {
    client: &'a OmiseClient,
    _key: PhantomData<K>,
}

impl<'a, K: KeyClass> Operations<'a, K> {
    fn new(client: &'a OmiseClient) -> Self {
        Self {
            client,
            _key: PhantomData,
        }
    }

    fn vault_url(&self, path: &str) -> String {
        join_url(&self.client.config.vault_url, path)
    }

    fn api_url(&self, path: &str) -> String {
        join_url(&self.client.config.api_url, path)
    }

    /// Send one request and map the response.
    ///
    /// Only `200 OK` counts as success; any other status, 201 included,
    /// is returned as [`OmiseError::Api`] carrying the response body.
    async fn send<T: Serialize + ?Sized>(&self, method: Method, url: String, data: &T) -> Result<Value> {
        let config = &self.client.config;
        config.require_key(K::KIND)?;

        let headers = build_headers(config, K::KIND)?;
        let body = serde_json::to_vec(data)?;

        debug!(%method, %url, key = K::KIND.as_str(), "Sending Omise request");

        let response = self
            .client
            .client
            .request(method, &url)
            .headers(headers)
            .header(CACHE_CONTROL, HeaderValue::from_static("no-cache"))
            .body(body)
            .send()
            .await
            .map_err(|e| {
                warn!("Omise request to {} failed: {}", url, e);
                OmiseError::Transport(e)
            })?;

        let status = response.status();
        let text = response.text().await?;

        if status != StatusCode::OK {
            warn!(%status, %url, "Omise response not ok");
            let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
            return Err(OmiseError::api(status, body));
        }

        Ok(serde_json::from_str(&text)?)
    }
}

/// Operations that only need the public key. Safe to use from
/// untrusted clients.
#[derive(Debug, Clone, Copy)]
pub struct PublicOperations<'a> {
    inner: Operations<'a, PublicKey>,
}

impl PublicOperations<'_> {
    /// `POST {vault}/tokens`: tokenize card details
    pub async fn create_token<T: Serialize + ?Sized>(&self, data: &T) -> Result<Value> {
        let url = self.inner.vault_url("tokens");
        self.inner.send(Method::POST, url, data).await
    }

    /// `POST {api}/sources`: create a payment source
    pub async fn create_source<T: Serialize + ?Sized>(&self, data: &T) -> Result<Value> {
        let url = self.inner.api_url("sources");
        self.inner.send(Method::POST, url, data).await
    }
}

/// Operations that need the secret key. Server side only.
#[derive(Debug, Clone, Copy)]
pub struct SecretOperations<'a> {
    inner: Operations<'a, SecretKey>,
}

impl SecretOperations<'_> {
    /// `POST {api}/customers`: create a customer, usually with a card token
    pub async fn create_customer_with_card<T: Serialize + ?Sized>(&self, data: &T) -> Result<Value> {
        let url = self.inner.api_url("customers");
        self.inner.send(Method::POST, url, data).await
    }

    /// `POST {api}/charges`: create a charge
    #[doc(alias = "create_charges")]
    pub async fn create_charge<T: Serialize + ?Sized>(&self, data: &T) -> Result<Value> {
        let url = self.inner.api_url("charges");
        self.inner.send(Method::POST, url, data).await
    }

    /// `PATCH {api}/customers/{id}`: attach a card token to a customer
    pub async fn attach_card_to_customer<T: Serialize + ?Sized>(
        &self,
        customer_id: &str,
        data: &T,
    ) -> Result<Value> {
        let url = self.inner.api_url(&customer_path(customer_id)?);
        self.inner.send(Method::PATCH, url, data).await
    }

    /// `PATCH {api}/customers/{id}`: update customer fields
    pub async fn update_customer<T: Serialize + ?Sized>(
        &self,
        customer_id: &str,
        data: &T,
    ) -> Result<Value> {
        let url = self.inner.api_url(&customer_path(customer_id)?);
        self.inner.send(Method::PATCH, url, data).await
    }
}

/// `customers/{id}` with the ID encoded as a single segment.
///
/// Empty, `.` and `..` IDs are refused: URL parsing would resolve them as
/// dot segments and the request would land on another resource.
fn customer_path(customer_id: &str) -> Result<String> {
    if matches!(customer_id, "" | "." | "..") {
        return Err(OmiseError::config(format!(
            "Invalid customer ID '{}'",
            customer_id
        )));
    }
    Ok(format!(
        "customers/{}",
        utf8_percent_encode(customer_id, PATH_SEGMENT)
    ))
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path)
}
