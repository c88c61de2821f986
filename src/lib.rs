//! # omise - Omise payment API client
//!
//! A small async client for the Omise API: card tokens, payment sources,
//! customers and charges.
//!
//! Each call sends exactly one HTTP request. Token and source creation are
//! signed with the public key and live on [`PublicOperations`]; customer
//! and charge operations are signed with the secret key and live on
//! [`SecretOperations`]. A missing key fails with [`OmiseError::Config`]
//! before anything is sent, a non-200 answer fails with
//! [`OmiseError::Api`] and a request that never got a response fails with
//! [`OmiseError::Transport`].
//!
//! ```no_run
//! use omise::{ClientConfig, OmiseClient};
//! use serde_json::json;
//!
//! # async fn run() -> omise::Result<()> {
//! let client = OmiseClient::new(ClientConfig::new("pkey_test_...", "skey_test_..."))?;
//! let charge = client
//!     .secret()
//!     .create_charge(&json!({"amount": 1000, "currency": "thb", "card": "tokn_test_..."}))
//!     .await?;
//! println!("{}", charge["id"]);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use auth::{build_headers, KeyKind};
pub use client::{OmiseClient, PublicOperations, SecretOperations};
pub use config::ClientConfig;
pub use error::{OmiseError, Result};
pub use types::*;

/// Current version of this library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `User-Agent` sent with every request
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// API version pinned when none is given
pub const DEFAULT_API_VERSION: &str = "2015-11-17";

/// Host that receives raw card data
pub const VAULT_ENDPOINT: &str = "https://vault.omise.co/";

/// Host for every other operation
pub const API_ENDPOINT: &str = "https://api.omise.co/";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constants() {
        assert!(!VERSION.is_empty());
        assert_eq!(USER_AGENT, format!("omise/{}", VERSION));
        assert_eq!(DEFAULT_API_VERSION, "2015-11-17");
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(VAULT_ENDPOINT, "https://vault.omise.co/");
        assert_eq!(API_ENDPOINT, "https://api.omise.co/");
    }
}
