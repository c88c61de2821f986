//! Error handling tests for the Omise client

use mockito::{Matcher, Server};
use omise::{ClientConfig, OmiseClient, OmiseError};
use reqwest::StatusCode;
use serde_json::json;
use std::collections::HashMap;

#[test]
fn test_config_error_display() {
    let error = OmiseError::config("Please configure your secret key");

    let error_msg = error.to_string();
    assert!(
        error_msg.contains("Configuration error"),
        "Error message MUST contain 'Configuration error' - actual: {}",
        error_msg
    );
    assert!(
        error_msg.contains("secret key"),
        "Error message MUST name the missing key - actual: {}",
        error_msg
    );
}

#[test]
fn test_api_error_display() {
    let error = OmiseError::api(
        StatusCode::NOT_FOUND,
        json!({"object": "error", "code": "not_found", "message": "customer cust_1 was not found"}),
    );

    let error_msg = error.to_string();
    assert!(
        error_msg.contains("404"),
        "Error message MUST contain the status - actual: {}",
        error_msg
    );
    assert!(
        error_msg.contains("not_found"),
        "Error message MUST contain the error body - actual: {}",
        error_msg
    );
}

#[test]
fn test_invalid_header_display() {
    let error = OmiseError::invalid_header("Omise-Version header: failed to parse header value");

    let error_msg = error.to_string();
    assert!(
        error_msg.contains("Invalid header") && error_msg.contains("Omise-Version"),
        "Error message MUST contain 'Invalid header' and the header name - actual: {}",
        error_msg
    );
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let error: OmiseError = json_error.into();

    assert!(matches!(error, OmiseError::Json(_)));
    assert!(error.to_string().starts_with("JSON error"));
}

#[test]
fn test_error_debug_format() {
    let error = OmiseError::config("Test error");

    let debug_str = format!("{:?}", error);
    assert!(
        debug_str.contains("Config"),
        "Debug format MUST contain variant name 'Config' - actual: {}",
        debug_str
    );
    assert!(
        debug_str.contains("Test error"),
        "Debug format MUST contain error message 'Test error' - actual: {}",
        debug_str
    );
}

#[test]
fn test_error_kinds_are_exclusive() {
    let errors = [
        OmiseError::config("missing key"),
        OmiseError::api(StatusCode::BAD_REQUEST, json!({})),
    ];

    for error in &errors {
        let kinds = [error.is_config(), error.is_api(), error.is_transport()];
        assert_eq!(kinds.iter().filter(|k| **k).count(), 1, "{:?}", error);
    }
}

#[tokio::test]
async fn test_unserializable_payload_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let config = ClientConfig::new("pkey_test", "skey_test").with_api_url(server.url());
    let client = OmiseClient::new(config).unwrap();

    // JSON object keys must be strings
    let mut payload = HashMap::new();
    payload.insert((1, 2), "amount");

    let error = client.create_charge(&payload).await.unwrap_err();
    assert!(matches!(error, OmiseError::Json(_)), "got {:?}", error);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_invalid_api_version_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let config = ClientConfig::new("pkey_test", "skey_test")
        .with_vault_url(server.url())
        .with_api_version("2015-11-17\n");
    let client = OmiseClient::new(config).unwrap();

    let error = client.create_token(&json!({})).await.unwrap_err();
    assert!(matches!(error, OmiseError::InvalidHeader { .. }), "got {:?}", error);

    mock.assert_async().await;
}
