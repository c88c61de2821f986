//! Request payloads and response shapes for the Omise API
//!
//! Every operation accepts any `Serialize` value as its body, so these
//! types are optional. They exist for callers that prefer typed structs
//! over `serde_json::json!`.

use serde::{Deserialize, Serialize};

/// Error object returned by the API on a failed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Always `"error"`
    pub object: String,
    /// Link to the documentation of this error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Machine readable error code, e.g. `invalid_card`
    pub code: String,
    /// Human readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Raw card details, only ever sent to the vault
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardDetails {
    pub name: String,
    pub number: String,
    pub expiration_month: u8,
    pub expiration_year: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

impl CardDetails {
    /// Create card details with the required fields
    pub fn new(
        name: impl Into<String>,
        number: impl Into<String>,
        expiration_month: u8,
        expiration_year: u16,
    ) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
            expiration_month,
            expiration_year,
            security_code: None,
            city: None,
            postal_code: None,
        }
    }

    /// Set the card security code
    pub fn with_security_code(mut self, code: impl Into<String>) -> Self {
        self.security_code = Some(code.into());
        self
    }

    /// Set the billing city
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Set the billing postal code
    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }
}

/// Body of a token creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRequest {
    pub card: CardDetails,
}

impl From<CardDetails> for TokenRequest {
    fn from(card: CardDetails) -> Self {
        Self { card }
    }
}

/// Body of a source creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceRequest {
    /// Source type, e.g. `internet_banking_bay`
    #[serde(rename = "type")]
    pub source_type: String,
    /// Amount in the smallest currency unit
    pub amount: u64,
    /// ISO 4217 code, lowercase
    pub currency: String,
}

impl SourceRequest {
    /// Create a new source request
    pub fn new(source_type: impl Into<String>, amount: u64, currency: impl Into<String>) -> Self {
        Self {
            source_type: source_type.into(),
            amount,
            currency: currency.into(),
        }
    }
}

/// Body of a charge creation request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChargeRequest {
    pub amount: u64,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    /// Token or card ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<String>,
    /// Source ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Where to send the payer after an offsite payment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_uri: Option<String>,
}

impl ChargeRequest {
    /// Create a new charge request
    pub fn new(amount: u64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            ..Default::default()
        }
    }

    /// Charge a saved customer
    pub fn with_customer(mut self, customer: impl Into<String>) -> Self {
        self.customer = Some(customer.into());
        self
    }

    /// Charge a token or card
    pub fn with_card(mut self, card: impl Into<String>) -> Self {
        self.card = Some(card.into());
        self
    }

    /// Charge a source
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the return URI
    pub fn with_return_uri(mut self, return_uri: impl Into<String>) -> Self {
        self.return_uri = Some(return_uri.into());
        self
    }
}

/// Body of a customer create or update request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Token to attach as a card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<String>,
}

impl CustomerRequest {
    /// Create an empty customer request
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a card token
    pub fn with_card(mut self, card: impl Into<String>) -> Self {
        self.card = Some(card.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_token_request_shape() {
        let request = TokenRequest::from(
            CardDetails::new("JOHN DOE", "4242424242424242", 12, 2030).with_security_code("123"),
        );

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["card"]["number"], "4242424242424242");
        assert_eq!(value["card"]["expiration_month"], 12);
        assert_eq!(value["card"]["security_code"], "123");
        assert!(value["card"].get("city").is_none());
    }

    #[test]
    fn test_source_request_renames_type() {
        let request = SourceRequest::new("internet_banking_bay", 100_000, "thb");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"type": "internet_banking_bay", "amount": 100000, "currency": "thb"})
        );
    }

    #[test]
    fn test_charge_request_omits_unset_fields() {
        let request = ChargeRequest::new(1000, "thb").with_customer("cust_123");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"amount": 1000, "currency": "thb", "customer": "cust_123"})
        );
    }

    #[test]
    fn test_customer_request_empty() {
        let request = CustomerRequest::new();
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({}));
    }

    #[test]
    fn test_api_error_body_without_optional_fields() {
        let body: ApiErrorBody =
            serde_json::from_value(json!({"object": "error", "code": "invalid_card"})).unwrap();
        assert_eq!(body.code, "invalid_card");
        assert!(body.location.is_none());
        assert!(body.message.is_none());
    }
}
