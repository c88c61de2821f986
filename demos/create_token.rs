//! Tokenize a test card, then charge it
//!
//! Reads `OMISE_PUBLIC_KEY` and `OMISE_SECRET_KEY` and talks to the live
//! test-mode API.

use omise::{CardDetails, ChargeRequest, ClientConfig, OmiseClient, OmiseError, TokenRequest};

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let public_key = std::env::var("OMISE_PUBLIC_KEY").unwrap_or_default();
    let secret_key = std::env::var("OMISE_SECRET_KEY").unwrap_or_default();

    let client = OmiseClient::new(ClientConfig::new(public_key, secret_key))?;

    println!("Creating token...");
    let card = CardDetails::new("JOHN DOE", "4242424242424242", 12, 2030)
        .with_security_code("123")
        .with_city("Bangkok")
        .with_postal_code("10320");
    let token = client.public().create_token(&TokenRequest::from(card)).await?;

    let token_id = token["id"].as_str().unwrap_or_default().to_string();
    println!("Token: {}", token_id);

    println!("Charging 100.00 THB...");
    let charge = ChargeRequest::new(10_000, "thb")
        .with_card(token_id)
        .with_description("demo charge");

    match client.secret().create_charge(&charge).await {
        Ok(charge) => println!("Charge {} status: {}", charge["id"], charge["status"]),
        Err(OmiseError::Api { status, body }) => {
            println!("Charge rejected ({}): {}", status, body);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
