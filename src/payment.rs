//! Payment gateway boundary.
//!
//! Payments are two-phase: the backend creates a payment intent and hands
//! back its client secret (`BackendClient::create_payment_intent`), then the
//! client confirms the intent with the card details through the gateway.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum PaymentError {
    /// Gateway refused the payment (declined card, invalid number, ...)
    #[error("{0}")]
    Gateway(String),

    #[error("Invalid payment client secret")]
    InvalidSecret,

    #[error("Payment gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Card data as typed into the payment form.
#[derive(Clone, PartialEq, Eq)]
pub struct CardDetails {
    pub number: String,
    pub exp_month: u8,
    pub exp_year: u16,
    pub cvc: String,
}

impl CardDetails {
    pub fn last4(&self) -> &str {
        let digits = self.number.trim();
        &digits[digits.len().saturating_sub(4)..]
    }
}

impl std::fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardDetails")
            .field("number", &format!("**** {}", self.last4()))
            .field("exp_month", &self.exp_month)
            .field("exp_year", &self.exp_year)
            .field("cvc", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingDetails {
    pub email: String,
    pub name: String,
}

impl BillingDetails {
    /// Billing details for a user, with "anonymous" standing in for
    /// anything the profile does not provide.
    pub fn for_user(email: Option<&str>, name: Option<&str>) -> Self {
        Self {
            email: email.unwrap_or("anonymous").to_string(),
            name: name.unwrap_or("anonymous").to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub amount: Option<i64>,
}

impl PaymentIntent {
    pub fn succeeded(&self) -> bool {
        self.status == "succeeded"
    }
}

/// Payment gateway trait
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Confirm a payment intent with card details.
    async fn confirm_card_payment(
        &self,
        client_secret: &str,
        card: &CardDetails,
        billing: &BillingDetails,
    ) -> Result<PaymentIntent, PaymentError>;
}

// ==================== REST Client ====================

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Client-side confirmation against a Stripe-style REST gateway.
pub struct GatewayClient {
    client: reqwest::Client,
    base_url: String,
    publishable_key: String,
}

impl GatewayClient {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        publishable_key: impl Into<String>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            publishable_key: publishable_key.into(),
        }
    }
}

/// Extract the intent id from a client secret (`pi_123_secret_abc` -> `pi_123`).
fn intent_id(client_secret: &str) -> Result<&str, PaymentError> {
    match client_secret.split_once("_secret_") {
        Some((id, rest)) if !id.is_empty() && !rest.is_empty() => Ok(id),
        _ => Err(PaymentError::InvalidSecret),
    }
}

#[async_trait]
impl PaymentGateway for GatewayClient {
    async fn confirm_card_payment(
        &self,
        client_secret: &str,
        card: &CardDetails,
        billing: &BillingDetails,
    ) -> Result<PaymentIntent, PaymentError> {
        let id = intent_id(client_secret)?;

        let params = [
            ("client_secret", client_secret.to_string()),
            ("payment_method_data[type]", "card".to_string()),
            ("payment_method_data[card][number]", card.number.clone()),
            ("payment_method_data[card][exp_month]", card.exp_month.to_string()),
            ("payment_method_data[card][exp_year]", card.exp_year.to_string()),
            ("payment_method_data[card][cvc]", card.cvc.clone()),
            ("payment_method_data[billing_details][email]", billing.email.clone()),
            ("payment_method_data[billing_details][name]", billing.name.clone()),
        ];

        let response = self
            .client
            .post(format!("{}/payment_intents/{}/confirm", self.base_url, id))
            .bearer_auth(&self.publishable_key)
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| format!("Payment gateway error ({})", status));
            debug!("Payment {} not confirmed: {}", id, message);
            return Err(PaymentError::Gateway(message));
        }

        let intent: PaymentIntent = response.json().await?;
        info!("Payment intent {} is {}", intent.id, intent.status);
        Ok(intent)
    }
}
