use anyhow::{Context, Result};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    // Backend REST API
    pub api_base_url: String,

    // Identity provider
    pub identity_api_url: String,
    pub identity_api_key: String,

    // Payment gateway
    pub payment_api_url: String,
    pub payment_publishable_key: String,

    // Image hosting (profile photos)
    pub image_hosting_url: String,
    pub image_hosting_key: Option<String>,

    // Localization
    pub default_locale: String,

    // HTTP
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Backend
            api_base_url: std::env::var("LESONPAW_API_URL")
                .context("LESONPAW_API_URL not set")?,

            // Identity provider
            identity_api_url: std::env::var("IDENTITY_API_URL")
                .unwrap_or_else(|_| "https://identitytoolkit.googleapis.com/v1".to_string()),
            identity_api_key: std::env::var("IDENTITY_API_KEY")
                .context("IDENTITY_API_KEY not set")?,

            // Payment gateway
            payment_api_url: std::env::var("PAYMENT_API_URL")
                .unwrap_or_else(|_| "https://api.stripe.com/v1".to_string()),
            payment_publishable_key: std::env::var("PAYMENT_PUBLISHABLE_KEY")
                .context("PAYMENT_PUBLISHABLE_KEY not set")?,

            // Image hosting - file uploads are disabled without a key
            image_hosting_url: std::env::var("IMAGE_HOSTING_URL")
                .unwrap_or_else(|_| "https://api.imgbb.com/1/upload".to_string()),
            image_hosting_key: std::env::var("IMAGE_HOSTING_KEY")
                .ok()
                .filter(|key| !key.is_empty()),

            // Localization
            default_locale: std::env::var("DEFAULT_LOCALE").unwrap_or_else(|_| "en".to_string()),

            // HTTP
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(15),
        })
    }

    /// Build the shared HTTP client used by every collaborator.
    pub fn http_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(self.request_timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }
}
