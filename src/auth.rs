//! Identity provider boundary.
//!
//! The views only need four operations: create an account, sign in, sign
//! out and update the profile. `IdentityClient` speaks an Identity-Toolkit
//! style REST API; tests and embedders can plug in any other provider
//! through the `IdentityProvider` trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum AuthError {
    /// Failure reported by the provider, carrying its own message
    #[error("{0}")]
    Provider(String),

    #[error("No user is signed in")]
    NotSignedIn,

    #[error("Identity request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Signed-in user as seen by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    /// Bearer token for the backend API
    pub id_token: String,
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Register a new account; the new user is signed in on success.
    async fn create_account(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Update the signed-in user's display name and photo.
    async fn update_profile(
        &self,
        display_name: &str,
        photo_url: Option<&str>,
    ) -> Result<(), AuthError>;

    fn current_user(&self) -> Option<Session>;
}

// ==================== REST Client ====================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CredentialsRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateRequest<'a> {
    id_token: &'a str,
    display_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    photo_url: Option<&'a str>,
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
    email: String,
    id_token: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    photo_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// REST identity provider client.
pub struct IdentityClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    current: Mutex<Option<Session>>,
}

impl IdentityClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            current: Mutex::new(None),
        }
    }

    async fn call<B: Serialize + Sync, T: for<'de> Deserialize<'de>>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, AuthError> {
        let response = self
            .client
            .post(format!("{}/accounts:{}", self.base_url, endpoint))
            .query(&[("key", self.api_key.as_str())])
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| format!("Identity provider error ({})", status));
            debug!("Identity provider rejected {}: {}", endpoint, message);
            return Err(AuthError::Provider(message));
        }

        Ok(response.json().await?)
    }

    async fn authenticate(&self, endpoint: &str, email: &str, password: &str) -> Result<Session, AuthError> {
        let account: AccountResponse = self
            .call(
                endpoint,
                &CredentialsRequest {
                    email,
                    password,
                    return_secure_token: true,
                },
            )
            .await?;

        let session = Session {
            uid: account.local_id,
            email: account.email,
            display_name: account.display_name.filter(|n| !n.is_empty()),
            photo_url: account.photo_url.filter(|p| !p.is_empty()),
            id_token: account.id_token,
        };
        *self.slot() = Some(session.clone());
        Ok(session)
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<Session>> {
        self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl IdentityProvider for IdentityClient {
    async fn create_account(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let session = self.authenticate("signUp", email, password).await?;
        info!("Created account {}", session.uid);
        Ok(session)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let session = self.authenticate("signInWithPassword", email, password).await?;
        info!("Signed in {}", session.uid);
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        if let Some(session) = self.slot().take() {
            info!("Signed out {}", session.uid);
        }
        Ok(())
    }

    async fn update_profile(
        &self,
        display_name: &str,
        photo_url: Option<&str>,
    ) -> Result<(), AuthError> {
        let id_token = self
            .current_user()
            .map(|s| s.id_token)
            .ok_or(AuthError::NotSignedIn)?;

        let _: serde_json::Value = self
            .call(
                "update",
                &UpdateRequest {
                    id_token: &id_token,
                    display_name,
                    photo_url,
                    return_secure_token: false,
                },
            )
            .await?;

        if let Some(session) = self.slot().as_mut() {
            session.display_name = Some(display_name.to_string());
            session.photo_url = photo_url.map(str::to_string);
        }
        Ok(())
    }

    fn current_user(&self) -> Option<Session> {
        self.slot().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{body_partial_json, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    fn account_json(uid: &str, email: &str) -> serde_json::Value {
        serde_json::json!({
            "localId": uid,
            "email": email,
            "idToken": format!("token-{}", uid),
            "refreshToken": "refresh",
            "expiresIn": "3600"
        })
    }

    #[tokio::test]
    async fn test_create_account_signs_in() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/accounts:signUp"))
            .and(query_param("key", "api-key"))
            .and(body_partial_json(serde_json::json!({"email": "new@example.com"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(account_json("u1", "new@example.com")))
            .mount(&server)
            .await;

        let client = IdentityClient::new(reqwest::Client::new(), server.uri(), "api-key");
        let session = client.create_account("new@example.com", "Secret1!").await.unwrap();

        assert_eq!(session.uid, "u1");
        assert_eq!(session.id_token, "token-u1");
        assert_eq!(client.current_user(), Some(session));
    }

    #[tokio::test]
    async fn test_sign_in_failure_carries_provider_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/accounts:signInWithPassword"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": {"code": 400, "message": "INVALID_LOGIN_CREDENTIALS"}
            })))
            .mount(&server)
            .await;

        let client = IdentityClient::new(reqwest::Client::new(), server.uri(), "api-key");
        let err = client.sign_in("a@example.com", "wrong").await.unwrap_err();

        assert_eq!(err.to_string(), "INVALID_LOGIN_CREDENTIALS");
        assert!(client.current_user().is_none());
    }

    #[tokio::test]
    async fn test_update_profile_requires_session() {
        let client = IdentityClient::new(reqwest::Client::new(), "http://127.0.0.1:9", "api-key");
        let err = client.update_profile("Name", None).await.unwrap_err();
        assert!(matches!(err, AuthError::NotSignedIn));
    }

    #[tokio::test]
    async fn test_update_profile_sends_token_and_updates_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/accounts:signInWithPassword"))
            .respond_with(ResponseTemplate::new(200).set_body_json(account_json("u2", "s@example.com")))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/accounts:update"))
            .and(body_partial_json(serde_json::json!({
                "idToken": "token-u2",
                "displayName": "Jean Pierre",
                "photoUrl": "https://img.example.com/p.png"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"localId": "u2"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = IdentityClient::new(reqwest::Client::new(), server.uri(), "api-key");
        client.sign_in("s@example.com", "Secret1!").await.unwrap();
        client
            .update_profile("Jean Pierre", Some("https://img.example.com/p.png"))
            .await
            .unwrap();

        let session = client.current_user().unwrap();
        assert_eq!(session.display_name.as_deref(), Some("Jean Pierre"));
        assert_eq!(session.photo_url.as_deref(), Some("https://img.example.com/p.png"));
    }

    #[tokio::test]
    async fn test_sign_out_clears_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/accounts:signInWithPassword"))
            .respond_with(ResponseTemplate::new(200).set_body_json(account_json("u3", "x@example.com")))
            .mount(&server)
            .await;

        let client = IdentityClient::new(reqwest::Client::new(), server.uri(), "api-key");
        client.sign_in("x@example.com", "Secret1!").await.unwrap();
        client.sign_out().await.unwrap();
        assert!(client.current_user().is_none());

        // Signing out twice is harmless
        client.sign_out().await.unwrap();
    }
}
