//! Backend REST API client.
//!
//! Resource-oriented calls for users, tutors, ratings, jobs, carts (pending
//! bookings), payments, messages and blogs. Reads go through the retry
//! helper; mutations are sent exactly once so a transient failure never
//! produces a duplicate booking or payment record.

use crate::retry::{with_retry_if, RetryConfig};
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Backend call failure.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-success HTTP status, with the server's message when it sent one
    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Connection, timeout or protocol failure
    #[error("Request to backend failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body did not match the expected shape
    #[error("Failed to decode backend response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status code, if the backend answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message sent by the backend in its error body.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } if !message.is_empty() => Some(message.as_str()),
            _ => None,
        }
    }

    /// Retry 429 (rate limit), 5xx and transport errors; never other 4xx or
    /// decode failures.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Status { status, .. } => *status == 429 || *status >= 500,
            ApiError::Transport(_) => true,
            ApiError::Decode(_) => false,
        }
    }
}

// ==================== Wire Types ====================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub uid: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "photoURL", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// Result of an insert; `insertedId` is absent when nothing was stored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    pub inserted_id: Option<String>,
}

impl InsertResult {
    pub fn is_inserted(&self) -> bool {
        self.inserted_id.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tutor {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default, rename = "photoURL")]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub teaching_mode: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    #[serde(default)]
    pub tutor_id: Option<String>,
    pub rating: f64,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub student_email: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A pending booking stored in the user's cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub tutor_id: String,
    #[serde(default)]
    pub tutor_name: Option<String>,
    #[serde(default)]
    pub tutor_email: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub menu_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCartItem {
    pub email: String,
    pub tutor_id: String,
    pub tutor_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tutor_email: Option<String>,
    pub subject: String,
    pub price: f64,
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
struct PaymentIntentRequest {
    price: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaymentIntentResponse {
    client_secret: Option<String>,
}

/// Payment record persisted after the gateway confirms a charge.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub email: String,
    pub price: f64,
    pub transaction_id: String,
    pub date: DateTime<Utc>,
    pub cart_ids: Vec<String>,
    pub menu_item_ids: Vec<Option<String>>,
    pub tutor_emails: Vec<String>,
    pub total_tutor_emails: usize,
    pub status: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    #[serde(default)]
    pub payment_result: Option<InsertResult>,
}

impl PaymentResponse {
    pub fn is_recorded(&self) -> bool {
        self.payment_result
            .as_ref()
            .is_some_and(InsertResult::is_inserted)
    }
}

/// Fields of the "post a teaching job" form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetails {
    pub subject: String,
    pub grade_level: String,
    pub mode_of_learning: String,
    pub sessions_per_week: u32,
    pub start_date: String,
    pub budget: f64,
    pub open_to_negotiation: bool,
    pub topics_goals: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPost {
    #[serde(flatten)]
    pub details: JobDetails,
    pub email: Option<String>,
    pub posted_at: DateTime<Utc>,
}

/// Anything other than `unread` is treated as not unread, including a
/// missing status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Read,
    Unread,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub sender_email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub sent_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: MessageStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default, rename = "imageURL")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

// ==================== Client ====================

/// Client for the marketplace backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
    retry: RetryConfig,
}

impl BackendClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            retry: RetryConfig::api_call(),
        }
    }

    /// Attach the signed-in user's ID token to every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    // ---- users ----

    pub async fn create_user(&self, user: &NewUser) -> Result<InsertResult, ApiError> {
        self.send(Method::POST, "/users", user).await
    }

    // ---- tutors & ratings ----

    pub async fn get_tutor(&self, tutor_id: &str) -> Result<Tutor, ApiError> {
        self.get(&format!("/tutors/{}", tutor_id), &[]).await
    }

    pub async fn get_ratings(&self, tutor_id: &str) -> Result<Vec<Rating>, ApiError> {
        self.get(&format!("/ratings/{}", tutor_id), &[]).await
    }

    // ---- carts ----

    pub async fn get_carts(&self, email: &str) -> Result<Vec<CartItem>, ApiError> {
        self.get("/carts", &[("email", email)]).await
    }

    pub async fn add_to_cart(&self, item: &NewCartItem) -> Result<InsertResult, ApiError> {
        self.send(Method::POST, "/carts", item).await
    }

    // ---- payments ----

    /// Phase one of a payment: ask the backend for a gateway client secret.
    ///
    /// Returns `None` when the backend answered without a secret.
    pub async fn create_payment_intent(&self, price: f64) -> Result<Option<String>, ApiError> {
        let response: PaymentIntentResponse = self
            .send(
                Method::POST,
                "/create-payment-intent",
                &PaymentIntentRequest { price },
            )
            .await?;
        Ok(response.client_secret.filter(|s| !s.is_empty()))
    }

    pub async fn record_payment(&self, payment: &PaymentRecord) -> Result<PaymentResponse, ApiError> {
        self.send(Method::POST, "/payments", payment).await
    }

    // ---- jobs ----

    pub async fn post_job(&self, job: &JobPost) -> Result<InsertResult, ApiError> {
        self.send(Method::POST, "/jobs", job).await
    }

    // ---- messages ----

    pub async fn list_messages(&self) -> Result<Vec<Message>, ApiError> {
        self.get("/messages", &[]).await
    }

    pub async fn mark_message_read(&self, message_id: &str) -> Result<(), ApiError> {
        self.execute(self.request(Method::PATCH, &format!("/messages/{}/read", message_id)))
            .await
            .map(|_| ())
    }

    pub async fn delete_message(&self, message_id: &str) -> Result<(), ApiError> {
        self.execute(self.request(Method::DELETE, &format!("/messages/{}", message_id)))
            .await
            .map(|_| ())
    }

    // ---- blogs ----

    pub async fn list_blogs(&self) -> Result<Vec<BlogPost>, ApiError> {
        self.get("/blogs", &[]).await
    }

    // ==================== Plumbing ====================

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let builder = self
            .client
            .request(method, format!("{}{}", self.base_url, path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let body = with_retry_if(
            &self.retry,
            &format!("GET {}", path),
            || self.execute(self.request(Method::GET, path).query(query)),
            ApiError::is_retryable,
        )
        .await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn send<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let text = self.execute(self.request(method, path).json(body)).await?;
        if text.trim().is_empty() {
            return Ok(serde_json::from_str("{}")?);
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Send a request and return the body of a successful response.
    async fn execute(&self, builder: reqwest::RequestBuilder) -> Result<String, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_default();
            debug!("Backend error ({}): {}", status, body);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::{
        matchers::{body_json, header, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    fn test_client(server: &MockServer) -> BackendClient {
        BackendClient::new(reqwest::Client::new(), server.uri())
            .with_retry(RetryConfig::new(3, Duration::from_millis(10)))
    }

    // ==================== ApiError Tests ====================

    #[test]
    fn test_retryable_statuses() {
        let status = |s| ApiError::Status {
            status: s,
            message: String::new(),
        };
        assert!(status(500).is_retryable());
        assert!(status(503).is_retryable());
        assert!(status(429).is_retryable());
        assert!(!status(400).is_retryable());
        assert!(!status(402).is_retryable());
        assert!(!status(404).is_retryable());
    }

    #[test]
    fn test_server_message_empty_is_none() {
        let err = ApiError::Status {
            status: 500,
            message: String::new(),
        };
        assert_eq!(err.server_message(), None);
        assert_eq!(err.status(), Some(500));
    }

    // ==================== Wire Type Tests ====================

    #[test]
    fn test_payment_record_field_names() {
        let record = PaymentRecord {
            email: "student@example.com".to_string(),
            price: 45.0,
            transaction_id: "pi_123".to_string(),
            date: Utc::now(),
            cart_ids: vec!["c1".to_string()],
            menu_item_ids: vec![None],
            tutor_emails: vec!["tutor@example.com".to_string()],
            total_tutor_emails: 1,
            status: "pending".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["transactionId"], "pi_123");
        assert_eq!(json["cartIds"][0], "c1");
        assert!(json["menuItemIds"][0].is_null());
        assert_eq!(json["totalTutorEmails"], 1);
    }

    #[test]
    fn test_job_post_is_flattened() {
        let job = JobPost {
            details: JobDetails {
                subject: "Mathematics".to_string(),
                sessions_per_week: 2,
                ..Default::default()
            },
            email: Some("parent@example.com".to_string()),
            posted_at: Utc::now(),
        };
        let json = serde_json::to_value(&job).unwrap();
        assert_eq!(json["subject"], "Mathematics");
        assert_eq!(json["sessionsPerWeek"], 2);
        assert!(json.get("postedAt").is_some());
        assert!(json.get("details").is_none());
    }

    #[test]
    fn test_message_status_unknown_value() {
        let message: Message =
            serde_json::from_str(r#"{"_id": "m1", "status": "archived"}"#).unwrap();
        assert_eq!(message.status, MessageStatus::Other);
    }

    // ==================== HTTP Tests ====================

    #[tokio::test]
    async fn test_list_messages_tolerates_missing_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"_id": "m1", "senderEmail": "a@example.com", "message": "Hi", "status": "read"},
                {"_id": "m2", "senderEmail": "b@example.com", "message": "Hello"}
            ])))
            .mount(&server)
            .await;

        let messages = test_client(&server).list_messages().await.unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].status, MessageStatus::Read);
        assert_eq!(messages[1].status, MessageStatus::Other);
    }

    #[tokio::test]
    async fn test_get_tutor_with_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tutors/t1"))
            .and(header("Authorization", "Bearer id-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "_id": "t1",
                "name": "Marie Joseph",
                "subjects": ["Mathematics", "Physics"],
                "hourlyRate": 25.0
            })))
            .mount(&server)
            .await;

        let tutor = test_client(&server)
            .with_token("id-token")
            .get_tutor("t1")
            .await
            .unwrap();
        assert_eq!(tutor.name, "Marie Joseph");
        assert_eq!(tutor.subjects[0], "Mathematics");
        assert_eq!(tutor.hourly_rate, Some(25.0));
    }

    #[tokio::test]
    async fn test_get_carts_sends_email_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/carts"))
            .and(query_param("email", "student@example.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"_id": "c1", "email": "student@example.com", "tutorId": "t1", "price": 25.0}
            ])))
            .mount(&server)
            .await;

        let carts = test_client(&server)
            .get_carts("student@example.com")
            .await
            .unwrap();
        assert_eq!(carts.len(), 1);
        assert_eq!(carts[0].tutor_id, "t1");
    }

    #[tokio::test]
    async fn test_read_retried_on_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/blogs"))
            .respond_with(ResponseTemplate::new(503))
            .expect(3)
            .mount(&server)
            .await;

        let err = test_client(&server).list_blogs().await.unwrap_err();
        assert_eq!(err.status(), Some(503));
    }

    #[tokio::test]
    async fn test_read_not_retried_on_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tutors/missing"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let err = test_client(&server).get_tutor("missing").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_mutation_sent_once_with_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/jobs"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(serde_json::json!({"message": "database unavailable"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let job = JobPost {
            details: JobDetails::default(),
            email: None,
            posted_at: Utc::now(),
        };
        let err = test_client(&server).post_job(&job).await.unwrap_err();
        assert_eq!(err.server_message(), Some("database unavailable"));
    }

    #[tokio::test]
    async fn test_create_payment_intent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/create-payment-intent"))
            .and(body_json(serde_json::json!({"price": 50.0})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"clientSecret": "pi_1_secret_abc"})),
            )
            .mount(&server)
            .await;

        let secret = test_client(&server).create_payment_intent(50.0).await.unwrap();
        assert_eq!(secret.as_deref(), Some("pi_1_secret_abc"));
    }

    #[tokio::test]
    async fn test_create_payment_intent_missing_secret() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/create-payment-intent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let secret = test_client(&server).create_payment_intent(50.0).await.unwrap();
        assert!(secret.is_none());
    }

    #[tokio::test]
    async fn test_mark_read_and_delete() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/messages/m1/read"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"modifiedCount": 1})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/messages/m1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        client.mark_message_read("m1").await.unwrap();
        client.delete_message("m1").await.unwrap();
    }

    #[tokio::test]
    async fn test_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = test_client(&server).list_messages().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
