use crate::api::{BackendClient, CartItem, PaymentRecord};
use crate::auth::Session;
use crate::i18n::{keys, Translator};
use crate::notice::Notice;
use crate::payment::{BillingDetails, CardDetails, PaymentGateway};
use chrono::Utc;
use tracing::{error, info, warn};

#[derive(Debug, Clone)]
pub struct CheckoutSuccess {
    pub notice: Notice,
    pub transaction_id: String,
    pub redirect: String,
}

/// Checkout form for the pending bookings in the user's cart.
///
/// Gateway and backend failures are kept as an inline error; the card the
/// user typed stays in place so the payment can be retried. A confirmed
/// charge is never confirmed a second time: retrying after a failed record
/// only re-posts the record, and a recorded payment blocks further submits.
pub struct Checkout {
    cart: Vec<CartItem>,
    client_secret: Option<String>,
    card: Option<CardDetails>,
    processing: bool,
    error: Option<String>,
    transaction_id: Option<String>,
    recorded: bool,
}

impl Checkout {
    pub fn new(cart: Vec<CartItem>) -> Self {
        Self {
            cart,
            client_secret: None,
            card: None,
            processing: false,
            error: None,
            transaction_id: None,
            recorded: false,
        }
    }

    /// Sum of cart prices; items without a price count as 0.
    pub fn total_price(&self) -> f64 {
        self.cart.iter().map(|item| item.price.unwrap_or(0.0)).sum()
    }

    pub fn tutor_emails(&self) -> Vec<String> {
        self.cart
            .iter()
            .filter_map(|item| item.tutor_email.clone())
            .filter(|email| !email.is_empty())
            .collect()
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn is_ready(&self) -> bool {
        self.client_secret.is_some()
    }

    /// True once the payment has been confirmed and recorded.
    pub fn is_completed(&self) -> bool {
        self.recorded
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn card(&self) -> Option<&CardDetails> {
        self.card.as_ref()
    }

    pub fn transaction_id(&self) -> Option<&str> {
        self.transaction_id.as_deref()
    }

    pub fn set_card(&mut self, card: CardDetails) {
        self.card = Some(card);
    }

    /// Phase one: ask the backend for a client secret. Nothing is requested
    /// for an empty (zero-total) cart.
    pub async fn prepare(&mut self, backend: &BackendClient) {
        let total = self.total_price();
        if total <= 0.0 {
            return;
        }

        match backend.create_payment_intent(total).await {
            Ok(Some(secret)) => self.client_secret = Some(secret),
            Ok(None) => warn!("Missing clientSecret in payment intent response"),
            Err(e) => error!("Failed to create payment intent: {}", e),
        }
    }

    /// Phase two: confirm the card payment and record it.
    ///
    /// Returns `Some` only when the payment was confirmed and recorded.
    pub async fn submit(
        &mut self,
        user: &Session,
        gateway: &dyn PaymentGateway,
        backend: &BackendClient,
        translator: &Translator<'_>,
    ) -> Option<CheckoutSuccess> {
        if self.processing {
            return None;
        }
        if self.recorded {
            warn!("Ignoring submit for already recorded payment {:?}", self.transaction_id);
            self.error = Some(translator.resolve(keys::PAYMENT_ALREADY_COMPLETED).to_string());
            return None;
        }

        self.processing = true;
        self.error = None;
        let result = self.pay(user, gateway, backend, translator).await;
        self.processing = false;

        match result {
            Ok(success) => {
                self.recorded = true;
                Some(success)
            }
            Err(message) => {
                self.error = Some(message);
                None
            }
        }
    }

    async fn pay(
        &mut self,
        user: &Session,
        gateway: &dyn PaymentGateway,
        backend: &BackendClient,
        translator: &Translator<'_>,
    ) -> Result<CheckoutSuccess, String> {
        let transaction_id = match self.transaction_id.clone() {
            Some(id) => {
                info!("Payment {} already confirmed, retrying the record only", id);
                id
            }
            None => self.confirm(user, gateway, translator).await?,
        };

        let tutor_emails = self.tutor_emails();
        let record = PaymentRecord {
            email: user.email.clone(),
            price: self.total_price(),
            transaction_id: transaction_id.clone(),
            date: Utc::now(),
            cart_ids: self.cart.iter().map(|item| item.id.clone()).collect(),
            menu_item_ids: self.cart.iter().map(|item| item.menu_id.clone()).collect(),
            total_tutor_emails: tutor_emails.len(),
            tutor_emails,
            status: "pending".to_string(),
        };

        let response = backend.record_payment(&record).await.map_err(|e| {
            error!("Failed to record payment {}: {}", transaction_id, e);
            translator.resolve(keys::PAYMENT_UNEXPECTED_ERROR).to_string()
        })?;

        if !response.is_recorded() {
            warn!("Payment {} was not recorded by the backend", transaction_id);
            return Err(translator.resolve(keys::PAYMENT_UNEXPECTED_ERROR).to_string());
        }

        info!("Payment {} recorded for {}", transaction_id, user.email);
        Ok(CheckoutSuccess {
            notice: Notice::success(translator.resolve(keys::PAYMENT_SUCCESS))
                .with_text(translator.resolve(keys::BOOKING_CONFIRMED)),
            transaction_id,
            redirect: "/dashboard/paymentHistory".to_string(),
        })
    }

    /// Confirm the card with the gateway. The client secret is spent on
    /// success.
    async fn confirm(
        &mut self,
        user: &Session,
        gateway: &dyn PaymentGateway,
        translator: &Translator<'_>,
    ) -> Result<String, String> {
        let (Some(secret), Some(card)) = (self.client_secret.as_deref(), self.card.as_ref()) else {
            return Err(translator.resolve(keys::PAYMENT_NOT_READY).to_string());
        };

        let billing = BillingDetails::for_user(Some(&user.email), user.display_name.as_deref());
        let intent = gateway
            .confirm_card_payment(secret, card, &billing)
            .await
            .map_err(|e| e.to_string())?;

        if !intent.succeeded() {
            info!("Payment intent {} ended in status {}", intent.id, intent.status);
            return Err(translator.resolve(keys::PAYMENT_NOT_COMPLETED).to_string());
        }

        self.client_secret = None;
        self.transaction_id = Some(intent.id.clone());
        Ok(intent.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::fakes::{backend, card, session, FakeGateway};
    use wiremock::{
        matchers::{body_partial_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn cart() -> Vec<CartItem> {
        serde_json::from_value(serde_json::json!([
            {"_id": "c1", "email": "s@example.com", "tutorId": "t1", "tutorEmail": "t1@example.com", "price": 20.0, "menuId": "m1"},
            {"_id": "c2", "email": "s@example.com", "tutorId": "t2", "price": 15.5},
            {"_id": "c3", "email": "s@example.com", "tutorId": "t3", "tutorEmail": "t3@example.com"}
        ]))
        .unwrap()
    }

    async fn mock_intent(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/create-payment-intent"))
            .and(body_partial_json(serde_json::json!({"price": 35.5})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"clientSecret": "pi_9_secret_z"})))
            .mount(server)
            .await;
    }

    #[test]
    fn test_totals_and_tutor_emails() {
        let checkout = Checkout::new(cart());
        assert!((checkout.total_price() - 35.5).abs() < 1e-9);
        assert_eq!(checkout.tutor_emails(), vec!["t1@example.com", "t3@example.com"]);
    }

    #[tokio::test]
    async fn test_empty_cart_requests_no_intent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/create-payment-intent"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut checkout = Checkout::new(Vec::new());
        checkout.prepare(&backend(&server.uri())).await;
        assert!(!checkout.is_ready());
    }

    #[tokio::test]
    async fn test_submit_before_ready() {
        let translator = Translator::shipped();
        let mut checkout = Checkout::new(cart());
        checkout.set_card(card());

        let result = checkout
            .submit(
                &session("s@example.com"),
                &FakeGateway::with_status("succeeded"),
                &backend("http://127.0.0.1:9"),
                &translator,
            )
            .await;

        assert!(result.is_none());
        assert_eq!(checkout.error(), Some("Payment is not ready yet. Please wait a moment."));
    }

    #[tokio::test]
    async fn test_successful_payment_is_recorded() {
        let server = MockServer::start().await;
        mock_intent(&server).await;
        Mock::given(method("POST"))
            .and(path("/payments"))
            .and(body_partial_json(serde_json::json!({
                "email": "s@example.com",
                "price": 35.5,
                "transactionId": "pi_test_1",
                "cartIds": ["c1", "c2", "c3"],
                "menuItemIds": ["m1", null, null],
                "tutorEmails": ["t1@example.com", "t3@example.com"],
                "totalTutorEmails": 2,
                "status": "pending"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "paymentResult": {"insertedId": "p1"},
                "deleteResult": {"deletedCount": 3}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let translator = Translator::shipped();
        let backend = backend(&server.uri());
        let gateway = FakeGateway::with_status("succeeded");
        let mut checkout = Checkout::new(cart());
        checkout.prepare(&backend).await;
        assert!(checkout.is_ready());
        checkout.set_card(card());

        let success = checkout
            .submit(&session("s@example.com"), &gateway, &backend, &translator)
            .await
            .unwrap();

        assert_eq!(success.notice.title, "Payment Successful!");
        assert_eq!(success.redirect, "/dashboard/paymentHistory");
        assert_eq!(checkout.transaction_id(), Some("pi_test_1"));
        assert!(!checkout.is_processing());
        assert_eq!(*gateway.confirmed.lock().unwrap(), vec!["pi_9_secret_z"]);
    }

    #[tokio::test]
    async fn test_declined_card_keeps_input() {
        let server = MockServer::start().await;
        mock_intent(&server).await;

        let translator = Translator::shipped();
        let backend = backend(&server.uri());
        let mut checkout = Checkout::new(cart());
        checkout.prepare(&backend).await;
        checkout.set_card(card());

        let result = checkout
            .submit(
                &session("s@example.com"),
                &FakeGateway::declining("Your card was declined."),
                &backend,
                &translator,
            )
            .await;

        assert!(result.is_none());
        assert_eq!(checkout.error(), Some("Your card was declined."));
        assert_eq!(checkout.card(), Some(&card()));
        assert!(!checkout.is_processing());
    }

    #[tokio::test]
    async fn test_record_failure_shows_generic_error() {
        let server = MockServer::start().await;
        mock_intent(&server).await;
        Mock::given(method("POST"))
            .and(path("/payments"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let translator = Translator::shipped();
        let backend = backend(&server.uri());
        let mut checkout = Checkout::new(cart());
        checkout.prepare(&backend).await;
        checkout.set_card(card());

        let result = checkout
            .submit(
                &session("s@example.com"),
                &FakeGateway::with_status("succeeded"),
                &backend,
                &translator,
            )
            .await;

        assert!(result.is_none());
        assert_eq!(
            checkout.error(),
            Some("An unexpected error occurred. Please try again.")
        );
    }

    #[tokio::test]
    async fn test_second_submit_does_not_charge_again() {
        let server = MockServer::start().await;
        mock_intent(&server).await;
        Mock::given(method("POST"))
            .and(path("/payments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "paymentResult": {"insertedId": "p1"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let translator = Translator::shipped();
        let backend = backend(&server.uri());
        let gateway = FakeGateway::with_status("succeeded");
        let user = session("s@example.com");
        let mut checkout = Checkout::new(cart());
        checkout.prepare(&backend).await;
        checkout.set_card(card());

        let first = checkout.submit(&user, &gateway, &backend, &translator).await;
        let second = checkout.submit(&user, &gateway, &backend, &translator).await;

        assert!(first.is_some());
        assert!(second.is_none());
        assert!(checkout.is_completed());
        assert!(!checkout.is_ready());
        assert_eq!(checkout.error(), Some("This booking has already been paid."));
        assert_eq!(gateway.confirmed.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_retry_after_record_failure_skips_gateway() {
        let server = MockServer::start().await;
        mock_intent(&server).await;
        Mock::given(method("POST"))
            .and(path("/payments"))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/payments"))
            .and(body_partial_json(serde_json::json!({"transactionId": "pi_test_1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "paymentResult": {"insertedId": "p1"}
            })))
            .mount(&server)
            .await;

        let translator = Translator::shipped();
        let backend = backend(&server.uri());
        let gateway = FakeGateway::with_status("succeeded");
        let user = session("s@example.com");
        let mut checkout = Checkout::new(cart());
        checkout.prepare(&backend).await;
        checkout.set_card(card());

        assert!(checkout.submit(&user, &gateway, &backend, &translator).await.is_none());
        assert_eq!(checkout.transaction_id(), Some("pi_test_1"));

        let success = checkout
            .submit(&user, &gateway, &backend, &translator)
            .await
            .unwrap();

        assert_eq!(success.transaction_id, "pi_test_1");
        assert_eq!(gateway.confirmed.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unfinished_intent_shows_error() {
        let server = MockServer::start().await;
        mock_intent(&server).await;
        Mock::given(method("POST"))
            .and(path("/payments"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let translator = Translator::shipped();
        let backend = backend(&server.uri());
        let mut checkout = Checkout::new(cart());
        checkout.prepare(&backend).await;
        checkout.set_card(card());

        let result = checkout
            .submit(
                &session("s@example.com"),
                &FakeGateway::with_status("requires_action"),
                &backend,
                &translator,
            )
            .await;

        assert!(result.is_none());
        assert_eq!(
            checkout.error(),
            Some("Payment was not completed. Please try again.")
        );
        assert!(checkout.is_ready());
        assert_eq!(checkout.transaction_id(), None);
    }
}
