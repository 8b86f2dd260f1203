use crate::api::{BackendClient, NewCartItem, Rating, Tutor};
use crate::auth::Session;
use crate::i18n::{keys, Translator};
use crate::notice::Notice;
use crate::views::LoadState;
use tracing::{error, info};

const UNSPECIFIED_SUBJECT: &str = "Not specified";
const PENDING: &str = "Pending";

#[derive(Debug, Clone)]
pub struct TutorProfile {
    pub tutor: Tutor,
    pub ratings: Vec<Rating>,
}

impl TutorProfile {
    /// Mean rating, 0 when there are no ratings.
    pub fn average_rating(&self) -> f64 {
        if self.ratings.is_empty() {
            return 0.0;
        }
        self.ratings.iter().map(|r| r.rating).sum::<f64>() / self.ratings.len() as f64
    }
}

#[derive(Debug, Clone)]
pub struct BookingOutcome {
    pub notice: Notice,
    pub redirect: Option<String>,
}

/// Tutor details page.
pub struct TutorPage {
    tutor_id: String,
    state: LoadState<TutorProfile>,
}

impl TutorPage {
    pub fn new(tutor_id: impl Into<String>) -> Self {
        Self {
            tutor_id: tutor_id.into(),
            state: LoadState::Loading,
        }
    }

    pub fn state(&self) -> &LoadState<TutorProfile> {
        &self.state
    }

    /// Fetch tutor and ratings concurrently. Reloading replaces the state.
    pub async fn load(&mut self, backend: &BackendClient, translator: &Translator<'_>) {
        self.state = LoadState::Loading;

        let (tutor, ratings) = futures::join!(
            backend.get_tutor(&self.tutor_id),
            backend.get_ratings(&self.tutor_id)
        );

        self.state = match (tutor, ratings) {
            (Ok(tutor), Ok(ratings)) => LoadState::Ready(TutorProfile { tutor, ratings }),
            (Err(e), _) if e.status() == Some(404) => {
                LoadState::Failed(translator.resolve(keys::TUTOR_NOT_FOUND).to_string())
            }
            (Err(e), _) | (_, Err(e)) => {
                error!("Failed to load tutor {}: {}", self.tutor_id, e);
                LoadState::Failed(translator.resolve(keys::FAILED_TO_LOAD_TUTOR).to_string())
            }
        };
    }

    /// Book the loaded tutor for the signed-in user.
    ///
    /// A user can only hold one booking per tutor; the existing cart is
    /// checked before a new entry is created.
    pub async fn book(
        &self,
        user: Option<&Session>,
        backend: &BackendClient,
        translator: &Translator<'_>,
    ) -> BookingOutcome {
        let Some(user) = user else {
            return BookingOutcome {
                notice: Notice::warning(translator.resolve(keys::LOGIN_TO_BOOK)),
                redirect: Some("/login".to_string()),
            };
        };

        let Some(profile) = self.state.ready() else {
            return failed(translator);
        };
        let tutor = &profile.tutor;

        let existing = match backend.get_carts(&user.email).await {
            Ok(items) => items,
            Err(e) => {
                error!("Error checking existing bookings: {}", e);
                return failed(translator);
            }
        };
        if existing.iter().any(|item| item.tutor_id == tutor.id) {
            return BookingOutcome {
                notice: Notice::info(translator.resolve(keys::ALREADY_BOOKED)),
                redirect: None,
            };
        }

        let item = NewCartItem {
            email: user.email.clone(),
            tutor_id: tutor.id.clone(),
            tutor_name: tutor.name.clone(),
            tutor_email: tutor.email.clone(),
            subject: tutor
                .subjects
                .first()
                .cloned()
                .unwrap_or_else(|| UNSPECIFIED_SUBJECT.to_string()),
            price: tutor.hourly_rate.unwrap_or(0.0),
            status: PENDING.to_string(),
        };

        match backend.add_to_cart(&item).await {
            Ok(_) => {
                info!("{} booked tutor {}", user.email, tutor.id);
                BookingOutcome {
                    notice: Notice::success(translator.resolve(keys::BOOKING_SUCCESS)),
                    redirect: Some("/dashboard/my-bookings".to_string()),
                }
            }
            Err(e) => {
                error!("Error booking tutor: {}", e);
                failed(translator)
            }
        }
    }
}

fn failed(translator: &Translator<'_>) -> BookingOutcome {
    BookingOutcome {
        notice: Notice::error(translator.resolve(keys::BOOKING_FAILED)),
        redirect: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeLevel;
    use crate::views::fakes::{backend, session};
    use wiremock::{
        matchers::{body_partial_json, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    async fn mock_tutor(server: &MockServer, subjects: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/tutors/t1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "_id": "t1",
                "name": "Jean Baptiste",
                "email": "jean@example.com",
                "subjects": subjects,
                "hourlyRate": 25.0
            })))
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path("/ratings/t1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"rating": 5}, {"rating": 4}, {"rating": 3}
            ])))
            .mount(server)
            .await;
    }

    async fn loaded_page(server: &MockServer, translator: &Translator<'_>) -> TutorPage {
        let mut page = TutorPage::new("t1");
        page.load(&backend(&server.uri()), translator).await;
        page
    }

    #[tokio::test]
    async fn test_load_computes_average() {
        let server = MockServer::start().await;
        mock_tutor(&server, serde_json::json!(["Math"])).await;
        let translator = Translator::shipped();

        let page = loaded_page(&server, &translator).await;

        let profile = page.state().ready().unwrap();
        assert_eq!(profile.tutor.name, "Jean Baptiste");
        assert!((profile.average_rating() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_average_without_ratings_is_zero() {
        let profile = TutorProfile {
            tutor: serde_json::from_value(serde_json::json!({"_id": "t", "name": "T"})).unwrap(),
            ratings: Vec::new(),
        };
        assert_eq!(profile.average_rating(), 0.0);
    }

    #[tokio::test]
    async fn test_load_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tutors/t1"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({"message": "not found"})))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/ratings/t1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;
        let translator = Translator::shipped();

        let page = loaded_page(&server, &translator).await;

        assert_eq!(page.state().error(), Some("Tutor not found"));
    }

    #[tokio::test]
    async fn test_ratings_failure_fails_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tutors/t1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"_id": "t1", "name": "T"})))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/ratings/t1"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        let translator = Translator::shipped();

        let page = loaded_page(&server, &translator).await;

        assert_eq!(page.state().error(), Some("Failed to load tutor details"));
    }

    #[tokio::test]
    async fn test_booking_requires_login() {
        let translator = Translator::shipped();
        let page = TutorPage::new("t1");

        let outcome = page.book(None, &backend("http://127.0.0.1:9"), &translator).await;

        assert_eq!(outcome.notice.title, "Please log in to book a tutor.");
        assert_eq!(outcome.redirect.as_deref(), Some("/login"));
    }

    #[tokio::test]
    async fn test_booking_creates_pending_cart_entry() {
        let server = MockServer::start().await;
        mock_tutor(&server, serde_json::json!([])).await;
        Mock::given(method("GET"))
            .and(path("/carts"))
            .and(query_param("email", "student@example.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/carts"))
            .and(body_partial_json(serde_json::json!({
                "email": "student@example.com",
                "tutorId": "t1",
                "tutorName": "Jean Baptiste",
                "subject": "Not specified",
                "price": 25.0,
                "status": "Pending"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"insertedId": "c1"})))
            .expect(1)
            .mount(&server)
            .await;

        let translator = Translator::shipped();
        let page = loaded_page(&server, &translator).await;
        let user = session("student@example.com");

        let outcome = page.book(Some(&user), &backend(&server.uri()), &translator).await;

        assert_eq!(outcome.notice.level, NoticeLevel::Success);
        assert_eq!(outcome.redirect.as_deref(), Some("/dashboard/my-bookings"));
    }

    #[tokio::test]
    async fn test_duplicate_booking_rejected() {
        let server = MockServer::start().await;
        mock_tutor(&server, serde_json::json!(["Math"])).await;
        Mock::given(method("GET"))
            .and(path("/carts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"_id": "c1", "email": "student@example.com", "tutorId": "t1"}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/carts"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let translator = Translator::shipped();
        translator.set_active_locale("ht");
        let page = loaded_page(&server, &translator).await;
        let user = session("student@example.com");

        let outcome = page.book(Some(&user), &backend(&server.uri()), &translator).await;

        // Kreyòl has no text for this notice; the English one is used
        assert_eq!(outcome.notice.title, "You have already booked this tutor.");
        assert!(outcome.redirect.is_none());
    }
}
