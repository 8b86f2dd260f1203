use crate::auth::{IdentityProvider, Session};
use crate::captcha::{Captcha, CaptchaGate};
use crate::i18n::{keys, Translator};
use crate::notice::Notice;
use tracing::{info, warn};

/// What happened when the login form was submitted.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub notice: Notice,
    /// Page to navigate to after a successful sign-in
    pub redirect: Option<String>,
    pub session: Option<Session>,
}

impl LoginOutcome {
    fn blocked(notice: Notice) -> Self {
        Self {
            notice,
            redirect: None,
            session: None,
        }
    }
}

pub struct LoginForm<C: Captcha> {
    captcha: CaptchaGate<C>,
    terms_accepted: bool,
    from: Option<String>,
}

impl<C: Captcha> LoginForm<C> {
    /// `from` is the page the user was sent away from, if any.
    pub fn new(captcha: C, from: Option<String>) -> Self {
        Self {
            captcha: CaptchaGate::new(captcha),
            terms_accepted: false,
            from,
        }
    }

    pub fn validate_captcha(&mut self, input: &str, translator: &Translator<'_>) -> Notice {
        self.captcha.submit(input, translator)
    }

    pub fn set_terms_accepted(&mut self, accepted: bool) {
        self.terms_accepted = accepted;
    }

    /// The submit button is enabled once the captcha has been validated.
    pub fn can_submit(&self) -> bool {
        self.captcha.is_validated()
    }

    pub fn redirect_target(&self) -> &str {
        self.from.as_deref().filter(|p| !p.is_empty()).unwrap_or("/")
    }

    pub async fn submit(
        &self,
        identity: &dyn IdentityProvider,
        email: &str,
        password: &str,
        translator: &Translator<'_>,
    ) -> LoginOutcome {
        if !self.captcha.is_validated() {
            return LoginOutcome::blocked(
                Notice::warning(translator.resolve(keys::CAPTCHA_REQUIRED))
                    .with_text(translator.resolve(keys::PLEASE_VERIFY_CAPTCHA)),
            );
        }

        if !self.terms_accepted {
            return LoginOutcome::blocked(
                Notice::warning(translator.resolve(keys::TERMS_REQUIRED))
                    .with_text(translator.resolve(keys::ACCEPT_TERMS))
                    .with_confirm(translator.resolve(keys::OK)),
            );
        }

        match identity.sign_in(email, password).await {
            Ok(session) => {
                info!("Login succeeded, redirecting to {}", self.redirect_target());
                LoginOutcome {
                    notice: Notice::success(translator.resolve(keys::SUCCESS_LOGIN)),
                    redirect: Some(self.redirect_target().to_string()),
                    session: Some(session),
                }
            }
            Err(e) => {
                warn!("Login failed: {}", e);
                LoginOutcome::blocked(
                    Notice::error(translator.resolve(keys::FAILED_LOGIN))
                        .with_text(e.to_string())
                        .with_confirm(translator.resolve(keys::TRY_AGAIN)),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::captcha::TextCaptcha;
    use crate::notice::NoticeLevel;
    use crate::views::fakes::FakeIdentity;

    fn ready_form(from: Option<&str>, translator: &Translator<'_>) -> LoginForm<TextCaptcha> {
        let mut form = LoginForm::new(TextCaptcha::new("Xy12ab"), from.map(str::to_string));
        form.validate_captcha("Xy12ab", translator);
        form.set_terms_accepted(true);
        form
    }

    #[tokio::test]
    async fn test_captcha_checked_before_anything_else() {
        let translator = Translator::shipped();
        let identity = FakeIdentity::default();
        let form = LoginForm::new(TextCaptcha::new("Xy12ab"), None);
        assert!(!form.can_submit());

        let outcome = form.submit(&identity, "a@example.com", "pw", &translator).await;

        assert_eq!(outcome.notice.level, NoticeLevel::Warning);
        assert_eq!(outcome.notice.title, "Captcha Required");
        assert!(identity.calls().is_empty());
    }

    #[tokio::test]
    async fn test_terms_required() {
        let translator = Translator::shipped();
        let identity = FakeIdentity::default();
        let mut form = ready_form(None, &translator);
        form.set_terms_accepted(false);

        let outcome = form.submit(&identity, "a@example.com", "pw", &translator).await;

        assert_eq!(outcome.notice.title, "Terms & Conditions Required");
        assert!(outcome.redirect.is_none());
        assert!(identity.calls().is_empty());
    }

    #[tokio::test]
    async fn test_success_redirects_to_origin() {
        let translator = Translator::shipped();
        let identity = FakeIdentity::default();
        let form = ready_form(Some("/tutors/42"), &translator);

        let outcome = form.submit(&identity, "a@example.com", "Secret1!", &translator).await;

        assert_eq!(outcome.notice.level, NoticeLevel::Success);
        assert_eq!(outcome.notice.title, "User Login Successful!");
        assert_eq!(outcome.redirect.as_deref(), Some("/tutors/42"));
        assert_eq!(outcome.session.unwrap().email, "a@example.com");
    }

    #[tokio::test]
    async fn test_success_defaults_to_home() {
        let translator = Translator::shipped();
        let form = ready_form(None, &translator);
        let outcome = form
            .submit(&FakeIdentity::default(), "a@example.com", "Secret1!", &translator)
            .await;
        assert_eq!(outcome.redirect.as_deref(), Some("/"));
    }

    #[tokio::test]
    async fn test_failure_notice_is_localized() {
        let translator = Translator::shipped();
        translator.set_active_locale("fr");
        let identity = FakeIdentity {
            fail_sign_in: Some("INVALID_LOGIN_CREDENTIALS".to_string()),
            ..FakeIdentity::default()
        };
        let form = ready_form(None, &translator);

        let outcome = form.submit(&identity, "a@example.com", "bad", &translator).await;

        assert!(outcome.notice.is_error());
        assert_eq!(outcome.notice.title, translator.resolve(keys::FAILED_LOGIN));
        assert_eq!(outcome.notice.text.as_deref(), Some("INVALID_LOGIN_CREDENTIALS"));
        assert_eq!(
            outcome.notice.confirm_label.as_deref(),
            Some(translator.resolve(keys::TRY_AGAIN))
        );
        assert!(outcome.session.is_none());
    }
}
