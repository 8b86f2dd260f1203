use crate::api::{BackendClient, NewUser};
use crate::auth::IdentityProvider;
use crate::captcha::{Captcha, CaptchaGate};
use crate::i18n::{keys, Translator};
use crate::images::ImageUploader;
use crate::notice::Notice;
use regex::Regex;
use std::sync::OnceLock;
use tracing::{error, info};

const MIN_PASSWORD_LEN: usize = 6;
const PASSWORD_SPECIALS: &[char] = &['!', '@', '#', '$', '&', '*'];

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

/// Profile photo as chosen on the form.
#[derive(Debug, Clone, Default)]
pub enum PhotoInput {
    #[default]
    None,
    /// A file picked from disk; uploaded before the account is created
    File { bytes: Vec<u8>, file_name: String },
    Url(String),
}

#[derive(Debug, Clone, Default)]
pub struct SignupData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub photo: PhotoInput,
}

/// Inline validation error for one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone)]
pub enum SignupOutcome {
    /// Form did not validate; nothing was sent
    Invalid(Vec<FieldError>),
    /// A step failed; earlier steps are not undone
    Failed(Notice),
    Created { notice: Notice, redirect: String },
}

pub struct SignupForm<C: Captcha> {
    captcha: CaptchaGate<C>,
}

impl<C: Captcha> SignupForm<C> {
    pub fn new(captcha: C) -> Self {
        Self {
            captcha: CaptchaGate::new(captcha),
        }
    }

    pub fn validate_captcha(&mut self, input: &str, translator: &Translator<'_>) -> Notice {
        self.captcha.submit(input, translator)
    }

    pub fn can_submit(&self) -> bool {
        self.captcha.is_validated()
    }

    /// Field-level validation, in form order.
    pub fn validate(&self, data: &SignupData, translator: &Translator<'_>) -> Vec<FieldError> {
        let mut errors = Vec::new();
        let mut push = |field, key| {
            errors.push(FieldError {
                field,
                message: translator.resolve(key).to_string(),
            })
        };

        if data.name.trim().is_empty() {
            push("name", keys::NAME_REQUIRED);
        }

        let email = data.email.trim();
        if email.is_empty() {
            push("email", keys::EMAIL_REQUIRED);
        } else if !email_regex().is_match(email) {
            push("email", keys::INVALID_EMAIL);
        }

        if data.password.is_empty() {
            push("password", keys::PASSWORD_REQUIRED);
        } else if data.password.chars().count() < MIN_PASSWORD_LEN {
            push("password", keys::PASSWORD_MIN_LENGTH);
        } else if !password_has_required_classes(&data.password) {
            push("password", keys::PASSWORD_PATTERN);
        }

        errors
    }

    /// Run the signup flow: photo upload, account creation, profile update,
    /// user record. Each step must succeed before the next one starts.
    pub async fn submit(
        &self,
        data: SignupData,
        identity: &dyn IdentityProvider,
        backend: &BackendClient,
        uploader: Option<&dyn ImageUploader>,
        translator: &Translator<'_>,
    ) -> SignupOutcome {
        if !self.captcha.is_validated() {
            return SignupOutcome::Failed(
                Notice::warning(translator.resolve(keys::CAPTCHA_REQUIRED))
                    .with_text(translator.resolve(keys::PLEASE_VERIFY_CAPTCHA)),
            );
        }

        let errors = self.validate(&data, translator);
        if !errors.is_empty() {
            return SignupOutcome::Invalid(errors);
        }

        let upload_failed = || {
            SignupOutcome::Failed(
                Notice::error(translator.resolve(keys::IMAGE_UPLOAD_FAILED))
                    .with_text(translator.resolve(keys::IMAGE_UPLOAD_FAILED_TEXT)),
            )
        };

        let photo_url = match data.photo {
            PhotoInput::None => None,
            PhotoInput::Url(url) => Some(url).filter(|u| !u.trim().is_empty()),
            PhotoInput::File { bytes, file_name } => {
                let Some(uploader) = uploader else {
                    error!("Image upload requested but no image host is configured");
                    return upload_failed();
                };
                match uploader.upload(bytes, &file_name).await {
                    Ok(url) => Some(url),
                    Err(e) => {
                        error!("Image upload failed: {:#}", e);
                        return upload_failed();
                    }
                }
            }
        };

        let failed = |text: String| {
            SignupOutcome::Failed(
                Notice::error(translator.resolve(keys::SIGNUP_FAILED)).with_text(text),
            )
        };

        let email = data.email.trim();
        let name = data.name.trim();

        let session = match identity.create_account(email, &data.password).await {
            Ok(session) => session,
            Err(e) => {
                error!("Create user error: {}", e);
                return failed(e.to_string());
            }
        };

        if let Err(e) = identity.update_profile(name, photo_url.as_deref()).await {
            error!("Profile update error: {}", e);
            return failed(e.to_string());
        }

        let user = NewUser {
            uid: session.uid.clone(),
            name: name.to_string(),
            email: email.to_string(),
            photo_url,
        };
        match backend.create_user(&user).await {
            Ok(result) if result.is_inserted() => {
                info!("User {} added to the database", session.uid);
                SignupOutcome::Created {
                    notice: Notice::success(translator.resolve(keys::USER_CREATED)),
                    redirect: "/".to_string(),
                }
            }
            Ok(_) => failed(translator.resolve(keys::SIGNUP_FAILED).to_string()),
            Err(e) => {
                error!("Database error: {}", e);
                failed(
                    e.server_message()
                        .map(str::to_string)
                        .unwrap_or_else(|| e.to_string()),
                )
            }
        }
    }
}

/// At least one uppercase, one lowercase, one digit and one of `!@#$&*`.
fn password_has_required_classes(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SPECIALS.contains(&c))
}
