//! Captcha challenge and the per-form gate that blocks submission.

use crate::i18n::{keys, Translator};
use crate::notice::Notice;
use subtle::ConstantTimeEq;
use tracing::debug;

pub trait Captcha: Send + Sync {
    /// Text the user is asked to copy.
    fn challenge(&self) -> &str;

    fn validate(&self, input: &str) -> bool;
}

/// Constant-time string comparison
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Captcha over a challenge text rendered by an external widget.
///
/// Matching is exact (case-sensitive), with surrounding whitespace ignored
/// on the user's input only.
#[derive(Debug, Clone)]
pub struct TextCaptcha {
    challenge: String,
}

impl TextCaptcha {
    pub fn new(challenge: impl Into<String>) -> Self {
        Self {
            challenge: challenge.into(),
        }
    }
}

impl Captcha for TextCaptcha {
    fn challenge(&self) -> &str {
        &self.challenge
    }

    fn validate(&self, input: &str) -> bool {
        !self.challenge.is_empty() && constant_time_compare(input.trim(), &self.challenge)
    }
}

/// Local form state: submission stays locked until the captcha validates.
pub struct CaptchaGate<C: Captcha> {
    captcha: C,
    validated: bool,
}

impl<C: Captcha> CaptchaGate<C> {
    pub fn new(captcha: C) -> Self {
        Self {
            captcha,
            validated: false,
        }
    }

    pub fn is_validated(&self) -> bool {
        self.validated
    }

    pub fn challenge(&self) -> &str {
        self.captcha.challenge()
    }

    /// Check the user's input; a wrong value re-locks a previously
    /// validated gate.
    pub fn submit(&mut self, input: &str, translator: &Translator<'_>) -> Notice {
        self.validated = self.captcha.validate(input);
        debug!("Captcha validation result: {}", self.validated);

        if self.validated {
            Notice::success(translator.resolve(keys::CAPTCHA_VALIDATED))
        } else {
            Notice::error(translator.resolve(keys::INVALID_CAPTCHA))
                .with_text(translator.resolve(keys::PLEASE_TRY_AGAIN))
                .with_confirm(translator.resolve(keys::OK))
        }
    }
}
