//! Active-locale state and key resolution.

use crate::i18n::{LanguageRegistry, LocaleConfig, LookupMetrics};
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info, warn};

/// Locale metadata shown by a locale switcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleSummary {
    pub code: &'static str,
    pub name: &'static str,
    pub glyph: &'static str,
}

impl From<&LocaleConfig> for LocaleSummary {
    fn from(config: &LocaleConfig) -> Self {
        Self {
            code: config.code,
            name: config.name,
            glyph: config.glyph,
        }
    }
}

/// Resolves keys against the active locale of a registry.
///
/// The registry is immutable; the only mutable state is the active locale,
/// stored as a catalog position. There is a single writer (the user's
/// locale selection) and any number of readers, so an atomic is enough.
///
/// Switching to an unregistered locale is rejected: the previous active
/// locale stays in place.
pub struct Translator<'r> {
    registry: &'r LanguageRegistry,
    active: AtomicUsize,
    metrics: LookupMetrics,
}

impl Translator<'static> {
    /// Translator over the shipped catalog, starting on the default locale.
    pub fn shipped() -> Self {
        Translator::new(LanguageRegistry::get())
    }
}

impl<'r> Translator<'r> {
    /// Create a translator starting on the registry's default locale.
    pub fn new(registry: &'r LanguageRegistry) -> Self {
        Self {
            registry,
            active: AtomicUsize::new(registry.default_index()),
            metrics: LookupMetrics::new(),
        }
    }

    /// Create a translator starting on `code`, or on the default locale if
    /// `code` is not registered.
    pub fn with_initial(registry: &'r LanguageRegistry, code: &str) -> Self {
        let translator = Self::new(registry);
        match registry.position(code) {
            Some(index) => translator.active.store(index, Ordering::Relaxed),
            None => warn!(
                "Initial locale '{}' is not registered, starting with '{}'",
                code,
                registry.default_locale().code
            ),
        }
        translator
    }

    /// Resolve a key to display text.
    ///
    /// Lookup order: active locale, then default locale, then the key
    /// itself. Never fails.
    pub fn resolve<'k>(&self, key: &'k str) -> &'k str {
        let active = self.active_locale();
        if let Some(text) = active.lookup(key) {
            self.metrics.record_direct_hit();
            return text;
        }

        let default = self.registry.default_locale();
        if let Some(text) = default.lookup(key) {
            debug!(
                "Key '{}' missing in locale '{}', using '{}'",
                key, active.code, default.code
            );
            self.metrics.record_fallback_hit();
            return text;
        }

        debug!("Missing translation key: '{}'. Returning key as-is", key);
        self.metrics.record_key_echo();
        key
    }

    /// Switch the active locale.
    ///
    /// # Returns
    /// `true` if `code` is registered and is now active, `false` if it was
    /// rejected (the active locale is unchanged).
    pub fn set_active_locale(&self, code: &str) -> bool {
        match self.registry.position(code) {
            Some(index) => {
                let previous = self.active.swap(index, Ordering::Relaxed);
                if previous != index {
                    info!(
                        "Active locale changed: {} -> {}",
                        self.registry.locale_at(previous).code,
                        code
                    );
                }
                self.metrics.record_locale_switch();
                true
            }
            None => {
                warn!(
                    "Rejected switch to unregistered locale '{}', keeping '{}'",
                    code,
                    self.active_code()
                );
                self.metrics.record_rejected_switch();
                false
            }
        }
    }

    /// Configuration of the active locale.
    pub fn active_locale(&self) -> &'r LocaleConfig {
        self.registry.locale_at(self.active.load(Ordering::Relaxed))
    }

    pub fn active_code(&self) -> &'static str {
        self.active_locale().code
    }

    /// All registered locales, in catalog order.
    pub fn list_locales(&self) -> Vec<LocaleSummary> {
        self.registry
            .list_all()
            .into_iter()
            .map(LocaleSummary::from)
            .collect()
    }

    pub fn registry(&self) -> &'r LanguageRegistry {
        self.registry
    }

    pub fn metrics(&self) -> &LookupMetrics {
        &self.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en_fr_registry() -> LanguageRegistry {
        LanguageRegistry::new(vec![
            LocaleConfig::new("en", "English", "🇺🇸", &[("signup", "Sign Up"), ("login", "Login")])
                .as_default(),
            LocaleConfig::new("fr", "Français", "🇫🇷", &[("login", "Connexion")]),
        ])
        .unwrap()
    }

    // ==================== Resolution Tests ====================

    #[test]
    fn test_fallback_to_default_locale() {
        let registry = en_fr_registry();
        let translator = Translator::new(&registry);
        assert!(translator.set_active_locale("fr"));

        assert_eq!(translator.resolve("signup"), "Sign Up");
        assert_eq!(translator.resolve("missingKey"), "missingKey");
    }

    #[test]
    fn test_direct_hit() {
        let registry = en_fr_registry();
        let translator = Translator::new(&registry);
        assert_eq!(translator.resolve("signup"), "Sign Up");

        translator.set_active_locale("fr");
        assert_eq!(translator.resolve("login"), "Connexion");
    }

    #[test]
    fn test_key_echo_for_empty_key() {
        let translator = Translator::shipped();
        assert_eq!(translator.resolve(""), "");
    }

    #[test]
    fn test_empty_value_falls_through() {
        let registry = LanguageRegistry::new(vec![
            LocaleConfig::new("en", "English", "🇺🇸", &[("signup", "Sign Up")]).as_default(),
            LocaleConfig::new("fr", "Français", "🇫🇷", &[("signup", "")]),
        ])
        .unwrap();
        let translator = Translator::with_initial(&registry, "fr");
        assert_eq!(translator.resolve("signup"), "Sign Up");
    }

    // ==================== Locale Switching Tests ====================

    #[test]
    fn test_unknown_locale_is_rejected() {
        let registry = en_fr_registry();
        let translator = Translator::new(&registry);

        assert!(!translator.set_active_locale("de"));
        assert_eq!(translator.active_code(), "en");
        assert_eq!(translator.resolve("signup"), "Sign Up");
        assert_eq!(translator.metrics().rejected_switches(), 1);
    }

    #[test]
    fn test_rejected_switch_keeps_non_default_locale() {
        let registry = en_fr_registry();
        let translator = Translator::with_initial(&registry, "fr");

        assert!(!translator.set_active_locale("de"));
        assert_eq!(translator.active_code(), "fr");
        assert_eq!(translator.resolve("login"), "Connexion");
    }

    #[test]
    fn test_round_trip_is_idempotent() {
        let translator = Translator::shipped();
        translator.set_active_locale("fr");
        let before: Vec<_> = ["home", "signup", "nope"]
            .iter()
            .map(|k| translator.resolve(k).to_string())
            .collect();

        translator.set_active_locale("ht");
        translator.set_active_locale("fr");
        let after: Vec<_> = ["home", "signup", "nope"]
            .iter()
            .map(|k| translator.resolve(k).to_string())
            .collect();

        assert_eq!(before, after);
    }

    #[test]
    fn test_with_initial_unknown_uses_default() {
        let translator = Translator::with_initial(LanguageRegistry::get(), "xx");
        assert_eq!(translator.active_code(), "en");
    }

    #[test]
    fn test_with_initial_known() {
        let translator = Translator::with_initial(LanguageRegistry::get(), "ht");
        assert_eq!(translator.active_code(), "ht");
        assert_eq!(translator.resolve("home"), "Akèy");
    }

    // ==================== Listing Tests ====================

    #[test]
    fn test_list_locales_is_stable() {
        let translator = Translator::shipped();
        let first = translator.list_locales();
        translator.set_active_locale("es");
        let second = translator.list_locales();

        assert_eq!(first, second);
        let codes: Vec<_> = first.iter().map(|l| l.code).collect();
        assert_eq!(codes, vec!["en", "es", "fr", "ht"]);
        assert_eq!(first[3].name, "Kreyòl");
        assert_eq!(first[3].glyph, "🇭🇹");
    }

    // ==================== Metrics Tests ====================

    #[test]
    fn test_metrics_track_resolution_paths() {
        let registry = en_fr_registry();
        let translator = Translator::with_initial(&registry, "fr");

        translator.resolve("login");
        translator.resolve("signup");
        translator.resolve("unknown");

        let report = translator.metrics().report();
        assert_eq!(report.direct_hits, 1);
        assert_eq!(report.fallback_hits, 1);
        assert_eq!(report.key_echoes, 1);
    }

    #[test]
    fn test_kreyol_notice_keys_fall_back_to_english() {
        let translator = Translator::with_initial(LanguageRegistry::get(), "ht");
        assert_eq!(translator.resolve("alreadyBooked"), "You have already booked this tutor.");
        assert_eq!(translator.metrics().fallback_hits(), 1);
    }
}
