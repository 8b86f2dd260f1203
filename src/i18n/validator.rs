//! Catalog quality validation.
//!
//! Compares each locale table against the default locale: keys the default
//! defines but the locale lacks (these resolve through the fallback), keys
//! only the locale defines (unreachable through the default), blank values,
//! and numbers (prices, years, hours) that a translation dropped or changed.

use crate::i18n::{LanguageRegistry, LocaleConfig};
use regex::Regex;
use std::sync::OnceLock;

/// Validation report for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Critical issues (blank values)
    pub errors: Vec<String>,

    /// Non-critical issues (gaps, extra keys, numeric mismatches)
    pub warnings: Vec<String>,

    /// Default-locale keys absent from this locale, sorted
    pub missing_keys: Vec<&'static str>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
            missing_keys: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation catalogs.
pub struct CatalogValidator;

static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();

impl CatalogValidator {
    /// Validate one locale against the default locale.
    ///
    /// # Arguments
    /// * `default` - The default locale (reference key space)
    /// * `candidate` - The locale to check
    ///
    /// # Returns
    /// A `ValidationReport` containing any errors or warnings found.
    pub fn validate(default: &LocaleConfig, candidate: &LocaleConfig) -> ValidationReport {
        let mut report = ValidationReport::new();

        let mut keys: Vec<&'static str> = candidate.table.keys().copied().collect();
        keys.sort_unstable();

        for key in &keys {
            if candidate.table.get(key).is_some_and(|text| text.trim().is_empty()) {
                report
                    .errors
                    .push(format!("Key '{}' has an empty value", key));
            }
        }

        if candidate.code == default.code {
            return report;
        }

        let mut missing: Vec<&'static str> = default
            .table
            .keys()
            .copied()
            .filter(|key| !candidate.table.contains_key(key))
            .collect();
        missing.sort_unstable();
        if !missing.is_empty() {
            report.warnings.push(format!(
                "{} keys missing (resolved through '{}'): {}",
                missing.len(),
                default.code,
                missing.join(", ")
            ));
        }
        report.missing_keys = missing;

        for key in &keys {
            let Some(reference) = default.table.get(key) else {
                report.warnings.push(format!(
                    "Key '{}' is not defined in default locale '{}'",
                    key, default.code
                ));
                continue;
            };

            let translated = candidate.table.get(key).copied().unwrap_or_default();
            let expected = Self::extract_numbers(reference);
            let found = Self::extract_numbers(translated);
            if expected != found {
                report.warnings.push(format!(
                    "Number mismatch for '{}': default has {:?}, translation has {:?}",
                    key, expected, found
                ));
            }
        }

        report
    }

    /// Validate every locale of a registry, in catalog order.
    pub fn validate_registry(registry: &LanguageRegistry) -> Vec<(&'static str, ValidationReport)> {
        let default = registry.default_locale();
        registry
            .list_all()
            .into_iter()
            .map(|locale| (locale.code, Self::validate(default, locale)))
            .collect()
    }

    /// Extract numeric tokens, sorted.
    fn extract_numbers(text: &str) -> Vec<String> {
        let regex = NUMBER_REGEX.get_or_init(|| Regex::new(r"\d+").unwrap());
        let mut numbers: Vec<String> = regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();
        numbers.sort();
        numbers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_locale() -> LocaleConfig {
        LocaleConfig::new(
            "en",
            "English",
            "🇺🇸",
            &[("signup", "Sign Up"), ("fee", "Pay $10"), ("since", "Since 2023")],
        )
        .as_default()
    }

    // ==================== Basic Tests ====================

    #[test]
    fn test_complete_translation_is_clean() {
        let fr = LocaleConfig::new(
            "fr",
            "Français",
            "🇫🇷",
            &[("signup", "S'inscrire"), ("fee", "Payer $10"), ("since", "Depuis 2023")],
        );
        let report = CatalogValidator::validate(&default_locale(), &fr);
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_missing_keys_are_warnings() {
        let fr = LocaleConfig::new("fr", "Français", "🇫🇷", &[("signup", "S'inscrire")]);
        let report = CatalogValidator::validate(&default_locale(), &fr);

        assert!(!report.has_errors());
        assert_eq!(report.missing_keys, vec!["fee", "since"]);
        assert!(report.warnings[0].contains("2 keys missing"));
    }

    #[test]
    fn test_empty_value_is_error() {
        let fr = LocaleConfig::new(
            "fr",
            "Français",
            "🇫🇷",
            &[("signup", " "), ("fee", "Payer $10"), ("since", "Depuis 2023")],
        );
        let report = CatalogValidator::validate(&default_locale(), &fr);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("signup"));
    }

    #[test]
    fn test_extra_key_is_warning() {
        let fr = LocaleConfig::new(
            "fr",
            "Français",
            "🇫🇷",
            &[
                ("signup", "S'inscrire"),
                ("fee", "Payer $10"),
                ("since", "Depuis 2023"),
                ("bonjour", "Bonjour"),
            ],
        );
        let report = CatalogValidator::validate(&default_locale(), &fr);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("bonjour"));
    }

    #[test]
    fn test_number_mismatch_is_warning() {
        let fr = LocaleConfig::new(
            "fr",
            "Français",
            "🇫🇷",
            &[("signup", "S'inscrire"), ("fee", "Payer $15"), ("since", "Depuis 2023")],
        );
        let report = CatalogValidator::validate(&default_locale(), &fr);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("Number mismatch for 'fee'"));
    }

    #[test]
    fn test_default_locale_only_checks_empty_values() {
        let report = CatalogValidator::validate(&default_locale(), &default_locale());
        assert!(report.is_clean());
    }

    // ==================== Shipped Catalog Tests ====================

    #[test]
    fn test_shipped_catalog_has_no_errors() {
        for (code, report) in CatalogValidator::validate_registry(LanguageRegistry::get()) {
            assert!(!report.has_errors(), "{}: {:?}", code, report.errors);
        }
    }

    #[test]
    fn test_shipped_catalog_gaps() {
        let reports = CatalogValidator::validate_registry(LanguageRegistry::get());
        let codes: Vec<_> = reports.iter().map(|(code, _)| *code).collect();
        assert_eq!(codes, vec!["en", "es", "fr", "ht"]);

        for (code, report) in &reports {
            match *code {
                "ht" => {
                    assert!(report.missing_keys.contains(&"alreadyBooked"));
                    assert!(report.missing_keys.contains(&"jobFeeNotice"));
                }
                _ => assert!(report.missing_keys.is_empty(), "{}: {:?}", code, report.missing_keys),
            }
        }
    }

    #[test]
    fn test_extract_numbers_sorted() {
        assert_eq!(
            CatalogValidator::extract_numbers("within 24 hours since 2023"),
            vec!["2023".to_string(), "24".to_string()]
        );
    }
}
