//! Locale type: validated handle onto a shipped locale.
//!
//! `Locale` is a `Copy` token that can only be built for codes registered in
//! the shipped catalog, so code paths holding one never need to handle the
//! unknown-locale case again.

use crate::i18n::{LanguageRegistry, LocaleConfig};
use anyhow::{bail, Result};

/// A validated shipped locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    /// Locale code (e.g., "en", "ht")
    code: &'static str,
}

impl Locale {
    pub const ENGLISH: Locale = Locale { code: "en" };
    pub const SPANISH: Locale = Locale { code: "es" };
    pub const FRENCH: Locale = Locale { code: "fr" };
    pub const KREYOL: Locale = Locale { code: "ht" };

    /// Create a Locale from a locale code string.
    ///
    /// # Arguments
    /// * `code` - The locale code (e.g., "en", "fr")
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is registered in the shipped catalog
    /// * `Err` if the code is unknown
    ///
    /// # Example
    /// ```ignore
    /// let kreyol = Locale::from_code("ht")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Locale> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) => Ok(Locale { code: config.code }),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// Get the default locale of the shipped catalog.
    pub fn default_locale() -> Locale {
        Locale {
            code: LanguageRegistry::get().default_locale().code,
        }
    }

    /// Get the locale code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the shipped registry.
    pub fn config(&self) -> &'static LocaleConfig {
        let registry = LanguageRegistry::get();
        registry
            .get_by_code(self.code)
            .unwrap_or_else(|| registry.default_locale())
    }

    /// Display name (e.g., "Kreyòl").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Display glyph (flag emoji).
    pub fn glyph(&self) -> &'static str {
        self.config().glyph
    }

    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}
