//! Language registry: Single source of truth for all supported locales.
//!
//! The shipped catalog is built once, on first access, through a `OnceLock`
//! singleton. Custom registries (used by tests and by embedders that ship
//! their own tables) are validated by `LanguageRegistry::new`.

use crate::i18n::catalog::{LocaleDefinition, LOCALES};
use anyhow::{bail, Result};
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Configuration for a supported locale.
///
/// Holds the display metadata shown by the locale switcher and the
/// key→text translation table.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Short locale code (e.g., "en", "fr", "ht")
    pub code: &'static str,

    /// Display name in the locale's own language (e.g., "Español")
    pub name: &'static str,

    /// Display glyph for the switcher (a flag emoji in the shipped catalog)
    pub glyph: &'static str,

    /// Whether this is the default locale every lookup falls back to
    pub is_default: bool,

    /// Translation table
    pub table: HashMap<&'static str, &'static str>,
}

impl LocaleConfig {
    /// Create a non-default locale from a flat `(key, text)` table.
    ///
    /// When a key repeats, the last entry wins.
    pub fn new(
        code: &'static str,
        name: &'static str,
        glyph: &'static str,
        entries: &[(&'static str, &'static str)],
    ) -> Self {
        Self {
            code,
            name,
            glyph,
            is_default: false,
            table: entries.iter().copied().collect(),
        }
    }

    /// Mark this locale as the default one.
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Look up a key in this locale's table.
    ///
    /// Empty values count as absent so that a blank entry never hides the
    /// default-locale text.
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        self.table.get(key).copied().filter(|text| !text.is_empty())
    }
}

impl From<&LocaleDefinition> for LocaleConfig {
    fn from(definition: &LocaleDefinition) -> Self {
        let config = LocaleConfig::new(
            definition.code,
            definition.name,
            definition.glyph,
            definition.table,
        );
        if definition.is_default {
            config.as_default()
        } else {
            config
        }
    }
}

/// Immutable catalog of locales.
pub struct LanguageRegistry {
    locales: Vec<LocaleConfig>,
    default_index: usize,
}

/// Shipped registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the shipped language registry instance.
    ///
    /// This method builds the registry from the static catalog on first call
    /// and returns a reference to the same instance on subsequent calls.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| {
            let locales: Vec<LocaleConfig> = LOCALES.iter().map(LocaleConfig::from).collect();
            let default_index = locales.iter().position(|l| l.is_default).unwrap_or(0);
            LanguageRegistry {
                locales,
                default_index,
            }
        })
    }

    /// Build a registry from a custom set of locales.
    ///
    /// # Errors
    /// Fails if the list is empty, if two locales share a code, or if the
    /// number of default locales is not exactly one.
    pub fn new(locales: Vec<LocaleConfig>) -> Result<Self> {
        if locales.is_empty() {
            bail!("A language registry needs at least one locale");
        }

        let mut seen = HashSet::new();
        for locale in &locales {
            if !seen.insert(locale.code) {
                bail!("Duplicate locale code: '{}'", locale.code);
            }
        }

        let defaults: Vec<usize> = locales
            .iter()
            .enumerate()
            .filter(|(_, l)| l.is_default)
            .map(|(i, _)| i)
            .collect();

        match defaults.as_slice() {
            [index] => Ok(Self {
                default_index: *index,
                locales,
            }),
            [] => bail!("No default locale found in registry"),
            _ => bail!("Multiple default locales found in registry"),
        }
    }

    /// Get a locale configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the locale exists
    /// * `None` if the locale is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Check if a locale code is registered.
    pub fn contains(&self, code: &str) -> bool {
        self.position(code).is_some()
    }

    /// Catalog position of a locale code.
    pub fn position(&self, code: &str) -> Option<usize> {
        self.locales.iter().position(|locale| locale.code == code)
    }

    /// Get all locales, in catalog order.
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// Get the default locale configuration.
    pub fn default_locale(&self) -> &LocaleConfig {
        &self.locales[self.default_index]
    }

    pub(crate) fn default_index(&self) -> usize {
        self.default_index
    }

    /// Locale at a catalog position.
    ///
    /// Positions come from `position()`; an out-of-range index yields the
    /// default locale.
    pub(crate) fn locale_at(&self, index: usize) -> &LocaleConfig {
        self.locales
            .get(index)
            .unwrap_or_else(|| self.default_locale())
    }

    /// Number of registered locales.
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}
