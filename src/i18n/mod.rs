//! Internationalization (i18n) module for multi-language support.
//!
//! This module owns the locale catalog and the lookup rules every view
//! relies on for display text.
//!
//! # Architecture
//!
//! - `catalog`: Shipped translation tables (en, es, fr, ht)
//! - `registry`: Immutable catalog of locales and their metadata
//! - `locale`: Validated handle onto a shipped locale
//! - `translator`: Active-locale state and key resolution with fallback
//! - `keys`: Key constants used by the views
//! - `validator`: Catalog completeness and quality checks
//! - `metrics`: Lookup counters (direct hits, fallbacks, echoes)
//!
//! # Example
//!
//! ```rust,ignore
//! use lesonpaw::i18n::{keys, Translator};
//!
//! let translator = Translator::shipped();
//! translator.set_active_locale("ht");
//! let label = translator.resolve(keys::SIGNUP); // "Enskri"
//! ```

pub mod catalog;
pub mod keys;
mod locale;
mod metrics;
mod registry;
mod translator;
mod validator;

pub use locale::Locale;
pub use metrics::{LookupMetrics, MetricsReport};
pub use registry::{LanguageRegistry, LocaleConfig};
pub use translator::{LocaleSummary, Translator};
pub use validator::{CatalogValidator, ValidationReport};
