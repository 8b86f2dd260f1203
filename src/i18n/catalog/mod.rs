//! Shipped locale catalog.
//!
//! Each locale lives in its own file as a flat `(key, text)` table. The
//! registry turns these into lookup maps once, on first access.

mod en;
mod es;
mod fr;
mod ht;

/// Static definition of one shipped locale.
#[derive(Debug, Clone, Copy)]
pub struct LocaleDefinition {
    pub code: &'static str,
    pub name: &'static str,
    pub glyph: &'static str,
    pub is_default: bool,
    pub table: &'static [(&'static str, &'static str)],
}

/// All shipped locales, in the order the locale switcher shows them.
pub const LOCALES: &[LocaleDefinition] = &[
    LocaleDefinition {
        code: "en",
        name: "English",
        glyph: "🇺🇸",
        is_default: true,
        table: en::TABLE,
    },
    LocaleDefinition {
        code: "es",
        name: "Español",
        glyph: "🇪🇸",
        is_default: false,
        table: es::TABLE,
    },
    LocaleDefinition {
        code: "fr",
        name: "Français",
        glyph: "🇫🇷",
        is_default: false,
        table: fr::TABLE,
    },
    LocaleDefinition {
        code: "ht",
        name: "Kreyòl",
        glyph: "🇭🇹",
        is_default: false,
        table: ht::TABLE,
    },
];
