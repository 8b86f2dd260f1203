use crate::auth::IdentityProvider;
use crate::i18n::{keys, Translator};
use crate::notice::Notice;
use serde::Serialize;
use tracing::error;

/// One row of the locale switcher menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwitcherEntry {
    pub code: &'static str,
    pub name: &'static str,
    pub glyph: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: String,
    pub path: &'static str,
}

/// Top navigation bar state.
#[derive(Debug, Default)]
pub struct Navbar {
    language_open: bool,
}

impl Navbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_language_open(&self) -> bool {
        self.language_open
    }

    pub fn toggle_language(&mut self) {
        self.language_open = !self.language_open;
    }

    /// Locale switcher entries in catalog order, marking the active one.
    pub fn switcher(&self, translator: &Translator<'_>) -> Vec<SwitcherEntry> {
        let active = translator.active_code();
        translator
            .list_locales()
            .into_iter()
            .map(|locale| SwitcherEntry {
                code: locale.code,
                name: locale.name,
                glyph: locale.glyph,
                active: locale.code == active,
            })
            .collect()
    }

    /// Glyph shown on the closed switcher button.
    pub fn active_glyph(&self, translator: &Translator<'_>) -> &'static str {
        translator.active_locale().glyph
    }

    /// Switch locale and close the menu. Returns `false` if the code is not
    /// registered (the menu stays open and the active locale is unchanged).
    pub fn select_locale(&mut self, translator: &Translator<'_>, code: &str) -> bool {
        let switched = translator.set_active_locale(code);
        if switched {
            self.language_open = false;
        }
        switched
    }

    /// Navigation links for the current session state.
    pub fn links(&self, translator: &Translator<'_>, signed_in: bool) -> Vec<NavLink> {
        let mut links = vec![
            link(translator, keys::HOME, "/"),
            link(translator, keys::FIND_TEACHER, "/find-teacher"),
            link(translator, keys::BECOME_TEACHER, "/become-teacher"),
            link(translator, keys::ABOUT, "/about"),
            link(translator, keys::BLOG, "/blog"),
        ];
        if signed_in {
            links.push(link(translator, keys::DASHBOARD, "/dashboard"));
        } else {
            links.push(link(translator, keys::LOGIN, "/login"));
            links.push(link(translator, keys::SIGNUP, "/signup"));
        }
        links
    }

    /// Label of the "resources" dropdown holding the teacher links.
    pub fn resources_label(&self, translator: &Translator<'_>) -> &'static str {
        translator.resolve(keys::RESOURCES)
    }

    pub fn logout_label(&self, translator: &Translator<'_>) -> &'static str {
        translator.resolve(keys::LOGOUT)
    }

    pub async fn logout(&self, identity: &dyn IdentityProvider, translator: &Translator<'_>) -> Notice {
        match identity.sign_out().await {
            Ok(()) => Notice::success(translator.resolve(keys::LOGGED_OUT))
                .with_text(translator.resolve(keys::LOGGED_OUT_TEXT)),
            Err(e) => {
                error!("Logout error: {}", e);
                Notice::error(translator.resolve(keys::LOGOUT_FAILED))
                    .with_text(translator.resolve(keys::LOGOUT_FAILED_TEXT))
                    .with_confirm(translator.resolve(keys::TRY_AGAIN))
            }
        }
    }
}

fn link(translator: &Translator<'_>, key: &'static str, path: &'static str) -> NavLink {
    NavLink {
        label: translator.resolve(key).to_string(),
        path,
    }
}
