//! Page-level flows.
//!
//! Each view owns its local state as plain struct fields and takes its
//! collaborators (translator, backend, identity provider, gateway) as
//! arguments. Every collaborator failure ends up as a `Notice` or an inline
//! error string; nothing is propagated to the caller as an error.

pub mod blog;
pub mod checkout;
pub mod login;
pub mod messages;
pub mod navbar;
pub mod post_job;
pub mod signup;
pub mod tutor;

/// Data-loading state of a page.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}
