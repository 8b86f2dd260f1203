//! Client core for the LesonPaw tutoring marketplace.
//!
//! Localized display text (`i18n`), typed clients for the marketplace
//! backend, identity provider, payment gateway and image host, and the
//! page flows (`views`) that tie them together.

pub mod api;
pub mod auth;
pub mod captcha;
pub mod config;
pub mod i18n;
pub mod images;
pub mod notice;
pub mod payment;
pub mod retry;
pub mod views;
