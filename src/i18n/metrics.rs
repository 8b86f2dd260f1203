//! Lookup metrics for the translation registry.
//!
//! Counts how each resolution ended (direct hit, default-locale fallback,
//! key echo) and how many locale switches were accepted or rejected. The
//! fallback and echo counts are the runtime signal for catalog gaps.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Per-translator lookup counters.
#[derive(Debug, Default)]
pub struct LookupMetrics {
    /// Resolutions answered by the active locale
    direct_hits: AtomicUsize,

    /// Resolutions answered by the default locale
    fallback_hits: AtomicUsize,

    /// Resolutions that echoed the key back
    key_echoes: AtomicUsize,

    /// Accepted locale switches
    locale_switches: AtomicUsize,

    /// Switches to an unregistered locale
    rejected_switches: AtomicUsize,
}

impl LookupMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_direct_hit(&self) {
        self.direct_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback_hit(&self) {
        self.fallback_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_key_echo(&self) {
        self.key_echoes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_locale_switch(&self) {
        self.locale_switches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected_switch(&self) {
        self.rejected_switches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn direct_hits(&self) -> usize {
        self.direct_hits.load(Ordering::Relaxed)
    }

    pub fn fallback_hits(&self) -> usize {
        self.fallback_hits.load(Ordering::Relaxed)
    }

    pub fn key_echoes(&self) -> usize {
        self.key_echoes.load(Ordering::Relaxed)
    }

    pub fn locale_switches(&self) -> usize {
        self.locale_switches.load(Ordering::Relaxed)
    }

    pub fn rejected_switches(&self) -> usize {
        self.rejected_switches.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let direct = self.direct_hits();
        let fallback = self.fallback_hits();
        let echoes = self.key_echoes();
        let lookups = direct + fallback + echoes;
        let direct_hit_rate = if lookups > 0 {
            (direct as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            direct_hits: direct,
            fallback_hits: fallback,
            key_echoes: echoes,
            direct_hit_rate,
            locale_switches: self.locale_switches(),
            rejected_switches: self.rejected_switches(),
        }
    }

    /// Reset all counters to zero (useful for testing).
    #[cfg(test)]
    pub fn reset(&self) {
        self.direct_hits.store(0, Ordering::Relaxed);
        self.fallback_hits.store(0, Ordering::Relaxed);
        self.key_echoes.store(0, Ordering::Relaxed);
        self.locale_switches.store(0, Ordering::Relaxed);
        self.rejected_switches.store(0, Ordering::Relaxed);
    }
}

/// Snapshot of the lookup counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Total resolutions
    pub lookups: usize,

    pub direct_hits: usize,
    pub fallback_hits: usize,
    pub key_echoes: usize,

    /// Direct hits as a percentage of all lookups (0-100)
    pub direct_hit_rate: f64,

    pub locale_switches: usize,
    pub rejected_switches: usize,
}

impl MetricsReport {
    /// Format the report for logging.
    pub fn format(&self) -> String {
        format!(
            "Lookups: {} (direct: {}, fallback: {}, echoed: {}, direct rate: {:.1}%), locale switches: {} (rejected: {})",
            self.lookups,
            self.direct_hits,
            self.fallback_hits,
            self.key_echoes,
            self.direct_hit_rate,
            self.locale_switches,
            self.rejected_switches
        )
    }
}
