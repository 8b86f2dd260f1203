//! Exponential backoff for idempotent backend reads.

use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// How many times to try a call and how long to wait in between.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Total attempts, first call included (never below 1)
    pub max_attempts: u32,
    /// Wait before the second attempt
    pub initial_delay: Duration,
    /// Cap on any single wait
    pub max_delay: Duration,
    /// Growth factor applied to the wait after each failed retry
    pub backoff_multiplier: f64,
}

impl RetryConfig {
    /// `max_attempts` of 0 is treated as 1.
    pub fn new(max_attempts: u32, initial_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            initial_delay,
            max_delay: Duration::from_secs(10),
            backoff_multiplier: 2.0,
        }
    }

    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    pub fn with_backoff_multiplier(mut self, multiplier: f64) -> Self {
        self.backoff_multiplier = multiplier;
        self
    }

    /// Background reads: 3 attempts, waits of 1s then 2s.
    pub fn api_call() -> Self {
        Self::new(3, Duration::from_secs(1)).with_max_delay(Duration::from_secs(5))
    }

    /// Page data loads, where the user is watching a spinner: 3 attempts,
    /// waits of 250ms then 500ms.
    pub fn page_load() -> Self {
        Self::new(3, Duration::from_millis(250)).with_max_delay(Duration::from_secs(1))
    }

    /// A single attempt.
    pub fn once() -> Self {
        Self::new(1, Duration::ZERO)
    }

    /// Waits between consecutive attempts; `max_attempts - 1` entries.
    pub fn delays(&self) -> impl Iterator<Item = Duration> + '_ {
        let cap = self.max_delay.as_secs_f64();
        (0..self.max_attempts.saturating_sub(1)).map(move |retry| {
            let exponent = i32::try_from(retry).unwrap_or(i32::MAX);
            let scaled = self.initial_delay.as_secs_f64() * self.backoff_multiplier.powi(exponent);
            // Clamp before converting: an overflowing or NaN wait becomes the cap
            let secs = if scaled.is_finite() { scaled.clamp(0.0, cap) } else { cap };
            Duration::from_secs_f64(secs)
        })
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::api_call()
    }
}

/// Run `operation`, retrying every failure.
pub async fn with_retry<T, E, F, Fut>(config: &RetryConfig, label: &str, operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    with_retry_if(config, label, operation, |_| true).await
}

/// Run `operation`, retrying only failures for which `retryable` holds.
///
/// The last error is returned once the attempts are used up, or right away
/// for an error that is not retryable.
pub async fn with_retry_if<T, E, F, Fut, P>(
    config: &RetryConfig,
    label: &str,
    mut operation: F,
    retryable: P,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
    P: Fn(&E) -> bool,
{
    let mut delays = config.delays();
    let mut attempt = 1;

    loop {
        let error = match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    debug!("{}: recovered on attempt {}", label, attempt);
                }
                return Ok(value);
            }
            Err(error) => error,
        };

        if !retryable(&error) {
            debug!("{}: giving up on non-retryable error: {}", label, error);
            return Err(error);
        }

        let Some(delay) = delays.next() else {
            warn!("{}: failed after {} attempts: {}", label, attempt, error);
            return Err(error);
        };

        warn!(
            "{}: attempt {}/{} failed ({}), retrying in {:?}",
            label, attempt, config.max_attempts, error, delay
        );
        sleep(delay).await;
        attempt += 1;
    }
}
