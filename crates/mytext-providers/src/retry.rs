//! Retry/fallback orchestration around a single provider adapter.
//!
//! # Policy
//!
//! - Attempts run strictly one after another, indices `0..max_retries`.
//! - Attempt `i` uses the **main** model while `i < max_retries / 2` (real
//!   division) and the **fallback** model from the midpoint onward. For odd
//!   budgets the main model gets the larger half: `max_retries = 3` runs
//!   main, main, fallback.
//! - Every failure is retried, whatever its cause (4xx, 5xx, timeout, bad body).
//! - Every failed attempt is followed by a sleep, starting at `initial_delay`
//!   and multiplying by `backoff_factor` each time. This includes the last
//!   attempt, so an exhausted budget of `n` attempts sleeps `n` times.

use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, error, warn};

use mytext_core::config::RetryConfig;
use mytext_core::{Credentials, Prompt};

use crate::traits::ProviderAdapter;

// ─────────────────────────────────────────────
// Policy
// ─────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct RetryPolicy {
    /// Per-attempt request timeout. Zero disables it.
    pub timeout: Duration,
    /// Total attempts.
    pub max_retries: u32,
    /// Sleep after the first failure.
    pub initial_delay: Duration,
    /// Growth factor of the sleep between attempts.
    pub backoff_factor: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetryConfig::default())
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self {
            timeout: config.timeout(),
            max_retries: config.max_retries,
            initial_delay: config.retry_delay(),
            backoff_factor: config.backoff_factor,
        }
    }
}

impl RetryPolicy {
    /// Sleeps between consecutive attempts, in order.
    pub fn delays(&self) -> Backoff {
        Backoff {
            next: self.initial_delay,
            factor: self.backoff_factor,
        }
    }
}

/// Whether attempt `attempt` of a `max_retries` budget uses the fallback model.
pub fn uses_fallback(attempt: u32, max_retries: u32) -> bool {
    u64::from(attempt) * 2 >= u64::from(max_retries)
}

/// Exponential backoff sequence: `d, d·f, d·f², …`.
///
/// A growth step that would overflow or go negative keeps the previous delay.
#[derive(Clone, Debug)]
pub struct Backoff {
    next: Duration,
    factor: f64,
}

impl Iterator for Backoff {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        let current = self.next;
        self.next = Duration::try_from_secs_f64(current.as_secs_f64() * self.factor)
            .unwrap_or(current);
        Some(current)
    }
}

// ─────────────────────────────────────────────
// Outcomes
// ─────────────────────────────────────────────

/// A successful attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    /// Model that produced `text`.
    pub model: String,
    /// Attempts used, including the successful one.
    pub attempts: u32,
}

/// The budget ran out without a success.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exhausted {
    /// Message of the last failure.
    pub error: String,
    /// Model of the last attempt.
    pub model: String,
    pub attempts: u32,
}

// ─────────────────────────────────────────────
// Loop
// ─────────────────────────────────────────────

/// Call `adapter` until it succeeds or the budget in `policy` runs out.
pub async fn call_with_fallback(
    adapter: &dyn ProviderAdapter,
    prompt: &Prompt,
    credentials: &Credentials,
    main_model: &str,
    fallback_model: &str,
    policy: &RetryPolicy,
) -> Result<Completion, Exhausted> {
    let provider = adapter.display_name();
    let mut delays = policy.delays();
    let mut last_error = None;
    let mut model = main_model;

    for attempt in 0..policy.max_retries {
        model = if uses_fallback(attempt, policy.max_retries) {
            fallback_model
        } else {
            main_model
        };
        debug!(provider, model, attempt, "provider attempt");

        match adapter
            .complete(prompt, credentials, model, policy.timeout)
            .await
        {
            Ok(text) => {
                return Ok(Completion {
                    text,
                    model: model.to_string(),
                    attempts: attempt + 1,
                })
            }
            Err(e) => {
                last_error = Some(e.to_string());
                let delay = delays.next().unwrap_or(policy.initial_delay);
                warn!(provider, model, attempt, error = %e, ?delay, "attempt failed, backing off");
                sleep(delay).await;
            }
        }
    }

    error!(provider, attempts = policy.max_retries, "retry budget exhausted");
    Err(Exhausted {
        error: last_error.unwrap_or_else(|| "No attempt made: retry budget is 0.".to_string()),
        model: model.to_string(),
        attempts: policy.max_retries,
    })
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
