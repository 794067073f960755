//! Backoff/cooldown state machine wrapping video source calls.
//!
//! The transition logic is a pure function over [`RetryState`] so it can
//! be tested without timers; the async driver sleeps through an injected
//! [`Sleeper`] for the same reason.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::config::RetryConfig;
use crate::metrics;

use super::types::{FetchError, RawVideoItem, VideoSource};

/// Backoff policy for rate-limited upstream calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts for one logical call (initial try + retries).
    pub max_attempts: u32,
    /// Delay before the first retry; doubles on each subsequent one.
    pub base_delay: Duration,
    /// Ceiling for the computed delay.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
        }
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            base_delay: Duration::from_secs(config.base_delay_secs),
            max_delay: Duration::from_secs(config.max_delay_secs),
        }
    }
}

/// Per-call retry bookkeeping. Created fresh for every logical search and
/// discarded when the call resolves; cooldowns never outlive a call.
#[derive(Debug, Clone, Default)]
pub struct RetryState {
    /// Zero-based index of the attempt currently in flight.
    pub attempt: u32,
    /// Set while waiting out a backoff delay, for observers embedding the
    /// controller.
    pub cooldown_until: Option<Instant>,
}

impl RetryState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Why a logical call gave up. The orchestrator maps this to a
/// human-readable diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCause {
    Unauthenticated,
    RateLimited,
    Transient,
    NoResults,
}

impl From<&FetchError> for FailureCause {
    fn from(error: &FetchError) -> Self {
        match error {
            FetchError::Unauthenticated(_) => FailureCause::Unauthenticated,
            FetchError::RateLimited => FailureCause::RateLimited,
            FetchError::Transient(_) => FailureCause::Transient,
            FetchError::Empty => FailureCause::NoResults,
        }
    }
}

/// Outcome of one transition of the retry state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryDecision {
    /// Wait out the cooldown, then re-attempt.
    RetryAfter(Duration),
    /// Permanent failure for this call.
    GiveUp(FailureCause),
}

/// Exponential backoff: `min(base_delay * 2^attempt, max_delay)`.
pub fn backoff_delay(policy: &RetryPolicy, attempt: u32) -> Duration {
    let factor = 2u32.saturating_pow(attempt);
    policy.base_delay.saturating_mul(factor).min(policy.max_delay)
}

/// Pure transition function for a failed attempt.
///
/// Only rate limiting is retried; an invalid credential cannot be fixed by
/// retrying, and transient/empty outcomes fail fast so the retry budget is
/// spent exclusively on quota pressure.
pub fn next_state(policy: &RetryPolicy, state: &RetryState, error: &FetchError) -> RetryDecision {
    match error {
        FetchError::RateLimited if state.attempt + 1 < policy.max_attempts => {
            RetryDecision::RetryAfter(backoff_delay(policy, state.attempt))
        }
        _ => RetryDecision::GiveUp(FailureCause::from(error)),
    }
}

/// Sleep abstraction so tests drive the controller without real delays.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Production sleeper backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Drives a [`VideoSource`] through the retry state machine.
pub struct RetryController {
    policy: RetryPolicy,
    sleeper: Arc<dyn Sleeper>,
}

impl RetryController {
    pub fn new(policy: RetryPolicy) -> Self {
        Self::with_sleeper(policy, Arc::new(TokioSleeper))
    }

    pub fn with_sleeper(policy: RetryPolicy, sleeper: Arc<dyn Sleeper>) -> Self {
        Self { policy, sleeper }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Run one logical call against the source.
    ///
    /// Re-entrant: every invocation starts from a fresh [`RetryState`].
    /// The backoff sleep is the only suspension point; dropping the future
    /// cancels the in-flight attempt and its cooldown.
    pub async fn run(
        &self,
        source: &dyn VideoSource,
        search_term: &str,
    ) -> Result<Vec<RawVideoItem>, FailureCause> {
        let mut state = RetryState::new();

        loop {
            match source.fetch(search_term).await {
                Ok(items) => return Ok(items),
                Err(error) => match next_state(&self.policy, &state, &error) {
                    RetryDecision::RetryAfter(delay) => {
                        state.cooldown_until = Some(Instant::now() + delay);
                        metrics::UPSTREAM_RETRIES.inc();
                        debug!(
                            source = source.name(),
                            attempt = state.attempt,
                            delay_ms = delay.as_millis() as u64,
                            "rate limited, entering cooldown"
                        );
                        self.sleeper.sleep(delay).await;
                        state.attempt += 1;
                        state.cooldown_until = None;
                    }
                    RetryDecision::GiveUp(cause) => {
                        warn!(
                            source = source.name(),
                            attempt = state.attempt,
                            error = %error,
                            "giving up on upstream search"
                        );
                        return Err(cause);
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> RetryPolicy {
        RetryPolicy::default()
    }

    #[test]
    fn test_backoff_delay_table() {
        let policy = policy();
        assert_eq!(backoff_delay(&policy, 0), Duration::from_secs(1));
        assert_eq!(backoff_delay(&policy, 1), Duration::from_secs(2));
        assert_eq!(backoff_delay(&policy, 2), Duration::from_secs(4));
        assert_eq!(backoff_delay(&policy, 3), Duration::from_secs(8));
    }

    #[test]
    fn test_backoff_delay_is_capped() {
        let policy = policy();
        assert_eq!(backoff_delay(&policy, 5), Duration::from_secs(30));
        assert_eq!(backoff_delay(&policy, 20), Duration::from_secs(30));
    }

    #[test]
    fn test_backoff_delay_monotonically_non_decreasing() {
        let policy = policy();
        let mut previous = Duration::ZERO;
        for attempt in 0..10 {
            let delay = backoff_delay(&policy, attempt);
            assert!(delay >= previous);
            previous = delay;
        }
    }

    #[test]
    fn test_next_state_retries_rate_limit_within_budget() {
        let policy = policy();
        for attempt in 0..3 {
            let state = RetryState {
                attempt,
                cooldown_until: None,
            };
            assert_eq!(
                next_state(&policy, &state, &FetchError::RateLimited),
                RetryDecision::RetryAfter(backoff_delay(&policy, attempt))
            );
        }
    }

    #[test]
    fn test_next_state_gives_up_after_final_attempt() {
        let policy = policy();
        let state = RetryState {
            attempt: 3,
            cooldown_until: None,
        };
        assert_eq!(
            next_state(&policy, &state, &FetchError::RateLimited),
            RetryDecision::GiveUp(FailureCause::RateLimited)
        );
    }

    #[test]
    fn test_next_state_never_retries_bad_credentials() {
        let policy = policy();
        let state = RetryState::new();
        assert_eq!(
            next_state(
                &policy,
                &state,
                &FetchError::Unauthenticated("HTTP 403".to_string())
            ),
            RetryDecision::GiveUp(FailureCause::Unauthenticated)
        );
    }

    #[test]
    fn test_next_state_fails_fast_on_transient_and_empty() {
        let policy = policy();
        let state = RetryState::new();
        assert_eq!(
            next_state(&policy, &state, &FetchError::Transient("HTTP 503".to_string())),
            RetryDecision::GiveUp(FailureCause::Transient)
        );
        assert_eq!(
            next_state(&policy, &state, &FetchError::Empty),
            RetryDecision::GiveUp(FailureCause::NoResults)
        );
    }

    #[test]
    fn test_policy_from_config() {
        let config = RetryConfig {
            max_attempts: 6,
            base_delay_secs: 2,
            max_delay_secs: 60,
        };
        let policy = RetryPolicy::from(&config);
        assert_eq!(policy.max_attempts, 6);
        assert_eq!(policy.base_delay, Duration::from_secs(2));
        assert_eq!(policy.max_delay, Duration::from_secs(60));
    }
}
