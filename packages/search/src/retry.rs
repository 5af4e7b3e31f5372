//! Timeout and retry wrapper for backend calls.
//!
//! Backend calls are read-only and idempotent, so a call that times out
//! or fails with a transient error is retried with exponential backoff
//! (base, 2 × base, 4 × base, ...). Non-transient errors are returned
//! immediately.

use std::future::Future;
use std::time::Duration;

use address_lookup_models::SearchConfig;
use address_lookup_query::BackendError;

use crate::SearchError;

/// Timeout and retry settings for one backend call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Deadline for each attempt.
    pub timeout: Duration,
    /// Retries after the first failed attempt.
    pub max_retries: u32,
    /// Backoff before the first retry.
    pub base_delay: Duration,
}

impl RetryPolicy {
    /// Reads the policy from configuration.
    #[must_use]
    pub const fn from_config(config: &SearchConfig) -> Self {
        Self {
            timeout: Duration::from_millis(config.timeout_ms),
            max_retries: config.max_retries,
            base_delay: Duration::from_millis(config.retry_base_delay_ms),
        }
    }

    /// Backoff before retry number `attempt` (1-based).
    #[must_use]
    pub fn delay(&self, attempt: u32) -> Duration {
        let factor = 1u32 << attempt.saturating_sub(1).min(16);
        self.base_delay.saturating_mul(factor)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&SearchConfig::default())
    }
}

/// Runs `call` under `policy`.
///
/// `call` is invoked once per attempt to produce a fresh future.
///
/// # Errors
///
/// Returns [`SearchError::Timeout`] if every attempt timed out, or
/// [`SearchError::Backend`] for a non-transient error or a transient one
/// that persisted through all retries.
pub async fn with_retry<T, F, Fut>(
    operation: &'static str,
    policy: &RetryPolicy,
    mut call: F,
) -> Result<T, SearchError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, BackendError>>,
{
    let mut attempt = 0u32;

    loop {
        if attempt > 0 {
            let delay = policy.delay(attempt);
            log::warn!(
                "  retry {attempt}/{} for {operation} in {delay:?}...",
                policy.max_retries
            );
            tokio::time::sleep(delay).await;
        }

        match tokio::time::timeout(policy.timeout, call()).await {
            Ok(Ok(value)) => return Ok(value),
            Ok(Err(e)) => {
                if e.is_transient() && attempt < policy.max_retries {
                    log::warn!("  transient {operation} error: {e}");
                    attempt += 1;
                    continue;
                }
                return Err(SearchError::Backend {
                    operation,
                    source: e,
                });
            }
            Err(_) => {
                if attempt < policy.max_retries {
                    log::warn!("  {operation} timed out after {:?}", policy.timeout);
                    attempt += 1;
                    continue;
                }
                return Err(SearchError::Timeout {
                    operation,
                    timeout: policy.timeout,
                    attempts: attempt + 1,
                });
            }
        }
    }
}
