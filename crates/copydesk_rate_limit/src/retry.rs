//! Bounded exponential backoff around a single generation call.

use crate::RetryConfig;
use crate::config::wait_duration;
use copydesk_core::{RETRY_EXHAUSTED_PLACEHOLDER, clean_output};
use copydesk_error::{CopydeskResult, RateLimitSignal};
use async_trait::async_trait;
use copydesk_interface::{
    Notifier, ResilientGenerator, Sleeper, TextGenerator, TokioSleeper, TracingNotifier,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Attempt budget and backoff schedule.
///
/// # Examples
///
/// ```
/// use copydesk_rate_limit::RetryPolicy;
/// use std::time::Duration;
///
/// let policy = RetryPolicy::default();
/// assert_eq!(policy.attempts(), 4);
/// assert_eq!(policy.backoff_for(0), Duration::from_secs(4));
/// assert_eq!(policy.backoff_for(2), Duration::from_secs(16));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra attempts after the first
    pub max_retries: u32,
    /// Wait after the first rate-limited attempt
    pub base_wait: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_wait: Duration::from_secs(4),
        }
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            base_wait: wait_duration(config.base_wait_secs),
        }
    }
}

impl RetryPolicy {
    /// Total number of calls allowed.
    pub fn attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Wait after the rate-limited attempt with 0-based index `attempt`.
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        self.base_wait.saturating_mul(2u32.saturating_pow(attempt))
    }
}

/// Text generator wrapped with rate-limit backoff.
///
/// Every rate-limit rejection, the last one included, is followed by a
/// `base_wait * 2^attempt` cool-down before the next attempt or the
/// placeholder. Empty responses consume an attempt and are retried
/// immediately; any other error propagates on the spot. When the budget runs out without a non-empty
/// response, [`RETRY_EXHAUSTED_PLACEHOLDER`] is returned instead of an error.
pub struct RetryingGenerator<G> {
    generator: G,
    policy: RetryPolicy,
    sleeper: Arc<dyn Sleeper>,
    notifier: Arc<dyn Notifier>,
}

impl<G: std::fmt::Debug> std::fmt::Debug for RetryingGenerator<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetryingGenerator")
            .field("generator", &self.generator)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl<G: TextGenerator> RetryingGenerator<G> {
    /// Wrap a generator using the tokio timer and log-only notices.
    pub fn new(generator: G, policy: RetryPolicy) -> Self {
        Self {
            generator,
            policy,
            sleeper: Arc::new(TokioSleeper),
            notifier: Arc::new(TracingNotifier),
        }
    }

    /// Replace the sleeper used for backoff waits.
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Replace the notifier that receives cool-down notices.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// The wrapped generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// The active policy.
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Issue exactly one request, without retrying.
    pub async fn generate_once(
        &self,
        model_id: &str,
        prompt: &str,
        temperature: f32,
    ) -> CopydeskResult<String> {
        self.generator
            .generate_once(model_id, prompt, temperature)
            .await
    }

    /// Generate text, backing off on rate limits.
    ///
    /// # Errors
    ///
    /// Returns the first error that is not a rate-limit rejection.
    #[instrument(
        skip(self, prompt),
        fields(provider = self.generator.provider_name(), max_retries = self.policy.max_retries)
    )]
    pub async fn generate_with_retry(
        &self,
        model_id: &str,
        prompt: &str,
        temperature: f32,
    ) -> CopydeskResult<String> {
        let attempts = self.policy.attempts();

        for attempt in 0..attempts {
            debug!(attempt = attempt + 1, attempts, "Calling generator");

            match self
                .generator
                .generate_once(model_id, prompt, temperature)
                .await
            {
                Ok(text) => {
                    let cleaned = clean_output(&text);
                    if !cleaned.is_empty() {
                        debug!(attempt = attempt + 1, chars = cleaned.len(), "Generation succeeded");
                        return Ok(cleaned);
                    }
                    debug!(attempt = attempt + 1, "Generator returned no text");
                }
                Err(err) if err.is_rate_limited() => {
                    let wait = self.policy.backoff_for(attempt);
                    warn!(
                        error = %err,
                        attempt = attempt + 1,
                        wait_secs = wait.as_secs_f64(),
                        "Rate limited, backing off"
                    );
                    self.notifier.warn(&format!(
                        "Rate limit hit. Cooling down… ({}/{})",
                        attempt + 1,
                        self.policy.max_retries
                    ));
                    self.sleeper.sleep(wait).await;
                }
                Err(err) => {
                    warn!(error = %err, "Generation failed");
                    return Err(err);
                }
            }
        }

        warn!(attempts, "No output after exhausting attempt budget");
        Ok(RETRY_EXHAUSTED_PLACEHOLDER.to_string())
    }
}

#[async_trait]
impl<G: TextGenerator> ResilientGenerator for RetryingGenerator<G> {
    async fn generate_with_retry(
        &self,
        model_id: &str,
        prompt: &str,
        temperature: f32,
    ) -> CopydeskResult<String> {
        RetryingGenerator::generate_with_retry(self, model_id, prompt, temperature).await
    }
}
