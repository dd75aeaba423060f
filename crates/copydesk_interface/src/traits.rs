//! Capability traits and their default implementations.

use async_trait::async_trait;
use copydesk_error::CopydeskResult;
use std::sync::Arc;
use std::time::Duration;

/// A generative-text backend.
///
/// Implementations issue exactly one request per call; retrying is the
/// caller's concern.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a prompt with the given model and temperature.
    ///
    /// Returns an empty string when the backend produced no text.
    async fn generate_once(
        &self,
        model_id: &str,
        prompt: &str,
        temperature: f32,
    ) -> CopydeskResult<String>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for Arc<T> {
    async fn generate_once(
        &self,
        model_id: &str,
        prompt: &str,
        temperature: f32,
    ) -> CopydeskResult<String> {
        (**self).generate_once(model_id, prompt, temperature).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }
}

/// A generator that handles rate limits itself.
///
/// Implementations never surface a rate-limit rejection; when they give up
/// they return placeholder text instead. Other failures still propagate.
#[async_trait]
pub trait ResilientGenerator: Send + Sync {
    /// Generate text for a prompt, absorbing rate limits.
    async fn generate_with_retry(
        &self,
        model_id: &str,
        prompt: &str,
        temperature: f32,
    ) -> CopydeskResult<String>;
}

/// An append-only, positional tabular store.
///
/// Each append is a single remote operation; rows are never updated or
/// deleted through this trait.
#[async_trait]
pub trait TabularStore: Send + Sync {
    /// Read every row, header included, as display strings.
    async fn read_all(&self) -> CopydeskResult<Vec<Vec<String>>>;

    /// Append one row of scalar values after the last row.
    async fn append_row(&self, values: &[serde_json::Value]) -> CopydeskResult<()>;
}

#[async_trait]
impl<T: TabularStore + ?Sized> TabularStore for Arc<T> {
    async fn read_all(&self) -> CopydeskResult<Vec<Vec<String>>> {
        (**self).read_all().await
    }

    async fn append_row(&self, values: &[serde_json::Value]) -> CopydeskResult<()> {
        (**self).append_row(values).await
    }
}

/// Source of deliberate delays (backoff waits, pacing between variants).
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Wait for the given duration.
    async fn sleep(&self, duration: Duration);
}

/// Sleeper backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Channel for transient, user-visible notices.
pub trait Notifier: Send + Sync {
    /// Report a recoverable condition, such as a rate-limit cool-down.
    fn warn(&self, message: &str);

    /// Report progress.
    fn info(&self, message: &str) {
        tracing::info!(notice = message);
    }
}

/// Notifier that only writes to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn warn(&self, message: &str) {
        tracing::warn!(notice = message);
    }
}
