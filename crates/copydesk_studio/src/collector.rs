//! Sequential, paced collection of variants.

use copydesk_core::{EMPTY_VARIANT_PLACEHOLDER, GenerationRequest, Variant};
use copydesk_error::CopydeskResult;
use copydesk_interface::{ResilientGenerator, Sleeper, TokioSleeper};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Collects variants one at a time, pausing between consecutive calls.
///
/// Variants are never requested concurrently. Any error from the retrying
/// generator aborts the whole collection and nothing collected so far is
/// returned. In the studio `R` is a
/// [`RetryingGenerator`](copydesk_rate_limit::RetryingGenerator).
pub struct VariantCollector<R> {
    generator: R,
    pacing: Duration,
    sleeper: Arc<dyn Sleeper>,
}

impl<R: std::fmt::Debug> std::fmt::Debug for VariantCollector<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VariantCollector")
            .field("generator", &self.generator)
            .field("pacing", &self.pacing)
            .finish_non_exhaustive()
    }
}

impl<R: ResilientGenerator> VariantCollector<R> {
    /// Create a collector that waits `pacing` between variants.
    pub fn new(generator: R, pacing: Duration) -> Self {
        Self {
            generator,
            pacing,
            sleeper: Arc::new(TokioSleeper),
        }
    }

    /// Replace the sleeper used for pacing.
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// The retrying generator.
    pub fn generator(&self) -> &R {
        &self.generator
    }

    /// Pause between consecutive variants.
    pub fn pacing(&self) -> Duration {
        self.pacing
    }

    /// Generate `variant_count` texts for one prompt, in call order.
    ///
    /// Empty or whitespace-only results are replaced with
    /// [`EMPTY_VARIANT_PLACEHOLDER`].
    #[instrument(skip(self, prompt), fields(pacing_secs = self.pacing.as_secs_f64()))]
    pub async fn collect(
        &self,
        model_id: &str,
        prompt: &str,
        temperature: f32,
        variant_count: u8,
    ) -> CopydeskResult<Vec<String>> {
        let count = usize::from(variant_count);
        let mut outputs = Vec::with_capacity(count);

        for i in 0..count {
            debug!(variant = i + 1, of = count, "Generating variant");
            let text = self
                .generator
                .generate_with_retry(model_id, prompt, temperature)
                .await?;

            outputs.push(if text.trim().is_empty() {
                EMPTY_VARIANT_PLACEHOLDER.to_string()
            } else {
                text
            });

            if i + 1 < count {
                self.sleeper.sleep(self.pacing).await;
            }
        }

        info!(count = outputs.len(), "Collected variants");
        Ok(outputs)
    }

    /// Generate the variants a request asks for, numbered from 1.
    pub async fn collect_variants(
        &self,
        request: &GenerationRequest,
    ) -> CopydeskResult<Vec<Variant>> {
        let texts = self
            .collect(
                request.model_id(),
                &request.prompt(),
                *request.temperature(),
                *request.variant_count(),
            )
            .await?;

        Ok(texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| Variant::new(i + 1, text))
            .collect())
    }
}
