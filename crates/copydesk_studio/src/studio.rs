//! The submission pipeline and its outcomes.

use crate::{VariantCollector, export_variant};
use copydesk_core::{GenerationForm, GenerationRequest, HistoryRecord, Variant};
use copydesk_error::{CopydeskError, CopydeskResult, ValidationError};
use copydesk_interface::{Notifier, TabularStore, TextGenerator, TracingNotifier};
use copydesk_rate_limit::{CopydeskConfig, HistoryConfig, RetryPolicy, RetryingGenerator};
use copydesk_storage::HistoryStore;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// What happened to one submission.
#[derive(Debug, derive_more::Display)]
pub enum SubmissionOutcome {
    /// Variants were generated and saved
    #[display("Generated {} variant(s)", variants.len())]
    Generated {
        /// The validated request
        request: GenerationRequest,
        /// Variants in order, numbered from 1
        variants: Vec<Variant>,
        /// Timestamp shared by the saved rows
        timestamp: String,
    },
    /// The form was rejected; nothing was generated or saved
    #[display("{}", _0.kind)]
    ValidationFailed(ValidationError),
    /// Generation failed; nothing was saved
    #[display("Generation failed: {}", _0)]
    GenerationFailed(CopydeskError),
    /// Variants were generated but could not be saved, so none are shown
    #[display("Saving to history failed: {}", _0)]
    StoreFailed(CopydeskError),
}

impl SubmissionOutcome {
    /// Whether the submission completed end to end.
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Generated { .. })
    }

    /// The variants to render, only for a successful submission.
    pub fn variants(&self) -> Option<&[Variant]> {
        match self {
            SubmissionOutcome::Generated { variants, .. } => Some(variants.as_slice()),
            _ => None,
        }
    }

    /// The request behind a successful submission.
    pub fn request(&self) -> Option<&GenerationRequest> {
        match self {
            SubmissionOutcome::Generated { request, .. } => Some(request),
            _ => None,
        }
    }
}

/// Generation, persistence and export for one studio session.
pub struct Studio<G, S> {
    collector: VariantCollector<RetryingGenerator<G>>,
    history: HistoryStore<S>,
    history_config: HistoryConfig,
    export_dir: PathBuf,
    notifier: Arc<dyn Notifier>,
}

impl<G: std::fmt::Debug, S: std::fmt::Debug> std::fmt::Debug for Studio<G, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Studio")
            .field("collector", &self.collector)
            .field("history", &self.history)
            .field("history_config", &self.history_config)
            .field("export_dir", &self.export_dir)
            .finish_non_exhaustive()
    }
}

impl<G: TextGenerator, S: TabularStore> Studio<G, S> {
    /// Assemble a studio from its parts, with default display limits.
    pub fn new(
        collector: VariantCollector<RetryingGenerator<G>>,
        history: HistoryStore<S>,
    ) -> Self {
        Self {
            collector,
            history,
            history_config: HistoryConfig::default(),
            export_dir: PathBuf::from("exports"),
            notifier: Arc::new(TracingNotifier),
        }
    }

    /// Assemble a studio from the tuning configuration.
    ///
    /// Progress and rate-limit notices go to `notifier`.
    pub fn from_config(
        generator: G,
        store: S,
        config: &CopydeskConfig,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let retrying = RetryingGenerator::new(generator, RetryPolicy::from(&config.retry))
            .with_notifier(notifier.clone());
        let collector = VariantCollector::new(retrying, config.pacing.between_variants());

        Self::new(collector, HistoryStore::new(store))
            .with_history_config(config.history.clone())
            .with_export_dir(config.studio.export_dir.clone())
            .with_notifier(notifier)
    }

    /// Set the notifier that receives progress notices.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Set history display limits.
    pub fn with_history_config(mut self, history_config: HistoryConfig) -> Self {
        self.history_config = history_config;
        self
    }

    /// Set the directory variants are exported to.
    pub fn with_export_dir(mut self, export_dir: impl Into<PathBuf>) -> Self {
        self.export_dir = export_dir.into();
        self
    }

    /// The variant collector.
    pub fn collector(&self) -> &VariantCollector<RetryingGenerator<G>> {
        &self.collector
    }

    /// The history adapter.
    pub fn history(&self) -> &HistoryStore<S> {
        &self.history
    }

    /// The export directory.
    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Make sure the history store has its header row.
    pub async fn prepare(&self) -> CopydeskResult<bool> {
        self.history.ensure_header().await
    }

    /// Validate, generate, and save one submission.
    ///
    /// Generation errors abort before anything is saved. A store failure
    /// after generation discards the variants from the outcome.
    #[instrument(skip(self, form), fields(model = %form.model_id, variants = form.variant_count))]
    pub async fn submit(&self, form: &GenerationForm) -> SubmissionOutcome {
        let request = match form.validate() {
            Ok(request) => request,
            Err(err) => {
                info!(error = %err.kind, "Submission rejected");
                return SubmissionOutcome::ValidationFailed(err);
            }
        };

        self.notifier.info(&format!(
            "Generating {} variant(s)…",
            request.variant_count()
        ));
        let variants = match self.collector.collect_variants(&request).await {
            Ok(variants) => variants,
            Err(err) => {
                warn!(error = %err, "Generation failed");
                return SubmissionOutcome::GenerationFailed(err);
            }
        };

        match self.history.append_variants(&request, &variants).await {
            Ok(timestamp) => {
                info!(count = variants.len(), %timestamp, "Submission complete");
                self.notifier
                    .info(&format!("Saved {} variant(s) to history.", variants.len()));
                SubmissionOutcome::Generated {
                    request,
                    variants,
                    timestamp,
                }
            }
            Err(err) => {
                warn!(error = %err, "Failed to save variants");
                SubmissionOutcome::StoreFailed(err)
            }
        }
    }

    /// Recent history, newest last, with long outputs truncated for display.
    pub async fn recent_history(&self) -> CopydeskResult<Vec<HistoryRecord>> {
        let records = self.history.read_recent(self.history_config.limit).await?;
        Ok(records
            .iter()
            .map(|record| {
                record.with_truncated_output(
                    self.history_config.preview_chars,
                    self.history_config.truncate_over_chars,
                )
            })
            .collect())
    }

    /// Write one variant of a request to the export directory.
    pub fn export(&self, request: &GenerationRequest, variant: &Variant) -> CopydeskResult<PathBuf> {
        export_variant(&self.export_dir, *request.content_type(), variant)
    }
}
