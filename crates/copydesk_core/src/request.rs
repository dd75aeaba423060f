//! Raw form input and the validated generation request built from it.

use crate::{ContentType, TemplatePreset, Tone, build_prompt};
use copydesk_error::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};

/// Smallest accepted target length in words.
pub const MIN_TARGET_LENGTH: u32 = 50;
/// Largest accepted target length in words.
pub const MAX_TARGET_LENGTH: u32 = 600;
/// Largest number of variants per submission.
pub const MAX_VARIANTS: u8 = 3;

/// Unvalidated values collected from the studio form or the command line.
///
/// # Examples
///
/// ```
/// use copydesk_core::{ContentType, GenerationForm, Tone};
///
/// let form = GenerationForm {
///     topic: "  AI tools for small businesses ".to_string(),
///     content_type: ContentType::AdCopy,
///     tone: Tone::Bold,
///     ..Default::default()
/// };
///
/// let request = form.validate().unwrap();
/// assert_eq!(request.topic(), "AI tools for small businesses");
/// assert_eq!(*request.variant_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationForm {
    /// Topic, offer or idea
    pub topic: String,
    /// Kind of copy
    pub content_type: ContentType,
    /// Voice
    pub tone: Tone,
    /// Approximate length in words
    pub target_length: u32,
    /// Optional preset
    pub template: TemplatePreset,
    /// Optional free-form instructions
    pub extra_instructions: String,
    /// Model identifier
    pub model_id: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Number of variants to generate
    pub variant_count: u8,
}

impl Default for GenerationForm {
    fn default() -> Self {
        Self {
            topic: String::new(),
            content_type: ContentType::default(),
            tone: Tone::default(),
            target_length: 140,
            template: TemplatePreset::default(),
            extra_instructions: String::new(),
            model_id: "gemini-2.5-flash".to_string(),
            temperature: 0.5,
            variant_count: 1,
        }
    }
}

impl GenerationForm {
    /// Check the form and freeze it into a [`GenerationRequest`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the topic is blank or a bounded
    /// field is out of range.
    pub fn validate(&self) -> Result<GenerationRequest, ValidationError> {
        let topic = self.topic.trim();
        if topic.is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::EmptyTopic));
        }
        if !(MIN_TARGET_LENGTH..=MAX_TARGET_LENGTH).contains(&self.target_length) {
            return Err(ValidationError::new(ValidationErrorKind::LengthOutOfRange {
                min: MIN_TARGET_LENGTH,
                max: MAX_TARGET_LENGTH,
                value: self.target_length,
            }));
        }
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(ValidationError::new(
                ValidationErrorKind::TemperatureOutOfRange(self.temperature.to_string()),
            ));
        }
        if !(1..=MAX_VARIANTS).contains(&self.variant_count) {
            return Err(ValidationError::new(
                ValidationErrorKind::VariantCountOutOfRange(self.variant_count),
            ));
        }

        let extra = self.extra_instructions.trim();
        Ok(GenerationRequest {
            topic: topic.to_string(),
            content_type: self.content_type,
            tone: self.tone,
            target_length: self.target_length,
            template: self.template,
            extra_instructions: (!extra.is_empty()).then(|| extra.to_string()),
            model_id: self.model_id.clone(),
            temperature: self.temperature,
            variant_count: self.variant_count,
        })
    }
}

/// A validated, immutable submission.
///
/// Only [`GenerationForm::validate`] creates these, so every instance has a
/// non-empty trimmed topic and in-range numeric fields.
#[derive(Debug, Clone, PartialEq, Serialize, derive_getters::Getters)]
pub struct GenerationRequest {
    topic: String,
    content_type: ContentType,
    tone: Tone,
    target_length: u32,
    template: TemplatePreset,
    extra_instructions: Option<String>,
    model_id: String,
    temperature: f32,
    variant_count: u8,
}

impl GenerationRequest {
    /// Build the natural-language prompt for this request.
    pub fn prompt(&self) -> String {
        build_prompt(
            &self.topic,
            self.content_type,
            self.tone,
            self.target_length,
            self.extra_instructions.as_deref().unwrap_or_default(),
            self.template,
        )
    }
}
