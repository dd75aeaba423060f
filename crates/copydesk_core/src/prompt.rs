//! Prompt construction.

use crate::{ContentType, TemplatePreset, Tone};

/// Build the instruction sent to the model.
///
/// The prompt opens with a copywriter role statement naming the content type,
/// then lists topic, tone, target length and formatting guidance. A preset
/// hint is appended when the preset has one, and trimmed extra instructions
/// are appended under their own label when non-empty. Deterministic for
/// identical inputs.
///
/// # Examples
///
/// ```
/// use copydesk_core::{ContentType, TemplatePreset, Tone, build_prompt};
///
/// let prompt = build_prompt(
///     "AI tools for small businesses",
///     ContentType::AdCopy,
///     Tone::Bold,
///     140,
///     "",
///     TemplatePreset::Custom,
/// );
///
/// assert!(prompt.contains("Produce ad copy"));
/// assert!(prompt.contains("Topic: AI tools for small businesses"));
/// assert!(!prompt.contains("Template Hints"));
/// ```
pub fn build_prompt(
    topic: &str,
    content_type: ContentType,
    tone: Tone,
    target_length: u32,
    extra: &str,
    template: TemplatePreset,
) -> String {
    let role = format!(
        "You are a concise, conversion-focused copywriter. Produce {} with a strong hook, \
         clear structure, and a compelling call-to-action. Keep it helpful and readable for a \
         general audience.",
        content_type.as_ref().to_lowercase()
    );

    let mut guide = format!(
        "\n\nTopic: {}\nTone/Style: {}\nTarget Length (approx words): {}\n\
         Formatting: short paragraphs or bullet points when useful.",
        topic, tone, target_length
    );

    let hint = template.hint().trim();
    if !hint.is_empty() {
        guide.push_str("\nTemplate Hints: ");
        guide.push_str(hint);
    }

    let extra = extra.trim();
    if !extra.is_empty() {
        guide.push_str("\nExtra Instructions: ");
        guide.push_str(extra);
    }

    format!("{}\n{}\n\nWrite it now.", role, guide)
}
