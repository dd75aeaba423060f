//! One-shot generation command.

use super::{ConsoleNotifier, GenerateArgs};
use copydesk::{
    ContentType, CopydeskConfig, CopydeskResult, GenerationForm, Settings, SubmissionOutcome,
    TemplatePreset, Tone, ValidationError, ValidationErrorKind,
};
use std::str::FromStr;
use std::sync::Arc;

/// Turn command-line arguments into a studio form.
///
/// Content type and tone must name a known option; an unknown template
/// falls back to no preset.
pub fn form_from_args(args: &GenerateArgs, config: &CopydeskConfig) -> CopydeskResult<GenerationForm> {
    let content_type = ContentType::from_str(&args.content_type).map_err(|_| {
        ValidationError::new(ValidationErrorKind::UnknownOption {
            field: "content type",
            value: args.content_type.clone(),
        })
    })?;
    let tone = Tone::from_str(&args.tone).map_err(|_| {
        ValidationError::new(ValidationErrorKind::UnknownOption {
            field: "tone",
            value: args.tone.clone(),
        })
    })?;
    let template = args
        .template
        .as_deref()
        .map(TemplatePreset::lookup)
        .unwrap_or_default();

    Ok(GenerationForm {
        topic: args.topic.clone(),
        content_type,
        tone,
        target_length: args.length.unwrap_or(config.studio.default_length),
        template,
        extra_instructions: args.extra.clone(),
        model_id: args
            .model
            .clone()
            .unwrap_or_else(|| config.studio.default_model().to_string()),
        temperature: args.temperature.unwrap_or(config.studio.default_temperature),
        variant_count: args.variants,
    })
}

/// Handle the `generate` command.
#[cfg(feature = "gemini")]
pub async fn handle_generate(
    args: GenerateArgs,
    settings: &Settings,
    config: &CopydeskConfig,
) -> CopydeskResult<()> {
    use copydesk::{GeminiClient, Studio};

    let form = form_from_args(&args, config)?;
    // Reject a bad brief before touching the network.
    form.validate()?;

    let generator = GeminiClient::with_api_key(settings.require_api_key()?)?;
    let store = super::open_sheet(settings)?;
    let studio = Studio::from_config(generator, store, config, Arc::new(ConsoleNotifier));

    if studio.prepare().await? {
        eprintln!("Wrote history header row.");
    }

    tracing::info!(
        model = %form.model_id,
        variants = form.variant_count,
        "Generating copy"
    );

    match studio.submit(&form).await {
        SubmissionOutcome::Generated {
            request, variants, ..
        } => {
            for variant in &variants {
                println!("--- Variant {} ---", variant.index);
                println!("{}", variant.text);
                println!();
            }

            if args.export {
                for variant in &variants {
                    let path = studio.export(&request, variant)?;
                    eprintln!("Exported variant {} to {}", variant.index, path.display());
                }
            }
            Ok(())
        }
        SubmissionOutcome::ValidationFailed(err) => Err(err.into()),
        SubmissionOutcome::GenerationFailed(err) | SubmissionOutcome::StoreFailed(err) => Err(err),
    }
}

/// Handle the `generate` command.
#[cfg(not(feature = "gemini"))]
pub async fn handle_generate(
    args: GenerateArgs,
    _settings: &Settings,
    config: &CopydeskConfig,
) -> CopydeskResult<()> {
    form_from_args(&args, config)?.validate()?;
    Err(copydesk::ConfigError::new("copydesk was built without the gemini feature").into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(topic: &str) -> GenerateArgs {
        GenerateArgs {
            topic: topic.to_string(),
            content_type: "linkedin post".to_string(),
            tone: "bold".to_string(),
            length: None,
            template: Some("nonexistent".to_string()),
            extra: String::new(),
            model: None,
            temperature: None,
            variants: 2,
            export: false,
        }
    }

    #[test]
    fn form_takes_config_defaults() {
        let config = CopydeskConfig::default();
        let form = form_from_args(&args("Coffee"), &config).unwrap();

        assert_eq!(form.content_type, ContentType::LinkedInPost);
        assert_eq!(form.tone, Tone::Bold);
        assert_eq!(form.template, TemplatePreset::Custom);
        assert_eq!(form.model_id, config.studio.default_model());
        assert_eq!(form.target_length, config.studio.default_length);
        assert_eq!(form.variant_count, 2);
    }

    #[test]
    fn unknown_tone_is_rejected() {
        let mut bad = args("Coffee");
        bad.tone = "Sarcastic".to_string();
        let err = form_from_args(&bad, &CopydeskConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Unknown tone: Sarcastic"));
    }
}
