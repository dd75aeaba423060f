use copydesk_core::{ContentType, GenerationForm, TemplatePreset, Tone, build_prompt};
use strum::IntoEnumIterator;

#[test]
fn prompt_is_deterministic_and_contains_topic() {
    for content_type in ContentType::iter() {
        for tone in Tone::iter() {
            let first = build_prompt("Cold brew subscriptions", content_type, tone, 200, "", TemplatePreset::Custom);
            let second = build_prompt("Cold brew subscriptions", content_type, tone, 200, "", TemplatePreset::Custom);
            assert_eq!(first, second);
            assert!(first.contains("Cold brew subscriptions"));
        }
    }
}

#[test]
fn prompt_mentions_role_tone_length_and_formatting() {
    let prompt = build_prompt(
        "Spring sale",
        ContentType::ProductDescription,
        Tone::Friendly,
        320,
        "",
        TemplatePreset::Custom,
    );

    assert!(prompt.starts_with("You are a concise, conversion-focused copywriter."));
    assert!(prompt.contains("Produce product description with a strong hook"));
    assert!(prompt.contains("Tone/Style: Friendly"));
    assert!(prompt.contains("Target Length (approx words): 320"));
    assert!(prompt.contains("Formatting: short paragraphs or bullet points when useful."));
    assert!(prompt.ends_with("\n\nWrite it now."));
}

#[test]
fn known_preset_hint_is_included_verbatim() {
    for preset in TemplatePreset::iter().filter(|p| *p != TemplatePreset::Custom) {
        let prompt = build_prompt("Topic", ContentType::AdCopy, Tone::Bold, 140, "", preset);
        assert!(
            prompt.contains(&format!("Template Hints: {}", preset.hint())),
            "missing hint for {}",
            preset
        );
    }
}

#[test]
fn none_or_unknown_preset_adds_no_hint_section() {
    let unknown = TemplatePreset::lookup("Underwater Basket Weaving");
    assert_eq!(unknown, TemplatePreset::Custom);

    for preset in [TemplatePreset::Custom, unknown] {
        let prompt = build_prompt("Topic", ContentType::AdCopy, Tone::Bold, 140, "", preset);
        assert!(!prompt.contains("Template Hints"));
    }
}

#[test]
fn extra_instructions_are_trimmed_and_labelled() {
    let prompt = build_prompt(
        "Topic",
        ContentType::BlogIntro,
        Tone::Professional,
        140,
        "  Mention the free trial.\n ",
        TemplatePreset::Custom,
    );
    assert!(prompt.contains("\nExtra Instructions: Mention the free trial.\n"));

    let blank = build_prompt("Topic", ContentType::BlogIntro, Tone::Professional, 140, "   \n\t", TemplatePreset::Custom);
    assert!(!blank.contains("Extra Instructions"));
}

#[test]
fn hint_precedes_extra_instructions() {
    let prompt = build_prompt(
        "Topic",
        ContentType::EmailPromo,
        Tone::Persuasive,
        140,
        "Keep it short",
        TemplatePreset::ECommerce,
    );
    let hint_at = prompt.find("Template Hints:").unwrap();
    let extra_at = prompt.find("Extra Instructions:").unwrap();
    assert!(hint_at < extra_at);
}

#[test]
fn request_prompt_matches_builder() {
    let form = GenerationForm {
        topic: "AI tools for small businesses".to_string(),
        content_type: ContentType::AdCopy,
        tone: Tone::Bold,
        target_length: 140,
        template: TemplatePreset::Saas,
        extra_instructions: " CTA: book a demo ".to_string(),
        ..Default::default()
    };
    let request = form.validate().unwrap();

    assert_eq!(
        request.prompt(),
        build_prompt(
            "AI tools for small businesses",
            ContentType::AdCopy,
            Tone::Bold,
            140,
            "CTA: book a demo",
            TemplatePreset::Saas,
        )
    );
}
