use copydesk_core::{
    ContentType, GenerationForm, MAX_TARGET_LENGTH, MIN_TARGET_LENGTH, TemplatePreset, Tone,
};
use copydesk_error::ValidationErrorKind;
use std::str::FromStr;

#[test]
fn blank_topic_is_rejected() {
    for topic in ["", "   ", "\n\t"] {
        let form = GenerationForm {
            topic: topic.to_string(),
            ..Default::default()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::EmptyTopic);
    }
}

#[test]
fn out_of_range_fields_are_rejected() {
    let base = GenerationForm {
        topic: "Topic".to_string(),
        ..Default::default()
    };

    let form = GenerationForm {
        target_length: MIN_TARGET_LENGTH - 1,
        ..base.clone()
    };
    assert!(matches!(
        form.validate().unwrap_err().kind,
        ValidationErrorKind::LengthOutOfRange { value: 49, .. }
    ));

    let form = GenerationForm {
        target_length: MAX_TARGET_LENGTH + 10,
        ..base.clone()
    };
    assert!(form.validate().is_err());

    let form = GenerationForm {
        temperature: 1.5,
        ..base.clone()
    };
    assert!(matches!(
        form.validate().unwrap_err().kind,
        ValidationErrorKind::TemperatureOutOfRange(_)
    ));

    for variant_count in [0, 4] {
        let form = GenerationForm {
            variant_count,
            ..base.clone()
        };
        assert_eq!(
            form.validate().unwrap_err().kind,
            ValidationErrorKind::VariantCountOutOfRange(variant_count)
        );
    }
}

#[test]
fn bounds_are_inclusive() {
    let form = GenerationForm {
        topic: "Topic".to_string(),
        target_length: MAX_TARGET_LENGTH,
        temperature: 1.0,
        variant_count: 3,
        ..Default::default()
    };
    assert!(form.validate().is_ok());

    let form = GenerationForm {
        topic: "Topic".to_string(),
        target_length: MIN_TARGET_LENGTH,
        temperature: 0.0,
        ..Default::default()
    };
    assert!(form.validate().is_ok());
}

#[test]
fn validated_request_is_trimmed() {
    let form = GenerationForm {
        topic: "  Coffee  ".to_string(),
        extra_instructions: "   ".to_string(),
        ..Default::default()
    };
    let request = form.validate().unwrap();
    assert_eq!(request.topic(), "Coffee");
    assert_eq!(request.extra_instructions(), &None);
}

#[test]
fn labels_round_trip_through_parsing() {
    assert_eq!(ContentType::from_str("YouTube Description").unwrap(), ContentType::YouTubeDescription);
    assert_eq!(Tone::from_str("motivational").unwrap(), Tone::Motivational);
    assert_eq!(TemplatePreset::from_str("real-estate").unwrap(), TemplatePreset::RealEstate);
    assert_eq!(TemplatePreset::Custom.to_string(), "None (custom)");
    assert!(ContentType::from_str("Haiku").is_err());
}

#[test]
fn slug_matches_export_naming() {
    assert_eq!(ContentType::AdCopy.slug(), "ad_copy");
    assert_eq!(ContentType::YouTubeDescription.slug(), "youtube_description");
}
