//! Tests for TUI state handling.

use copydesk_core::{ContentType, GenerationForm, TemplatePreset, Tone, Variant};
use copydesk_error::{CopydeskError, StorageError, StorageErrorKind};
use copydesk_interface::Notifier;
use copydesk_rate_limit::StudioConfig;
use copydesk_studio::SubmissionOutcome;
use copydesk_tui::{
    Action, App, AppMode, Branding, FormField, SessionState, StatusKind, StatusNotifier,
    parse_accent,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

fn open_app() -> App {
    App::new(
        Branding::default(),
        SessionState::new(None),
        &StudioConfig::default(),
    )
}

fn store_error() -> CopydeskError {
    StorageError::new(StorageErrorKind::Unavailable("sheet offline".to_string())).into()
}

#[test]
fn test_form_starts_with_configured_defaults() {
    let app = open_app();

    assert_eq!(app.mode, AppMode::Form);
    assert_eq!(app.focus, FormField::Topic);
    assert_eq!(app.form.model_id, "gemini-2.5-flash");
    assert_eq!(app.form.temperature, 0.5);
    assert_eq!(app.form.target_length, 140);
    assert_eq!(app.form.variant_count, 1);
}

#[test]
fn test_typing_and_submit() {
    let mut app = open_app();
    type_text(&mut app, "AI tools");
    app.handle_key(key(KeyCode::Backspace));
    type_text(&mut app, "s!");

    let action = app.handle_key(key(KeyCode::Enter));

    match action {
        Some(Action::Submit(form)) => assert_eq!(form.topic, "AI tools!"),
        other => panic!("expected submit, got {other:?}"),
    }
}

#[test]
fn test_selectors_cycle_and_wrap() {
    let mut app = open_app();

    app.focus = FormField::ContentType;
    app.handle_key(key(KeyCode::Right));
    assert_eq!(app.form.content_type, ContentType::InstagramCaption);
    app.handle_key(key(KeyCode::Left));
    app.handle_key(key(KeyCode::Left));
    assert_eq!(app.form.content_type, ContentType::YouTubeDescription);

    app.focus = FormField::Tone;
    app.handle_key(key(KeyCode::Right));
    assert_eq!(app.form.tone, Tone::Friendly);

    app.focus = FormField::Template;
    app.handle_key(key(KeyCode::Right));
    assert_eq!(app.form.template, TemplatePreset::RealEstate);

    app.focus = FormField::Model;
    app.handle_key(key(KeyCode::Right));
    assert_eq!(app.form.model_id, "gemini-2.5-pro");
    app.handle_key(key(KeyCode::Right));
    assert_eq!(app.form.model_id, "gemini-2.5-flash");
}

#[test]
fn test_numbers_are_clamped() {
    let mut app = open_app();

    app.focus = FormField::Temperature;
    for _ in 0..10 {
        app.handle_key(key(KeyCode::Right));
    }
    assert_eq!(app.form.temperature, 1.0);
    app.handle_key(key(KeyCode::Left));
    assert_eq!(app.form.temperature, 0.9);

    app.focus = FormField::Variants;
    for _ in 0..5 {
        app.handle_key(key(KeyCode::Right));
    }
    assert_eq!(app.form.variant_count, 3);
    for _ in 0..5 {
        app.handle_key(key(KeyCode::Left));
    }
    assert_eq!(app.form.variant_count, 1);

    app.focus = FormField::Length;
    for _ in 0..20 {
        app.handle_key(key(KeyCode::Left));
    }
    assert_eq!(app.form.target_length, 50);
    app.handle_key(key(KeyCode::Right));
    assert_eq!(app.form.target_length, 60);
}

#[test]
fn test_focus_wraps() {
    let mut app = open_app();
    app.focus = FormField::Extra;
    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.focus, FormField::Model);
    app.handle_key(key(KeyCode::BackTab));
    assert_eq!(app.focus, FormField::Extra);
}

#[test]
fn test_passcode_gate() {
    let mut app = App::new(
        Branding::default(),
        SessionState::new(Some("letmein".to_string())),
        &StudioConfig::default(),
    );
    assert_eq!(app.mode, AppMode::Locked);

    type_text(&mut app, "wrong");
    assert!(app.handle_key(key(KeyCode::Enter)).is_none());
    assert_eq!(app.mode, AppMode::Locked);
    assert_eq!(app.status_kind, StatusKind::Error);
    assert!(app.passcode_input.is_empty());

    type_text(&mut app, "letmein");
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.mode, AppMode::Form);
    assert!(app.session.is_unlocked());
}

#[test]
fn test_empty_passcode_means_no_gate() {
    let session = SessionState::new(Some(String::new()));
    assert!(session.is_unlocked());
    assert!(!session.is_gated());
}

#[test]
fn test_successful_outcome_shows_results() -> anyhow::Result<()> {
    let mut app = open_app();
    let request = GenerationForm {
        topic: "Yoga mats".to_string(),
        variant_count: 2,
        ..Default::default()
    }
    .validate()?;

    app.begin_submission();
    assert!(app.busy);
    assert!(app.handle_key(key(KeyCode::Enter)).is_none());

    app.apply_outcome(SubmissionOutcome::Generated {
        request,
        variants: vec![Variant::new(1, "X"), Variant::new(2, "Y")],
        timestamp: "2024-05-01T10:00:00".to_string(),
    });

    assert!(!app.busy);
    assert_eq!(app.mode, AppMode::Results);
    assert_eq!(app.results.as_ref().map(|r| r.variants.len()), Some(2));

    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Down));
    assert_eq!(app.selected_variant, 1);
    assert_eq!(app.handle_key(key(KeyCode::Enter)), Some(Action::Export(1)));

    let (_, variant) = app.variant_for_export(1).unwrap();
    assert_eq!(variant.text, "Y");
    Ok(())
}

#[test]
fn test_failed_outcome_clears_results() -> anyhow::Result<()> {
    let mut app = open_app();
    let request = GenerationForm {
        topic: "Yoga mats".to_string(),
        ..Default::default()
    }
    .validate()?;
    app.apply_outcome(SubmissionOutcome::Generated {
        request,
        variants: vec![Variant::new(1, "X")],
        timestamp: "2024-05-01T10:00:00".to_string(),
    });

    app.apply_outcome(SubmissionOutcome::StoreFailed(store_error()));

    assert!(app.results.is_none());
    assert_eq!(app.status_kind, StatusKind::Error);
    assert!(app.status_message.contains("sheet offline"));
    Ok(())
}

#[test]
fn test_validation_outcome_is_a_warning() {
    let mut app = open_app();
    let err = GenerationForm::default().validate().unwrap_err();

    app.apply_outcome(SubmissionOutcome::ValidationFailed(err));

    assert_eq!(app.status_kind, StatusKind::Warning);
    assert_eq!(app.status_message, "Please enter a topic.");
}

#[test]
fn test_history_failure_is_isolated() {
    let mut app = open_app();

    app.set_history(Err(store_error()));
    assert!(app.history.is_empty());
    assert!(app.history_error.as_deref().unwrap().contains("sheet offline"));
    assert_eq!(app.mode, AppMode::Form);

    app.set_history(Ok(Vec::new()));
    assert!(app.history_error.is_none());
}

#[test]
fn test_ctrl_c_quits_anywhere() {
    let mut app = open_app();
    app.busy = true;
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);
}

#[test]
fn test_branding() {
    let branding = Branding::new("Acme", "#00FF00", None);
    assert_eq!(branding.title(), "Acme — Content Studio");
    assert_eq!(branding.footer(2025), "© 2025 Acme. All rights reserved.");
    assert_eq!(branding.accent, Color::Rgb(0, 255, 0));

    let fallback = Branding::new("", "not-a-colour", None);
    assert_eq!(fallback.brand_name, "BizConvert");
    assert_eq!(Some(fallback.accent), parse_accent("#E11D48"));
}

#[test]
fn test_status_notifier_drains() {
    let notifier = StatusNotifier::new();
    let shared = notifier.clone();

    shared.warn("Rate limit hit. Cooling down… (1/3)");
    shared.warn("Rate limit hit. Cooling down… (2/3)");

    assert_eq!(notifier.drain().len(), 2);
    assert!(notifier.drain().is_empty());
}
