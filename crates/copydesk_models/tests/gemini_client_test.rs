#![cfg(feature = "gemini")]

// Tests for the Gemini client.
//
// Construction and error classification run offline. The end-to-end test
// hits the real API and only runs with the `api` feature.

use copydesk_error::{GeminiErrorKind, RateLimitSignal};
use copydesk_interface::TextGenerator;
use copydesk_models::{GeminiClient, parse_gemini_error};

#[test]
fn test_blank_api_key_is_rejected() {
    let err = GeminiClient::with_api_key("   ").unwrap_err();
    assert_eq!(err.kind, GeminiErrorKind::MissingApiKey);
}

#[test]
fn test_client_starts_with_empty_pool() -> anyhow::Result<()> {
    let client = GeminiClient::with_api_key("test-key")?;
    assert_eq!(client.cached_models(), 0);
    assert_eq!(client.provider_name(), "gemini");
    Ok(())
}

#[test]
fn test_status_code_is_extracted() {
    let err = parse_gemini_error("bad response from server; code 503; description: overloaded");
    assert!(matches!(
        err.kind,
        GeminiErrorKind::HttpError {
            status_code: 503,
            ..
        }
    ));
    assert!(!err.is_rate_limited());
}

#[test]
fn test_429_is_rate_limited() {
    let err = parse_gemini_error("bad response from server; code 429; description: slow down");
    assert!(err.is_rate_limited());
}

#[test]
fn test_quota_message_without_code_is_rate_limited() {
    let err = parse_gemini_error("You exceeded your current quota, please check your plan");
    assert!(matches!(err.kind, GeminiErrorKind::ApiRequest(_)));
    assert!(err.is_rate_limited());
}

#[test]
fn test_resource_exhausted_is_rate_limited() {
    let err = parse_gemini_error("status: RESOURCE_EXHAUSTED");
    assert!(err.is_rate_limited());
}

#[test]
fn test_unrelated_failure_is_not_rate_limited() {
    let err = parse_gemini_error("API key not valid. Please pass a valid API key.");
    assert!(!err.is_rate_limited());
}

#[test]
fn test_code_at_end_of_message() {
    let err = parse_gemini_error("request failed with code 400");
    assert!(matches!(
        err.kind,
        GeminiErrorKind::HttpError {
            status_code: 400,
            ..
        }
    ));
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_real_generation() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let client = GeminiClient::new()?;

    let prompt = copydesk_core::build_prompt(
        "Handmade candles",
        copydesk_core::ContentType::AdCopy,
        copydesk_core::Tone::Friendly,
        50,
        "",
        copydesk_core::TemplatePreset::Custom,
    );
    let text = client
        .generate_once("gemini-2.5-flash", &prompt, 0.5)
        .await?;

    assert!(!text.trim().is_empty());
    assert_eq!(client.cached_models(), 1);
    Ok(())
}
