//! Test utilities for rate-limit tests.
//!
//! Mock generator with scripted responses, plus a sleeper and notifier that
//! record what they were asked to do instead of doing it.

#![allow(dead_code)]

use async_trait::async_trait;
use copydesk_error::{CopydeskResult, GeminiError, GeminiErrorKind};
use copydesk_interface::{Notifier, Sleeper, TextGenerator};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One scripted generator reply.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return this text
    Success(String),
    /// Return an empty string
    Empty,
    /// Fail with an HTTP 429
    RateLimited,
    /// Fail with a non-retryable error
    Failure(String),
}

/// Generator that replays a script, repeating the last entry forever.
#[derive(Debug)]
pub struct MockGenerator {
    script: Mutex<VecDeque<MockResponse>>,
    last: Mutex<MockResponse>,
    calls: AtomicUsize,
}

impl MockGenerator {
    pub fn new(script: Vec<MockResponse>) -> Self {
        let last = script.last().cloned().unwrap_or(MockResponse::Empty);
        Self {
            script: Mutex::new(script.into()),
            last: Mutex::new(last),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn always(response: MockResponse) -> Self {
        Self::new(vec![response])
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate_once(
        &self,
        _model_id: &str,
        _prompt: &str,
        _temperature: f32,
    ) -> CopydeskResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.last.lock().unwrap().clone());

        match next {
            MockResponse::Success(text) => Ok(text),
            MockResponse::Empty => Ok(String::new()),
            MockResponse::RateLimited => Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: 429,
                message: "Resource has been exhausted (e.g. check quota).".to_string(),
            })
            .into()),
            MockResponse::Failure(message) => {
                Err(GeminiError::new(GeminiErrorKind::ApiRequest(message)).into())
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// Sleeper that records requested durations and returns immediately.
#[derive(Debug, Default)]
pub struct RecordingSleeper {
    sleeps: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}

/// Notifier that keeps every warning.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    warnings: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn warn(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }
}

pub fn recorders() -> (Arc<RecordingSleeper>, Arc<RecordingNotifier>) {
    (
        Arc::new(RecordingSleeper::default()),
        Arc::new(RecordingNotifier::default()),
    )
}
