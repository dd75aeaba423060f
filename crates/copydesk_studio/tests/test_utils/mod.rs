//! Test utilities for studio tests.

#![allow(dead_code)]

use async_trait::async_trait;
use copydesk_error::{CopydeskResult, GeminiError, GeminiErrorKind};
use copydesk_interface::{Notifier, ResilientGenerator, Sleeper, TextGenerator};
use copydesk_rate_limit::{RetryPolicy, RetryingGenerator};
use copydesk_studio::VariantCollector;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One scripted generator reply.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(String),
    Empty,
    RateLimited,
    Failure(String),
}

/// Generator that replays a script and records every prompt it receives.
///
/// Once the script runs out, the last entry repeats.
#[derive(Debug)]
pub struct MockGenerator {
    script: Mutex<VecDeque<MockResponse>>,
    last: MockResponse,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    pub fn new(script: Vec<MockResponse>) -> Self {
        let last = script.last().cloned().unwrap_or(MockResponse::Empty);
        Self {
            script: Mutex::new(script.into()),
            last,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn texts(texts: &[&str]) -> Self {
        Self::new(
            texts
                .iter()
                .map(|t| MockResponse::Success(t.to_string()))
                .collect(),
        )
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate_once(
        &self,
        _model_id: &str,
        prompt: &str,
        _temperature: f32,
    ) -> CopydeskResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let next = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.last.clone());

        match next {
            MockResponse::Success(text) => Ok(text),
            MockResponse::Empty => Ok(String::new()),
            MockResponse::RateLimited => Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: 429,
                message: "quota exceeded".to_string(),
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

/// Retrying source that replays fixed texts verbatim, blanks included.
#[derive(Debug)]
pub struct ScriptedSource {
    texts: Mutex<VecDeque<String>>,
    calls: Mutex<usize>,
}

impl ScriptedSource {
    pub fn new(texts: &[&str]) -> Self {
        Self {
            texts: Mutex::new(texts.iter().map(|t| t.to_string()).collect()),
            calls: Mutex::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl ResilientGenerator for ScriptedSource {
    async fn generate_with_retry(
        &self,
        _model_id: &str,
        _prompt: &str,
        _temperature: f32,
    ) -> CopydeskResult<String> {
        *self.calls.lock().unwrap() += 1;
        Ok(self.texts.lock().unwrap().pop_front().unwrap_or_default())
    }
}

/// Notifier that records progress and warning notices.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    infos: Mutex<Vec<String>>,
    warnings: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn infos(&self) -> Vec<String> {
        self.infos.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn warn(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }

    fn info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
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

pub const PACING: Duration = Duration::from_millis(2500);

/// Collector with the default retry policy and recorded sleeps for both
/// backoff and pacing.
pub fn collector(
    generator: MockGenerator,
) -> (
    VariantCollector<RetryingGenerator<MockGenerator>>,
    Arc<RecordingSleeper>,
) {
    let sleeper = Arc::new(RecordingSleeper::default());
    let retrying =
        RetryingGenerator::new(generator, RetryPolicy::default()).with_sleeper(sleeper.clone());
    let collector = VariantCollector::new(retrying, PACING).with_sleeper(sleeper.clone());
    (collector, sleeper)
}
