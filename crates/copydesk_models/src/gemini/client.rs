//! Google Gemini API implementation.
//!
//! The [`GeminiClient`] keeps one `gemini-rust` client per model id, created
//! lazily on first use, so the studio can switch between models per request
//! without rebuilding anything. Each call issues exactly one request; retrying
//! on rate limits happens in `copydesk_rate_limit`.

use async_trait::async_trait;
use std::collections::HashMap;
use std::env;
use std::sync::{Arc, Mutex};
use tracing::{debug, instrument};

use gemini_rust::{Gemini, client::Model};

use copydesk_error::{CopydeskResult, GeminiError, GeminiErrorKind};
use copydesk_interface::TextGenerator;

use super::GeminiResult;

/// Client for the Google Gemini API with per-model client pooling.
///
/// Cloning is cheap and clones share the pool.
#[derive(Clone)]
pub struct GeminiClient {
    /// Cache of model-specific REST clients
    clients: Arc<Mutex<HashMap<String, Gemini>>>,
    /// API key for creating new clients
    api_key: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let client_count = self.clients.lock().map(|c| c.len()).unwrap_or(0);
        f.debug_struct("GeminiClient")
            .field("cached_clients", &client_count)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client reading the key from `GEMINI_API_KEY`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use copydesk_models::GeminiClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = GeminiClient::new()?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(name = "gemini_client_new")]
    pub fn new() -> CopydeskResult<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        Ok(Self::with_api_key(api_key)?)
    }

    /// Create a client with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiErrorKind::MissingApiKey`] if the key is blank.
    pub fn with_api_key(api_key: impl Into<String>) -> GeminiResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::MissingApiKey));
        }
        Ok(Self {
            clients: Arc::new(Mutex::new(HashMap::new())),
            api_key,
        })
    }

    /// Number of model clients created so far.
    pub fn cached_models(&self) -> usize {
        self.clients.lock().map(|c| c.len()).unwrap_or(0)
    }

    /// Convert a model id to a gemini-rust Model variant.
    ///
    /// - "gemini-2.5-flash" → Model::Gemini25Flash
    /// - "gemini-2.0-flash" → Model::Custom("models/gemini-2.0-flash")
    /// - "models/gemini-2.0-flash" → Model::Custom("models/gemini-2.0-flash")
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other if other.starts_with("models/") => Model::Custom(other.to_string()),
            other => Model::Custom(format!("models/{}", other)),
        }
    }

    /// Get or create the pooled client for a model.
    fn client_for(&self, model_id: &str) -> GeminiResult<Gemini> {
        let mut clients = self.clients.lock().map_err(|e| {
            GeminiError::new(GeminiErrorKind::ClientCreation(format!(
                "Client pool lock poisoned: {}",
                e
            )))
        })?;

        if let Some(client) = clients.get(model_id) {
            return Ok(client.clone());
        }

        debug!(model = model_id, "Creating Gemini client");
        let client = Gemini::with_model(&self.api_key, Self::model_name_to_enum(model_id))
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;
        clients.insert(model_id.to_string(), client.clone());
        Ok(client)
    }

    /// Issue one generation request and return the raw response text.
    async fn generate_internal(
        &self,
        model_id: &str,
        prompt: &str,
        temperature: f32,
    ) -> GeminiResult<String> {
        let client = self.client_for(model_id)?;

        let response = client
            .generate_content()
            .with_user_message(prompt)
            .with_temperature(temperature)
            .execute()
            .await
            .map_err(parse_gemini_error)?;

        Ok(response.text())
    }
}

/// Convert a gemini-rust error into a structured [`GeminiError`].
///
/// The SDK reports failures as text such as
/// `"bad response from server; code 429; description: ..."`. When a status
/// code can be found it becomes [`GeminiErrorKind::HttpError`], otherwise the
/// message is kept as [`GeminiErrorKind::ApiRequest`].
///
/// # Examples
///
/// ```
/// use copydesk_models::parse_gemini_error;
///
/// let err = parse_gemini_error("bad response from server; code 429; description: quota");
/// assert!(err.kind.is_rate_limited());
/// ```
pub fn parse_gemini_error(err: impl std::fmt::Display) -> GeminiError {
    let err_msg = err.to_string();

    if let Some(status_code) = extract_status_code(&err_msg) {
        GeminiError::new(GeminiErrorKind::HttpError {
            status_code,
            message: err_msg,
        })
    } else {
        GeminiError::new(GeminiErrorKind::ApiRequest(err_msg))
    }
}

/// Extract the number following `"code "` in an SDK error message.
fn extract_status_code(error_msg: &str) -> Option<u16> {
    let code_start = error_msg.find("code ")?;
    let code_str = &error_msg[code_start + 5..];
    let end = code_str
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(code_str.len());
    code_str[..end].parse().ok()
}

#[async_trait]
impl TextGenerator for GeminiClient {
    #[instrument(skip(self, prompt), fields(prompt_chars = prompt.len()))]
    async fn generate_once(
        &self,
        model_id: &str,
        prompt: &str,
        temperature: f32,
    ) -> CopydeskResult<String> {
        Ok(self.generate_internal(model_id, prompt, temperature).await?)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}
