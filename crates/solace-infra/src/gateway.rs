//! OllamaGateway -- concrete [`ChatGateway`] implementation.
//!
//! Sends one non-streaming request per chat call to the gateway's
//! `/api/chat` endpoint and extracts the reply text from the response
//! body. The upstream may answer in either of two shapes, so extraction
//! runs an ordered list of strategies and takes the first non-empty
//! result.

use std::time::Duration;

use serde_json::Value;

use solace_core::gateway::ChatGateway;
use solace_types::error::GatewayError;
use solace_types::gateway::{GatewayChatRequest, GatewayMessage};

use crate::config::AppConfig;

/// Full-exchange timeout for the gateway call.
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Ollama-protocol model gateway client.
///
/// One HTTP POST per [`ChatGateway::reply`] call, no retries. The base URL
/// and model name come from configuration; `with_base_url` exists for
/// pointing tests at a mock server.
pub struct OllamaGateway {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaGateway {
    /// Create a new gateway client.
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    /// Create a gateway client from the loaded configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.gateway_url, &config.model)
    }

    /// The model identifier sent with every request.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Override the base URL (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn url(&self) -> String {
        format!("{}/api/chat", self.base_url)
    }
}

impl ChatGateway for OllamaGateway {
    async fn reply(&self, messages: Vec<GatewayMessage>) -> Result<String, GatewayError> {
        let body = GatewayChatRequest::new(self.model.clone(), messages);

        let response = self
            .client
            .post(self.url())
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let parsed: Value = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedBody(e.to_string()))?;

        // Missing/empty content in a successful response is not an error;
        // the endpoint substitutes the placeholder reply.
        Ok(extract_reply(&parsed))
    }
}

fn map_transport_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Timeout(REQUEST_TIMEOUT_SECS)
    } else {
        GatewayError::Transport(err.to_string())
    }
}

// ---------------------------------------------------------------------------
// Reply extraction
//
// Each strategy inspects the parsed body and returns the content string it
// finds, if any. Strategies are tried in order; the first whose trimmed
// result is non-empty wins. Adding a future upstream shape means adding a
// function here, not branching in the client.
// ---------------------------------------------------------------------------

type Extractor = fn(&Value) -> Option<String>;

const EXTRACTORS: &[Extractor] = &[message_content, first_choice_content];

/// `{"message": {"content": "..."}}` -- the native Ollama chat shape.
fn message_content(body: &Value) -> Option<String> {
    body.get("message")?
        .get("content")?
        .as_str()
        .map(str::to_string)
}

/// `{"choices": [{"message": {"content": "..."}}]}` -- OpenAI-style,
/// first choice only.
fn first_choice_content(body: &Value) -> Option<String> {
    body.get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
        .map(str::to_string)
}

fn extract_reply(body: &Value) -> String {
    EXTRACTORS
        .iter()
        .find_map(|extract| {
            let text = extract(body)?;
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .unwrap_or_default()
}
