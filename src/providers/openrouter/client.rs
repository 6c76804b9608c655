use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

use super::types::{ChatCompletionRequest, ChatCompletionResponse};

/// Message used when the upstream reports an error object without text.
pub const UNKNOWN_API_ERROR: &str = "Erro desconhecido da API";

/// Raw outcome of a failed upstream exchange, before classification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamFailure {
    /// The upstream answered with an `{ "error": { "message": .. } }` payload.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// Connection, timeout or a non-success status without an error payload.
    #[error("transport failure: {0}")]
    Transport(String),

    /// Success status but the body is not a completion.
    #[error("malformed completion body: {0}")]
    Malformed(String),
}

pub struct OpenRouterClient {
    http: reqwest::Client,
    endpoint: String,
    referer: String,
}

impl OpenRouterClient {
    pub fn new(http: reqwest::Client, base_url: &str, referer: &str) -> Self {
        Self {
            http,
            endpoint: format!("{}/v1/chat/completions", base_url.trim_end_matches('/')),
            referer: referer.to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn chat_completions(
        &self,
        api_key: &str,
        title: &str,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, UpstreamFailure> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .header("Content-Type", "application/json")
            .header("HTTP-Referer", &self.referer)
            .header("X-Title", title)
            .json(request)
            .send()
            .await
            .map_err(|e| UpstreamFailure::Transport(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| UpstreamFailure::Transport(e.to_string()))?;

        interpret_response(status, &bytes)
    }
}

/// Turns a finished exchange into a completion or an unclassified failure.
/// An error payload wins over the status code, since the gateway sometimes
/// reports failures with HTTP 200.
pub fn interpret_response(
    status: StatusCode,
    bytes: &[u8],
) -> Result<ChatCompletionResponse, UpstreamFailure> {
    let parsed = serde_json::from_slice::<Value>(bytes);

    if let Ok(body) = &parsed {
        if let Some(message) = upstream_error_message(body) {
            return Err(UpstreamFailure::Api {
                status: status.as_u16(),
                message,
            });
        }
    }

    if !status.is_success() {
        return Err(UpstreamFailure::Transport(format!(
            "HTTP {} without error payload",
            status.as_u16()
        )));
    }

    let body = parsed.map_err(|e| UpstreamFailure::Malformed(e.to_string()))?;
    serde_json::from_value(body).map_err(|e| UpstreamFailure::Malformed(e.to_string()))
}

fn upstream_error_message(body: &Value) -> Option<String> {
    let err = body.get("error").filter(|e| !e.is_null())?;
    let message = err
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| err.as_str())
        .filter(|s| !s.is_empty())
        .unwrap_or(UNKNOWN_API_ERROR);
    Some(message.to_string())
}
