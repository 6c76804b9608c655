pub mod classify;
pub mod operation;
pub(crate) mod request_logging;

use chrono::Utc;

use crate::config::{Settings, UpstreamConfig};
use crate::error::{RelayError, Result};
use crate::providers::OpenRouterClient;
use crate::relay::classify::classify_failure;
use crate::relay::request_logging::{log_forward, log_relay_outcome};

pub use operation::Operation;

/// Forwards user text to the completion API. Holds only read-only
/// configuration, so one instance is shared by every request.
pub struct Relay {
    client: OpenRouterClient,
    upstream: UpstreamConfig,
    api_key: Option<String>,
}

impl Relay {
    pub fn new(settings: &Settings, http: reqwest::Client) -> Self {
        Self {
            client: OpenRouterClient::new(
                http,
                &settings.upstream.base_url,
                &settings.upstream.referer,
            ),
            upstream: settings.upstream.clone(),
            api_key: settings.api_key.clone(),
        }
    }

    pub async fn answer_question(&self, question: &str) -> Result<String> {
        self.complete(Operation::Ask, question).await
    }

    pub async fn humanize_text(&self, text: &str) -> Result<String> {
        self.complete(Operation::Humanize, text).await
    }

    /// Local checks run first so that bad input or a missing credential never
    /// costs an upstream call.
    async fn complete(&self, operation: Operation, input: &str) -> Result<String> {
        if input.is_empty() {
            return Err(RelayError::MissingInput(operation.input_field()));
        }
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::error!(
                operation = operation.name(),
                "Upstream credential missing; request not forwarded"
            );
            return Err(RelayError::MissingCredential);
        };

        let request = operation.build_request(&self.upstream.model, input);
        log_forward(operation, self.client.endpoint(), &request);

        let start_time = Utc::now();
        let result = match self
            .client
            .chat_completions(api_key, operation.title(&self.upstream), &request)
            .await
        {
            Ok(response) => response
                .first_content()
                .map(|content| operation.finish(content))
                .ok_or(RelayError::InvalidUpstreamResponse),
            Err(failure) => Err(classify_failure(failure)),
        };

        log_relay_outcome(operation, start_time, &result);
        result
    }
}
