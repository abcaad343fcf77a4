//! Completions client struct, request building, and response parsing.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{AiError, Message};

use super::config::CompletionConfig;

const MAX_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Chat-completions API client.
pub struct CompletionsClient {
    pub(crate) config: CompletionConfig,
    pub(crate) http: reqwest::Client,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl CompletionsClient {
    pub fn new(config: CompletionConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.timeout.min(MAX_CONNECT_TIMEOUT))
            .timeout(config.timeout)
            .build()
            .map_err(|e| AiError::Unexpected(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    /// Use a preconfigured HTTP client, e.g. one with custom proxy settings.
    /// The request timeout is then whatever `http` was built with.
    pub fn with_http_client(config: CompletionConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    /// Build the JSON request body. Streaming is always off.
    pub(crate) fn build_request_body<'a>(&'a self, messages: &'a [Message]) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.config.model,
            messages,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            top_p: self.config.top_p,
            stream: false,
        }
    }
}

/// Extract `choices[0].message.content` from a response body.
pub(crate) fn parse_response(body: &str) -> Result<String, AiError> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|_| AiError::InvalidResponse)?;
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(AiError::InvalidResponse)
}
