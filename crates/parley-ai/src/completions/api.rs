//! CompletionClient trait implementation for CompletionsClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiError, CompletionClient, Message};

use super::client::{parse_response, CompletionsClient};

#[async_trait]
impl CompletionClient for CompletionsClient {
    async fn complete(&self, messages: &[Message]) -> Result<String, AiError> {
        let body = self.build_request_body(messages);

        debug!(model = %self.config.model, turns = messages.len(), "chat completion request");

        let response = self
            .http
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.token)
            .json(&body)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(AiError::Network(format!("HTTP {status}: {text}")));
        }

        let text = response.text().await.map_err(classify)?;
        let content = parse_response(&text)?;

        debug!(chars = content.len(), "chat completion received");
        Ok(content)
    }
}

/// Map a transport error onto the failure taxonomy.
fn classify(e: reqwest::Error) -> AiError {
    if e.is_timeout() {
        AiError::Timeout
    } else if e.is_connect() || e.is_request() || e.is_body() || e.is_redirect() || e.is_status()
    {
        AiError::Network(e.to_string())
    } else {
        AiError::Unexpected(e.to_string())
    }
}
