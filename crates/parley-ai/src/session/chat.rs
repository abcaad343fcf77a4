//! Async chat turn for Session.

use tracing::{debug, warn};

use crate::{AiError, CompletionClient, Role};

use super::manager::Session;

impl Session {
    /// Add a user message and get the assistant's reply.
    ///
    /// Blank input is rejected without touching history. The reply is
    /// recorded only when the client succeeds, so a failed attempt never
    /// reaches the next request's context.
    pub async fn chat(
        &mut self,
        client: &dyn CompletionClient,
        user_message: impl Into<String>,
    ) -> Result<String, AiError> {
        let user_message = user_message.into();
        if user_message.trim().is_empty() {
            return Err(AiError::EmptyInput);
        }

        self.append(Role::User, user_message);

        let messages = self.context_window();
        debug!(turns = messages.len(), "requesting completion");

        match client.complete(&messages).await {
            Ok(reply) => {
                self.append(Role::Assistant, reply.clone());
                Ok(reply)
            }
            Err(e) => {
                warn!(error = ?e, "completion failed, reply not recorded");
                Err(e)
            }
        }
    }
}
