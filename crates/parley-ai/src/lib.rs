//! Conversation engine for Parley.
//!
//! Provides:
//! - A bounded, FIFO-trimmed conversation history
//! - A session that prepends the persona instruction to every request
//! - An HTTP client for OpenAI-style chat-completion endpoints
//! - JSON transcript export

pub mod completions;
pub mod history;
pub mod session;
pub mod transcript;

use async_trait::async_trait;

pub use completions::{CompletionConfig, CompletionsClient};
pub use history::History;
pub use session::Session;

/// Something that turns a context window into a single reply.
///
/// Implementations make exactly one attempt per call and report every
/// failure through [`AiError`] rather than panicking.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, messages: &[Message]) -> Result<String, AiError>;
}

/// One turn of the conversation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// Why a chat turn produced no reply.
///
/// The `Display` text is what the REPL shows to the user.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("⏰ Request timed out. Please try again.")]
    Timeout,
    #[error("❌ Network error: {0}")]
    Network(String),
    #[error("❌ Invalid response format from API")]
    InvalidResponse,
    #[error("❌ Unexpected error: {0}")]
    Unexpected(String),
    #[error("Oi! Say somethin', will ya?")]
    EmptyInput,
    #[error("{0} environment variable not found. Set your API key: export {0}='your-key-here'")]
    MissingCredential(String),
}
