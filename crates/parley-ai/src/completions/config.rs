//! Completion client configuration.

use std::fmt;
use std::time::Duration;

use parley_common::defaults::{
    DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT_SECS,
    DEFAULT_TOP_P,
};

use crate::AiError;

/// Completion client configuration.
#[derive(Clone)]
pub struct CompletionConfig {
    pub token: String,
    pub endpoint: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub timeout: Duration,
}

impl fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("token", &"[REDACTED]")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("top_p", &self.top_p)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl CompletionConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            timeout: Duration::from_secs(u64::from(DEFAULT_TIMEOUT_SECS)),
        }
    }

    /// Read the bearer token from the named environment variable.
    ///
    /// A missing, non-unicode, or blank value is an error; there is no
    /// fallback token.
    pub fn from_env(var: &str) -> Result<Self, AiError> {
        let token = std::env::var(var).unwrap_or_default();
        Self::from_token(var, &token)
    }

    pub(crate) fn from_token(var: &str, token: &str) -> Result<Self, AiError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(AiError::MissingCredential(var.to_string()));
        }
        Ok(Self::new(token))
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = top_p;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
