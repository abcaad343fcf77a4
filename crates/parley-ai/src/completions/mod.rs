//! Client for OpenAI-style chat-completion endpoints.
//!
//! Sends `{model, messages, max_tokens, temperature, top_p, stream: false}`
//! with a bearer token and reads `choices[0].message.content` back. The
//! defaults target the Mistral API.

mod api;
mod client;
mod config;

#[cfg(test)]
mod tests;

pub use client::CompletionsClient;
pub use config::CompletionConfig;
