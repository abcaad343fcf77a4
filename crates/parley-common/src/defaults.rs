//! Stock endpoint and sampling values shared by the config schema and the
//! completion client.

pub const DEFAULT_ENDPOINT: &str = "https://api.mistral.ai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "mistral-large-latest";
pub const DEFAULT_API_KEY_ENV: &str = "MISTRAL_API_KEY";

pub const DEFAULT_MAX_TOKENS: u32 = 1024;
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_TOP_P: f64 = 1.0;
pub const DEFAULT_TIMEOUT_SECS: u32 = 30;
