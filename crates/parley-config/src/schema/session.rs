//! Conversation session configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PERSONA: &str = "You are Shrek, the friendly ogre from the swamp. \
You speak with a Scottish accent and have a grumpy but lovable personality. \
You're protective of your swamp and love your family. \
Keep responses conversational, humorous, and in character as Shrek.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// Number of user/assistant exchanges kept in history (valid range: 1-1000).
    pub max_history: u32,
    /// System instruction sent as the first message of every request.
    pub persona: String,
    /// Name shown in front of replies.
    pub assistant_name: String,
    /// Prefix of generated transcript filenames.
    pub transcript_prefix: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_history: 10,
            persona: DEFAULT_PERSONA.into(),
            assistant_name: "Shrek".into(),
            transcript_prefix: "parley".into(),
        }
    }
}
