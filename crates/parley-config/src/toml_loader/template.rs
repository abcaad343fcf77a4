//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Parley Configuration
# Only override what you want to change -- missing fields use defaults.

[api]
# endpoint = "https://api.mistral.ai/v1/chat/completions"
# model = "mistral-large-latest"
# api_key_env = "MISTRAL_API_KEY"   # the token itself never goes in this file
# max_tokens = 1024                 # 1-32768
# temperature = 0.7                 # 0.0-2.0
# top_p = 1.0                       # 0.0-1.0
# timeout_secs = 30                 # 1-600

[session]
# max_history = 10                  # exchanges kept, 1-1000
# persona = "You are Shrek, the friendly ogre from the swamp. ..."
# assistant_name = "Shrek"
# transcript_prefix = "parley"

[logging]
# level = "warn"                    # trace, debug, info, warn, error
"##
}
