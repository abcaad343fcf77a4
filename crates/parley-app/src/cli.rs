use std::path::PathBuf;

use clap::Parser;
use parley_config::ParleyConfig;

/// Parley: chat with a persona-driven language model from your terminal.
#[derive(Parser, Debug)]
#[command(name = "parley", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error) or a full filter directive.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Model identifier override.
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Number of user/assistant exchanges kept as context.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub max_history: Option<u32>,
}

impl Args {
    /// Copy the command-line overrides into a loaded config.
    pub fn apply_overrides(&self, config: &mut ParleyConfig) {
        if let Some(model) = &self.model {
            config.api.model = model.clone();
        }
        if let Some(max_history) = self.max_history {
            config.session.max_history = max_history;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
