mod cli;
mod dotenv;
mod repl;

use std::process::ExitCode;
use std::time::Duration;

use parley_ai::{CompletionConfig, CompletionsClient, Session};
use parley_common::ParleyError;
use parley_config::schema::LogLevel;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

fn init_logging(override_directive: Option<&str>, level: LogLevel) {
    let fallback = format!("parley={}", level.as_str());
    let directive = match override_directive {
        Some(d) if !d.contains('=') => format!("parley={d}"),
        Some(d) => d.to_string(),
        None => fallback.clone(),
    };
    let directive: Directive = directive
        .parse()
        .or_else(|_| fallback.parse())
        .unwrap_or_else(|_| LevelFilter::WARN.into());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv::load_dotenv();

    let args = cli::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("❌ Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: cli::Args) -> parley_common::Result<()> {
    let config =
        parley_config::load_config_with(args.config.as_deref(), |c| args.apply_overrides(c))?;

    init_logging(args.log_level.as_deref(), config.logging.level);
    tracing::info!("Parley v{} starting...", env!("CARGO_PKG_VERSION"));

    let api = &config.api;
    let completion_config = CompletionConfig::from_env(&api.api_key_env)
        .map_err(|e| ParleyError::Other(e.to_string()))?
        .with_endpoint(api.endpoint.as_str())
        .with_model(api.model.as_str())
        .with_max_tokens(api.max_tokens)
        .with_temperature(api.temperature)
        .with_top_p(api.top_p)
        .with_timeout(Duration::from_secs(u64::from(api.timeout_secs)));
    tracing::debug!(config = ?completion_config, "completion client configured");

    let client =
        CompletionsClient::new(completion_config).map_err(|e| ParleyError::Ai(e.to_string()))?;

    let session = Session::new(
        config.session.persona.as_str(),
        config.session.max_history as usize,
    );
    let mut repl = repl::Repl::new(session, &client, &config.session);

    repl.run()
        .await
        .map_err(|e| ParleyError::Other(format!("terminal error: {e}")))
}
