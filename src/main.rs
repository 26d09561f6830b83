//! Reposcope terminal entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use bubbletea_rs::Program;
use crossterm::terminal;
use ortho_config::OrthoConfig;

use reposcope::tui::{ExplorerApp, set_explorer_context, set_initial_terminal_size};
use reposcope::{ExplorerConfig, ExplorerError, OctocrabExplorerGateway, init_logging};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ExplorerError> {
    let config = load_config()?;
    config.validate()?;
    let _log_guard = init_logging(&config)?;

    let settings = config.query_settings()?;
    let gateway = OctocrabExplorerGateway::from_settings(&config.gateway_settings()?)?;
    tracing::info!(
        api_base = %config.api_base,
        authenticated = config.resolve_token().is_some(),
        "starting explorer"
    );

    // Model::init() reads the gateway and settings from module-level storage.
    if !set_explorer_context(Arc::new(gateway), settings, config.initial_query()) {
        tracing::warn!("explorer context was already set; keeping the existing one");
    }
    if let Ok((width, height)) = terminal::size()
        && !set_initial_terminal_size(width, height)
    {
        tracing::warn!("initial terminal size was already set");
    }

    run_tui().await.map_err(|error| ExplorerError::Terminal {
        message: error.to_string(),
    })
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ExplorerError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<ExplorerConfig, ExplorerError> {
    ExplorerConfig::load().map_err(|error| ExplorerError::Configuration {
        message: error.to_string(),
    })
}

/// Runs the bubbletea-rs program with the `ExplorerApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<ExplorerApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}
