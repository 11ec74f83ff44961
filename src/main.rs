//! checkupdate CLI entry point.

use std::process::ExitCode;

use checkupdate::cli::{Cli, CommandDispatcher};
use checkupdate::ui::{create_ui, OutputMode};
use checkupdate::CheckerConfig;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag or `UPDATE_DEBUG` (via [`CheckerConfig::debug`]) sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(config: &CheckerConfig) {
    let filter = match config.log_directive() {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("checkupdate=warn")),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Warnings raised while reading the environment go to a temporary
    // subscriber; the real one depends on the config being read.
    let env_config = tracing::subscriber::with_default(
        tracing_subscriber::fmt()
            .with_target(false)
            .with_max_level(tracing::Level::WARN)
            .finish(),
        CheckerConfig::from_env,
    );
    let config = cli.apply_to(env_config);
    init_tracing(&config);
    tracing::debug!("checkupdate starting with {:?}", config);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(OutputMode::from_quiet(cli.quiet));
    let dispatcher = CommandDispatcher::new(config);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
