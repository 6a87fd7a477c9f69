//! mathutil — Fibonacci prefixes, GCDs and quadratic roots on the console.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use mathutil_lib::{app, config, errors, version};

fn main() -> ExitCode {
    let config = config::AppConfig::parse();

    // Logs go to stderr so stdout carries only prompts and results.
    // RUST_LOG, when set, takes precedence over the default level.
    let default_level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(default_level.into()));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
    tracing::debug!(version = %version::full_version(), "starting");

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            mathutil_cli::ui::print_error(&format!("{err:#}"));
            errors::exit_code(&err)
        }
    }
}
