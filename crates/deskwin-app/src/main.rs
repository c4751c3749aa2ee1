mod cli;
mod desktop;
mod render;
mod script;

use std::io::BufReader;
use std::path::Path;

use deskwin_common::DeskwinError;
use deskwin_config::{DeskwinConfig, LogLevel};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter};

use crate::desktop::Desktop;

fn load_config(path: Option<&str>) -> Result<DeskwinConfig, DeskwinError> {
    let config = match path {
        Some(path) => deskwin_config::load_config_from(Path::new(path))?,
        None => deskwin_config::load_config()?,
    };
    Ok(config)
}

/// `deskwin=<cli level>`, or the configured level when the CLI gives none
/// or gives one that does not parse.
fn log_directive(cli_level: Option<&str>, config_level: LogLevel) -> Option<Directive> {
    cli_level
        .and_then(|level| format!("deskwin={level}").parse().ok())
        .or_else(|| {
            format!("deskwin={}", config_level.as_directive())
                .parse()
                .ok()
        })
}

fn log_filter(cli_level: Option<&str>, config_level: LogLevel) -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    match log_directive(cli_level, config_level) {
        Some(directive) => filter.add_directive(directive),
        None => filter,
    }
}

fn run(args: cli::Args, config: DeskwinConfig) -> Result<(), DeskwinError> {
    let mut desktop = Desktop::from_config(&config)?;

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let mut out = stdout.lock();
    let mut errors = stderr.lock();

    match args.script {
        Some(ref script) => {
            tracing::info!("Reading commands from {script}");
            let file = std::fs::File::open(script)?;
            desktop.run(BufReader::new(file), &mut out, &mut errors)?;
        }
        None => desktop.run(std::io::stdin().lock(), &mut out, &mut errors)?,
    }

    tracing::info!(
        "{} windows open at exit",
        desktop.windows().stacking_order().len()
    );
    Ok(())
}

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Initialize logging; the configured level is applied once config is loaded
    let (filter, filter_handle) =
        reload::Layer::new(log_filter(args.log_level.as_deref(), LogLevel::default()));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Deskwin v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load config
    let config = load_config(args.config.as_deref()).unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        DeskwinConfig::default()
    });
    let filter = log_filter(args.log_level.as_deref(), config.logging.level);
    if let Err(e) = filter_handle.reload(filter) {
        tracing::warn!("Failed to apply configured log level: {e}");
    }
    if let Some(level) = args.log_level.as_deref() {
        if format!("deskwin={level}").parse::<Directive>().is_err() {
            tracing::warn!(
                "Invalid --log-level {level:?}, using configured level {}",
                config.logging.level.as_directive()
            );
        }
    }
    tracing::info!(
        "Config loaded ({} windows, floor {})",
        config.windows.identities.len(),
        config.windows.floor
    );

    if let Err(e) = run(args, config) {
        tracing::error!("Desktop error: {e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}
