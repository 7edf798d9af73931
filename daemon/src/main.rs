//! dgbridge - feeds game server death events into the drinking game plugin.
//!
//! Tails the server console log for `drinkinggame_output: ` lines, scores
//! deaths of players wearing a drinking tag, and appends commands to the file
//! the server plugin reads.
//!
//! Usage: dgbridge [--config <file>] [--console-log <file>] [--command-file <file>]
//!                 [--wire-format tell_player|player_drinks]

use clap::Parser;
use dgbridge_core::config::BridgeConfigExt;
use dgbridge_core::{
    BridgeError, CommandFileNotifier, Dispatcher, EventKind, PlayerDeathHandler, RuleSet,
    tail_console_log,
};
use dgbridge_types::{BridgeConfig, WireFormat};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::watch;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Drinking game bridge for the game server console")]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Console log to tail (overrides config)
    #[arg(long)]
    console_log: Option<String>,

    /// Command file to append to (overrides config)
    #[arg(long)]
    command_file: Option<String>,

    /// Outbound command format (overrides config)
    #[arg(long)]
    wire_format: Option<WireFormat>,
}

/// Initialize logging, writing to DGBRIDGE_LOG_PATH if set, otherwise stderr.
/// The returned guard must stay alive so buffered file output gets flushed.
fn init_logging() -> Option<WorkerGuard> {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    // If DGBRIDGE_LOG_PATH is set and can be opened, append to that file
    if let Some(file) = std::env::var("DGBRIDGE_LOG_PATH")
        .ok()
        .and_then(|path| open_log_file(Path::new(&path)))
    {
        let (writer, guard) = tracing_appender::non_blocking(file);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
            .init();
        return Some(guard);
    }

    // Fallback to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
    None
}

fn open_log_file(path: &Path) -> Option<File> {
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("Cannot open log file {}: {e}, logging to stderr", path.display());
            None
        }
    }
}

/// File config with command line overrides applied.
fn resolve_config(cli: &Cli) -> Result<BridgeConfig, BridgeError> {
    if cli.config.is_none() {
        let path = BridgeConfig::default_path()?;
        tracing::info!(path = %path.display(), "Using default config file");
    }
    let mut config = BridgeConfig::load(cli.config.as_deref())?;

    if let Some(path) = &cli.console_log {
        config.console_log_path = path.clone();
    }
    if let Some(path) = &cli.command_file {
        config.command_path = path.clone();
    }
    if let Some(format) = cli.wire_format {
        config.wire_format = format;
    }

    config.validate()?;
    Ok(config)
}

fn build_dispatcher(config: &BridgeConfig) -> Dispatcher {
    let notifier = Arc::new(CommandFileNotifier::new(
        &config.command_path,
        config.wire_format,
    ));

    let rules = RuleSet::canonical();
    tracing::debug!(count = rules.len(), "Registered drinking rules");

    let mut dispatcher = Dispatcher::new();
    dispatcher.register(
        EventKind::PlayerDeath,
        PlayerDeathHandler::new(rules, notifier),
    );
    dispatcher
}

/// Wait for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        let mut sigterm =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("failed to register SIGTERM handler");
        tokio::select! {
            _ = ctrl_c => {},
            _ = sigterm.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        ctrl_c.await.expect("failed to listen for ctrl_c");
    }
}

async fn run(cli: Cli) -> Result<(), BridgeError> {
    let config = resolve_config(&cli)?;
    tracing::info!(
        console_log = %config.console_log_path,
        command_file = %config.command_path,
        wire_format = %config.wire_format,
        "Starting dgbridge"
    );

    let dispatcher = build_dispatcher(&config);

    let (stop_tx, stop_rx) = watch::channel(false);
    tokio::spawn(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown requested");
        stop_tx.send(true).ok();
    });

    tail_console_log(&config.console_log_path, &dispatcher, stop_rx).await
}

#[tokio::main]
async fn main() {
    let guard = init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, "dgbridge terminated");
        drop(guard);
        std::process::exit(1);
    }

    tracing::info!("dgbridge exited cleanly");
}
