//! fragstat - kill statistics from arena-shooter server logs.
//!
//! Usage: fragstat [--config <PATH>] [--compact] <LOG_FILE> [basic|multi|ranking|all]
//!
//! Results go to stdout. Diagnostics go to stderr, or to FRAGSTAT_LOG_PATH if set.

mod output;

use std::path::PathBuf;

use clap::Parser;
use fragstat_core::{DiagnosticLogger, ParsingSession, load_config, resolve_log_path};
use fragstat_types::{AppConfig, OutputFormat};
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Per-match kill statistics from a game server log")]
struct Cli {
    /// Server log to parse (relative paths start at the configured log directory)
    log_file: PathBuf,

    /// basic, multi, ranking or all (default from config, else basic)
    format: Option<OutputFormat>,

    /// Use this config file instead of the one in the user config directory
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,
}

/// Initialize logging, writing to FRAGSTAT_LOG_PATH if set, otherwise stderr.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    if let Ok(path) = std::env::var("FRAGSTAT_LOG_PATH") {
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .init();
            return;
        }
    }

    // Fallback to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load config, using defaults");
            AppConfig::default()
        }
    };

    let format = cli.format.unwrap_or(config.default_format);
    let pretty = config.pretty_json && !cli.compact;
    let path = resolve_log_path(&config, &cli.log_file);

    tracing::info!(path = %path.display(), %format, "Parsing log file");

    let mut session = ParsingSession::new();
    session.add_signal_handler(Box::new(DiagnosticLogger));

    let timer = std::time::Instant::now();
    let stats = match session.parse_file(&path) {
        Ok(stats) => stats,
        Err(e) => {
            tracing::error!(error = %e, "Error parsing file");
            std::process::exit(1);
        }
    };

    tracing::info!(
        matches = session.matches().len(),
        lines = stats.lines_read,
        rejected = stats.lines_rejected,
        elapsed_ms = timer.elapsed().as_millis() as u64,
        "Successfully parsed {} matches",
        session.matches().len()
    );

    match output::render(&session, format, pretty) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize output");
            std::process::exit(1);
        }
    }
}
