//! # crosswalk CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crosswalk_cli::analyze::{run_analyze, AnalyzeArgs};
use crosswalk_cli::config::CliConfig;
use crosswalk_cli::suggest::{run_suggest, SuggestArgs};

/// Crosswalk: cross-standard integration analysis.
///
/// Deduplicates requirements shared across management-system standards,
/// scores readiness over the deduplicated set, and flags gaps that reach
/// into other standards.
#[derive(Parser, Debug)]
#[command(name = "crosswalk", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Dataset directory. Overrides `CROSSWALK_DATA_DIR`.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze duplication, readiness, and gap cascades across standards.
    Analyze(AnalyzeArgs),

    /// Suggest additional classifications for a document.
    Suggest(SuggestArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flag when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "crosswalk CLI starting");

    let config = CliConfig::from_env().with_data_dir(cli.data_dir);

    tracing::debug!(data_dir = %config.data_dir.display(), "resolved dataset directory");

    let result = match &cli.command {
        Commands::Analyze(args) => run_analyze(args, &config).await,
        Commands::Suggest(args) => run_suggest(args, &config).await,
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
