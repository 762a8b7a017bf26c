use crate::config::Config;
use crate::logging::{init_logging, LogConfig};
use crate::pipeline::run_once;
use crate::watch::watch_project;
use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

/// Command-line interface for routegen
///
/// Generates typed path builders and params extractors for the project in the
/// current directory.
#[derive(Debug, Parser)]
#[command(name = "routegen", version)]
#[command(about = "Generate typed route helpers from your route tree", long_about = None)]
pub struct Cli {
    /// Keep running and regenerate whenever routes or routegen.toml change
    #[arg(short, long, default_value_t = false)]
    pub watch: bool,
}

/// Parse the process arguments and run.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration file cannot be read or parsed
/// - The one-shot pass fails (route tree, output location, or file writes)
/// - The watcher cannot be set up
pub fn run_cli() -> anyhow::Result<()> {
    run(Cli::parse())
}

/// Run with already parsed arguments.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    init_logging(&LogConfig::from_env())?;

    let root = std::env::current_dir().context("Failed to determine project root")?;
    let config = Config::load(&root)?;

    if !cli.watch {
        run_once(&root, &config)?;
        return Ok(());
    }

    if let Err(e) = run_once(&root, &config) {
        error!("generation failed: {e:#}");
    }
    let _watcher = watch_project(&root, &config).context("Failed to start watcher")?;
    info!("watching for route changes, press Ctrl-C to stop");
    loop {
        std::thread::park();
    }
}
