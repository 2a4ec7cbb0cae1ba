//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use tiercheck_core::config::{Config, paths};
use tiercheck_core::logging;
use tiercheck_core::session::SessionStore;

mod commands;

#[derive(Parser)]
#[command(name = "tiercheck")]
#[command(version)]
#[command(about = "Terminal client for a tiered-access demo API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the backend base URL from config
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let mut config = Config::load().context("load config")?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    // default to the interactive client
    let Some(command) = cli.command else {
        let _log_guard = logging::init().context("init logging")?;
        let session = SessionStore::restore(paths::session_path());
        return tiercheck_tui::run_interactive(&config, session).await;
    };

    match command {
        Commands::Config { command } => match command {
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
