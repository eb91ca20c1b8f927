//! CLI entry and dispatch.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use mealdeck_core::session::{SecretFile, SessionStore};
use mealdeck_core::{config, logging};

mod commands;

#[derive(Parser)]
#[command(name = "mealdeck")]
#[command(version)]
#[command(about = "Terminal meal-planning client")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Inspect or clear the stored session
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

#[derive(clap::Subcommand)]
enum AuthCommands {
    /// Show whether a session token is stored (masked)
    Status,
    /// Clear the stored session token
    Logout,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = config::Config::load().context("load config")?;

    // Default to the interactive client; subcommands are plain sync I/O
    // and don't need a runtime or a log file.
    let Some(command) = cli.command else {
        let _log_guard = logging::init(&config).context("init logging")?;
        tracing::info!("starting interactive client");

        let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
        return rt.block_on(async move {
            let store = SessionStore::new(Arc::new(SecretFile::at_default_path()));
            mealdeck_tui::run(&config, store).await
        });
    };

    match command {
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },

        Commands::Auth { command } => match command {
            AuthCommands::Status => commands::auth::status(),
            AuthCommands::Logout => commands::auth::logout(),
        },
    }
}
