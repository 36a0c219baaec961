use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "brew")]
#[command(about = "Brew - follow a barista conversation and track the order", long_about = None)]
struct Cli {
    /// Config file (defaults to ~/.config/brew/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the menu with prices
    Menu,
    /// Feed a JSON transcript through the synchronizer
    Replay {
        /// Transcript file: a JSON array of {origin, text}
        transcript: PathBuf,
        /// Re-run after every message, as the live UI does
        #[arg(long)]
        step: bool,
    },
    /// Validate a catalog TOML file
    Check {
        catalog: PathBuf,
    },
    /// Inspect or change the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective config
    Show,
    /// Use a custom catalog file, or the built-in menu when omitted
    SetCatalog { path: Option<PathBuf> },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.json_logs)?;

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Menu => commands::menu::run(config)?,
        Commands::Replay { transcript, step } => commands::replay::run(config, &transcript, step)?,
        Commands::Check { catalog } => commands::check::run(&catalog)?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(config)?,
            ConfigAction::SetCatalog { path } => commands::config::set_catalog(config, path)?,
        },
    }

    Ok(())
}
