//! rFlightWatch library root.
//! Exposes the CLI parser, the high-level run() function, and the monitor,
//! store and report modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod net;
pub mod report;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Check { .. } => cli::commands::check::handle(&cli.command, cfg),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::State => cli::commands::state::handle(cfg),
        Commands::Errors { .. } => cli::commands::errors::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ `init` writes the config file, it must not require one
    if matches!(cli.command, Commands::Init { .. }) {
        return cli::commands::init::handle(&cli);
    }

    // 3️⃣ load config once
    let mut cfg = Config::load(cli.config.as_deref())?;

    // 4️⃣ command-line override of the data directory
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = Some(dir.clone());
    }

    dispatch(&cli, &cfg)
}
