//! rattendance library root.
//! Exposes the CLI parser, the high-level run() function and the
//! validation / summarization modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod table;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Validate { .. } => cli::commands::validate::handle(&cli.command, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Run { .. } => cli::commands::run::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    ui::messages::set_quiet(cli.quiet);

    // 2️⃣ load config once (--config overrides the standard location)
    let config_path = match &cli.config {
        Some(custom) => utils::path::expand_tilde(custom),
        None => Config::config_file(),
    };
    let cfg = Config::load_from(&config_path)?;

    // 3️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &config_path)
}
