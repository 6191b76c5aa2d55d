use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        force,
    } = cmd
    {
        // ---- INIT CONFIG ----
        if *init {
            if path.exists() && !*force {
                return Err(AppError::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }

            Config::default().save_to(path)?;
            success(format!("Config file: {}", path.display()));
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        if !*init && !*print_config {
            let state = if path.exists() { "" } else { " (not created, using defaults)" };
            info(format!("Config file: {}{}", path.display(), state));
        }
    }

    Ok(())
}
