use crate::cli::commands::{report_validation, write_output};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pipeline::validate_file;
use crate::errors::AppResult;
use crate::export::{invalid_table, valid_table};
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;

/// Handle the `validate` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Validate {
        input,
        invalid_out,
        valid_out,
        format,
        force,
    } = cmd
    {
        let path = expand_tilde(input);
        info(format!("Validating {}…", path.display()));

        let result = validate_file(&path, cfg)?;
        report_validation(&result);

        if let Some(out) = invalid_out {
            write_output(&invalid_table(&result), "Invalid rows", out, *format, *force)?;
        }

        if let Some(out) = valid_out {
            write_output(&valid_table(&result), "Valid rows", out, *format, *force)?;
        }
    }

    Ok(())
}
