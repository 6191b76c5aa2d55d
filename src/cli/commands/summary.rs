use crate::cli::commands::{print_table, warn_unparsable, write_output};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pipeline::{load_table, run_pipeline};
use crate::core::summarizer::summarize_table;
use crate::errors::AppResult;
use crate::export::summary_table;
use crate::export::model::SUMMARY_HEADERS;
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;

/// Handle the `summary` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary {
        input,
        out,
        no_validate,
        format,
        force,
    } = cmd
    {
        let path = expand_tilde(input);
        let rules = cfg.pairing_rules()?;

        let summaries = if *no_validate {
            info(format!("Summarizing {} without validation…", path.display()));
            let table = load_table(&path, cfg)?;
            warn_unparsable(&table.rows);
            summarize_table(&table, &rules)?
        } else {
            info(format!("Summarizing {}…", path.display()));
            let report = run_pipeline(&path, cfg)?;
            if !report.validation.invalid.is_empty() {
                warning(format!(
                    "{} row(s) with missing fields were left out (see `validate`).",
                    report.validation.invalid.len()
                ));
            }
            warn_unparsable(&report.validation.valid);
            report.summaries
        };

        if summaries.is_empty() {
            warning("No employee events found.");
        }

        let table = summary_table(&summaries, &rules);
        print_table("Employee Log Summary", &table, Some(SUMMARY_HEADERS.len() - 1));

        if let Some(file) = out {
            write_output(&table, "Summary", file, *format, *force)?;
        }
    }

    Ok(())
}
