use crate::cli::commands::{print_table, report_validation, warn_unparsable, write_output};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pipeline::run_pipeline;
use crate::errors::AppResult;
use crate::export::model::SUMMARY_HEADERS;
use crate::export::{invalid_table, summary_table, valid_table};
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;

/// Handle the `run` command: the whole validate → summarize pipeline.
///
/// Writes:
///  - the invalid rows report (always, possibly header-only)
///  - the summary
///  - the valid rows, when asked
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Run {
        input,
        invalid_out,
        summary_out,
        valid_out,
        format,
        force,
    } = cmd
    {
        let path = expand_tilde(input);

        // 1️⃣ validation
        info(format!("Validating the log file {}…", path.display()));
        let report = run_pipeline(&path, cfg)?;
        report_validation(&report.validation);

        let invalid_file = invalid_out.as_deref().unwrap_or(cfg.invalid_report.as_str());
        write_output(
            &invalid_table(&report.validation),
            "Invalid rows",
            invalid_file,
            *format,
            *force,
        )?;

        if let Some(file) = valid_out {
            write_output(
                &valid_table(&report.validation),
                "Valid rows",
                file,
                *format,
                *force,
            )?;
        }

        // 2️⃣ summary
        info("Generating the summary for valid rows…");
        warn_unparsable(&report.validation.valid);

        let table = summary_table(&report.summaries, &cfg.pairing_rules()?);
        print_table("Employee Log Summary", &table, Some(SUMMARY_HEADERS.len() - 1));

        let summary_file = summary_out.as_deref().unwrap_or(cfg.summary_file.as_str());
        write_output(&table, "Summary", summary_file, *format, *force)?;

        success(format!(
            "Processed {} rows for {} employee(s).",
            report.validation.total(),
            report.summaries.len()
        ));
    }

    Ok(())
}
