pub mod config;
pub mod run;
pub mod summary;
pub mod validate;

use crate::core::summarizer::unparsable_records;
use crate::errors::AppResult;
use crate::export::{self, ExportFormat, OutputTable};
use crate::models::{Record, ValidationResult};
use crate::ui::messages::{header, info, success, warning};
use crate::utils::path::expand_tilde;
use crate::utils::table::Table;
use ansi_term::Colour;

/// Print a table, coloring the cells of `status_col` when given:
/// `"None"` in green, anything else in red.
pub(crate) fn print_table(title: &str, table: &OutputTable, status_col: Option<usize>) {
    header(title);

    let headers: Vec<&str> = table.headers.iter().map(String::as_str).collect();
    let mut out = Table::with_headers(&headers);

    for row in table.string_rows() {
        let row = row
            .into_iter()
            .enumerate()
            .map(|(i, cell)| match status_col {
                Some(c) if c == i && cell == "None" => Colour::Green.paint(cell).to_string(),
                Some(c) if c == i => Colour::Red.paint(cell).to_string(),
                _ => cell,
            })
            .collect();
        out.add_row(row);
    }

    println!("{}", out.render());
}

/// Console report of a validation result.
pub(crate) fn report_validation(result: &ValidationResult) {
    if result.invalid.is_empty() {
        success(format!("All {} rows are valid.", result.valid.len()));
        return;
    }

    let table = export::invalid_table(result);
    print_table("Invalid rows", &table, table.headers.len().checked_sub(1));

    warning(format!(
        "{} of {} rows have missing fields and were set aside.",
        result.invalid.len(),
        result.total()
    ));
}

/// Warn about rows whose timestamp no known layout accepts.
pub(crate) fn warn_unparsable(records: &[Record]) {
    let bad = unparsable_records(records);
    if bad.is_empty() {
        return;
    }

    let lines: Vec<String> = bad.iter().map(|r| r.line.to_string()).collect();
    warning(format!(
        "{} timestamp(s) could not be parsed and are paired last (lines: {}).",
        bad.len(),
        lines.join(", ")
    ));
}

/// Resolve the output file and its format, then write it.
pub(crate) fn write_output(
    table: &OutputTable,
    label: &str,
    file: &str,
    format: Option<ExportFormat>,
    force: bool,
) -> AppResult<()> {
    let path = expand_tilde(file);
    let format = match format {
        Some(f) => f,
        None => ExportFormat::from_path(&path)?,
    };

    info(format!("Output format: {}", format.as_str()));
    export::write_table(table, label, &path, format, force)
}
