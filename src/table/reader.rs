//! CSV → LogTable.

use super::LogTable;
use crate::errors::{AppError, AppResult};
use crate::models::{Record, RequiredField};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Markers treated as a missing value, matching the usual dataframe defaults.
pub const DEFAULT_NA_VALUES: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[derive(Debug, Clone)]
pub struct ReadOptions {
    pub delimiter: u8,
    pub na_values: Vec<String>,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            na_values: DEFAULT_NA_VALUES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ReadOptions {
    /// Empty, blank and NA-marker cells are absent.
    fn normalize(&self, raw: &str) -> Option<String> {
        if raw.trim().is_empty() || self.na_values.iter().any(|na| na == raw) {
            None
        } else {
            Some(raw.to_string())
        }
    }
}

/// Read the log file at `path`.
pub fn read_log(path: &Path, opts: &ReadOptions) -> AppResult<LogTable> {
    let file = File::open(path)?;
    read_log_from(file, opts)
}

/// Read a log from any reader. Fails with `MalformedInput` when the data
/// is not a CSV table with a header row, or a row has more cells than the
/// header. Short rows are padded with absent cells.
pub fn read_log_from<R: Read>(input: R, opts: &ReadOptions) -> AppResult<LogTable> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(opts.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let headers: Vec<String> = rdr
        .headers()
        .map_err(malformed)?
        .iter()
        .map(str::to_string)
        .collect();

    if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
        return Err(AppError::MalformedInput(
            "no columns to parse from input".to_string(),
        ));
    }

    let index_of = |field: RequiredField| headers.iter().position(|h| h == field.column());
    let name_idx = index_of(RequiredField::EmployeeName);
    let event_idx = index_of(RequiredField::Event);
    let ts_idx = index_of(RequiredField::Timestamp);

    let mut rows = Vec::new();
    let mut raw = StringRecord::new();

    while rdr.read_record(&mut raw).map_err(malformed)? {
        let line = raw.position().map(|p| p.line()).unwrap_or(0);
        if raw.len() > headers.len() {
            return Err(AppError::MalformedInput(format!(
                "expected {} fields in line {line}, saw {}",
                headers.len(),
                raw.len()
            )));
        }

        let mut cells: Vec<Option<String>> = raw.iter().map(|c| opts.normalize(c)).collect();
        cells.resize(headers.len(), None);
        let pick = |idx: Option<usize>| idx.and_then(|i| cells.get(i).cloned().flatten());

        rows.push(Record {
            line,
            employee_name: pick(name_idx),
            event: pick(event_idx),
            timestamp: pick(ts_idx),
            cells,
        });
    }

    Ok(LogTable::new(headers, rows))
}

fn malformed(e: csv::Error) -> AppError {
    AppError::MalformedInput(e.to_string())
}
