// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod model;
mod xlsx;

pub use model::{Cell, OutputTable, invalid_table, summary_table, valid_table};

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Messaggio comune a fine scrittura di un file di output.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} written: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    /// Format implied by a file extension; no extension means CSV.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "" | "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "xlsx" => Ok(ExportFormat::Xlsx),
            other => Err(AppError::InvalidExportFormat(other.to_string())),
        }
    }
}

/// Write `table` to `path` in the given format.
pub fn write_table(
    table: &OutputTable,
    label: &str,
    path: &Path,
    format: ExportFormat,
    force: bool,
) -> AppResult<()> {
    fs_utils::ensure_writable(path, force)?;

    match format {
        ExportFormat::Csv => json_csv::export_csv(table, label, path),
        ExportFormat::Json => json_csv::export_json(table, label, path),
        ExportFormat::Xlsx => xlsx::export_xlsx(table, label, path),
    }
}
