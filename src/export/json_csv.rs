// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::OutputTable;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed: one object per row, keys in header order.
pub(crate) fn export_json(table: &OutputTable, label: &str, path: &Path) -> AppResult<()> {
    info(format!("Writing {label} to JSON: {}", path.display()));

    let rows: Vec<Value> = table
        .rows
        .iter()
        .map(|row| {
            let obj: Map<String, Value> = table
                .headers
                .iter()
                .cloned()
                .zip(row.iter().map(|c| c.to_json()))
                .collect();
            Value::Object(obj)
        })
        .collect();

    let json_data = serde_json::to_string_pretty(&rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success(label, path);
    Ok(())
}

/// Export CSV, header row included even for an empty table.
pub(crate) fn export_csv(table: &OutputTable, label: &str, path: &Path) -> AppResult<()> {
    info(format!("Writing {label} to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(&table.headers)
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for row in table.string_rows() {
        wtr.write_record(&row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success(label, path);
    Ok(())
}
