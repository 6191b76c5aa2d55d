//! Structural validation of log rows.

use crate::errors::AppResult;
use crate::models::{InvalidRecord, ValidationResult};
use crate::table::LogTable;

/// Split the table into valid rows and rows missing a required field.
///
/// The header is checked first: a table lacking a required column fails
/// with `AppError::Schema` whatever its rows contain. Each row is then
/// tested once; both partitions keep input order and valid rows are
/// passed through untouched.
pub fn validate(table: &LogTable) -> AppResult<ValidationResult> {
    table.ensure_schema()?;

    let mut result = ValidationResult {
        headers: table.headers.clone(),
        ..Default::default()
    };

    for record in &table.rows {
        let missing = record.missing_fields();
        if missing.is_empty() {
            result.valid.push(record.clone());
        } else {
            result.invalid.push(InvalidRecord {
                record: record.clone(),
                missing,
            });
        }
    }

    Ok(result)
}
