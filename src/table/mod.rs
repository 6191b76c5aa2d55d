//! In-memory representation of the event log.

pub mod reader;

pub use reader::{ReadOptions, read_log, read_log_from};

use crate::errors::{AppError, AppResult};
use crate::models::{Record, RequiredField};

/// The whole log, loaded before any processing.
#[derive(Debug, Clone, Default)]
pub struct LogTable {
    pub headers: Vec<String>,
    pub rows: Vec<Record>,
}

impl LogTable {
    pub fn new(headers: Vec<String>, rows: Vec<Record>) -> Self {
        Self { headers, rows }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Required columns absent from the header, in fixed order.
    pub fn missing_columns(&self) -> Vec<RequiredField> {
        RequiredField::ALL
            .into_iter()
            .filter(|f| self.column_index(f.column()).is_none())
            .collect()
    }

    /// Fail with a schema error when any required column is missing.
    /// Looks at the header only, never at the rows.
    pub fn ensure_schema(&self) -> AppResult<()> {
        let missing = self.missing_columns();
        if missing.is_empty() {
            return Ok(());
        }

        Err(AppError::Schema(
            missing
                .iter()
                .map(|f| f.column())
                .collect::<Vec<_>>()
                .join(", "),
        ))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
