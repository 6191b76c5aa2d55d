// src/export/model.rs

use crate::core::calculator::pairing::PairingRules;
use crate::models::{EmployeeSummary, Record, ValidationResult};
use crate::utils::formatting::format_hours;
use serde_json::Value;
use std::fmt;

pub const MISSING_FIELD_COLUMN: &str = "Missing Field";

pub const SUMMARY_HEADERS: [&str; 4] = [
    "Employee Name",
    "Total Check-Ins",
    "Cumulative Time (hours)",
    "Errors",
];

/// A typed cell, so numbers stay numbers in JSON and XLSX.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
}

impl Cell {
    pub(crate) fn to_json(&self) -> Value {
        match self {
            Cell::Empty => Value::Null,
            Cell::Text(s) => Value::String(s.clone()),
            Cell::Int(n) => Value::from(*n),
            Cell::Float(f) => Value::from(*f),
        }
    }
}

impl From<Option<&String>> for Cell {
    fn from(v: Option<&String>) -> Self {
        v.map_or(Cell::Empty, |s| Cell::Text(s.clone()))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) => f.write_str(s),
            Cell::Int(n) => write!(f, "{n}"),
            Cell::Float(x) => f.write_str(&format_hours(*x)),
        }
    }
}

/// Output table shared by every writer (CSV / JSON / XLSX) and the console.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl OutputTable {
    /// Rows rendered as plain strings.
    pub fn string_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| r.iter().map(Cell::to_string).collect())
            .collect()
    }
}

fn record_cells(record: &Record, width: usize) -> Vec<Cell> {
    (0..width)
        .map(|i| Cell::from(record.cells.get(i).and_then(Option::as_ref)))
        .collect()
}

/// Valid rows, with the input schema.
pub fn valid_table(result: &ValidationResult) -> OutputTable {
    let width = result.headers.len();
    OutputTable {
        headers: result.headers.clone(),
        rows: result
            .valid
            .iter()
            .map(|r| record_cells(r, width))
            .collect(),
    }
}

/// Invalid rows, with the input schema plus `Missing Field`.
pub fn invalid_table(result: &ValidationResult) -> OutputTable {
    let width = result.headers.len();
    let mut headers = result.headers.clone();
    headers.push(MISSING_FIELD_COLUMN.to_string());

    let rows = result
        .invalid
        .iter()
        .map(|inv| {
            let mut cells = record_cells(&inv.record, width);
            cells.push(Cell::Text(inv.missing_label()));
            cells
        })
        .collect();

    OutputTable { headers, rows }
}

pub fn summary_table(summaries: &[EmployeeSummary], rules: &PairingRules) -> OutputTable {
    OutputTable {
        headers: SUMMARY_HEADERS.iter().map(|h| h.to_string()).collect(),
        rows: summaries
            .iter()
            .map(|s| {
                vec![
                    Cell::Text(s.employee_name.clone()),
                    Cell::Int(i64::from(s.total_check_ins)),
                    Cell::Float(s.cumulative_hours),
                    Cell::Text(s.errors_label(rules)),
                ]
            })
            .collect(),
    }
}
