use super::required_field::RequiredField;
use serde::Serialize;

/// One row of the event log.
///
/// `cells` keeps the full row in header order so that output tables can be
/// written with the input schema. The three required values are lifted out
/// of it when the row is read; `None` means the value was absent (empty,
/// blank or an NA marker).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Record {
    pub line: u64,
    pub cells: Vec<Option<String>>,
    pub employee_name: Option<String>,
    pub event: Option<String>,
    pub timestamp: Option<String>,
}

impl Record {
    /// Build a record laid out as `Employee Name, Event, Timestamp`.
    pub fn new(
        line: u64,
        employee_name: Option<&str>,
        event: Option<&str>,
        timestamp: Option<&str>,
    ) -> Self {
        let employee_name = employee_name.map(str::to_string);
        let event = event.map(str::to_string);
        let timestamp = timestamp.map(str::to_string);

        Self {
            line,
            cells: vec![employee_name.clone(), event.clone(), timestamp.clone()],
            employee_name,
            event,
            timestamp,
        }
    }

    pub fn field(&self, field: RequiredField) -> Option<&str> {
        match field {
            RequiredField::EmployeeName => self.employee_name.as_deref(),
            RequiredField::Event => self.event.as_deref(),
            RequiredField::Timestamp => self.timestamp.as_deref(),
        }
    }

    /// Required fields that are absent, in the fixed column order.
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        RequiredField::ALL
            .into_iter()
            .filter(|f| self.field(*f).is_none())
            .collect()
    }
}

/// A structurally invalid row together with the fields it lacks.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InvalidRecord {
    pub record: Record,
    pub missing: Vec<RequiredField>,
}

impl InvalidRecord {
    /// Value of the `Missing Field` column, e.g. `"Event, Timestamp"`.
    pub fn missing_label(&self) -> String {
        self.missing
            .iter()
            .map(|f| f.column())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Outcome of validation: both partitions keep input order and share the
/// input header.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ValidationResult {
    pub headers: Vec<String>,
    pub valid: Vec<Record>,
    pub invalid: Vec<InvalidRecord>,
}

impl ValidationResult {
    pub fn total(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }
}
