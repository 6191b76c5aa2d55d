use serde::Serialize;

/// The three columns every log row must carry.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum RequiredField {
    EmployeeName,
    Event,
    Timestamp,
}

impl RequiredField {
    /// Fixed order used for schema checks and for the `Missing Field` column.
    pub const ALL: [RequiredField; 3] = [
        RequiredField::EmployeeName,
        RequiredField::Event,
        RequiredField::Timestamp,
    ];

    /// Header name of the column in the input file.
    pub fn column(&self) -> &'static str {
        match self {
            RequiredField::EmployeeName => "Employee Name",
            RequiredField::Event => "Event",
            RequiredField::Timestamp => "Timestamp",
        }
    }
}
