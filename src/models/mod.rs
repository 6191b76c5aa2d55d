pub mod anomaly;
pub mod event_kind;
pub mod instant;
pub mod record;
pub mod required_field;
pub mod summary;

pub use anomaly::Anomaly;
pub use event_kind::EventKind;
pub use instant::Instant;
pub use record::{InvalidRecord, Record, ValidationResult};
pub use required_field::RequiredField;
pub use summary::EmployeeSummary;
