use crate::core::calculator::pairing::PairingRules;
use crate::utils::formatting::describe_minutes;
use serde::Serialize;

/// Temporal anomaly detected while pairing an employee's events.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Anomaly {
    /// A check-in arrived while a previous one was still open.
    MultipleCheckInsWithoutCheckOut,
    /// A check-out arrived with no open check-in.
    CheckOutWithoutCheckIn,
    ShortStay,
    LongStay,
    /// The stream ended with a check-in still open.
    DanglingCheckIn,
}

impl Anomaly {
    /// Human-readable label used in the `Errors` column.
    pub fn label(&self, rules: &PairingRules) -> String {
        match self {
            Anomaly::MultipleCheckInsWithoutCheckOut => {
                "Multiple Check-Ins without Check-Out".to_string()
            }
            Anomaly::CheckOutWithoutCheckIn => "Check-Out without prior Check-In".to_string(),
            Anomaly::ShortStay => format!(
                "Stay shorter than {}",
                describe_minutes(rules.short_stay.num_minutes())
            ),
            Anomaly::LongStay => format!(
                "Stay longer than {}",
                describe_minutes(rules.long_stay.num_minutes())
            ),
            Anomaly::DanglingCheckIn => "Check-In without Check-Out".to_string(),
        }
    }
}
