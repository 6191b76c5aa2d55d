use super::anomaly::Anomaly;
use crate::core::calculator::pairing::PairingRules;
use serde::Serialize;

/// Attendance summary of one employee. Built once by the summarizer.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EmployeeSummary {
    pub employee_name: String,
    pub total_check_ins: u32,
    pub cumulative_hours: f64,
    pub anomalies: Vec<Anomaly>,
}

impl EmployeeSummary {
    /// Comma-joined anomaly labels, or `"None"`.
    pub fn errors_label(&self, rules: &PairingRules) -> String {
        if self.anomalies.is_empty() {
            return "None".to_string();
        }

        self.anomalies
            .iter()
            .map(|a| a.label(rules))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
