//! Formatting utilities used for CLI and export outputs.

/// Threshold wording for anomaly labels: `30` → "30 minutes", `600` → "10 hours".
pub fn describe_minutes(mins: i64) -> String {
    if mins >= 60 && mins % 60 == 0 {
        let h = mins / 60;
        if h == 1 {
            "1 hour".to_string()
        } else {
            format!("{h} hours")
        }
    } else if mins == 1 {
        "1 minute".to_string()
    } else {
        format!("{mins} minutes")
    }
}

/// Decimal places kept for hours in every output.
pub const HOURS_DECIMALS: usize = 4;

/// Value written to the `Cumulative Time (hours)` column.
pub fn format_hours(hours: f64) -> String {
    let s = format!("{hours:.prec$}", prec = HOURS_DECIMALS);
    let s = s.trim_end_matches('0');
    if s.ends_with('.') {
        format!("{s}0")
    } else {
        s.to_string()
    }
}

/// Spreadsheet number format matching `format_hours` precision.
pub fn hours_num_format() -> String {
    format!("0.{}", "0".repeat(HOURS_DECIMALS))
}
