//! Per-employee attendance summary.

use crate::core::calculator::pairing::{PairingRules, pair_events};
use crate::errors::AppResult;
use crate::models::{EmployeeSummary, EventKind, Instant, Record};
use crate::table::LogTable;
use crate::utils::time::{hours, parse_instant};
use std::collections::BTreeMap;

/// Parsed instant of a record; an absent timestamp is unparsable.
pub fn record_instant(record: &Record) -> Instant {
    record
        .timestamp
        .as_deref()
        .map_or(Instant::Unparsable, parse_instant)
}

/// Records whose timestamp could not be parsed (these pair last).
pub fn unparsable_records(records: &[Record]) -> Vec<&Record> {
    records
        .iter()
        .filter(|r| !record_instant(r).is_valid())
        .collect()
}

/// Summarize attendance, one entry per employee in ascending name order.
///
/// Each employee's events are stable-sorted by instant (equal timestamps
/// keep input order, unparsable ones go last) and fed to the pairing
/// machine. Rows without an employee name cannot be attributed and are
/// skipped; rows without an event do nothing.
pub fn summarize(records: &[Record], rules: &PairingRules) -> Vec<EmployeeSummary> {
    let mut groups: BTreeMap<&str, Vec<(Instant, Option<EventKind>)>> = BTreeMap::new();

    for record in records {
        let Some(name) = record.employee_name.as_deref() else {
            continue;
        };
        let kind = record.event.as_deref().map(|e| rules.classify(e));
        groups
            .entry(name)
            .or_default()
            .push((record_instant(record), kind));
    }

    groups
        .into_iter()
        .map(|(name, mut events)| {
            events.sort_by_key(|(at, _)| *at);
            let stream = events
                .iter()
                .filter_map(|(at, kind)| kind.as_ref().map(|k| (k, *at)));
            let tally = pair_events(stream, rules);

            EmployeeSummary {
                employee_name: name.to_string(),
                total_check_ins: tally.total_check_ins,
                cumulative_hours: hours(tally.present),
                anomalies: tally.anomalies,
            }
        })
        .collect()
}

/// Summarize a raw table without validating it first.
/// The schema check still applies.
pub fn summarize_table(table: &LogTable, rules: &PairingRules) -> AppResult<Vec<EmployeeSummary>> {
    table.ensure_schema()?;
    Ok(summarize(&table.rows, rules))
}
