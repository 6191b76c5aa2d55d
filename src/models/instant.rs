use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

/// A point in time parsed from the `Timestamp` column.
///
/// Timestamps that no known format accepts become `Unparsable` instead of
/// failing the run. Variant order drives the derived `Ord`: every parsed
/// instant sorts before `Unparsable`, so unparsable events go last in an
/// employee's stream.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Instant {
    At(NaiveDateTime),
    Unparsable,
}

impl Instant {
    pub fn is_valid(&self) -> bool {
        matches!(self, Instant::At(_))
    }

    /// `later - self`, or `None` when either side is unparsable.
    pub fn elapsed_until(&self, later: &Instant) -> Option<TimeDelta> {
        match (self, later) {
            (Instant::At(a), Instant::At(b)) => Some(*b - *a),
            _ => None,
        }
    }
}
