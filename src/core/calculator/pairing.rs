//! Check-in/check-out pairing state machine.
//!
//! Events of ONE employee are fed in chronological order. The machine keeps
//! a single piece of state (the open check-in, if any) and produces the
//! number of check-ins, the time present and the anomalies in the order they
//! were detected.

use crate::models::{Anomaly, EventKind, Instant};
use chrono::TimeDelta;

/// Labels and thresholds driving the pairing.
#[derive(Debug, Clone, PartialEq)]
pub struct PairingRules {
    pub check_in: String,
    pub check_out: String,
    /// Stays strictly shorter than this are flagged.
    pub short_stay: TimeDelta,
    /// Stays strictly longer than this are flagged.
    pub long_stay: TimeDelta,
}

impl Default for PairingRules {
    fn default() -> Self {
        Self {
            check_in: "Check-In".to_string(),
            check_out: "Check-Out".to_string(),
            short_stay: TimeDelta::minutes(30),
            long_stay: TimeDelta::hours(10),
        }
    }
}

impl PairingRules {
    pub fn classify(&self, raw: &str) -> EventKind {
        EventKind::classify(raw, &self.check_in, &self.check_out)
    }

    /// Stay-length anomalies for a completed session. Both bounds are
    /// checked independently and are exclusive: exactly `short_stay` or
    /// `long_stay` raises nothing.
    pub fn classify_stay(&self, stay: TimeDelta) -> Vec<Anomaly> {
        let mut found = Vec::new();
        if stay < self.short_stay {
            found.push(Anomaly::ShortStay);
        }
        if stay > self.long_stay {
            found.push(Anomaly::LongStay);
        }
        found
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Closed,
    Open(Instant),
}

/// Totals accumulated over one employee's stream.
#[derive(Debug, Clone, PartialEq)]
pub struct Tally {
    pub total_check_ins: u32,
    pub present: TimeDelta,
    pub anomalies: Vec<Anomaly>,
}

impl Default for Tally {
    fn default() -> Self {
        Self {
            total_check_ins: 0,
            present: TimeDelta::zero(),
            anomalies: Vec::new(),
        }
    }
}

pub struct Pairing<'r> {
    rules: &'r PairingRules,
    state: SessionState,
    tally: Tally,
}

impl<'r> Pairing<'r> {
    pub fn new(rules: &'r PairingRules) -> Self {
        Self {
            rules,
            state: SessionState::Closed,
            tally: Tally::default(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Apply one event.
    pub fn feed(&mut self, kind: &EventKind, at: Instant) {
        self.state = match (self.state, kind) {
            (SessionState::Open(_), EventKind::CheckIn) => {
                // previous session is abandoned, never accrued
                self.tally.anomalies.push(Anomaly::MultipleCheckInsWithoutCheckOut);
                self.tally.total_check_ins += 1;
                SessionState::Open(at)
            }
            (SessionState::Closed, EventKind::CheckIn) => {
                self.tally.total_check_ins += 1;
                SessionState::Open(at)
            }
            (SessionState::Closed, EventKind::CheckOut) => {
                self.tally.anomalies.push(Anomaly::CheckOutWithoutCheckIn);
                SessionState::Closed
            }
            (SessionState::Open(since), EventKind::CheckOut) => {
                // an unparsable end of the session leaves its length unknown
                if let Some(stay) = since.elapsed_until(&at) {
                    self.tally.anomalies.extend(self.rules.classify_stay(stay));
                    self.tally.present = self.tally.present + stay;
                }
                SessionState::Closed
            }
            (state, EventKind::Other(_)) => state,
        };
    }

    /// Close the stream, flagging a check-in that was never closed.
    pub fn finish(mut self) -> Tally {
        if let SessionState::Open(_) = self.state {
            self.tally.anomalies.push(Anomaly::DanglingCheckIn);
        }
        self.tally
    }
}

/// Run the machine over an already ordered stream.
pub fn pair_events<'a, I>(events: I, rules: &PairingRules) -> Tally
where
    I: IntoIterator<Item = (&'a EventKind, Instant)>,
{
    let mut pairing = Pairing::new(rules);
    for (kind, at) in events {
        pairing.feed(kind, at);
    }
    pairing.finish()
}
