use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub enum EventKind {
    CheckIn,
    CheckOut,
    /// Any other event value: carried through pairing without effect.
    Other(String),
}

impl EventKind {
    /// Classify a raw event value against the configured labels.
    /// Matching is exact, like the values written by the badge terminals.
    pub fn classify(raw: &str, check_in: &str, check_out: &str) -> Self {
        if raw == check_in {
            EventKind::CheckIn
        } else if raw == check_out {
            EventKind::CheckOut
        } else {
            EventKind::Other(raw.to_string())
        }
    }
}
