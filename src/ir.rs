use serde::{Deserialize, Serialize};

/// Number of minute buckets in one modeled day (12 hours).
pub const DAY_MINUTES: i64 = 720;

/// Latest minute an event may start at.
pub const LATEST_START: i64 = 699;

/// A calendar event expressed in minutes from the start of the day.
///
/// `end` is exclusive: an event `{ start: 0, end: 60 }` occupies minutes
/// `0..=59` and does not touch minute 60.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub start: i64,
    pub end: i64,
}

impl Event {
    pub fn new(id: i64, start: i64, end: i64) -> Self {
        Self { id, start, end }
    }

    /// True when both events occupy at least one common minute.
    pub fn overlaps(&self, other: &Event) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_events_do_not_overlap() {
        let a = Event::new(1, 0, 60);
        let b = Event::new(2, 60, 120);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = Event::new(1, 540, 600);
        let b = Event::new(2, 560, 620);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }
}
