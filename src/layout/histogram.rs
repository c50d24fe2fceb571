use crate::ir::{DAY_MINUTES, Event};

/// One bucket per minute of the day, each holding the ids of the events live
/// during that minute in input order.
#[derive(Debug, Clone)]
pub struct Histogram {
    buckets: Vec<Vec<i64>>,
}

impl Histogram {
    pub fn buckets(&self) -> &[Vec<i64>] {
        &self.buckets
    }

    /// Events live at `minute`; empty outside the modeled day.
    pub fn at(&self, minute: usize) -> &[i64] {
        self.buckets.get(minute).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Largest number of events live at any single minute.
    pub fn peak(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Records, for every minute, which events occupy it. Expects validated
/// events; minutes outside the day are ignored.
pub fn build_histogram(events: &[Event]) -> Histogram {
    let mut buckets = vec![Vec::new(); DAY_MINUTES as usize];
    for event in events {
        let first = event.start.max(0);
        let last = event.end.min(DAY_MINUTES);
        for minute in first..last {
            buckets[minute as usize].push(event.id);
        }
    }
    Histogram { buckets }
}
