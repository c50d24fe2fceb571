use rand::Rng;

use crate::ir::{DAY_MINUTES, Event, LATEST_START};

/// Builds `count` random events with ids `0..count`. Starts are uniform over
/// `0..=699` and ends uniform over `start + 1..=720`, so the result always
/// passes validation.
pub fn generate_events<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Event> {
    (0..count)
        .map(|id| {
            let start = rng.gen_range(0..=LATEST_START);
            let end = rng.gen_range(start + 1..=DAY_MINUTES);
            Event::new(id as i64, start, end)
        })
        .collect()
}
