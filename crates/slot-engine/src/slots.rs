//! Interval expansion into fixed-size slots.
//!
//! An interval `[start, end)` is walked in fixed steps from `start`; every
//! step instant is a slot. A degenerate interval (`end <= start`) yields no
//! slots and is not an error.

use std::collections::HashSet;

use chrono::{Duration, NaiveDateTime};

/// Display form of a slot: hour without leading zero, zero-padded minutes.
const SLOT_FORMAT: &str = "%-H:%M";

/// Format a slot instant as its clock time, e.g. `9:30` or `14:00`.
///
/// The date is discarded.
pub fn format_slot(instant: NaiveDateTime) -> String {
    instant.format(SLOT_FORMAT).to_string()
}

/// Iterator over the step instants of a half-open interval.
#[derive(Debug, Clone)]
pub struct SlotSteps {
    cursor: NaiveDateTime,
    end: NaiveDateTime,
    step: Duration,
}

impl SlotSteps {
    /// `step` must be positive; a non-positive step yields nothing.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, step: Duration) -> Self {
        Self {
            cursor: start,
            end,
            step,
        }
    }
}

impl Iterator for SlotSteps {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<NaiveDateTime> {
        if self.cursor >= self.end || self.step <= Duration::zero() {
            return None;
        }
        let current = self.cursor;
        self.cursor = current.checked_add_signed(self.step).unwrap_or(self.end);
        Some(current)
    }
}

/// Expand `[start, end)` into raw instants, appending to `slots`.
///
/// `seen` holds the formatted form of everything already in `slots`; a step
/// whose clock time is already present is skipped. Instants are kept raw so
/// the caller can sort them before formatting.
pub fn expand_instants(
    start: NaiveDateTime,
    end: NaiveDateTime,
    step: Duration,
    slots: &mut Vec<NaiveDateTime>,
    seen: &mut HashSet<String>,
) {
    for instant in SlotSteps::new(start, end, step) {
        if seen.insert(format_slot(instant)) {
            slots.push(instant);
        }
    }
}

/// Expand `[start, end)` directly into formatted slots.
pub fn expand_formatted(
    start: NaiveDateTime,
    end: NaiveDateTime,
    step: Duration,
    slots: &mut HashSet<String>,
) {
    slots.extend(SlotSteps::new(start, end, step).map(format_slot));
}
