//! Event records and the per-day report types.
//!
//! All timestamps are civil (`NaiveDateTime`): the engine never converts
//! between timezones.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// What an event means for availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// A window in which the provider is available.
    Opening,
    /// A booked window that consumes availability.
    Appointment,
}

/// A stored opening or appointment window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub kind: EventKind,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    /// Only meaningful for openings: the window repeats every 7 days,
    /// indefinitely, from `starts_at`.
    #[serde(default)]
    pub weekly_recurring: bool,
}

impl Event {
    pub fn opening(starts_at: NaiveDateTime, ends_at: NaiveDateTime, weekly_recurring: bool) -> Self {
        Self {
            kind: EventKind::Opening,
            starts_at,
            ends_at,
            weekly_recurring,
        }
    }

    pub fn appointment(starts_at: NaiveDateTime, ends_at: NaiveDateTime) -> Self {
        Self {
            kind: EventKind::Appointment,
            starts_at,
            ends_at,
            weekly_recurring: false,
        }
    }

    pub fn is_opening(&self) -> bool {
        self.kind == EventKind::Opening
    }
}

/// A closed time range `[start, end]`, used to query events by start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeRange {
    /// The whole calendar day: midnight up to the last representable instant.
    pub fn day(date: NaiveDate) -> Self {
        let start = date.and_time(NaiveTime::MIN);
        let end = start
            .checked_add_signed(Duration::days(1))
            .map_or(NaiveDateTime::MAX, |next| next - Duration::nanoseconds(1));
        Self { start, end }
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// Free slots for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub date: NaiveDate,
    /// Slot start times (`H:MM`), ascending.
    pub slots: Vec<String>,
}

/// One entry per consecutive day, starting at the reference date.
pub type AvailabilityReport = Vec<DayAvailability>;
