//! Collect the slots consumed by appointments on a given day.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};
use tracing::trace;

use crate::error::Result;
use crate::event::TimeRange;
use crate::repository::EventRepository;
use crate::slots::expand_formatted;

/// Formatted slots covered by appointments starting on `day`.
///
/// Only membership matters, so the result is a set. An appointment running
/// past midnight is still expanded in full.
///
/// # Errors
/// Repository failures are passed through.
pub fn appointment_slots<R: EventRepository>(
    repo: &R,
    day: NaiveDate,
    step: Duration,
) -> Result<HashSet<String>> {
    let mut slots = HashSet::new();
    for appointment in repo.find_appointments(&TimeRange::day(day))? {
        trace!(starts_at = %appointment.starts_at, "appointment applies");
        expand_formatted(appointment.starts_at, appointment.ends_at, step, &mut slots);
    }
    Ok(slots)
}
