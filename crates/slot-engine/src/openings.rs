//! Collect the opening slots that apply to a given day.
//!
//! Two sources are unioned:
//!
//! - recurring openings whose first day is on or before the target day and
//!   falls a whole number of weeks before it;
//! - one-off openings starting on the target day.
//!
//! Recurring windows are expanded from their *stored* interval, not from a
//! copy moved onto the target date. The resulting instants carry the original
//! date; they are ordered by their offset into that stored day and compared
//! by clock time once formatted, which is what lines a recurring window up
//! with the target day.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::trace;

use crate::error::Result;
use crate::event::{Event, TimeRange};
use crate::repository::EventRepository;
use crate::slots::{expand_instants, format_slot};

const DAYS_PER_WEEK: i64 = 7;

/// Whether a weekly-recurring opening applies on `day`.
pub fn recurs_on(opening: &Event, day: NaiveDate) -> bool {
    let first_day = opening.starts_at.date();
    day >= first_day && (day - first_day).num_days() % DAYS_PER_WEEK == 0
}

/// A raw opening slot keyed by its offset from the start of the opening's
/// own stored day.
///
/// Recurring windows stored in different weeks line up on the offset, and a
/// window running past midnight keeps its chronological order (`23:30` sorts
/// before the next day's `0:00`).
pub type OpeningInstant = (Duration, NaiveDateTime);

/// Raw slot instants of every opening that applies on `day`, unsorted.
///
/// # Errors
/// Repository failures are passed through.
pub fn collect_opening_instants<R: EventRepository>(
    repo: &R,
    day: NaiveDate,
    step: Duration,
) -> Result<Vec<OpeningInstant>> {
    let mut instants = Vec::new();
    let mut seen = HashSet::new();

    for opening in repo.find_openings(true, None)? {
        if recurs_on(&opening, day) {
            trace!(starts_at = %opening.starts_at, "recurring opening applies");
            expand_opening(&opening, step, &mut instants, &mut seen);
        }
    }

    let range = TimeRange::day(day);
    for opening in repo.find_openings(false, Some(&range))? {
        trace!(starts_at = %opening.starts_at, "one-off opening applies");
        expand_opening(&opening, step, &mut instants, &mut seen);
    }

    Ok(instants)
}

fn expand_opening(
    opening: &Event,
    step: Duration,
    instants: &mut Vec<OpeningInstant>,
    seen: &mut HashSet<String>,
) {
    let day_start = opening.starts_at.date().and_time(NaiveTime::MIN);
    let mut raw = Vec::new();
    expand_instants(opening.starts_at, opening.ends_at, step, &mut raw, seen);
    instants.extend(raw.into_iter().map(|instant| (instant - day_start, instant)));
}

/// Sort raw instants by their offset into the opening's day and format them.
///
/// Sorting happens before formatting because formatted strings do not order
/// chronologically (`"9:30"` > `"12:00"`).
pub fn sort_and_format(mut instants: Vec<OpeningInstant>) -> Vec<String> {
    instants.sort();
    let mut formatted: Vec<String> = instants
        .into_iter()
        .map(|(_, instant)| format_slot(instant))
        .collect();
    formatted.dedup();
    formatted
}

/// Formatted opening slots for `day`, ascending, without duplicates.
///
/// # Errors
/// Repository failures are passed through.
pub fn opening_slots<R: EventRepository>(
    repo: &R,
    day: NaiveDate,
    step: Duration,
) -> Result<Vec<String>> {
    collect_opening_instants(repo, day, step).map(sort_and_format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> NaiveDateTime {
        s.parse().unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn recurring_opening_matches_whole_weeks_only() {
        let opening = Event::opening(at("2014-08-04T09:30:00"), at("2014-08-04T12:30:00"), true);
        assert!(recurs_on(&opening, date(2014, 8, 4)));
        assert!(recurs_on(&opening, date(2014, 8, 11)));
        assert!(recurs_on(&opening, date(2015, 8, 3)));
        assert!(!recurs_on(&opening, date(2014, 8, 10)));
        assert!(!recurs_on(&opening, date(2014, 7, 28)));
    }

    fn keyed(day_start: &str, instant: &str) -> OpeningInstant {
        let instant = at(instant);
        (instant - at(day_start), instant)
    }

    #[test]
    fn windows_from_different_weeks_line_up_by_offset() {
        let instants = vec![
            keyed("2014-08-03T00:00:00", "2014-08-03T15:00:00"),
            keyed("2014-08-10T00:00:00", "2014-08-10T09:00:00"),
            keyed("2014-08-03T00:00:00", "2014-08-03T09:00:00"),
        ];
        assert_eq!(sort_and_format(instants), ["9:00", "15:00"]);
    }

    #[test]
    fn past_midnight_sorts_after_late_evening() {
        let instants = vec![
            keyed("2014-08-10T00:00:00", "2014-08-11T00:00:00"),
            keyed("2014-08-10T00:00:00", "2014-08-10T23:30:00"),
        ];
        assert_eq!(sort_and_format(instants), ["23:30", "0:00"]);
    }
}
