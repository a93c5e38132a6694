//! The event store the calculator reads from.
//!
//! Persistence is not the engine's concern: [`EventRepository`] is the seam a
//! real store plugs into. [`InMemoryEventRepository`] backs tests and the CLI.

use tracing::trace;

use crate::error::{EngineError, Result};
use crate::event::{Event, EventKind, TimeRange};

/// Read access to stored events, filtered by kind and start time.
///
/// Implementations report their own failures as `EngineError::Repository`;
/// the calculator propagates them without retrying.
pub trait EventRepository {
    /// Openings with the given `weekly_recurring` flag. When `range` is set,
    /// only openings whose `starts_at` falls inside it.
    fn find_openings(&self, recurring: bool, range: Option<&TimeRange>) -> Result<Vec<Event>>;

    /// Appointments whose `starts_at` falls inside `range`.
    fn find_appointments(&self, range: &TimeRange) -> Result<Vec<Event>>;
}

impl<R: EventRepository + ?Sized> EventRepository for &R {
    fn find_openings(&self, recurring: bool, range: Option<&TimeRange>) -> Result<Vec<Event>> {
        (**self).find_openings(recurring, range)
    }

    fn find_appointments(&self, range: &TimeRange) -> Result<Vec<Event>> {
        (**self).find_appointments(range)
    }
}

/// A `Vec`-backed store that enforces opening uniqueness on insert.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventRepository {
    events: Vec<Event>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store by inserting `events` in order.
    ///
    /// # Errors
    /// Fails on the first opening that duplicates an earlier one.
    pub fn from_events(events: impl IntoIterator<Item = Event>) -> Result<Self> {
        let mut repo = Self::new();
        for event in events {
            repo.insert(event)?;
        }
        Ok(repo)
    }

    /// Decode a JSON array of events and insert them in order.
    ///
    /// # Errors
    /// Returns `EngineError::Parse` for malformed JSON and
    /// `EngineError::DuplicateOpening` for repeated openings.
    pub fn from_json(json: &str) -> Result<Self> {
        let events: Vec<Event> = serde_json::from_str(json)?;
        Self::from_events(events)
    }

    /// Store an event.
    ///
    /// # Errors
    /// Returns `EngineError::DuplicateOpening` when an opening with identical
    /// `starts_at` and `ends_at` already exists. Appointments always succeed.
    pub fn insert(&mut self, event: Event) -> Result<()> {
        if event.is_opening() && self.opening_exists(&event) {
            return Err(EngineError::DuplicateOpening {
                starts_at: event.starts_at,
                ends_at: event.ends_at,
            });
        }
        self.events.push(event);
        Ok(())
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn opening_exists(&self, candidate: &Event) -> bool {
        self.events.iter().any(|e| {
            e.is_opening() && e.starts_at == candidate.starts_at && e.ends_at == candidate.ends_at
        })
    }
}

impl EventRepository for InMemoryEventRepository {
    fn find_openings(&self, recurring: bool, range: Option<&TimeRange>) -> Result<Vec<Event>> {
        let found: Vec<Event> = self
            .events
            .iter()
            .filter(|e| e.kind == EventKind::Opening && e.weekly_recurring == recurring)
            .filter(|e| range.is_none_or(|r| r.contains(e.starts_at)))
            .cloned()
            .collect();
        trace!(recurring, count = found.len(), "openings matched");
        Ok(found)
    }

    fn find_appointments(&self, range: &TimeRange) -> Result<Vec<Event>> {
        let found: Vec<Event> = self
            .events
            .iter()
            .filter(|e| e.kind == EventKind::Appointment && range.contains(e.starts_at))
            .cloned()
            .collect();
        trace!(count = found.len(), "appointments matched");
        Ok(found)
    }
}
