//! # slot-engine
//!
//! Weekly availability calendars computed from two kinds of time-stamped
//! records: **openings** (windows when a provider is available, optionally
//! repeating every week) and **appointments** (windows that consume that
//! availability).
//!
//! For each of the 7 days starting at a reference date, the engine reports
//! the 30-minute slots covered by at least one opening and by no appointment.
//! Slots are identified by their clock time in `H:MM` form (`9:30`, `14:00`).
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{NaiveDate, NaiveDateTime};
//! use slot_engine::{availabilities, Event, InMemoryEventRepository};
//!
//! let at = |s: &str| -> NaiveDateTime { s.parse().unwrap() };
//! let mut repo = InMemoryEventRepository::new();
//! repo.insert(Event::opening(at("2014-08-04T09:30:00"), at("2014-08-04T12:30:00"), true))
//!     .unwrap();
//! repo.insert(Event::appointment(at("2014-08-11T10:30:00"), at("2014-08-11T11:30:00")))
//!     .unwrap();
//!
//! let report = availabilities(&repo, NaiveDate::from_ymd_opt(2014, 8, 10).unwrap()).unwrap();
//! assert_eq!(report.len(), 7);
//! assert_eq!(report[1].slots, ["9:30", "10:00", "11:30", "12:00"]);
//! ```
//!
//! ## Modules
//!
//! - [`event`] — `Event`, `TimeRange` and the per-day report types
//! - [`repository`] — the event store interface and an in-memory store
//! - [`slots`] — interval expansion into fixed-size slots and slot formatting
//! - [`openings`] — per-day opening slot collection (recurring + one-off)
//! - [`appointments`] — per-day appointment slot collection
//! - [`reconcile`] — subtract appointment slots from opening slots
//! - [`availability`] — the 7-day calculator
//! - [`config`] — slot size and horizon settings
//! - [`error`] — Error types

pub mod appointments;
pub mod availability;
pub mod config;
pub mod error;
pub mod event;
pub mod openings;
pub mod reconcile;
pub mod repository;
pub mod slots;

pub use availability::{availabilities, available_slots, AvailabilityCalculator};
pub use config::AvailabilityConfig;
pub use error::EngineError;
pub use event::{AvailabilityReport, DayAvailability, Event, EventKind, TimeRange};
pub use repository::{EventRepository, InMemoryEventRepository};
pub use slots::format_slot;
