//! The 7-day availability calculator.
//!
//! For each day of the horizon: collect opening slots, collect appointment
//! slots, and keep the opening slots no appointment touches. Each call reads
//! the repository afresh; nothing is cached between calls.

use chrono::{Days, Duration, NaiveDate};
use tracing::debug;

use crate::appointments::appointment_slots;
use crate::config::AvailabilityConfig;
use crate::error::{EngineError, Result};
use crate::event::{AvailabilityReport, DayAvailability};
use crate::openings::opening_slots;
use crate::reconcile::free_slots;
use crate::repository::EventRepository;

/// Stateless calculator over an event repository (owned or borrowed).
#[derive(Debug, Clone)]
pub struct AvailabilityCalculator<R> {
    repo: R,
    config: AvailabilityConfig,
}

impl<R: EventRepository> AvailabilityCalculator<R> {
    /// Calculator with 30-minute slots over 7 days.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            config: AvailabilityConfig::default(),
        }
    }

    /// # Errors
    /// Returns `EngineError::InvalidConfig` if `config` does not validate.
    pub fn with_config(repo: R, config: AvailabilityConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { repo, config })
    }

    pub fn config(&self) -> &AvailabilityConfig {
        &self.config
    }

    /// Free slots for each of `horizon_days` consecutive days starting at
    /// `reference`.
    ///
    /// Always returns exactly `horizon_days` entries, one calendar day apart,
    /// even when no events exist.
    ///
    /// # Errors
    /// Returns `EngineError::DateOutOfRange` when the horizon would run past
    /// `NaiveDate::MAX`. Repository failures are passed through.
    pub fn availabilities(&self, reference: NaiveDate) -> Result<AvailabilityReport> {
        let last_offset = Days::new(u64::from(self.config.horizon_days - 1));
        if reference.checked_add_days(last_offset).is_none() {
            return Err(EngineError::DateOutOfRange(format!(
                "{} days from {} exceeds the calendar",
                self.config.horizon_days, reference
            )));
        }

        let mut report = Vec::with_capacity(self.config.horizon_days as usize);
        for day in reference.iter_days().take(self.config.horizon_days as usize) {
            let slots = self.available_slots(day)?;
            report.push(DayAvailability { date: day, slots });
        }
        Ok(report)
    }

    /// Free slots for a single day, ascending.
    ///
    /// # Errors
    /// Repository failures are passed through.
    pub fn available_slots(&self, day: NaiveDate) -> Result<Vec<String>> {
        let step = Duration::minutes(self.config.slot_minutes);
        let openings = opening_slots(&self.repo, day, step)?;
        let booked = appointment_slots(&self.repo, day, step)?;
        let opened = openings.len();
        let free = free_slots(openings, &booked);
        debug!(
            %day,
            opened,
            booked = booked.len(),
            free = free.len(),
            "computed day availability"
        );
        Ok(free)
    }
}

/// Weekly report with the default configuration.
///
/// # Errors
/// Repository failures are passed through.
pub fn availabilities<R: EventRepository>(repo: &R, reference: NaiveDate) -> Result<AvailabilityReport> {
    AvailabilityCalculator::new(repo).availabilities(reference)
}

/// Single-day view with the default configuration.
///
/// # Errors
/// Repository failures are passed through.
pub fn available_slots<R: EventRepository>(repo: &R, day: NaiveDate) -> Result<Vec<String>> {
    AvailabilityCalculator::new(repo).available_slots(day)
}
