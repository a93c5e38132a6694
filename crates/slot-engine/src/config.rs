//! Slot size and horizon settings.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Default slot length.
pub const SLOT_MINUTES: i64 = 30;

/// Default number of days in a report.
pub const AVAILABILITY_DAYS: u32 = 7;

/// Settings for an [`AvailabilityCalculator`](crate::AvailabilityCalculator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvailabilityConfig {
    /// Length of one slot in minutes.
    pub slot_minutes: i64,
    /// Number of consecutive days in a report, starting at the reference date.
    pub horizon_days: u32,
}

impl Default for AvailabilityConfig {
    fn default() -> Self {
        Self {
            slot_minutes: SLOT_MINUTES,
            horizon_days: AVAILABILITY_DAYS,
        }
    }
}

impl AvailabilityConfig {
    /// Reject settings that would make slot walking or reporting meaningless.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidConfig` when `slot_minutes` is not positive
    /// or `horizon_days` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.slot_minutes <= 0 {
            return Err(EngineError::InvalidConfig(format!(
                "slot_minutes must be positive, got {}",
                self.slot_minutes
            )));
        }
        if self.horizon_days == 0 {
            return Err(EngineError::InvalidConfig(
                "horizon_days must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
