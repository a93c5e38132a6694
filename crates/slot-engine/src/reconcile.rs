//! Subtract booked slots from opening slots.

use std::collections::HashSet;

/// Opening slots not taken by any appointment, in opening order.
///
/// Appointments only remove slots; nothing outside `openings` is ever
/// returned.
pub fn free_slots(openings: Vec<String>, booked: &HashSet<String>) -> Vec<String> {
    openings
        .into_iter()
        .filter(|slot| !booked.contains(slot))
        .collect()
}
