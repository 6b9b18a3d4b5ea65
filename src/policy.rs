// ABOUTME: Mutation and confirmation permissions for weight measurements
// ABOUTME: Same-day-plus-one edit window composed with entry provenance rules

//! Edit-window and entry-permission policies.
//!
//! Patients get a same-day-plus-one grace period to correct their own
//! entries; after that the series is frozen so trend charts stay stable.
//! Caregiver-authored entries are never patient-mutable here; caregiver
//! mutation rights live in the authorization layer.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar::CalendarClock;
use crate::constants::edit_window::GRACE_DAYS;
use crate::models::{RecordedBy, WeightMeasurement};

/// Decides whether a measurement is still inside its edit window.
#[derive(Debug, Clone, Copy)]
pub struct EditWindowPolicy {
    clock: CalendarClock,
}

impl EditWindowPolicy {
    /// Create a policy resolving against the given reference clock.
    pub const fn new(clock: CalendarClock) -> Self {
        Self { clock }
    }

    /// Whether a measurement dated `measurement_date` may still be edited
    /// or deleted at `now`.
    ///
    /// Mutable exactly while `now`'s civil date in the reference zone is the
    /// measurement date or the day after: the closed interval from the start
    /// of day `D` through the last instant of day `D + 1`. The upper bound
    /// is inclusive; one step past end of day `D + 1` the window is shut.
    pub fn is_mutable(&self, measurement_date: chrono::NaiveDate, now: DateTime<Utc>) -> bool {
        let today = self.clock.civil_date(now);
        today >= measurement_date && today <= measurement_date + Duration::days(GRACE_DAYS)
    }
}

/// Caller-facing permissions for one measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPermissions {
    /// Whether the patient may edit or delete the entry right now.
    pub can_mutate: bool,
    /// Whether the outlier-confirmation toggle is available.
    pub can_toggle_outlier_confirmation: bool,
}

/// Composes the edit window with provenance and outlier-confirmation rules.
#[derive(Debug, Clone, Copy)]
pub struct WeightEntryPolicy {
    edit_window: EditWindowPolicy,
}

impl WeightEntryPolicy {
    /// Create a policy over the given edit window.
    pub const fn new(edit_window: EditWindowPolicy) -> Self {
        Self { edit_window }
    }

    /// Whether the patient may edit or delete this entry at `now`.
    /// Requires both an open edit window and patient authorship.
    pub fn can_mutate(&self, entry: &WeightMeasurement, now: DateTime<Utc>) -> bool {
        self.edit_window.is_mutable(entry.measurement_date, now)
            && entry.recorded_by == RecordedBy::Patient
    }

    /// Whether the outlier-confirmation toggle is available for this entry.
    /// Only flagged entries expose it; there is no time restriction.
    pub fn can_toggle_outlier_confirmation(entry: &WeightMeasurement) -> bool {
        entry.is_outlier
    }

    /// All permissions for one entry at `now`.
    pub fn permissions(&self, entry: &WeightMeasurement, now: DateTime<Utc>) -> EntryPermissions {
        EntryPermissions {
            can_mutate: self.can_mutate(entry, now),
            can_toggle_outlier_confirmation: Self::can_toggle_outlier_confirmation(entry),
        }
    }
}
