// ABOUTME: Entry-time anomaly detection against the immediately preceding measurement
// ABOUTME: Flags implausible day-normalized weight jumps and builds the warning payload

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar::CalendarClock;
use crate::config::OutlierConfig;
use crate::constants::outlier::MIN_ELAPSED_DAYS;
use crate::intelligence::rounding::round1;
use crate::models::WeightMeasurement;

/// Warning payload attached to a flagged entry, rendered to the patient so
/// they can either correct a typo or confirm the jump is real.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyWarning {
    /// Weight of the preceding measurement, kg.
    pub previous_weight: f64,
    /// Civil date of the preceding measurement.
    pub previous_date: NaiveDate,
    /// New weight minus previous weight, one decimal place.
    pub change: f64,
}

/// Result of evaluating a new entry against its predecessor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierAssessment {
    /// Whether the entry should carry the outlier flag.
    pub is_outlier: bool,
    /// Present iff `is_outlier` is true.
    pub warning: Option<AnomalyWarning>,
}

impl OutlierAssessment {
    /// Assessment for an entry with nothing to compare against.
    pub const fn not_outlier() -> Self {
        Self {
            is_outlier: false,
            warning: None,
        }
    }
}

/// Flags implausible weight jumps at entry time.
///
/// The decision is made exactly once, when the entry is created, against the
/// most recent measurement with an earlier date for the same subject. Later
/// inserts or deletes never revisit it.
#[derive(Debug, Clone)]
pub struct OutlierDetector {
    config: OutlierConfig,
}

impl OutlierDetector {
    /// Create a detector with the given thresholds.
    pub const fn new(config: OutlierConfig) -> Self {
        Self { config }
    }

    /// Evaluate a new entry against its predecessor, if any.
    ///
    /// The change is compared against the maximum plausible daily change
    /// scaled by the number of calendar days between the two measurement
    /// dates, floored at one day so a same-date comparison uses a single
    /// day's allowance.
    pub fn evaluate(
        &self,
        new_weight: f64,
        new_date: NaiveDate,
        previous: Option<&WeightMeasurement>,
    ) -> OutlierAssessment {
        let Some(previous) = previous else {
            return OutlierAssessment::not_outlier();
        };

        let elapsed_days =
            CalendarClock::days_between(previous.measurement_date, new_date).max(MIN_ELAPSED_DAYS);
        let change = new_weight - previous.weight;
        let allowance = self.config.max_daily_change_kg * elapsed_days as f64;

        if change.abs() <= allowance {
            return OutlierAssessment::not_outlier();
        }

        debug!(
            previous_weight = previous.weight,
            new_weight,
            elapsed_days,
            allowance,
            "weight entry flagged as outlier"
        );

        OutlierAssessment {
            is_outlier: true,
            warning: Some(AnomalyWarning {
                previous_weight: previous.weight,
                previous_date: previous.measurement_date,
                change: round1(change),
            }),
        }
    }
}
