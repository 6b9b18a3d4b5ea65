// ABOUTME: Core data model for longitudinal weight measurements
// ABOUTME: Immutable measurement facts plus the administrative flags policies act on

//! Measurement model and validation.
//!
//! A [`WeightMeasurement`] is an immutable fact (subject, date, weight) with
//! a small set of administrative flags. The flags are independent booleans
//! rather than a state machine: `is_outlier` is write-once at creation,
//! `outlier_confirmed` is the subject's acknowledgment toggle, and
//! `is_backfill` is derived from the creation instant, never set directly.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::weight_limits::{MAX_WEIGHT_KG, MIN_WEIGHT_KG};
use crate::errors::{EngineError, EngineResult};
use crate::intelligence::rounding::has_single_decimal;

/// Who authored a measurement record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordedBy {
    /// The patient logged the value themselves.
    Patient,
    /// A dietitian or other caregiver logged it on the patient's behalf.
    Caregiver,
}

/// A single body-weight measurement.
///
/// At most one measurement exists per subject and civil date; the store
/// enforces the uniqueness, this type carries the fact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightMeasurement {
    /// Opaque identifier.
    pub id: Uuid,
    /// Patient the measurement belongs to.
    pub subject_id: Uuid,
    /// Weight in kg, one fractional digit, within the supported range.
    pub weight: f64,
    /// Civil date the weight was taken, in the reference timezone. Not
    /// necessarily the date the record was created.
    pub measurement_date: NaiveDate,
    /// Author of the record.
    pub recorded_by: RecordedBy,
    /// True iff `measurement_date` differs from the civil date of creation.
    pub is_backfill: bool,
    /// Set once by the outlier detector at creation, never recomputed.
    pub is_outlier: bool,
    /// Subject's acknowledgment of an outlier flag. Only ever set while
    /// `is_outlier` is true; `None` otherwise.
    pub outlier_confirmed: Option<bool>,
    /// Optional free-text note.
    pub note: Option<String>,
    /// Audit timestamp, not used in business calculations.
    pub created_at: DateTime<Utc>,
    /// Audit timestamp, not used in business calculations.
    pub updated_at: DateTime<Utc>,
}

/// Input for recording a new measurement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMeasurement {
    /// Patient the measurement belongs to.
    pub subject_id: Uuid,
    /// Weight in kg.
    pub weight: f64,
    /// Civil date the weight was taken.
    pub measurement_date: NaiveDate,
    /// Author of the record.
    pub recorded_by: RecordedBy,
    /// Optional free-text note.
    pub note: Option<String>,
}

/// Direction of a weight series over a period, evaluated on rounded change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Rounded change above the trend threshold.
    Increasing,
    /// Rounded change below the negative trend threshold.
    Decreasing,
    /// Everything else, including changes of exactly the threshold.
    Stable,
}

/// Validate a weight value against range and precision rules.
pub fn validate_weight(value: f64) -> EngineResult<()> {
    if !value.is_finite() || value < MIN_WEIGHT_KG || value > MAX_WEIGHT_KG {
        return Err(EngineError::WeightOutOfRange {
            value,
            min: MIN_WEIGHT_KG,
            max: MAX_WEIGHT_KG,
        });
    }
    if !has_single_decimal(value) {
        return Err(EngineError::WeightPrecision { value });
    }
    Ok(())
}
