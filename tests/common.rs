// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Builders for measurements and reference-zone instants

#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Europe::Berlin;
use ponderal::{RecordedBy, WeightMeasurement};
use uuid::Uuid;

/// Patient-authored measurement with neutral flags.
pub fn measurement(subject_id: Uuid, date: &str, weight: f64) -> WeightMeasurement {
    WeightMeasurement {
        id: Uuid::new_v4(),
        subject_id,
        weight,
        measurement_date: date.parse().expect("valid date literal"),
        recorded_by: RecordedBy::Patient,
        is_backfill: false,
        is_outlier: false,
        outlier_confirmed: None,
        note: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Caregiver-authored variant of [`measurement`].
pub fn caregiver_measurement(subject_id: Uuid, date: &str, weight: f64) -> WeightMeasurement {
    WeightMeasurement {
        recorded_by: RecordedBy::Caregiver,
        ..measurement(subject_id, date, weight)
    }
}

/// Ordered series from (date, weight) pairs for one subject.
pub fn series(pairs: &[(&str, f64)]) -> Vec<WeightMeasurement> {
    let subject_id = Uuid::new_v4();
    pairs
        .iter()
        .map(|(date, weight)| measurement(subject_id, date, *weight))
        .collect()
}

/// UTC instant for a Berlin wall-clock time.
pub fn berlin_instant(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Berlin
        .with_ymd_and_hms(y, m, d, h, min, s)
        .single()
        .expect("unambiguous local time")
        .with_timezone(&Utc)
}

/// Parse a date literal.
pub fn date(value: &str) -> NaiveDate {
    value.parse().expect("valid date literal")
}
