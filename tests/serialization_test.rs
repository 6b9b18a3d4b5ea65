// ABOUTME: JSON-shape conformance tests for types exposed to the API layer
// ABOUTME: Field names and enum renames the presentation layer depends on

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::measurement;
use ponderal::intelligence::{AnomalyWarning, WeightStatisticsEngine};
use ponderal::{RecordedBy, TrendDirection};
use serde_json::json;
use uuid::Uuid;

#[test]
fn recorded_by_uses_snake_case_tags() {
    assert_eq!(serde_json::to_value(RecordedBy::Patient).unwrap(), json!("patient"));
    assert_eq!(
        serde_json::to_value(RecordedBy::Caregiver).unwrap(),
        json!("caregiver")
    );
}

#[test]
fn trend_direction_uses_snake_case_tags() {
    assert_eq!(
        serde_json::to_value(TrendDirection::Increasing).unwrap(),
        json!("increasing")
    );
    assert_eq!(
        serde_json::to_value(TrendDirection::Stable).unwrap(),
        json!("stable")
    );
}

#[test]
fn anomaly_warning_carries_the_documented_payload() {
    let warning = AnomalyWarning {
        previous_weight: 80.0,
        previous_date: "2026-03-09".parse().unwrap(),
        change: 4.5,
    };
    let value = serde_json::to_value(&warning).unwrap();
    assert_eq!(
        value,
        json!({
            "previous_weight": 80.0,
            "previous_date": "2026-03-09",
            "change": 4.5,
        })
    );
}

#[test]
fn measurement_round_trips_through_json() {
    let mut entry = measurement(Uuid::new_v4(), "2026-03-09", 80.0);
    entry.is_outlier = true;
    entry.outlier_confirmed = Some(false);

    let encoded = serde_json::to_string(&entry).unwrap();
    let decoded: ponderal::WeightMeasurement = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, entry);
}

#[test]
fn statistics_serialize_with_stable_field_names() {
    let stats = WeightStatisticsEngine::summarize(&[]);
    let value = serde_json::to_value(&stats).unwrap();
    assert_eq!(value["start_weight"], json!(0.0));
    assert_eq!(value["trend_direction"], json!("stable"));
}
