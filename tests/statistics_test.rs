// ABOUTME: Conformance tests for period weight statistics
// ABOUTME: Edge cases, trend boundaries, weekly-rate normalization, purity

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::series;
use ponderal::intelligence::WeightStatisticsEngine;
use ponderal::TrendDirection;

#[test]
fn empty_series_yields_zeroed_stable_statistics() {
    let stats = WeightStatisticsEngine::summarize(&[]);
    assert_eq!(stats.start_weight, 0.0);
    assert_eq!(stats.end_weight, 0.0);
    assert_eq!(stats.change, 0.0);
    assert_eq!(stats.change_percent, 0.0);
    assert_eq!(stats.avg_weekly_change, 0.0);
    assert_eq!(stats.trend_direction, TrendDirection::Stable);
}

#[test]
fn singleton_series_is_stable_with_equal_endpoints() {
    let entries = series(&[("2026-03-01", 70.0)]);
    let stats = WeightStatisticsEngine::summarize(&entries);
    assert_eq!(stats.start_weight, 70.0);
    assert_eq!(stats.end_weight, 70.0);
    assert_eq!(stats.change, 0.0);
    assert_eq!(stats.trend_direction, TrendDirection::Stable);
}

#[test]
fn rounded_change_of_exactly_plus_threshold_is_stable() {
    // 70.11 - 70.0 rounds to 0.1, which is within the stable band.
    let entries = series(&[("2026-03-01", 70.0), ("2026-03-05", 70.11)]);
    let stats = WeightStatisticsEngine::summarize(&entries);
    assert_eq!(stats.change, 0.1);
    assert_eq!(stats.trend_direction, TrendDirection::Stable);
}

#[test]
fn rounded_change_of_exactly_minus_threshold_is_stable() {
    let entries = series(&[("2026-03-01", 70.0), ("2026-03-05", 69.89)]);
    let stats = WeightStatisticsEngine::summarize(&entries);
    assert_eq!(stats.change, -0.1);
    assert_eq!(stats.trend_direction, TrendDirection::Stable);
}

#[test]
fn change_past_threshold_classifies_direction() {
    let gaining = series(&[("2026-03-01", 70.0), ("2026-03-08", 70.5)]);
    assert_eq!(
        WeightStatisticsEngine::summarize(&gaining).trend_direction,
        TrendDirection::Increasing
    );

    let losing = series(&[("2026-03-01", 70.5), ("2026-03-08", 70.0)]);
    assert_eq!(
        WeightStatisticsEngine::summarize(&losing).trend_direction,
        TrendDirection::Decreasing
    );
}

#[test]
fn weekly_rate_normalizes_over_calendar_days() {
    // 2 kg lost over 9 days: -2/9 * 7 = -1.555..., rounds to -1.6.
    let entries = series(&[("2026-03-01", 80.0), ("2026-03-10", 78.0)]);
    let stats = WeightStatisticsEngine::summarize(&entries);
    assert_eq!(stats.change, -2.0);
    assert_eq!(stats.change_percent, -2.5);
    assert_eq!(stats.avg_weekly_change, -1.6);
    assert_eq!(stats.trend_direction, TrendDirection::Decreasing);
}

#[test]
fn same_date_endpoints_have_zero_weekly_rate() {
    // Two entries sharing a civil date can only come from caregiver
    // corrections in the source store; the rate must not divide by zero.
    let entries = series(&[("2026-03-01", 80.0), ("2026-03-01", 78.5)]);
    let stats = WeightStatisticsEngine::summarize(&entries);
    assert_eq!(stats.change, -1.5);
    assert_eq!(stats.avg_weekly_change, 0.0);
}

#[test]
fn summarize_is_pure_and_bit_identical_across_runs() {
    let entries = series(&[
        ("2026-03-01", 80.0),
        ("2026-03-04", 79.4),
        ("2026-03-10", 78.0),
    ]);
    let first = WeightStatisticsEngine::summarize(&entries);
    let second = WeightStatisticsEngine::summarize(&entries);
    assert_eq!(first, second);
    assert_eq!(
        first.avg_weekly_change.to_bits(),
        second.avg_weekly_change.to_bits()
    );
}
