// ABOUTME: Period-level weight statistics for progress views and dietitian reports
// ABOUTME: Start/end weight, change, normalized weekly rate, and trend classification

use serde::{Deserialize, Serialize};

use crate::calendar::CalendarClock;
use crate::constants::trend::{CHANGE_THRESHOLD_KG, DAYS_PER_WEEK};
use crate::intelligence::rounding::round1;
use crate::models::{TrendDirection, WeightMeasurement};

/// Summary statistics for an ordered measurement series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightStatistics {
    /// First entry's weight, kg.
    pub start_weight: f64,
    /// Last entry's weight, kg.
    pub end_weight: f64,
    /// End minus start, one decimal place.
    pub change: f64,
    /// Change relative to the start weight, percent, one decimal place.
    pub change_percent: f64,
    /// Change normalized to a weekly rate, one decimal place.
    pub avg_weekly_change: f64,
    /// Direction of the period, evaluated on the rounded change.
    pub trend_direction: TrendDirection,
}

impl WeightStatistics {
    /// The documented default for empty series: all zeros, stable.
    pub const fn empty() -> Self {
        Self {
            start_weight: 0.0,
            end_weight: 0.0,
            change: 0.0,
            change_percent: 0.0,
            avg_weekly_change: 0.0,
            trend_direction: TrendDirection::Stable,
        }
    }
}

/// Computes period statistics over ordered measurement series.
///
/// A total function: empty and singleton series produce the documented
/// zero/stable defaults instead of errors.
pub struct WeightStatisticsEngine;

impl WeightStatisticsEngine {
    /// Summarize a chronologically ascending series.
    pub fn summarize(series: &[WeightMeasurement]) -> WeightStatistics {
        let (Some(first), Some(last)) = (series.first(), series.last()) else {
            return WeightStatistics::empty();
        };

        if series.len() == 1 {
            return WeightStatistics {
                start_weight: first.weight,
                end_weight: first.weight,
                change: 0.0,
                change_percent: 0.0,
                avg_weekly_change: 0.0,
                trend_direction: TrendDirection::Stable,
            };
        }

        let change = round1(last.weight - first.weight);
        let change_percent = if first.weight > 0.0 {
            round1(change / first.weight * 100.0)
        } else {
            0.0
        };

        let days_between =
            CalendarClock::days_between(first.measurement_date, last.measurement_date);
        let avg_weekly_change = if days_between > 0 {
            round1(change / days_between as f64 * DAYS_PER_WEEK)
        } else {
            0.0
        };

        WeightStatistics {
            start_weight: first.weight,
            end_weight: last.weight,
            change,
            change_percent,
            avg_weekly_change,
            trend_direction: Self::classify_trend(change),
        }
    }

    /// Classify a rounded period change. Exactly the threshold in either
    /// direction counts as stable.
    pub fn classify_trend(rounded_change: f64) -> TrendDirection {
        if rounded_change > CHANGE_THRESHOLD_KG {
            TrendDirection::Increasing
        } else if rounded_change < -CHANGE_THRESHOLD_KG {
            TrendDirection::Decreasing
        } else {
            TrendDirection::Stable
        }
    }
}
