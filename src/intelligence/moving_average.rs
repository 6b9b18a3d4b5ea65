// ABOUTME: Trailing 7-sample moving average over chronologically ordered weight series
// ABOUTME: Produces the smoothed curve plotted alongside raw weights on patient charts

use serde::{Deserialize, Serialize};

use crate::constants::smoothing::MOVING_AVERAGE_WINDOW;
use crate::intelligence::rounding::round1;
use crate::models::WeightMeasurement;

/// One point of the charting payload: raw weight plus its smoothed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Civil date of the measurement.
    pub date: chrono::NaiveDate,
    /// Raw weight in kg.
    pub weight: f64,
    /// Trailing moving average at this point, one decimal place.
    pub ma7: f64,
}

/// Trailing moving average calculator.
///
/// Deliberately recomputes each index from the raw slice rather than keeping
/// a running sum; series are small (one entry per day at most) and the
/// restartable form keeps the calculator stateless.
pub struct MovingAverageCalculator;

impl MovingAverageCalculator {
    /// MA7 at `index`: mean of the trailing `min(7, index + 1)` samples
    /// ending at and including `index`, rounded to one decimal place.
    ///
    /// Returns 0 for an index past the end of the slice; callers iterate
    /// over valid indices only.
    pub fn ma7_at(weights: &[f64], index: usize) -> f64 {
        if index >= weights.len() {
            return 0.0;
        }
        let start = index.saturating_sub(MOVING_AVERAGE_WINDOW - 1);
        let window = &weights[start..=index];
        let sum: f64 = window.iter().sum();
        round1(sum / window.len() as f64)
    }

    /// Full MA7 curve for a chronologically ascending weight series.
    pub fn series(weights: &[f64]) -> Vec<f64> {
        (0..weights.len()).map(|i| Self::ma7_at(weights, i)).collect()
    }

    /// Charting payload for an ordered measurement series: each entry's raw
    /// weight paired with its smoothed value.
    pub fn trend_points(series: &[WeightMeasurement]) -> Vec<TrendPoint> {
        let weights: Vec<f64> = series.iter().map(|m| m.weight).collect();
        series
            .iter()
            .enumerate()
            .map(|(i, m)| TrendPoint {
                date: m.measurement_date,
                weight: m.weight,
                ma7: Self::ma7_at(&weights, i),
            })
            .collect()
    }
}
