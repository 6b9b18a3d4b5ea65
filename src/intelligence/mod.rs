// ABOUTME: Analytics components of the weight tracking engine
// ABOUTME: Pure functions over ordered measurement series, no shared state

//! Analytics over ordered weight measurement series.
//!
//! Every component here is a pure function over immutable inputs: the same
//! series always produces bit-identical output, and nothing caches across
//! calls. Hosts needing caching wrap these behind a keyed cache of their
//! own.

/// Weekly compliance streaks and rates.
pub mod compliance;
/// Trailing moving averages for charting.
pub mod moving_average;
/// Entry-time anomaly detection.
pub mod outlier_detection;
/// Shared one-decimal rounding.
pub mod rounding;
/// Period summary statistics.
pub mod statistics;

pub use compliance::{ComplianceStreakCalculator, ComplianceSummary, StreakWeekPolicy};
pub use moving_average::{MovingAverageCalculator, TrendPoint};
pub use outlier_detection::{AnomalyWarning, OutlierAssessment, OutlierDetector};
pub use rounding::round1;
pub use statistics::{WeightStatistics, WeightStatisticsEngine};
