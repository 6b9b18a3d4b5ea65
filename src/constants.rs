// ABOUTME: Named threshold constants for weight validation, anomaly detection, and trends
// ABOUTME: Single source for every numeric limit so conformance tests can target them directly

//! Clinical and policy constants used throughout the engine.
//!
//! Every threshold referenced by the analytics components lives here as a
//! named constant. Tests assert against these values by name rather than
//! against numbers repeated inside the algorithms.

/// Accepted weight range and precision for adult patients.
///
/// The range deliberately spans well beyond typical dietetic caseloads so
/// that legitimate bariatric and underweight patients are never rejected by
/// the engine itself; clinical plausibility is the outlier detector's job.
pub mod weight_limits {
    /// Lowest weight (kg) the engine accepts as a valid measurement.
    pub const MIN_WEIGHT_KG: f64 = 30.0;

    /// Highest weight (kg) the engine accepts as a valid measurement.
    pub const MAX_WEIGHT_KG: f64 = 250.0;

    /// Measurements carry exactly one fractional digit; all rounding works
    /// on the value scaled by this factor.
    pub const DECIMAL_SCALE: f64 = 10.0;
}

/// Anomaly detection thresholds.
pub mod outlier {
    /// Maximum plausible weight change (kg) per elapsed calendar day before
    /// an entry is flagged as an outlier. Overridable at runtime via
    /// `WEIGHT_ENGINE_MAX_DAILY_CHANGE_KG`; the default is conservative and
    /// pending confirmation with clinical stakeholders.
    pub const MAX_PLAUSIBLE_DAILY_CHANGE_KG: f64 = 2.0;

    /// Floor applied to the elapsed-day count when scaling the threshold,
    /// so two measurements on the same civil date compare against a single
    /// day's allowance instead of dividing by zero.
    pub const MIN_ELAPSED_DAYS: i64 = 1;
}

/// Edit-window and backfill policy.
pub mod edit_window {
    /// Days after the measurement date during which a patient-authored entry
    /// stays mutable. The window is the closed interval from the start of
    /// the measurement date to the end of `measurement_date + GRACE_DAYS`.
    pub const GRACE_DAYS: i64 = 1;

    /// How far back a patient may date a new measurement, in days.
    pub const PATIENT_BACKFILL_DAYS: i64 = 7;
}

/// Trend classification thresholds.
pub mod trend {
    /// Rounded period change (kg) beyond which a series counts as moving.
    /// A rounded change of exactly this magnitude classifies as stable.
    pub const CHANGE_THRESHOLD_KG: f64 = 0.1;

    /// Days per week, used to normalize daily change into a weekly rate.
    pub const DAYS_PER_WEEK: f64 = 7.0;
}

/// Smoothing parameters for charting.
pub mod smoothing {
    /// Window length of the trailing moving average shown on weight charts.
    pub const MOVING_AVERAGE_WINDOW: usize = 7;
}
