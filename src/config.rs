// ABOUTME: Runtime configuration for the weight tracking engine
// ABOUTME: Environment-overridable thresholds with validation, replacing scattered magic numbers

//! Engine configuration.
//!
//! Defaults come from [`crate::constants`]; every tunable can be overridden
//! through `WEIGHT_ENGINE_*` environment variables and the assembled
//! configuration is validated before use.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{edit_window, outlier};
use crate::intelligence::compliance::StreakWeekPolicy;

/// Reference timezone used when none is configured. The deployment region's
/// civil time, not the server's.
pub const DEFAULT_REFERENCE_TIMEZONE: Tz = chrono_tz::Europe::Berlin;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum EngineConfigError {
    /// A timezone name failed to parse as an IANA identifier.
    #[error("invalid timezone: {0}")]
    InvalidTimezone(String),

    /// An environment override failed to parse.
    #[error("invalid value for {0}")]
    InvalidValue(String),

    /// The assembled configuration is inconsistent.
    #[error("configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Anomaly detection tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlierConfig {
    /// Maximum plausible weight change in kg per elapsed calendar day.
    pub max_daily_change_kg: f64,
}

/// Creation-window tunables for patient-authored entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackfillConfig {
    /// How far back a patient may date a new measurement, in days.
    /// Caregiver backfill limits are enforced by the authorization layer,
    /// not by this engine.
    pub patient_backfill_days: i64,
}

/// Weekly-compliance tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakConfig {
    /// Whether the in-progress week participates in the current streak.
    pub week_policy: StreakWeekPolicy,
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Civil timezone every date decision is made in.
    pub reference_timezone: Tz,
    /// Anomaly detection tunables.
    pub outlier: OutlierConfig,
    /// Creation-window tunables.
    pub backfill: BackfillConfig,
    /// Weekly-compliance tunables.
    pub streak: StreakConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reference_timezone: DEFAULT_REFERENCE_TIMEZONE,
            outlier: OutlierConfig {
                max_daily_change_kg: outlier::MAX_PLAUSIBLE_DAILY_CHANGE_KG,
            },
            backfill: BackfillConfig {
                patient_backfill_days: edit_window::PATIENT_BACKFILL_DAYS,
            },
            streak: StreakConfig {
                week_policy: StreakWeekPolicy::IncludeCurrentWeek,
            },
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_environment() -> Result<Self, EngineConfigError> {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("WEIGHT_ENGINE_TIMEZONE") {
            config.reference_timezone = val
                .parse()
                .map_err(|_| EngineConfigError::InvalidTimezone(val))?;
        }

        if let Ok(val) = std::env::var("WEIGHT_ENGINE_MAX_DAILY_CHANGE_KG") {
            config.outlier.max_daily_change_kg = val.parse().map_err(|_| {
                EngineConfigError::InvalidValue("WEIGHT_ENGINE_MAX_DAILY_CHANGE_KG".into())
            })?;
        }

        if let Ok(val) = std::env::var("WEIGHT_ENGINE_PATIENT_BACKFILL_DAYS") {
            config.backfill.patient_backfill_days = val.parse().map_err(|_| {
                EngineConfigError::InvalidValue("WEIGHT_ENGINE_PATIENT_BACKFILL_DAYS".into())
            })?;
        }

        if let Ok(val) = std::env::var("WEIGHT_ENGINE_STREAK_WEEK_POLICY") {
            config.streak.week_policy = match val.as_str() {
                "include_current_week" => StreakWeekPolicy::IncludeCurrentWeek,
                "completed_weeks_only" => StreakWeekPolicy::CompletedWeeksOnly,
                _ => {
                    return Err(EngineConfigError::InvalidValue(
                        "WEIGHT_ENGINE_STREAK_WEEK_POLICY".into(),
                    ))
                }
            };
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), EngineConfigError> {
        if self.outlier.max_daily_change_kg <= 0.0 {
            return Err(EngineConfigError::ValidationFailed(
                "max_daily_change_kg must be > 0".into(),
            ));
        }

        if self.backfill.patient_backfill_days < 0 {
            return Err(EngineConfigError::ValidationFailed(
                "patient_backfill_days must be >= 0".into(),
            ));
        }

        Ok(())
    }
}
