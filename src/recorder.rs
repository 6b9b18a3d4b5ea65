// ABOUTME: Recording service: the thin creation/mutation path over the core and the store
// ABOUTME: Validates input, derives backfill, runs outlier detection, and gates mutations

//! Recording service.
//!
//! [`WeightRecorder`] is the only stateful-looking surface of the crate and
//! even it holds no mutable state: it wires the pure components to a
//! [`MeasurementStore`](crate::store::MeasurementStore) and applies them in
//! the documented order. The outlier decision happens here, exactly once per
//! entry, against the store's previous-entry snapshot.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::calendar::CalendarClock;
use crate::config::EngineConfig;
use crate::errors::{EngineError, EngineResult};
use crate::intelligence::compliance::{ComplianceStreakCalculator, ComplianceSummary};
use crate::intelligence::moving_average::{MovingAverageCalculator, TrendPoint};
use crate::intelligence::outlier_detection::{AnomalyWarning, OutlierDetector};
use crate::intelligence::statistics::{WeightStatistics, WeightStatisticsEngine};
use crate::models::{validate_weight, NewMeasurement, RecordedBy, WeightMeasurement};
use crate::policy::{EditWindowPolicy, EntryPermissions, WeightEntryPolicy};
use crate::store::MeasurementStore;

/// A freshly recorded measurement plus the warning shown when it was
/// flagged as an outlier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedMeasurement {
    /// The stored measurement.
    pub measurement: WeightMeasurement,
    /// Present iff the measurement was flagged at creation.
    pub warning: Option<AnomalyWarning>,
}

/// Creation and mutation path for weight measurements.
pub struct WeightRecorder<S> {
    store: S,
    config: EngineConfig,
    clock: CalendarClock,
    detector: OutlierDetector,
    policy: WeightEntryPolicy,
    streaks: ComplianceStreakCalculator,
}

impl<S: MeasurementStore> WeightRecorder<S> {
    /// Wire a recorder over a store with the given configuration.
    pub fn new(store: S, config: EngineConfig) -> Self {
        let clock = CalendarClock::new(config.reference_timezone);
        Self {
            store,
            detector: OutlierDetector::new(config.outlier.clone()),
            policy: WeightEntryPolicy::new(EditWindowPolicy::new(clock)),
            streaks: ComplianceStreakCalculator::new(clock, config.streak.week_policy),
            clock,
            config,
        }
    }

    /// Record a new measurement as of `now`.
    ///
    /// Validates weight and, for patient-authored entries, the backfill
    /// window; runs outlier detection against the most recent earlier entry;
    /// appends. The duplicate-date invariant is the store's to enforce.
    pub async fn record(
        &self,
        new: NewMeasurement,
        now: DateTime<Utc>,
    ) -> EngineResult<RecordedMeasurement> {
        validate_weight(new.weight)?;

        let today = self.clock.civil_date(now);
        if new.recorded_by == RecordedBy::Patient {
            self.check_patient_window(new.measurement_date, today)?;
        }

        let previous = self
            .store
            .find_latest_before(new.subject_id, new.measurement_date)
            .await?;
        let assessment =
            self.detector
                .evaluate(new.weight, new.measurement_date, previous.as_ref());

        let measurement = WeightMeasurement {
            id: Uuid::new_v4(),
            subject_id: new.subject_id,
            weight: new.weight,
            measurement_date: new.measurement_date,
            recorded_by: new.recorded_by,
            is_backfill: new.measurement_date != today,
            is_outlier: assessment.is_outlier,
            outlier_confirmed: None,
            note: new.note,
            created_at: now,
            updated_at: now,
        };

        let stored = self.store.append(measurement).await?;
        info!(
            subject_id = %stored.subject_id,
            date = %stored.measurement_date,
            outlier = stored.is_outlier,
            backfill = stored.is_backfill,
            "recorded weight measurement"
        );

        Ok(RecordedMeasurement {
            measurement: stored,
            warning: assessment.warning,
        })
    }

    /// Update a measurement's weight and note while its edit window is open.
    /// The outlier flag is never revisited on edit.
    pub async fn update_measurement(
        &self,
        id: Uuid,
        weight: f64,
        note: Option<String>,
        now: DateTime<Utc>,
    ) -> EngineResult<WeightMeasurement> {
        let mut entry = self.require(id).await?;
        self.check_mutable(&entry, now)?;
        validate_weight(weight)?;

        entry.weight = weight;
        if note.is_some() {
            entry.note = note;
        }
        entry.updated_at = now;
        self.store.update(entry).await
    }

    /// Delete a measurement while its edit window is open.
    pub async fn delete_measurement(&self, id: Uuid, now: DateTime<Utc>) -> EngineResult<()> {
        let entry = self.require(id).await?;
        self.check_mutable(&entry, now)?;
        debug!(measurement_id = %id, "deleting weight measurement");
        self.store.delete(id).await
    }

    /// Set or clear the subject's outlier acknowledgment. Available for
    /// flagged entries only, with no time restriction.
    pub async fn set_outlier_confirmation(
        &self,
        id: Uuid,
        confirmed: Option<bool>,
        now: DateTime<Utc>,
    ) -> EngineResult<WeightMeasurement> {
        let mut entry = self.require(id).await?;
        if !WeightEntryPolicy::can_toggle_outlier_confirmation(&entry) {
            return Err(EngineError::permission_denied(
                "outlier confirmation is only available for flagged entries",
            ));
        }
        entry.outlier_confirmed = confirmed;
        entry.updated_at = now;
        self.store.update(entry).await
    }

    /// Permissions for one measurement at `now`.
    pub async fn permissions(&self, id: Uuid, now: DateTime<Utc>) -> EngineResult<EntryPermissions> {
        let entry = self.require(id).await?;
        Ok(self.policy.permissions(&entry, now))
    }

    /// Period statistics over a subject's series, optionally bounded.
    pub async fn statistics(
        &self,
        subject_id: Uuid,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> EngineResult<WeightStatistics> {
        let series = self.store.list_ordered(subject_id, range).await?;
        Ok(WeightStatisticsEngine::summarize(&series))
    }

    /// Charting payload (raw weights plus MA7 curve), optionally bounded.
    pub async fn trend_points(
        &self,
        subject_id: Uuid,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> EngineResult<Vec<TrendPoint>> {
        let series = self.store.list_ordered(subject_id, range).await?;
        Ok(MovingAverageCalculator::trend_points(&series))
    }

    /// Weekly-compliance KPIs over a subject's full history as of `now`.
    pub async fn compliance(
        &self,
        subject_id: Uuid,
        now: DateTime<Utc>,
    ) -> EngineResult<ComplianceSummary> {
        let series = self.store.list_ordered(subject_id, None).await?;
        Ok(self.streaks.compute(&series, now))
    }

    fn check_patient_window(&self, date: NaiveDate, today: NaiveDate) -> EngineResult<()> {
        let earliest = today - Duration::days(self.config.backfill.patient_backfill_days);
        if date < earliest || date > today {
            return Err(EngineError::DateOutOfWindow {
                date,
                earliest,
                latest: today,
            });
        }
        Ok(())
    }

    fn check_mutable(&self, entry: &WeightMeasurement, now: DateTime<Utc>) -> EngineResult<()> {
        if entry.recorded_by != RecordedBy::Patient {
            return Err(EngineError::permission_denied(
                "caregiver-authored entries are not patient-mutable",
            ));
        }
        if !self.policy.can_mutate(entry, now) {
            return Err(EngineError::permission_denied("edit window has closed"));
        }
        Ok(())
    }

    async fn require(&self, id: Uuid) -> EngineResult<WeightMeasurement> {
        self.store
            .get(id)
            .await?
            .ok_or(EngineError::MeasurementNotFound { id })
    }
}
