// ABOUTME: Measurement store contract consumed by the engine, plus an in-memory reference store
// ABOUTME: Persistence lives outside the core; this trait is the seam the host implements

//! Store contract.
//!
//! The engine never persists anything itself. Hosts implement
//! [`MeasurementStore`] over their database; [`InMemoryMeasurementStore`] is
//! the reference implementation used by the test suite. Implementations must
//! give the recording path a consistent snapshot for the previous-entry read
//! (a transactional read), so concurrent creations for one subject cannot
//! both skip or double-count outlier detection.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::errors::{EngineError, EngineResult};
use crate::models::WeightMeasurement;

/// Ordered persistence for weight measurements.
#[async_trait]
pub trait MeasurementStore: Send + Sync {
    /// Append a measurement. Fails with
    /// [`EngineError::DuplicateMeasurement`] if the subject already has an
    /// entry for the same civil date.
    async fn append(&self, measurement: WeightMeasurement) -> EngineResult<WeightMeasurement>;

    /// Fetch a measurement by id.
    async fn get(&self, id: Uuid) -> EngineResult<Option<WeightMeasurement>>;

    /// The most recent measurement for `subject_id` dated strictly before
    /// `date`, if any.
    async fn find_latest_before(
        &self,
        subject_id: Uuid,
        date: NaiveDate,
    ) -> EngineResult<Option<WeightMeasurement>>;

    /// All measurements for a subject ordered ascending by measurement
    /// date, optionally bounded to an inclusive date range.
    async fn list_ordered(
        &self,
        subject_id: Uuid,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> EngineResult<Vec<WeightMeasurement>>;

    /// Replace a stored measurement.
    async fn update(&self, measurement: WeightMeasurement) -> EngineResult<WeightMeasurement>;

    /// Delete a measurement by id.
    async fn delete(&self, id: Uuid) -> EngineResult<()>;
}

/// In-memory store backing the test suite.
#[derive(Debug, Default)]
pub struct InMemoryMeasurementStore {
    entries: RwLock<HashMap<Uuid, WeightMeasurement>>,
}

impl InMemoryMeasurementStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MeasurementStore for InMemoryMeasurementStore {
    async fn append(&self, measurement: WeightMeasurement) -> EngineResult<WeightMeasurement> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let conflict = entries.values().any(|m| {
            m.subject_id == measurement.subject_id
                && m.measurement_date == measurement.measurement_date
        });
        if conflict {
            return Err(EngineError::DuplicateMeasurement {
                subject_id: measurement.subject_id,
                date: measurement.measurement_date,
            });
        }
        entries.insert(measurement.id, measurement.clone());
        Ok(measurement)
    }

    async fn get(&self, id: Uuid) -> EngineResult<Option<WeightMeasurement>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(&id).cloned())
    }

    async fn find_latest_before(
        &self,
        subject_id: Uuid,
        date: NaiveDate,
    ) -> EngineResult<Option<WeightMeasurement>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        Ok(entries
            .values()
            .filter(|m| m.subject_id == subject_id && m.measurement_date < date)
            .max_by_key(|m| m.measurement_date)
            .cloned())
    }

    async fn list_ordered(
        &self,
        subject_id: Uuid,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> EngineResult<Vec<WeightMeasurement>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let mut series: Vec<WeightMeasurement> = entries
            .values()
            .filter(|m| m.subject_id == subject_id)
            .filter(|m| {
                range.is_none_or(|(from, to)| {
                    m.measurement_date >= from && m.measurement_date <= to
                })
            })
            .cloned()
            .collect();
        series.sort_by_key(|m| m.measurement_date);
        Ok(series)
    }

    async fn update(&self, measurement: WeightMeasurement) -> EngineResult<WeightMeasurement> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if !entries.contains_key(&measurement.id) {
            return Err(EngineError::MeasurementNotFound { id: measurement.id });
        }
        entries.insert(measurement.id, measurement.clone());
        Ok(measurement)
    }

    async fn delete(&self, id: Uuid) -> EngineResult<()> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries
            .remove(&id)
            .map(|_| ())
            .ok_or(EngineError::MeasurementNotFound { id })
    }
}
