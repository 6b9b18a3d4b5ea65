// ABOUTME: Weight tracking analytics and compliance engine for dietitian-supervised care
// ABOUTME: Pure calculations over measurement series; persistence and auth live in the host
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Ponderal Health

#![deny(unsafe_code)]

//! # Ponderal
//!
//! Analytics core for longitudinal body-weight tracking under dietitian
//! supervision. The crate turns a raw sequence of weight measurements into:
//!
//! - anomaly flags at entry time ([`intelligence::OutlierDetector`])
//! - smoothed trend series and period statistics for charting
//!   ([`intelligence::MovingAverageCalculator`],
//!   [`intelligence::WeightStatisticsEngine`])
//! - weekly-compliance streaks for coaching KPIs
//!   ([`intelligence::ComplianceStreakCalculator`])
//! - a timezone-aware mutability policy for edits and deletes
//!   ([`policy::WeightEntryPolicy`])
//!
//! Every date decision happens in one fixed reference timezone through
//! [`calendar::CalendarClock`], so edit windows and weekly partitions are
//! reproducible regardless of where the service runs. All components are
//! pure functions over immutable inputs; the only stateful collaborator is
//! the host-provided [`store::MeasurementStore`].
//!
//! ## Example
//!
//! ```rust
//! use ponderal::intelligence::MovingAverageCalculator;
//!
//! let weights = vec![70.0, 70.5, 71.0, 70.8, 70.3, 70.1, 70.0, 69.8];
//! let curve = MovingAverageCalculator::series(&weights);
//! assert_eq!(curve[6], 70.4);
//! ```

/// Civil date and week arithmetic in the reference timezone.
pub mod calendar;
/// Runtime configuration with environment overrides.
pub mod config;
/// Named threshold constants.
pub mod constants;
/// Structured error types and codes.
pub mod errors;
/// Analytics over measurement series.
pub mod intelligence;
/// Measurement model and validation.
pub mod models;
/// Edit-window and entry-permission policies.
pub mod policy;
/// Recording service wiring the core to a store.
pub mod recorder;
/// Store contract and in-memory reference store.
pub mod store;

pub use calendar::CalendarClock;
pub use config::EngineConfig;
pub use errors::{EngineError, EngineResult, ErrorCode};
pub use models::{NewMeasurement, RecordedBy, TrendDirection, WeightMeasurement};
pub use policy::{EditWindowPolicy, EntryPermissions, WeightEntryPolicy};
pub use recorder::{RecordedMeasurement, WeightRecorder};
pub use store::{InMemoryMeasurementStore, MeasurementStore};
