// ABOUTME: Structured error types for the weight tracking engine
// ABOUTME: Maps every failure to a stable error code the API layer can render upstream
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Ponderal Health

//! Error taxonomy for the engine.
//!
//! The core is pure, so the taxonomy is narrow: validation failures on the
//! creation path, duplicate-date conflicts surfaced by the store, permission
//! denials from the entry policy, and lookups that miss. Statistics and
//! streak computations are total functions and never appear here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Stable error codes exposed to API consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Input failed validation (weight precision, malformed value).
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// Input value is outside the supported range.
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange,
    /// A measurement already exists for the subject and date.
    #[serde(rename = "RESOURCE_ALREADY_EXISTS")]
    ResourceAlreadyExists,
    /// The referenced measurement does not exist.
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound,
    /// The caller is not allowed to perform the mutation.
    #[serde(rename = "PERMISSION_DENIED")]
    PermissionDenied,
    /// Unexpected internal failure (store invariant broken, poisoned lock).
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// HTTP status the API layer should use when rendering this code.
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput | Self::ValueOutOfRange => 400,
            Self::PermissionDenied => 403,
            Self::ResourceNotFound => 404,
            Self::ResourceAlreadyExists => 409,
            Self::InternalError => 500,
        }
    }
}

/// Errors produced by the engine and its creation/mutation path.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Weight outside the supported range.
    #[error("weight {value} kg is outside the supported range {min}..={max} kg")]
    WeightOutOfRange {
        /// Offending value.
        value: f64,
        /// Lower bound of the accepted range.
        min: f64,
        /// Upper bound of the accepted range.
        max: f64,
    },

    /// Weight carries more than one fractional digit.
    #[error("weight {value} kg must have at most one decimal place")]
    WeightPrecision {
        /// Offending value.
        value: f64,
    },

    /// Measurement date outside the window allowed for the author.
    #[error("measurement date {date} is outside the allowed window {earliest}..={latest}")]
    DateOutOfWindow {
        /// Requested measurement date.
        date: NaiveDate,
        /// Earliest date the author may record.
        earliest: NaiveDate,
        /// Latest date the author may record.
        latest: NaiveDate,
    },

    /// A measurement for this subject and civil date already exists.
    #[error("subject {subject_id} already has a measurement for {date}")]
    DuplicateMeasurement {
        /// Subject owning the conflicting measurement.
        subject_id: Uuid,
        /// Conflicting civil date.
        date: NaiveDate,
    },

    /// The referenced measurement does not exist.
    #[error("measurement {id} not found")]
    MeasurementNotFound {
        /// Requested measurement id.
        id: Uuid,
    },

    /// The requested mutation is not permitted.
    #[error("permission denied: {reason}")]
    PermissionDenied {
        /// Which policy check failed.
        reason: String,
    },

    /// Unexpected internal failure.
    #[error("internal error: {message}")]
    Internal {
        /// Diagnostic detail.
        message: String,
    },
}

impl EngineError {
    /// Stable code for this error, for upstream rendering.
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::WeightOutOfRange { .. } | Self::DateOutOfWindow { .. } => {
                ErrorCode::ValueOutOfRange
            }
            Self::WeightPrecision { .. } => ErrorCode::InvalidInput,
            Self::DuplicateMeasurement { .. } => ErrorCode::ResourceAlreadyExists,
            Self::MeasurementNotFound { .. } => ErrorCode::ResourceNotFound,
            Self::PermissionDenied { .. } => ErrorCode::PermissionDenied,
            Self::Internal { .. } => ErrorCode::InternalError,
        }
    }

    /// Convenience constructor for permission denials.
    pub fn permission_denied(reason: impl Into<String>) -> Self {
        Self::PermissionDenied {
            reason: reason.into(),
        }
    }

    /// Convenience constructor for internal failures.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Result alias used across the engine.
pub type EngineResult<T> = Result<T, EngineError>;
