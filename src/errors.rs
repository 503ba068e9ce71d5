// ABOUTME: Unified error handling for the Lishe nutrition engine
// ABOUTME: Defines AppError, ErrorCode taxonomy, and the AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lishe Health

//! # Unified Error Handling
//!
//! This module provides the centralized error types used across the engine.
//! The taxonomy is deliberately small: per-request input problems surface as
//! [`ErrorCode::InvalidMeasurement`], malformed reference data surfaces as
//! [`ErrorCode::DataIntegrity`] at load time, and everything else falls under
//! configuration or internal errors. Soft degradations (unresolved location,
//! empty food group, missing nutrition facts) are never errors.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Out-of-range or unrecognized measurement input
    #[serde(rename = "INVALID_MEASUREMENT")]
    InvalidMeasurement,
    /// Malformed or ambiguous static reference data (load-time only)
    #[serde(rename = "DATA_INTEGRITY")]
    DataIntegrity,
    /// Invalid engine configuration
    #[serde(rename = "CONFIG_ERROR")]
    Config,
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    Internal,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidMeasurement => "The provided measurement is invalid",
            Self::DataIntegrity => "Reference data failed integrity validation",
            Self::Config => "Configuration error encountered",
            Self::Internal => "An internal error occurred",
        }
    }
}

/// Unified error type for the engine
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid measurement input
    pub fn invalid_measurement(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidMeasurement, message)
    }

    /// Reference data integrity violation
    pub fn data_integrity(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DataIntegrity, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Config, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
