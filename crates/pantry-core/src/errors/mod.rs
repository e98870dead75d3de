// ABOUTME: Unified error handling for the recipe selection pipeline and service
// ABOUTME: Defines ErrorCode, AppError, and the AppResult alias used across crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

//! # Unified Error Handling
//!
//! Every fallible operation in the workspace returns [`AppResult`]. Errors carry
//! an [`ErrorCode`] that groups them into the kinds callers care about:
//! validation problems are surfaced immediately, generation failures signal an
//! internal inconsistency, and network/timeout errors belong to the layer that
//! invokes the pipeline but share the same shape.
//!
//! Running out of allergy-safe recipes is deliberately not an error; the
//! service returns a displayable placeholder recipe instead.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::io;
use thiserror::Error;

/// Broad category of an error, used for retry and reporting decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Caller supplied bad input; never retried
    Validation,
    /// The pipeline hit an internal inconsistency
    Generation,
    /// Transport failure in the calling layer
    Network,
    /// The caller's wait exceeded its deadline
    Timeout,
    /// Configuration could not be loaded or failed validation
    Configuration,
    /// Anything else
    Internal,
}

/// Standard error codes used throughout the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required input was not provided
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,

    // Generation (4000-4999)
    /// The pipeline could not produce a recipe from otherwise valid input
    #[serde(rename = "GENERATION_FAILED")]
    GenerationFailed = 4000,

    // External (5000-5999)
    /// Transport failure between the caller and the pipeline
    #[serde(rename = "NETWORK_ERROR")]
    NetworkError = 5000,
    /// The caller stopped waiting for a result
    #[serde(rename = "TIMEOUT")]
    Timeout = 5001,

    // Configuration (6000-6999)
    /// Configuration is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6000,

    // Internal (9000-9999)
    /// Unexpected internal error
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Data could not be serialized or deserialized
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9001,
}

impl ErrorCode {
    /// Get the error kind this code belongs to
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput | Self::MissingRequiredField => ErrorKind::Validation,
            Self::GenerationFailed => ErrorKind::Generation,
            Self::NetworkError => ErrorKind::Network,
            Self::Timeout => ErrorKind::Timeout,
            Self::ConfigInvalid => ErrorKind::Configuration,
            Self::InternalError | Self::SerializationError => ErrorKind::Internal,
        }
    }

    /// Get a user-facing description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::GenerationFailed => "The recipe could not be generated",
            Self::NetworkError => "The recipe service could not be reached",
            Self::Timeout => "The recipe service did not respond in time",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the workspace
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the kind of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.code.kind()
    }

    /// Whether the calling layer may retry the operation
    ///
    /// Only transport-level failures are retryable; the pipeline itself is
    /// deterministic for a given seed, so retrying it cannot change the outcome.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self.code.kind(), ErrorKind::Network | ErrorKind::Timeout)
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Missing required input
    #[must_use]
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("{field} is required"),
        )
    }

    /// Generation failure
    #[must_use]
    pub fn generation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::GenerationFailed, message)
    }

    /// Network failure in the calling layer
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NetworkError, message)
    }

    /// Caller deadline elapsed
    #[must_use]
    pub fn timeout(operation: &str, after_ms: u64) -> Self {
        Self::new(
            ErrorCode::Timeout,
            format!("{operation} timed out after {after_ms}ms"),
        )
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::internal(error.to_string()).with_source(error)
    }
}

/// Conversion from `anyhow::Error` at binary edges
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        let message = format!("{error:#}");
        match error.downcast::<Self>() {
            Ok(app_error) => app_error,
            Err(_) => Self::internal(message),
        }
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
