// ABOUTME: Configuration module for pantry-intelligence crate
// ABOUTME: Re-exports pipeline configuration and error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

/// Configuration error types
pub mod error;
/// Pipeline thresholds, tie-breaking, and adaptation factors
pub mod pipeline;

pub use error::ConfigError;
pub use pipeline::{AdaptationConfig, MicroThresholds, PipelineConfig, SelectionConfig};
