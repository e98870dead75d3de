// ABOUTME: Service-level configuration for deadlines, simulated latency, and catalog source
// ABOUTME: Loads PANTRY_* environment variables on top of the pipeline configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

use pantry_core::constants::service;
use pantry_core::errors::AppResult;
use pantry_intelligence::PipelineConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// Configuration for the recipe service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// How long a caller waits for a recipe before giving up, in milliseconds
    pub request_timeout_ms: u64,
    /// Artificial delay before each generation, in milliseconds
    pub simulated_latency_ms: u64,
    /// JSON catalog to load instead of the built-in one
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    /// Selection and adaptation tuning
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: service::DEFAULT_REQUEST_TIMEOUT_MS,
            simulated_latency_ms: service::DEFAULT_SIMULATED_LATENCY_MS,
            catalog_path: None,
            pipeline: PipelineConfig::default(),
        }
    }
}

fn millis_from_env(key: &str, default: u64) -> u64 {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, default, "Ignoring unparsable duration");
            default
        }),
        Err(_) => default,
    }
}

impl ServiceConfig {
    /// Load service configuration from environment
    ///
    /// Unparsable durations fall back to their defaults with a warning. A zero
    /// request timeout is treated as unset.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the pipeline overrides are invalid
    pub fn from_env() -> AppResult<Self> {
        let request_timeout_ms = match millis_from_env(
            "PANTRY_REQUEST_TIMEOUT_MS",
            service::DEFAULT_REQUEST_TIMEOUT_MS,
        ) {
            0 => service::DEFAULT_REQUEST_TIMEOUT_MS,
            ms => ms,
        };

        Ok(Self {
            request_timeout_ms,
            simulated_latency_ms: millis_from_env(
                "PANTRY_SIMULATED_LATENCY_MS",
                service::DEFAULT_SIMULATED_LATENCY_MS,
            ),
            catalog_path: env::var("PANTRY_CATALOG_PATH")
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            pipeline: PipelineConfig::load()?,
        })
    }

    /// Caller deadline
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Simulated generation latency
    #[must_use]
    pub const fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }

    /// Set the caller deadline
    #[must_use]
    pub const fn with_request_timeout_ms(mut self, ms: u64) -> Self {
        self.request_timeout_ms = ms;
        self
    }

    /// Set the simulated latency
    #[must_use]
    pub const fn with_simulated_latency_ms(mut self, ms: u64) -> Self {
        self.simulated_latency_ms = ms;
        self
    }
}
