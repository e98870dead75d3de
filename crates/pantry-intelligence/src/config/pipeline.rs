// ABOUTME: Recipe pipeline configuration for scoring, tie-breaking, and adaptation
// ABOUTME: Loads defaults with PANTRY_* environment overrides and validates them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

//! Recipe Pipeline Configuration
//!
//! Provides the tunable values used by the selection and adaptation pipeline:
//! micro-preference nutrition thresholds, the tie-break window, spice scale
//! factors, and the timing jitter bound for variations. All values can be
//! overridden via environment variables with the `PANTRY_` prefix.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

use super::error::ConfigError;

/// Global configuration singleton
static PIPELINE_CONFIG: OnceLock<PipelineConfig> = OnceLock::new();

/// Recipe pipeline configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Nutrition thresholds for micro-preference scoring and the keto filter
    pub micro_thresholds: MicroThresholds,
    /// Winner selection settings
    pub selection: SelectionConfig,
    /// Adaptation factors
    pub adaptation: AdaptationConfig,
}

/// Nutrition thresholds, per serving
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MicroThresholds {
    /// "low-sodium" matches below this many milligrams
    pub low_sodium_max_mg: u32,
    /// "high-protein" matches above this many grams
    pub high_protein_min_g: u32,
    /// "low-sugar" matches below this many grams
    pub low_sugar_max_g: u32,
    /// "high-fiber" matches above this many grams
    pub high_fiber_min_g: u32,
    /// "low-fat" matches below this many grams
    pub low_fat_max_g: u32,
    /// "low-carb" matches below this many grams
    pub low_carb_max_g: u32,
    /// "low-calorie" matches below this many calories
    pub low_calorie_max_kcal: u32,
    /// Untagged recipes pass the keto filter at or below this many grams of carbs
    pub keto_max_carbs_g: u32,
}

/// Winner selection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// How many equally ranked candidates a random pick may choose from.
    /// A window of 1 makes selection fully deterministic.
    pub tie_break_window: usize,
}

/// Adaptation factors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdaptationConfig {
    /// Quantity multiplier for "spicy"
    pub spicy_scale: f64,
    /// Quantity multiplier for "extra-spicy"
    pub extra_spicy_scale: f64,
    /// Fixed quantity used for spice ingredients at "mild"
    pub mild_quantity: String,
    /// Fixed quantity used for spice ingredients at "none"
    pub no_spice_quantity: String,
    /// Upper bound of the random minutes added to each time field of a variation
    pub max_timing_jitter_minutes: u32,
}

impl Default for MicroThresholds {
    fn default() -> Self {
        Self {
            low_sodium_max_mg: 1500,
            high_protein_min_g: 25,
            low_sugar_max_g: 5,
            high_fiber_min_g: 5,
            low_fat_max_g: 10,
            low_carb_max_g: 20,
            low_calorie_max_kcal: 400,
            keto_max_carbs_g: 20,
        }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            tie_break_window: 3,
        }
    }
}

impl Default for AdaptationConfig {
    fn default() -> Self {
        Self {
            spicy_scale: 1.5,
            extra_spicy_scale: 2.0,
            mild_quantity: "1/2".into(),
            no_spice_quantity: "1/4".into(),
            max_timing_jitter_minutes: 5,
        }
    }
}

impl PipelineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PIPELINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load recipe pipeline config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.selection.tie_break_window == 0 {
            return Err(ConfigError::ValueOutOfRange("tie_break_window must be > 0"));
        }

        let adaptation = &self.adaptation;
        if !adaptation.spicy_scale.is_finite() || adaptation.spicy_scale < 1.0 {
            return Err(ConfigError::ValueOutOfRange("spicy_scale must be >= 1.0"));
        }
        if !adaptation.extra_spicy_scale.is_finite()
            || adaptation.extra_spicy_scale < adaptation.spicy_scale
        {
            return Err(ConfigError::InvalidRange(
                "extra_spicy_scale must be >= spicy_scale",
            ));
        }
        if adaptation.mild_quantity.trim().is_empty()
            || adaptation.no_spice_quantity.trim().is_empty()
        {
            return Err(ConfigError::InvalidRange(
                "reduced spice quantities must not be blank",
            ));
        }
        if adaptation.max_timing_jitter_minutes > 60 {
            return Err(ConfigError::ValueOutOfRange(
                "max_timing_jitter_minutes must be <= 60",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Micro-preference thresholds
        Self::apply_env_var(
            "PANTRY_LOW_SODIUM_MAX_MG",
            &mut self.micro_thresholds.low_sodium_max_mg,
        )?;
        Self::apply_env_var(
            "PANTRY_HIGH_PROTEIN_MIN_G",
            &mut self.micro_thresholds.high_protein_min_g,
        )?;
        Self::apply_env_var(
            "PANTRY_LOW_SUGAR_MAX_G",
            &mut self.micro_thresholds.low_sugar_max_g,
        )?;
        Self::apply_env_var(
            "PANTRY_HIGH_FIBER_MIN_G",
            &mut self.micro_thresholds.high_fiber_min_g,
        )?;
        Self::apply_env_var("PANTRY_LOW_FAT_MAX_G", &mut self.micro_thresholds.low_fat_max_g)?;
        Self::apply_env_var(
            "PANTRY_LOW_CARB_MAX_G",
            &mut self.micro_thresholds.low_carb_max_g,
        )?;
        Self::apply_env_var(
            "PANTRY_LOW_CALORIE_MAX_KCAL",
            &mut self.micro_thresholds.low_calorie_max_kcal,
        )?;
        Self::apply_env_var(
            "PANTRY_KETO_MAX_CARBS_G",
            &mut self.micro_thresholds.keto_max_carbs_g,
        )?;

        // Selection
        Self::apply_env_var(
            "PANTRY_TIE_BREAK_WINDOW",
            &mut self.selection.tie_break_window,
        )?;

        // Adaptation
        Self::apply_env_var("PANTRY_SPICY_SCALE", &mut self.adaptation.spicy_scale)?;
        Self::apply_env_var(
            "PANTRY_EXTRA_SPICY_SCALE",
            &mut self.adaptation.extra_spicy_scale,
        )?;
        Self::apply_env_var(
            "PANTRY_MAX_TIMING_JITTER_MINUTES",
            &mut self.adaptation.max_timing_jitter_minutes,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(PipelineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_tie_break_window_is_rejected() {
        let mut config = PipelineConfig::default();
        config.selection.tie_break_window = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_extra_spicy_must_not_be_milder_than_spicy() {
        let mut config = PipelineConfig::default();
        config.adaptation.extra_spicy_scale = 1.2;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
    }
}
