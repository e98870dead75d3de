// ABOUTME: Post-selection recipe adaptation for spice level, allergens, portions, and timing
// ABOUTME: Every transform takes a recipe by value and returns the adapted copy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

//! Adaptation never touches the catalog. Callers hand over an owned `Recipe`
//! (usually a clone of the selected catalog entry) and get a new one back.
//!
//! - [`AdaptationEngine::adapt`]: spice level and portion size
//! - [`AdaptationEngine::vary`]: allergen substitution, then `adapt`, then
//!   timing jitter

/// Allergen substitution table and rewriting
pub mod allergens;
/// Spice level rewriting
pub mod spice;
mod timing;

use pantry_core::models::{ConstraintSet, PortionSize, Recipe, SpiceLevel};
use rand::Rng;
use tracing::debug;

use crate::adaptation::allergens::is_removal_warning;
use crate::config::{AdaptationConfig, PipelineConfig};

/// Serving count for `portion`, rounded and never below one
#[must_use]
pub fn scale_servings(servings: u32, portion: PortionSize) -> u32 {
    let scaled = (f64::from(servings) * portion.scale_factor()).round();
    if scaled < 1.0 {
        1
    } else {
        scaled as u32
    }
}

/// User ingredients first and verbatim, then recipe ingredients not already present
///
/// Duplicates are detected case-insensitively after trimming. Removal
/// warnings are kept one per removed ingredient.
#[must_use]
pub fn merge_ingredients(user_ingredients: &[String], recipe_ingredients: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(user_ingredients.len() + recipe_ingredients.len());
    let mut merged = Vec::with_capacity(seen.capacity());

    for line in user_ingredients.iter().cloned().chain(recipe_ingredients) {
        if is_removal_warning(&line) {
            merged.push(line);
            continue;
        }
        let key = line.trim().to_lowercase();
        if key.is_empty() || seen.contains(&key) {
            continue;
        }
        seen.push(key);
        merged.push(line);
    }
    merged
}

/// Rewrites recipes to match the caller's preferences
#[derive(Debug, Clone, Default)]
pub struct AdaptationEngine {
    config: AdaptationConfig,
}

impl AdaptationEngine {
    /// Engine using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(PipelineConfig::global())
    }

    /// Engine using an explicit configuration
    #[must_use]
    pub fn with_config(config: &PipelineConfig) -> Self {
        Self {
            config: config.adaptation.clone(),
        }
    }

    /// Apply spice level and portion size
    ///
    /// `allergies` only constrain the heat ingredients this step may add.
    #[must_use]
    pub fn adapt(
        &self,
        recipe: Recipe,
        spice_level: SpiceLevel,
        portion_size: PortionSize,
        allergies: &[String],
    ) -> Recipe {
        let mut adapted = spice::apply(recipe, spice_level, allergies, &self.config);
        let servings = scale_servings(adapted.servings, portion_size);
        debug!(
            title = %adapted.title,
            spice_level = %spice_level,
            from = adapted.servings,
            to = servings,
            "Adapted recipe"
        );
        adapted.servings = servings;
        adapted
    }

    /// Swap out ingredients matching declared allergies
    #[must_use]
    pub fn substitute_allergens(recipe: Recipe, allergies: &[String]) -> Recipe {
        allergens::apply(recipe, allergies)
    }

    /// Nudge prep, cook, and total time by a few random minutes
    #[must_use]
    pub fn jitter_timing<R: Rng>(&self, recipe: Recipe, rng: &mut R) -> Recipe {
        timing::apply(recipe, self.config.max_timing_jitter_minutes, rng)
    }

    /// Turn an existing recipe into a variation for `constraints`
    #[must_use]
    pub fn vary<R: Rng>(&self, recipe: Recipe, constraints: &ConstraintSet, rng: &mut R) -> Recipe {
        let substituted = Self::substitute_allergens(recipe, &constraints.allergies);
        let adapted = self.adapt(
            substituted,
            constraints.spice_level,
            constraints.portion_size,
            &constraints.allergies,
        );
        self.jitter_timing(adapted, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_portion_scaling() {
        assert_eq!(scale_servings(2, PortionSize::Single), 1);
        assert_eq!(scale_servings(2, PortionSize::Couple), 2);
        assert_eq!(scale_servings(2, PortionSize::Family), 4);
        assert_eq!(scale_servings(2, PortionSize::LargeGroup), 8);
        assert_eq!(scale_servings(1, PortionSize::Single), 1);
        assert_eq!(scale_servings(3, PortionSize::Single), 2);
    }

    #[test]
    fn test_portion_monotonic_and_positive() {
        for servings in 1..=12 {
            let sizes = [
                PortionSize::Single,
                PortionSize::Couple,
                PortionSize::Family,
                PortionSize::LargeGroup,
            ]
            .map(|p| scale_servings(servings, p));
            assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
            assert!(sizes.iter().all(|s| *s >= 1));
        }
    }

    #[test]
    fn test_merge_puts_user_first_and_dedupes() {
        let merged = merge_ingredients(
            &owned(&["Chicken", "garlic"]),
            owned(&["chicken", "2 cups broccoli", "Garlic "]),
        );
        assert_eq!(merged, owned(&["Chicken", "garlic", "2 cups broccoli"]));
    }

    #[test]
    fn test_merge_keeps_each_removal_warning() {
        let merged = merge_ingredients(
            &owned(&["rice"]),
            vec![
                allergens::REMOVAL_WARNING.to_owned(),
                "1 onion".to_owned(),
                allergens::REMOVAL_WARNING.to_owned(),
            ],
        );
        assert_eq!(merged.len(), 4);
        assert_eq!(
            merged.iter().filter(|line| is_removal_warning(line)).count(),
            2
        );
    }

    #[test]
    fn test_vary_applies_every_step() {
        let engine = AdaptationEngine::with_config(&PipelineConfig::default());
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let recipe = Recipe::new("Mac and Cheese", 2)
            .with_prep_time("10 min")
            .with_ingredients(["2 cups macaroni", "1 cup milk", "1 tsp paprika"]);
        let constraints = ConstraintSet::default()
            .with_allergies(["milk"])
            .with_spice_level(SpiceLevel::Mild)
            .with_portion_size(PortionSize::Family);

        let varied = engine.vary(recipe, &constraints, &mut rng);

        assert_eq!(varied.servings, 4);
        assert_eq!(varied.ingredients[1], "1 cup oat beverage");
        assert_eq!(varied.ingredients[2], "1/2 tsp paprika (reduced for mild heat)");
        assert_ne!(varied.prep_time.as_deref(), Some("10 min"));
    }
}
