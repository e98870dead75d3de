// ABOUTME: End-to-end recipe flows built from the pipeline components
// ABOUTME: Filter, select, adapt, merge, and stamp for suggestions and variations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

use pantry_core::errors::{AppError, AppResult};
use pantry_core::models::{ConstraintSet, Recipe};
use rand::Rng;
use tracing::{info, warn};

use crate::adaptation::allergens::is_removal_warning;
use crate::adaptation::{merge_ingredients, AdaptationEngine};
use crate::catalog::RecipeCatalog;
use crate::config::PipelineConfig;
use crate::identity::{IdentityAssigner, StampMode};
use crate::parsing::contains_any;
use crate::pipeline::{CandidatePool, ConstraintPipeline, RelaxationNote, ScoringSelector};

/// Outcome of filtering and ranking a catalog
#[derive(Debug, Clone)]
pub enum Selection<'a> {
    /// A catalog recipe won
    Selected {
        /// The winning catalog entry, unmodified
        recipe: &'a Recipe,
        /// Soft constraints skipped along the way
        relaxed: Vec<RelaxationNote>,
    },
    /// Nothing in the catalog is safe for the declared allergies
    SafetyExhausted {
        /// Soft constraints skipped before the allergy stage emptied the pool
        relaxed: Vec<RelaxationNote>,
    },
}

/// Filter, select, adapt, and stamp recipes
#[derive(Debug, Clone, Default)]
pub struct RecipeEngine {
    pipeline: ConstraintPipeline,
    selector: ScoringSelector,
    adapter: AdaptationEngine,
}

/// Check that a recipe is fit to adapt
fn check_recipe(recipe: &Recipe) -> Result<(), String> {
    if recipe.title.trim().is_empty() {
        return Err("recipe has a blank title".to_owned());
    }
    if recipe.servings == 0 {
        return Err(format!("recipe '{}' has zero servings", recipe.title));
    }
    Ok(())
}

/// Final allergy check on a recipe about to be returned
fn ensure_allergy_safe(recipe: &Recipe, allergies: &[String]) -> AppResult<()> {
    let offending = recipe
        .ingredients
        .iter()
        .find(|line| !is_removal_warning(line) && contains_any(line, allergies));

    match offending {
        Some(line) => Err(AppError::generation(format!(
            "adapted recipe '{}' still contains a declared allergen: {line}",
            recipe.title
        ))),
        None => Ok(()),
    }
}

impl RecipeEngine {
    /// Engine using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(PipelineConfig::global())
    }

    /// Engine using an explicit configuration
    #[must_use]
    pub fn with_config(config: &PipelineConfig) -> Self {
        Self {
            pipeline: ConstraintPipeline::with_config(config),
            selector: ScoringSelector::with_config(config),
            adapter: AdaptationEngine::with_config(config),
        }
    }

    /// Filter `candidates` and pick a winner
    pub fn select<'a, R: Rng>(
        &self,
        candidates: &'a [Recipe],
        user_ingredients: &[String],
        constraints: &ConstraintSet,
        rng: &mut R,
    ) -> Selection<'a> {
        let outcome = self
            .pipeline
            .filter(CandidatePool::from_slice(candidates), constraints);

        match self.selector.select(
            &outcome.pool,
            user_ingredients,
            &constraints.micro_preferences,
            rng,
        ) {
            Some(recipe) => Selection::Selected {
                recipe,
                relaxed: outcome.relaxed,
            },
            None => Selection::SafetyExhausted {
                relaxed: outcome.relaxed,
            },
        }
    }

    /// Suggest a recipe from `catalog` for the user's ingredients
    ///
    /// Returns the safety placeholder when no catalog recipe is free of the
    /// declared allergies.
    ///
    /// # Errors
    ///
    /// Returns a generation error when the catalog is empty, when the winning
    /// recipe is malformed, or when the adapted result would contain an
    /// allergen.
    pub fn generate<C, R>(
        &self,
        catalog: &C,
        user_ingredients: &[String],
        constraints: &ConstraintSet,
        rng: &mut R,
    ) -> AppResult<Recipe>
    where
        C: RecipeCatalog + ?Sized,
        R: Rng,
    {
        let candidates = catalog.list_candidates();
        if candidates.is_empty() {
            return Err(AppError::generation("recipe catalog is empty"));
        }

        let (selected, relaxed) =
            match self.select(candidates, user_ingredients, constraints, rng) {
                Selection::Selected { recipe, relaxed } => (recipe, relaxed),
                Selection::SafetyExhausted { relaxed } => {
                    warn!(
                        allergies = constraints.allergies.len(),
                        relaxed = relaxed.len(),
                        "No allergy-safe recipe in catalog, returning placeholder"
                    );
                    let placeholder = Recipe::safety_placeholder(user_ingredients);
                    return Ok(IdentityAssigner::stamp(placeholder, StampMode::Fresh));
                }
            };

        check_recipe(selected).map_err(AppError::generation)?;

        let mut adapted = self.adapter.adapt(
            selected.clone(),
            constraints.spice_level,
            constraints.portion_size,
            &constraints.allergies,
        );
        adapted.ingredients = merge_ingredients(user_ingredients, adapted.ingredients);
        let stamped = IdentityAssigner::stamp(adapted, StampMode::Fresh);
        ensure_allergy_safe(&stamped, &constraints.allergies)?;

        info!(
            title = %stamped.title,
            servings = stamped.servings,
            relaxed = relaxed.len(),
            "Generated recipe"
        );
        Ok(stamped)
    }

    /// Adapt the caller's own recipe into a variation
    ///
    /// # Errors
    ///
    /// Returns a validation error when `original` has a blank title or zero
    /// servings, and a generation error when the result would contain an
    /// allergen.
    pub fn vary<R: Rng>(
        &self,
        original: Recipe,
        user_ingredients: &[String],
        constraints: &ConstraintSet,
        rng: &mut R,
    ) -> AppResult<Recipe> {
        check_recipe(&original).map_err(AppError::invalid_input)?;

        let mut varied = self.adapter.vary(original, constraints, rng);
        varied.ingredients = merge_ingredients(user_ingredients, varied.ingredients);
        let stamped = IdentityAssigner::stamp(varied, StampMode::Variation);
        ensure_allergy_safe(&stamped, &constraints.allergies)?;

        info!(
            title = %stamped.title,
            servings = stamped.servings,
            "Generated variation"
        );
        Ok(stamped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use pantry_core::errors::ErrorKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn engine() -> RecipeEngine {
        RecipeEngine::with_config(&PipelineConfig::default())
    }

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_empty_catalog_is_a_generation_error() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = engine()
            .generate(
                &InMemoryCatalog::default(),
                &owned(&["rice"]),
                &ConstraintSet::default(),
                &mut rng,
            )
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Generation);
    }

    #[test]
    fn test_malformed_winner_is_a_generation_error() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let catalog = InMemoryCatalog::new(vec![Recipe::new("Broken", 0)]);
        let err = engine()
            .generate(&catalog, &owned(&["rice"]), &ConstraintSet::default(), &mut rng)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Generation);
    }

    #[test]
    fn test_safety_exhaustion_returns_placeholder() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let catalog = InMemoryCatalog::new(vec![
            Recipe::new("Custard", 4).with_ingredients(["2 cups milk", "3 eggs"]),
        ]);
        let constraints = ConstraintSet::default().with_allergies(["milk"]);
        let recipe = engine()
            .generate(&catalog, &owned(&["sugar"]), &constraints, &mut rng)
            .unwrap();

        assert!(recipe.is_safety_placeholder());
        assert_eq!(recipe.servings, 1);
        assert_eq!(recipe.ingredients, owned(&["sugar"]));
        assert!(recipe.id.is_some());
    }

    #[test]
    fn test_user_allergen_is_caught_by_final_check() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let catalog = InMemoryCatalog::new(vec![
            Recipe::new("Rice", 2).with_ingredients(["1 cup rice"]),
        ]);
        let constraints = ConstraintSet::default().with_allergies(["peanut"]);
        let err = engine()
            .generate(&catalog, &owned(&["peanuts"]), &constraints, &mut rng)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Generation);
    }

    #[test]
    fn test_vary_rejects_blank_title() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = engine()
            .vary(
                Recipe::new("  ", 2),
                &owned(&["rice"]),
                &ConstraintSet::default(),
                &mut rng,
            )
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
}
