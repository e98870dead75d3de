// ABOUTME: Multi-stage constraint pipeline narrowing the recipe catalog to candidates
// ABOUTME: Runs each active stage under relaxation supervision and reports what was relaxed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

mod relaxation;
mod selector;
/// Individual filter stages and their matching rules
pub mod stages;

pub use relaxation::{RelaxationController, RelaxationNote};
pub use selector::{ScoreRecord, ScoringSelector};
pub use stages::ConstraintKind;

use std::iter::Copied;
use std::slice;

use pantry_core::models::{ConstraintSet, Recipe};
use tracing::debug;

use crate::config::{MicroThresholds, PipelineConfig};

/// Ordered view over catalog recipes
///
/// Holds shared references only; narrowing a pool never touches the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidatePool<'a> {
    recipes: Vec<&'a Recipe>,
}

impl<'a> CandidatePool<'a> {
    /// Pool containing every recipe of `recipes`, in order
    #[must_use]
    pub fn from_slice(recipes: &'a [Recipe]) -> Self {
        recipes.iter().collect()
    }

    /// Number of candidates
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether no candidates remain
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Iterate candidates in pool order
    pub fn iter(&self) -> impl Iterator<Item = &'a Recipe> + '_ {
        self.recipes.iter().copied()
    }

    /// Candidates as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[&'a Recipe] {
        &self.recipes
    }

    /// New pool with the candidates that satisfy `keep`, order preserved
    #[must_use]
    pub fn filtered<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&Recipe) -> bool,
    {
        self.iter().filter(|recipe| keep(*recipe)).collect()
    }
}

impl<'p, 'a> IntoIterator for &'p CandidatePool<'a> {
    type Item = &'a Recipe;
    type IntoIter = Copied<slice::Iter<'p, &'a Recipe>>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter().copied()
    }
}

impl<'a> FromIterator<&'a Recipe> for CandidatePool<'a> {
    fn from_iter<I: IntoIterator<Item = &'a Recipe>>(iter: I) -> Self {
        Self {
            recipes: iter.into_iter().collect(),
        }
    }
}

/// Result of running the pipeline
#[derive(Debug, Clone)]
pub struct FilterOutcome<'a> {
    /// Surviving candidates; empty only when the allergy stage removed everything
    pub pool: CandidatePool<'a>,
    /// Soft constraints that were skipped because they would have emptied the pool
    pub relaxed: Vec<RelaxationNote>,
}

impl FilterOutcome<'_> {
    /// Whether allergies left nothing to choose from
    #[must_use]
    pub fn is_safety_exhausted(&self) -> bool {
        self.pool.is_empty()
    }
}

/// Priority-ordered filter over a candidate pool
#[derive(Debug, Clone, Default)]
pub struct ConstraintPipeline {
    thresholds: MicroThresholds,
}

impl ConstraintPipeline {
    /// Pipeline using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(PipelineConfig::global())
    }

    /// Pipeline using an explicit configuration
    #[must_use]
    pub fn with_config(config: &PipelineConfig) -> Self {
        Self {
            thresholds: config.micro_thresholds.clone(),
        }
    }

    /// Narrow `pool` by every active constraint in priority order
    ///
    /// Soft stages that would eliminate every candidate are rolled back. The
    /// allergy stage is never rolled back; if it empties the pool the run ends
    /// immediately with an empty pool.
    #[must_use]
    pub fn filter<'a>(
        &self,
        pool: CandidatePool<'a>,
        constraints: &ConstraintSet,
    ) -> FilterOutcome<'a> {
        let mut controller = RelaxationController::new();
        let mut pool = pool;

        for kind in ConstraintKind::PIPELINE_ORDER {
            if !kind.is_active(constraints) {
                continue;
            }

            pool = controller.apply_stage(pool, kind, |current| {
                stages::apply(kind, current, constraints, &self.thresholds)
            });
            debug!(stage = kind.as_str(), pool_size = pool.len(), "Applied filter stage");

            if pool.is_empty() {
                debug!("No allergy-safe candidates remain, stopping pipeline");
                break;
            }
        }

        FilterOutcome {
            pool,
            relaxed: controller.into_notes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_core::models::{DietaryPreference, NutritionFacts};

    fn catalog() -> Vec<Recipe> {
        vec![
            Recipe::new("Chicken Stir Fry", 2)
                .with_ingredients(["chicken breast", "broccoli", "soy sauce"])
                .with_prep_time("10 min")
                .with_cook_time("15 min")
                .with_nutrition(NutritionFacts::default().with_calories("450")),
            Recipe::new("Garden Salad", 2)
                .with_ingredients(["lettuce", "tomato", "cucumber"])
                .with_prep_time("10 min")
                .with_tag("vegetarian")
                .with_nutrition(NutritionFacts::default().with_calories("180")),
            Recipe::new("Cheese Omelette", 1)
                .with_ingredients(["3 eggs", "1/4 cup cheddar cheese", "1 tbsp butter"])
                .with_prep_time("5 min")
                .with_cook_time("10 min"),
        ]
    }

    #[test]
    fn test_inactive_constraints_keep_everything() {
        let recipes = catalog();
        let pipeline = ConstraintPipeline::with_config(&PipelineConfig::default());
        let outcome = pipeline.filter(CandidatePool::from_slice(&recipes), &ConstraintSet::default());

        assert_eq!(outcome.pool.len(), 3);
        assert!(outcome.relaxed.is_empty());
    }

    #[test]
    fn test_allergy_exhaustion_stops_early() {
        let recipes = vec![catalog().remove(2)];
        let pipeline = ConstraintPipeline::with_config(&PipelineConfig::default());
        let constraints = ConstraintSet::default()
            .with_allergies(["egg"])
            .with_cooking_time_limit(1);
        let outcome = pipeline.filter(CandidatePool::from_slice(&recipes), &constraints);

        assert!(outcome.is_safety_exhausted());
        assert!(outcome.relaxed.is_empty());
    }

    #[test]
    fn test_soft_stage_is_relaxed_when_it_empties_the_pool() {
        let recipes = catalog();
        let pipeline = ConstraintPipeline::with_config(&PipelineConfig::default());
        let constraints = ConstraintSet::default()
            .with_allergies(["egg"])
            .with_cooking_time_limit(3);
        let outcome = pipeline.filter(CandidatePool::from_slice(&recipes), &constraints);

        assert_eq!(outcome.pool.len(), 2);
        assert_eq!(outcome.relaxed.len(), 1);
        assert_eq!(outcome.relaxed[0].constraint, ConstraintKind::CookingTime);
        assert_eq!(outcome.relaxed[0].pool_size_before, 2);
    }

    #[test]
    fn test_stages_compose() {
        let recipes = catalog();
        let pipeline = ConstraintPipeline::with_config(&PipelineConfig::default());
        let constraints = ConstraintSet::default()
            .with_dietary_preference(DietaryPreference::Vegetarian)
            .with_max_calories(300);
        let outcome = pipeline.filter(CandidatePool::from_slice(&recipes), &constraints);

        let titles: Vec<&str> = outcome.pool.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Garden Salad"]);
    }
}
