// ABOUTME: Ranks surviving candidates and picks the winning recipe
// ABOUTME: Scores micro-nutrient fit and ingredient overlap, breaks ties with an injected RNG
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

use std::cmp::Reverse;

use pantry_core::models::{MicroPreference, NutritionFacts, Recipe};
use rand::Rng;
use tracing::debug;

use super::stages::mentions_ingredient;
use super::CandidatePool;
use crate::config::{MicroThresholds, PipelineConfig};
use crate::parsing::parse_field;

/// Ranking inputs for one candidate
#[derive(Debug, Clone, Copy)]
pub struct ScoreRecord<'a> {
    /// The candidate
    pub recipe: &'a Recipe,
    /// Number of micro-preferences the candidate satisfies
    pub micro_score: usize,
    /// Number of user ingredients found in the candidate
    pub ingredient_matches: usize,
    /// Position in the incoming pool
    pub position: usize,
}

/// Scoring and tie-break policy
#[derive(Debug, Clone)]
pub struct ScoringSelector {
    thresholds: MicroThresholds,
    tie_break_window: usize,
}

impl Default for ScoringSelector {
    fn default() -> Self {
        Self::with_config(&PipelineConfig::default())
    }
}

impl ScoringSelector {
    /// Selector using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(PipelineConfig::global())
    }

    /// Selector using an explicit configuration
    #[must_use]
    pub fn with_config(config: &PipelineConfig) -> Self {
        Self {
            thresholds: config.micro_thresholds.clone(),
            tie_break_window: config.selection.tie_break_window.max(1),
        }
    }

    /// Number of `user_ingredients` that appear in some ingredient of `recipe`
    #[must_use]
    pub fn ingredient_match_count(recipe: &Recipe, user_ingredients: &[String]) -> usize {
        user_ingredients
            .iter()
            .filter(|wanted| mentions_ingredient(recipe, wanted))
            .count()
    }

    /// Number of distinct `preferences` the recipe's nutrition satisfies
    #[must_use]
    pub fn micro_score(&self, recipe: &Recipe, preferences: &[MicroPreference]) -> usize {
        let Some(nutrition) = recipe.nutrition.as_ref() else {
            return 0;
        };

        let mut seen: Vec<MicroPreference> = Vec::with_capacity(preferences.len());
        for preference in preferences {
            if !seen.contains(preference) {
                seen.push(*preference);
            }
        }

        seen.into_iter()
            .filter(|preference| self.satisfies(nutrition, *preference))
            .count()
    }

    fn satisfies(&self, nutrition: &NutritionFacts, preference: MicroPreference) -> bool {
        let t = &self.thresholds;
        let below = |field: Option<&str>, max: u32| parse_field(field).is_some_and(|v| v < max);
        let above = |field: Option<&str>, min: u32| parse_field(field).is_some_and(|v| v > min);

        match preference {
            MicroPreference::LowSodium => below(nutrition.sodium.as_deref(), t.low_sodium_max_mg),
            MicroPreference::HighProtein => {
                above(nutrition.protein.as_deref(), t.high_protein_min_g)
            }
            MicroPreference::LowSugar => below(nutrition.sugar.as_deref(), t.low_sugar_max_g),
            MicroPreference::HighFiber => above(nutrition.fiber.as_deref(), t.high_fiber_min_g),
            MicroPreference::LowFat => below(nutrition.fat.as_deref(), t.low_fat_max_g),
            MicroPreference::LowCarb => below(nutrition.carbs.as_deref(), t.low_carb_max_g),
            MicroPreference::LowCalorie => {
                below(nutrition.calories.as_deref(), t.low_calorie_max_kcal)
            }
        }
    }

    /// Score every candidate, in pool order
    #[must_use]
    pub fn score<'a>(
        &self,
        pool: &CandidatePool<'a>,
        user_ingredients: &[String],
        preferences: &[MicroPreference],
    ) -> Vec<ScoreRecord<'a>> {
        pool.iter()
            .enumerate()
            .map(|(position, recipe)| ScoreRecord {
                recipe,
                micro_score: self.micro_score(recipe, preferences),
                ingredient_matches: Self::ingredient_match_count(recipe, user_ingredients),
                position,
            })
            .collect()
    }

    /// Candidates ordered best first
    ///
    /// Micro score only takes part when at least one candidate scores above
    /// zero. The sort is stable, so equal keys keep pool order.
    #[must_use]
    pub fn rank<'a>(
        &self,
        pool: &CandidatePool<'a>,
        user_ingredients: &[String],
        preferences: &[MicroPreference],
    ) -> Vec<ScoreRecord<'a>> {
        let mut records = self.score(pool, user_ingredients, preferences);
        let use_micro = records.iter().any(|r| r.micro_score > 0);
        records.sort_by_key(|r| {
            let micro = if use_micro { r.micro_score } else { 0 };
            (Reverse(micro), Reverse(r.ingredient_matches))
        });
        records
    }

    /// Pick the winner
    ///
    /// The first ranked key defines the tie group. A group no larger than
    /// `tie_break_window` is settled by pool order, which keeps the cuisine
    /// ordering of the filter stages. A larger group draws the winner
    /// uniformly from its first `tie_break_window` members.
    pub fn select<'a, R: Rng>(
        &self,
        pool: &CandidatePool<'a>,
        user_ingredients: &[String],
        preferences: &[MicroPreference],
        rng: &mut R,
    ) -> Option<&'a Recipe> {
        let ranked = self.rank(pool, user_ingredients, preferences);
        let leader = ranked.first()?;
        let use_micro = ranked.iter().any(|r| r.micro_score > 0);
        let key = |r: &ScoreRecord<'_>| {
            (
                if use_micro { r.micro_score } else { 0 },
                r.ingredient_matches,
            )
        };

        let group_len = ranked.iter().take_while(|r| key(r) == key(leader)).count();
        let index = if group_len > self.tie_break_window {
            rng.gen_range(0..self.tie_break_window)
        } else {
            0
        };
        let winner = ranked.get(index)?;

        debug!(
            title = %winner.recipe.title,
            micro_score = winner.micro_score,
            ingredient_matches = winner.ingredient_matches,
            tie_group = group_len,
            "Selected candidate"
        );
        Some(winner.recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn user(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    fn selector(window: usize) -> ScoringSelector {
        let mut config = PipelineConfig::default();
        config.selection.tie_break_window = window;
        ScoringSelector::with_config(&config)
    }

    #[test]
    fn test_ingredient_overlap_decides() {
        let recipes = vec![
            Recipe::new("Soup", 2).with_ingredients(["carrot", "onion"]),
            Recipe::new("Stir Fry", 2).with_ingredients(["chicken thighs", "Broccoli florets"]),
        ];
        let pool = CandidatePool::from_slice(&recipes);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let winner = selector(3)
            .select(&pool, &user(&["chicken", "broccoli"]), &[], &mut rng)
            .unwrap();
        assert_eq!(winner.title, "Stir Fry");
    }

    #[test]
    fn test_micro_score_outranks_overlap_when_present() {
        let recipes = vec![
            Recipe::new("Pasta", 2).with_ingredients(["chicken", "pasta"]),
            Recipe::new("Lentils", 2)
                .with_ingredients(["lentils"])
                .with_nutrition(NutritionFacts::default().with_protein("30g")),
        ];
        let pool = CandidatePool::from_slice(&recipes);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let winner = selector(3)
            .select(
                &pool,
                &user(&["chicken"]),
                &[MicroPreference::HighProtein],
                &mut rng,
            )
            .unwrap();
        assert_eq!(winner.title, "Lentils");
    }

    #[test]
    fn test_duplicate_preferences_count_once() {
        let recipe = Recipe::new("Fish", 2)
            .with_nutrition(NutritionFacts::default().with_sodium("1,200 mg"));
        let score = selector(3).micro_score(
            &recipe,
            &[MicroPreference::LowSodium, MicroPreference::LowSodium],
        );
        assert_eq!(score, 1);
    }

    #[test]
    fn test_missing_nutrition_does_not_match() {
        let recipe = Recipe::new("Plain", 2);
        assert_eq!(selector(3).micro_score(&recipe, &[MicroPreference::LowFat]), 0);
    }

    #[test]
    fn test_window_of_one_is_deterministic() {
        let recipes = vec![Recipe::new("First", 2), Recipe::new("Second", 2)];
        let pool = CandidatePool::from_slice(&recipes);
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let winner = selector(1).select(&pool, &[], &[], &mut rng).unwrap();
            assert_eq!(winner.title, "First");
        }
    }

    #[test]
    fn test_small_tie_group_keeps_pool_order() {
        let recipes: Vec<Recipe> = (0..3).map(|i| Recipe::new(format!("R{i}"), 2)).collect();
        let pool = CandidatePool::from_slice(&recipes);
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let winner = selector(3).select(&pool, &[], &[], &mut rng).unwrap();
            assert_eq!(winner.title, "R0");
        }
    }

    #[test]
    fn test_tie_break_stays_inside_window() {
        let recipes: Vec<Recipe> = (0..6).map(|i| Recipe::new(format!("R{i}"), 2)).collect();
        let pool = CandidatePool::from_slice(&recipes);
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let winner = selector(3).select(&pool, &[], &[], &mut rng).unwrap();
            assert!(["R0", "R1", "R2"].contains(&winner.title.as_str()));
        }
    }

    #[test]
    fn test_empty_pool_selects_nothing() {
        let pool = CandidatePool::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(selector(3).select(&pool, &[], &[], &mut rng).is_none());
    }
}
