// ABOUTME: Individual constraint stages of the recipe filter pipeline
// ABOUTME: Allergy, dislike, diet, cuisine ordering, cooking time, and calorie stages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

use pantry_core::models::{ConstraintSet, DietaryPreference, Recipe};
use serde::{Deserialize, Serialize};

use super::CandidatePool;
use crate::config::MicroThresholds;
use crate::parsing::{contains_any, contains_ignore_case, parse_field};

/// Ingredient vocabularies used when a recipe carries no dietary tag
///
/// Plain substring matching, so compound names are not disambiguated:
/// "peanut butter" counts as dairy, "coconut milk" as milk.
mod vocabulary {
    pub const MEAT: &[&str] = &[
        "chicken",
        "beef",
        "pork",
        "bacon",
        "lamb",
        "turkey",
        "sausage",
        "prosciutto",
        "pancetta",
        "chorizo",
        "veal",
        "duck",
        "steak",
        "meat",
    ];

    pub const SEAFOOD: &[&str] = &[
        "fish", "salmon", "tuna", "shrimp", "prawn", "anchov", "crab", "lobster", "clam",
        "mussel", "oyster", "scallop", "tilapia", "sardine",
    ];

    pub const DAIRY: &[&str] = &[
        "milk", "cheese", "butter", "cream", "yogurt", "yoghurt", "ghee", "parmesan",
        "mozzarella",
    ];

    pub const OTHER_ANIMAL: &[&str] = &["egg", "honey", "gelatin"];

    pub const GLUTEN: &[&str] = &[
        "wheat",
        "flour",
        "pasta",
        "spaghetti",
        "bread",
        "noodle",
        "couscous",
        "barley",
        "rye",
        "soy sauce",
    ];
}

/// Constraint categories in pipeline order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    /// Declared allergies (safety-critical)
    Allergies,
    /// Ingredients the user dislikes
    DislikedIngredients,
    /// Dietary preference
    DietaryPreference,
    /// Preferred cuisines (ordering only)
    CuisineTypes,
    /// Prep + cook time limit
    CookingTime,
    /// Calories per serving limit
    MaxCalories,
}

impl ConstraintKind {
    /// Stages in the order the pipeline applies them
    pub const PIPELINE_ORDER: [Self; 6] = [
        Self::Allergies,
        Self::DislikedIngredients,
        Self::DietaryPreference,
        Self::CuisineTypes,
        Self::CookingTime,
        Self::MaxCalories,
    ];

    /// Whether this constraint may never be relaxed
    #[must_use]
    pub const fn is_safety_critical(&self) -> bool {
        matches!(self, Self::Allergies)
    }

    /// Whether the caller actually set this constraint
    #[must_use]
    pub fn is_active(&self, constraints: &ConstraintSet) -> bool {
        match self {
            Self::Allergies => !constraints.allergies.is_empty(),
            Self::DislikedIngredients => !constraints.disliked_ingredients.is_empty(),
            Self::DietaryPreference => constraints.dietary_preference != DietaryPreference::All,
            Self::CuisineTypes => !constraints.cuisine_types.is_empty(),
            Self::CookingTime => constraints.cooking_time_limit_minutes > 0,
            Self::MaxCalories => constraints.max_calories > 0,
        }
    }

    /// Name used in diagnostics
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Allergies => "allergies",
            Self::DislikedIngredients => "disliked_ingredients",
            Self::DietaryPreference => "dietary_preference",
            Self::CuisineTypes => "cuisine_types",
            Self::CookingTime => "cooking_time",
            Self::MaxCalories => "max_calories",
        }
    }
}

/// Run one stage against a pool
#[must_use]
pub fn apply<'a>(
    kind: ConstraintKind,
    pool: &CandidatePool<'a>,
    constraints: &ConstraintSet,
    thresholds: &MicroThresholds,
) -> CandidatePool<'a> {
    match kind {
        ConstraintKind::Allergies => pool.filtered(|r| is_allergy_safe(r, &constraints.allergies)),
        ConstraintKind::DislikedIngredients => {
            pool.filtered(|r| !has_any_ingredient(r, &constraints.disliked_ingredients))
        }
        ConstraintKind::DietaryPreference => pool.filtered(|r| {
            matches_dietary_preference(r, constraints.dietary_preference, thresholds)
        }),
        ConstraintKind::CuisineTypes => rank_by_cuisine(pool, &constraints.cuisine_types),
        ConstraintKind::CookingTime => pool.filtered(|r| {
            total_minutes(r).is_some_and(|mins| mins <= constraints.cooking_time_limit_minutes)
        }),
        ConstraintKind::MaxCalories => pool.filtered(|r| {
            calories_per_serving(r).is_some_and(|kcal| kcal <= constraints.max_calories)
        }),
    }
}

/// Whether any ingredient contains any of `terms`
fn has_any_ingredient(recipe: &Recipe, terms: &[String]) -> bool {
    recipe
        .ingredients
        .iter()
        .any(|ingredient| contains_any(ingredient, terms))
}

/// Whether no ingredient line contains any allergy term (case-insensitive)
#[must_use]
pub fn is_allergy_safe(recipe: &Recipe, allergies: &[String]) -> bool {
    !has_any_ingredient(recipe, allergies)
}

fn free_of(recipe: &Recipe, vocabularies: &[&[&str]]) -> bool {
    vocabularies
        .iter()
        .all(|terms| !recipe.ingredients.iter().any(|i| contains_any(i, *terms)))
}

/// Whether a recipe fits a dietary preference
///
/// A matching tag is trusted. Untagged recipes are checked against the
/// preference's exclusion vocabulary; keto falls back to the carb count.
#[must_use]
pub fn matches_dietary_preference(
    recipe: &Recipe,
    preference: DietaryPreference,
    thresholds: &MicroThresholds,
) -> bool {
    if preference == DietaryPreference::All || recipe.has_tag(preference.as_str()) {
        return true;
    }

    match preference {
        DietaryPreference::All => true,
        DietaryPreference::Vegetarian => free_of(recipe, &[vocabulary::MEAT, vocabulary::SEAFOOD]),
        DietaryPreference::Vegan => free_of(
            recipe,
            &[
                vocabulary::MEAT,
                vocabulary::SEAFOOD,
                vocabulary::DAIRY,
                vocabulary::OTHER_ANIMAL,
            ],
        ),
        DietaryPreference::Pescatarian => free_of(recipe, &[vocabulary::MEAT]),
        DietaryPreference::GlutenFree => free_of(recipe, &[vocabulary::GLUTEN]),
        DietaryPreference::DairyFree => free_of(recipe, &[vocabulary::DAIRY]),
        DietaryPreference::Keto => recipe
            .nutrition
            .as_ref()
            .and_then(|n| parse_field(n.carbs.as_deref()))
            .is_some_and(|carbs| carbs <= thresholds.keto_max_carbs_g),
    }
}

/// Whether a recipe's cuisine, category, or tags name one of `cuisines`
#[must_use]
pub fn matches_cuisine(recipe: &Recipe, cuisines: &[String]) -> bool {
    cuisines.iter().any(|cuisine| {
        let cuisine = cuisine.trim();
        recipe
            .cuisine
            .iter()
            .chain(recipe.category.iter())
            .chain(recipe.tags.iter())
            .any(|field| field.trim().eq_ignore_ascii_case(cuisine))
    })
}

/// Move cuisine matches to the front, keeping relative order otherwise
fn rank_by_cuisine<'a>(pool: &CandidatePool<'a>, cuisines: &[String]) -> CandidatePool<'a> {
    let (matching, rest): (Vec<&Recipe>, Vec<&Recipe>) = pool
        .iter()
        .partition(|recipe| matches_cuisine(recipe, cuisines));
    matching.into_iter().chain(rest).collect()
}

/// Prep + cook time in minutes
///
/// An unparsable field contributes nothing; if neither field parses the
/// recipe has no usable time and fails the cooking time stage.
#[must_use]
pub fn total_minutes(recipe: &Recipe) -> Option<u32> {
    let prep = parse_field(recipe.prep_time.as_deref());
    let cook = parse_field(recipe.cook_time.as_deref());
    match (prep, cook) {
        (Some(prep), Some(cook)) => Some(prep.saturating_add(cook)),
        (Some(mins), None) | (None, Some(mins)) => Some(mins),
        (None, None) => None,
    }
}

/// Calories per serving, if the recipe states a parsable value
#[must_use]
pub fn calories_per_serving(recipe: &Recipe) -> Option<u32> {
    recipe
        .nutrition
        .as_ref()
        .and_then(|n| parse_field(n.calories.as_deref()))
}

/// Whether the recipe's text mentions `term` in any ingredient
#[must_use]
pub fn mentions_ingredient(recipe: &Recipe, term: &str) -> bool {
    recipe
        .ingredients
        .iter()
        .any(|ingredient| contains_ignore_case(ingredient, term))
}
