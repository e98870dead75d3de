// ABOUTME: Recipe data model used by the catalog, the pipeline, and callers
// ABOUTME: Defines Recipe, RecipeStep, NutritionFacts, and Difficulty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::placeholder;

/// Cooking difficulty of a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Simple recipes, basic techniques
    Easy,
    /// Some technique required
    Medium,
    /// Advanced techniques or long active time
    Hard,
}

/// Nutrition facts per serving
///
/// Values are kept exactly as the data source wrote them ("25g", "1,200 mg",
/// "350 kcal"). Numeric interpretation happens in the pipeline, which treats
/// anything it cannot parse as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionFacts {
    /// Energy per serving
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<String>,
    /// Protein per serving
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<String>,
    /// Carbohydrates per serving
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<String>,
    /// Fat per serving
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<String>,
    /// Sodium per serving
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium: Option<String>,
    /// Dietary fiber per serving
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<String>,
    /// Sugar per serving
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar: Option<String>,
}

impl NutritionFacts {
    /// Set calories
    #[must_use]
    pub fn with_calories(mut self, value: impl Into<String>) -> Self {
        self.calories = Some(value.into());
        self
    }

    /// Set protein
    #[must_use]
    pub fn with_protein(mut self, value: impl Into<String>) -> Self {
        self.protein = Some(value.into());
        self
    }

    /// Set carbohydrates
    #[must_use]
    pub fn with_carbs(mut self, value: impl Into<String>) -> Self {
        self.carbs = Some(value.into());
        self
    }

    /// Set fat
    #[must_use]
    pub fn with_fat(mut self, value: impl Into<String>) -> Self {
        self.fat = Some(value.into());
        self
    }

    /// Set sodium
    #[must_use]
    pub fn with_sodium(mut self, value: impl Into<String>) -> Self {
        self.sodium = Some(value.into());
        self
    }

    /// Set fiber
    #[must_use]
    pub fn with_fiber(mut self, value: impl Into<String>) -> Self {
        self.fiber = Some(value.into());
        self
    }

    /// Set sugar
    #[must_use]
    pub fn with_sugar(mut self, value: impl Into<String>) -> Self {
        self.sugar = Some(value.into());
        self
    }
}

/// Single cooking step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStep {
    /// What to do
    pub instruction: String,
    /// Optional illustration reference (URL or asset key)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Optional timer for this step, in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timer_minutes: Option<u32>,
}

impl RecipeStep {
    /// Create a step with only an instruction
    #[must_use]
    pub fn new(instruction: impl Into<String>) -> Self {
        Self {
            instruction: instruction.into(),
            image: None,
            timer_minutes: None,
        }
    }

    /// Attach an image reference
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Attach a timer
    #[must_use]
    pub const fn with_timer(mut self, minutes: u32) -> Self {
        self.timer_minutes = Some(minutes);
        self
    }
}

const fn default_servings() -> u32 {
    1
}

/// A complete recipe with ingredients and instructions
///
/// Catalog recipes are never modified in place. Every pipeline transform takes
/// a `Recipe` by value and returns a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Identifier, if the source assigned one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Recipe name
    pub title: String,
    /// Short description shown under the title
    #[serde(default)]
    pub description: String,
    /// Number of servings this recipe makes
    #[serde(default = "default_servings")]
    pub servings: u32,
    /// Preparation time, e.g. "10 min"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    /// Cooking time, e.g. "25 min"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,
    /// Total time, e.g. "35 min"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_time: Option<String>,
    /// Ingredient lines in display order ("2 cups broccoli florets")
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Cooking steps in order
    #[serde(default)]
    pub steps: Vec<RecipeStep>,
    /// Nutrition facts per serving
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionFacts>,
    /// Meal category ("Dinner", "Breakfast", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Cuisine ("Italian", "Thai", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    /// Cooking difficulty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    /// Free-form tags ("vegetarian", "quick", ...)
    #[serde(default)]
    pub tags: Vec<String>,
    /// When this value was produced by the pipeline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Recipe {
    /// Create a recipe with a title and serving count
    #[must_use]
    pub fn new(title: impl Into<String>, servings: u32) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: String::new(),
            servings,
            prep_time: None,
            cook_time: None,
            total_time: None,
            ingredients: Vec::new(),
            steps: Vec::new(),
            nutrition: None,
            category: None,
            cuisine: None,
            difficulty: None,
            tags: Vec::new(),
            created_at: None,
        }
    }

    /// Set the identifier
    #[must_use]
    pub const fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set preparation time
    #[must_use]
    pub fn with_prep_time(mut self, time: impl Into<String>) -> Self {
        self.prep_time = Some(time.into());
        self
    }

    /// Set cooking time
    #[must_use]
    pub fn with_cook_time(mut self, time: impl Into<String>) -> Self {
        self.cook_time = Some(time.into());
        self
    }

    /// Set total time
    #[must_use]
    pub fn with_total_time(mut self, time: impl Into<String>) -> Self {
        self.total_time = Some(time.into());
        self
    }

    /// Add an ingredient line
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.ingredients.push(ingredient.into());
        self
    }

    /// Add several ingredient lines
    #[must_use]
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients
            .extend(ingredients.into_iter().map(Into::into));
        self
    }

    /// Add a cooking step
    #[must_use]
    pub fn with_step(mut self, step: RecipeStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Add a plain instruction as a step
    #[must_use]
    pub fn with_instruction(self, instruction: impl Into<String>) -> Self {
        self.with_step(RecipeStep::new(instruction))
    }

    /// Set nutrition facts
    #[must_use]
    pub fn with_nutrition(mut self, nutrition: NutritionFacts) -> Self {
        self.nutrition = Some(nutrition);
        self
    }

    /// Set the meal category
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the cuisine
    #[must_use]
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    /// Set the difficulty
    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Add a tag
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Whether this recipe carries the given tag (case-insensitive)
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Whether this is the placeholder returned when no allergy-safe recipe exists
    #[must_use]
    pub fn is_safety_placeholder(&self) -> bool {
        self.has_tag(placeholder::TAG)
    }

    /// Build the safety placeholder for a set of user ingredients
    ///
    /// The placeholder keeps the caller's ingredients so the result stays a
    /// superset of what the user entered, and its steps explain that no safe
    /// match was found.
    #[must_use]
    pub fn safety_placeholder(user_ingredients: &[String]) -> Self {
        let steps = placeholder::STEPS
            .iter()
            .map(|step| RecipeStep::new(*step))
            .collect();

        Self {
            description: placeholder::DESCRIPTION.to_owned(),
            ingredients: user_ingredients.to_vec(),
            steps,
            tags: vec![placeholder::TAG.to_owned()],
            ..Self::new(placeholder::TITLE, 1)
        }
    }
}
