// ABOUTME: User constraints that drive recipe selection and adaptation
// ABOUTME: Defines ConstraintSet plus dietary, micro-nutrient, spice, and portion enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::errors::AppError;

/// Normalize user-entered enum text: trim, lowercase, and treat `_`/space as `-`
fn normalize_slug(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '_' || c == ' ' { '-' } else { c })
        .collect()
}

/// Dietary preference for filtering recipes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryPreference {
    /// No dietary filtering
    #[default]
    All,
    /// No meat or fish
    Vegetarian,
    /// No animal products
    Vegan,
    /// No meat, fish allowed
    Pescatarian,
    /// No gluten-containing ingredients
    GlutenFree,
    /// No dairy products
    DairyFree,
    /// Very low carbohydrate
    Keto,
}

impl DietaryPreference {
    /// Slug used for tags and display
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::Pescatarian => "pescatarian",
            Self::GlutenFree => "gluten-free",
            Self::DairyFree => "dairy-free",
            Self::Keto => "keto",
        }
    }
}

impl Display for DietaryPreference {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietaryPreference {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_slug(s).as_str() {
            "all" | "" => Ok(Self::All),
            "vegetarian" => Ok(Self::Vegetarian),
            "vegan" => Ok(Self::Vegan),
            "pescatarian" => Ok(Self::Pescatarian),
            "gluten-free" => Ok(Self::GlutenFree),
            "dairy-free" => Ok(Self::DairyFree),
            "keto" => Ok(Self::Keto),
            other => Err(AppError::invalid_input(format!(
                "Unknown dietary preference: {other}"
            ))),
        }
    }
}

/// Nutrition-shape preference used to rank candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MicroPreference {
    /// Sodium below the configured ceiling
    LowSodium,
    /// Protein above the configured floor
    HighProtein,
    /// Sugar below the configured ceiling
    LowSugar,
    /// Fiber above the configured floor
    HighFiber,
    /// Fat below the configured ceiling
    LowFat,
    /// Carbohydrates below the configured ceiling
    LowCarb,
    /// Calories below the configured ceiling
    LowCalorie,
}

impl MicroPreference {
    /// Slug used for display
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LowSodium => "low-sodium",
            Self::HighProtein => "high-protein",
            Self::LowSugar => "low-sugar",
            Self::HighFiber => "high-fiber",
            Self::LowFat => "low-fat",
            Self::LowCarb => "low-carb",
            Self::LowCalorie => "low-calorie",
        }
    }
}

impl Display for MicroPreference {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MicroPreference {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_slug(s).as_str() {
            "low-sodium" => Ok(Self::LowSodium),
            "high-protein" => Ok(Self::HighProtein),
            "low-sugar" => Ok(Self::LowSugar),
            "high-fiber" | "high-fibre" => Ok(Self::HighFiber),
            "low-fat" => Ok(Self::LowFat),
            "low-carb" => Ok(Self::LowCarb),
            "low-calorie" => Ok(Self::LowCalorie),
            other => Err(AppError::invalid_input(format!(
                "Unknown micro preference: {other}"
            ))),
        }
    }
}

/// Desired heat level of the adapted recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SpiceLevel {
    /// Remove as much heat as possible
    None,
    /// Gentle heat
    Mild,
    /// Recipe as written
    #[default]
    Medium,
    /// More heat than written
    Spicy,
    /// Much more heat than written
    ExtraSpicy,
}

impl SpiceLevel {
    /// Slug used for display
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Mild => "mild",
            Self::Medium => "medium",
            Self::Spicy => "spicy",
            Self::ExtraSpicy => "extra-spicy",
        }
    }

    /// Whether this level lowers the heat of a recipe
    #[must_use]
    pub const fn reduces_heat(&self) -> bool {
        matches!(self, Self::None | Self::Mild)
    }

    /// Whether this level raises the heat of a recipe
    #[must_use]
    pub const fn increases_heat(&self) -> bool {
        matches!(self, Self::Spicy | Self::ExtraSpicy)
    }
}

impl Display for SpiceLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpiceLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_slug(s).as_str() {
            "none" | "no-spice" => Ok(Self::None),
            "mild" => Ok(Self::Mild),
            "medium" | "" => Ok(Self::Medium),
            "spicy" | "hot" => Ok(Self::Spicy),
            "extra-spicy" | "extra-hot" => Ok(Self::ExtraSpicy),
            other => Err(AppError::invalid_input(format!(
                "Unknown spice level: {other}"
            ))),
        }
    }
}

/// Number of people the adapted recipe should feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PortionSize {
    /// One person
    Single,
    /// Two people (recipe as written)
    #[default]
    Couple,
    /// A family meal
    Family,
    /// Parties and gatherings
    LargeGroup,
}

impl PortionSize {
    /// Multiplier applied to the recipe's serving count
    #[must_use]
    pub const fn scale_factor(&self) -> f64 {
        match self {
            Self::Single => 0.5,
            Self::Couple => 1.0,
            Self::Family => 2.0,
            Self::LargeGroup => 4.0,
        }
    }

    /// Slug used for display
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Couple => "couple",
            Self::Family => "family",
            Self::LargeGroup => "large-group",
        }
    }
}

impl Display for PortionSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PortionSize {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_slug(s).as_str() {
            "single" => Ok(Self::Single),
            "couple" | "" => Ok(Self::Couple),
            "family" => Ok(Self::Family),
            "large-group" | "party" => Ok(Self::LargeGroup),
            other => Err(AppError::invalid_input(format!(
                "Unknown portion size: {other}"
            ))),
        }
    }
}

/// Everything the caller wants from a recipe, supplied fresh per call
///
/// Every field has a default, so `ConstraintSet::default()` means "no
/// constraints": all dietary preferences, medium spice, a couple's portion,
/// and no time or calorie limit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConstraintSet {
    /// Allergy terms; safety-critical, never relaxed
    pub allergies: Vec<String>,
    /// Ingredients the user would rather avoid
    pub disliked_ingredients: Vec<String>,
    /// Dietary preference
    pub dietary_preference: DietaryPreference,
    /// Preferred cuisines; used to order candidates, not to remove them
    pub cuisine_types: Vec<String>,
    /// Upper bound on prep + cook minutes (0 = unbounded)
    pub cooking_time_limit_minutes: u32,
    /// Upper bound on calories per serving (0 = unbounded)
    pub max_calories: u32,
    /// Nutrition-shape preferences used for ranking
    pub micro_preferences: Vec<MicroPreference>,
    /// Heat level for adaptation
    pub spice_level: SpiceLevel,
    /// Portion size for adaptation
    pub portion_size: PortionSize,
}

/// Trim terms and drop blank ones
fn clean_terms(terms: Vec<String>) -> Vec<String> {
    terms
        .into_iter()
        .map(|t| t.trim().to_owned())
        .filter(|t| !t.is_empty())
        .collect()
}

impl ConstraintSet {
    /// Set allergy terms
    #[must_use]
    pub fn with_allergies<I, S>(mut self, allergies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allergies = allergies.into_iter().map(Into::into).collect();
        self
    }

    /// Set disliked ingredients
    #[must_use]
    pub fn with_disliked<I, S>(mut self, disliked: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disliked_ingredients = disliked.into_iter().map(Into::into).collect();
        self
    }

    /// Set dietary preference
    #[must_use]
    pub const fn with_dietary_preference(mut self, preference: DietaryPreference) -> Self {
        self.dietary_preference = preference;
        self
    }

    /// Set preferred cuisines
    #[must_use]
    pub fn with_cuisines<I, S>(mut self, cuisines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cuisine_types = cuisines.into_iter().map(Into::into).collect();
        self
    }

    /// Set the cooking time limit in minutes (0 = unbounded)
    #[must_use]
    pub const fn with_cooking_time_limit(mut self, minutes: u32) -> Self {
        self.cooking_time_limit_minutes = minutes;
        self
    }

    /// Set the calorie limit per serving (0 = unbounded)
    #[must_use]
    pub const fn with_max_calories(mut self, calories: u32) -> Self {
        self.max_calories = calories;
        self
    }

    /// Set micro preferences
    #[must_use]
    pub fn with_micro_preferences(mut self, preferences: Vec<MicroPreference>) -> Self {
        self.micro_preferences = preferences;
        self
    }

    /// Set spice level
    #[must_use]
    pub const fn with_spice_level(mut self, level: SpiceLevel) -> Self {
        self.spice_level = level;
        self
    }

    /// Set portion size
    #[must_use]
    pub const fn with_portion_size(mut self, size: PortionSize) -> Self {
        self.portion_size = size;
        self
    }

    /// Trim every free-text term and drop blanks
    ///
    /// A blank allergy term would match every ingredient and exhaust the
    /// catalog, so blanks are removed before the pipeline sees them.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            allergies: clean_terms(self.allergies),
            disliked_ingredients: clean_terms(self.disliked_ingredients),
            cuisine_types: clean_terms(self.cuisine_types),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn test_enum_parsing_is_lenient_about_case_and_separators() {
        assert_eq!(
            "Extra_Spicy".parse::<SpiceLevel>().unwrap(),
            SpiceLevel::ExtraSpicy
        );
        assert_eq!(
            "large group".parse::<PortionSize>().unwrap(),
            PortionSize::LargeGroup
        );
        assert_eq!(
            "GLUTEN-FREE".parse::<DietaryPreference>().unwrap(),
            DietaryPreference::GlutenFree
        );
        assert_eq!(
            "high_protein".parse::<MicroPreference>().unwrap(),
            MicroPreference::HighProtein
        );
    }

    #[test]
    fn test_unknown_enum_text_is_a_validation_error() {
        let err = "volcanic".parse::<SpiceLevel>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_constraint_defaults() {
        let constraints = ConstraintSet::default();
        assert_eq!(constraints.dietary_preference, DietaryPreference::All);
        assert_eq!(constraints.spice_level, SpiceLevel::Medium);
        assert_eq!(constraints.portion_size, PortionSize::Couple);
        assert_eq!(constraints.cooking_time_limit_minutes, 0);
        assert_eq!(constraints.max_calories, 0);
        assert!(constraints.allergies.is_empty());
    }

    #[test]
    fn test_constraint_set_deserializes_with_missing_fields() {
        let json = r#"{"allergies":["peanut"],"spiceLevel":"extra-spicy"}"#;
        let constraints: ConstraintSet = serde_json::from_str(json).unwrap();
        assert_eq!(constraints.allergies, vec!["peanut".to_owned()]);
        assert_eq!(constraints.spice_level, SpiceLevel::ExtraSpicy);
        assert_eq!(constraints.portion_size, PortionSize::Couple);
    }

    #[test]
    fn test_normalized_drops_blank_terms() {
        let constraints = ConstraintSet::default()
            .with_allergies(["  milk ", "", "   "])
            .with_disliked(["olives", " "])
            .normalized();
        assert_eq!(constraints.allergies, vec!["milk".to_owned()]);
        assert_eq!(constraints.disliked_ingredients, vec!["olives".to_owned()]);
    }
}
