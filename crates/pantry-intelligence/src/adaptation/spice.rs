// ABOUTME: Spice level adaptation for ingredient lists and descriptions
// ABOUTME: Reduces or scales heat ingredients and adds heat when a recipe has none
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

use pantry_core::models::{Recipe, SpiceLevel};

use crate::config::AdaptationConfig;
use crate::parsing::{contains_any, format_quantity, leading_quantity, replace_span};

/// Ingredients treated as heat sources
pub const SPICE_VOCABULARY: &[&str] = &[
    "pepper",
    "chili",
    "cayenne",
    "hot sauce",
    "paprika",
    "curry",
    "ginger",
    "horseradish",
    "wasabi",
    "sriracha",
];

const SPICY_ADDITIONS: &[&str] = &["1/2 tsp red chili flakes"];
const EXTRA_SPICY_ADDITIONS: &[&str] = &["1 tbsp hot sauce", "1/2 tsp cayenne pepper"];

/// Suffix marking an ingredient adjusted for `level`
#[must_use]
pub const fn ingredient_suffix(level: SpiceLevel) -> Option<&'static str> {
    match level {
        SpiceLevel::None => Some("(minimal heat)"),
        SpiceLevel::Mild => Some("(reduced for mild heat)"),
        SpiceLevel::Medium => None,
        SpiceLevel::Spicy => Some("(extra for spicy)"),
        SpiceLevel::ExtraSpicy => Some("(doubled for extra spicy)"),
    }
}

/// Sentence appended to the description for `level`
#[must_use]
pub const fn description_note(level: SpiceLevel) -> Option<&'static str> {
    match level {
        SpiceLevel::None => Some("Adjusted for minimal heat."),
        SpiceLevel::Mild => Some("Adjusted for mild heat."),
        SpiceLevel::Medium => None,
        SpiceLevel::Spicy => Some("Adjusted for extra heat."),
        SpiceLevel::ExtraSpicy => Some("Adjusted for extra spicy heat."),
    }
}

/// Whether an ingredient line is a heat source
#[must_use]
pub fn is_spice_ingredient(line: &str) -> bool {
    contains_any(line, SPICE_VOCABULARY)
}

/// Whether a line is one of the heat ingredients this module adds
#[must_use]
pub fn is_heat_addition(line: &str) -> bool {
    let line = line.trim();
    SPICY_ADDITIONS
        .iter()
        .chain(EXTRA_SPICY_ADDITIONS)
        .any(|addition| line.eq_ignore_ascii_case(addition))
}

fn heat_additions(level: SpiceLevel) -> &'static [&'static str] {
    if level == SpiceLevel::ExtraSpicy {
        EXTRA_SPICY_ADDITIONS
    } else {
        SPICY_ADDITIONS
    }
}

fn adjust_line(line: &str, level: SpiceLevel, config: &AdaptationConfig, suffix: &str) -> String {
    let body = match leading_quantity(line) {
        Some(q) if level.reduces_heat() => {
            let reduced = if level == SpiceLevel::None {
                &config.no_spice_quantity
            } else {
                &config.mild_quantity
            };
            replace_span(line, &q.span, reduced)
        }
        Some(q) if level.increases_heat() => {
            let scale = if level == SpiceLevel::ExtraSpicy {
                config.extra_spicy_scale
            } else {
                config.spicy_scale
            };
            replace_span(line, &q.span, &format_quantity(q.value * scale))
        }
        _ => line.to_owned(),
    };
    format!("{} {suffix}", body.trim_end())
}

fn append_note(description: &str, note: &str) -> String {
    if description.contains(note) {
        return description.to_owned();
    }
    let trimmed = description.trim_end();
    if trimmed.is_empty() {
        note.to_owned()
    } else {
        format!("{trimmed} {note}")
    }
}

/// Rewrite a recipe for `level`
///
/// `Medium` returns the recipe untouched. Heat additions that would contain an
/// allergy term are not added, and lines added by an earlier pass are left
/// alone so repeated passes do not stack heat.
#[must_use]
pub fn apply(
    mut recipe: Recipe,
    level: SpiceLevel,
    allergies: &[String],
    config: &AdaptationConfig,
) -> Recipe {
    let (Some(suffix), Some(note)) = (ingredient_suffix(level), description_note(level)) else {
        return recipe;
    };

    let has_spice = recipe.ingredients.iter().any(|i| is_spice_ingredient(i));

    if has_spice {
        recipe.ingredients = recipe
            .ingredients
            .into_iter()
            .map(|line| {
                if is_spice_ingredient(&line) && !line.contains(suffix) && !is_heat_addition(&line)
                {
                    adjust_line(&line, level, config, suffix)
                } else {
                    line
                }
            })
            .collect();
    } else if level.increases_heat() {
        recipe.ingredients.extend(
            heat_additions(level)
                .iter()
                .filter(|addition| !contains_any(addition, allergies))
                .map(|addition| (*addition).to_owned()),
        );
    }

    recipe.description = append_note(&recipe.description, note);
    recipe
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curry() -> Recipe {
        Recipe::new("Curry", 2)
            .with_description("A weeknight curry.")
            .with_ingredients([
                "2 tsp chili powder",
                "1 1/2 tsp paprika",
                "1 can coconut milk",
            ])
    }

    #[test]
    fn test_medium_is_identity() {
        let config = AdaptationConfig::default();
        let once = apply(curry(), SpiceLevel::Medium, &[], &config);
        let twice = apply(once.clone(), SpiceLevel::Medium, &[], &config);
        assert_eq!(once, curry());
        assert_eq!(twice, once);
    }

    #[test]
    fn test_mild_replaces_quantity_and_marks_line() {
        let adapted = apply(curry(), SpiceLevel::Mild, &[], &AdaptationConfig::default());
        assert_eq!(adapted.ingredients[0], "1/2 tsp chili powder (reduced for mild heat)");
        assert_eq!(adapted.ingredients[1], "1/2 tsp paprika (reduced for mild heat)");
        assert_eq!(adapted.ingredients[2], "1 can coconut milk");
        assert_eq!(adapted.description, "A weeknight curry. Adjusted for mild heat.");
    }

    #[test]
    fn test_none_uses_minimal_quantity() {
        let adapted = apply(curry(), SpiceLevel::None, &[], &AdaptationConfig::default());
        assert_eq!(adapted.ingredients[0], "1/4 tsp chili powder (minimal heat)");
    }

    #[test]
    fn test_spicy_scales_quantities() {
        let config = AdaptationConfig::default();
        let spicy = apply(curry(), SpiceLevel::Spicy, &[], &config);
        assert_eq!(spicy.ingredients[0], "3 tsp chili powder (extra for spicy)");
        assert_eq!(spicy.ingredients[1], "2.25 tsp paprika (extra for spicy)");

        let extra = apply(curry(), SpiceLevel::ExtraSpicy, &[], &config);
        assert_eq!(extra.ingredients[0], "4 tsp chili powder (doubled for extra spicy)");
        assert_eq!(extra.ingredients[1], "3 tsp paprika (doubled for extra spicy)");
    }

    #[test]
    fn test_reapplying_a_level_does_not_compound() {
        let config = AdaptationConfig::default();
        let once = apply(curry(), SpiceLevel::ExtraSpicy, &[], &config);
        let twice = apply(once.clone(), SpiceLevel::ExtraSpicy, &[], &config);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_heat_is_added_when_missing() {
        let plain = Recipe::new("Rice", 2).with_ingredients(["1 cup rice", "2 cups water"]);
        let config = AdaptationConfig::default();

        let spicy = apply(plain.clone(), SpiceLevel::Spicy, &[], &config);
        assert_eq!(spicy.ingredients.len(), 3);
        assert_eq!(spicy.ingredients[2], "1/2 tsp red chili flakes");

        let extra = apply(plain.clone(), SpiceLevel::ExtraSpicy, &[], &config);
        assert_eq!(&extra.ingredients[2..], &["1 tbsp hot sauce", "1/2 tsp cayenne pepper"]);

        let mild = apply(plain.clone(), SpiceLevel::Mild, &[], &config);
        assert_eq!(mild.ingredients, plain.ingredients);
    }

    #[test]
    fn test_added_heat_is_not_scaled_again() {
        let plain = Recipe::new("Rice", 2).with_ingredients(["1 cup rice"]);
        let config = AdaptationConfig::default();
        for level in [SpiceLevel::Spicy, SpiceLevel::ExtraSpicy] {
            let once = apply(plain.clone(), level, &[], &config);
            let twice = apply(once.clone(), level, &[], &config);
            assert_eq!(twice, once, "{level}");
        }
        let once = apply(plain, SpiceLevel::ExtraSpicy, &[], &config);
        assert_eq!(
            &once.ingredients[1..],
            &["1 tbsp hot sauce", "1/2 tsp cayenne pepper"]
        );
    }

    #[test]
    fn test_additions_respect_allergies() {
        let plain = Recipe::new("Rice", 2).with_ingredients(["1 cup rice"]);
        let adapted = apply(
            plain,
            SpiceLevel::ExtraSpicy,
            &["cayenne".to_owned()],
            &AdaptationConfig::default(),
        );
        assert_eq!(&adapted.ingredients[1..], &["1 tbsp hot sauce"]);
    }
}
