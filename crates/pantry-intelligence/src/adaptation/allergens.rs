// ABOUTME: Allergen substitution for recipe variations
// ABOUTME: Swaps allergen ingredients for safe alternatives or replaces them with a warning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

use pantry_core::models::Recipe;
use tracing::debug;

use crate::parsing::{contains_any, contains_ignore_case, leading_quantity};

/// Line used in place of an allergen ingredient with no safe substitute
pub const REMOVAL_WARNING: &str =
    "WARNING: ingredient removed - it matches a declared allergy and has no known safe substitute";

/// Substitutes for ingredients containing `trigger`, best first
#[derive(Debug, Clone, Copy)]
pub struct Substitution {
    /// Ingredient text that selects this row
    pub trigger: &'static str,
    /// Alternatives in order of preference
    pub substitutes: &'static [&'static str],
}

/// A family of allergens sharing substitutes
#[derive(Debug, Clone, Copy)]
pub struct AllergenCategory {
    /// Display name
    pub name: &'static str,
    /// Allergy terms that name the whole category ("dairy", "tree nuts")
    pub aliases: &'static [&'static str],
    /// Trigger rows, most specific first
    pub substitutions: &'static [Substitution],
}

impl AllergenCategory {
    fn triggers(&self) -> impl Iterator<Item = &'static str> {
        self.substitutions.iter().map(|row| row.trigger)
    }

    /// Whether `term` names this whole category
    fn is_named_by(&self, term: &str) -> bool {
        self.aliases
            .iter()
            .any(|alias| alias.eq_ignore_ascii_case(term.trim()))
    }

    /// Whether `text` mentions any of this category's triggers
    fn mentioned_in(&self, text: &str) -> bool {
        self.triggers().any(|trigger| contains_ignore_case(text, trigger))
    }

    /// First row whose trigger appears in `line`
    fn row_for(&self, line: &str) -> Option<&'static Substitution> {
        self.substitutions
            .iter()
            .find(|row| contains_ignore_case(line, row.trigger))
    }
}

const SEED_SWAPS: &[&str] = &["toasted pumpkin seeds", "sunflower seeds"];
const SEAFOOD_SWAPS: &[&str] = &["king trumpet mushrooms", "hearts of palm"];

/// Allergen categories in match order
///
/// Order matters for overlapping names: "peanut" is checked before the
/// generic "nut", "shellfish" before "fish".
pub static CATEGORIES: &[AllergenCategory] = &[
    AllergenCategory {
        name: "peanut",
        aliases: &["peanut", "peanuts"],
        substitutions: &[
            Substitution {
                trigger: "peanut butter",
                substitutes: &["sunflower seed butter", "tahini"],
            },
            Substitution {
                trigger: "peanut",
                substitutes: SEED_SWAPS,
            },
        ],
    },
    AllergenCategory {
        name: "tree nut",
        aliases: &["tree nut", "tree nuts", "nut", "nuts"],
        substitutions: &[
            Substitution {
                trigger: "almond",
                substitutes: SEED_SWAPS,
            },
            Substitution {
                trigger: "walnut",
                substitutes: SEED_SWAPS,
            },
            Substitution {
                trigger: "cashew",
                substitutes: SEED_SWAPS,
            },
            Substitution {
                trigger: "pecan",
                substitutes: SEED_SWAPS,
            },
            Substitution {
                trigger: "hazelnut",
                substitutes: SEED_SWAPS,
            },
            Substitution {
                trigger: "pistachio",
                substitutes: SEED_SWAPS,
            },
            Substitution {
                trigger: "nut",
                substitutes: SEED_SWAPS,
            },
        ],
    },
    AllergenCategory {
        name: "shellfish",
        aliases: &["shellfish"],
        substitutions: &[
            Substitution {
                trigger: "shrimp",
                substitutes: SEAFOOD_SWAPS,
            },
            Substitution {
                trigger: "prawn",
                substitutes: SEAFOOD_SWAPS,
            },
            Substitution {
                trigger: "crab",
                substitutes: &["hearts of palm", "jackfruit"],
            },
            Substitution {
                trigger: "lobster",
                substitutes: SEAFOOD_SWAPS,
            },
            Substitution {
                trigger: "shellfish",
                substitutes: SEAFOOD_SWAPS,
            },
        ],
    },
    AllergenCategory {
        name: "fish",
        aliases: &["fish"],
        substitutions: &[
            Substitution {
                trigger: "fish sauce",
                substitutes: &["soy sauce", "coconut aminos"],
            },
            Substitution {
                trigger: "fish",
                substitutes: &["firm tofu", "chickpeas"],
            },
        ],
    },
    AllergenCategory {
        name: "dairy",
        aliases: &["dairy", "lactose"],
        substitutions: &[
            Substitution {
                trigger: "milk",
                substitutes: &["almond milk", "oat beverage", "rice beverage"],
            },
            Substitution {
                trigger: "cheese",
                substitutes: &["nutritional yeast", "dairy-free cheese"],
            },
            Substitution {
                trigger: "butter",
                substitutes: &["olive oil", "vegetable oil"],
            },
            Substitution {
                trigger: "cream",
                substitutes: &["coconut cream", "silken tofu"],
            },
            Substitution {
                trigger: "yogurt",
                substitutes: &["coconut yogurt", "unsweetened applesauce"],
            },
            Substitution {
                trigger: "dairy",
                substitutes: &["oat beverage"],
            },
        ],
    },
    AllergenCategory {
        name: "egg",
        aliases: &["egg", "eggs"],
        substitutions: &[
            Substitution {
                trigger: "egg",
                substitutes: &[
                    "flaxseed gel (1 tbsp ground flaxseed + 3 tbsp water each)",
                    "unsweetened applesauce",
                ],
            },
        ],
    },
    AllergenCategory {
        name: "gluten",
        aliases: &["gluten", "wheat"],
        substitutions: &[
            Substitution {
                trigger: "pasta",
                substitutes: &["rice noodles", "gluten-free pasta"],
            },
            Substitution {
                trigger: "flour",
                substitutes: &["rice flour", "cornstarch"],
            },
            Substitution {
                trigger: "bread",
                substitutes: &["corn tortillas", "rice cakes"],
            },
            Substitution {
                trigger: "wheat",
                substitutes: &["rice", "quinoa"],
            },
            Substitution {
                trigger: "gluten",
                substitutes: &["rice", "quinoa"],
            },
        ],
    },
    AllergenCategory {
        name: "soy",
        aliases: &["soy", "soya"],
        substitutions: &[
            Substitution {
                trigger: "soy sauce",
                substitutes: &["coconut aminos"],
            },
            Substitution {
                trigger: "tofu",
                substitutes: &["chickpeas", "white beans"],
            },
            Substitution {
                trigger: "soy",
                substitutes: &["chickpeas", "white beans"],
            },
        ],
    },
    AllergenCategory {
        name: "sesame",
        aliases: &["sesame"],
        substitutions: &[
            Substitution {
                trigger: "tahini",
                substitutes: &["sunflower seed butter"],
            },
            Substitution {
                trigger: "sesame oil",
                substitutes: &["olive oil"],
            },
            Substitution {
                trigger: "sesame",
                substitutes: &["poppy seeds"],
            },
        ],
    },
];

/// Category an allergy term belongs to
///
/// A term naming the category ("dairy") wins; otherwise the first category
/// with a trigger inside the term ("whole milk" is dairy).
#[must_use]
pub fn category_for(term: &str) -> Option<&'static AllergenCategory> {
    CATEGORIES
        .iter()
        .find(|category| category.is_named_by(term))
        .or_else(|| {
            CATEGORIES
                .iter()
                .find(|category| category.triggers().any(|t| contains_ignore_case(term, t)))
        })
}

/// Allergy term that makes `line` unsafe, with its category
fn offending_term<'t>(
    line: &str,
    allergies: &'t [String],
) -> Option<(&'t str, Option<&'static AllergenCategory>)> {
    allergies.iter().find_map(|term| {
        let category = category_for(term);
        let named = category.is_some_and(|c| c.is_named_by(term) && c.mentioned_in(line));
        (contains_ignore_case(line, term) || named).then_some((term.as_str(), category))
    })
}

const UNITS: &[&str] = &[
    "cup", "cups", "tbsp", "tsp", "tablespoon", "tablespoons", "teaspoon", "teaspoons", "g",
    "kg", "ml", "l", "oz", "lb", "lbs", "pound", "pounds", "pinch", "can", "cans", "slice",
    "slices", "stick", "sticks", "clove", "cloves",
];

/// Leading "quantity unit" prefix of an ingredient line, if it starts with one
fn measure_prefix(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    let quantity = leading_quantity(trimmed)?;
    if quantity.span.start != 0 {
        return None;
    }

    let rest = &trimmed[quantity.span.end..];
    let word = rest.split_whitespace().next().unwrap_or_default();
    let unit = word.trim_end_matches('.');
    if UNITS.iter().any(|u| u.eq_ignore_ascii_case(unit)) {
        let unit_end = quantity.span.end + (rest.len() - rest.trim_start().len()) + word.len();
        Some(&trimmed[..unit_end])
    } else {
        Some(&trimmed[..quantity.span.end])
    }
}

/// Replace one unsafe line, keeping its measure
fn substitute_line(line: &str, category: Option<&AllergenCategory>, allergies: &[String]) -> String {
    let substitute = category
        .and_then(|c| c.row_for(line).or_else(|| c.substitutions.first()))
        .and_then(|row| {
            row.substitutes
                .iter()
                .find(|candidate| !contains_any(candidate, allergies))
        });

    match (substitute, measure_prefix(line)) {
        (Some(substitute), Some(measure)) => format!("{measure} {substitute}"),
        (Some(substitute), None) => (*substitute).to_owned(),
        (None, _) => REMOVAL_WARNING.to_owned(),
    }
}

/// Whether a line is the removal warning
#[must_use]
pub fn is_removal_warning(line: &str) -> bool {
    line == REMOVAL_WARNING
}

/// Replace every ingredient matching a declared allergy
///
/// Terms that name a whole category ("dairy", "tree nuts") also catch that
/// category's ingredients. The substitute chosen never contains an allergy
/// term; when none qualifies the line becomes [`REMOVAL_WARNING`].
#[must_use]
pub fn apply(mut recipe: Recipe, allergies: &[String]) -> Recipe {
    if allergies.is_empty() {
        return recipe;
    }

    recipe.ingredients = recipe
        .ingredients
        .into_iter()
        .map(|line| match offending_term(&line, allergies) {
            Some((term, category)) => {
                let replaced = substitute_line(&line, category, allergies);
                debug!(allergy = term, original = %line, replacement = %replaced, "Substituted allergen");
                replaced
            }
            None => line,
        })
        .collect();
    recipe
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    fn pancakes() -> Recipe {
        Recipe::new("Pancakes", 4).with_ingredients([
            "1 cup whole milk",
            "2 eggs",
            "1 1/2 cups flour",
            "2 tbsp butter",
        ])
    }

    #[test]
    fn test_category_name_catches_member_ingredients() {
        let adapted = apply(pancakes(), &terms(&["dairy"]));
        assert_eq!(adapted.ingredients[0], "1 cup almond milk");
        assert_eq!(adapted.ingredients[3], "2 tbsp olive oil");
        assert_eq!(adapted.ingredients[1], "2 eggs");
    }

    #[test]
    fn test_substitute_never_contains_an_allergy_term() {
        let adapted = apply(pancakes(), &terms(&["milk"]));
        assert_eq!(adapted.ingredients[0], "1 cup oat beverage");
        assert_eq!(adapted.ingredients[3], "2 tbsp butter");
    }

    #[test]
    fn test_egg_and_flour() {
        let adapted = apply(pancakes(), &terms(&["eggs", "wheat"]));
        assert_eq!(
            adapted.ingredients[1],
            "2 flaxseed gel (1 tbsp ground flaxseed + 3 tbsp water each)"
        );
        assert_eq!(adapted.ingredients[2], "1 1/2 cups rice flour");
    }

    #[test]
    fn test_unknown_allergen_becomes_warning() {
        let recipe = Recipe::new("Salad", 2).with_ingredients(["1 tbsp mustard", "lettuce"]);
        let adapted = apply(recipe, &terms(&["mustard"]));
        assert_eq!(adapted.ingredients[0], REMOVAL_WARNING);
        assert_eq!(adapted.ingredients[1], "lettuce");
    }

    #[test]
    fn test_all_substitutes_conflicting_becomes_warning() {
        let recipe = Recipe::new("Stir Fry", 2).with_ingredients(["2 tbsp soy sauce"]);
        let adapted = apply(recipe, &terms(&["soy", "coconut"]));
        assert_eq!(adapted.ingredients[0], REMOVAL_WARNING);
    }

    #[test]
    fn test_peanut_is_not_a_tree_nut() {
        assert_eq!(category_for("peanut").map(|c| c.name), Some("peanut"));
        assert_eq!(category_for("walnuts").map(|c| c.name), Some("tree nut"));
        assert_eq!(category_for("shellfish").map(|c| c.name), Some("shellfish"));
        assert!(category_for("mustard").is_none());
    }

    #[test]
    fn test_no_allergies_is_identity() {
        assert_eq!(apply(pancakes(), &[]), pancakes());
    }
}
