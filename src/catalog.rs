// ABOUTME: Catalog sources for the recipe service: the built-in list and JSON files on disk
// ABOUTME: Every source is loaded once and is read-only afterwards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use pantry_core::errors::{AppError, AppResult};
use pantry_core::models::{Difficulty, NutritionFacts, Recipe};
use pantry_intelligence::{InMemoryCatalog, RecipeCatalog};
use tracing::info;

use crate::config::ServiceConfig;

/// The catalog shipped with the service
#[must_use]
pub fn builtin_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new(vec![
        Recipe::new("Garlic Chicken Stir Fry", 2)
            .with_description("Quick weeknight stir fry with crisp vegetables.")
            .with_ingredients([
                "2 chicken breasts, sliced",
                "2 cups broccoli florets",
                "3 cloves garlic",
                "2 tbsp soy sauce",
                "1 tsp chili flakes",
                "1 cup rice",
            ])
            .with_prep_time("10 min")
            .with_cook_time("15 min")
            .with_instruction("Cook the rice.")
            .with_instruction("Stir fry the chicken until golden, then add garlic and broccoli.")
            .with_instruction("Toss with soy sauce and chili flakes and serve over rice.")
            .with_category("Dinner")
            .with_cuisine("Chinese")
            .with_difficulty(Difficulty::Easy)
            .with_tag("high-protein")
            .with_nutrition(
                NutritionFacts::default()
                    .with_calories("480 kcal")
                    .with_protein("38g")
                    .with_carbs("45g")
                    .with_fat("12g")
                    .with_sodium("980 mg")
                    .with_fiber("4g")
                    .with_sugar("5g"),
            ),
        Recipe::new("Tomato Basil Pasta", 4)
            .with_description("Bright tomato sauce tossed with fresh basil.")
            .with_ingredients([
                "400 g spaghetti",
                "6 tomatoes, chopped",
                "1 bunch basil",
                "2 cloves garlic",
                "3 tbsp olive oil",
                "1/2 cup parmesan",
            ])
            .with_prep_time("10 min")
            .with_cook_time("20 min")
            .with_instruction("Boil the pasta.")
            .with_instruction("Simmer tomatoes with garlic and olive oil.")
            .with_instruction("Toss pasta with the sauce, basil, and parmesan.")
            .with_category("Dinner")
            .with_cuisine("Italian")
            .with_difficulty(Difficulty::Easy)
            .with_tag("vegetarian")
            .with_nutrition(
                NutritionFacts::default()
                    .with_calories("560 kcal")
                    .with_protein("18g")
                    .with_carbs("82g")
                    .with_fat("16g")
                    .with_sodium("420 mg")
                    .with_fiber("6g")
                    .with_sugar("9g"),
            ),
        Recipe::new("Chickpea Quinoa Bowl", 2)
            .with_description("Hearty grain bowl with lemon tahini dressing.")
            .with_ingredients([
                "1 cup quinoa",
                "1 can chickpeas",
                "1 cucumber",
                "1 lemon",
                "2 tbsp tahini",
                "1 tsp cumin",
            ])
            .with_prep_time("15 min")
            .with_cook_time("15 min")
            .with_instruction("Cook the quinoa.")
            .with_instruction("Roast chickpeas with cumin.")
            .with_instruction("Assemble with cucumber and drizzle with lemon tahini.")
            .with_category("Lunch")
            .with_cuisine("Mediterranean")
            .with_difficulty(Difficulty::Easy)
            .with_tag("vegan")
            .with_tag("gluten-free")
            .with_nutrition(
                NutritionFacts::default()
                    .with_calories("520 kcal")
                    .with_protein("21g")
                    .with_carbs("70g")
                    .with_fat("17g")
                    .with_sodium("310 mg")
                    .with_fiber("14g")
                    .with_sugar("6g"),
            ),
        Recipe::new("Spinach Cheese Omelette", 1)
            .with_description("Fluffy omelette folded around spinach and cheddar.")
            .with_ingredients([
                "3 eggs",
                "1/4 cup milk",
                "1 cup spinach",
                "1/4 cup cheddar cheese",
                "1 tbsp butter",
            ])
            .with_prep_time("5 min")
            .with_cook_time("10 min")
            .with_instruction("Whisk eggs with milk.")
            .with_instruction("Wilt spinach in butter, pour in the eggs, and cook until set.")
            .with_instruction("Add cheddar, fold, and serve.")
            .with_category("Breakfast")
            .with_cuisine("French")
            .with_difficulty(Difficulty::Easy)
            .with_tag("vegetarian")
            .with_tag("keto")
            .with_nutrition(
                NutritionFacts::default()
                    .with_calories("390 kcal")
                    .with_protein("27g")
                    .with_carbs("4g")
                    .with_fat("29g")
                    .with_sodium("520 mg")
                    .with_fiber("1g")
                    .with_sugar("3g"),
            ),
        Recipe::new("Beef and Bean Chili", 6)
            .with_description("Slow simmered chili with plenty of heat.")
            .with_ingredients([
                "1 lb ground beef",
                "2 cans kidney beans",
                "1 onion",
                "1 can crushed tomatoes",
                "2 tbsp chili powder",
                "1 tsp cayenne pepper",
            ])
            .with_prep_time("15 min")
            .with_cook_time("75 min")
            .with_total_time("90 min")
            .with_instruction("Brown the beef with onion.")
            .with_instruction("Add tomatoes, beans, and spices.")
            .with_instruction("Simmer for an hour, stirring now and then.")
            .with_category("Dinner")
            .with_cuisine("Mexican")
            .with_difficulty(Difficulty::Medium)
            .with_tag("high-protein")
            .with_nutrition(
                NutritionFacts::default()
                    .with_calories("610 kcal")
                    .with_protein("42g")
                    .with_carbs("48g")
                    .with_fat("24g")
                    .with_sodium("1,150 mg")
                    .with_fiber("13g")
                    .with_sugar("8g"),
            ),
        Recipe::new("Lemon Herb Salmon", 2)
            .with_description("Oven baked salmon with lemon and dill.")
            .with_ingredients([
                "2 salmon fillets",
                "1 lemon",
                "1 tbsp fresh dill",
                "1 tbsp olive oil",
                "1 lb asparagus",
            ])
            .with_prep_time("10 min")
            .with_cook_time("18 min")
            .with_instruction("Arrange salmon and asparagus on a sheet pan.")
            .with_instruction("Top with lemon slices, dill, and olive oil.")
            .with_instruction("Bake until the salmon flakes easily.")
            .with_category("Dinner")
            .with_cuisine("Nordic")
            .with_difficulty(Difficulty::Easy)
            .with_tag("gluten-free")
            .with_tag("dairy-free")
            .with_tag("keto")
            .with_nutrition(
                NutritionFacts::default()
                    .with_calories("430 kcal")
                    .with_protein("36g")
                    .with_carbs("9g")
                    .with_fat("27g")
                    .with_sodium("240 mg")
                    .with_fiber("4g")
                    .with_sugar("3g"),
            ),
        Recipe::new("Thai Peanut Noodles", 3)
            .with_description("Cold noodles in a creamy peanut sauce.")
            .with_ingredients([
                "250 g rice noodles",
                "1/3 cup peanut butter",
                "2 tbsp soy sauce",
                "1 tbsp lime juice",
                "1 carrot, shredded",
                "1 tsp sriracha",
            ])
            .with_prep_time("15 min")
            .with_cook_time("10 min")
            .with_instruction("Cook and rinse the noodles.")
            .with_instruction("Whisk peanut butter, soy sauce, lime juice, and sriracha.")
            .with_instruction("Toss noodles with sauce and carrot.")
            .with_category("Lunch")
            .with_cuisine("Thai")
            .with_difficulty(Difficulty::Easy)
            .with_tag("vegan")
            .with_nutrition(
                NutritionFacts::default()
                    .with_calories("540 kcal")
                    .with_protein("16g")
                    .with_carbs("72g")
                    .with_fat("21g")
                    .with_sodium("890 mg")
                    .with_fiber("5g")
                    .with_sugar("10g"),
            ),
        Recipe::new("Roasted Vegetable Soup", 4)
            .with_description("Mellow soup of roasted root vegetables.")
            .with_ingredients([
                "3 carrots",
                "2 potatoes",
                "1 onion",
                "4 cups vegetable broth",
                "2 tbsp olive oil",
                "1 tsp thyme",
            ])
            .with_prep_time("15 min")
            .with_cook_time("40 min")
            .with_instruction("Roast the vegetables with olive oil and thyme.")
            .with_instruction("Simmer in broth for ten minutes.")
            .with_instruction("Blend until smooth.")
            .with_category("Lunch")
            .with_cuisine("American")
            .with_difficulty(Difficulty::Easy)
            .with_tag("vegan")
            .with_tag("gluten-free")
            .with_nutrition(
                NutritionFacts::default()
                    .with_calories("260 kcal")
                    .with_protein("5g")
                    .with_carbs("38g")
                    .with_fat("9g")
                    .with_sodium("640 mg")
                    .with_fiber("7g")
                    .with_sugar("9g"),
            ),
    ])
}

/// Catalog read from a JSON array of recipes
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
    recipes: Vec<Recipe>,
}

impl JsonFileCatalog {
    /// Read and parse the catalog at `path`
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file cannot be read or holds no
    /// recipes, and a serialization error if it is not a JSON recipe array.
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::config(format!("cannot read catalog {}: {e}", path.display()))
                .with_source(e)
        })?;
        let recipes: Vec<Recipe> = serde_json::from_str(&raw)?;

        if recipes.is_empty() {
            return Err(AppError::config(format!(
                "catalog {} contains no recipes",
                path.display()
            )));
        }

        info!(path = %path.display(), recipes = recipes.len(), "Loaded recipe catalog");
        Ok(Self {
            path: path.to_path_buf(),
            recipes,
        })
    }

    /// Where this catalog was loaded from
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of recipes in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl RecipeCatalog for JsonFileCatalog {
    fn list_candidates(&self) -> &[Recipe] {
        &self.recipes
    }
}

/// The catalog named by `config`, or the built-in one
///
/// # Errors
///
/// Returns an error if the configured catalog file cannot be loaded
pub fn load_catalog(config: &ServiceConfig) -> AppResult<Arc<dyn RecipeCatalog>> {
    match &config.catalog_path {
        Some(path) => Ok(Arc::new(JsonFileCatalog::load(path)?)),
        None => Ok(Arc::new(builtin_catalog())),
    }
}
