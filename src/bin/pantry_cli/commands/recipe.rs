// ABOUTME: Suggest and vary commands for pantry-cli
// ABOUTME: Builds service requests from flags and prints the resulting recipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

use std::fs;
use std::path::Path;

use pantry_chef::services::{GenerateRequest, ModifyRequest, RecipeService};
use pantry_core::errors::{AppError, AppResult};
use pantry_core::models::{ConstraintSet, Recipe};
use tracing::{info, warn};

use crate::helpers::display::print_json;

/// Suggest a catalog recipe
pub async fn suggest(
    service: &RecipeService,
    ingredients: Vec<String>,
    constraints: ConstraintSet,
    seed: Option<u64>,
) -> AppResult<()> {
    info!(ingredients = ingredients.len(), "Suggesting recipe");

    let request = GenerateRequest {
        ingredients,
        constraints,
    };
    let recipe = service.generate_with_timeout(request, seed).await?;

    if recipe.is_safety_placeholder() {
        warn!("No catalog recipe is safe for the declared allergies");
    }
    print_json(&recipe)
}

/// Adapt the recipe stored at `path` into a variation
pub async fn vary(
    service: &RecipeService,
    path: &Path,
    ingredients: Vec<String>,
    constraints: ConstraintSet,
    seed: Option<u64>,
) -> AppResult<()> {
    let original = read_recipe(path)?;
    info!(title = %original.title, "Creating variation");

    let request = ModifyRequest {
        ingredients,
        constraints,
        original: Some(original),
    };
    let recipe = service.modify_with_timeout(request, seed).await?;
    print_json(&recipe)
}

fn read_recipe(path: &Path) -> AppResult<Recipe> {
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::invalid_input(format!("cannot read recipe {}: {e}", path.display()))
            .with_source(e)
    })?;
    Ok(serde_json::from_str(&raw)?)
}
