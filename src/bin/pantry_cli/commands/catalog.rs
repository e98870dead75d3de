// ABOUTME: Catalog listing command for pantry-cli
// ABOUTME: Prints a JSON summary of every recipe the service can select from
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

use pantry_chef::services::RecipeService;
use pantry_core::errors::AppResult;
use serde_json::{json, Value};

use crate::helpers::display::print_json;

/// List catalog recipes
pub fn list(service: &RecipeService) -> AppResult<()> {
    let entries: Vec<Value> = service
        .catalog()
        .list_candidates()
        .iter()
        .map(|recipe| {
            json!({
                "title": recipe.title,
                "cuisine": recipe.cuisine,
                "servings": recipe.servings,
                "tags": recipe.tags,
            })
        })
        .collect();

    print_json(&entries)
}
