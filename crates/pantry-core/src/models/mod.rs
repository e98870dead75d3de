// ABOUTME: Data models shared by the recipe pipeline, service, and CLI
// ABOUTME: Re-exports recipe and constraint types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

/// User constraints and preference enumerations
pub mod constraints;
/// Recipe, step, and nutrition records
pub mod recipe;

pub use constraints::{ConstraintSet, DietaryPreference, MicroPreference, PortionSize, SpiceLevel};
pub use recipe::{Difficulty, NutritionFacts, Recipe, RecipeStep};
