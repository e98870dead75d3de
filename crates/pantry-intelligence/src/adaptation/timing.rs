// ABOUTME: Timing jitter for recipe variations
// ABOUTME: Nudges the first number of each time field by a few random minutes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

use pantry_core::models::Recipe;
use rand::Rng;

use crate::parsing::{first_integer_span, replace_span};

fn jitter_field<R: Rng>(field: Option<String>, max_minutes: u32, rng: &mut R) -> Option<String> {
    let text = field?;
    let Some((span, minutes)) = first_integer_span(&text) else {
        return Some(text);
    };
    let extra = rng.gen_range(1..=max_minutes);
    Some(replace_span(&text, &span, &minutes.saturating_add(extra).to_string()))
}

/// Add 1..=`max_minutes` minutes to prep, cook, and total time
///
/// Each field draws its own amount. Unparsable fields and the surrounding
/// text are left as they were. A bound of zero disables the adjustment.
#[must_use]
pub fn apply<R: Rng>(mut recipe: Recipe, max_minutes: u32, rng: &mut R) -> Recipe {
    if max_minutes == 0 {
        return recipe;
    }
    recipe.prep_time = jitter_field(recipe.prep_time.take(), max_minutes, rng);
    recipe.cook_time = jitter_field(recipe.cook_time.take(), max_minutes, rng);
    recipe.total_time = jitter_field(recipe.total_time.take(), max_minutes, rng);
    recipe
}
