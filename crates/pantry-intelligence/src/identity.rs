// ABOUTME: Identity stamping for recipes returned by the pipeline
// ABOUTME: Assigns a fresh UUID and timestamp and marks variations in title and description
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

use chrono::Utc;
use pantry_core::constants::variation;
use pantry_core::models::Recipe;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a recipe is being stamped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StampMode {
    /// A recipe picked from the catalog
    Fresh,
    /// An adapted copy of the caller's own recipe
    Variation,
}

/// Gives every returned recipe its own identity
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityAssigner;

impl IdentityAssigner {
    /// Stamp a new identifier and creation time onto `recipe`
    ///
    /// The new id always differs from the one the recipe arrived with. In
    /// [`StampMode::Variation`] the title gains a single "Variation" suffix
    /// and the description a single "A variation of" prefix.
    #[must_use]
    pub fn stamp(mut recipe: Recipe, mode: StampMode) -> Recipe {
        let previous = recipe.id;
        let mut id = Uuid::new_v4();
        while Some(id) == previous {
            id = Uuid::new_v4();
        }
        recipe.id = Some(id);
        recipe.created_at = Some(Utc::now());

        if mode == StampMode::Variation {
            recipe = mark_variation(recipe);
        }
        recipe
    }
}

/// `text` without a trailing word `suffix`, compared ASCII case-insensitively
fn strip_suffix_ignore_case<'a>(text: &'a str, suffix: &str) -> Option<&'a str> {
    let start = text.len().checked_sub(suffix.len())?;
    let head = text.get(..start)?;
    let whole_word = head.is_empty() || head.ends_with(char::is_whitespace);
    let tail = text.get(start..)?;
    (whole_word && tail.eq_ignore_ascii_case(suffix)).then_some(head)
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

fn base_title(title: &str) -> &str {
    let trimmed = title.trim();
    strip_suffix_ignore_case(trimmed, variation::TITLE_SUFFIX).map_or(trimmed, str::trim_end)
}

fn mark_variation(mut recipe: Recipe) -> Recipe {
    let original = base_title(&recipe.title).to_owned();

    if strip_suffix_ignore_case(recipe.title.trim(), variation::TITLE_SUFFIX).is_none() {
        recipe.title = format!("{} {}", recipe.title.trim(), variation::TITLE_SUFFIX);
    }

    if !starts_with_ignore_case(&recipe.description, variation::DESCRIPTION_PREFIX) {
        let rest = recipe.description.trim();
        recipe.description = if rest.is_empty() {
            format!("{} {original}.", variation::DESCRIPTION_PREFIX)
        } else {
            format!("{} {original}. {rest}", variation::DESCRIPTION_PREFIX)
        };
    }
    recipe
}
