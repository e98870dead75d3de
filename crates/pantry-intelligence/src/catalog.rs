// ABOUTME: Read-only recipe catalog abstraction consumed by the selection pipeline
// ABOUTME: Defines the RecipeCatalog trait and an in-memory implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

use std::sync::Arc;

use pantry_core::models::Recipe;

/// Source of candidate recipes
///
/// The only capability is listing candidates through a shared slice, so the
/// pipeline has no way to write back into the catalog. Implementations must be
/// shareable across worker threads without locking.
pub trait RecipeCatalog: Send + Sync {
    /// All recipes available for selection, in catalog order
    fn list_candidates(&self) -> &[Recipe];
}

/// Catalog backed by an owned list of recipes
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    recipes: Vec<Recipe>,
}

impl InMemoryCatalog {
    /// Create a catalog from a list of recipes
    #[must_use]
    pub const fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
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

impl RecipeCatalog for InMemoryCatalog {
    fn list_candidates(&self) -> &[Recipe] {
        &self.recipes
    }
}

impl<C: RecipeCatalog + ?Sized> RecipeCatalog for Arc<C> {
    fn list_candidates(&self) -> &[Recipe] {
        (**self).list_candidates()
    }
}

impl From<Vec<Recipe>> for InMemoryCatalog {
    fn from(recipes: Vec<Recipe>) -> Self {
        Self::new(recipes)
    }
}
