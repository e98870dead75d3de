// ABOUTME: Recipe service orchestrating validation, selection, adaptation, and deadlines
// ABOUTME: Exposes generate and modify modes plus timeout-bounded async wrappers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

use std::future::Future;
use std::sync::Arc;

use pantry_core::errors::{AppError, AppResult};
use pantry_core::models::{ConstraintSet, Recipe};
use pantry_intelligence::parsing::contains_any;
use pantry_intelligence::{RecipeCatalog, RecipeEngine};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tokio::time::{sleep, timeout};
use tracing::{debug, info, warn};

use crate::catalog::load_catalog;
use crate::config::ServiceConfig;

/// Ask for a recipe built around the caller's ingredients
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Ingredients the caller has on hand
    pub ingredients: Vec<String>,
    /// Filters and adaptation preferences
    #[serde(default)]
    pub constraints: ConstraintSet,
}

impl GenerateRequest {
    /// Create a request with no constraints
    #[must_use]
    pub fn new<I, S>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            constraints: ConstraintSet::default(),
        }
    }

    /// Attach constraints
    #[must_use]
    pub fn with_constraints(mut self, constraints: ConstraintSet) -> Self {
        self.constraints = constraints;
        self
    }
}

/// Ask for a variation of a recipe the caller already has
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyRequest {
    /// Ingredients the caller wants worked in
    pub ingredients: Vec<String>,
    /// Filters and adaptation preferences
    #[serde(default)]
    pub constraints: ConstraintSet,
    /// The recipe to adapt
    #[serde(default)]
    pub original: Option<Recipe>,
}

impl ModifyRequest {
    /// Create a request for a variation of `original`
    #[must_use]
    pub fn new<I, S>(original: Recipe, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            constraints: ConstraintSet::default(),
            original: Some(original),
        }
    }

    /// Attach constraints
    #[must_use]
    pub fn with_constraints(mut self, constraints: ConstraintSet) -> Self {
        self.constraints = constraints;
        self
    }
}

/// Check the caller's ingredients against their own constraints
fn validate_ingredients(ingredients: &[String], constraints: &ConstraintSet) -> AppResult<()> {
    if ingredients.is_empty() {
        return Err(AppError::missing_field("ingredients"));
    }
    if ingredients.iter().any(|i| i.trim().is_empty()) {
        return Err(AppError::invalid_input("ingredients must not be blank"));
    }
    if let Some(conflict) = ingredients
        .iter()
        .find(|i| contains_any(i, &constraints.allergies))
    {
        return Err(AppError::invalid_input(format!(
            "ingredient '{conflict}' conflicts with a declared allergy"
        )));
    }
    Ok(())
}

fn validate_original(original: Option<Recipe>) -> AppResult<Recipe> {
    let original = original.ok_or_else(|| AppError::missing_field("original recipe"))?;
    if original.title.trim().is_empty() {
        return Err(AppError::invalid_input("original recipe has a blank title"));
    }
    if original.servings == 0 {
        return Err(AppError::invalid_input(format!(
            "original recipe '{}' has zero servings",
            original.title
        )));
    }
    Ok(original)
}

fn rng_for(seed: Option<u64>) -> ChaCha8Rng {
    seed.map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64)
}

/// Entry point for recipe suggestions and variations
///
/// Cloning is cheap: the catalog is shared behind an `Arc` and never written,
/// so clones can serve requests from different tasks without locking.
#[derive(Clone)]
pub struct RecipeService {
    catalog: Arc<dyn RecipeCatalog>,
    engine: RecipeEngine,
    config: ServiceConfig,
}

impl RecipeService {
    /// Create a service over `catalog`
    #[must_use]
    pub fn new(catalog: Arc<dyn RecipeCatalog>, config: ServiceConfig) -> Self {
        Self {
            catalog,
            engine: RecipeEngine::with_config(&config.pipeline),
            config,
        }
    }

    /// Create a service using the catalog named by `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the configured catalog file cannot be loaded
    pub fn from_config(config: ServiceConfig) -> AppResult<Self> {
        let catalog = load_catalog(&config)?;
        Ok(Self::new(catalog, config))
    }

    /// The catalog this service selects from
    #[must_use]
    pub fn catalog(&self) -> &dyn RecipeCatalog {
        self.catalog.as_ref()
    }

    /// Service configuration
    #[must_use]
    pub const fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Suggest a recipe for the caller's ingredients
    ///
    /// When no catalog recipe is safe for the declared allergies, the result
    /// is the "No Safe Recipe Found" placeholder rather than an error.
    ///
    /// # Errors
    ///
    /// Returns a validation error for missing, blank, or allergen-containing
    /// ingredients, and a generation error if the pipeline produces an
    /// inconsistent recipe.
    pub fn generate<R: Rng>(&self, request: &GenerateRequest, rng: &mut R) -> AppResult<Recipe> {
        let constraints = request.constraints.clone().normalized();
        validate_ingredients(&request.ingredients, &constraints)?;

        debug!(
            ingredients = request.ingredients.len(),
            allergies = constraints.allergies.len(),
            catalog = self.catalog.list_candidates().len(),
            "Generating recipe"
        );
        self.engine
            .generate(self.catalog.as_ref(), &request.ingredients, &constraints, rng)
    }

    /// Turn the caller's recipe into a variation
    ///
    /// # Errors
    ///
    /// Returns a validation error for a missing or malformed original recipe
    /// and for invalid ingredients, and a generation error if the variation
    /// would still contain a declared allergen.
    pub fn modify<R: Rng>(&self, request: ModifyRequest, rng: &mut R) -> AppResult<Recipe> {
        let constraints = request.constraints.normalized();
        validate_ingredients(&request.ingredients, &constraints)?;
        let original = validate_original(request.original)?;

        debug!(
            title = %original.title,
            ingredients = request.ingredients.len(),
            "Generating variation"
        );
        self.engine
            .vary(original, &request.ingredients, &constraints, rng)
    }

    /// [`Self::generate`] bounded by the configured request timeout
    ///
    /// `seed` makes the pick reproducible; without it the tie-break is drawn
    /// from entropy.
    ///
    /// # Errors
    ///
    /// Returns a timeout error if the deadline elapses, plus everything
    /// [`Self::generate`] can return.
    pub async fn generate_with_timeout(
        &self,
        request: GenerateRequest,
        seed: Option<u64>,
    ) -> AppResult<Recipe> {
        let work = async move {
            self.simulate_latency().await;
            let mut rng = rng_for(seed);
            self.generate(&request, &mut rng)
        };
        self.with_deadline("recipe generation", work).await
    }

    /// [`Self::modify`] bounded by the configured request timeout
    ///
    /// # Errors
    ///
    /// Returns a timeout error if the deadline elapses, plus everything
    /// [`Self::modify`] can return.
    pub async fn modify_with_timeout(
        &self,
        request: ModifyRequest,
        seed: Option<u64>,
    ) -> AppResult<Recipe> {
        let work = async move {
            self.simulate_latency().await;
            let mut rng = rng_for(seed);
            self.modify(request, &mut rng)
        };
        self.with_deadline("recipe variation", work).await
    }

    async fn simulate_latency(&self) {
        let latency = self.config.simulated_latency();
        if !latency.is_zero() {
            sleep(latency).await;
        }
    }

    async fn with_deadline<F>(&self, operation: &str, work: F) -> AppResult<Recipe>
    where
        F: Future<Output = AppResult<Recipe>> + Send,
    {
        match timeout(self.config.request_timeout(), work).await {
            Ok(result) => {
                if let Ok(recipe) = &result {
                    info!(operation, title = %recipe.title, "Request completed");
                }
                result
            }
            Err(_) => {
                warn!(
                    operation,
                    timeout_ms = self.config.request_timeout_ms,
                    "Request deadline elapsed"
                );
                Err(AppError::timeout(operation, self.config.request_timeout_ms))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_core::errors::ErrorCode;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_blank_ingredient_is_rejected() {
        let err = validate_ingredients(&owned(&["rice", "  "]), &ConstraintSet::default())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_missing_ingredients_are_rejected() {
        let err = validate_ingredients(&[], &ConstraintSet::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingRequiredField);
    }

    #[test]
    fn test_missing_original_is_rejected() {
        let err = validate_original(None).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingRequiredField);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a: u64 = rng_for(Some(7)).gen();
        let b: u64 = rng_for(Some(7)).gen();
        assert_eq!(a, b);
    }
}
