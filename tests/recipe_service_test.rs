// ABOUTME: Integration tests for the recipe service generate and modify modes
// ABOUTME: Covers request validation, safety placeholder, relaxation, adaptation, and deadlines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::Arc;

use pantry_chef::catalog::builtin_catalog;
use pantry_chef::config::ServiceConfig;
use pantry_chef::services::{GenerateRequest, ModifyRequest, RecipeService};
use pantry_core::errors::{ErrorCode, ErrorKind};
use pantry_core::models::{ConstraintSet, PortionSize, Recipe, SpiceLevel};
use pantry_intelligence::adaptation::spice::is_spice_ingredient;
use pantry_intelligence::InMemoryCatalog;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ============================================================================
// Fixtures
// ============================================================================

fn service_over(recipes: Vec<Recipe>) -> RecipeService {
    RecipeService::new(
        Arc::new(InMemoryCatalog::new(recipes)),
        ServiceConfig::default(),
    )
}

fn builtin_service() -> RecipeService {
    RecipeService::new(Arc::new(builtin_catalog()), ServiceConfig::default())
}

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn plain_rice() -> Recipe {
    Recipe::new("Plain Rice", 2)
        .with_description("Fluffy steamed rice.")
        .with_ingredients(["1 cup rice", "2 cups water"])
        .with_prep_time("5 min")
        .with_cook_time("20 min")
}

// ============================================================================
// Generate
// ============================================================================

#[test]
fn test_suggestion_contains_both_ingredients() {
    let request = GenerateRequest::new(["chicken", "broccoli"]);
    let recipe = builtin_service().generate(&request, &mut rng(1)).unwrap();

    assert_eq!(recipe.title, "Garlic Chicken Stir Fry");
    assert!(recipe.ingredients.iter().any(|i| i.contains("chicken")));
    assert!(recipe.ingredients.iter().any(|i| i.contains("broccoli")));
    assert!(recipe.id.is_some());
    assert!(recipe.created_at.is_some());
}

#[test]
fn test_allergies_covering_whole_catalog_return_placeholder() {
    let service = service_over(vec![
        Recipe::new("Custard", 4).with_ingredients(["2 cups milk", "3 eggs", "1/2 cup sugar"]),
        Recipe::new("Scrambled Eggs", 1).with_ingredients(["2 eggs", "2 tbsp milk"]),
    ]);
    let request = GenerateRequest::new(["flour"])
        .with_constraints(ConstraintSet::default().with_allergies(["milk", "eggs"]));

    let recipe = service.generate(&request, &mut rng(2)).unwrap();

    assert!(recipe.is_safety_placeholder());
    assert_eq!(recipe.title, "No Safe Recipe Found");
    assert_eq!(recipe.servings, 1);
    assert_eq!(recipe.ingredients, vec!["flour".to_owned()]);
    assert!(!recipe.steps.is_empty());
}

#[test]
fn test_unmeetable_time_limit_is_relaxed() {
    let service = service_over(vec![
        plain_rice(),
        Recipe::new("Lentil Stew", 4)
            .with_ingredients(["1 cup lentils", "1 carrot"])
            .with_prep_time("10 min")
            .with_cook_time("35 min"),
    ]);
    let request = GenerateRequest::new(["lentils"])
        .with_constraints(ConstraintSet::default().with_cooking_time_limit(20));

    let recipe = service.generate(&request, &mut rng(3)).unwrap();
    assert_eq!(recipe.title, "Lentil Stew");
}

#[test]
fn test_extra_spicy_adds_two_heat_ingredients() {
    let service = service_over(vec![plain_rice()]);
    let request = GenerateRequest::new(["rice"])
        .with_constraints(ConstraintSet::default().with_spice_level(SpiceLevel::ExtraSpicy));

    let recipe = service.generate(&request, &mut rng(4)).unwrap();

    let heat: Vec<&String> = recipe
        .ingredients
        .iter()
        .filter(|line| is_spice_ingredient(line))
        .collect();
    assert_eq!(heat.len(), 2);
    assert!(recipe.description.ends_with("Adjusted for extra spicy heat."));
}

#[test]
fn test_family_portion_doubles_two_servings() {
    let service = service_over(vec![plain_rice()]);
    let request = GenerateRequest::new(["rice"])
        .with_constraints(ConstraintSet::default().with_portion_size(PortionSize::Family));

    let recipe = service.generate(&request, &mut rng(5)).unwrap();
    assert_eq!(recipe.servings, 4);
}

#[test]
fn test_blank_allergy_terms_are_ignored() {
    let request = GenerateRequest::new(["chicken"])
        .with_constraints(ConstraintSet::default().with_allergies(["  ", ""]));
    let recipe = builtin_service().generate(&request, &mut rng(6)).unwrap();
    assert!(!recipe.is_safety_placeholder());
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_empty_ingredient_list_is_rejected() {
    let request = GenerateRequest::new(Vec::<String>::new());
    let err = builtin_service().generate(&request, &mut rng(7)).unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert!(!err.is_retryable());
}

#[test]
fn test_blank_ingredient_is_rejected() {
    let request = GenerateRequest::new(["rice", " "]);
    let err = builtin_service().generate(&request, &mut rng(7)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn test_ingredient_matching_allergy_is_rejected() {
    let request = GenerateRequest::new(["Peanut butter"])
        .with_constraints(ConstraintSet::default().with_allergies(["peanut"]));
    let err = builtin_service().generate(&request, &mut rng(7)).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_modify_without_original_is_rejected() {
    let request = ModifyRequest {
        ingredients: vec!["rice".to_owned()],
        ..ModifyRequest::default()
    };
    let err = builtin_service().modify(request, &mut rng(8)).unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
}

#[test]
fn test_modify_with_zero_servings_is_rejected() {
    let request = ModifyRequest::new(Recipe::new("Toast", 0), ["butter"]);
    let err = builtin_service().modify(request, &mut rng(8)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

// ============================================================================
// Modify
// ============================================================================

#[test]
fn test_modify_produces_variation() {
    let original = Recipe::new("Pancakes", 2)
        .with_description("Weekend pancakes.")
        .with_ingredients(["1 cup milk", "1 egg", "1 cup flour"])
        .with_prep_time("10 min")
        .with_cook_time("15 min");
    let request = ModifyRequest::new(original, ["banana"]).with_constraints(
        ConstraintSet::default()
            .with_allergies(["milk"])
            .with_portion_size(PortionSize::Family),
    );

    let varied = builtin_service().modify(request, &mut rng(9)).unwrap();

    assert_eq!(varied.title, "Pancakes Variation");
    assert!(varied.description.starts_with("A variation of Pancakes."));
    assert_eq!(varied.servings, 4);
    assert_eq!(varied.ingredients[0], "banana");
    assert!(varied
        .ingredients
        .iter()
        .all(|line| !line.to_lowercase().contains("milk")));
    assert_ne!(varied.prep_time.as_deref(), Some("10 min"));
}

// ============================================================================
// Deadlines
// ============================================================================

#[tokio::test]
async fn test_generate_with_timeout_returns_recipe() {
    let service = builtin_service();
    let first = service
        .generate_with_timeout(GenerateRequest::new(["tomatoes", "basil"]), Some(11))
        .await
        .unwrap();
    let second = service
        .generate_with_timeout(GenerateRequest::new(["tomatoes", "basil"]), Some(11))
        .await
        .unwrap();

    assert_eq!(first.title, "Tomato Basil Pasta");
    assert_eq!(first.title, second.title);
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_slow_generation_times_out() {
    let config = ServiceConfig::default()
        .with_simulated_latency_ms(500)
        .with_request_timeout_ms(20);
    let service = RecipeService::new(Arc::new(builtin_catalog()), config);

    let err = service
        .generate_with_timeout(GenerateRequest::new(["rice"]), Some(1))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::Timeout);
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_modify_with_timeout_validates_first() {
    let err = builtin_service()
        .modify_with_timeout(ModifyRequest::default(), None)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[tokio::test]
async fn test_service_clones_share_catalog_across_tasks() {
    let service = builtin_service();
    let mut handles = Vec::new();
    for seed in 0..4 {
        let worker = service.clone();
        handles.push(tokio::spawn(async move {
            worker
                .generate_with_timeout(GenerateRequest::new(["salmon"]), Some(seed))
                .await
        }));
    }

    for handle in handles {
        let recipe = handle.await.unwrap().unwrap();
        assert_eq!(recipe.title, "Lemon Herb Salmon");
    }
}
