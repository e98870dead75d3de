// ABOUTME: Tests for loading recipe catalogs from JSON files
// ABOUTME: Verifies parsing, error classification, and selection from a file-backed catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::fs;
use std::path::PathBuf;

use pantry_chef::catalog::{load_catalog, JsonFileCatalog};
use pantry_chef::config::ServiceConfig;
use pantry_chef::services::{GenerateRequest, RecipeService};
use pantry_core::errors::ErrorCode;
use pantry_intelligence::RecipeCatalog;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tempfile::TempDir;

const CATALOG_JSON: &str = r#"[
  {
    "title": "Miso Soup",
    "servings": 2,
    "prepTime": "5 min",
    "cookTime": "10 min",
    "ingredients": ["2 tbsp miso paste", "1 block tofu", "1 sheet nori"],
    "cuisine": "Japanese",
    "tags": ["vegan"],
    "nutrition": { "calories": "120 kcal", "sodium": "1,100 mg" }
  },
  {
    "title": "Shrimp Tacos",
    "servings": 3,
    "ingredients": ["1 lb shrimp", "6 tortillas", "1 lime"],
    "cuisine": "Mexican"
  }
]"#;

fn write_catalog(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("catalog.json");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_json_catalog() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, CATALOG_JSON);

    let catalog = JsonFileCatalog::load(&path).unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.path(), path.as_path());
    let miso = &catalog.list_candidates()[0];
    assert_eq!(miso.title, "Miso Soup");
    assert_eq!(miso.prep_time.as_deref(), Some("5 min"));
    assert!(miso.has_tag("vegan"));
    assert_eq!(catalog.list_candidates()[1].description, "");
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = TempDir::new().unwrap();
    let err = JsonFileCatalog::load(dir.path().join("absent.json")).unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_malformed_json_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, "{ not a recipe list");
    let err = JsonFileCatalog::load(&path).unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[test]
fn test_empty_catalog_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, "[]");
    let err = JsonFileCatalog::load(&path).unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_service_selects_from_configured_file() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, CATALOG_JSON);
    let config = ServiceConfig {
        catalog_path: Some(path),
        ..ServiceConfig::default()
    };

    assert_eq!(load_catalog(&config).unwrap().list_candidates().len(), 2);

    let service = RecipeService::from_config(config).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(10);
    let recipe = service
        .generate(&GenerateRequest::new(["tofu"]), &mut rng)
        .unwrap();
    assert_eq!(recipe.title, "Miso Soup");
}
