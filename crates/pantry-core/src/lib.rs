// ABOUTME: Core types and constants for the Pantry Chef recipe assistant
// ABOUTME: Foundation crate with the recipe data model, constraints, and error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

#![deny(unsafe_code)]

//! # Pantry Core
//!
//! Foundation crate providing shared types for the Pantry Chef recipe
//! selection and adaptation pipeline. It changes rarely, so the pipeline and
//! service crates can build on it without pulling in each other.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **models**: `Recipe`, `RecipeStep`, `NutritionFacts`, and the `ConstraintSet` inputs
//! - **constants**: Vocabulary and fixed values shared by the pipeline and the service

/// Unified error handling with standard error codes
pub mod errors;

/// Recipe data model and user constraint types
pub mod models;

/// Shared constants (placeholder text, tags, default values)
pub mod constants;
