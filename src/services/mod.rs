// ABOUTME: Domain service layer wrapping the recipe pipeline for callers
// ABOUTME: Provides request validation, orchestration, and deadline handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

//! Domain service layer
//!
//! Services are the only entry point callers use. They validate requests,
//! pick the catalog, and hand work to the pipeline engine, so the same rules
//! apply whether the caller is the CLI or an embedding application.

/// Recipe suggestions and variations
pub mod recipes;

pub use recipes::{GenerateRequest, ModifyRequest, RecipeService};
