// ABOUTME: Main library entry point for the Pantry Chef recipe service
// ABOUTME: Wires catalogs, configuration, logging, and the recipe service around the pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

#![deny(unsafe_code)]

//! # Pantry Chef
//!
//! Picks a recipe from a catalog for the ingredients a user has on hand, then
//! adapts it to their allergies, heat tolerance, and portion size.
//!
//! ## Architecture
//!
//! - **`pantry-core`**: recipe and constraint models, error types, constants
//! - **`pantry-intelligence`**: constraint filtering, relaxation, scoring,
//!   adaptation, and identity stamping
//! - **this crate**: catalog sources, service configuration, logging, and the
//!   [`services::RecipeService`] callers talk to
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pantry_chef::config::ServiceConfig;
//! use pantry_chef::services::{GenerateRequest, RecipeService};
//! use pantry_core::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let service = RecipeService::from_config(ServiceConfig::from_env()?)?;
//!     let request = GenerateRequest::new(["chicken", "broccoli"]);
//!     let recipe = service.generate_with_timeout(request, None).await?;
//!     println!("{}", recipe.title);
//!     Ok(())
//! }
//! ```

/// Built-in and file-backed recipe catalogs
pub mod catalog;

/// Service configuration from the environment
pub mod config;

/// Structured logging setup
pub mod logging;

/// Recipe service layer
pub mod services;

pub use pantry_core::errors::{AppError, AppResult, ErrorCode};
pub use pantry_core::models::{ConstraintSet, Recipe};
