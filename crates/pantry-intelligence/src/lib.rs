// ABOUTME: Recipe selection and adaptation engine for the Pantry Chef assistant
// ABOUTME: Filters a read-only catalog, picks a winner, and adapts it to the user's preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

#![deny(unsafe_code)]

//! # Pantry Intelligence
//!
//! The recipe selection and adaptation pipeline:
//!
//! 1. [`pipeline::ConstraintPipeline`] narrows the catalog stage by stage
//!    (allergies, dislikes, diet, cuisine ordering, cooking time, calories).
//! 2. [`pipeline::RelaxationController`] supervises each stage: soft
//!    constraints that would empty the pool are skipped, allergies never are.
//! 3. [`pipeline::ScoringSelector`] ranks survivors by micro-nutrient fit and
//!    ingredient overlap and picks a winner.
//! 4. [`adaptation::AdaptationEngine`] rewrites a copy of the winner for spice
//!    level, allergens, and portion size.
//! 5. [`identity::IdentityAssigner`] stamps a fresh identifier.
//!
//! [`engine::RecipeEngine`] wires the steps together. All randomness comes from
//! an injected `rand::Rng` so callers can seed it.

/// Spice, allergen, portion, and timing adaptation
pub mod adaptation;
/// Read-only recipe catalog abstraction
pub mod catalog;
/// Pipeline configuration (thresholds, tie-breaking, adaptation factors)
pub mod config;
/// End-to-end selection and variation flows
pub mod engine;
/// Identifier and variation title stamping
pub mod identity;
/// Numeric and text matching helpers shared by every stage
pub mod parsing;
/// Constraint filtering, relaxation, and scoring
pub mod pipeline;

pub use adaptation::AdaptationEngine;
pub use catalog::{InMemoryCatalog, RecipeCatalog};
pub use config::{ConfigError, PipelineConfig};
pub use engine::{RecipeEngine, Selection};
pub use identity::{IdentityAssigner, StampMode};
pub use pipeline::{
    CandidatePool, ConstraintKind, ConstraintPipeline, FilterOutcome, RelaxationController,
    RelaxationNote, ScoreRecord, ScoringSelector,
};
