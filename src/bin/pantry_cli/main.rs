// ABOUTME: Pantry Chef CLI - recipe suggestions and variations from the command line
// ABOUTME: Prints recipe JSON on stdout and logs to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef
//!
//! Usage:
//! ```bash
//! # Suggest a recipe for what is in the fridge
//! pantry-cli suggest --ingredient chicken --ingredient broccoli
//!
//! # Same, avoiding peanuts and keeping it quick and mild
//! pantry-cli suggest --ingredient rice --allergy peanut --max-minutes 30 --spice mild
//!
//! # Reproducible pick
//! pantry-cli suggest --ingredient tomatoes --seed 42
//!
//! # Turn a saved recipe into a dairy-free variation for four
//! pantry-cli vary --recipe pancakes.json --ingredient blueberries --allergy dairy --portion family
//!
//! # List the catalog
//! pantry-cli catalog --catalog recipes.json
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pantry_chef::config::ServiceConfig;
use pantry_chef::logging::LoggingConfig;
use pantry_chef::services::RecipeService;
use pantry_core::errors::AppResult;
use pantry_core::models::{
    ConstraintSet, DietaryPreference, MicroPreference, PortionSize, SpiceLevel,
};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "pantry-cli",
    about = "Pantry Chef recipe assistant",
    long_about = "Suggests recipes built around the ingredients you have, adapted to your allergies, diet, heat tolerance, and portion size."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON recipe catalog to use instead of the built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Suggest a catalog recipe for your ingredients
    Suggest {
        /// Ingredient you have on hand (repeatable)
        #[arg(long = "ingredient", required = true)]
        ingredients: Vec<String>,

        #[command(flatten)]
        constraints: ConstraintArgs,

        /// Seed for a reproducible pick among equally good recipes
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Adapt a recipe from a JSON file into a variation
    Vary {
        /// JSON file holding the recipe to adapt
        #[arg(long)]
        recipe: PathBuf,

        /// Ingredient to work into the variation (repeatable)
        #[arg(long = "ingredient", required = true)]
        ingredients: Vec<String>,

        #[command(flatten)]
        constraints: ConstraintArgs,

        /// Seed for reproducible timing adjustments
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the recipes in the catalog
    Catalog,
}

/// Constraint flags shared by `suggest` and `vary`
#[derive(Args, Debug, Default)]
struct ConstraintArgs {
    /// Allergy term; recipes mentioning it are never returned (repeatable)
    #[arg(long = "allergy")]
    allergies: Vec<String>,

    /// Ingredient you would rather avoid (repeatable)
    #[arg(long = "dislike")]
    disliked: Vec<String>,

    /// Dietary preference (vegetarian, vegan, pescatarian, gluten-free, dairy-free, keto)
    #[arg(long)]
    diet: Option<DietaryPreference>,

    /// Preferred cuisine, ranked first (repeatable)
    #[arg(long = "cuisine")]
    cuisines: Vec<String>,

    /// Upper bound on prep plus cook time
    #[arg(long)]
    max_minutes: Option<u32>,

    /// Upper bound on calories per serving
    #[arg(long)]
    max_calories: Option<u32>,

    /// Nutrition preference such as high-protein or low-sodium (repeatable)
    #[arg(long = "micro")]
    micro: Vec<MicroPreference>,

    /// Heat level (none, mild, medium, spicy, extra-spicy)
    #[arg(long)]
    spice: Option<SpiceLevel>,

    /// Portion size (single, couple, family, large-group)
    #[arg(long)]
    portion: Option<PortionSize>,
}

impl From<ConstraintArgs> for ConstraintSet {
    fn from(args: ConstraintArgs) -> Self {
        Self::default()
            .with_allergies(args.allergies)
            .with_disliked(args.disliked)
            .with_dietary_preference(args.diet.unwrap_or_default())
            .with_cuisines(args.cuisines)
            .with_cooking_time_limit(args.max_minutes.unwrap_or(0))
            .with_max_calories(args.max_calories.unwrap_or(0))
            .with_micro_preferences(args.micro)
            .with_spice_level(args.spice.unwrap_or_default())
            .with_portion_size(args.portion.unwrap_or_default())
    }
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    let mut config = ServiceConfig::from_env()?;
    if let Some(path) = cli.catalog {
        config.catalog_path = Some(path);
    }
    debug!(?config.catalog_path, timeout_ms = config.request_timeout_ms, "Service configured");

    let service = RecipeService::from_config(config)?;

    match cli.command {
        Command::Suggest {
            ingredients,
            constraints,
            seed,
        } => commands::recipe::suggest(&service, ingredients, constraints.into(), seed).await,
        Command::Vary {
            recipe,
            ingredients,
            constraints,
            seed,
        } => {
            commands::recipe::vary(&service, &recipe, ingredients, constraints.into(), seed).await
        }
        Command::Catalog => commands::catalog::list(&service),
    }
}
