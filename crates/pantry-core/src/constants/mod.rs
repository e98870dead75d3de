// ABOUTME: Shared constants for the recipe selection pipeline and service
// ABOUTME: Placeholder text, well-known tags, and variation markers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

/// Safety placeholder returned when no catalog recipe survives the allergy filter
pub mod placeholder {
    /// Title of the placeholder recipe
    pub const TITLE: &str = "No Safe Recipe Found";

    /// Description of the placeholder recipe
    pub const DESCRIPTION: &str =
        "None of the available recipes are safe for the allergies you declared.";

    /// Tag marking a recipe as the safety placeholder
    pub const TAG: &str = "no-safe-match";

    /// Steps shown to the user in place of cooking instructions
    pub const STEPS: [&str; 3] = [
        "No recipe in the catalog is free of every allergen you declared.",
        "Review your allergy settings or try a different set of ingredients.",
        "Always double-check ingredient labels before cooking.",
    ];
}

/// Variation markers applied when adapting a user's own recipe
pub mod variation {
    /// Word appended to the title of a variation
    pub const TITLE_SUFFIX: &str = "Variation";

    /// Prefix added to a variation's description
    pub const DESCRIPTION_PREFIX: &str = "A variation of";
}

/// Service names for structured logging
pub mod service_names {
    /// Default service name reported in log output
    pub const PANTRY_CHEF: &str = "pantry-chef";
}

/// Service-level defaults
pub mod service {
    /// Default caller deadline for a single request, in milliseconds
    pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

    /// Default simulated generation latency, in milliseconds
    pub const DEFAULT_SIMULATED_LATENCY_MS: u64 = 0;
}
