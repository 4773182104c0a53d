// ABOUTME: Constants shared across the MixMaster crates
// ABOUTME: Recipe limits, upstream alcoholic labels, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors

/// Recipe record limits
pub mod recipe {
    /// Number of ingredient slots an upstream drink record carries
    pub const MAX_INGREDIENT_SLOTS: usize = 15;
}

/// Upstream free-text values of the alcoholic field
pub mod alcoholic_labels {
    /// Drink contains alcohol
    pub const ALCOHOLIC: &str = "Alcoholic";
    /// Drink contains no alcohol
    pub const NON_ALCOHOLIC: &str = "Non alcoholic";
    /// Alcohol can be added or left out
    pub const OPTIONAL: &str = "Optional alcohol";
}

/// Service and source names used in logs and errors
pub mod service_names {
    /// Name of the browser service
    pub const MIXMASTER: &str = "mixmaster";
    /// Name of the `TheCocktailDB` recipe source
    pub const COCKTAIL_DB: &str = "TheCocktailDB";
    /// Name of the in-memory recipe source
    pub const MOCK_SOURCE: &str = "mock";
}
