// ABOUTME: Core data models for the MixMaster cocktail browser
// ABOUTME: Re-exports recipe records, ingredient lines, and alcoholic classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors

/// Recipe records and their ingredient lines
pub mod recipe;

pub use recipe::{AlcoholicFlag, IngredientLine, Recipe};
