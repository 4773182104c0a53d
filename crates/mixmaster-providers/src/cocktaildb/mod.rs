// ABOUTME: TheCocktailDB recipe source module
// ABOUTME: HTTP client plus the wire format of the drinks search endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors

//! `TheCocktailDB` recipe source
//!
//! The public API (<https://www.thecocktaildb.com/api.php>) answers
//! `search.php?s=<term>` with `{"drinks": [...]}`, or `{"drinks": null}` when nothing
//! matches. An empty term lists every drink.

/// HTTP client implementing `RecipeSource`
pub mod client;
/// Drinks envelope parsing and conversion into `Recipe`
pub mod wire;

pub use client::{CocktailDbClient, CocktailDbConfig, DEFAULT_BASE_URL};
pub use wire::parse_drinks_response;
