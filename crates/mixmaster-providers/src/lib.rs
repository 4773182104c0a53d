// ABOUTME: Recipe source implementations for the MixMaster cocktail browser
// ABOUTME: Source trait, TheCocktailDB HTTP client, circuit breaker, and in-memory mock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors

//! Recipe sources and their shared infrastructure.
//!
//! A recipe source answers two lookups, "all recipes" and "recipes matching a term".
//! The state engine only sees the [`RecipeSource`] trait; this crate provides the
//! HTTP-backed [`CocktailDbClient`] and the scripted [`MockRecipeSource`].

// Re-export mixmaster-core modules so source files can keep `use crate::errors::*`
pub use mixmaster_core::constants;
pub use mixmaster_core::errors;
pub use mixmaster_core::models;

/// Circuit breaker pattern for source resilience
pub mod circuit_breaker;
/// `TheCocktailDB` recipe source
pub mod cocktaildb;
/// HTTP client construction for source API calls
pub mod http_client;
/// Scripted in-memory recipe source
pub mod mock;
/// Recipe source trait and lookup queries
pub mod source;

pub use circuit_breaker::{CircuitBreaker, CircuitBreakerConfig, CircuitState};
pub use cocktaildb::{parse_drinks_response, CocktailDbClient, CocktailDbConfig};
pub use http_client::HttpClientConfig;
pub use mixmaster_core::errors::provider::{ProviderError, ProviderResult};
pub use mock::MockRecipeSource;
pub use source::{LookupQuery, RecipeSource};
