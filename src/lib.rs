// ABOUTME: Main library entry point for the MixMaster cocktail catalog browser
// ABOUTME: State and derivation engine, search dispatcher, and browsing session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors

#![deny(unsafe_code)]

//! # MixMaster
//!
//! An interactive catalog browser for cocktail recipes. It fetches recipe records
//! from a remote lookup service, lets the user search and filter them, tracks the
//! ingredients the user has on hand ("My Bar"), derives which recipes are makeable
//! from them, and keeps a set of favorites. All state lives in the running process.
//!
//! ## Architecture
//!
//! - **Engine**: pure derivation (normalizer, can-make predicate, filter pipeline)
//!   and the inventory and favorites sets
//! - **Dispatcher**: turns search terms into sequenced lookups
//! - **State**: the state container and its reducer [`state::apply_intent`]
//! - **Session**: runs lookups on tokio tasks and applies their results
//! - **Providers**: recipe sources (`TheCocktailDB` over HTTP, an in-memory mock)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use mixmaster::providers::{CocktailDbClient, CocktailDbConfig};
//! use mixmaster::session::BrowserSession;
//! use mixmaster::state::Intent;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = Arc::new(CocktailDbClient::new(CocktailDbConfig::default())?);
//!     let mut session = BrowserSession::new(source, Duration::from_secs(20));
//!     session.start();
//!     session.dispatch(Intent::ChangeSearchTerm("margarita".into()));
//!     session.settle().await;
//!
//!     for recipe in session.view().visible {
//!         println!("{} ({})", recipe.name, recipe.alcoholic_flag);
//!     }
//!     Ok(())
//! }
//! ```

// Re-export the workspace crates so callers can keep `use mixmaster::errors::*`
pub use mixmaster_core::errors;
pub use mixmaster_core::models;
pub use mixmaster_providers as providers;

/// Environment-based configuration
pub mod config;

/// Environment variable names and defaults
pub mod constants;

/// Search term to lookup mapping with request sequencing
pub mod dispatcher;

/// Pure derivation engine and user-owned sets
pub mod engine;

/// Structured logging setup
pub mod logging;

/// Browsing session running lookups and applying their results
pub mod session;

/// State container and reducer
pub mod state;
