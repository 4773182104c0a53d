// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, a sample catalog, and session helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `mixmaster`

use mixmaster::models::{AlcoholicFlag, Recipe};
use mixmaster::providers::MockRecipeSource;
use mixmaster::session::BrowserSession;
use std::env;
use std::sync::{Arc, Once};
use std::time::Duration;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Gin and Tonic: gin, tonic water
pub fn gin_and_tonic() -> Recipe {
    Recipe::new("A", "Gin and Tonic")
        .with_category("Ordinary Drink")
        .with_alcoholic_flag(AlcoholicFlag::Alcoholic)
        .with_ingredient("Gin", "2 oz")
        .with_ingredient("Tonic Water", "5 oz")
        .with_glass("Highball glass")
        .with_instructions("Pour the gin over ice and top with tonic water.")
}

/// Soda Water: soda water only
pub fn soda_water() -> Recipe {
    Recipe::new("B", "Soda Water")
        .with_category("Soft Drink")
        .with_alcoholic_flag(AlcoholicFlag::NonAlcoholic)
        .with_ingredient("Soda Water", "1 glass")
}

/// Vodka Shot: vodka only
pub fn vodka_shot() -> Recipe {
    Recipe::new("C", "Vodka Shot")
        .with_category("Shot")
        .with_alcoholic_flag(AlcoholicFlag::Alcoholic)
        .with_ingredient("Vodka", "1 oz")
}

/// Margarita, flagged alcoholic
pub fn margarita() -> Recipe {
    Recipe::new("11007", "Margarita")
        .with_category("Ordinary Drink")
        .with_alcoholic_flag(AlcoholicFlag::Alcoholic)
        .with_ingredient("Tequila", "1 1/2 oz")
        .with_ingredient("Triple sec", "1/2 oz")
        .with_ingredient("Lime juice", "1 oz")
        .with_ingredient("Salt", "")
}

/// Mojito, flagged alcoholic
pub fn mojito() -> Recipe {
    Recipe::new("11000", "Mojito")
        .with_category("Cocktail")
        .with_alcoholic_flag(AlcoholicFlag::Alcoholic)
        .with_ingredient("Light rum", "2-3 oz")
        .with_ingredient("Lime", "juice of 1")
        .with_ingredient("Mint", "2-4")
}

/// Fruit punch with optional alcohol
pub fn punch() -> Recipe {
    Recipe::new("12862", "Marmalade Punch").with_alcoholic_flag(AlcoholicFlag::Optional)
}

/// Small catalog covering every alcoholic flag
pub fn sample_catalog() -> Vec<Recipe> {
    vec![
        gin_and_tonic(),
        soda_water(),
        vodka_shot(),
        margarita(),
        mojito(),
        punch(),
    ]
}

/// Mock source serving [`sample_catalog`]
pub fn mock_source() -> Arc<MockRecipeSource> {
    Arc::new(MockRecipeSource::with_catalog(sample_catalog()))
}

/// Session over `source` with a lookup timeout of `timeout_ms`
pub fn session_over(source: Arc<MockRecipeSource>, timeout_ms: u64) -> BrowserSession {
    init_test_logging();
    BrowserSession::new(source, Duration::from_millis(timeout_ms))
}

/// Ids of the visible recipes, in order
pub fn visible_ids(session: &BrowserSession) -> Vec<String> {
    session
        .view()
        .visible
        .iter()
        .map(|recipe| recipe.id.clone())
        .collect()
}
