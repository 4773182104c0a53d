// ABOUTME: Tests for the TheCocktailDB client against an unreachable endpoint
// ABOUTME: Checks construction errors, error mapping, and circuit opening on network failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors
#![allow(clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use mixmaster::config::BrowserConfig;
use mixmaster::errors::{AppError, ErrorCode, ProviderError};
use mixmaster::providers::{CocktailDbClient, CocktailDbConfig, HttpClientConfig, RecipeSource};
use mixmaster::session::BrowserSession;
use std::sync::Arc;
use std::time::Duration;

// Nothing listens on the discard port locally, so connections are refused at once
const UNREACHABLE: &str = "http://127.0.0.1:9";

fn unreachable_client(failure_threshold: u32) -> CocktailDbClient {
    let mut config = BrowserConfig::default();
    config.circuit_failure_threshold = failure_threshold;
    config.circuit_recovery = Duration::from_secs(60);
    let config = config
        .with_base_url(UNREACHABLE)
        .expect("loopback URL is valid");
    CocktailDbClient::new(config.cocktail_db_config()).expect("default timeouts build a client")
}

#[test]
fn test_client_reports_configured_base_url() {
    let client = unreachable_client(5);
    assert_eq!(client.base_url(), UNREACHABLE);
    assert_eq!(client.name(), "TheCocktailDB");
}

#[test]
fn test_non_http_base_url_is_a_configuration_error() {
    let config = CocktailDbConfig {
        base_url: "ftp://www.thecocktaildb.com".to_owned(),
        ..CocktailDbConfig::default()
    };

    let error = CocktailDbClient::new(config).err();
    assert!(matches!(error, Some(ProviderError::ConfigurationError { .. })));
}

#[test]
fn test_zero_timeout_is_reported_instead_of_ignored() {
    let config = CocktailDbConfig {
        base_url: UNREACHABLE.to_owned(),
        http: HttpClientConfig::from_secs(30, 0),
        ..CocktailDbConfig::default()
    };

    let Some(error) = CocktailDbClient::new(config).err() else {
        panic!("zero connect timeout was accepted");
    };
    assert!(error.provider() == "TheCocktailDB" && !error.is_retryable());
    assert_eq!(AppError::from(error).code, ErrorCode::ConfigError);
}

#[tokio::test]
async fn test_unreachable_source_is_a_retryable_network_error() {
    common::init_test_logging();
    let client = unreachable_client(5);

    let error = client.fetch_all().await.err();
    assert!(matches!(error, Some(ProviderError::NetworkError { .. })));
    assert!(error.is_some_and(|error| error.is_retryable()));
}

#[tokio::test]
async fn test_repeated_failures_open_the_circuit() {
    common::init_test_logging();
    let client = unreachable_client(2);

    for _ in 0..2 {
        let error = client.search_by_term("margarita").await.err();
        assert!(matches!(error, Some(ProviderError::NetworkError { .. })));
    }

    let error = client.search_by_term("margarita").await.err();
    assert!(matches!(
        error,
        Some(ProviderError::CircuitBreakerOpen { retry_after_secs, .. }) if retry_after_secs <= 60
    ));
}

#[tokio::test]
async fn test_session_surfaces_unreachable_source_as_notice() {
    let source: Arc<dyn RecipeSource> = Arc::new(unreachable_client(5));
    let mut session = BrowserSession::new(source, Duration::from_secs(5));

    session.start();
    session.settle().await;

    let view = session.view();
    assert!(view.visible.is_empty());
    assert!(view
        .notice
        .is_some_and(|notice| notice.message.starts_with("Could not load recipes")));
}
