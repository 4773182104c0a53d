// ABOUTME: TheCocktailDB HTTP client implementing the RecipeSource trait
// ABOUTME: Wraps every request in a circuit breaker and maps failures to ProviderError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Instant;
use tracing::{debug, instrument};

use super::wire::parse_drinks_response;
use crate::circuit_breaker::{CircuitBreaker, CircuitBreakerConfig};
use crate::constants::service_names;
use crate::errors::provider::{ProviderError, ProviderResult};
use crate::http_client::{build_http_client, HttpClientConfig};
use crate::models::Recipe;
use crate::source::RecipeSource;

/// Public v1 API with the free test key
pub const DEFAULT_BASE_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1";

/// Maximum number of response body characters quoted in an error message
const ERROR_BODY_PREVIEW: usize = 200;

/// `TheCocktailDB` client configuration
#[derive(Debug, Clone)]
pub struct CocktailDbConfig {
    /// API base URL, without the trailing endpoint
    pub base_url: String,
    /// Request and connect timeouts
    pub http: HttpClientConfig,
    /// Circuit breaker thresholds
    pub circuit_breaker: CircuitBreakerConfig,
}

impl Default for CocktailDbConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: HttpClientConfig::default(),
            circuit_breaker: CircuitBreakerConfig::default(),
        }
    }
}

/// `TheCocktailDB` recipe source
pub struct CocktailDbClient {
    config: CocktailDbConfig,
    http_client: Client,
    circuit_breaker: CircuitBreaker,
}

impl CocktailDbClient {
    /// Create a client with its own connection pool
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::ConfigurationError` if the base URL is not an http(s)
    /// URL or the HTTP client cannot be built from the configured timeouts.
    pub fn new(config: CocktailDbConfig) -> ProviderResult<Self> {
        if !(config.base_url.starts_with("http://") || config.base_url.starts_with("https://")) {
            return Err(ProviderError::ConfigurationError {
                provider: service_names::COCKTAIL_DB.to_owned(),
                details: format!("base URL must be http(s), got '{}'", config.base_url),
            });
        }
        let http_client = build_http_client(service_names::COCKTAIL_DB, &config.http)?;
        let circuit_breaker =
            CircuitBreaker::with_config(service_names::COCKTAIL_DB, config.circuit_breaker.clone());
        Ok(Self {
            config,
            http_client,
            circuit_breaker,
        })
    }

    /// Configured base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn search_url(&self) -> String {
        format!("{}/search.php", self.config.base_url.trim_end_matches('/'))
    }

    #[instrument(skip(self), fields(source = service_names::COCKTAIL_DB))]
    async fn search(&self, term: &str) -> ProviderResult<Vec<Recipe>> {
        let started = Instant::now();
        let recipes = self.circuit_breaker.call(self.request(term)).await?;
        debug!(
            recipes.count = recipes.len(),
            duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Recipe source answered"
        );
        Ok(recipes)
    }

    async fn request(&self, term: &str) -> ProviderResult<Vec<Recipe>> {
        let response = self
            .http_client
            .get(self.search_url())
            .query(&[("s", term)])
            .send()
            .await
            .map_err(|e| network_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiError {
                provider: service_names::COCKTAIL_DB.to_owned(),
                status_code: status.as_u16(),
                message: format!(
                    "HTTP {status}: {}",
                    body.chars().take(ERROR_BODY_PREVIEW).collect::<String>()
                ),
                retryable: status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS,
            });
        }

        let body = response.text().await.map_err(|e| network_error(&e))?;
        parse_drinks_response(&body)
    }
}

fn network_error(error: &reqwest::Error) -> ProviderError {
    ProviderError::NetworkError {
        provider: service_names::COCKTAIL_DB.to_owned(),
        message: error.to_string(),
    }
}

#[async_trait]
impl RecipeSource for CocktailDbClient {
    fn name(&self) -> &str {
        service_names::COCKTAIL_DB
    }

    async fn fetch_all(&self) -> ProviderResult<Vec<Recipe>> {
        self.search("").await
    }

    async fn search_by_term(&self, term: &str) -> ProviderResult<Vec<Recipe>> {
        self.search(term).await
    }
}
