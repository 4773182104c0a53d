// ABOUTME: Environment-based configuration for the browser and its recipe source
// ABOUTME: Reads MIXMASTER_* variables, falling back to defaults on missing or invalid values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

use crate::constants::{defaults, env_vars};
use crate::errors::{AppError, AppResult};
use crate::providers::{CircuitBreakerConfig, CocktailDbConfig, HttpClientConfig};

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Settings of one browsing session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Recipe service base URL, without a trailing slash
    pub api_base_url: String,
    /// Whole-request timeout of the shared HTTP client, in seconds
    pub http_timeout_secs: u64,
    /// Connect timeout of the shared HTTP client, in seconds
    pub http_connect_timeout_secs: u64,
    /// Upper bound on one recipe lookup
    pub lookup_timeout: Duration,
    /// Consecutive failures before the circuit opens
    pub circuit_failure_threshold: u32,
    /// Time an open circuit waits before probing
    pub circuit_recovery: Duration,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            api_base_url: defaults::API_BASE_URL.to_owned(),
            http_timeout_secs: defaults::HTTP_TIMEOUT_SECS,
            http_connect_timeout_secs: defaults::HTTP_CONNECT_TIMEOUT_SECS,
            lookup_timeout: Duration::from_secs(defaults::LOOKUP_TIMEOUT_SECS),
            circuit_failure_threshold: defaults::CIRCUIT_FAILURE_THRESHOLD,
            circuit_recovery: Duration::from_secs(defaults::CIRCUIT_RECOVERY_SECS),
        }
    }
}

impl BrowserConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the base URL is not an http(s) URL
    pub fn from_env() -> AppResult<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value
    ///
    /// Numeric settings that are missing, unparseable, or zero use their defaults;
    /// the invalid ones log a warning.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the base URL is not an http(s) URL
    pub fn from_vars<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup(env_vars::ENVIRONMENT)
            .map(|value| Environment::from_str_or_default(&value))
            .unwrap_or_default();

        let api_base_url = match lookup(env_vars::API_BASE_URL) {
            Some(url) if !url.trim().is_empty() => validate_base_url(&url)?,
            _ => defaults::API_BASE_URL.to_owned(),
        };

        Ok(Self {
            environment,
            api_base_url,
            http_timeout_secs: positive_or(
                &lookup,
                env_vars::HTTP_TIMEOUT_SECS,
                defaults::HTTP_TIMEOUT_SECS,
            ),
            http_connect_timeout_secs: positive_or(
                &lookup,
                env_vars::HTTP_CONNECT_TIMEOUT_SECS,
                defaults::HTTP_CONNECT_TIMEOUT_SECS,
            ),
            lookup_timeout: Duration::from_secs(positive_or(
                &lookup,
                env_vars::LOOKUP_TIMEOUT_SECS,
                defaults::LOOKUP_TIMEOUT_SECS,
            )),
            circuit_failure_threshold: positive_or(
                &lookup,
                env_vars::CIRCUIT_FAILURE_THRESHOLD,
                defaults::CIRCUIT_FAILURE_THRESHOLD,
            ),
            circuit_recovery: Duration::from_secs(positive_or(
                &lookup,
                env_vars::CIRCUIT_RECOVERY_SECS,
                defaults::CIRCUIT_RECOVERY_SECS,
            )),
        })
    }

    /// Replace the base URL, as the `--base-url` flag does
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `url` is not an http(s) URL
    pub fn with_base_url(mut self, url: &str) -> AppResult<Self> {
        self.api_base_url = validate_base_url(url)?;
        Ok(self)
    }

    /// Settings of the `TheCocktailDB` client
    #[must_use]
    pub fn cocktail_db_config(&self) -> CocktailDbConfig {
        CocktailDbConfig {
            base_url: self.api_base_url.clone(),
            http: HttpClientConfig::from_secs(
                self.http_timeout_secs,
                self.http_connect_timeout_secs,
            ),
            circuit_breaker: CircuitBreakerConfig {
                failure_threshold: self.circuit_failure_threshold,
                recovery_timeout: self.circuit_recovery,
                ..CircuitBreakerConfig::default()
            },
        }
    }
}

fn validate_base_url(url: &str) -> AppResult<String> {
    let url = url.trim().trim_end_matches('/');
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.to_owned())
    } else {
        Err(AppError::config(format!(
            "{} must be an http(s) URL, got '{url}'",
            env_vars::API_BASE_URL
        )))
    }
}

fn positive_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + PartialOrd + Default + fmt::Display + Copy,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => value,
        _ => {
            warn!(
                variable = key,
                value = %raw,
                default = %default,
                "Invalid setting, using default"
            );
            default
        }
    }
}
