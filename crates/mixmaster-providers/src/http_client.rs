// ABOUTME: HTTP transport settings and client construction for recipe sources
// ABOUTME: Builds one pooled reqwest client per source from its configured timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors

use reqwest::{Client, ClientBuilder};
use std::time::Duration;

use crate::errors::provider::{ProviderError, ProviderResult};

/// Default whole-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connect timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Timeouts of the HTTP client a recipe source talks through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Upper bound on one request, body included
    pub timeout: Duration,
    /// Upper bound on establishing the connection
    pub connect_timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl HttpClientConfig {
    /// Timeouts given in whole seconds
    #[must_use]
    pub const fn from_secs(timeout_secs: u64, connect_timeout_secs: u64) -> Self {
        Self {
            timeout: Duration::from_secs(timeout_secs),
            connect_timeout: Duration::from_secs(connect_timeout_secs),
        }
    }
}

/// Build the HTTP client for the recipe source named `source`
///
/// # Errors
///
/// Returns `ProviderError::ConfigurationError` if a timeout is zero or the TLS
/// backend cannot be initialized.
pub fn build_http_client(source: &str, config: &HttpClientConfig) -> ProviderResult<Client> {
    let configuration_error = |details: String| ProviderError::ConfigurationError {
        provider: source.to_owned(),
        details,
    };

    if config.timeout.is_zero() || config.connect_timeout.is_zero() {
        return Err(configuration_error(format!(
            "HTTP timeouts must be positive, got {:?} request and {:?} connect",
            config.timeout, config.connect_timeout
        )));
    }

    ClientBuilder::new()
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .user_agent(concat!("mixmaster/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| configuration_error(format!("HTTP client could not be built: {e}")))
}
