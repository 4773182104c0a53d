// ABOUTME: Structured error types for recipe source lookups
// ABOUTME: Carries retry information and converts into the unified AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors

use super::{AppError, ErrorCode};

/// Errors raised by a recipe source while performing a lookup
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Request never produced a response (DNS, connect, reset)
    #[error("{provider} network error: {message}")]
    NetworkError {
        /// Recipe source name
        provider: String,
        /// Transport error details
        message: String,
    },

    /// Source answered with a non-success status
    #[error("{provider} API error ({status_code}): {message}")]
    ApiError {
        /// Recipe source name
        provider: String,
        /// HTTP status returned by the source
        status_code: u16,
        /// Response body or summary
        message: String,
        /// Whether repeating the request may succeed
        retryable: bool,
    },

    /// Source answered with a body that is not a drinks envelope
    #[error("{provider} returned malformed data: {message}")]
    ParseError {
        /// Recipe source name
        provider: String,
        /// Parser error details
        message: String,
    },

    /// Lookup did not resolve within the configured timeout
    #[error("{provider} did not respond within {timeout_secs}s")]
    Timeout {
        /// Recipe source name
        provider: String,
        /// Timeout that elapsed
        timeout_secs: u64,
    },

    /// Circuit breaker is open; the source is failing fast
    #[error("{provider} is unavailable, retry after {retry_after_secs}s")]
    CircuitBreakerOpen {
        /// Recipe source name
        provider: String,
        /// Seconds until a recovery attempt is allowed
        retry_after_secs: u64,
    },

    /// Source is misconfigured (bad base URL, client build failure)
    #[error("{provider} configuration error: {details}")]
    ConfigurationError {
        /// Recipe source name
        provider: String,
        /// What is wrong with the configuration
        details: String,
    },
}

impl ProviderError {
    /// Whether repeating the same lookup may succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::NetworkError { .. } | Self::Timeout { .. } => true,
            Self::ApiError { retryable, .. } => *retryable,
            Self::ParseError { .. }
            | Self::CircuitBreakerOpen { .. }
            | Self::ConfigurationError { .. } => false,
        }
    }

    /// Seconds the caller should wait before retrying, when the source said so
    #[must_use]
    pub const fn retry_after_secs(&self) -> Option<u64> {
        match self {
            Self::CircuitBreakerOpen {
                retry_after_secs, ..
            } => Some(*retry_after_secs),
            _ => None,
        }
    }

    /// Name of the recipe source that failed
    #[must_use]
    pub fn provider(&self) -> &str {
        match self {
            Self::NetworkError { provider, .. }
            | Self::ApiError { provider, .. }
            | Self::ParseError { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::CircuitBreakerOpen { provider, .. }
            | Self::ConfigurationError { provider, .. } => provider,
        }
    }

    const fn error_code(&self) -> ErrorCode {
        match self {
            Self::ApiError {
                status_code: 429, ..
            } => ErrorCode::ExternalRateLimited,
            Self::NetworkError { .. } | Self::Timeout { .. } | Self::CircuitBreakerOpen { .. } => {
                ErrorCode::ExternalServiceUnavailable
            }
            Self::ApiError { .. } | Self::ParseError { .. } => ErrorCode::ExternalServiceError,
            Self::ConfigurationError { .. } => ErrorCode::ConfigError,
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(error: ProviderError) -> Self {
        Self::new(error.error_code(), error.to_string()).with_source(error)
    }
}

/// Result alias for recipe source operations
pub type ProviderResult<T> = Result<T, ProviderError>;
