// ABOUTME: Application constants for the MixMaster browser and its command-line shell
// ABOUTME: Environment variable names and defaults for every tunable setting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors

//! # Constants Module
//!
//! Names of the environment variables the browser reads, and the values used when
//! they are unset or invalid.

pub use mixmaster_core::constants::{alcoholic_labels, recipe, service_names};

/// Environment variable names
pub mod env_vars {
    /// Base URL of the recipe service API
    pub const API_BASE_URL: &str = "MIXMASTER_API_BASE_URL";
    /// Whole-request timeout of the shared HTTP client, in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "MIXMASTER_HTTP_TIMEOUT_SECS";
    /// Connect timeout of the shared HTTP client, in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: &str = "MIXMASTER_HTTP_CONNECT_TIMEOUT_SECS";
    /// Upper bound on one recipe lookup, in seconds
    pub const LOOKUP_TIMEOUT_SECS: &str = "MIXMASTER_LOOKUP_TIMEOUT_SECS";
    /// Consecutive failures before the circuit opens
    pub const CIRCUIT_FAILURE_THRESHOLD: &str = "MIXMASTER_CIRCUIT_FAILURE_THRESHOLD";
    /// Seconds an open circuit waits before probing again
    pub const CIRCUIT_RECOVERY_SECS: &str = "MIXMASTER_CIRCUIT_RECOVERY_SECS";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Log filter directives
    pub const RUST_LOG: &str = "RUST_LOG";
}

/// Default values
pub mod defaults {
    pub use mixmaster_providers::cocktaildb::DEFAULT_BASE_URL as API_BASE_URL;
    pub use mixmaster_providers::http_client::{
        DEFAULT_CONNECT_TIMEOUT_SECS as HTTP_CONNECT_TIMEOUT_SECS,
        DEFAULT_TIMEOUT_SECS as HTTP_TIMEOUT_SECS,
    };

    /// Lookup timeout; kept below the HTTP timeout so a hung lookup reports first
    pub const LOOKUP_TIMEOUT_SECS: u64 = 20;
    /// Circuit breaker failure threshold
    pub const CIRCUIT_FAILURE_THRESHOLD: u32 = 5;
    /// Circuit breaker recovery delay
    pub const CIRCUIT_RECOVERY_SECS: u64 = 30;
    /// Log level when `RUST_LOG` is unset
    pub const LOG_LEVEL: &str = "info";
}
