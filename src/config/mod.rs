// ABOUTME: Configuration module for the browser session and recipe source settings
// ABOUTME: Environment variables are the only configuration source; CLI flags override them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors

//! Configuration for MixMaster
//!
//! - **Environment**: [`BrowserConfig`] loaded from `MIXMASTER_*` variables

/// Environment-based configuration
pub mod environment;

pub use environment::{BrowserConfig, Environment};
