// ABOUTME: Core types and constants for the MixMaster cocktail browser
// ABOUTME: Foundation crate with error handling, recipe models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors

#![deny(unsafe_code)]

//! # `MixMaster` Core
//!
//! Foundation crate providing the shared types of the `MixMaster` cocktail browser.
//! Both the recipe source implementations and the state engine depend on it, so it
//! is kept free of I/O.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ProviderError`
//! - **models**: Recipe records, ingredient lines, and alcoholic classification
//! - **constants**: Limits and labels shared by every crate

/// Unified error handling system with standard error codes
pub mod errors;

/// Recipe data models
pub mod models;

/// Application constants organized by domain
pub mod constants;
