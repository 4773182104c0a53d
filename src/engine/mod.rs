// ABOUTME: State and derivation engine for the cocktail catalog
// ABOUTME: Pure functions and sets behind filtering, can-make checks, and toggles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors

//! # Derivation Engine
//!
//! Everything here is synchronous and free of I/O. The session feeds it the recipe
//! list returned by the last lookup, and it derives what the renderer shows.
//!
//! - **normalizer**: comparison key for ingredient names
//! - **can_make**: whether a recipe can be made from the inventory
//! - **filter**: the active category filter over the recipe list
//! - **inventory**: ingredients the user has on hand
//! - **favorites**: recipes the user has starred

/// Can-make predicate over the inventory
pub mod can_make;
/// Favorites set
pub mod favorites;
/// Category filter pipeline
pub mod filter;
/// Inventory set
pub mod inventory;
/// Ingredient name normalization
pub mod normalizer;

pub use can_make::can_make;
pub use favorites::FavoritesSet;
pub use filter::{apply_filter, ActiveFilter};
pub use inventory::InventorySet;
pub use normalizer::normalize_ingredient;
