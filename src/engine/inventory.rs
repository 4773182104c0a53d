// ABOUTME: Inventory set of ingredients the user has on hand ("My Bar")
// ABOUTME: Keeps raw text and insertion order; blank names are rejected silently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors

use serde::{Deserialize, Serialize};

use super::normalizer::normalize_ingredient;

/// Ingredients the user owns, in the order they were added
///
/// Entries keep the text exactly as typed. Membership edits compare raw strings;
/// only the can-make predicate compares normalized names. So toggling "gin" while
/// "Gin" is stored adds a second entry instead of removing the first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySet {
    items: Vec<String>,
}

fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}

impl InventorySet {
    /// Create an empty inventory
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Remove `name` if stored exactly as given, otherwise add it
    ///
    /// Returns whether `name` is in the inventory afterwards. Blank input is a no-op
    /// and returns `false`.
    pub fn toggle(&mut self, name: &str) -> bool {
        if is_blank(name) {
            return false;
        }
        if let Some(index) = self.position(name) {
            self.items.remove(index);
            false
        } else {
            self.items.push(name.to_owned());
            true
        }
    }

    /// Add `name` unless it is blank or an entry with the same normalized name exists
    ///
    /// Returns whether the inventory changed.
    pub fn add(&mut self, name: &str) -> bool {
        if is_blank(name) || self.contains_normalized(name) {
            return false;
        }
        self.items.push(name.to_owned());
        true
    }

    /// Remove the entry stored exactly as `name`
    ///
    /// Returns whether the inventory changed; removing an absent or blank name is a
    /// no-op.
    pub fn remove(&mut self, name: &str) -> bool {
        if is_blank(name) {
            return false;
        }
        self.position(name)
            .map(|index| self.items.remove(index))
            .is_some()
    }

    /// Whether `name` is stored exactly as given
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Whether an entry with the same normalized name is stored
    #[must_use]
    pub fn contains_normalized(&self, name: &str) -> bool {
        let key = normalize_ingredient(name);
        self.items
            .iter()
            .any(|item| normalize_ingredient(item) == key)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().map(String::as_str)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the inventory is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item == name)
    }
}

impl<'a> FromIterator<&'a str> for InventorySet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut inventory = Self::new();
        for name in iter {
            inventory.add(name);
        }
        inventory
    }
}
