// ABOUTME: Favorites set of starred recipes keyed by recipe id
// ABOUTME: Keeps a snapshot of each starred record so it outlives the recipe list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors

use crate::models::Recipe;

/// Starred recipes in the order they were starred
///
/// Membership is by exact id. The stored record is the one that was on screen
/// when it was starred, so the favorites view still lists it after a new search
/// has replaced the recipe list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesSet {
    entries: Vec<Recipe>,
}

impl FavoritesSet {
    /// Create an empty favorites set
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Star `recipe`, or un-star it if its id is already starred
    ///
    /// Returns whether the id is starred afterwards.
    pub fn toggle(&mut self, recipe: &Recipe) -> bool {
        if self.remove(&recipe.id) {
            false
        } else {
            self.entries.push(recipe.clone());
            true
        }
    }

    /// Un-star `id`; returns whether it was starred
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Whether `id` is starred
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Snapshot of the starred recipe with `id`
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Starred ids in starring order
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.id.as_str())
    }

    /// Starred recipes in starring order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.entries
    }

    /// Number of starred recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is starred
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_membership() {
        let margarita = Recipe::new("11007", "Margarita");
        let mut favorites = FavoritesSet::new();

        assert!(favorites.toggle(&margarita));
        assert!(favorites.contains("11007"));
        assert!(!favorites.toggle(&margarita));
        assert!(!favorites.contains("11007"));
    }

    #[test]
    fn test_id_appears_at_most_once() {
        let mut favorites = FavoritesSet::new();
        favorites.toggle(&Recipe::new("1", "A"));
        favorites.toggle(&Recipe::new("2", "B"));
        favorites.toggle(&Recipe::new("1", "A renamed"));
        favorites.toggle(&Recipe::new("1", "A renamed"));

        assert_eq!(favorites.ids().collect::<Vec<_>>(), vec!["2", "1"]);
        assert_eq!(favorites.get("1").map(|r| r.name.as_str()), Some("A renamed"));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut favorites = FavoritesSet::new();
        assert!(!favorites.remove("missing"));
        assert!(favorites.is_empty());
    }
}
