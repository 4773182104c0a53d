// ABOUTME: Can-make predicate deciding whether a recipe is makeable from the inventory
// ABOUTME: Compares normalized ingredient names; a recipe without ingredients is makeable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors

use std::collections::HashSet;

use super::inventory::InventorySet;
use super::normalizer::normalize_ingredient;
use crate::models::Recipe;

/// Whether every named ingredient of `recipe` is in `inventory`
///
/// Both sides are compared through [`normalize_ingredient`], so "Gin " in the
/// inventory satisfies "gin" in the recipe. Unnamed ingredient slots are ignored,
/// and a recipe with no named ingredients is vacuously makeable.
#[must_use]
pub fn can_make(recipe: &Recipe, inventory: &InventorySet) -> bool {
    let owned: HashSet<String> = inventory.iter().map(normalize_ingredient).collect();
    recipe
        .ingredient_names()
        .all(|name| owned.contains(&normalize_ingredient(name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IngredientLine;

    fn inventory(items: &[&str]) -> InventorySet {
        let mut set = InventorySet::new();
        for item in items {
            set.add(item);
        }
        set
    }

    #[test]
    fn test_recipe_without_ingredients_is_makeable() {
        let mut recipe = Recipe::new("1", "Water");
        assert!(can_make(&recipe, &InventorySet::new()));

        recipe.ingredient_lines.push(IngredientLine::unnamed("1 glass"));
        assert!(can_make(&recipe, &InventorySet::new()));
    }

    #[test]
    fn test_empty_inventory_cannot_make_vodka() {
        let recipe = Recipe::new("C", "Vodka shot").with_ingredient("Vodka", "1 oz");
        assert!(!can_make(&recipe, &InventorySet::new()));
    }

    #[test]
    fn test_comparison_ignores_case_and_surrounding_whitespace() {
        let recipe = Recipe::new("A", "Gin and Tonic")
            .with_ingredient("Gin", "2 oz")
            .with_ingredient(" Tonic Water", "5 oz");
        assert!(can_make(&recipe, &inventory(&["GIN", "tonic water  "])));
    }

    #[test]
    fn test_one_missing_ingredient_fails() {
        let recipe = Recipe::new("A", "Gin and Tonic")
            .with_ingredient("Gin", "2 oz")
            .with_ingredient("Tonic Water", "5 oz")
            .with_ingredient("Lime", "1 wedge");
        assert!(!can_make(&recipe, &inventory(&["gin", "tonic water"])));
    }
}
