// ABOUTME: Integration tests for the derivation engine
// ABOUTME: Covers can-make, filter pipeline stability, and set toggle properties
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors
#![allow(missing_docs)]

mod common;

use mixmaster::engine::{apply_filter, can_make, ActiveFilter, FavoritesSet, InventorySet};
use mixmaster::models::{AlcoholicFlag, IngredientLine, Recipe};

use common::{gin_and_tonic, sample_catalog, vodka_shot};

fn inventory(items: &[&str]) -> InventorySet {
    items.iter().copied().collect()
}

fn ids(recipes: &[&Recipe]) -> Vec<String> {
    recipes.iter().map(|recipe| recipe.id.clone()).collect()
}

fn gin_tonic_soda() -> Vec<Recipe> {
    vec![
        Recipe::new("A", "Gin Tonic")
            .with_alcoholic_flag(AlcoholicFlag::Alcoholic)
            .with_ingredient("Gin", "")
            .with_ingredient("Tonic", ""),
        Recipe::new("B", "Soda")
            .with_alcoholic_flag(AlcoholicFlag::NonAlcoholic)
            .with_ingredient("Soda", ""),
    ]
}

#[test]
fn test_gin_tonic_soda_scenario() {
    let recipes = gin_tonic_soda();
    let bar = inventory(&["gin", "tonic", "soda"]);

    assert_eq!(
        ids(&apply_filter(&recipes, ActiveFilter::CanMake, &bar)),
        vec!["A", "B"]
    );
    assert_eq!(
        ids(&apply_filter(&recipes, ActiveFilter::Alcoholic, &bar)),
        vec!["A"]
    );
    assert_eq!(
        ids(&apply_filter(&recipes, ActiveFilter::NonAlcoholic, &bar)),
        vec!["B"]
    );
}

#[test]
fn test_empty_inventory_cannot_make_vodka_shot() {
    assert!(!can_make(&vodka_shot(), &InventorySet::new()));
}

#[test]
fn test_recipe_with_only_unnamed_slots_is_always_makeable() {
    let mut recipe = Recipe::new("X", "Ice");
    recipe.ingredient_lines.push(IngredientLine::unnamed("a handful"));

    for bar in [InventorySet::new(), inventory(&["gin"]), inventory(&["  "])] {
        assert!(can_make(&recipe, &bar));
    }
}

#[test]
fn test_can_make_is_order_and_case_independent() {
    let recipe = gin_and_tonic();
    assert!(can_make(&recipe, &inventory(&["tonic water", "GIN"])));
    assert!(can_make(&recipe, &inventory(&["  Tonic Water", "gin  ", "lime"])));
    assert!(!can_make(&recipe, &inventory(&["gin", "tonic"])));
}

#[test]
fn test_filter_all_returns_input_unchanged() {
    let recipes = sample_catalog();
    let visible = apply_filter(&recipes, ActiveFilter::All, &InventorySet::new());

    assert_eq!(visible.len(), recipes.len());
    assert!(visible
        .iter()
        .zip(&recipes)
        .all(|(shown, original)| shown.id == original.id));
}

#[test]
fn test_every_filter_preserves_relative_order() {
    let recipes = sample_catalog();
    let bar = inventory(&["Gin", "Tonic Water", "Soda Water", "Vodka"]);
    let position = |id: &str| recipes.iter().position(|recipe| recipe.id == id);

    for filter in ActiveFilter::ALL {
        let visible = apply_filter(&recipes, filter, &bar);
        let positions: Vec<_> = visible.iter().map(|recipe| position(recipe.id.as_str())).collect();
        assert!(
            positions.windows(2).all(|pair| pair[0] < pair[1]),
            "filter {filter} reordered the list"
        );
    }
}

#[test]
fn test_can_make_filter_on_sample_catalog() {
    let recipes = sample_catalog();
    let bar = inventory(&["Gin", "Tonic Water", "Soda Water"]);

    // punch has no ingredients, so it is vacuously makeable
    assert_eq!(
        ids(&apply_filter(&recipes, ActiveFilter::CanMake, &bar)),
        vec!["A", "B", "12862"]
    );
}

#[test]
fn test_toggle_favorite_twice_restores_membership() {
    let recipe = gin_and_tonic();
    let mut favorites = FavoritesSet::new();
    favorites.toggle(&vodka_shot());

    favorites.toggle(&recipe);
    favorites.toggle(&recipe);

    assert!(!favorites.contains(&recipe.id));
    assert_eq!(favorites.ids().collect::<Vec<_>>(), vec!["C"]);
}

#[test]
fn test_toggle_inventory_twice_restores_membership() {
    let mut bar = inventory(&["Lime"]);
    for name in ["Gin", "Lime", "gin "] {
        let before = bar.contains(name);
        bar.toggle(name);
        bar.toggle(name);
        assert_eq!(bar.contains(name), before, "membership of {name:?} changed");
    }
    assert_eq!(bar.iter().collect::<Vec<_>>(), vec!["Lime"]);
}

#[test]
fn test_toggle_cannot_remove_differently_cased_entry() {
    let mut bar = inventory(&["Gin"]);
    bar.toggle("gin");
    assert!(bar.contains("Gin"));
    assert!(bar.contains("gin"));
    assert_eq!(bar.len(), 2);
}
