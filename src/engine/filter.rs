// ABOUTME: Filter pipeline deriving the visible recipe list from the active filter
// ABOUTME: Produces a stable sub-sequence of the current recipe list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::can_make::can_make;
use super::inventory::InventorySet;
use crate::errors::AppError;
use crate::models::{AlcoholicFlag, Recipe};

/// Category lens applied to the recipe list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActiveFilter {
    /// Every recipe
    #[default]
    All,
    /// Recipes flagged alcoholic
    Alcoholic,
    /// Recipes flagged non-alcoholic
    NonAlcoholic,
    /// Recipes makeable from the inventory
    CanMake,
}

impl ActiveFilter {
    /// Every filter, in tab order
    pub const ALL: [Self; 4] = [Self::All, Self::Alcoholic, Self::NonAlcoholic, Self::CanMake];

    /// Command-line name of the filter
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Alcoholic => "alcoholic",
            Self::NonAlcoholic => "non-alcoholic",
            Self::CanMake => "can-make",
        }
    }

    /// Whether `recipe` passes this filter
    #[must_use]
    pub fn admits(self, recipe: &Recipe, inventory: &InventorySet) -> bool {
        match self {
            Self::All => true,
            Self::Alcoholic => recipe.alcoholic_flag == AlcoholicFlag::Alcoholic,
            Self::NonAlcoholic => recipe.alcoholic_flag == AlcoholicFlag::NonAlcoholic,
            Self::CanMake => can_make(recipe, inventory),
        }
    }
}

impl fmt::Display for ActiveFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActiveFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "alcoholic" => Ok(Self::Alcoholic),
            "non-alcoholic" | "nonalcoholic" | "non_alcoholic" => Ok(Self::NonAlcoholic),
            "can-make" | "canmake" | "can_make" => Ok(Self::CanMake),
            other => Err(AppError::invalid_input(format!(
                "unknown filter '{other}', expected one of: all, alcoholic, non-alcoholic, can-make"
            ))),
        }
    }
}

/// Recipes passing `filter`, in their original order
#[must_use]
pub fn apply_filter<'a>(
    recipes: &'a [Recipe],
    filter: ActiveFilter,
    inventory: &InventorySet,
) -> Vec<&'a Recipe> {
    recipes
        .iter()
        .filter(|recipe| filter.admits(recipe, inventory))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Recipe> {
        vec![
            Recipe::new("1", "Margarita").with_alcoholic_flag(AlcoholicFlag::Alcoholic),
            Recipe::new("2", "Lemonade").with_alcoholic_flag(AlcoholicFlag::NonAlcoholic),
            Recipe::new("3", "Punch").with_alcoholic_flag(AlcoholicFlag::Optional),
            Recipe::new("4", "Mystery"),
            Recipe::new("5", "Mojito").with_alcoholic_flag(AlcoholicFlag::Alcoholic),
        ]
    }

    fn ids(recipes: &[&Recipe]) -> Vec<String> {
        recipes.iter().map(|recipe| recipe.id.clone()).collect()
    }

    #[test]
    fn test_all_is_identity() {
        let recipes = catalog();
        let visible = apply_filter(&recipes, ActiveFilter::All, &InventorySet::new());
        assert_eq!(ids(&visible), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_alcoholic_keeps_order() {
        let recipes = catalog();
        let visible = apply_filter(&recipes, ActiveFilter::Alcoholic, &InventorySet::new());
        assert_eq!(ids(&visible), vec!["1", "5"]);
    }

    #[test]
    fn test_optional_and_unknown_match_neither_category() {
        let recipes = catalog();
        let visible = apply_filter(&recipes, ActiveFilter::NonAlcoholic, &InventorySet::new());
        assert_eq!(ids(&visible), vec!["2"]);
    }

    #[test]
    fn test_parse_filter_names() {
        assert_eq!("Can-Make".parse::<ActiveFilter>().ok(), Some(ActiveFilter::CanMake));
        assert_eq!(
            "nonalcoholic".parse::<ActiveFilter>().ok(),
            Some(ActiveFilter::NonAlcoholic)
        );
        assert!("sweet".parse::<ActiveFilter>().is_err());
        for filter in ActiveFilter::ALL {
            assert_eq!(filter.to_string().parse::<ActiveFilter>().ok(), Some(filter));
        }
    }
}
