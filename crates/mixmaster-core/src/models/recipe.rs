// ABOUTME: Normalized cocktail recipe record used by every layer of MixMaster
// ABOUTME: Alcoholic classification is resolved once from upstream free text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors

use crate::constants::alcoholic_labels;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Alcoholic classification of a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlcoholicFlag {
    /// Contains alcohol
    Alcoholic,
    /// Contains no alcohol
    NonAlcoholic,
    /// Alcohol is optional
    Optional,
    /// Upstream value was missing or not recognized
    #[default]
    Unknown,
}

impl AlcoholicFlag {
    /// Resolve the upstream free-text label
    ///
    /// Only the exact labels the recipe service emits are recognized (surrounding
    /// whitespace is ignored); everything else lands in [`AlcoholicFlag::Unknown`].
    #[must_use]
    pub fn from_upstream(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(alcoholic_labels::ALCOHOLIC) => Self::Alcoholic,
            Some(alcoholic_labels::NON_ALCOHOLIC) => Self::NonAlcoholic,
            Some(alcoholic_labels::OPTIONAL) => Self::Optional,
            _ => Self::Unknown,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Alcoholic => alcoholic_labels::ALCOHOLIC,
            Self::NonAlcoholic => alcoholic_labels::NON_ALCOHOLIC,
            Self::Optional => alcoholic_labels::OPTIONAL,
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for AlcoholicFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One ingredient slot of a recipe
///
/// A slot without a name is kept so the record mirrors its source, but it is
/// ignored by every ingredient-based computation and by display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientLine {
    /// Ingredient name, `None` when the slot is empty
    pub name: Option<String>,
    /// Free-text measure, empty when not given
    pub measure: String,
}

impl IngredientLine {
    /// Create a named ingredient line
    #[must_use]
    pub fn new(name: impl Into<String>, measure: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            measure: measure.into(),
        }
    }

    /// Create a slot that carries no ingredient name
    #[must_use]
    pub fn unnamed(measure: impl Into<String>) -> Self {
        Self {
            name: None,
            measure: measure.into(),
        }
    }
}

/// Normalized view of one cocktail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Opaque identifier, unique per recipe
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-text category label
    pub category: String,
    /// Alcoholic classification
    pub alcoholic_flag: AlcoholicFlag,
    /// Upstream alcoholic text as received; shown in place of the flag label
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub alcoholic_text: Option<String>,
    /// Display image reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    /// Ingredient slots in upstream order
    pub ingredient_lines: Vec<IngredientLine>,
    /// Preparation instructions
    pub instructions: String,
    /// Serving glass
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glass: Option<String>,
}

impl Recipe {
    /// Create a recipe with the given id and name and no other details
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: String::new(),
            alcoholic_flag: AlcoholicFlag::Unknown,
            alcoholic_text: None,
            image_ref: None,
            ingredient_lines: Vec::new(),
            instructions: String::new(),
            glass: None,
        }
    }

    /// Set the alcoholic classification
    #[must_use]
    pub fn with_alcoholic_flag(mut self, flag: AlcoholicFlag) -> Self {
        self.alcoholic_flag = flag;
        self
    }

    /// Set the category label
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Append an ingredient line
    #[must_use]
    pub fn with_ingredient(mut self, name: impl Into<String>, measure: impl Into<String>) -> Self {
        self.ingredient_lines.push(IngredientLine::new(name, measure));
        self
    }

    /// Set the preparation instructions
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Set the serving glass
    #[must_use]
    pub fn with_glass(mut self, glass: impl Into<String>) -> Self {
        self.glass = Some(glass.into());
        self
    }

    /// Alcoholic label for display: the upstream text when there was one
    #[must_use]
    pub fn alcoholic_label(&self) -> &str {
        self.alcoholic_text
            .as_deref()
            .unwrap_or_else(|| self.alcoholic_flag.label())
    }

    /// Names of the ingredients, skipping unnamed slots
    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.ingredient_lines
            .iter()
            .filter_map(|line| line.name.as_deref())
    }

    /// Named ingredients with their measures, for display
    pub fn ingredients(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.ingredient_lines
            .iter()
            .filter_map(|line| Some((line.name.as_deref()?, line.measure.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alcoholic_flag_from_upstream() {
        assert_eq!(
            AlcoholicFlag::from_upstream(Some("Alcoholic")),
            AlcoholicFlag::Alcoholic
        );
        assert_eq!(
            AlcoholicFlag::from_upstream(Some("Non alcoholic")),
            AlcoholicFlag::NonAlcoholic
        );
        assert_eq!(
            AlcoholicFlag::from_upstream(Some(" Optional alcohol ")),
            AlcoholicFlag::Optional
        );
        assert_eq!(
            AlcoholicFlag::from_upstream(Some("non alcoholic")),
            AlcoholicFlag::Unknown
        );
        assert_eq!(AlcoholicFlag::from_upstream(None), AlcoholicFlag::Unknown);
    }

    #[test]
    fn test_unnamed_slots_are_skipped() {
        let mut recipe = Recipe::new("11007", "Margarita")
            .with_ingredient("Tequila", "1 1/2 oz")
            .with_ingredient("Triple sec", "1/2 oz");
        recipe.ingredient_lines.push(IngredientLine::unnamed("dash"));
        recipe = recipe.with_ingredient("Lime juice", "");

        let names: Vec<&str> = recipe.ingredient_names().collect();
        assert_eq!(names, vec!["Tequila", "Triple sec", "Lime juice"]);

        let lines: Vec<(&str, &str)> = recipe.ingredients().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], ("Lime juice", ""));
    }
}
