// ABOUTME: Wire format of TheCocktailDB drinks responses
// ABOUTME: Converts upstream drink objects into normalized Recipe records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

use crate::constants::{recipe::MAX_INGREDIENT_SLOTS, service_names};
use crate::errors::provider::{ProviderError, ProviderResult};
use crate::models::{AlcoholicFlag, IngredientLine, Recipe};

/// Top-level response of `search.php`
#[derive(Debug, Deserialize)]
struct DrinksEnvelope {
    #[serde(default)]
    drinks: Value,
}

/// One upstream drink object
///
/// Ingredient and measure slots (`strIngredient1..15`, `strMeasure1..15`) are
/// collected through the flattened map.
#[derive(Debug, Deserialize)]
struct RawDrink {
    #[serde(rename = "idDrink")]
    id: String,
    #[serde(rename = "strDrink", default)]
    name: Option<String>,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strAlcoholic", default)]
    alcoholic: Option<String>,
    #[serde(rename = "strDrinkThumb", default)]
    thumbnail: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(rename = "strGlass", default)]
    glass: Option<String>,
    #[serde(flatten)]
    slots: HashMap<String, Value>,
}

impl RawDrink {
    /// Text of a slot field; null, missing, and empty strings are all absent
    fn slot_text(&self, key: &str) -> Option<&str> {
        self.slots
            .get(key)
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
    }

    fn ingredient_lines(&self) -> Vec<IngredientLine> {
        (1..=MAX_INGREDIENT_SLOTS)
            .filter_map(|slot| {
                let name = self.slot_text(&format!("strIngredient{slot}"));
                let measure = self.slot_text(&format!("strMeasure{slot}"));
                match (name, measure) {
                    (None, None) => None,
                    (Some(name), measure) => {
                        Some(IngredientLine::new(name, measure.unwrap_or_default()))
                    }
                    (None, Some(measure)) => Some(IngredientLine::unnamed(measure)),
                }
            })
            .collect()
    }

    fn into_recipe(self) -> Recipe {
        let ingredient_lines = self.ingredient_lines();
        Recipe {
            alcoholic_flag: AlcoholicFlag::from_upstream(self.alcoholic.as_deref()),
            alcoholic_text: self
                .alcoholic
                .map(|text| text.trim().to_owned())
                .filter(|text| !text.is_empty()),
            ingredient_lines,
            id: self.id,
            name: self.name.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            image_ref: self.thumbnail.filter(|thumb| !thumb.is_empty()),
            instructions: self.instructions.unwrap_or_default(),
            glass: self.glass.filter(|glass| !glass.is_empty()),
        }
    }
}

fn parse_error(message: impl Into<String>) -> ProviderError {
    ProviderError::ParseError {
        provider: service_names::COCKTAIL_DB.to_owned(),
        message: message.into(),
    }
}

/// Parse a `search.php` response body into recipe records
///
/// A null or absent `drinks` field means no results and yields an empty list.
///
/// # Errors
///
/// Returns `ProviderError::ParseError` if the body is not JSON, if `drinks` is neither
/// an array nor null, or if a drink object lacks its `idDrink`.
pub fn parse_drinks_response(body: &str) -> ProviderResult<Vec<Recipe>> {
    let envelope: DrinksEnvelope =
        serde_json::from_str(body).map_err(|e| parse_error(format!("JSON parse error: {e}")))?;

    match envelope.drinks {
        Value::Null => Ok(Vec::new()),
        // Some endpoints answer "no data found" instead of null
        Value::String(text) => {
            debug!(response = %text, "Recipe source returned a text placeholder, no drinks");
            Ok(Vec::new())
        }
        Value::Array(items) => items
            .into_iter()
            .map(|item| {
                serde_json::from_value::<RawDrink>(item)
                    .map(RawDrink::into_recipe)
                    .map_err(|e| parse_error(format!("invalid drink object: {e}")))
            })
            .collect(),
        other => Err(parse_error(format!(
            "expected drinks array or null, found {other}"
        ))),
    }
}
