// ABOUTME: Recipe source trait consumed by the search dispatcher
// ABOUTME: Defines the two lookups (all recipes, recipes matching a term)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors

use async_trait::async_trait;
use std::fmt;

use crate::errors::provider::ProviderResult;
use crate::models::Recipe;

/// What a lookup asks the recipe source for
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LookupQuery {
    /// Every recipe the source lists
    All,
    /// Recipes matching a non-empty search term
    Term(String),
}

impl LookupQuery {
    /// Query for a search term; the empty term means "all recipes"
    #[must_use]
    pub fn for_term(term: &str) -> Self {
        if term.is_empty() {
            Self::All
        } else {
            Self::Term(term.to_owned())
        }
    }

    /// Short label for logs
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Term(_) => "term",
        }
    }
}

impl fmt::Display for LookupQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all recipes"),
            Self::Term(term) => write!(f, "recipes matching '{term}'"),
        }
    }
}

/// External lookup service supplying recipe records
///
/// Both lookups return an empty list, not an error, when nothing matches.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Source name for logs and errors
    fn name(&self) -> &str;

    /// Fetch every recipe the source lists
    async fn fetch_all(&self) -> ProviderResult<Vec<Recipe>>;

    /// Fetch recipes matching `term`
    async fn search_by_term(&self, term: &str) -> ProviderResult<Vec<Recipe>>;

    /// Run the lookup described by `query`
    async fn lookup(&self, query: &LookupQuery) -> ProviderResult<Vec<Recipe>> {
        match query {
            LookupQuery::All => self.fetch_all().await,
            LookupQuery::Term(term) => self.search_by_term(term).await,
        }
    }
}
