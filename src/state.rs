// ABOUTME: Browser state container and the reducer applying user and lookup intents
// ABOUTME: Derives the view the renderer displays from the current state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors

//! # Browser State
//!
//! All session state lives in [`BrowserState`] and changes only through
//! [`apply_intent`]. The reducer never performs I/O; when an intent needs a recipe
//! lookup it returns a [`LookupRequest`] and the caller runs it, feeding the
//! outcome back as [`Intent::LookupResolved`].

use tracing::{debug, warn};

use crate::dispatcher::{LookupRequest, SearchDispatcher};
use crate::engine::{apply_filter, ActiveFilter, FavoritesSet, InventorySet};
use crate::errors::ProviderError;
use crate::models::Recipe;

/// Something the user did, or the result of a lookup
#[derive(Debug)]
pub enum Intent {
    /// Switch the category filter
    ChangeFilter(ActiveFilter),
    /// Replace the search term and look it up
    ChangeSearchTerm(String),
    /// Look up the current term again
    Refresh,
    /// Star or un-star the recipe with this id
    ToggleFavorite(String),
    /// Toggle an inventory entry by exact text
    ToggleInventoryItem(String),
    /// Add an inventory entry
    AddInventoryItem(String),
    /// Remove an inventory entry by exact text
    RemoveInventoryItem(String),
    /// Open the detail of the recipe with this id
    SelectRecipe(String),
    /// Close the detail
    DismissDetail,
    /// A lookup finished
    LookupResolved {
        /// Sequence number the lookup was issued with
        seq: u64,
        /// Recipes found, or why the lookup failed
        outcome: Result<Vec<Recipe>, ProviderError>,
    },
}

/// Non-fatal message for the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Human readable text
    pub message: String,
    /// Whether trying again may help
    pub retryable: bool,
}

impl Notice {
    fn lookup_failed(error: &ProviderError) -> Self {
        Self {
            message: format!("Could not load recipes: {error}"),
            retryable: error.is_retryable(),
        }
    }
}

/// Complete state of one browsing session
#[derive(Debug, Clone, Default)]
pub struct BrowserState {
    recipes: Vec<Recipe>,
    filter: ActiveFilter,
    inventory: InventorySet,
    favorites: FavoritesSet,
    dispatcher: SearchDispatcher,
    selected: Option<Recipe>,
    notice: Option<Notice>,
}

impl BrowserState {
    /// Fresh state: no recipes, filter `All`, empty sets
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recipe list from the last accepted lookup
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Active filter
    #[must_use]
    pub const fn filter(&self) -> ActiveFilter {
        self.filter
    }

    /// Inventory set
    #[must_use]
    pub const fn inventory(&self) -> &InventorySet {
        &self.inventory
    }

    /// Favorites set
    #[must_use]
    pub const fn favorites(&self) -> &FavoritesSet {
        &self.favorites
    }

    /// Search dispatcher
    #[must_use]
    pub const fn dispatcher(&self) -> &SearchDispatcher {
        &self.dispatcher
    }

    /// Recipe whose detail is open
    #[must_use]
    pub const fn selected(&self) -> Option<&Recipe> {
        self.selected.as_ref()
    }

    /// Last notice
    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Derive everything the renderer shows
    #[must_use]
    pub fn view(&self) -> BrowserView<'_> {
        BrowserView {
            term: self.dispatcher.term(),
            filter: self.filter,
            visible: apply_filter(&self.recipes, self.filter, &self.inventory),
            inventory: &self.inventory,
            favorites: &self.favorites,
            loading: self.dispatcher.is_loading(),
            detail: self
                .selected
                .as_ref()
                .map(|recipe| RecipeDetail::new(recipe, self.favorites.contains(&recipe.id))),
            notice: self.notice.as_ref(),
        }
    }

    /// Find a recipe by id in the current list, then among favorites
    fn find_recipe(&self, id: &str) -> Option<&Recipe> {
        self.recipes
            .iter()
            .find(|recipe| recipe.id == id)
            .or_else(|| self.favorites.get(id))
    }

    fn resolve_lookup(&mut self, seq: u64, outcome: Result<Vec<Recipe>, ProviderError>) {
        if !self.dispatcher.accept(seq) {
            debug!(
                lookup.seq = seq,
                lookup.latest = self.dispatcher.latest_seq(),
                "Dropping stale lookup response"
            );
            return;
        }

        match outcome {
            Ok(recipes) => {
                debug!(lookup.seq = seq, recipes.count = recipes.len(), "Recipe list replaced");
                self.recipes = recipes;
                self.notice = None;
            }
            Err(error) => {
                warn!(
                    lookup.seq = seq,
                    source = error.provider(),
                    error = %error,
                    retryable = error.is_retryable(),
                    "Recipe lookup failed, keeping previous list"
                );
                self.notice = Some(Notice::lookup_failed(&error));
            }
        }
    }
}

/// Apply one intent, returning the new state and the lookup to run, if any
#[must_use]
pub fn apply_intent(
    mut state: BrowserState,
    intent: Intent,
) -> (BrowserState, Option<LookupRequest>) {
    let request = match intent {
        Intent::ChangeFilter(filter) => {
            state.filter = filter;
            None
        }
        Intent::ChangeSearchTerm(term) => Some(state.dispatcher.on_search_term_change(&term)),
        Intent::Refresh => Some(state.dispatcher.refresh()),
        Intent::ToggleFavorite(id) => {
            if !state.favorites.remove(&id) {
                if let Some(recipe) = state.recipes.iter().find(|recipe| recipe.id == id) {
                    state.favorites.toggle(recipe);
                } else {
                    debug!(recipe.id = %id, "Ignoring favorite toggle for unknown recipe");
                }
            }
            None
        }
        Intent::ToggleInventoryItem(name) => {
            state.inventory.toggle(&name);
            None
        }
        Intent::AddInventoryItem(name) => {
            state.inventory.add(&name);
            None
        }
        Intent::RemoveInventoryItem(name) => {
            state.inventory.remove(&name);
            None
        }
        Intent::SelectRecipe(id) => {
            if let Some(recipe) = state.find_recipe(&id).cloned() {
                state.selected = Some(recipe);
            } else {
                debug!(recipe.id = %id, "Ignoring selection of unknown recipe");
            }
            None
        }
        Intent::DismissDetail => {
            state.selected = None;
            None
        }
        Intent::LookupResolved { seq, outcome } => {
            state.resolve_lookup(seq, outcome);
            None
        }
    };
    (state, request)
}

/// Everything the renderer needs for one frame
#[derive(Debug)]
pub struct BrowserView<'a> {
    /// Current search term
    pub term: &'a str,
    /// Active filter
    pub filter: ActiveFilter,
    /// Recipes passing the filter, in list order
    pub visible: Vec<&'a Recipe>,
    /// Inventory ("My Bar")
    pub inventory: &'a InventorySet,
    /// Favorites
    pub favorites: &'a FavoritesSet,
    /// Whether the latest lookup is still running
    pub loading: bool,
    /// Open recipe detail
    pub detail: Option<RecipeDetail<'a>>,
    /// Last non-fatal notice
    pub notice: Option<&'a Notice>,
}

/// Detail of one recipe, unnamed ingredient slots already skipped
#[derive(Debug, PartialEq, Eq)]
pub struct RecipeDetail<'a> {
    /// Recipe id
    pub id: &'a str,
    /// Display name
    pub name: &'a str,
    /// Category label
    pub category: &'a str,
    /// Alcoholic label as the recipe service wrote it
    pub alcoholic: &'a str,
    /// Image reference
    pub image_ref: Option<&'a str>,
    /// (name, measure) pairs
    pub ingredients: Vec<(&'a str, &'a str)>,
    /// Preparation instructions
    pub instructions: &'a str,
    /// Serving glass
    pub glass: Option<&'a str>,
    /// Whether the recipe is starred
    pub favorite: bool,
}

impl<'a> RecipeDetail<'a> {
    /// Build the detail of `recipe`
    #[must_use]
    pub fn new(recipe: &'a Recipe, favorite: bool) -> Self {
        Self {
            id: &recipe.id,
            name: &recipe.name,
            category: &recipe.category,
            alcoholic: recipe.alcoholic_label(),
            image_ref: recipe.image_ref.as_deref(),
            ingredients: recipe.ingredients().collect(),
            instructions: &recipe.instructions,
            glass: recipe.glass.as_deref(),
            favorite,
        }
    }
}
