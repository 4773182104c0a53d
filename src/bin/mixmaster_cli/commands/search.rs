// ABOUTME: One-shot recipe search for the mixmaster CLI
// ABOUTME: Runs a single lookup, applies filter and inventory, and prints the list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors

use std::sync::Arc;

use anyhow::{bail, Result};
use mixmaster::config::BrowserConfig;
use mixmaster::engine::ActiveFilter;
use mixmaster::providers::RecipeSource;
use mixmaster::session::BrowserSession;
use mixmaster::state::Intent;
use tracing::info;

use crate::helpers::display::display_cocktails;

/// Arguments of the `search` subcommand
pub struct SearchArgs<'a> {
    /// Search term, empty for all recipes
    pub term: &'a str,
    /// Category filter
    pub filter: ActiveFilter,
    /// Ingredients on hand
    pub have: &'a [String],
    /// Print JSON instead of the text list
    pub json: bool,
}

/// Look up the term once and print the recipes passing the filter
///
/// # Errors
///
/// Returns an error if the lookup fails or the output cannot be serialized
pub async fn run(
    source: Arc<dyn RecipeSource>,
    config: &BrowserConfig,
    args: SearchArgs<'_>,
) -> Result<()> {
    let mut session = BrowserSession::new(source, config.lookup_timeout);
    for ingredient in args.have {
        session.dispatch(Intent::AddInventoryItem(ingredient.clone()));
    }
    session.dispatch(Intent::ChangeFilter(args.filter));
    session.dispatch(Intent::ChangeSearchTerm(args.term.trim().to_owned()));
    session.settle().await;

    let view = session.view();
    if let Some(notice) = view.notice {
        bail!("{}", notice.message);
    }

    info!(
        recipes.count = session.state().recipes().len(),
        visible = view.visible.len(),
        "Search finished"
    );
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view.visible)?);
    } else {
        display_cocktails(&view);
    }
    Ok(())
}
