// ABOUTME: MixMaster CLI - browse the cocktail catalog from a terminal
// ABOUTME: Interactive browsing shell and one-shot recipe search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors
//!
//! Usage:
//! ```bash
//! # Interactive shell (search, filter, My Bar, favorites, detail view)
//! mixmaster browse
//!
//! # One-shot search, printing the filtered list
//! mixmaster search margarita
//!
//! # Everything makeable from what is on hand
//! mixmaster search --filter can-make --have gin,"tonic water",lime
//!
//! # Machine-readable output
//! mixmaster search sour --json
//!
//! # Point at another recipe service and log at debug level
//! mixmaster --base-url http://localhost:8080/api/json/v1/1 -v browse
//! ```

mod commands;
mod helpers;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mixmaster::config::BrowserConfig;
use mixmaster::engine::ActiveFilter;
use mixmaster::errors::AppError;
use mixmaster::logging::LoggingConfig;
use mixmaster::providers::{CocktailDbClient, RecipeSource};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "mixmaster",
    about = "MixMaster cocktail catalog browser",
    long_about = "Search cocktail recipes, track your bar, and see what you can make."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Recipe service base URL override
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Interactive browsing shell
    Browse,

    /// Look up recipes once and print the filtered list
    Search {
        /// Search term (omit to list all recipes)
        #[arg(default_value = "")]
        term: String,

        /// Category filter: all, alcoholic, non-alcoholic, can-make
        #[arg(long, short = 'f', default_value = "all")]
        filter: ActiveFilter,

        /// Ingredients on hand (comma-separated)
        #[arg(long, value_delimiter = ',')]
        have: Vec<String>,

        /// Print the recipes as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = BrowserConfig::from_env()?;
    if let Some(base_url) = cli.base_url.as_deref() {
        config = config.with_base_url(base_url)?;
    }

    let logging = LoggingConfig::from_env(config.environment);
    let logging = if cli.verbose { logging.verbose() } else { logging };
    logging.init()?;
    info!(
        base_url = %config.api_base_url,
        lookup_timeout_secs = config.lookup_timeout.as_secs(),
        "Configuration loaded"
    );

    let source: Arc<dyn RecipeSource> =
        Arc::new(CocktailDbClient::new(config.cocktail_db_config()).map_err(AppError::from)?);

    match cli.command {
        Command::Browse => commands::browse::run(source, &config).await,
        Command::Search {
            term,
            filter,
            have,
            json,
        } => {
            let query = commands::search::SearchArgs {
                term: &term,
                filter,
                have: &have,
                json,
            };
            commands::search::run(source, &config, query).await
        }
    }
}
