// ABOUTME: Scripted in-memory recipe source for tests and offline sessions
// ABOUTME: Supports canned catalogs, injected failures, and held lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::Notify;

use crate::constants::service_names;
use crate::errors::provider::{ProviderError, ProviderResult};
use crate::models::Recipe;
use crate::source::{LookupQuery, RecipeSource};

/// In-memory recipe source
///
/// Term lookups match recipe names case-insensitively by substring, the way the
/// public recipe service searches by name. Every lookup is recorded so callers can
/// assert what was requested.
#[derive(Default)]
pub struct MockRecipeSource {
    catalog: Vec<Recipe>,
    failing: AtomicBool,
    calls: Mutex<Vec<LookupQuery>>,
    holds: Mutex<HashMap<LookupQuery, Arc<Notify>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockRecipeSource {
    /// Create a source serving `catalog`
    #[must_use]
    pub fn with_catalog(catalog: Vec<Recipe>) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    /// Make every following lookup fail (or succeed again)
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Hold lookups for `query` until the returned handle is notified
    ///
    /// Calling `notify_one` on the handle before the lookup starts releases it as
    /// soon as it arrives.
    pub fn hold(&self, query: LookupQuery) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        lock(&self.holds).insert(query, Arc::clone(&notify));
        notify
    }

    /// Lookups received so far, in arrival order
    #[must_use]
    pub fn calls(&self) -> Vec<LookupQuery> {
        lock(&self.calls).clone()
    }

    async fn answer(&self, query: LookupQuery) -> ProviderResult<Vec<Recipe>> {
        lock(&self.calls).push(query.clone());

        let held = lock(&self.holds).get(&query).cloned();
        if let Some(release) = held {
            release.notified().await;
        }

        if self.failing.load(Ordering::SeqCst) {
            return Err(ProviderError::NetworkError {
                provider: service_names::MOCK_SOURCE.to_owned(),
                message: format!("injected failure for {query}"),
            });
        }

        Ok(match &query {
            LookupQuery::All => self.catalog.clone(),
            LookupQuery::Term(term) => {
                let needle = term.to_lowercase();
                self.catalog
                    .iter()
                    .filter(|recipe| recipe.name.to_lowercase().contains(&needle))
                    .cloned()
                    .collect()
            }
        })
    }
}

#[async_trait]
impl RecipeSource for MockRecipeSource {
    fn name(&self) -> &str {
        service_names::MOCK_SOURCE
    }

    async fn fetch_all(&self) -> ProviderResult<Vec<Recipe>> {
        self.answer(LookupQuery::All).await
    }

    async fn search_by_term(&self, term: &str) -> ProviderResult<Vec<Recipe>> {
        self.answer(LookupQuery::Term(term.to_owned())).await
    }
}
