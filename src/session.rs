// ABOUTME: Browsing session driving the reducer and running recipe lookups as tasks
// ABOUTME: Lookup results come back over a channel and are applied one at a time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors

use std::mem;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;
use tracing::{debug, info};

use crate::dispatcher::LookupRequest;
use crate::errors::ProviderError;
use crate::providers::RecipeSource;
use crate::state::{apply_intent, BrowserState, BrowserView, Intent};

/// Displays derived state
///
/// The session hands the renderer a fresh [`BrowserView`] after every change it
/// wants shown. Renderers never mutate state; they turn user input into
/// [`Intent`]s and dispatch them on the session.
pub trait Renderer {
    /// Draw one frame
    fn render(&mut self, view: &BrowserView<'_>);
}

/// One user's browsing session
///
/// State transitions happen only on the task that owns the session. Lookups run
/// on spawned tasks, bounded by the lookup timeout, and report back through an
/// unbounded channel; [`BrowserSession::next_resolution`] applies them.
pub struct BrowserSession {
    source: Arc<dyn RecipeSource>,
    lookup_timeout: Duration,
    state: BrowserState,
    resolved_tx: mpsc::UnboundedSender<Intent>,
    resolved_rx: mpsc::UnboundedReceiver<Intent>,
    in_flight: usize,
}

impl BrowserSession {
    /// Create a session over `source`
    #[must_use]
    pub fn new(source: Arc<dyn RecipeSource>, lookup_timeout: Duration) -> Self {
        let (resolved_tx, resolved_rx) = mpsc::unbounded_channel();
        Self {
            source,
            lookup_timeout,
            state: BrowserState::new(),
            resolved_tx,
            resolved_rx,
            in_flight: 0,
        }
    }

    /// Issue the initial "all recipes" lookup
    pub fn start(&mut self) {
        info!(source = self.source.name(), "Starting browsing session");
        self.dispatch(Intent::Refresh);
    }

    /// Apply `intent` and launch the lookup it asks for, if any
    ///
    /// Must be called from within a tokio runtime.
    pub fn dispatch(&mut self, intent: Intent) {
        let (state, request) = apply_intent(mem::take(&mut self.state), intent);
        self.state = state;
        if let Some(request) = request {
            self.spawn_lookup(request);
        }
    }

    /// Wait for one lookup to finish and apply its result
    ///
    /// Returns the sequence number of the resolved lookup, or `None` straight away
    /// when nothing is in flight. Stale results are consumed and dropped by the
    /// reducer like any other.
    pub async fn next_resolution(&mut self) -> Option<u64> {
        if self.in_flight == 0 {
            return None;
        }
        let intent = self.resolved_rx.recv().await?;
        self.in_flight -= 1;
        let seq = match &intent {
            Intent::LookupResolved { seq, .. } => Some(*seq),
            _ => None,
        };
        self.dispatch(intent);
        seq
    }

    /// Apply results until no lookup is in flight
    pub async fn settle(&mut self) {
        while self.next_resolution().await.is_some() {}
    }

    /// Number of lookups spawned but not yet applied
    #[must_use]
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &BrowserState {
        &self.state
    }

    /// Derived view of the current state
    #[must_use]
    pub fn view(&self) -> BrowserView<'_> {
        self.state.view()
    }

    /// Draw the current view on `renderer`
    pub fn render(&self, renderer: &mut impl Renderer) {
        renderer.render(&self.view());
    }

    fn spawn_lookup(&mut self, request: LookupRequest) {
        let LookupRequest { seq, query } = request;
        info!(lookup.seq = seq, lookup.kind = query.kind(), "Issuing recipe lookup");

        let source = Arc::clone(&self.source);
        let tx = self.resolved_tx.clone();
        let limit = self.lookup_timeout;
        self.in_flight += 1;

        tokio::spawn(async move {
            let outcome = match timeout(limit, source.lookup(&query)).await {
                Ok(outcome) => outcome,
                Err(_) => Err(ProviderError::Timeout {
                    provider: source.name().to_owned(),
                    timeout_secs: limit.as_secs(),
                }),
            };
            if tx.send(Intent::LookupResolved { seq, outcome }).is_err() {
                debug!(lookup.seq = seq, "Session closed before lookup resolved");
            }
        });
    }
}
