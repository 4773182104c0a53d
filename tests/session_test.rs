// ABOUTME: Integration tests for the browsing session and search dispatcher
// ABOUTME: Exercises lookups against the mock source, failures, timeouts, and stale drops
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors
#![allow(missing_docs)]

mod common;

use mixmaster::engine::ActiveFilter;
use mixmaster::providers::LookupQuery;
use mixmaster::session::Renderer;
use mixmaster::state::{BrowserView, Intent};

use common::{mock_source, session_over, visible_ids};

#[tokio::test]
async fn test_start_fetches_all_recipes() {
    let source = mock_source();
    let mut session = session_over(source.clone(), 1_000);

    session.start();
    assert!(session.view().loading);
    session.settle().await;

    assert_eq!(source.calls(), vec![LookupQuery::All]);
    assert_eq!(session.state().recipes().len(), 6);
    assert!(!session.view().loading);
}

#[tokio::test]
async fn test_search_term_dispatches_matching_lookup() {
    let source = mock_source();
    let mut session = session_over(source.clone(), 1_000);

    session.dispatch(Intent::ChangeSearchTerm(String::new()));
    session.dispatch(Intent::ChangeSearchTerm("mar".into()));
    session.settle().await;

    assert_eq!(
        source.calls(),
        vec![LookupQuery::All, LookupQuery::Term("mar".into())]
    );
    assert_eq!(visible_ids(&session), vec!["11007", "12862"]);
    assert_eq!(session.view().term, "mar");
}

#[tokio::test]
async fn test_failed_search_keeps_previous_list() {
    let source = mock_source();
    let mut session = session_over(source.clone(), 1_000);
    session.start();
    session.settle().await;
    let before = visible_ids(&session);

    source.set_failing(true);
    session.dispatch(Intent::ChangeSearchTerm("mar".into()));
    session.settle().await;

    assert_eq!(visible_ids(&session), before);
    let view = session.view();
    assert!(!view.loading);
    assert!(view
        .notice
        .is_some_and(|notice| notice.message.contains("injected failure")));

    source.set_failing(false);
    session.dispatch(Intent::Refresh);
    session.settle().await;
    assert!(session.view().notice.is_none());
    assert_eq!(visible_ids(&session), vec!["11007", "12862"]);
}

#[tokio::test]
async fn test_stale_response_is_dropped() {
    let source = mock_source();
    let release_slow = source.hold(LookupQuery::Term("m".into()));
    let mut session = session_over(source.clone(), 1_000);

    session.dispatch(Intent::ChangeSearchTerm("m".into()));
    session.dispatch(Intent::ChangeSearchTerm("mojito".into()));

    assert_eq!(session.next_resolution().await, Some(2));
    assert_eq!(visible_ids(&session), vec!["11000"]);
    assert!(!session.view().loading);

    release_slow.notify_one();
    assert_eq!(session.next_resolution().await, Some(1));
    assert_eq!(visible_ids(&session), vec!["11000"]);
    assert_eq!(session.in_flight(), 0);
}

#[tokio::test]
async fn test_hung_lookup_times_out() {
    let source = mock_source();
    let _never = source.hold(LookupQuery::All);
    let mut session = session_over(source.clone(), 50);

    session.start();
    session.settle().await;

    let view = session.view();
    assert!(!view.loading);
    assert!(view.visible.is_empty());
    assert!(view
        .notice
        .is_some_and(|notice| notice.retryable && notice.message.contains("did not respond")));
}

#[tokio::test]
async fn test_inventory_and_favorites_survive_new_lookups() {
    let source = mock_source();
    let mut session = session_over(source.clone(), 1_000);
    session.start();
    session.settle().await;

    session.dispatch(Intent::AddInventoryItem("Gin".into()));
    session.dispatch(Intent::AddInventoryItem("Tonic Water".into()));
    session.dispatch(Intent::ToggleFavorite("A".into()));
    session.dispatch(Intent::ChangeFilter(ActiveFilter::CanMake));

    session.dispatch(Intent::ChangeSearchTerm("gin".into()));
    session.settle().await;

    assert_eq!(visible_ids(&session), vec!["A"]);
    assert_eq!(session.state().inventory().len(), 2);
    assert!(session.state().favorites().contains("A"));
    assert_eq!(session.view().filter, ActiveFilter::CanMake);
}

#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<(usize, bool)>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, view: &BrowserView<'_>) {
        self.frames.push((view.visible.len(), view.loading));
    }
}

#[tokio::test]
async fn test_renderer_sees_loading_then_results() {
    let source = mock_source();
    let mut session = session_over(source, 1_000);
    let mut renderer = RecordingRenderer::default();

    session.start();
    session.render(&mut renderer);
    session.settle().await;
    session.render(&mut renderer);

    assert_eq!(renderer.frames, vec![(0, true), (6, false)]);
}
