// ABOUTME: Search dispatcher mapping search terms to sequenced recipe lookups
// ABOUTME: Tracks the latest issued lookup so stale responses can be discarded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors

use crate::providers::LookupQuery;

/// A lookup the session must run against the recipe source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    /// Sequence number; only the latest issued one may update the recipe list
    pub seq: u64,
    /// What to look up
    pub query: LookupQuery,
}

/// Turns search term changes into lookups and orders their responses
///
/// Every issued lookup gets the next sequence number. A response is accepted only
/// when it carries the latest number, so a slow early lookup can never overwrite
/// the results of a later one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchDispatcher {
    term: String,
    issued: u64,
    pending: Option<u64>,
}

impl SearchDispatcher {
    /// Create a dispatcher with an empty term and nothing issued
    #[must_use]
    pub const fn new() -> Self {
        Self {
            term: String::new(),
            issued: 0,
            pending: None,
        }
    }

    /// Store `term` and issue the lookup for it
    ///
    /// The empty term asks for every recipe. No debouncing happens here: every
    /// change issues a lookup.
    pub fn on_search_term_change(&mut self, term: &str) -> LookupRequest {
        term.clone_into(&mut self.term);
        self.issue()
    }

    /// Issue the lookup for the current term again
    pub fn refresh(&mut self) -> LookupRequest {
        self.issue()
    }

    /// Whether a response for `seq` may be applied
    ///
    /// Accepting the latest lookup clears the pending marker. Older numbers are
    /// rejected and leave it untouched.
    pub fn accept(&mut self, seq: u64) -> bool {
        if seq == self.issued && self.pending == Some(seq) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Whether the latest issued lookup has not resolved yet
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Current search term
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Sequence number of the latest issued lookup, 0 before the first one
    #[must_use]
    pub const fn latest_seq(&self) -> u64 {
        self.issued
    }

    fn issue(&mut self) -> LookupRequest {
        self.issued += 1;
        self.pending = Some(self.issued);
        LookupRequest {
            seq: self.issued,
            query: LookupQuery::for_term(&self.term),
        }
    }
}
