// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Book search state management.
//!
//! This module provides the [`SearchController`], which owns the observable
//! [`SearchState`] and drives the request lifecycle: query validation,
//! request dispatch, response normalization and error classification.
//!
//! The controller never performs I/O. [`SearchController::search`] hands back
//! a [`SearchRequest`] for the caller to dispatch, and the outcome is fed back
//! through [`SearchController::complete`].
//!
//! Each request carries a sequence number. Only the most recently issued
//! request may change the state, so a slow response can never overwrite the
//! outcome of a newer search.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    catalog::{CatalogError, CatalogLinks},
    model::{BookResult, RawRecord},
};

/// User-facing search failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum SearchError {
    #[error("Please enter a book title.")]
    Validation,
    #[error("No books found.")]
    NoResults,
    #[error("Failed to fetch books. Please try again.")]
    Fetch,
}

/// The condition that dominates the search state at any instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchPhase {
    Idle,
    Loading,
    Error(SearchError),
    Results,
}

/// Everything the renderer needs to draw the search feature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SearchState {
    pub(crate) query: String,
    pub(crate) results: Vec<BookResult>,
    pub(crate) loading: bool,
    pub(crate) error: Option<SearchError>,
}

impl SearchState {
    pub(crate) fn phase(&self) -> SearchPhase {
        if self.loading {
            SearchPhase::Loading
        } else if let Some(error) = self.error {
            SearchPhase::Error(error)
        } else if !self.results.is_empty() {
            SearchPhase::Results
        } else {
            SearchPhase::Idle
        }
    }
}

/// An outbound title search, tagged with its sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchRequest {
    pub(crate) id: u64,
    pub(crate) query: String,
}

/// The result of executing a [`SearchRequest`].
#[derive(Debug)]
pub(crate) struct SearchCompletion {
    pub(crate) request_id: u64,
    pub(crate) outcome: Result<Vec<RawRecord>, CatalogError>,
}

/// Most books shown for one search, in catalog order.
pub(crate) const RESULT_LIMIT: usize = 12;

pub(crate) struct SearchController {
    state: SearchState,
    links: CatalogLinks,
    last_request_id: u64,
    in_flight: Option<u64>,
}

impl SearchController {
    pub(crate) fn new(links: CatalogLinks) -> Self {
        Self {
            state: SearchState::default(),
            links,
            last_request_id: 0,
            in_flight: None,
        }
    }

    pub(crate) fn state(&self) -> &SearchState {
        &self.state
    }

    /// Replaces the query text, nothing else changes until the next search.
    pub(crate) fn set_query(&mut self, text: impl Into<String>) {
        self.state.query = text.into();
    }

    /// Starts a search for the current query.
    ///
    /// Results are cleared whatever the outcome. A blank query sets the
    /// validation error and returns `None`, it also supersedes any request
    /// still in flight. Otherwise the state moves to loading and the request
    /// to dispatch is returned, carrying the query untrimmed.
    pub(crate) fn search(&mut self) -> Option<SearchRequest> {
        self.state.results.clear();

        if self.state.query.trim().is_empty() {
            debug!("Rejected blank search query");
            self.in_flight = None;
            self.state.loading = false;
            self.state.error = Some(SearchError::Validation);
            return None;
        }

        self.last_request_id += 1;
        let request = SearchRequest {
            id: self.last_request_id,
            query: self.state.query.clone(),
        };

        self.in_flight = Some(request.id);
        self.state.loading = true;
        self.state.error = None;

        info!(request_id = request.id, query = %request.query, "Search started");

        Some(request)
    }

    /// Applies the outcome of a dispatched request.
    ///
    /// Returns `false`, leaving the state untouched, when the completion
    /// belongs to a request that has since been superseded.
    pub(crate) fn complete(&mut self, completion: SearchCompletion) -> bool {
        if self.in_flight != Some(completion.request_id) {
            debug!(
                request_id = completion.request_id,
                "Discarding response for a superseded search"
            );
            return false;
        }

        self.in_flight = None;
        self.state.loading = false;
        self.state.results.clear();

        match completion.outcome {
            Err(e) => {
                warn!(request_id = completion.request_id, error = %e, "Search failed");
                self.state.error = Some(SearchError::Fetch);
            }

            Ok(records) if records.is_empty() => {
                info!(request_id = completion.request_id, "Search found no books");
                self.state.error = Some(SearchError::NoResults);
            }

            Ok(records) => {
                self.state.results = records
                    .iter()
                    .take(RESULT_LIMIT)
                    .map(|record| BookResult::from_record(record, &self.links))
                    .collect();
                self.state.error = None;

                info!(
                    request_id = completion.request_id,
                    found = records.len(),
                    shown = self.state.results.len(),
                    "Search finished"
                );
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PublishYear;

    fn controller() -> SearchController {
        let links = CatalogLinks {
            covers_url: "https://covers.openlibrary.org/b/id".to_string(),
            site_url: "https://openlibrary.org".to_string(),
        };
        SearchController::new(links)
    }

    fn titled(n: usize) -> Vec<RawRecord> {
        (0..n)
            .map(|i| RawRecord {
                key: Some(format!("/works/OL{}W", i)),
                title: Some(format!("Book {}", i)),
                ..Default::default()
            })
            .collect()
    }

    fn succeed(request: &SearchRequest, records: Vec<RawRecord>) -> SearchCompletion {
        SearchCompletion {
            request_id: request.id,
            outcome: Ok(records),
        }
    }

    #[test]
    fn test_initial_state_is_idle() {
        let controller = controller();

        assert_eq!(controller.state(), &SearchState::default());
        assert_eq!(controller.state().phase(), SearchPhase::Idle);
    }

    #[test]
    fn test_set_query_changes_nothing_else() {
        let mut controller = controller();
        controller.set_query("Dune");
        let request = controller.search().unwrap();
        controller.complete(succeed(&request, titled(2)));

        controller.set_query("Emma");

        let state = controller.state();
        assert_eq!(state.query, "Emma");
        assert_eq!(state.results.len(), 2);
        assert_eq!(state.phase(), SearchPhase::Results);
    }

    #[test]
    fn test_blank_query_is_rejected() {
        for query in ["", " ", "\t\n  "] {
            let mut controller = controller();
            controller.set_query(query);

            assert_eq!(controller.search(), None);

            let state = controller.state();
            assert_eq!(state.error, Some(SearchError::Validation));
            assert_eq!(
                state.error.unwrap().to_string(),
                "Please enter a book title."
            );
            assert!(!state.loading);
            assert!(state.results.is_empty());
        }
    }

    #[test]
    fn test_blank_query_clears_previous_results() {
        let mut controller = controller();
        controller.set_query("Dune");
        let request = controller.search().unwrap();
        controller.complete(succeed(&request, titled(3)));

        controller.set_query("   ");
        controller.search();

        assert!(controller.state().results.is_empty());
        assert_eq!(
            controller.state().phase(),
            SearchPhase::Error(SearchError::Validation)
        );
    }

    #[test]
    fn test_search_enters_loading() {
        let mut controller = controller();
        controller.set_query("  Harry Potter ");

        let request = controller.search().unwrap();

        assert_eq!(request.query, "  Harry Potter ");
        let state = controller.state();
        assert!(state.loading);
        assert_eq!(state.error, None);
        assert!(state.results.is_empty());
        assert_eq!(state.phase(), SearchPhase::Loading);
    }

    #[test]
    fn test_search_clears_previous_error() {
        let mut controller = controller();
        controller.search();
        assert_eq!(controller.state().error, Some(SearchError::Validation));

        controller.set_query("Dune");
        controller.search();

        assert_eq!(controller.state().error, None);
        assert!(controller.state().loading);
    }

    #[test]
    fn test_harry_potter_scenario() {
        let mut controller = controller();
        controller.set_query("Harry Potter");
        let request = controller.search().unwrap();

        let record = RawRecord {
            key: Some("/works/OL1W".to_string()),
            title: Some("Harry Potter".to_string()),
            author_name: Some(vec!["J. K. Rowling".to_string()]),
            first_publish_year: Some(1997),
            cover_i: Some(12345),
        };
        assert!(controller.complete(succeed(&request, vec![record])));

        let state = controller.state();
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.results.len(), 1);

        let book = &state.results[0];
        assert_eq!(book.id, "/works/OL1W");
        assert_eq!(book.title, "Harry Potter");
        assert_eq!(book.author, "J. K. Rowling");
        assert_eq!(book.year, PublishYear::Known(1997));
        assert_eq!(
            book.cover_url.as_deref(),
            Some("https://covers.openlibrary.org/b/id/12345-M.jpg")
        );
    }

    #[test]
    fn test_results_are_capped_in_order() {
        for (found, shown) in [(1, 1), (12, 12), (13, 12), (40, 12)] {
            let mut controller = controller();
            controller.set_query("Book");
            let request = controller.search().unwrap();

            controller.complete(succeed(&request, titled(found)));

            let results = &controller.state().results;
            assert_eq!(results.len(), shown);
            for (i, book) in results.iter().enumerate() {
                assert_eq!(book.title, format!("Book {}", i));
            }
        }
    }

    #[test]
    fn test_no_records_found() {
        let mut controller = controller();
        controller.set_query("zzzzqqqq");
        let request = controller.search().unwrap();

        controller.complete(succeed(&request, vec![]));

        let state = controller.state();
        assert!(!state.loading);
        assert!(state.results.is_empty());
        assert_eq!(state.error, Some(SearchError::NoResults));
        assert_eq!(state.error.unwrap().to_string(), "No books found.");
    }

    #[test]
    fn test_fetch_failure() {
        let mut controller = controller();
        controller.set_query("Dune");
        let request = controller.search().unwrap();

        controller.complete(SearchCompletion {
            request_id: request.id,
            outcome: Err(CatalogError::WorkerAborted),
        });

        let state = controller.state();
        assert!(!state.loading);
        assert!(state.results.is_empty());
        assert_eq!(state.error, Some(SearchError::Fetch));
        assert_eq!(
            state.error.unwrap().to_string(),
            "Failed to fetch books. Please try again."
        );
    }

    #[test]
    fn test_decode_failure_is_a_fetch_failure() {
        let mut controller = controller();
        controller.set_query("Dune");
        let request = controller.search().unwrap();
        let decode_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();

        controller.complete(SearchCompletion {
            request_id: request.id,
            outcome: Err(CatalogError::Decode(decode_error)),
        });

        assert_eq!(controller.state().error, Some(SearchError::Fetch));
    }

    #[test]
    fn test_superseded_response_is_discarded() {
        let mut controller = controller();
        controller.set_query("First");
        let first = controller.search().unwrap();
        controller.set_query("Second");
        let second = controller.search().unwrap();
        assert!(second.id > first.id);

        // The newer request resolves first, the older one arrives late
        assert!(controller.complete(succeed(&second, titled(2))));
        assert!(!controller.complete(SearchCompletion {
            request_id: first.id,
            outcome: Err(CatalogError::WorkerAborted),
        }));

        let state = controller.state();
        assert_eq!(state.results.len(), 2);
        assert_eq!(state.error, None);
        assert!(!state.loading);
    }

    #[test]
    fn test_older_response_does_not_end_loading() {
        let mut controller = controller();
        controller.set_query("First");
        let first = controller.search().unwrap();
        controller.set_query("Second");
        let second = controller.search().unwrap();

        assert!(!controller.complete(succeed(&first, titled(4))));
        assert!(controller.state().loading);
        assert!(controller.state().results.is_empty());

        assert!(controller.complete(succeed(&second, vec![])));
        assert!(!controller.state().loading);
        assert_eq!(controller.state().error, Some(SearchError::NoResults));
    }

    #[test]
    fn test_validation_failure_supersedes_in_flight_request() {
        let mut controller = controller();
        controller.set_query("Dune");
        let request = controller.search().unwrap();

        controller.set_query("");
        controller.search();
        assert!(!controller.state().loading);

        assert!(!controller.complete(succeed(&request, titled(1))));
        assert_eq!(controller.state().error, Some(SearchError::Validation));
        assert!(controller.state().results.is_empty());
    }

    #[test]
    fn test_duplicate_completion_is_ignored() {
        let mut controller = controller();
        controller.set_query("Dune");
        let request = controller.search().unwrap();

        assert!(controller.complete(succeed(&request, titled(1))));
        assert!(!controller.complete(succeed(&request, titled(5))));
        assert_eq!(controller.state().results.len(), 1);
    }
}
