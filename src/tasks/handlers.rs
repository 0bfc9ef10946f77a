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

use std::{
    sync::{Arc, mpsc::Sender},
    thread,
    time::Instant,
};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::{
    catalog::{CatalogClient, CatalogError},
    events::AppEvent,
    model::{
        RawRecord,
        search::{SearchCompletion, SearchRequest},
    },
    tasks::TaskContext,
};

/// Runs a title search on its own thread, so a slow request never holds up
/// a newer one.
pub(super) fn search(ctx: &TaskContext, request: SearchRequest) -> Result<()> {
    let guard = CompletionGuard::new(request.id, ctx.event_tx.clone());
    let client = Arc::clone(&ctx.client);
    let name = format!("search-{}", request.id);

    // If the spawn fails the closure, and with it the guard, is dropped and
    // the request still completes
    thread::Builder::new()
        .name(name)
        .spawn(move || run_search(client.as_ref(), &request.query, guard))
        .context("Failed to spawn search thread")?;

    Ok(())
}

fn run_search(client: &dyn CatalogClient, query: &str, mut guard: CompletionGuard) {
    let started = Instant::now();
    let outcome = client.search_title(query);
    let elapsed_ms = started.elapsed().as_millis() as u64;

    match &outcome {
        Ok(records) => info!(
            request_id = guard.request_id,
            records = records.len(),
            elapsed_ms,
            "Catalog search returned"
        ),
        Err(e) => warn!(
            request_id = guard.request_id,
            error = %e,
            elapsed_ms,
            "Catalog search failed"
        ),
    }

    guard.complete(outcome);
}

/// Reports exactly one completion for a request.
///
/// Dropping the guard without calling [`CompletionGuard::complete`], for
/// example while unwinding, reports [`CatalogError::WorkerAborted`].
struct CompletionGuard {
    request_id: u64,
    event_tx: Sender<AppEvent>,
    reported: bool,
}

impl CompletionGuard {
    fn new(request_id: u64, event_tx: Sender<AppEvent>) -> Self {
        Self {
            request_id,
            event_tx,
            reported: false,
        }
    }

    fn complete(&mut self, outcome: Result<Vec<RawRecord>, CatalogError>) {
        self.reported = true;
        let completion = SearchCompletion {
            request_id: self.request_id,
            outcome,
        };

        // The receiver is gone when the application is shutting down
        let _ = self.event_tx.send(AppEvent::SearchCompleted(completion));
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        if !self.reported {
            warn!(
                request_id = self.request_id,
                "Search ended without an outcome"
            );
            self.complete(Err(CatalogError::WorkerAborted));
        }
    }
}
