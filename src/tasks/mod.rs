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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to keep network requests
//! off the main UI thread. It provides a dedicated worker loop that
//! translates [`AppTask`] requests into catalog calls and broadcasts the
//! results back to the application via [`AppEvent`]s.
//!
//! Only actions that may block, or may take more than a trivial amount of time
//! to process, should be implemented as tasks. Other actions are likely more
//! suited to events.

mod handlers;

use std::{
    sync::{
        Arc,
        mpsc::{Receiver, Sender},
    },
    thread::{self, JoinHandle},
};

use anyhow::Result;
use tracing::{debug, error};

use crate::{catalog::CatalogClient, events::AppEvent, model::search::SearchRequest};

#[derive(Debug)]
pub(crate) enum AppTask {
    Search(SearchRequest),
}

/// Spawns a background thread to process application tasks.
///
/// The worker runs until every sender for `task_rx` has been dropped.
///
/// # Arguments
///
/// * `client` - The catalog client shared by every search.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    client: Arc<dyn CatalogClient>,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let ctx = TaskContext { client, event_tx };

        while let Ok(task) = task_rx.recv() {
            if let Err(e) = handle_task(task, &ctx) {
                error!("Task failed: {:#}", e);
                let _ = ctx.event_tx.send(AppEvent::Error(format!("{:#}", e)));
            }
        }

        debug!("Task worker stopped");
    })
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext {
    client: Arc<dyn CatalogClient>,
    event_tx: Sender<AppEvent>,
}

fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<()> {
    match task {
        AppTask::Search(request) => handlers::search(ctx, request),
    }
}
