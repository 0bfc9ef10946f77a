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

use tracing::{debug, error, warn};

use crate::{
    App,
    catalog::CatalogError,
    components::BookLink,
    model::search::SearchCompletion,
    tasks::AppTask,
};

pub(super) fn handle_query_changed(app: &mut App, text: String) {
    app.search.set_query(text);
}

pub(super) fn handle_search_triggered(app: &mut App) {
    app.status_message = None;
    app.search_view.grid_state.reset(0);

    let Some(request) = app.search.search() else {
        return;
    };

    let request_id = request.id;
    if let Err(e) = app.task_tx.send(AppTask::Search(request)) {
        // Without a worker the request can never complete, fail it here
        error!("Failed to dispatch search: {}", e);
        app.search.complete(SearchCompletion {
            request_id,
            outcome: Err(CatalogError::WorkerAborted),
        });
    }
}

pub(super) fn handle_search_completed(app: &mut App, completion: SearchCompletion) {
    if app.search.complete(completion) {
        let count = app.search.state().results.len();
        app.search_view.grid_state.reset(count);
    }
}

pub(super) fn handle_open_selected(app: &mut App, link: BookLink) {
    let book = app
        .search_view
        .grid_state
        .selected()
        .and_then(|idx| app.search.state().results.get(idx));

    let Some(book) = book else {
        return;
    };

    let url = match link {
        BookLink::Cover => book.cover_url.clone(),
        BookLink::Work => book.work_url.clone(),
    };

    let Some(url) = url else {
        app.status_message = Some(match link {
            BookLink::Cover => format!("No cover image for \"{}\"", book.title),
            BookLink::Work => format!("No catalog page for \"{}\"", book.title),
        });
        return;
    };

    debug!(%url, "Opening link");
    if let Err(e) = open::that_detached(&url) {
        warn!(%url, error = %e, "Failed to open link");
        app.status_message = Some(format!("Could not open {}", url));
    }
}

pub(super) fn handle_error(app: &mut App, message: String) {
    app.status_message = Some(message);
}

pub(super) fn handle_tick(app: &mut App) {
    app.ticks = app.ticks.wrapping_add(1);
}
