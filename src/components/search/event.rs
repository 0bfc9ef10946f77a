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

//! Event routing for the search view.
//!
//! This module implements the application event processor for the search
//! interface. With the query focused, keys edit the title and `Enter`
//! triggers a search. With the results focused, keys go to the book grid.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::{BookGridAction, SearchFocus, SearchView},
    events::{AppEvent, AppEventProcessor},
};

impl AppEventProcessor for SearchView {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        match self.focus {
            SearchFocus::Query => self.process_query_event(event, event_tx),
            SearchFocus::Results => self.process_results_event(event, event_tx),
        }
    }
}

impl SearchView {
    fn process_query_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        let Event::Key(key_event) = event else {
            return Ok(());
        };

        match key_event.code {
            KeyCode::Enter => event_tx.send(AppEvent::SearchTriggered)?,

            KeyCode::Esc => event_tx.send(AppEvent::ExitApplication)?,

            KeyCode::Down => self.focus = SearchFocus::Results,

            _ => {
                // Delegate all other key events to the managed input component.
                let changed = self.input.handle_event(&event);
                if changed.is_some_and(|c| c.value) {
                    event_tx.send(AppEvent::QueryChanged(self.input.value().to_string()))?;
                }
            }
        }

        Ok(())
    }

    fn process_results_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        if let Event::Key(key_event) = event {
            match key_event.code {
                KeyCode::Char('q') => {
                    event_tx.send(AppEvent::ExitApplication)?;
                    return Ok(());
                }
                KeyCode::Esc | KeyCode::Char('/') => {
                    self.focus = SearchFocus::Query;
                    return Ok(());
                }
                _ => {}
            }
        }

        if let Some(BookGridAction::Open(link)) = self.grid_state.process_event(&event) {
            event_tx.send(AppEvent::OpenSelected(link))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::components::BookLink;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn drain(rx: &Receiver<AppEvent>) -> Vec<AppEvent> {
        rx.try_iter().collect()
    }

    #[test]
    fn test_edits_report_query_changes() {
        let (tx, rx) = mpsc::channel();
        let mut view = SearchView::new();

        view.process_event(key(KeyCode::Char('H')), &tx).unwrap();
        view.process_event(key(KeyCode::Char('i')), &tx).unwrap();
        view.process_event(key(KeyCode::Backspace), &tx).unwrap();

        let queries: Vec<String> = drain(&rx)
            .into_iter()
            .filter_map(|e| match e {
                AppEvent::QueryChanged(q) => Some(q),
                _ => None,
            })
            .collect();
        assert_eq!(queries, vec!["H", "Hi", "H"]);
    }

    #[test]
    fn test_cursor_moves_are_not_query_changes() {
        let (tx, rx) = mpsc::channel();
        let mut view = SearchView::new();
        view.process_event(key(KeyCode::Char('a')), &tx).unwrap();
        drain(&rx);

        view.process_event(key(KeyCode::Left), &tx).unwrap();

        assert!(drain(&rx).is_empty());
    }

    #[test]
    fn test_enter_triggers_search() {
        let (tx, rx) = mpsc::channel();
        let mut view = SearchView::new();

        view.process_event(key(KeyCode::Enter), &tx).unwrap();

        assert!(matches!(drain(&rx).as_slice(), [AppEvent::SearchTriggered]));
    }

    #[test]
    fn test_results_focus_routes_to_grid() {
        let (tx, rx) = mpsc::channel();
        let mut view = SearchView::new();
        view.grid_state.reset(3);

        view.process_event(key(KeyCode::Down), &tx).unwrap();
        assert_eq!(view.focus, SearchFocus::Results);

        view.process_event(key(KeyCode::Char('l')), &tx).unwrap();
        assert_eq!(view.grid_state.selected(), Some(1));

        view.process_event(key(KeyCode::Char('w')), &tx).unwrap();
        assert!(matches!(
            drain(&rx).as_slice(),
            [AppEvent::OpenSelected(BookLink::Work)]
        ));

        view.process_event(key(KeyCode::Esc), &tx).unwrap();
        assert_eq!(view.focus, SearchFocus::Query);
        assert!(drain(&rx).is_empty());
    }
}
