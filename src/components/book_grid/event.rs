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

//! Input handling and event processing for the book grid.
//!
//! This module maps raw terminal keyboard events to grid navigation and
//! link actions.

use crossterm::event::{Event, KeyCode};

use crate::components::{BookGridAction, BookGridState, BookLink};

impl BookGridState {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<BookGridAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Char('l') | KeyCode::Right => self.goto_next(),
            KeyCode::Char('h') | KeyCode::Left => self.goto_previous(),
            KeyCode::Char('j') | KeyCode::Down => self.goto_row_below(),
            KeyCode::Char('k') | KeyCode::Up => self.goto_row_above(),
            KeyCode::Char('g') | KeyCode::Home => self.goto_first(),
            KeyCode::Char('G') | KeyCode::End => self.goto_last(),

            KeyCode::Char('o') | KeyCode::Enter => {
                return self.selected.map(|_| BookGridAction::Open(BookLink::Cover));
            }
            KeyCode::Char('w') => {
                return self.selected.map(|_| BookGridAction::Open(BookLink::Work));
            }

            _ => {}
        }

        None
    }
}
