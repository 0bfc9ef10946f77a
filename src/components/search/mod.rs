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

//! Search view: the title input and the result grid.
//!
//! This module coordinates keyboard focus between the query input and the
//! [`BookGridState`], turning edits and the search key into application
//! events.

mod event;
mod render;

use tui_input::Input;

use crate::components::BookGridState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchFocus {
    Query,
    Results,
}

pub(crate) struct SearchView {
    pub(crate) input: Input,
    pub(crate) grid_state: BookGridState,
    pub(crate) focus: SearchFocus,
}

impl SearchView {
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
            grid_state: BookGridState::new(),
            focus: SearchFocus::Query,
        }
    }

    pub(crate) fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            SearchFocus::Query => SearchFocus::Results,
            SearchFocus::Results => SearchFocus::Query,
        };
    }
}
