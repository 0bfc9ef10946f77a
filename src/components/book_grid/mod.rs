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

//! Interactive book grid widget and state management.
//!
//! This module provides a grid of book cards. It separates persistent state
//! (`BookGridState`) from the transient widget view (`BookGrid`), which
//! borrows the books to draw for a single frame.
//!
//! The number of columns depends on the width of the area last drawn into,
//! so row navigation always follows what is on screen.

mod event;
mod render;

use crate::model::BookResult;

/// An external resource of the selected book the user asked to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BookLink {
    Cover,
    Work,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BookGridAction {
    Open(BookLink),
}

#[derive(Debug)]
pub(crate) struct BookGridState {
    len: usize,
    selected: Option<usize>,
    columns: usize,
    offset_row: usize,
}

impl BookGridState {
    pub(crate) fn new() -> Self {
        Self {
            len: 0,
            selected: None,
            columns: 1,
            offset_row: 0,
        }
    }

    /// Prepares the grid for a fresh list of `len` books, selecting the first.
    pub(crate) fn reset(&mut self, len: usize) {
        self.len = len;
        self.selected = if len > 0 { Some(0) } else { None };
        self.offset_row = 0;
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub(crate) fn set_columns(&mut self, columns: usize) {
        self.columns = columns.max(1);
    }

    /// Adjusts the first visible row so the selection stays on screen, and
    /// returns it.
    pub(crate) fn scroll_to_selection(&mut self, visible_rows: usize) -> usize {
        let visible_rows = visible_rows.max(1);

        if let Some(idx) = self.selected {
            let row = idx / self.columns;
            if row < self.offset_row {
                self.offset_row = row;
            } else if row >= self.offset_row + visible_rows {
                self.offset_row = row + 1 - visible_rows;
            }
        } else {
            self.offset_row = 0;
        }

        self.offset_row
    }

    fn goto_next(&mut self) {
        if let Some(i) = self.selected {
            if i + 1 < self.len {
                self.selected = Some(i + 1);
            }
        }
    }

    fn goto_previous(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some(i.saturating_sub(1));
        }
    }

    fn goto_row_below(&mut self) {
        if let Some(i) = self.selected {
            if i + self.columns < self.len {
                self.selected = Some(i + self.columns);
            }
        }
    }

    fn goto_row_above(&mut self) {
        if let Some(i) = self.selected {
            if i >= self.columns {
                self.selected = Some(i - self.columns);
            }
        }
    }

    fn goto_first(&mut self) {
        if self.len > 0 {
            self.selected = Some(0);
        }
    }

    fn goto_last(&mut self) {
        if self.len > 0 {
            self.selected = Some(self.len - 1);
        }
    }
}

/// A frame-lived view of the grid over a slice of books.
pub(crate) struct BookGrid<'a> {
    books: &'a [BookResult],
    state: &'a mut BookGridState,
    focused: bool,
}

impl<'a> BookGrid<'a> {
    pub(crate) fn new(books: &'a [BookResult], state: &'a mut BookGridState, focused: bool) -> Self {
        Self {
            books,
            state,
            focused,
        }
    }
}
