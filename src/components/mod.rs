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

//! Interactive UI components.
//!
//! Each component keeps its own view state (focus, cursor, selection) and
//! reports user intent to the application as events. None of them own the
//! search results, those are borrowed from the search controller when
//! drawing.

mod book_grid;
mod search;

pub(crate) use book_grid::{BookGrid, BookGridAction, BookGridState, BookLink};
pub(crate) use search::{SearchFocus, SearchView};
