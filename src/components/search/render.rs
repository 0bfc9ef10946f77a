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

//! UI rendering logic for the search view.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use crate::{
    components::{BookGrid, SearchFocus, SearchView},
    model::BookResult,
    render::Render,
    theme::Theme,
};

const PLACEHOLDER: &str = "Search by title (e.g. Harry Potter)";

impl SearchView {
    /// Draws the query input, placing the terminal cursor in it when focused.
    pub(crate) fn draw_search_bar(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let focused = self.focus == SearchFocus::Query;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(focus_style(focused, theme))
            .title(" Title ")
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        let width = inner.width.max(1) as usize;
        let scroll = self.input.visual_scroll(width);

        let paragraph = if self.input.value().is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(theme.placeholder_fg))
        } else {
            Paragraph::new(self.input.value())
                .style(Style::default().fg(theme.text_colour))
                .scroll((0, scroll as u16))
        };

        f.render_widget(paragraph.block(block), area);

        if focused {
            let cursor_x = inner.x + self.input.visual_cursor().saturating_sub(scroll) as u16;
            f.set_cursor_position((cursor_x, inner.y));
        }
    }

    pub(crate) fn draw_results(&mut self, f: &mut Frame, area: Rect, books: &[BookResult], theme: &Theme) {
        let focused = self.focus == SearchFocus::Results;

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(focus_style(focused, theme))
            .title(format!(" Results ({}) ", books.len()));

        let inner = block.inner(area);
        f.render_widget(block, area);

        BookGrid::new(books, &mut self.grid_state, focused).draw(f, inner, theme);
    }
}

fn focus_style(focused: bool, theme: &Theme) -> Style {
    if focused {
        Style::default()
            .fg(theme.accent_colour)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border_colour)
    }
}
