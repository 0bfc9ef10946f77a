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

//! Render the details of the selected book.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};

use crate::{model::BookResult, theme::Theme};

pub(crate) fn draw_details(f: &mut Frame, area: Rect, book: Option<&BookResult>, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_colour))
        .title(" Details ")
        .padding(Padding::horizontal(1));

    let Some(book) = book else {
        f.render_widget(block, area);
        return;
    };

    let label = Style::default()
        .fg(theme.accent_colour)
        .add_modifier(Modifier::BOLD);
    let value = Style::default().fg(theme.text_colour);

    let field = |name: &'static str, text: String| {
        vec![
            Line::from(Span::styled(name, label)),
            Line::from(Span::styled(text, value)),
            Line::from(""),
        ]
    };

    let mut lines = Vec::new();
    lines.extend(field("Title", book.title.clone()));
    lines.extend(field("Author", book.author.clone()));
    lines.extend(field("First published", book.year.to_string()));
    lines.extend(field("Id", book.id.clone()));
    lines.extend(field(
        "Cover",
        book.cover_url.clone().unwrap_or_else(|| "No Cover".to_string()),
    ));
    if let Some(work_url) = &book.work_url {
        lines.extend(field("Catalog page", work_url.clone()));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
