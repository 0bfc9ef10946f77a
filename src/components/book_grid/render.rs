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

//! UI rendering logic for the book grid.
//!
//! This module lays out one card per book, as many per row as the area
//! allows, and scrolls whole rows to keep the selected card visible.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use crate::{
    components::BookGrid, model::BookResult, render::Render, theme::Theme,
    util::format::ellipsize,
};

const CARD_MIN_WIDTH: u16 = 26;

// Borders plus cover, title, author and year lines
const CARD_HEIGHT: u16 = 6;

impl Render for BookGrid<'_> {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        self.draw_grid(f, area, theme);
    }
}

impl BookGrid<'_> {
    fn draw_grid(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let columns = (area.width / CARD_MIN_WIDTH).max(1) as usize;
        self.state.set_columns(columns);

        let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
        let offset_row = self.state.scroll_to_selection(visible_rows);

        let rows = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); visible_rows]).split(area);

        for (r, row_area) in rows.iter().enumerate() {
            let cells =
                Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns]).split(*row_area);

            for (c, cell_area) in cells.iter().enumerate() {
                let idx = (offset_row + r) * columns + c;
                let Some(book) = self.books.get(idx) else {
                    return;
                };

                let selected = self.state.selected() == Some(idx);
                draw_card(f, *cell_area, book, selected, self.focused, theme);
            }
        }
    }
}

fn draw_card(f: &mut Frame, area: Rect, book: &BookResult, selected: bool, focused: bool, theme: &Theme) {
    let border_style = match (selected, focused) {
        (true, true) => Style::default()
            .fg(theme.accent_colour)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(theme.text_colour),
        _ => Style::default().fg(theme.border_colour),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    // Borders and padding take two columns each side
    let width = area.width.saturating_sub(4) as usize;

    let cover = match book.cover_url {
        Some(_) => Line::from("[ cover ]").style(Style::default().fg(theme.cover_fg)),
        None => Line::from("No Cover").style(
            Style::default()
                .fg(theme.no_cover_fg)
                .add_modifier(Modifier::BOLD),
        ),
    };

    let lines = vec![
        cover,
        Line::from(ellipsize(&book.title, width)).style(
            Style::default()
                .fg(theme.card_title_fg)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(ellipsize(&book.author, width)).style(Style::default().fg(theme.card_author_fg)),
        Line::from(book.year.to_string()).style(Style::default().fg(theme.card_year_fg)),
    ];

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);

    f.render_widget(card, area);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::{
        catalog::CatalogLinks,
        components::BookGridState,
        model::RawRecord,
    };

    fn books(n: usize) -> Vec<BookResult> {
        let links = CatalogLinks {
            covers_url: "https://covers.openlibrary.org/b/id".to_string(),
            site_url: "https://openlibrary.org".to_string(),
        };
        (0..n)
            .map(|i| {
                let record = RawRecord {
                    title: Some(format!("Book {}", i)),
                    cover_i: if i % 2 == 0 { Some(i as i64 + 1) } else { None },
                    ..Default::default()
                };
                BookResult::from_record(&record, &links)
            })
            .collect()
    }

    fn render(books: &[BookResult], state: &mut BookGridState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                BookGrid::new(books, state, true).draw(f, area, &Theme::default());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_columns_follow_width() {
        let books = books(4);
        let mut state = BookGridState::new();
        state.reset(books.len());

        render(&books, &mut state, 80, 12);
        state.process_event(&crossterm::event::Event::Key(
            crossterm::event::KeyEvent::new(
                crossterm::event::KeyCode::Down,
                crossterm::event::KeyModifiers::NONE,
            ),
        ));

        // 80 columns fit three cards, so down moves three books along
        assert_eq!(state.selected(), Some(3));
    }

    #[test]
    fn test_cards_show_book_fields() {
        let books = books(2);
        let mut state = BookGridState::new();
        state.reset(books.len());

        let screen = render(&books, &mut state, 60, 6);

        assert!(screen.contains("Book 0"));
        assert!(screen.contains("Book 1"));
        assert!(screen.contains("[ cover ]"));
        assert!(screen.contains("No Cover"));
        assert!(screen.contains("Unknown"));
        assert!(screen.contains("N/A"));
    }

    #[test]
    fn test_scrolls_to_selected_row() {
        let books = books(6);
        let mut state = BookGridState::new();
        state.reset(books.len());

        // One card per row, room for a single row
        state.set_columns(1);
        for _ in 0..5 {
            state.process_event(&crossterm::event::Event::Key(
                crossterm::event::KeyEvent::new(
                    crossterm::event::KeyCode::Right,
                    crossterm::event::KeyModifiers::NONE,
                ),
            ));
        }
        let screen = render(&books, &mut state, 30, 6);

        assert!(screen.contains("Book 5"));
        assert!(!screen.contains("Book 0"));
    }
}
