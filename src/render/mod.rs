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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every application event. It only reads the search state, all changes to
//! that state go through the search controller.

mod details;
mod status;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
};

use crate::{
    App,
    render::{details::draw_details, status::{draw_help, draw_status}},
    theme::Theme,
};

const TITLE: &str = "Book Finder";

// Narrower terminals give the whole width to the grid
const DETAILS_MIN_TERMINAL_WIDTH: u16 = 100;
const DETAILS_WIDTH: u16 = 38;

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// The screen is split into a title line, the search bar, a status line, the
/// result grid (with a details panel on wide terminals) and a key help line.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the UI
///   to update internal view state (like the grid's column count and scroll
///   position).
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_title(f, outer[0], &app.theme);

    app.search_view.draw_search_bar(f, outer[1], &app.theme);

    draw_status(f, outer[2], app);

    let show_details = area.width >= DETAILS_MIN_TERMINAL_WIDTH;
    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(if show_details { DETAILS_WIDTH } else { 0 }),
        ])
        .split(outer[3]);

    let state = app.search.state();
    app.search_view
        .draw_results(f, main[0], &state.results, &app.theme);

    if show_details {
        let selected = app
            .search_view
            .grid_state
            .selected()
            .and_then(|idx| state.results.get(idx));
        draw_details(f, main[1], selected, &app.theme);
    }

    draw_help(f, outer[4], app);
}

fn draw_title(f: &mut Frame, area: Rect, theme: &Theme) {
    let title = Line::from(TITLE).style(
        Style::default()
            .fg(theme.text_colour)
            .add_modifier(Modifier::BOLD),
    );

    f.render_widget(Paragraph::new(title).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::config::AppConfig;

    fn screen(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_initial_screen() {
        let (task_tx, _task_rx) = mpsc::channel();
        let mut app = App::new(AppConfig::default(), task_tx);

        let screen = screen(&mut app, 120, 30);

        assert!(screen.contains("Book Finder"));
        assert!(screen.contains("Search by title (e.g. Harry Potter)"));
        assert!(screen.contains("Results (0)"));
    }

    #[test]
    fn test_validation_message_is_shown() {
        let (task_tx, _task_rx) = mpsc::channel();
        let mut app = App::new(AppConfig::default(), task_tx);
        app.search.search();

        let screen = screen(&mut app, 80, 24);

        assert!(screen.contains("Please enter a book title."));
    }

    #[test]
    fn test_loading_is_shown() {
        let (task_tx, _task_rx) = mpsc::channel();
        let mut app = App::new(AppConfig::default(), task_tx);
        app.search.set_query("Dune");
        app.search.search();

        let screen = screen(&mut app, 80, 24);

        assert!(screen.contains("Loading..."));
    }
}
