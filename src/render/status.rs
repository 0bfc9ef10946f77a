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

//! Render the status and help lines.
//!
//! The status line reflects the search phase: loading, the current error
//! message, or a summary of the results. The help line lists the keys for
//! the focused component.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
};

use crate::{
    App,
    components::SearchFocus,
    model::search::SearchPhase,
    util::format::spinner_frame,
};

const QUERY_HELP: &str = "Enter search  Tab/Down results  Esc quit";
const RESULTS_HELP: &str = "hjkl move  g/G first/last  o cover  w catalog page  Tab/Esc title  q quit";

pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let state = app.search.state();

    let line = match state.phase() {
        SearchPhase::Loading => Line::from(format!("{} Loading...", spinner_frame(app.ticks)))
            .style(Style::default().fg(theme.text_colour)),
        SearchPhase::Error(error) => Line::from(format!(" {} ", error))
            .style(Style::default().fg(theme.error_fg).bg(theme.error_bg)),
        SearchPhase::Results => Line::from(format!("{} books", state.results.len()))
            .style(Style::default().fg(theme.muted_colour)),
        SearchPhase::Idle => Line::from("").style(Style::default()),
    };

    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    f.render_widget(Paragraph::new(line), container[0]);
}

pub(crate) fn draw_help(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    // Messages from the application take over the help line until the next
    // search
    let line = match &app.status_message {
        Some(message) => Line::from(message.as_str()).style(Style::default().fg(theme.error_fg)),
        None => {
            let help = match app.search_view.focus {
                SearchFocus::Query => QUERY_HELP,
                SearchFocus::Results => RESULTS_HELP,
            };
            Line::from(help).style(Style::default().fg(theme.muted_colour))
        }
    };

    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(theme.border_colour)),
        container[0],
    );
}
