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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and the
//! hexadecimal strings used for terminal emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) text_colour: Color,
    pub(crate) muted_colour: Color,
    pub(crate) placeholder_fg: Color,

    pub(crate) error_fg: Color,
    pub(crate) error_bg: Color,

    pub(crate) cover_fg: Color,
    pub(crate) no_cover_fg: Color,
    pub(crate) card_title_fg: Color,
    pub(crate) card_author_fg: Color,
    pub(crate) card_year_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Violet palette, blue accents.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(36, 24, 58),
            accent_colour: Color::Rgb(102, 126, 234),
            border_colour: Color::Rgb(118, 75, 162),
            text_colour: Color::Rgb(255, 255, 255),
            muted_colour: Color::Rgb(170, 160, 190),
            placeholder_fg: Color::Rgb(130, 120, 150),

            error_fg: Color::Rgb(255, 221, 221),
            error_bg: Color::Rgb(110, 30, 50),

            cover_fg: Color::Rgb(102, 126, 234),
            no_cover_fg: Color::Rgb(200, 200, 200),
            card_title_fg: Color::Rgb(255, 255, 255),
            card_author_fg: Color::Rgb(255, 215, 0),
            card_year_fg: Color::Rgb(170, 160, 190),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// Only `Rgb` colours have a hexadecimal form, anything else yields
    /// `None`.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}
