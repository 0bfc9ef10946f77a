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

//! Terminal emulator background colour control.
//!
//! These functions use OSC (Operating System Command) escape sequences, which
//! most modern terminals (XTerm, iTerm2, Alacritty, Kitty) support. Terminals
//! that do not understand them ignore the sequence.

use std::io::{self, Write};

use crossterm::{execute, style::Print};

/// Sets the terminal background colour using an OSC 11 escape sequence.
///
/// # Arguments
///
/// * `out` - Where to write the sequence, normally `stdout`.
/// * `hex_colour` - The colour as a hex string (e.g., `"#24183a"`).
pub(crate) fn set_terminal_bg(out: &mut impl Write, hex_colour: &str) -> io::Result<()> {
    execute!(out, Print(format!("\x1b]11;{}\x07", hex_colour)))
}

/// Resets the terminal background to the user's own colour with OSC 111.
pub(crate) fn reset_terminal_bg(out: &mut impl Write) -> io::Result<()> {
    execute!(out, Print("\x1b]111\x07"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_sequences() {
        let mut out = Vec::new();

        set_terminal_bg(&mut out, "#24183a").unwrap();
        reset_terminal_bg(&mut out).unwrap();

        assert_eq!(out, b"\x1b]11;#24183a\x07\x1b]111\x07");
    }
}
