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

const ELLIPSIS: char = '…';

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// Shortens `text` to at most `width` characters, marking the cut with an
/// ellipsis.
///
/// This is used to keep long titles and author names inside a book card.
///
/// # Examples
///
/// ```
/// assert_eq!(ellipsize("The Hobbit", 20), "The Hobbit");
/// assert_eq!(ellipsize("The Hobbit", 6), "The H…");
/// ```
pub(crate) fn ellipsize(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }

    if width == 0 {
        return String::new();
    }

    let mut shortened: String = text.chars().take(width - 1).collect();
    shortened.push(ELLIPSIS);
    shortened
}

/// The spinner frame to show for a tick count.
pub(crate) fn spinner_frame(ticks: u64) -> char {
    SPINNER[(ticks % SPINNER.len() as u64) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ellipsize() {
        assert_eq!(ellipsize("The Hobbit", 20), "The Hobbit");
        assert_eq!(ellipsize("The Hobbit", 10), "The Hobbit");
        assert_eq!(ellipsize("The Hobbit", 6), "The H…");
        assert_eq!(ellipsize("The Hobbit", 1), "…");
        assert_eq!(ellipsize("The Hobbit", 0), "");
    }

    #[test]
    fn test_ellipsize_counts_characters() {
        assert_eq!(ellipsize("Les Misérables", 6), "Les M…");
        assert_eq!(ellipsize("Cien años", 9), "Cien años");
    }

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner_frame(0), '|');
        assert_eq!(spinner_frame(5), '/');
    }
}
