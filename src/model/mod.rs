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

//! Domain models and core data structures.
//!
//! This module defines the two shapes a book takes inside the application:
//! the loosely structured [`RawRecord`] exactly as the catalog service
//! delivers it, and the display-ready [`BookResult`] the rest of the
//! application works with.
//!
//! Every field of a raw record is optional. The defaulting rules applied when
//! normalizing live in [`BookResult::from_record`].

pub(crate) mod search;

use std::fmt;

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

use crate::catalog::CatalogLinks;

const UNTITLED: &str = "Untitled";
const UNKNOWN_AUTHOR: &str = "Unknown";
const UNKNOWN_YEAR: &str = "N/A";

/// One entry of the `docs` array returned by the catalog search endpoint.
///
/// Fields the application does not use are ignored during decoding, and a
/// field holding a value of an unexpected type reads as absent rather than
/// failing the whole response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub(crate) struct RawRecord {
    #[serde(default, deserialize_with = "lenient")]
    pub(crate) key: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub(crate) title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub(crate) author_name: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub(crate) first_publish_year: Option<i64>,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub(crate) cover_i: Option<i64>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Accepts integers, whole floats such as `1997.0` and numeric strings.
fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    let integer = match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };

    Ok(integer)
}

/// Year of first publication, or the "not available" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PublishYear {
    Known(i64),
    Unknown,
}

impl fmt::Display for PublishYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishYear::Known(year) => write!(f, "{}", year),
            PublishYear::Unknown => f.write_str(UNKNOWN_YEAR),
        }
    }
}

/// A normalized, display-ready book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BookResult {
    /// Unique within a result batch, unless the catalog omitted the key for
    /// two records sharing both title and year.
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) year: PublishYear,
    pub(crate) cover_url: Option<String>,
    /// Catalog page for the work, only known when the record carried a key.
    pub(crate) work_url: Option<String>,
}

impl BookResult {
    /// Normalizes a raw catalog record.
    ///
    /// The defaulting rules are:
    ///
    /// * `title` - the source title when present and non-empty, otherwise
    ///   `"Untitled"`.
    /// * `author` - the first listed author name, otherwise `"Unknown"`.
    /// * `year` - the first publication year, otherwise `"N/A"`.
    /// * `cover_url` - built from the cover identifier when present and
    ///   non-zero, otherwise absent.
    /// * `id` - the source key, otherwise `"<title>-<year>"` using the
    ///   normalized title and an empty string for a missing year.
    ///
    /// This is a pure function of its inputs.
    pub(crate) fn from_record(record: &RawRecord, links: &CatalogLinks) -> Self {
        let title = record
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(UNTITLED)
            .to_string();

        let author = record
            .author_name
            .as_ref()
            .and_then(|names| names.first())
            .map(String::as_str)
            .unwrap_or(UNKNOWN_AUTHOR)
            .to_string();

        let year = record
            .first_publish_year
            .map_or(PublishYear::Unknown, PublishYear::Known);

        // Zero stands for "no cover"
        let cover_url = record
            .cover_i
            .filter(|id| *id != 0)
            .map(|id| links.cover_url(id));

        let id = match &record.key {
            Some(key) => key.clone(),
            None => {
                let year_part = record
                    .first_publish_year
                    .map(|y| y.to_string())
                    .unwrap_or_default();
                format!("{}-{}", title, year_part)
            }
        };

        let work_url = record.key.as_deref().map(|key| links.work_url(key));

        Self {
            id,
            title,
            author,
            year,
            cover_url,
            work_url,
        }
    }
}
