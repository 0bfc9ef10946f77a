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

//! Bibliographic catalog access.
//!
//! This module talks to the Open Library title search endpoint. The
//! [`CatalogClient`] trait is the seam between the task worker and the
//! network, the [`OpenLibraryClient`] is the real implementation.
//!
//! Cover images and work pages are never fetched here, [`CatalogLinks`] only
//! builds their URLs for the renderer.

use std::time::Duration;

use reqwest::{
    StatusCode,
    blocking::Request,
    header::{ACCEPT, USER_AGENT},
};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{config::AppConfig, model::RawRecord};

#[derive(Debug, Error)]
pub(crate) enum CatalogError {
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("catalog response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("search worker stopped before the request completed")]
    WorkerAborted,
}

/// Performs title searches against a catalog service.
pub(crate) trait CatalogClient: Send + Sync {
    /// Returns the records matching `query`, in the order the service ranked
    /// them. An empty vector means the service found nothing.
    fn search_title(&self, query: &str) -> Result<Vec<RawRecord>, CatalogError>;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    docs: Option<Vec<RawRecord>>,
}

/// Blocking HTTP client for the Open Library search API.
pub(crate) struct OpenLibraryClient {
    http: reqwest::blocking::Client,
    search_url: String,
    user_agent: String,
}

impl OpenLibraryClient {
    /// Creates a client from the application configuration.
    ///
    /// No request timeout is applied unless one is configured.
    pub(crate) fn new(config: &AppConfig) -> Result<Self, CatalogError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.request_timeout_secs.map(Duration::from_secs))
            .build()?;

        Ok(Self {
            http,
            search_url: config.search_url.clone(),
            user_agent: config.user_agent.clone(),
        })
    }

    fn search_request(&self, query: &str) -> Result<Request, CatalogError> {
        let url = title_search_url(&self.search_url, query);

        let request = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, self.user_agent.as_str())
            .build()?;

        Ok(request)
    }
}

impl CatalogClient for OpenLibraryClient {
    fn search_title(&self, query: &str) -> Result<Vec<RawRecord>, CatalogError> {
        let request = self.search_request(query)?;
        debug!(url = %request.url(), "Catalog request");

        let response = self.http.execute(request)?;
        let status = response.status();
        let body = response.text()?;

        decode_response(status, &body)
    }
}

/// Builds the search URL for a title query.
///
/// The query is percent-encoded as given, it is not trimmed.
pub(crate) fn title_search_url(search_url: &str, query: &str) -> String {
    format!("{}?title={}", search_url, urlencoding::encode(query))
}

/// Decodes a response body whatever its status, so an error payload without
/// `docs` reads as "nothing found".
pub(crate) fn decode_response(status: StatusCode, body: &str) -> Result<Vec<RawRecord>, CatalogError> {
    if !status.is_success() {
        warn!(%status, "Catalog returned a non-success status");
    }

    decode_records(body)
}

/// Decodes a search response body into its records.
///
/// A missing or `null` `docs` field yields an empty list, anything that is
/// not a JSON object is a decode error.
pub(crate) fn decode_records(body: &str) -> Result<Vec<RawRecord>, CatalogError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response.docs.unwrap_or_default())
}

/// Builds links to catalog resources that the renderer may hand to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CatalogLinks {
    pub(crate) covers_url: String,
    pub(crate) site_url: String,
}

impl CatalogLinks {
    pub(crate) fn from_config(config: &AppConfig) -> Self {
        Self {
            covers_url: config.covers_url.clone(),
            site_url: config.site_url.clone(),
        }
    }

    /// Medium sized cover image for a cover identifier.
    pub(crate) fn cover_url(&self, cover_id: i64) -> String {
        format!("{}/{}-M.jpg", self.covers_url.trim_end_matches('/'), cover_id)
    }

    /// Catalog page for a work key such as `/works/OL1W`.
    pub(crate) fn work_url(&self, key: &str) -> String {
        format!(
            "{}/{}",
            self.site_url.trim_end_matches('/'),
            key.trim_start_matches('/')
        )
    }
}
