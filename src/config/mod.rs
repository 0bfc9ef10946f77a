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

//! Application configuration.
//!
//! This module manages the application configuration file. Any setting that
//! is missing from the file takes its default value.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "bookfinder";

const LOG_FILE_NAME: &str = "bookfinder.log";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub search_url: String,
    pub covers_url: String,
    pub site_url: String,
    pub user_agent: String,
    pub request_timeout_secs: Option<u64>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            search_url: "https://openlibrary.org/search.json".to_string(),
            covers_url: "https://covers.openlibrary.org/b/id".to_string(),
            site_url: "https://openlibrary.org".to_string(),
            user_agent: format!("bookfinder/{}", env!("CARGO_PKG_VERSION")),
            request_timeout_secs: None,
            log_level: "info".to_string(),
        }
    }
}

pub fn load_config() -> Result<AppConfig, confy::ConfyError> {
    confy::load(CONFIG_NAME, None)
}

/// The log file lives alongside the configuration file.
pub fn log_file_path() -> Result<PathBuf, confy::ConfyError> {
    let config_path = confy::get_configuration_file_path(CONFIG_NAME, None)?;
    Ok(config_path.with_file_name(LOG_FILE_NAME))
}
